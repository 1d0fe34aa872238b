//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas required by core behavior.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=OFF`.
//! - Returned connections wait up to `BUSY_TIMEOUT` on a locked database.

use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) a SQLite database file.
///
/// The `reviews` table declares `REFERENCES employee(id)` while employees
/// live in `employees`; with enforcement on every review insert would fail,
/// so the returned connection keeps `foreign_keys` off.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let conn = Connection::open(path).and_then(|conn| {
        configure_connection(&conn)?;
        Ok(conn)
    });
    finish_open(conn, "file", started_at)
}

/// Opens an in-memory SQLite database with the same settings as [`open_db`].
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = Connection::open_in_memory().and_then(|conn| {
        configure_connection(&conn)?;
        Ok(conn)
    });
    finish_open(conn, "memory", started_at)
}

fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
    conn.busy_timeout(BUSY_TIMEOUT)
}

fn finish_open(
    result: rusqlite::Result<Connection>,
    mode: &str,
    started_at: Instant,
) -> DbResult<Connection> {
    match result {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_open_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}
