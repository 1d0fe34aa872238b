//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `hrdesk_core` linkage and schema bootstrap without a database file.
//! - Keep output deterministic for quick local sanity checks.

use hrdesk_core::db::open_db_in_memory;
use hrdesk_core::{
    ReviewRepository, SqliteDepartmentRepository, SqliteEmployeeRepository,
    SqliteReviewRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("hrdesk_core ping={}", hrdesk_core::ping());
    println!("hrdesk_core version={}", hrdesk_core::core_version());

    match bootstrap_schema() {
        Ok(()) => {
            println!("hrdesk_core schema=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("hrdesk_core schema=error error={err}");
            ExitCode::FAILURE
        }
    }
}

fn bootstrap_schema() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    SqliteDepartmentRepository::new(&conn).create_table()?;
    SqliteEmployeeRepository::new(&conn).create_table()?;
    SqliteReviewRepository::new(&conn).create_table()?;
    Ok(())
}
