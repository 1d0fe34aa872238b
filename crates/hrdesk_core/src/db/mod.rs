//! SQLite connection bootstrap for HR desk core.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections with the pragmas core expects.
//! - Provide the storage error type shared by every repository.
//!
//! # Invariants
//! - Tables are owned by their repositories (`create_table`/`drop_table`);
//!   opening a connection never creates schema.
//! - Foreign key enforcement stays off, see [`open_db`].

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage-layer failure. SQLite errors are carried unwrapped.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
