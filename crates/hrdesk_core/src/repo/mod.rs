//! Repository layer: SQLite persistence for departments, employees and
//! reviews.
//!
//! # Responsibility
//! - Own table DDL and query shapes for each entity.
//! - Map rows back into validated domain values.
//! - Expose one error type for validation, storage and registry failures.
//!
//! # Invariants
//! - Write paths validate before any SQL mutation.
//! - Read paths reject rows that no longer satisfy the model contracts.

use crate::db::DbError;
use crate::model::department::DepartmentValidationError;
use crate::model::employee::EmployeeValidationError;
use crate::model::review::{ReviewId, ReviewValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_repo;
pub mod employee_repo;
pub mod registry;
pub mod review_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ReviewValidationError),
    EmployeeValidation(EmployeeValidationError),
    DepartmentValidation(DepartmentValidationError),
    Db(DbError),
    /// `delete` found no registry entry for the review id.
    NotRegistered(Option<ReviewId>),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::EmployeeValidation(err) => write!(f, "{err}"),
            Self::DepartmentValidation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotRegistered(Some(id)) => write!(f, "review {id} is not registered"),
            Self::NotRegistered(None) => write!(f, "unsaved review is not registered"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::EmployeeValidation(err) => Some(err),
            Self::DepartmentValidation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotRegistered(_) => None,
        }
    }
}

impl From<ReviewValidationError> for RepoError {
    fn from(value: ReviewValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::EmployeeValidation(value)
    }
}

impl From<DepartmentValidationError> for RepoError {
    fn from(value: DepartmentValidationError) -> Self {
        Self::DepartmentValidation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
