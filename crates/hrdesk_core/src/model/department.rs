//! Department domain model.
//!
//! # Invariants
//! - `name` and `location` are non-empty once `validate()` passes.
//! - `id` is `None` until the row is inserted.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// SQLite rowid of a `departments` row.
pub type DepartmentId = i64;

/// Organizational unit employees belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub id: Option<DepartmentId>,
    pub name: String,
    pub location: String,
}

/// Validation failures for [`Department`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentValidationError {
    EmptyName,
    EmptyLocation,
}

impl Display for DepartmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name must be a non-empty string"),
            Self::EmptyLocation => write!(f, "Location must be a non-empty string"),
        }
    }
}

impl Error for DepartmentValidationError {}

impl Department {
    /// Creates an unsaved department.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DepartmentValidationError> {
        if self.name.is_empty() {
            return Err(DepartmentValidationError::EmptyName);
        }
        if self.location.is_empty() {
            return Err(DepartmentValidationError::EmptyLocation);
        }
        Ok(())
    }
}
