//! Employee domain model and the lookup contract reviews validate against.
//!
//! # Responsibility
//! - Define the employee record referenced by `reviews.employee_id`.
//! - Define [`EmployeeLookup`], the only employee capability a review needs.
//!
//! # Invariants
//! - `name` and `job_title` are non-empty once `validate()` passes.
//! - `department_id` is optional; it is not checked against `departments`.

use crate::model::department::DepartmentId;
use crate::repo::RepoResult;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// SQLite rowid of an `employees` row.
pub type EmployeeId = i64;

/// Staff member that reviews are written for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: Option<EmployeeId>,
    pub name: String,
    pub job_title: String,
    pub department_id: Option<DepartmentId>,
}

/// Validation failures for [`Employee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeValidationError {
    EmptyName,
    EmptyJobTitle,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name must be a non-empty string"),
            Self::EmptyJobTitle => write!(f, "job_title must be a non-empty string"),
        }
    }
}

impl Error for EmployeeValidationError {}

impl Employee {
    /// Creates an unsaved employee.
    pub fn new(
        name: impl Into<String>,
        job_title: impl Into<String>,
        department_id: Option<DepartmentId>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            job_title: job_title.into(),
            department_id,
        }
    }

    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.name.is_empty() {
            return Err(EmployeeValidationError::EmptyName);
        }
        if self.job_title.is_empty() {
            return Err(EmployeeValidationError::EmptyJobTitle);
        }
        Ok(())
    }
}

/// Resolves employee ids for review validation.
///
/// Returning `Ok(None)` means "no such employee"; storage failures are
/// reported as errors and never folded into `None`.
pub trait EmployeeLookup {
    fn find_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
}
