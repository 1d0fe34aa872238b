//! Review domain model.
//!
//! # Responsibility
//! - Hold one performance review written for an employee.
//! - Enforce attribute contracts on construction and on every mutation.
//!
//! # Invariants
//! - `year >= MIN_REVIEW_YEAR`.
//! - `summary` is non-empty.
//! - `employee_id` resolved to an existing employee when it was assigned.
//! - A failed setter leaves the previous value untouched.

use crate::model::employee::{EmployeeId, EmployeeLookup};
use crate::repo::RepoResult;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// SQLite rowid of a `reviews` row.
pub type ReviewId = i64;

/// Earliest accepted review year (inclusive).
pub const MIN_REVIEW_YEAR: i64 = 2000;

/// Attribute contract violations raised by [`Review`] setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewValidationError {
    InvalidYear,
    InvalidSummary,
    InvalidEmployeeId,
}

impl Display for ReviewValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear => write!(f, "Year must be an integer >= {MIN_REVIEW_YEAR}"),
            Self::InvalidSummary => write!(f, "Summary must be a non-empty string"),
            Self::InvalidEmployeeId => write!(
                f,
                "employee_id must be an integer corresponding to an existing employee"
            ),
        }
    }
}

impl Error for ReviewValidationError {}

/// Performance review mirrored from one `reviews` row.
///
/// Fields are private so that every write goes through a validating setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    id: Option<ReviewId>,
    year: i64,
    summary: String,
    employee_id: EmployeeId,
}

impl Review {
    /// Builds an unsaved review.
    ///
    /// # Errors
    /// - `RepoError::Validation` when any attribute contract fails.
    /// - Storage errors from the employee lookup, unchanged.
    pub fn new(
        year: i64,
        summary: impl Into<String>,
        employee_id: EmployeeId,
        employees: &dyn EmployeeLookup,
    ) -> RepoResult<Self> {
        Self::with_id(None, year, summary, employee_id, employees)
    }

    /// Builds a review carrying an existing row id.
    ///
    /// Used by row mapping; validates exactly like [`Review::new`].
    pub fn with_id(
        id: Option<ReviewId>,
        year: i64,
        summary: impl Into<String>,
        employee_id: EmployeeId,
        employees: &dyn EmployeeLookup,
    ) -> RepoResult<Self> {
        let year = check_year(year)?;
        let summary = check_summary(summary.into())?;
        check_employee_id(employee_id, employees)?;

        Ok(Self {
            id,
            year,
            summary,
            employee_id,
        })
    }

    pub fn id(&self) -> Option<ReviewId> {
        self.id
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    /// Returns whether this value is backed by a row.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_year(&mut self, year: i64) -> Result<(), ReviewValidationError> {
        self.year = check_year(year)?;
        Ok(())
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) -> Result<(), ReviewValidationError> {
        self.summary = check_summary(summary.into())?;
        Ok(())
    }

    /// Reassigns the reviewed employee after confirming it exists.
    ///
    /// `update` never writes this column; the new value only reaches storage
    /// through `save`.
    pub fn set_employee_id(
        &mut self,
        employee_id: EmployeeId,
        employees: &dyn EmployeeLookup,
    ) -> RepoResult<()> {
        check_employee_id(employee_id, employees)?;
        self.employee_id = employee_id;
        Ok(())
    }

    pub(crate) fn set_id(&mut self, id: Option<ReviewId>) {
        self.id = id;
    }
}

impl Display for Review {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Review {id}: ")?,
            None => write!(f, "<Review None: ")?,
        }
        write!(
            f,
            "{}, {}, Employee: {}>",
            self.year, self.summary, self.employee_id
        )
    }
}

fn check_year(year: i64) -> Result<i64, ReviewValidationError> {
    if year >= MIN_REVIEW_YEAR {
        Ok(year)
    } else {
        Err(ReviewValidationError::InvalidYear)
    }
}

fn check_summary(summary: String) -> Result<String, ReviewValidationError> {
    if summary.is_empty() {
        Err(ReviewValidationError::InvalidSummary)
    } else {
        Ok(summary)
    }
}

fn check_employee_id(employee_id: EmployeeId, employees: &dyn EmployeeLookup) -> RepoResult<()> {
    match employees.find_employee(employee_id)? {
        Some(_) => Ok(()),
        None => Err(ReviewValidationError::InvalidEmployeeId.into()),
    }
}
