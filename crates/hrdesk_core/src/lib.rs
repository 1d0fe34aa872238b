//! Core persistence for HR desk: departments, employees and their
//! performance reviews on SQLite.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::{Department, DepartmentId, DepartmentValidationError};
pub use model::employee::{Employee, EmployeeId, EmployeeLookup, EmployeeValidationError};
pub use model::review::{Review, ReviewId, ReviewValidationError, MIN_REVIEW_YEAR};
pub use repo::department_repo::{department_from_row, SqliteDepartmentRepository};
pub use repo::employee_repo::{employee_from_row, SqliteEmployeeRepository};
pub use repo::registry::ReviewRegistry;
pub use repo::review_repo::{ReviewRepository, ReviewRow, SqliteReviewRepository};
pub use repo::{RepoError, RepoResult};

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
