//! Review repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Own the `reviews` table DDL and CRUD statements.
//! - Keep the [`ReviewRegistry`] in step with `save`/`delete`.
//! - Follow `employee_id` to employee and department rows.
//!
//! # Invariants
//! - Every statement runs in autocommit mode; there is no open transaction
//!   between calls.
//! - `update` writes `year` and `summary` only.
//! - Rows are mapped through the same validation as `Review::new`.

use crate::model::department::Department;
use crate::model::employee::{Employee, EmployeeId};
use crate::model::review::{Review, ReviewId, ReviewValidationError};
use crate::repo::department_repo::{department_from_row, DEPARTMENT_SELECT_SQL};
use crate::repo::employee_repo::{
    employee_from_row, SqliteEmployeeRepository, EMPLOYEE_SELECT_SQL,
};
use crate::repo::registry::ReviewRegistry;
use crate::repo::{RepoError, RepoResult};
use log::{debug, warn};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};

const REVIEW_SELECT_SQL: &str = "SELECT id, year, summary, employee_id FROM reviews";

const CREATE_REVIEWS_TABLE_SQL: &str = "
            CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY,
            year INT,
            summary TEXT,
            employee_id INTEGER,
            FOREIGN KEY (employee_id) REFERENCES employee(id))
        ";

/// Raw `reviews` row before validation.
///
/// `INT`/`TEXT` affinity does not stop other storage classes from landing in
/// a column. Anything other than the expected class (NULL, non-numeric text,
/// a real) is read as `None` so that it surfaces as a validation error in
/// [`SqliteReviewRepository::instance_from_db`] instead of a type error here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub id: ReviewId,
    pub year: Option<i64>,
    pub summary: Option<String>,
    pub employee_id: Option<EmployeeId>,
}

impl ReviewRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            year: integer_column(row, "year")?,
            summary: text_column(row, "summary")?,
            employee_id: integer_column(row, "employee_id")?,
        })
    }
}

fn integer_column(row: &Row<'_>, column: &str) -> rusqlite::Result<Option<i64>> {
    match row.get_ref(column)? {
        ValueRef::Integer(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

fn text_column(row: &Row<'_>, column: &str) -> rusqlite::Result<Option<String>> {
    match row.get_ref(column)? {
        ValueRef::Text(bytes) => Ok(Some(String::from_utf8_lossy(bytes).into_owned())),
        _ => Ok(None),
    }
}

/// Repository interface for review CRUD operations.
pub trait ReviewRepository {
    fn create_table(&self) -> RepoResult<()>;
    fn drop_table(&self) -> RepoResult<()>;
    fn save(&mut self, review: &mut Review) -> RepoResult<ReviewId>;
    fn create(&mut self, year: i64, summary: &str, employee_id: EmployeeId) -> RepoResult<Review>;
    fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>>;
    fn update(&self, review: &Review) -> RepoResult<()>;
    fn delete(&mut self, review: &mut Review) -> RepoResult<()>;
    fn get_all(&self) -> RepoResult<Vec<Review>>;
}

/// SQLite-backed review repository.
///
/// Holds the identity registry for reviews it has saved. Employee ids are
/// checked against the `employees` table on the same connection.
pub struct SqliteReviewRepository<'conn> {
    conn: &'conn Connection,
    employee_lookup: SqliteEmployeeRepository<'conn>,
    registry: ReviewRegistry,
}

impl<'conn> SqliteReviewRepository<'conn> {
    /// Creates a repository with an empty registry.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_registry(conn, ReviewRegistry::new())
    }

    /// Creates a repository that keeps registering into `registry`.
    pub fn with_registry(conn: &'conn Connection, registry: ReviewRegistry) -> Self {
        Self {
            conn,
            employee_lookup: SqliteEmployeeRepository::new(conn),
            registry,
        }
    }

    pub fn registry(&self) -> &ReviewRegistry {
        &self.registry
    }

    /// Consumes the repository and hands its registry back to the caller.
    pub fn into_registry(self) -> ReviewRegistry {
        self.registry
    }

    /// Builds an unsaved review validated against this connection's employees.
    pub fn build(
        &self,
        year: i64,
        summary: impl Into<String>,
        employee_id: EmployeeId,
    ) -> RepoResult<Review> {
        Review::new(year, summary, employee_id, &self.employee_lookup)
    }

    /// Maps a raw row into a review, running every attribute contract.
    ///
    /// Does not touch the registry. A row written while valid can fail here
    /// later, e.g. once its employee has been deleted.
    pub fn instance_from_db(&self, row: ReviewRow) -> RepoResult<Review> {
        let year = row.year.ok_or(ReviewValidationError::InvalidYear)?;
        let summary = row.summary.ok_or(ReviewValidationError::InvalidSummary)?;
        let employee_id = row
            .employee_id
            .ok_or(ReviewValidationError::InvalidEmployeeId)?;

        Review::with_id(Some(row.id), year, summary, employee_id, &self.employee_lookup)
    }

    /// Employees whose `id` equals `review.employee_id` (zero or one).
    pub fn employees(&self, review: &Review) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([review.employee_id()])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(employee_from_row(row)?);
        }

        Ok(employees)
    }

    /// Departments whose `id` equals `review.employee_id`.
    ///
    /// This compares a department id with an employee id and only matches
    /// when the two happen to coincide. Kept as-is for compatibility; use
    /// [`Self::departments_via_employee`] for the department the reviewed
    /// employee belongs to.
    pub fn departments(&self, review: &Review) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([review.employee_id()])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            departments.push(department_from_row(row)?);
        }

        Ok(departments)
    }

    /// Departments reached through `employees.department_id` of the
    /// reviewed employee (zero or one).
    pub fn departments_via_employee(&self, review: &Review) -> RepoResult<Vec<Department>> {
        let mut stmt = self.conn.prepare(
            "SELECT d.id AS id, d.name AS name, d.location AS location
             FROM departments d
             JOIN employees e ON e.department_id = d.id
             WHERE e.id = ?1;",
        )?;
        let mut rows = stmt.query([review.employee_id()])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            departments.push(department_from_row(row)?);
        }

        Ok(departments)
    }
}

impl ReviewRepository for SqliteReviewRepository<'_> {
    fn create_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(CREATE_REVIEWS_TABLE_SQL)?;
        Ok(())
    }

    fn drop_table(&self) -> RepoResult<()> {
        self.conn.execute_batch("DROP TABLE IF EXISTS reviews;")?;
        Ok(())
    }

    /// Inserts a new row for `review`, assigns its id and registers it.
    ///
    /// Calling this twice inserts two rows; the value ends up pointing at the
    /// second one and the first registry entry stays behind.
    fn save(&mut self, review: &mut Review) -> RepoResult<ReviewId> {
        self.conn.execute(
            "INSERT INTO reviews (year, summary, employee_id) VALUES (?1, ?2, ?3);",
            params![review.year(), review.summary(), review.employee_id()],
        )?;

        let id = self.conn.last_insert_rowid();
        review.set_id(Some(id));
        self.registry.insert(id, review.clone());
        debug!("event=review_save module=repo status=ok review_id={id}");
        Ok(id)
    }

    fn create(&mut self, year: i64, summary: &str, employee_id: EmployeeId) -> RepoResult<Review> {
        let mut review = self.build(year, summary, employee_id)?;
        self.save(&mut review)?;
        Ok(review)
    }

    fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REVIEW_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            let raw = ReviewRow::from_row(row)?;
            return Ok(Some(self.instance_from_db(raw)?));
        }

        Ok(None)
    }

    /// Writes `year` and `summary` to the row matching `review.id`.
    ///
    /// Matching no row (unsaved value or row already gone) is a no-op.
    fn update(&self, review: &Review) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE reviews SET year = ?1, summary = ?2 WHERE id = ?3;",
            params![review.year(), review.summary(), review.id()],
        )?;

        if changed == 0 {
            warn!(
                "event=review_update module=repo status=noop review_id={:?}",
                review.id()
            );
        }

        Ok(())
    }

    /// Deletes the row matching `review.id`, then drops its registry entry
    /// and clears the id.
    ///
    /// # Errors
    /// - `RepoError::NotRegistered` when the id has no registry entry, e.g.
    ///   the value came from `find_by_id`. The row delete has already been
    ///   committed at that point and `review.id` is left as it was.
    fn delete(&mut self, review: &mut Review) -> RepoResult<()> {
        let id = review.id();
        self.conn
            .execute("DELETE FROM reviews WHERE id = ?1;", [id])?;

        let registered = id.and_then(|id| self.registry.remove(id));
        if registered.is_none() {
            warn!("event=review_delete module=repo status=unregistered review_id={id:?}");
            return Err(RepoError::NotRegistered(id));
        }

        review.set_id(None);
        debug!("event=review_delete module=repo status=ok review_id={id:?}");
        Ok(())
    }

    fn get_all(&self) -> RepoResult<Vec<Review>> {
        let mut stmt = self.conn.prepare(REVIEW_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut reviews = Vec::new();

        while let Some(row) = rows.next()? {
            let raw = ReviewRow::from_row(row)?;
            reviews.push(self.instance_from_db(raw)?);
        }

        Ok(reviews)
    }
}
