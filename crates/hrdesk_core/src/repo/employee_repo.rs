//! Employee persistence over the `employees` table.
//!
//! # Responsibility
//! - Persist employees referenced by reviews.
//! - Serve [`EmployeeLookup`] so review setters can check `employee_id`.
//!
//! # Invariants
//! - `save` validates before inserting.
//! - `employee_from_row` rejects rows that fail validation.

use crate::model::employee::{Employee, EmployeeId, EmployeeLookup};
use crate::repo::RepoResult;
use log::debug;
use rusqlite::{params, Connection, Row};

pub(crate) const EMPLOYEE_SELECT_SQL: &str =
    "SELECT id, name, job_title, department_id FROM employees";

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Creates `employees` when absent.
    pub fn create_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY,
            name TEXT,
            job_title TEXT,
            department_id INTEGER,
            FOREIGN KEY (department_id) REFERENCES departments(id));",
        )?;
        Ok(())
    }

    pub fn drop_table(&self) -> RepoResult<()> {
        self.conn.execute_batch("DROP TABLE IF EXISTS employees;")?;
        Ok(())
    }

    /// Inserts `employee` as a new row and assigns its id.
    pub fn save(&self, employee: &mut Employee) -> RepoResult<EmployeeId> {
        employee.validate()?;

        self.conn.execute(
            "INSERT INTO employees (name, job_title, department_id) VALUES (?1, ?2, ?3);",
            params![
                employee.name.as_str(),
                employee.job_title.as_str(),
                employee.department_id,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        employee.id = Some(id);
        debug!("event=employee_save module=repo status=ok employee_id={id}");
        Ok(id)
    }

    pub fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(employee_from_row(row)?));
        }

        Ok(None)
    }

    pub fn get_all(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(EMPLOYEE_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(employee_from_row(row)?);
        }

        Ok(employees)
    }

    /// Deletes the row behind `employee` and clears its id.
    ///
    /// Reviews pointing at the employee are left in place; they fail
    /// validation the next time they are loaded.
    pub fn delete(&self, employee: &mut Employee) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM employees WHERE id = ?1;", [employee.id])?;
        employee.id = None;
        Ok(())
    }
}

impl EmployeeLookup for SqliteEmployeeRepository<'_> {
    fn find_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.find_by_id(id)
    }
}

/// Maps a `(id, name, job_title, department_id)` row into a validated
/// [`Employee`].
pub fn employee_from_row(row: &Row<'_>) -> RepoResult<Employee> {
    let employee = Employee {
        id: Some(row.get("id")?),
        name: row.get::<_, Option<String>>("name")?.unwrap_or_default(),
        job_title: row
            .get::<_, Option<String>>("job_title")?
            .unwrap_or_default(),
        department_id: row.get("department_id")?,
    };
    employee.validate()?;
    Ok(employee)
}
