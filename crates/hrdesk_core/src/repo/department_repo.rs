//! Department persistence over the `departments` table.
//!
//! # Invariants
//! - `save` validates before inserting.
//! - `department_from_row` rejects rows that fail validation.

use crate::model::department::{Department, DepartmentId};
use crate::repo::RepoResult;
use log::debug;
use rusqlite::{params, Connection, Row};

pub(crate) const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name, location FROM departments";

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Creates `departments` when absent.
    pub fn create_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS departments (
            id INTEGER PRIMARY KEY,
            name TEXT,
            location TEXT);",
        )?;
        Ok(())
    }

    pub fn drop_table(&self) -> RepoResult<()> {
        self.conn
            .execute_batch("DROP TABLE IF EXISTS departments;")?;
        Ok(())
    }

    /// Inserts `department` as a new row and assigns its id.
    pub fn save(&self, department: &mut Department) -> RepoResult<DepartmentId> {
        department.validate()?;

        self.conn.execute(
            "INSERT INTO departments (name, location) VALUES (?1, ?2);",
            params![department.name.as_str(), department.location.as_str()],
        )?;

        let id = self.conn.last_insert_rowid();
        department.id = Some(id);
        debug!("event=department_save module=repo status=ok department_id={id}");
        Ok(id)
    }

    pub fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(department_from_row(row)?));
        }

        Ok(None)
    }

    pub fn get_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self.conn.prepare(DEPARTMENT_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            departments.push(department_from_row(row)?);
        }

        Ok(departments)
    }

    /// Deletes the row behind `department` and clears its id.
    pub fn delete(&self, department: &mut Department) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM departments WHERE id = ?1;", [department.id])?;
        department.id = None;
        Ok(())
    }
}

/// Maps a `(id, name, location)` row into a validated [`Department`].
pub fn department_from_row(row: &Row<'_>) -> RepoResult<Department> {
    let department = Department {
        id: Some(row.get("id")?),
        name: row.get::<_, Option<String>>("name")?.unwrap_or_default(),
        location: row.get::<_, Option<String>>("location")?.unwrap_or_default(),
    };
    department.validate()?;
    Ok(department)
}
