//! Relationship navigation between employees and departments
//!
//! Navigation is lazy: every call issues its own lookup. Walking a list of
//! employees and asking each for its department therefore costs one statement
//! per employee on top of the list query. `queries::roster` has the eager and
//! joined alternatives.

use crate::errors::Result;
use crate::repo::SqliteRepo;
use roster_core::model::{Department, Employee};
use rusqlite::Connection;

/// Employee → Department (many-to-one, optional)
pub trait EmployeeRelations {
    /// Load the department this employee belongs to, if any
    ///
    /// Returns `None` when `dept_code` is NULL.
    fn department(&self, conn: &Connection) -> Result<Option<Department>>;
}

/// Department → Employees (one-to-many back-reference)
pub trait DepartmentRelations {
    /// Load the employees of this department, ordered by `emp_id`
    fn employees(&self, conn: &Connection) -> Result<Vec<Employee>>;
}

impl EmployeeRelations for Employee {
    fn department(&self, conn: &Connection) -> Result<Option<Department>> {
        match &self.dept_code {
            Some(code) => SqliteRepo::get_department(conn, code),
            None => Ok(None),
        }
    }
}

impl DepartmentRelations for Department {
    fn employees(&self, conn: &Connection) -> Result<Vec<Employee>> {
        SqliteRepo::employees_in_department(conn, &self.dept_code)
    }
}
