//! SQLite repository implementation
//!
//! Insert, fetch, list, count and bulk-delete for both tables. Functions take
//! `&Connection`, so a `&Transaction` works through deref.

use crate::errors::{from_rusqlite, Result};
use crate::repo::hydration::{
    department_from_row, employee_from_row, DEPARTMENT_COLUMNS, EMPLOYEE_COLUMNS,
};
use roster_core::errors::ExError;
use roster_core::model::{Department, Employee, NewEmployee};
use roster_core::rules::{validate_department, validate_new_employee};
use rusqlite::{Connection, OptionalExtension};

/// SQLite repository for employees and departments
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a department
    ///
    /// # Errors
    /// - `InvalidInput` if the department fails validation
    /// - `ConstraintViolation` on a duplicate code or display name
    pub fn insert_department(conn: &Connection, dept: &Department) -> Result<()> {
        validate_department(dept)
            .map_err(|e| ExError::from(e).with_op("insert_department"))?;

        conn.execute(
            "INSERT INTO departments (dept_code, dept, phone) VALUES (?1, ?2, ?3)",
            rusqlite::params![dept.dept_code, dept.dept, dept.phone],
        )
        .map_err(|e| from_rusqlite(e).with_entity_id(dept.dept_code.clone()))?;

        Ok(())
    }

    /// Insert an employee and return it with its generated `emp_id`
    ///
    /// # Errors
    /// - `InvalidInput` if the employee fails validation
    /// - `ConstraintViolation` on a duplicate name or unknown department code
    pub fn insert_employee(conn: &Connection, emp: NewEmployee) -> Result<Employee> {
        validate_new_employee(&emp).map_err(|e| ExError::from(e).with_op("insert_employee"))?;

        conn.execute(
            "INSERT INTO employees (name, state, fav_color, dept_code) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![emp.name, emp.state, emp.fav_color, emp.dept_code],
        )
        .map_err(|e| from_rusqlite(e).with_entity_id(emp.name.clone()))?;

        Ok(emp.into_employee(conn.last_insert_rowid()))
    }

    /// Get an employee by primary key
    pub fn get_employee(conn: &Connection, emp_id: i64) -> Result<Option<Employee>> {
        conn.query_row(
            &format!("SELECT {} FROM employees WHERE emp_id = ?1", EMPLOYEE_COLUMNS),
            [emp_id],
            |row| employee_from_row(row, 0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a department by code
    pub fn get_department(conn: &Connection, dept_code: &str) -> Result<Option<Department>> {
        conn.query_row(
            &format!(
                "SELECT {} FROM departments WHERE dept_code = ?1",
                DEPARTMENT_COLUMNS
            ),
            [dept_code],
            |row| department_from_row(row, 0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all employees ordered by `emp_id`
    pub fn list_employees(conn: &Connection) -> Result<Vec<Employee>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM employees ORDER BY emp_id",
                EMPLOYEE_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let employees = stmt
            .query_map([], |row| employee_from_row(row, 0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(employees)
    }

    /// List all departments ordered by code
    pub fn list_departments(conn: &Connection) -> Result<Vec<Department>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM departments ORDER BY dept_code",
                DEPARTMENT_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let departments = stmt
            .query_map([], |row| department_from_row(row, 0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(departments)
    }

    /// Employees referencing `dept_code`, ordered by `emp_id`
    pub fn employees_in_department(conn: &Connection, dept_code: &str) -> Result<Vec<Employee>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM employees WHERE dept_code = ?1 ORDER BY emp_id",
                EMPLOYEE_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let employees = stmt
            .query_map([dept_code], |row| employee_from_row(row, 0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(employees)
    }

    pub fn count_employees(conn: &Connection) -> Result<u64> {
        conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    pub fn count_departments(conn: &Connection) -> Result<u64> {
        conn.query_row("SELECT COUNT(*) FROM departments", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    /// Delete every employee; returns the number of rows removed
    pub fn delete_all_employees(conn: &Connection) -> Result<usize> {
        conn.execute("DELETE FROM employees", [])
            .map_err(from_rusqlite)
    }

    /// Delete every department; returns the number of rows removed
    ///
    /// Fails with `ConstraintViolation` while any employee still references one.
    pub fn delete_all_departments(conn: &Connection) -> Result<usize> {
        conn.execute("DELETE FROM departments", [])
            .map_err(from_rusqlite)
    }
}
