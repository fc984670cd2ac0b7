//! Phone roster queries
//!
//! Every employee that belongs to a department, with that department's name
//! and phone number. `all_employees_nav` hands back entities and leaves the
//! department lookups to the caller (one statement each); the eager and
//! joined variants answer in a single statement.

use crate::errors::{from_rusqlite, Result};
use crate::repo::hydration::{department_from_row, employee_from_row, EMPLOYEE_COLUMN_COUNT};
use roster_core::model::{Department, Employee};
use roster_core::{log_op_end, log_op_start};
use rusqlite::Connection;
use serde::Serialize;
use std::time::Instant;

/// One line of the phone roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    /// Employee name
    pub name: String,
    /// Department display name
    pub dept: Option<String>,
    /// Department phone
    pub phone: Option<String>,
}

/// An employee loaded together with its department
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeWithDepartment {
    pub employee: Employee,
    pub department: Department,
}

impl From<EmployeeWithDepartment> for RosterEntry {
    fn from(value: EmployeeWithDepartment) -> Self {
        RosterEntry {
            name: value.employee.name,
            dept: value.department.dept,
            phone: value.department.phone,
        }
    }
}

/// Employees that belong to a department, as entities
///
/// Callers reach the department through
/// [`EmployeeRelations::department`](crate::repo::EmployeeRelations::department),
/// which costs one lookup per employee. No ordering beyond the engine's
/// natural (rowid) order.
pub fn all_employees_nav(conn: &Connection) -> Result<Vec<Employee>> {
    let start = Instant::now();
    log_op_start!("all_employees_nav");

    let mut stmt = conn
        .prepare(
            "SELECT emp_id, name, state, fav_color, dept_code
             FROM employees
             WHERE dept_code IS NOT NULL",
        )
        .map_err(from_rusqlite)?;

    let employees = stmt
        .query_map([], |row| employee_from_row(row, 0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    log_op_end!(
        "all_employees_nav",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = employees.len() as u64
    );
    Ok(employees)
}

/// Employees with their departments loaded up front in one joined statement
pub fn all_employees_nav_eager(conn: &Connection) -> Result<Vec<EmployeeWithDepartment>> {
    let start = Instant::now();
    log_op_start!("all_employees_nav_eager");

    let mut stmt = conn
        .prepare(
            "SELECT e.emp_id, e.name, e.state, e.fav_color, e.dept_code,
                    d.dept_code, d.dept, d.phone
             FROM employees AS e
             JOIN departments AS d ON d.dept_code = e.dept_code",
        )
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(EmployeeWithDepartment {
                employee: employee_from_row(row, 0)?,
                department: department_from_row(row, EMPLOYEE_COLUMN_COUNT)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    log_op_end!(
        "all_employees_nav_eager",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = rows.len() as u64
    );
    Ok(rows)
}

/// The roster as flat `(name, dept, phone)` rows from a single join
pub fn all_employees_join(conn: &Connection) -> Result<Vec<RosterEntry>> {
    let start = Instant::now();
    log_op_start!("all_employees_join");

    let mut stmt = conn
        .prepare(
            "SELECT e.name, d.dept, d.phone
             FROM employees AS e
             JOIN departments AS d ON d.dept_code = e.dept_code",
        )
        .map_err(from_rusqlite)?;

    let entries = stmt
        .query_map([], |row| {
            Ok(RosterEntry {
                name: row.get(0)?,
                dept: row.get(1)?,
                phone: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    log_op_end!(
        "all_employees_join",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = entries.len() as u64
    );
    Ok(entries)
}
