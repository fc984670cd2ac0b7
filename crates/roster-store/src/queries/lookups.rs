//! Single-purpose finders
//!
//! The questions one typically asks interactively of the sample data: who is
//! this person, who has no department, who likes a color, who works where.

use crate::errors::{from_rusqlite, Result};
use crate::repo::hydration::employee_from_row;
use crate::repo::SqliteRepo;
use roster_core::errors::{ExError, RosterError};
use roster_core::model::Employee;
use rusqlite::{Connection, Params};
use serde::Serialize;
use std::collections::BTreeMap;

/// Employees of one department that share a favorite color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentColorCount {
    pub dept_code: String,
    pub dept: Option<String>,
    pub num_emps: u64,
}

/// Find exactly one employee by name
///
/// # Errors
/// - `NotFound` if no employee has this name
/// - `MultipleFound` if more than one does
pub fn employee_by_name(conn: &Connection, name: &str) -> Result<Employee> {
    let mut matches = select_employees(
        conn,
        "SELECT emp_id, name, state, fav_color, dept_code
         FROM employees WHERE name = ?1 ORDER BY emp_id",
        [name],
    )?;

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(ExError::from(RosterError::EmployeeNotFound {
            name: name.to_string(),
        })
        .with_op("employee_by_name")),
        count => Err(ExError::from(RosterError::MultipleEmployeesFound {
            name: name.to_string(),
            count,
        })
        .with_op("employee_by_name")),
    }
}

/// Employees whose department reference is NULL
pub fn employees_without_department(conn: &Connection) -> Result<Vec<Employee>> {
    select_employees(
        conn,
        "SELECT emp_id, name, state, fav_color, dept_code
         FROM employees WHERE dept_code IS NULL ORDER BY emp_id",
        [],
    )
}

/// Names of employees whose favorite color is exactly `color`
pub fn employee_names_with_color(conn: &Connection, color: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM employees WHERE fav_color = ?1 ORDER BY emp_id")
        .map_err(from_rusqlite)?;

    let names = stmt
        .query_map([color], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(from_rusqlite)?;

    Ok(names)
}

/// Employees of the department whose display name is `dept_name`
pub fn employees_in_department_named(conn: &Connection, dept_name: &str) -> Result<Vec<Employee>> {
    select_employees(
        conn,
        "SELECT e.emp_id, e.name, e.state, e.fav_color, e.dept_code
         FROM employees AS e
         JOIN departments AS d ON d.dept_code = e.dept_code
         WHERE d.dept = ?1
         ORDER BY e.emp_id",
        [dept_name],
    )
}

/// Per-department count of employees whose favorite color is `color`
///
/// Answers the same question as `raw_sql_query` for "orange", but through the
/// repository instead of hand-written SQL. Departments with no match are
/// left out; rows are ordered by department name.
pub fn color_counts_by_department(
    conn: &Connection,
    color: &str,
) -> Result<Vec<DepartmentColorCount>> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for emp in SqliteRepo::list_employees(conn)? {
        if emp.fav_color.as_deref() != Some(color) {
            continue;
        }
        if let Some(code) = emp.dept_code {
            *counts.entry(code).or_default() += 1;
        }
    }

    let mut rows: Vec<DepartmentColorCount> = SqliteRepo::list_departments(conn)?
        .into_iter()
        .filter_map(|dept| {
            counts.get(&dept.dept_code).map(|&num_emps| DepartmentColorCount {
                dept_code: dept.dept_code,
                dept: dept.dept,
                num_emps,
            })
        })
        .collect();

    rows.sort_by(|a, b| a.dept.cmp(&b.dept));
    Ok(rows)
}

fn select_employees<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<Vec<Employee>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;

    let employees = stmt
        .query_map(params, |row| employee_from_row(row, 0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(employees)
}
