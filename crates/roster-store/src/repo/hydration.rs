//! Hydration layer - converts result rows back into models
//!
//! Column order is fixed by `EMPLOYEE_COLUMNS` / `DEPARTMENT_COLUMNS`; joined
//! queries pass the offset at which each entity's columns start.

use roster_core::model::{Department, Employee};
use rusqlite::Row;

pub const EMPLOYEE_COLUMNS: &str = "emp_id, name, state, fav_color, dept_code";
pub const EMPLOYEE_COLUMN_COUNT: usize = 5;

pub const DEPARTMENT_COLUMNS: &str = "dept_code, dept, phone";

/// Read an employee from `row` starting at column `offset`
pub fn employee_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Employee> {
    Ok(Employee {
        emp_id: row.get(offset)?,
        name: row.get(offset + 1)?,
        state: row.get(offset + 2)?,
        fav_color: row.get(offset + 3)?,
        dept_code: row.get(offset + 4)?,
    })
}

/// Read a department from `row` starting at column `offset`
pub fn department_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Department> {
    Ok(Department {
        dept_code: row.get(offset)?,
        dept: row.get(offset + 1)?,
        phone: row.get(offset + 2)?,
    })
}
