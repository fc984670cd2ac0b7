//! Lookup commands
//!
//! Usage:
//!   roster employee <NAME>
//!   roster unassigned
//!   roster color <COLOR>
//!   roster department <NAME>

use crate::output::Output;
use clap::Args;
use roster_core::Employee;
use roster_store::queries;
use roster_store::repo::EmployeeRelations;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    /// Exact employee name
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ColorArgs {
    /// Exact favorite color
    pub color: String,
}

#[derive(Debug, Args)]
pub struct DepartmentArgs {
    /// Department display name, e.g. "Administration"
    pub name: String,
}

#[derive(Serialize)]
struct EmployeeDetail {
    #[serde(flatten)]
    employee: Employee,
    dept: Option<String>,
    phone: Option<String>,
}

/// One employee and the department they belong to
pub fn execute_employee(
    args: EmployeeArgs,
    conn: &Connection,
    out: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let employee = queries::employee_by_name(conn, &args.name)?;
    let dept = employee.department(conn)?;

    let detail = EmployeeDetail {
        dept: dept.as_ref().and_then(|d| d.dept.clone()),
        phone: dept.as_ref().and_then(|d| d.phone.clone()),
        employee,
    };

    out.list(std::slice::from_ref(&detail), |d| {
        let dept = match &dept {
            Some(dept) => dept.to_string(),
            None => "no department".to_string(),
        };
        format!("{} {} phone={}", d.employee, dept, d.phone.as_deref().unwrap_or("-"))
    })
}

pub fn execute_unassigned(conn: &Connection, out: Output) -> Result<(), Box<dyn std::error::Error>> {
    let employees = queries::employees_without_department(conn)?;
    out.list(&employees, |e| e.to_string())
}

pub fn execute_color(
    args: ColorArgs,
    conn: &Connection,
    out: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let names = queries::employee_names_with_color(conn, &args.color)?;
    out.list(&names, |n| n.clone())
}

pub fn execute_department(
    args: DepartmentArgs,
    conn: &Connection,
    out: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let employees = queries::employees_in_department_named(conn, &args.name)?;
    out.list(&employees, |e| e.to_string())
}
