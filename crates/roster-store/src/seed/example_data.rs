//! Reseed routine
//!
//! Clears both tables and inserts the sample set in one transaction.

use crate::errors::{from_rusqlite, Result};
use crate::repo::SqliteRepo;
use crate::seed::sample;
use roster_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::time::Instant;

/// Replace all departments and employees with the sample set
///
/// Destructive: any existing rows are discarded. Running it repeatedly leaves
/// the same final state, including employee ids 1..=21.
///
/// # Errors
/// Propagates any store error; the transaction is rolled back on drop.
pub fn example_data(conn: &mut Connection) -> Result<()> {
    let start = Instant::now();
    log_op_start!("example_data");

    match reseed(conn) {
        Ok((departments, employees)) => {
            log_op_end!(
                "example_data",
                duration_ms = start.elapsed().as_millis() as u64,
                departments = departments,
                employees = employees
            );
            Ok(())
        }
        Err(err) => {
            log_op_error!(
                "example_data",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn reseed(conn: &mut Connection) -> Result<(u64, u64)> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    // Employees first: they hold the foreign key.
    let removed_employees = SqliteRepo::delete_all_employees(&tx)?;
    let removed_departments = SqliteRepo::delete_all_departments(&tx)?;
    tracing::debug!(
        removed_employees,
        removed_departments,
        "cleared existing rows"
    );

    let mut departments = 0u64;
    for dept in sample::departments() {
        SqliteRepo::insert_department(&tx, &dept)?;
        departments += 1;
    }

    let mut employees = 0u64;
    for emp in sample::employees() {
        SqliteRepo::insert_employee(&tx, emp)?;
        employees += 1;
    }

    tx.commit().map_err(from_rusqlite)?;
    Ok((departments, employees))
}
