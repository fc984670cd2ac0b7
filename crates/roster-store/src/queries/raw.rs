//! Raw SQL escape hatch
//!
//! Runs SQL text straight against the connection, bypassing the entity layer,
//! and returns the engine's own values.

use crate::errors::{from_rusqlite, Result};
use roster_core::errors::{ExError, ExErrorKind};
use roster_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::types::Value;
use rusqlite::{Batch, Connection};
use std::time::Instant;

/// Count of employees whose favorite color is orange, per department
pub const ORANGE_BY_DEPARTMENT_SQL: &str = "
    SELECT dept_code,
           dept,
           COUNT(*) AS num_emps
    FROM departments
        JOIN employees USING (dept_code)
    WHERE fav_color = 'orange'
    GROUP BY dept_code
    ORDER BY dept
";

/// Result rows exactly as SQLite produced them
#[derive(Debug, Clone, PartialEq)]
pub struct RawRows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl RawRows {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Execute one SQL statement and collect every row
///
/// # Errors
/// - `InvalidInput` when `sql` holds no statement or more than one
/// - `Persistence` on a syntax error or any engine failure
pub fn execute_raw(conn: &Connection, sql: &str) -> Result<RawRows> {
    let start = Instant::now();
    log_op_start!("execute_raw");

    match collect_rows(conn, sql) {
        Ok(raw) => {
            log_op_end!(
                "execute_raw",
                duration_ms = start.elapsed().as_millis() as u64,
                row_count = raw.len() as u64
            );
            Ok(raw)
        }
        Err(err) => {
            log_op_error!(
                "execute_raw",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

/// Orange-favoring employees per department, sorted by department name
///
/// Columns: `dept_code`, `dept`, `num_emps`.
pub fn raw_sql_query(conn: &Connection) -> Result<RawRows> {
    execute_raw(conn, ORANGE_BY_DEPARTMENT_SQL)
}

fn collect_rows(conn: &Connection, sql: &str) -> Result<RawRows> {
    let mut batch = Batch::new(conn, sql);
    let Some(mut stmt) = batch.next().map_err(from_rusqlite)? else {
        return Err(invalid_sql("no SQL statement given"));
    };
    // Only prepared, never run: nothing after the first statement executes.
    if batch.next().map_err(from_rusqlite)?.is_some() {
        return Err(invalid_sql("expected a single SQL statement"));
    }

    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();

    let rows = stmt
        .query_map([], |row| {
            (0..width)
                .map(|i| row.get::<_, Value>(i))
                .collect::<rusqlite::Result<Vec<_>>>()
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(RawRows { columns, rows })
}

fn invalid_sql(message: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("execute_raw")
        .with_message(message)
}
