//! Raw SQL commands
//!
//! Usage:
//!   roster orange
//!   roster sql <QUERY>

use crate::output::Output;
use clap::Args;
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct SqlArgs {
    /// SQL statement to execute as-is
    pub query: String,
}

/// Orange-favoring employees per department
pub fn execute_orange(conn: &Connection, out: Output) -> Result<(), Box<dyn std::error::Error>> {
    let raw = roster_store::queries::raw_sql_query(conn)?;
    out.raw(&raw.columns, &raw.rows)
}

pub fn execute_sql(
    args: SqlArgs,
    conn: &Connection,
    out: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = roster_store::queries::execute_raw(conn, &args.query)?;
    out.raw(&raw.columns, &raw.rows)
}
