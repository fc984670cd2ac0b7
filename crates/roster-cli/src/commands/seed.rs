//! Reseed command
//!
//! Usage: roster seed

use roster_store::repo::SqliteRepo;
use rusqlite::Connection;

/// Replace the database contents with the sample set
pub fn execute(conn: &mut Connection) -> Result<(), Box<dyn std::error::Error>> {
    roster_store::seed::example_data(conn)?;

    println!(
        "✓ Seeded {} departments and {} employees",
        SqliteRepo::count_departments(conn)?,
        SqliteRepo::count_employees(conn)?
    );
    Ok(())
}
