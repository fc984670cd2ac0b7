use roster_store::db::{connect, StoreOptions};
use rusqlite::Connection;

/// Migrated, empty in-memory database
#[allow(dead_code)]
pub fn setup_test_db() -> Connection {
    connect(&StoreOptions::in_memory()).expect("Failed to create in-memory database")
}

/// Migrated in-memory database holding the sample set
#[allow(dead_code)]
pub fn seeded_db() -> Connection {
    let mut conn = setup_test_db();
    roster_store::seed::example_data(&mut conn).expect("Seeding should succeed");
    conn
}
