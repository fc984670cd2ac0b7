// Integration tests for the migration framework

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();

    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = roster_store::migrations::apply_migrations(&mut conn);

    // Then: The two entity tables and the version table exist
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());
    assert_eq!(
        get_table_names(&conn),
        vec!["departments", "employees", "schema_version"]
    );
}

#[test]
fn test_migration_idempotency() {
    // Given: A database with migrations already applied
    let mut conn = setup_test_db();
    roster_store::migrations::apply_migrations(&mut conn).unwrap();

    // When: Migrations are re-run
    let result = roster_store::migrations::apply_migrations(&mut conn);

    // Then: Re-running succeeds without duplicate version rows
    assert!(result.is_ok(), "Re-running migrations should succeed");
    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(
        version_count as usize,
        roster_store::migrations::get_migrations().len()
    );
}

#[test]
fn test_checksum_recorded() {
    let mut conn = setup_test_db();
    roster_store::migrations::apply_migrations(&mut conn).unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            ["001_initial_schema"],
            |row| row.get(0),
        )
        .unwrap();

    assert_eq!(checksum.len(), 64, "SHA256 checksum should be 64 hex chars");
}

#[test]
fn test_checksum_mismatch_rejected() {
    // Given: An applied migration whose recorded checksum was altered
    let mut conn = setup_test_db();
    roster_store::migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "UPDATE schema_version SET checksum = 'tampered' WHERE migration_id = ?",
        ["001_initial_schema"],
    )
    .unwrap();

    // When: Migrations run again
    let err = roster_store::migrations::apply_migrations(&mut conn).unwrap_err();

    // Then: The mismatch is reported as a constraint violation
    assert_eq!(
        err.kind(),
        roster_core::ExErrorKind::ConstraintViolation
    );
    assert!(err.message().contains("001_initial_schema"));
}
