// Integration tests for the sample-data seed routine

mod common;

use common::{seeded_db, setup_test_db};
use roster_store::queries::employee_by_name;
use roster_store::repo::SqliteRepo;

#[test]
fn test_seed_counts() {
    let conn = seeded_db();

    assert_eq!(SqliteRepo::count_departments(&conn).unwrap(), 4);
    assert_eq!(SqliteRepo::count_employees(&conn).unwrap(), 21);
}

#[test]
fn test_only_balloonicorn_has_no_department() {
    let conn = seeded_db();

    let unassigned: Vec<String> = SqliteRepo::list_employees(&conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.dept_code.is_none())
        .map(|e| e.name)
        .collect();

    assert_eq!(unassigned, vec!["Balloonicorn"]);
}

#[test]
fn test_reseed_is_idempotent() {
    // Given: A seeded database
    let mut conn = seeded_db();
    let first = SqliteRepo::list_employees(&conn).unwrap();

    // When: The seed routine runs twice more
    for _ in 0..2 {
        roster_store::seed::example_data(&mut conn).unwrap();

        // Then: Counts stay fixed after every call
        assert_eq!(SqliteRepo::count_employees(&conn).unwrap(), 21);
        assert_eq!(SqliteRepo::count_departments(&conn).unwrap(), 4);
    }

    // And: The rows, identifiers included, are unchanged
    assert_eq!(SqliteRepo::list_employees(&conn).unwrap(), first);
}

#[test]
fn test_seed_discards_prior_rows() {
    // Given: A database holding an extra employee
    let mut conn = seeded_db();
    SqliteRepo::insert_employee(
        &conn,
        roster_core::NewEmployee::new("Temp Worker").in_department("pt"),
    )
    .unwrap();
    assert_eq!(SqliteRepo::count_employees(&conn).unwrap(), 22);

    // When: Reseeding
    roster_store::seed::example_data(&mut conn).unwrap();

    // Then: Only the sample set remains
    assert_eq!(SqliteRepo::count_employees(&conn).unwrap(), 21);
    assert!(employee_by_name(&conn, "Temp Worker").is_err());
}

#[test]
fn test_seed_ids_are_sequential() {
    let conn = seeded_db();

    let ids: Vec<i64> = SqliteRepo::list_employees(&conn)
        .unwrap()
        .iter()
        .map(|e| e.emp_id)
        .collect();

    assert_eq!(ids, (1..=21).collect::<Vec<_>>());
    assert_eq!(employee_by_name(&conn, "Joel Burton").unwrap().emp_id, 1);
    assert_eq!(employee_by_name(&conn, "Balloonicorn").unwrap().emp_id, 21);
}

#[test]
fn test_seed_applies_column_defaults() {
    let conn = seeded_db();

    let rachel = employee_by_name(&conn, "Rachel Thomas").unwrap();
    assert_eq!(rachel.state, "CA");
    assert_eq!(rachel.fav_color.as_deref(), Some("Unknown"));

    let jumal = employee_by_name(&conn, "Jumal Qazi").unwrap();
    assert_eq!(jumal.fav_color.as_deref(), Some("orange"));
    assert_eq!(jumal.dept_code.as_deref(), Some("pt"));
}

#[test]
fn test_seed_on_empty_database() {
    let mut conn = setup_test_db();
    roster_store::seed::example_data(&mut conn).unwrap();
    assert_eq!(SqliteRepo::count_employees(&conn).unwrap(), 21);
}
