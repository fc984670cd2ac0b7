// Integration tests for the roster queries and the raw escape hatch

mod common;

use common::seeded_db;
use roster_store::queries::{
    all_employees_join, all_employees_nav, all_employees_nav_eager, color_counts_by_department,
    raw_sql_query, RosterEntry,
};
use roster_store::repo::{EmployeeRelations, SqliteRepo};
use rusqlite::types::Value;
use std::cell::Cell;

thread_local! {
    static STATEMENTS: Cell<usize> = const { Cell::new(0) };
}

fn count_statement(_sql: &str) {
    STATEMENTS.with(|c| c.set(c.get() + 1));
}

fn reset_statements() {
    STATEMENTS.with(|c| c.set(0));
}

fn statements() -> usize {
    STATEMENTS.with(|c| c.get())
}

#[test]
fn test_nav_returns_employees_with_department() {
    let conn = seeded_db();

    let employees = all_employees_nav(&conn).unwrap();

    assert_eq!(employees.len(), 20);
    assert!(employees.iter().all(|e| e.dept_code.is_some()));
    assert!(!employees.iter().any(|e| e.name == "Balloonicorn"));
}

#[test]
fn test_nav_then_navigate_department() {
    let conn = seeded_db();

    for emp in all_employees_nav(&conn).unwrap() {
        let dept = emp.department(&conn).unwrap().expect("department exists");
        assert_eq!(Some(dept.dept_code), emp.dept_code);
    }
}

#[test]
fn test_join_matches_nav_cardinality() {
    let conn = seeded_db();

    let nav = all_employees_nav(&conn).unwrap();
    let joined = all_employees_join(&conn).unwrap();

    assert_eq!(joined.len(), nav.len());
}

#[test]
fn test_join_rows_match_department_records() {
    let conn = seeded_db();

    for entry in all_employees_join(&conn).unwrap() {
        let emp = roster_store::queries::employee_by_name(&conn, &entry.name).unwrap();
        let code = emp.dept_code.expect("joined employees have a department");
        let dept = SqliteRepo::get_department(&conn, &code).unwrap().unwrap();
        assert_eq!(entry.dept, dept.dept);
        assert_eq!(entry.phone, dept.phone);
    }
}

#[test]
fn test_join_contains_known_row() {
    let conn = seeded_db();

    let joined = all_employees_join(&conn).unwrap();

    assert!(joined.contains(&RosterEntry {
        name: "Cynthia Dueltgen".to_string(),
        dept: Some("Education".to_string()),
        phone: Some("555-1000".to_string()),
    }));
}

#[test]
fn test_eager_matches_nav() {
    let conn = seeded_db();

    let mut nav: Vec<(String, String)> = all_employees_nav(&conn)
        .unwrap()
        .into_iter()
        .map(|e| {
            let dept = e.department(&conn).unwrap().unwrap();
            (e.name, dept.dept_code)
        })
        .collect();
    let mut eager: Vec<(String, String)> = all_employees_nav_eager(&conn)
        .unwrap()
        .into_iter()
        .map(|row| (row.employee.name, row.department.dept_code))
        .collect();

    nav.sort();
    eager.sort();
    assert_eq!(nav, eager);
}

#[test]
fn test_navigation_issues_one_lookup_per_employee() {
    let mut conn = seeded_db();
    conn.trace(Some(count_statement));

    // Navigational: the list query plus one lookup per employee
    reset_statements();
    let employees = all_employees_nav(&conn).unwrap();
    for emp in &employees {
        emp.department(&conn).unwrap();
    }
    let nav_statements = statements();

    // Joined: everything in one round trip
    reset_statements();
    let joined = all_employees_join(&conn).unwrap();
    let join_statements = statements();

    conn.trace(None);

    assert_eq!(joined.len(), employees.len());
    assert!(
        nav_statements > employees.len(),
        "expected N+1 statements, got {}",
        nav_statements
    );
    assert!(
        join_statements < nav_statements && join_statements <= 2,
        "join issued {} statements",
        join_statements
    );
}

#[test]
fn test_raw_query_orange_counts() {
    let conn = seeded_db();

    let raw = raw_sql_query(&conn).unwrap();

    assert_eq!(raw.columns, vec!["dept_code", "dept", "num_emps"]);
    assert_eq!(
        raw.rows,
        vec![
            vec![
                Value::Text("ed".to_string()),
                Value::Text("Education".to_string()),
                Value::Integer(2),
            ],
            vec![
                Value::Text("pt".to_string()),
                Value::Text("Part-Time".to_string()),
                Value::Integer(1),
            ],
        ]
    );
}

#[test]
fn test_raw_query_sorted_by_department_name() {
    let conn = seeded_db();

    let raw = raw_sql_query(&conn).unwrap();
    let dept_idx = raw.column_index("dept").unwrap();
    let names: Vec<String> = raw
        .rows
        .iter()
        .map(|row| match &row[dept_idx] {
            Value::Text(s) => s.clone(),
            other => panic!("unexpected value {:?}", other),
        })
        .collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_raw_syntax_error_propagates() {
    let conn = seeded_db();

    let err = roster_store::queries::execute_raw(&conn, "SELEKT * FROM employees").unwrap_err();

    assert_eq!(err.kind(), roster_core::ExErrorKind::Persistence);
}

#[test]
fn test_entity_layer_color_counts_agree_with_raw() {
    let conn = seeded_db();

    let typed = color_counts_by_department(&conn, "orange").unwrap();
    let raw = raw_sql_query(&conn).unwrap();

    assert_eq!(typed.len(), raw.len());
    for (count, row) in typed.iter().zip(&raw.rows) {
        assert_eq!(row[0], Value::Text(count.dept_code.clone()));
        assert_eq!(row[1], Value::Text(count.dept.clone().unwrap()));
        assert_eq!(row[2], Value::Integer(count.num_emps as i64));
    }
}

#[test]
fn test_queries_on_empty_database() {
    let conn = common::setup_test_db();

    assert!(all_employees_nav(&conn).unwrap().is_empty());
    assert!(all_employees_join(&conn).unwrap().is_empty());
    assert!(raw_sql_query(&conn).unwrap().is_empty());
}
