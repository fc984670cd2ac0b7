//! Read-only query surface
//!
//! - `roster`: the phone roster three ways (navigational, eager, joined)
//! - `raw`: SQL escape hatch returning engine-native rows
//! - `lookups`: single-purpose finders and aggregates

pub mod lookups;
pub mod raw;
pub mod roster;

pub use lookups::{
    color_counts_by_department, employee_by_name, employee_names_with_color,
    employees_in_department_named, employees_without_department, DepartmentColorCount,
};
pub use raw::{execute_raw, raw_sql_query, RawRows, ORANGE_BY_DEPARTMENT_SQL};
pub use roster::{
    all_employees_join, all_employees_nav, all_employees_nav_eager, EmployeeWithDepartment,
    RosterEntry,
};
