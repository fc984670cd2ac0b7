//! The fixed sample set
//!
//! Four departments and twenty-one employees. "Balloonicorn" has no
//! department; employees without an explicit color get the column default.

use roster_core::model::{Department, NewEmployee};

/// `(dept_code, dept, phone)`
pub const DEPARTMENTS: &[(&str, &str, &str)] = &[
    ("ed", "Education", "555-1000"),
    ("admin", "Administration", "555-2222"),
    ("pt", "Part-Time", "555-9999"),
    ("oth", "Other", "555-3333"),
];

/// `(name, dept_code, fav_color)` in insertion order
pub const EMPLOYEES: &[(&str, Option<&str>, Option<&str>)] = &[
    ("Joel Burton", Some("ed"), Some("orange")),
    ("Cynthia Dueltgen", Some("ed"), Some("purple")),
    ("Rachel Thomas", Some("ed"), None),
    ("Katie Lefevre", Some("ed"), Some("rainbow")),
    ("Meggie Mahnken", Some("ed"), Some("black")),
    ("Heather Bryant", Some("ed"), Some("purple")),
    ("Kristen McClure", Some("ed"), Some("orange")),
    ("Lavinia Karl", Some("ed"), None),
    ("Denise Wiedl", Some("ed"), None),
    ("David Phillips", Some("admin"), None),
    ("Angie Chang", Some("admin"), None),
    ("Stefan Gomez", Some("admin"), None),
    ("Laura Gillen", Some("admin"), None),
    ("Paria Rajai", Some("admin"), None),
    ("Wendy Saccuzzo", Some("oth"), None),
    ("Dori Grant", Some("oth"), None),
    ("Kari Burge", Some("oth"), Some("purple")),
    ("Rachel Walker", Some("pt"), None),
    ("Anna Akullian", Some("pt"), None),
    ("Jumal Qazi", Some("pt"), Some("orange")),
    ("Balloonicorn", None, Some("rainbow")),
];

pub fn departments() -> Vec<Department> {
    DEPARTMENTS
        .iter()
        .map(|&(code, name, phone)| Department::new(code, name, phone))
        .collect()
}

pub fn employees() -> Vec<NewEmployee> {
    EMPLOYEES
        .iter()
        .map(|&(name, dept_code, fav_color)| {
            let mut emp = NewEmployee::new(name);
            if let Some(code) = dept_code {
                emp = emp.in_department(code);
            }
            if let Some(color) = fav_color {
                emp = emp.with_fav_color(color);
            }
            emp
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_sizes() {
        assert_eq!(departments().len(), 4);
        assert_eq!(employees().len(), 21);
    }

    #[test]
    fn test_sample_names_unique() {
        let names: HashSet<_> = EMPLOYEES.iter().map(|e| e.0).collect();
        assert_eq!(names.len(), EMPLOYEES.len());
    }

    #[test]
    fn test_sample_references_known_departments() {
        let codes: HashSet<_> = DEPARTMENTS.iter().map(|d| d.0).collect();
        assert!(EMPLOYEES
            .iter()
            .filter_map(|e| e.1)
            .all(|code| codes.contains(code)));
    }

    #[test]
    fn test_default_color_applied() {
        let rachel = employees()
            .into_iter()
            .find(|e| e.name == "Rachel Thomas")
            .unwrap();
        assert_eq!(rachel.fav_color.as_deref(), Some("Unknown"));
        assert_eq!(rachel.state, "CA");
    }
}
