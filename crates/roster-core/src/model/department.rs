use serde::{Deserialize, Serialize};
use std::fmt;

/// Department - owns zero or more employees
///
/// Identified by an externally assigned short code (`"ed"`, `"admin"`), never
/// generated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Primary key, at most 5 characters
    pub dept_code: String,

    /// Display name, unique when present
    pub dept: Option<String>,

    /// Department phone number
    pub phone: Option<String>,
}

impl Department {
    pub fn new(dept_code: impl Into<String>, dept: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            dept_code: dept_code.into(),
            dept: Some(dept.into()),
            phone: Some(phone.into()),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Dept id={} name={}>",
            self.dept_code,
            self.dept.as_deref().unwrap_or("None")
        )
    }
}
