use serde::{Deserialize, Serialize};
use std::fmt;

/// State code applied when an insert does not name one
pub const DEFAULT_STATE: &str = "CA";

/// Favorite color applied when an insert does not name one
pub const DEFAULT_FAV_COLOR: &str = "Unknown";

/// Employee - a persisted employee row
///
/// Each employee optionally belongs to one department through `dept_code`.
/// Navigating to the department itself is a store concern (see
/// `roster_store::repo::relations`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Primary key generated by the store
    pub emp_id: i64,

    /// Unique name, at most 20 characters
    pub name: String,

    /// Two-character state code
    pub state: String,

    /// Favorite color, NULL when unknown
    pub fav_color: Option<String>,

    /// Foreign key to `Department::dept_code`
    pub dept_code: Option<String>,
}

impl Employee {
    /// Check if this employee belongs to a department
    pub fn has_department(&self) -> bool {
        self.dept_code.is_some()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Employee id={} name={}>", self.emp_id, self.name)
    }
}

/// An employee that has not been inserted yet
///
/// Carries the column defaults: state `"CA"` and favorite color `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub state: String,
    pub fav_color: Option<String>,
    pub dept_code: Option<String>,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: DEFAULT_STATE.to_string(),
            fav_color: Some(DEFAULT_FAV_COLOR.to_string()),
            dept_code: None,
        }
    }

    pub fn in_department(mut self, dept_code: impl Into<String>) -> Self {
        self.dept_code = Some(dept_code.into());
        self
    }

    pub fn with_fav_color(mut self, color: impl Into<String>) -> Self {
        self.fav_color = Some(color.into());
        self
    }

    /// Store NULL instead of the default color
    pub fn without_fav_color(mut self) -> Self {
        self.fav_color = None;
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Attach the identifier the store generated on insert
    pub fn into_employee(self, emp_id: i64) -> Employee {
        Employee {
            emp_id,
            name: self.name,
            state: self.state,
            fav_color: self.fav_color,
            dept_code: self.dept_code,
        }
    }
}
