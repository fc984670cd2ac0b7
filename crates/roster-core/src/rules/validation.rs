//! Column-shape validation
//!
//! SQLite does not enforce declared VARCHAR widths, so entities are checked
//! here before they reach the store. The schema carries matching CHECK
//! constraints for rows inserted from outside this crate.

use crate::errors::{Result, RosterError};
use crate::model::{Department, NewEmployee};

pub const MAX_EMPLOYEE_NAME_LEN: usize = 20;
pub const MAX_FAV_COLOR_LEN: usize = 20;
pub const STATE_CODE_LEN: usize = 2;
pub const MAX_DEPT_CODE_LEN: usize = 5;
pub const MAX_DEPT_NAME_LEN: usize = 20;
pub const MAX_PHONE_LEN: usize = 20;

/// Validate an employee before insertion
///
/// # Errors
/// - `EmptyField` if the name (or department code, when set) is blank
/// - `FieldTooLong` if any text exceeds its column width
/// - `InvalidStateCode` if the state is not exactly two characters
pub fn validate_new_employee(emp: &NewEmployee) -> Result<()> {
    require_non_empty("name", &emp.name)?;
    check_len("name", &emp.name, MAX_EMPLOYEE_NAME_LEN)?;

    if emp.state.chars().count() != STATE_CODE_LEN {
        return Err(RosterError::InvalidStateCode {
            state: emp.state.clone(),
        });
    }

    if let Some(color) = &emp.fav_color {
        check_len("fav_color", color, MAX_FAV_COLOR_LEN)?;
    }

    if let Some(dept_code) = &emp.dept_code {
        require_non_empty("dept_code", dept_code)?;
        check_len("dept_code", dept_code, MAX_DEPT_CODE_LEN)?;
    }

    Ok(())
}

/// Validate a department before insertion
///
/// # Errors
/// - `EmptyField` if the department code is blank
/// - `FieldTooLong` if any text exceeds its column width
pub fn validate_department(dept: &Department) -> Result<()> {
    require_non_empty("dept_code", &dept.dept_code)?;
    check_len("dept_code", &dept.dept_code, MAX_DEPT_CODE_LEN)?;

    if let Some(name) = &dept.dept {
        check_len("dept", name, MAX_DEPT_NAME_LEN)?;
    }
    if let Some(phone) = &dept.phone {
        check_len("phone", phone, MAX_PHONE_LEN)?;
    }

    Ok(())
}

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::EmptyField { field });
    }
    Ok(())
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(RosterError::FieldTooLong { field, max, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_employee_is_valid() {
        assert!(validate_new_employee(&NewEmployee::new("Balloonicorn")).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = validate_new_employee(&NewEmployee::new("   ")).unwrap_err();
        assert_eq!(err, RosterError::EmptyField { field: "name" });
    }

    #[test]
    fn test_long_name_rejected() {
        let err =
            validate_new_employee(&NewEmployee::new("A name that is far too long")).unwrap_err();
        assert!(matches!(
            err,
            RosterError::FieldTooLong {
                field: "name",
                max: 20,
                ..
            }
        ));
    }

    #[test]
    fn test_state_must_be_two_chars() {
        let err = validate_new_employee(&NewEmployee::new("Dori Grant").with_state("CAL"))
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidStateCode { .. }));
    }

    #[test]
    fn test_dept_code_width() {
        let err = validate_new_employee(&NewEmployee::new("Dori Grant").in_department("toolong"))
            .unwrap_err();
        assert!(matches!(
            err,
            RosterError::FieldTooLong {
                field: "dept_code",
                ..
            }
        ));
    }

    #[test]
    fn test_department_validation() {
        assert!(validate_department(&Department::new("admin", "Administration", "555-2222")).is_ok());

        let blank = Department {
            dept_code: String::new(),
            dept: None,
            phone: None,
        };
        assert_eq!(
            validate_department(&blank).unwrap_err(),
            RosterError::EmptyField { field: "dept_code" }
        );
    }

    proptest! {
        #[test]
        fn prop_names_within_width_validate(name in "[A-Za-z][A-Za-z ]{0,19}") {
            prop_assert!(validate_new_employee(&NewEmployee::new(name)).is_ok());
        }

        #[test]
        fn prop_names_over_width_rejected(name in "[A-Za-z]{21,40}") {
            let rejected = matches!(
                validate_new_employee(&NewEmployee::new(name)),
                Err(RosterError::FieldTooLong { field: "name", .. })
            );
            prop_assert!(rejected);
        }
    }
}
