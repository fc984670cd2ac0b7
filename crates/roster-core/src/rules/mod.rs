pub mod validation;

pub use validation::{validate_department, validate_new_employee};
