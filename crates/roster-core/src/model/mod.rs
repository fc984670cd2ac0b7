pub mod department;
pub mod employee;

pub use department::Department;
pub use employee::{Employee, NewEmployee, DEFAULT_FAV_COLOR, DEFAULT_STATE};
