//! Roster Core - entity models and shared facilities
//!
//! This crate provides:
//! - `Employee` and `Department` models with their column defaults
//! - Column-shape validation rules
//! - The structured error facility (`ExError`, `ExErrorKind`, `RosterError`)
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, RosterError};
pub use model::{Department, Employee, NewEmployee};
