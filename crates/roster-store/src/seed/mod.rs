//! Sample data seeding
//!
//! - Fixed sample set of departments and employees
//! - Destructive, idempotent `example_data` routine

pub mod example_data;
pub mod sample;

pub use example_data::example_data;
