//! Roster Store - SQLite persistence, seeding and queries
//!
//! Provides:
//! - Connection glue (`db`) and embedded, checksummed migrations
//! - Repository layer with lazy relationship navigation
//! - The sample-data seed routine
//! - Roster queries (navigational, eager, joined), raw SQL and lookups

pub mod db;
pub mod errors;
pub mod migrations;
pub mod queries;
pub mod repo;
pub mod seed;

// Re-export key types
pub use db::{connect, StoreOptions};
pub use errors::Result;
pub use queries::{all_employees_join, all_employees_nav, raw_sql_query};
pub use repo::{DepartmentRelations, EmployeeRelations, SqliteRepo};
pub use seed::example_data;
