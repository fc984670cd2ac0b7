//! Repository layer for persisting employees and departments to SQLite

pub mod hydration;
pub mod relations;
pub mod sqlite_repo;

pub use relations::{DepartmentRelations, EmployeeRelations};
pub use sqlite_repo::SqliteRepo;
