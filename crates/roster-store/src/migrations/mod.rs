//! Migration framework
//!
//! - Embedded SQL migrations applied in order
//! - Idempotent application tracked in `schema_version`
//! - Checksum verification of already-applied migrations

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::apply_migrations;
