//! Settings for the `roster` binary
//!
//! Sources are merged in this order, later ones winning:
//!
//! 1. Built-in defaults
//! 2. TOML file (`roster.toml` in the working directory, or `--config`)
//! 3. `ROSTER_*` environment variables, after `.env` is loaded if present
//! 4. Command-line flags (`--db`, `--echo`)
//!
//! ```bash
//! ROSTER_DATABASE_PATH=/tmp/emp.db
//! ROSTER_ECHO_SQL=true
//! ROSTER_SEED_ON_CONNECT=false
//! ROSTER_LOG_PROFILE=production
//! ```

use config::{Config, ConfigError, Environment, File};
use roster_core::errors::{ExError, ExErrorKind};
use roster_core::logging_facility::Profile;
use roster_store::StoreOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";
pub const DEFAULT_DATABASE_PATH: &str = "emp.db";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Log every SQL statement
    pub echo_sql: bool,

    /// Replace the tables' contents with the sample set on every start
    pub seed_on_connect: bool,

    /// `development`, `production` or `test`
    pub log_profile: String,
}

impl Settings {
    /// Load settings from file and environment
    ///
    /// An explicit `config_path` must exist; the default file is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let (file, required) = match config_path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        Config::builder()
            .set_default("database_path", DEFAULT_DATABASE_PATH)?
            .set_default("echo_sql", false)?
            .set_default("seed_on_connect", true)?
            .set_default("log_profile", "development")?
            .add_source(File::from(file).required(required))
            .add_source(Environment::with_prefix("ROSTER"))
            .build()?
            .try_deserialize()
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, db: Option<PathBuf>, echo: bool) -> Self {
        if let Some(db) = db {
            self.database_path = db;
        }
        self.echo_sql |= echo;
        self
    }

    /// Parse `log_profile`
    ///
    /// # Errors
    /// `Config` when the value names no known profile.
    pub fn profile(&self) -> Result<Profile, ExError> {
        self.log_profile.parse().map_err(|msg: String| {
            ExError::new(ExErrorKind::Config)
                .with_op("load_settings")
                .with_entity_id("log_profile")
                .with_message(msg)
        })
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::file(&self.database_path).with_echo_sql(self.echo_sql)
    }
}
