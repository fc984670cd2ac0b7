//! Database connection management
//!
//! Opens and configures the single SQLite handle the rest of the crate works
//! against.

use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::apply_migrations;
use roster_core::{log_op_end, log_op_start};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Options for `connect`
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Database file; `None` opens an in-memory database
    pub path: Option<PathBuf>,

    /// Log every executed statement through `tracing`
    pub echo_sql: bool,
}

impl StoreOptions {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            echo_sql: false,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            echo_sql: false,
        }
    }

    pub fn with_echo_sql(mut self, echo: bool) -> Self {
        self.echo_sql = echo;
        self
    }
}

/// Open a SQLite database at the given path
///
/// Creates missing parent directories and switches the file to WAL mode.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
    }

    let conn = Connection::open(path).map_err(from_rusqlite)?;
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
        .map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection: SQLite leaves foreign keys off by default
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;
    Ok(())
}

/// Open, configure and migrate a connection
pub fn connect(options: &StoreOptions) -> Result<Connection> {
    let start = Instant::now();
    log_op_start!("connect", echo_sql = options.echo_sql);

    let mut conn = match &options.path {
        Some(path) => open(path)?,
        None => open_in_memory()?,
    };

    if options.echo_sql {
        conn.trace(Some(echo_statement));
    }

    apply_migrations(&mut conn)?;

    log_op_end!("connect", duration_ms = start.elapsed().as_millis() as u64);
    Ok(conn)
}

fn echo_statement(sql: &str) {
    tracing::info!(target: "roster_store::sql", sql = sql.trim());
}
