//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] and makes sure the
//! schema exists before any other operation.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fishlog_shared::constants::DB_FILE_NAME;
use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Bumped whenever [`SCHEMA_SQL`] changes shape.
pub const SCHEMA_VERSION: u32 = 1;

/// The catch log lives under a single key of this table.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key        TEXT PRIMARY KEY NOT NULL,
    value      TEXT NOT NULL,                 -- serialized JSON
    updated_at TEXT NOT NULL                  -- RFC-3339
);
"#;

/// Wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the default application database.
    ///
    /// The database file is placed in the platform-appropriate data directory:
    /// - Linux:   `~/.local/share/fishlog/fishlog.db`
    /// - macOS:   `~/Library/Application Support/com.fishlog.fishlog/fishlog.db`
    /// - Windows: `{FOLDERID_RoamingAppData}\fishlog\fishlog\data\fishlog.db`
    pub fn new() -> Result<Self> {
        let db_path = Self::default_path()?;
        Self::open_at(&db_path)
    }

    /// Platform default location of the database file.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from("com", "fishlog", "fishlog").ok_or(StoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().join(DB_FILE_NAME))
    }

    /// Open (or create) a database at an explicit path, creating parent
    /// directories as needed.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::info!(path = %path.display(), "opening database");

        let conn = Connection::open(path)?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        tracing::debug!(journal_mode = %mode, "database pragmas applied");

        Self::with_connection(conn)
    }

    /// Open a private, non-persistent database. Contents vanish on drop.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Create the tables on first open; later opens find `user_version`
    /// already set and skip the work.
    fn init_schema(&self) -> Result<()> {
        let version: u32 = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?;
        if version >= SCHEMA_VERSION {
            return Ok(());
        }

        tracing::info!(from = version, to = SCHEMA_VERSION, "initializing schema");
        self.conn
            .execute_batch(SCHEMA_SQL)
            .map_err(|e| StoreError::Schema(e.to_string()))?;
        self.conn
            .pragma_update(None, "user_version", SCHEMA_VERSION)?;
        Ok(())
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn
            .path()
            .map(PathBuf::from)
            .filter(|p| !p.as_os_str().is_empty())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path())
            .finish()
    }
}
