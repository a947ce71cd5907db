//! Client configuration loaded from environment variables.
//!
//! With nothing set the log lives in the platform data directory.

use std::path::PathBuf;

use fishlog_store::{Database, KeyValueStore, MemoryStore};

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// SQLite file holding the log.
    /// Env: `FISHLOG_DB_PATH`
    /// Default: platform data dir, `fishlog.db`.
    pub db_path: Option<PathBuf>,

    /// Keep the log in memory only; nothing survives the process.
    /// Env: `FISHLOG_IN_MEMORY` (true/1)
    /// Default: `false`
    pub in_memory: bool,
}

impl ClientConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("FISHLOG_DB_PATH") {
            if !path.trim().is_empty() {
                config.db_path = Some(PathBuf::from(path));
            }
        }

        if let Some(val) = lookup("FISHLOG_IN_MEMORY") {
            config.in_memory = val == "true" || val == "1";
        }

        config
    }

    /// Open the configured storage medium, falling back to memory when the
    /// database cannot be opened. The session then keeps working but nothing
    /// outlives the process.
    pub fn open_store(&self) -> Box<dyn KeyValueStore> {
        match self.try_open_store() {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(error = %e, "storage unavailable, keeping the log in memory");
                Box::new(MemoryStore::new())
            }
        }
    }

    /// Open the configured storage medium, surfacing failures.
    pub fn try_open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        if self.in_memory {
            tracing::info!("using in-memory storage");
            return Ok(Box::new(MemoryStore::new()));
        }

        let db = match &self.db_path {
            Some(path) => Database::open_at(path)?,
            None => Database::new()?,
        };
        Ok(Box::new(db))
    }
}
