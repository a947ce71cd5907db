//! Load/save contract for the catch log.
//!
//! The whole log is stored as a JSON array under [`LOG_KEY`]. An empty log
//! is never written: saving one removes the key, so "absent" and "empty"
//! read back the same way. Storage faults never escape this module; a load
//! that cannot read or parse the value yields an empty log, and a failed
//! save is skipped.

use fishlog_shared::constants::LOG_KEY;
use fishlog_shared::CatchRecord;

use crate::error::Result;
use crate::kv::KeyValueStore;

/// What a [`LogPersistence::save`] call did to the medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The log was serialized and written under the key.
    Written,
    /// The log was empty and the key was removed.
    Removed,
    /// The medium rejected the write; the log lives in memory only.
    Skipped,
}

/// Persistence adapter over a [`KeyValueStore`].
#[derive(Debug)]
pub struct LogPersistence<S> {
    store: S,
}

impl<S: KeyValueStore> LogPersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted log, treating absent, unreadable and malformed
    /// values alike as an empty log.
    pub fn load(&self) -> Vec<CatchRecord> {
        match self.try_load() {
            Ok(Some(log)) => {
                tracing::info!(records = log.len(), "loaded catch log");
                log
            }
            Ok(None) => {
                tracing::debug!("no persisted catch log");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load catch log, starting empty");
                Vec::new()
            }
        }
    }

    /// Read the persisted log, surfacing storage and parse errors.
    pub fn try_load(&self) -> Result<Option<Vec<CatchRecord>>> {
        let Some(raw) = self.store.get(LOG_KEY)? else {
            return Ok(None);
        };
        let log: Vec<CatchRecord> = serde_json::from_str(&raw)?;
        Ok(Some(log))
    }

    /// Persist `log` in full, or remove the key when it is empty.
    pub fn save(&mut self, log: &[CatchRecord]) -> SaveOutcome {
        match self.try_save(log) {
            Ok(outcome) => {
                tracing::debug!(records = log.len(), ?outcome, "saved catch log");
                outcome
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not save catch log, continuing in memory");
                SaveOutcome::Skipped
            }
        }
    }

    fn try_save(&mut self, log: &[CatchRecord]) -> Result<SaveOutcome> {
        if log.is_empty() {
            self.store.remove(LOG_KEY)?;
            return Ok(SaveOutcome::Removed);
        }
        let json = serde_json::to_string(log)?;
        self.store.set(LOG_KEY, &json)?;
        Ok(SaveOutcome::Written)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
