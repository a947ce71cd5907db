//! A catch-log session: the in-memory [`CatchLog`] plus its persistence.
//!
//! Every committed mutation is followed by an explicit save. Draft edits and
//! selection changes are never persisted.

use fishlog_shared::{CatchRecord, LogError};
use fishlog_store::{KeyValueStore, LogPersistence, SaveOutcome};
use tracing::info;

use crate::state::{CatchLog, SubmitOutcome};
use crate::views::{self, SpeciesCount};

pub struct Tracker<S> {
    log: CatchLog,
    persistence: LogPersistence<S>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Start a session, loading whatever the store holds.
    pub fn open(store: S) -> Self {
        let persistence = LogPersistence::new(store);
        let log = CatchLog::from_records(persistence.load());
        info!(records = log.len(), "catch log session started");
        Self { log, persistence }
    }

    pub fn log(&self) -> &CatchLog {
        &self.log
    }

    pub fn records(&self) -> &[CatchRecord] {
        self.log.records()
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.persistence.store_mut()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.log.submit();
        if outcome.is_committed() {
            self.persist();
        }
        outcome
    }

    pub fn delete(&mut self, index: usize) -> Result<CatchRecord, LogError> {
        let removed = self.log.delete(index)?;
        self.persist();
        Ok(removed)
    }

    pub fn clear_all(&mut self) {
        self.log.clear_all();
        self.persist();
    }

    pub fn select_for_edit(&mut self, index: usize) -> Result<(), LogError> {
        self.log.select_for_edit(index)
    }

    pub fn deselect(&mut self) {
        self.log.deselect();
    }

    pub fn update_draft_field(&mut self, field: &str, value: &str) -> Result<(), LogError> {
        self.log.update_draft_field(field, value)
    }

    /// Write the current records to storage.
    pub fn persist(&mut self) -> SaveOutcome {
        self.persistence.save(self.log.records())
    }

    pub fn species_counts(&self) -> Vec<SpeciesCount> {
        views::aggregate_by_species(self.log.records())
    }

    pub fn search(&self, term: &str) -> Vec<(usize, &CatchRecord)> {
        views::filter_and_sort(self.log.records(), term)
    }

    pub fn total_count(&self) -> usize {
        views::total_count(self.log.records())
    }

    pub fn into_store(self) -> S {
        self.persistence.into_inner()
    }
}
