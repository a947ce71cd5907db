//! The catch log state machine.
//!
//! [`CatchLog`] owns the ordered records, the form [`Draft`] and the edit
//! selection. It never touches storage; [`Tracker`](crate::tracker::Tracker)
//! persists after each committed mutation.
//!
//! Records are addressed by position. The selection follows the record it
//! points at when an earlier record is deleted, so it is never stale.

use fishlog_shared::{CatchRecord, Draft, DraftField, LogError};
use tracing::debug;

/// Result of [`CatchLog::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended at this index.
    Created(usize),
    /// The selected record at this index was replaced.
    Updated(usize),
    /// The name was empty after normalization; nothing changed.
    Ignored,
}

impl SubmitOutcome {
    /// Whether the log was mutated and needs persisting.
    pub fn is_committed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Records, draft and selection for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatchLog {
    records: Vec<CatchRecord>,
    draft: Draft,
    selection: Option<usize>,
}

impl CatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from previously persisted records.
    pub fn from_records(records: Vec<CatchRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[CatchRecord] {
        &self.records
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn is_editing(&self) -> bool {
        self.selection.is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Commit the draft: replace the selected record, or append a new one.
    ///
    /// An empty name aborts with no change at all (draft kept, selection
    /// kept). Any commit resets the draft and clears the selection.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(record) = self.draft.to_record() else {
            debug!("submit ignored: empty name");
            return SubmitOutcome::Ignored;
        };

        let outcome = match self.selection.take() {
            Some(index) if index < self.records.len() => {
                self.records[index] = record;
                SubmitOutcome::Updated(index)
            }
            _ => {
                self.records.push(record);
                SubmitOutcome::Created(self.records.len() - 1)
            }
        };

        self.draft.reset();
        debug!(?outcome, records = self.records.len(), "draft committed");
        outcome
    }

    /// Remove and return the record at `index`.
    pub fn delete(&mut self, index: usize) -> Result<CatchRecord, LogError> {
        self.check_index(index)?;
        let removed = self.records.remove(index);

        match self.selection {
            Some(selected) if selected == index => {
                self.selection = None;
                self.draft.reset();
            }
            Some(selected) if selected > index => self.selection = Some(selected - 1),
            _ => {}
        }

        debug!(index, selection = ?self.selection, "record deleted");
        Ok(removed)
    }

    /// Load a copy of the record at `index` into the draft for editing.
    pub fn select_for_edit(&mut self, index: usize) -> Result<(), LogError> {
        self.check_index(index)?;
        self.draft = Draft::from(&self.records[index]);
        self.selection = Some(index);
        debug!(index, "record selected for edit");
        Ok(())
    }

    /// Leave edit mode, discarding the draft.
    pub fn deselect(&mut self) {
        self.selection = None;
        self.draft.reset();
    }

    /// Assign one draft field by its form identifier.
    pub fn update_draft_field(&mut self, field: &str, value: &str) -> Result<(), LogError> {
        let field: DraftField = field.parse()?;
        self.draft.set(field, value);
        Ok(())
    }

    /// Empty the log and reset draft and selection.
    pub fn clear_all(&mut self) {
        self.records.clear();
        self.deselect();
        debug!("log cleared");
    }

    fn check_index(&self, index: usize) -> Result<(), LogError> {
        if index >= self.records.len() {
            return Err(LogError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }
}
