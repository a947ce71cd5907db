//! Derived views over the catch log.
//!
//! Plain functions of the records and a search term, recomputed on every
//! call and never cached.

use std::collections::BTreeMap;

use fishlog_shared::CatchRecord;
use serde::Serialize;

/// Number of catches recorded for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesCount {
    pub name: String,
    pub count: usize,
}

/// Count catches per species name, ordered alphabetically by name.
pub fn aggregate_by_species(log: &[CatchRecord]) -> Vec<SpeciesCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in log {
        *counts.entry(record.name.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(name, count)| SpeciesCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Records whose name contains the lowercased `search_term`, sorted by name.
///
/// Each match is paired with its position in `log` so callers can edit or
/// delete it. The sort is stable: equal names keep log order. An empty term
/// matches everything.
pub fn filter_and_sort<'a>(
    log: &'a [CatchRecord],
    search_term: &str,
) -> Vec<(usize, &'a CatchRecord)> {
    let needle = search_term.to_lowercase();
    let mut matches: Vec<_> = log
        .iter()
        .enumerate()
        .filter(|(_, record)| record.name.contains(&needle))
        .collect();
    matches.sort_by(|(_, a), (_, b)| a.name.cmp(&b.name));
    matches
}

/// Total number of catches in the log.
pub fn total_count(log: &[CatchRecord]) -> usize {
    log.len()
}
