use fishlog_shared::CatchRecord;
use fishlog_store::KeyValueStore;

use crate::present::{display_name, map_search_url, species_icon};
use crate::tracker::Tracker;

pub const NO_MATCHES: &str = "No fish matched your search.";

/// Detailed log, filtered by `search` and sorted by name.
pub fn list<S: KeyValueStore>(tracker: &Tracker<S>, search: &str, show_links: bool) -> String {
    let matches = tracker.search(search);
    if matches.is_empty() {
        return NO_MATCHES.to_string();
    }

    let mut lines = Vec::with_capacity(matches.len());
    for (index, record) in matches {
        lines.push(format!("#{index} {}", render_record(record)));
        if show_links && !record.location.is_empty() {
            lines.push(format!("    {}", map_search_url(&record.location)));
        }
    }
    lines.join("\n") + "\n"
}

/// Total count and per-species breakdown.
pub fn stats<S: KeyValueStore>(tracker: &Tracker<S>) -> String {
    let mut out = format!("Total Fish Caught: {}\n", tracker.total_count());
    let counts = tracker.species_counts();
    if counts.is_empty() {
        return out;
    }

    out.push_str("\nGrouped by type\n");
    for species in counts {
        out.push_str(&format!(
            "  {} (x{})\n",
            display_name(&species.name),
            species.count
        ));
    }
    out
}

fn render_record(record: &CatchRecord) -> String {
    let mut line = format!(
        "{} {} - {}\" • {} lb • {} • {}",
        species_icon(&record.name),
        display_name(&record.name),
        record.length,
        record.weight,
        record.location,
        record.time_of_day,
    );
    if record.image.is_some() {
        line.push_str(" [photo]");
    }
    line
}
