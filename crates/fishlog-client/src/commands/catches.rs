use fishlog_shared::DraftField;
use fishlog_store::KeyValueStore;
use tracing::info;

use crate::cli::CatchFields;
use crate::error::Result;
use crate::image::encode_image_file;
use crate::present::display_name;
use crate::state::SubmitOutcome;
use crate::tracker::Tracker;

const NAME_REQUIRED: &str = "Nothing saved: a fish name is required.";

pub fn add<S: KeyValueStore>(tracker: &mut Tracker<S>, fields: &CatchFields) -> Result<String> {
    tracker.deselect();
    apply_fields(tracker, fields)?;
    let outcome = tracker.submit();
    Ok(describe(tracker, outcome))
}

pub fn edit<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    index: usize,
    fields: &CatchFields,
) -> Result<String> {
    tracker.select_for_edit(index)?;
    apply_fields(tracker, fields)?;
    let outcome = tracker.submit();
    Ok(describe(tracker, outcome))
}

pub fn delete<S: KeyValueStore>(tracker: &mut Tracker<S>, index: usize) -> Result<String> {
    let removed = tracker.delete(index)?;
    info!(index, name = %removed.name, "catch deleted");
    Ok(format!("Deleted #{index} {}", display_name(&removed.name)))
}

pub fn clear<S: KeyValueStore>(tracker: &mut Tracker<S>) -> Result<String> {
    let count = tracker.total_count();
    tracker.clear_all();
    info!(count, "catch log cleared");
    Ok(format!("Cleared {count} catches"))
}

fn apply_fields<S: KeyValueStore>(tracker: &mut Tracker<S>, fields: &CatchFields) -> Result<()> {
    let text_fields = [
        (DraftField::Name, &fields.name),
        (DraftField::Length, &fields.length),
        (DraftField::Weight, &fields.weight),
        (DraftField::Location, &fields.location),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            tracker.update_draft_field(field.as_str(), value)?;
        }
    }
    if let Some(time) = fields.time {
        tracker.update_draft_field(DraftField::TimeOfDay.as_str(), time.as_str())?;
    }

    if fields.no_image {
        tracker.update_draft_field(DraftField::Image.as_str(), "")?;
    } else if let Some(path) = &fields.image {
        let encoded = encode_image_file(path)?;
        tracker.update_draft_field(DraftField::Image.as_str(), &encoded)?;
    }
    Ok(())
}

fn describe<S: KeyValueStore>(tracker: &Tracker<S>, outcome: SubmitOutcome) -> String {
    let name_at = |index: usize| display_name(&tracker.records()[index].name);
    match outcome {
        SubmitOutcome::Created(index) => format!("Added #{index} {}", name_at(index)),
        SubmitOutcome::Updated(index) => format!("Updated #{index} {}", name_at(index)),
        SubmitOutcome::Ignored => NAME_REQUIRED.to_string(),
    }
}
