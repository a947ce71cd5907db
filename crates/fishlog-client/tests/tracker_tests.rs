//! End-to-end behaviour of a catch-log session against real and fake storage.

use fishlog_client::config::ClientConfig;
use fishlog_client::{SubmitOutcome, Tracker};
use fishlog_shared::constants::LOG_KEY;
use fishlog_shared::{CatchRecord, Draft, LogError};
use fishlog_store::{Database, KeyValueStore, MemoryStore, SaveOutcome};

fn add(tracker: &mut Tracker<impl KeyValueStore>, name: &str) {
    tracker.update_draft_field("name", name).unwrap();
    assert!(tracker.submit().is_committed());
}

fn names(tracker: &Tracker<impl KeyValueStore>) -> Vec<String> {
    tracker.records().iter().map(|r| r.name.clone()).collect()
}

#[test]
fn test_create_then_reload() {
    let mut tracker = Tracker::open(MemoryStore::new());
    tracker.update_draft_field("name", "Trout").unwrap();
    tracker.update_draft_field("length", "12").unwrap();
    tracker.update_draft_field("weight", "1.5").unwrap();
    assert_eq!(tracker.submit(), SubmitOutcome::Created(0));

    let original = tracker.records().to_vec();
    assert_eq!(
        original,
        vec![CatchRecord {
            name: "trout".into(),
            length: "12".into(),
            weight: "1.5".into(),
            location: String::new(),
            time_of_day: "Morning".into(),
            image: None,
        }]
    );

    let reopened = Tracker::open(tracker.into_store());
    assert_eq!(reopened.records(), original.as_slice());
    assert_eq!(reopened.log().selection(), None);
}

#[test]
fn test_persisted_value_shape() {
    let mut tracker = Tracker::open(MemoryStore::new());
    tracker.update_draft_field("name", "  Striped Bass ").unwrap();
    tracker.update_draft_field("timeOfDay", "Night").unwrap();
    tracker.submit();

    let raw = tracker.store().raw(LOG_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "name": "striped bass",
            "length": "",
            "weight": "",
            "location": "",
            "timeOfDay": "Night",
        }])
    );
}

#[test]
fn test_ignored_submit_does_not_persist() {
    let mut tracker = Tracker::open(MemoryStore::new());
    tracker.update_draft_field("name", "   ").unwrap();
    tracker.update_draft_field("location", "pier").unwrap();

    assert_eq!(tracker.submit(), SubmitOutcome::Ignored);
    assert!(!tracker.store().contains_key(LOG_KEY));
    assert_eq!(tracker.log().draft().location, "pier");
}

#[test]
fn test_edit_in_place_persists() {
    let mut tracker = Tracker::open(MemoryStore::new());
    for name in ["a", "b", "c"] {
        add(&mut tracker, name);
    }

    tracker.select_for_edit(1).unwrap();
    tracker.update_draft_field("name", "perch").unwrap();
    assert_eq!(tracker.submit(), SubmitOutcome::Updated(1));

    assert_eq!(names(&tracker), ["a", "perch", "c"]);
    assert_eq!(tracker.log().selection(), None);
    assert_eq!(tracker.log().draft(), &Draft::default());

    let reopened = Tracker::open(tracker.into_store());
    assert_eq!(names(&reopened), ["a", "perch", "c"]);
}

#[test]
fn test_delete_keeps_selection_on_same_record() {
    let mut tracker = Tracker::open(MemoryStore::new());
    for name in ["a", "b", "c"] {
        add(&mut tracker, name);
    }
    tracker.select_for_edit(2).unwrap();

    tracker.delete(0).unwrap();
    assert_eq!(names(&tracker), ["b", "c"]);
    assert_eq!(tracker.log().selection(), Some(1));

    // committing the edit lands on "c", not on "b"
    tracker.update_draft_field("name", "carp").unwrap();
    assert_eq!(tracker.submit(), SubmitOutcome::Updated(1));
    assert_eq!(names(&tracker), ["b", "carp"]);
}

#[test]
fn test_delete_out_of_range_leaves_storage_alone() {
    let mut tracker = Tracker::open(MemoryStore::new());
    add(&mut tracker, "trout");
    let before = tracker.store().raw(LOG_KEY).map(str::to_string);

    assert_eq!(
        tracker.delete(1).unwrap_err(),
        LogError::IndexOutOfRange { index: 1, len: 1 }
    );
    assert_eq!(tracker.store().raw(LOG_KEY).map(str::to_string), before);
}

#[test]
fn test_deleting_last_record_removes_key() {
    let mut tracker = Tracker::open(MemoryStore::new());
    add(&mut tracker, "trout");
    assert!(tracker.store().contains_key(LOG_KEY));

    tracker.delete(0).unwrap();
    assert!(!tracker.store().contains_key(LOG_KEY));
}

#[test]
fn test_clear_all_removes_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fishlog.db");

    {
        let mut tracker = Tracker::open(Database::open_at(&path).unwrap());
        add(&mut tracker, "trout");
        add(&mut tracker, "bass");
        tracker.clear_all();
        assert_eq!(tracker.store().get(LOG_KEY).unwrap(), None);
    }

    let reopened = Tracker::open(Database::open_at(&path).unwrap());
    assert!(reopened.records().is_empty());
}

#[test]
fn test_views_follow_mutations() {
    let mut tracker = Tracker::open(MemoryStore::new());
    for name in ["striped bass", "trout", "largemouth bass", "trout"] {
        add(&mut tracker, name);
    }

    let counts: Vec<_> = tracker
        .species_counts()
        .into_iter()
        .map(|s| (s.name, s.count))
        .collect();
    assert_eq!(
        counts,
        [
            ("largemouth bass".to_string(), 1),
            ("striped bass".to_string(), 1),
            ("trout".to_string(), 2),
        ]
    );

    let found: Vec<usize> = tracker.search("bass").into_iter().map(|(i, _)| i).collect();
    assert_eq!(found, [2, 0]);

    tracker.delete(1).unwrap();
    assert_eq!(tracker.total_count(), 3);
    assert_eq!(tracker.species_counts().iter().find(|s| s.name == "trout").unwrap().count, 1);
}

#[test]
fn test_unavailable_storage_keeps_session_working() {
    let mut tracker = Tracker::open(MemoryStore::unavailable());
    add(&mut tracker, "trout");
    assert_eq!(tracker.total_count(), 1);
    assert_eq!(tracker.persist(), SaveOutcome::Skipped);

    tracker.store_mut().set_offline(false);
    assert_eq!(tracker.persist(), SaveOutcome::Written);
    assert!(tracker.store().contains_key(LOG_KEY));
}

#[test]
fn test_malformed_storage_starts_empty() {
    let mut store = MemoryStore::new();
    store.set(LOG_KEY, "[{\"name\": 3}]").unwrap();

    let mut tracker = Tracker::open(store);
    assert!(tracker.records().is_empty());

    // first commit overwrites the bad value
    add(&mut tracker, "trout");
    let reopened = Tracker::open(tracker.into_store());
    assert_eq!(names(&reopened), ["trout"]);
}

#[test]
fn test_odd_stored_values_survive_a_commit() {
    let mut store = MemoryStore::new();
    store
        .set(
            LOG_KEY,
            r#"[{"name":"trout","length":"12","weight":"1.5","location":"","timeOfDay":"Morning"},{"name":"bass","length":"","weight":"","location":"","timeOfDay":"dawn"}]"#,
        )
        .unwrap();

    let mut tracker = Tracker::open(store);
    assert_eq!(names(&tracker), ["trout", "bass"]);

    add(&mut tracker, "perch");
    let reopened = Tracker::open(tracker.into_store());
    assert_eq!(names(&reopened), ["trout", "bass", "perch"]);
    assert_eq!(reopened.records()[1].time_of_day, "dawn");
    assert_eq!(reopened.records()[2].time_of_day, "Morning");
}

#[test]
fn test_session_runs_when_database_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fishlog.db");
    std::fs::write(&path, b"garbage that is certainly not a sqlite header....").unwrap();
    let config = ClientConfig {
        db_path: Some(path),
        in_memory: false,
    };

    let mut tracker = Tracker::open(config.open_store());
    assert!(tracker.records().is_empty());

    add(&mut tracker, "trout");
    add(&mut tracker, "bass");
    tracker.delete(0).unwrap();
    assert_eq!(names(&tracker), ["bass"]);
    assert_eq!(tracker.persist(), SaveOutcome::Written);
}
