use desde::model::Event;
use desde::store::EventStore;
use desde::transfer;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

// Tests in this binary share the process environment; hold the lock while
// DESDE_TEST_DIR points at this test's private directory.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn isolated_store() -> (MutexGuard<'static, ()>, PathBuf) {
    let guard = ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let dir = std::env::temp_dir().join(format!("desde-test-{}", uuid::Uuid::new_v4()));
    unsafe { std::env::set_var("DESDE_TEST_DIR", &dir) };
    (guard, dir)
}

#[test]
fn create_appends_and_trims() {
    let (_guard, _dir) = isolated_store();

    EventStore::create(Event {
        name: "  Moved to Lisbon  ".to_string(),
        date: "2019-06-01".to_string(),
    })
    .unwrap();
    EventStore::create(Event::new("Got the cat", "2021-03-15")).unwrap();

    let events = EventStore::load().unwrap();
    assert_eq!(events.len(), 2, "both events should persist");
    assert_eq!(events[0], Event::new("Moved to Lisbon", "2019-06-01"));
    assert_eq!(
        events.last().unwrap(),
        &Event::new("Got the cat", "2021-03-15"),
        "create should append at the end"
    );
}

#[test]
fn blank_records_are_dropped_silently() {
    let (_guard, _dir) = isolated_store();

    EventStore::create(Event::new("   ", "2020-01-01")).unwrap();
    EventStore::create(Event::new("X", "")).unwrap();

    assert!(
        EventStore::load().unwrap().is_empty(),
        "blank name or date should be a no-op, not an error"
    );
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
    let (_guard, _dir) = isolated_store();

    EventStore::replace_all(vec![
        Event::new("a", "2020-01-01"),
        Event::new("b", "2020-01-02"),
        Event::new("c", "2020-01-03"),
    ])
    .unwrap();

    EventStore::delete(1).unwrap();

    let events = EventStore::load().unwrap();
    assert_eq!(
        events,
        vec![Event::new("a", "2020-01-01"), Event::new("c", "2020-01-03")]
    );
}

#[test]
fn update_replaces_only_that_element() {
    let (_guard, _dir) = isolated_store();

    EventStore::replace_all(vec![
        Event::new("a", "2020-01-01"),
        Event::new("b", "2020-01-02"),
        Event::new("c", "2020-01-03"),
    ])
    .unwrap();

    EventStore::update(1, Event::new("b2", "2022-02-02")).unwrap();

    let events = EventStore::load().unwrap();
    assert_eq!(events[0], Event::new("a", "2020-01-01"));
    assert_eq!(events[1], Event::new("b2", "2022-02-02"));
    assert_eq!(events[2], Event::new("c", "2020-01-03"));
}

#[test]
fn out_of_range_delete_and_update_are_noops() {
    let (_guard, _dir) = isolated_store();

    let seeded = vec![Event::new("a", "2020-01-01"), Event::new("b", "2020-01-02")];
    EventStore::replace_all(seeded.clone()).unwrap();

    EventStore::delete(7).unwrap();
    EventStore::update(7, Event::new("z", "2021-01-01")).unwrap();

    assert_eq!(EventStore::load().unwrap(), seeded);
}

#[test]
fn missing_file_loads_empty() {
    let (_guard, _dir) = isolated_store();
    assert!(EventStore::load().unwrap().is_empty());
}

#[test]
fn corrupt_store_is_an_error_not_an_empty_list() {
    let (_guard, dir) = isolated_store();

    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("events.json"), "not json at all").unwrap();

    assert!(
        EventStore::load().is_err(),
        "malformed persisted data must propagate, not be swallowed"
    );
}

#[test]
fn rejected_import_leaves_the_store_unchanged() {
    let (_guard, dir) = isolated_store();

    let seeded = vec![Event::new("keep", "2020-01-01")];
    EventStore::replace_all(seeded.clone()).unwrap();

    let upload = dir.join("upload.json");
    for payload in [r#"[{"name":"X"}]"#, r#""not an array""#] {
        std::fs::write(&upload, payload).unwrap();
        assert!(
            transfer::parse_import(&upload).is_err(),
            "payload {payload} should be rejected"
        );
    }

    assert_eq!(
        EventStore::load().unwrap(),
        seeded,
        "a rejected import must not touch the stored collection"
    );
}

#[test]
fn replace_all_discards_the_previous_collection() {
    let (_guard, _dir) = isolated_store();

    EventStore::replace_all(vec![Event::new("old", "2019-01-01")]).unwrap();
    EventStore::replace_all(vec![
        Event::new("new1", "2021-01-01"),
        Event::new("new2", "2021-02-01"),
    ])
    .unwrap();

    let events = EventStore::load().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "new1");
}
