//! Countdown persistence across every store backend.

use countdown_core::storage::{
    clear_countdown, decode_share_url, load_countdown, load_pomodoro, save_countdown,
    save_pomodoro, share_url, JsonFileStore, KeyValueStore, MemoryStore, QueryStore, SqliteStore,
};
use countdown_core::{CountdownData, Pomodoro, Timestamp};
use tempfile::TempDir;

fn sample() -> CountdownData {
    CountdownData {
        event_name: "Conference talk".into(),
        target: Timestamp::parse_iso("2027-05-20T14:30:00.000Z").unwrap(),
    }
}

fn exercise(store: &mut dyn KeyValueStore) {
    assert_eq!(load_countdown(&*store), None);
    save_countdown(store, &sample()).unwrap();
    assert_eq!(load_countdown(&*store), Some(sample()));
    clear_countdown(store).unwrap();
    assert_eq!(load_countdown(&*store), None);
}

#[test]
fn every_backend_round_trips_a_countdown() {
    let dir = TempDir::new().unwrap();

    exercise(&mut MemoryStore::new());
    exercise(&mut JsonFileStore::new(dir.path().join("storage.json")));
    exercise(&mut SqliteStore::open_at(&dir.path().join("countdown.db")).unwrap());
    exercise(&mut QueryStore::parse("https://example.com/countdown").unwrap());
}

#[test]
fn boxed_store_keeps_its_layout() {
    let mut store: Box<dyn KeyValueStore> =
        Box::new(QueryStore::parse("https://example.com/").unwrap());
    save_countdown(&mut store, &sample()).unwrap();
    assert_eq!(store.get("name").unwrap().as_deref(), Some("Conference talk"));
}

#[test]
fn file_store_survives_process_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    save_countdown(&mut JsonFileStore::new(&path), &sample()).unwrap();
    assert_eq!(load_countdown(&JsonFileStore::new(&path)), Some(sample()));
}

#[test]
fn corrupt_file_loads_as_no_target() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "this is not json").unwrap();
    assert_eq!(load_countdown(&JsonFileStore::new(&path)), None);
}

#[test]
fn share_link_round_trip() {
    let url = share_url("https://countdowntodate.netlify.app/", &sample()).unwrap();
    assert_eq!(decode_share_url(&url), Some(sample()));
}

#[test]
fn pomodoro_resumes_from_sqlite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("countdown.db");
    let start = Timestamp::from_millis(1_700_000_000_000);

    let mut pomodoro = Pomodoro::default();
    pomodoro.start(start);
    save_pomodoro(&mut SqliteStore::open_at(&path).unwrap(), &pomodoro.state()).unwrap();

    let state = load_pomodoro(&SqliteStore::open_at(&path).unwrap());
    let resumed = Pomodoro::from_state(state, std::time::Duration::from_secs(25 * 60));
    assert_eq!(resumed.remaining_secs(start.plus_millis(60_000)), 24 * 60);
}
