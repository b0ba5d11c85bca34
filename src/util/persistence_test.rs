use super::*;
use crate::net::types::Joke;
use crate::state::joke::{apply_observed, settle_fetch};

// =============================================================
// Helpers
// =============================================================

fn persistence(store: MemoryStorage) -> Persistence<MemoryStorage> {
    Persistence::new(store, &AppConfig::default())
}

fn single(text: &str) -> Joke {
    Joke::Single { category: "Pun".to_owned(), text: text.to_owned() }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_uses_stored_dark_mode_over_ambient_preference() {
    let p = persistence(MemoryStorage::default().with_item("darkMode", "false"));
    assert!(!p.load(true).dark_mode);

    let p = persistence(MemoryStorage::default().with_item("darkMode", "true"));
    assert!(p.load(false).dark_mode);
}

#[test]
fn load_falls_back_to_ambient_preference_when_absent() {
    let p = persistence(MemoryStorage::default());
    assert!(p.load(true).dark_mode);
    assert!(!p.load(false).dark_mode);
}

#[test]
fn load_treats_unknown_dark_mode_value_as_light() {
    let p = persistence(MemoryStorage::default().with_item("darkMode", "yes"));
    assert!(!p.load(true).dark_mode);
}

#[test]
fn load_reads_stored_history() {
    let raw = r#"[{"id":2,"joke":{"type":"single","category":"Pun","joke":"b"}},
                 {"id":1,"joke":{"type":"twopart","category":"Dark","setup":"s","delivery":"d"}}]"#;
    let p = persistence(MemoryStorage::default().with_item("jokeHistory", raw));
    let restored = p.load(false);
    assert_eq!(restored.history.len(), 2);
    assert_eq!(restored.history[0].id, 2);
    assert!(restored.history[1].joke.is_two_part());
}

#[test]
fn load_treats_unparseable_history_as_empty() {
    let p = persistence(MemoryStorage::default().with_item("jokeHistory", "{not json"));
    assert!(p.load(false).history.is_empty());

    let p = persistence(MemoryStorage::default().with_item("jokeHistory", r#"{"id":1}"#));
    assert!(p.load(false).history.is_empty());
}

#[test]
fn load_does_not_write() {
    let store = MemoryStorage::default();
    let _ = persistence(store.clone()).load(true);
    assert_eq!(store.writes(), 0);
}

// =============================================================
// notify
// =============================================================

#[test]
fn toggling_dark_mode_twice_restores_flag_with_one_write_each() {
    let store = MemoryStorage::default().with_item("darkMode", "false");
    let p = persistence(store.clone());
    let mut state = JokeState::restore(p.load(false), 3);

    let slice = state.toggle_dark_mode();
    p.notify(&state, slice);
    assert_eq!(store.get_item("darkMode").as_deref(), Some("true"));
    assert_eq!(store.writes(), 1);

    let slice = state.toggle_dark_mode();
    p.notify(&state, slice);
    assert_eq!(store.get_item("darkMode").as_deref(), Some("false"));
    assert_eq!(store.writes(), 2);
}

#[test]
fn history_notification_writes_only_history_key() {
    let store = MemoryStorage::default();
    let p = persistence(store.clone());
    let mut state = JokeState::default();
    state.begin_request();
    let settled = state.finish_request(single("a"), 10);
    p.notify(&state, settled.changed);

    assert_eq!(store.writes(), 1);
    assert!(store.get_item("darkMode").is_none());
    let saved: Vec<HistoryEntry> = load_json(&store, "jokeHistory").unwrap();
    assert_eq!(saved, state.history.to_vec());
}

#[test]
fn cleared_history_persists_as_empty_array() {
    let store = MemoryStorage::default();
    let p = persistence(store.clone());
    let mut state = JokeState::default();
    state.history.push(single("a"), 1);
    let slice = state.clear_history();
    p.notify(&state, slice);
    assert_eq!(store.get_item("jokeHistory").as_deref(), Some("[]"));
    assert!(p.load(false).history.is_empty());
}

#[test]
fn persisted_history_round_trips_through_restore() {
    let store = MemoryStorage::default();
    let p = persistence(store.clone());
    let mut state = JokeState::default();
    for (n, text) in ["a", "b", "c", "d"].iter().enumerate() {
        state.begin_request();
        let settled = state.finish_request(single(text), 100 + n as u64);
        p.notify(&state, settled.changed);
    }
    let restored = JokeState::restore(p.load(false), 3);
    assert_eq!(restored.history, state.history);
}

#[test]
fn custom_storage_keys_are_respected() {
    let mut config = AppConfig::default();
    config.storage_keys.dark_mode = "laughx:dark".to_owned();
    let store = MemoryStorage::default();
    let p = Persistence::new(store.clone(), &config);
    p.save_dark_mode(true);
    assert_eq!(store.get_item("laughx:dark").as_deref(), Some("true"));
    assert!(store.get_item("darkMode").is_none());
}

// =============================================================
// Observed transitions
// =============================================================

#[test]
fn settle_fetch_persists_history_once() {
    let store = MemoryStorage::default();
    let p = persistence(store.clone());
    let mut state = JokeState::default();
    state.begin_request();
    let settled = settle_fetch(&mut state, &p, single("a"), 10);

    assert_eq!(settled.changed, Slice::History);
    assert!(!state.loading);
    assert_eq!(store.writes(), 1);
    assert_eq!(p.load(false).history, state.history.to_vec());
}

#[test]
fn settle_fetch_persists_error_joke() {
    let store = MemoryStorage::default();
    let p = persistence(store.clone());
    let mut state = JokeState::default();
    state.begin_request();
    settle_fetch(&mut state, &p, Joke::fetch_failed(), 10);

    let saved = p.load(false).history;
    assert_eq!(saved.len(), 1);
    assert!(saved[0].joke.is_error());
}

#[test]
fn settle_fetch_reveal_generation_goes_stale_after_next_request() {
    let p = persistence(MemoryStorage::default());
    let mut state = JokeState::default();
    state.begin_request();
    let twopart = Joke::TwoPart { category: "Pun".to_owned(), setup: "S".to_owned(), delivery: "D".to_owned() };
    let generation = settle_fetch(&mut state, &p, twopart, 10).reveal.unwrap();

    state.begin_request();
    assert!(!state.reveal_delivery(generation));
}

#[test]
fn apply_observed_toggle_writes_dark_mode_key() {
    let store = MemoryStorage::default();
    let p = persistence(store.clone());
    let mut state = JokeState::default();

    assert_eq!(apply_observed(&mut state, &p, JokeState::toggle_dark_mode), Slice::DarkMode);
    assert_eq!(store.get_item("darkMode").as_deref(), Some("true"));
    apply_observed(&mut state, &p, JokeState::toggle_dark_mode);
    assert_eq!(store.get_item("darkMode").as_deref(), Some("false"));
    assert_eq!(store.writes(), 2);
}

#[test]
fn apply_observed_clear_writes_empty_history() {
    let store = MemoryStorage::default();
    let p = persistence(store.clone());
    let mut state = JokeState::default();
    state.begin_request();
    settle_fetch(&mut state, &p, single("a"), 10);

    apply_observed(&mut state, &p, JokeState::clear_history);
    assert_eq!(store.get_item("jokeHistory").as_deref(), Some("[]"));
    assert_eq!(store.writes(), 2);
}

#[test]
fn restored_history_with_max_id_survives_next_fetch() {
    let raw = format!(r#"[{{"id":{},"joke":{{"type":"single","category":"Pun","joke":"x"}}}}]"#, u64::MAX);
    let p = persistence(MemoryStorage::default().with_item("jokeHistory", &raw));
    let mut state = JokeState::restore(p.load(false), 3);
    state.begin_request();
    settle_fetch(&mut state, &p, single("a"), 10);
    assert_eq!(state.history.iter().next().map(|e| e.id), Some(10));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let store = BrowserStorage;
    store.set_item("darkMode", "true");
    assert_eq!(store.get_item("darkMode"), None);
}
