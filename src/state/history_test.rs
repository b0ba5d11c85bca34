use super::*;

// =============================================================
// Helpers
// =============================================================

fn joke(n: usize) -> Joke {
    Joke::Single { category: "Pun".to_owned(), text: format!("joke {n}") }
}

fn texts(history: &JokeHistory) -> Vec<String> {
    history.iter().map(|e| e.joke.clipboard_text()).collect()
}

// =============================================================
// Capacity
// =============================================================

#[test]
fn new_history_is_empty() {
    let history = JokeHistory::new(3);
    assert!(history.is_empty());
    assert_eq!(history.capacity(), 3);
}

#[test]
fn push_keeps_newest_first() {
    let mut history = JokeHistory::new(3);
    history.push(joke(1), 100);
    history.push(joke(2), 200);
    assert_eq!(texts(&history), vec!["joke 2", "joke 1"]);
}

#[test]
fn push_never_exceeds_capacity() {
    let mut history = JokeHistory::new(3);
    for n in 0..10 {
        history.push(joke(n), 1_000 + n as u64);
        assert!(history.len() <= 3);
    }
    assert_eq!(texts(&history), vec!["joke 9", "joke 8", "joke 7"]);
}

#[test]
fn zero_capacity_stores_nothing() {
    let mut history = JokeHistory::new(0);
    history.push(joke(1), 5);
    assert!(history.is_empty());
}

// =============================================================
// Ids
// =============================================================

#[test]
fn push_uses_clock_reading_as_id() {
    let mut history = JokeHistory::new(3);
    assert_eq!(history.push(joke(1), 1_700_000_000_000), 1_700_000_000_000);
}

#[test]
fn push_bumps_id_when_clock_does_not_advance() {
    let mut history = JokeHistory::new(3);
    assert_eq!(history.push(joke(1), 500), 500);
    assert_eq!(history.push(joke(2), 500), 501);
    assert_eq!(history.push(joke(3), 400), 502);
}

#[test]
fn ids_are_unique_across_ring() {
    let mut history = JokeHistory::new(3);
    for n in 0..3 {
        history.push(joke(n), 42);
    }
    let mut ids: Vec<u64> = history.iter().map(|e| e.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

// =============================================================
// Clear / restore
// =============================================================

#[test]
fn clear_empties_history() {
    let mut history = JokeHistory::new(3);
    history.push(joke(1), 1);
    history.push(joke(2), 2);
    history.clear();
    assert!(history.is_empty());
    assert!(history.to_vec().is_empty());
}

#[test]
fn from_entries_truncates_to_capacity() {
    let entries = (0..5)
        .map(|n| HistoryEntry { id: 10 - n as u64, joke: joke(n) })
        .collect();
    let history = JokeHistory::from_entries(entries, 3);
    assert_eq!(texts(&history), vec!["joke 0", "joke 1", "joke 2"]);
}

#[test]
fn history_entry_serializes_as_id_and_joke() {
    let entry = HistoryEntry { id: 7, joke: joke(1) };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"id": 7, "joke": {"type": "single", "category": "Pun", "joke": "joke 1"}})
    );
}

// =============================================================
// Untrusted restored entries
// =============================================================

#[test]
fn from_entries_drops_entry_at_max_id_so_push_does_not_overflow() {
    let entries = vec![
        HistoryEntry { id: u64::MAX, joke: joke(0) },
        HistoryEntry { id: 3, joke: joke(1) },
    ];
    let mut history = JokeHistory::from_entries(entries, 3);
    assert_eq!(history.len(), 1);
    assert_eq!(history.push(joke(2), 5), 5);
    assert_eq!(texts(&history), vec!["joke 2", "joke 1"]);
}

#[test]
fn push_after_max_id_resets_history_instead_of_wrapping() {
    let mut history = JokeHistory::new(3);
    history.push(joke(0), u64::MAX);
    assert_eq!(history.push(joke(1), 5), 5);
    assert_eq!(texts(&history), vec!["joke 1"]);
}

#[test]
fn from_entries_sorts_newest_first() {
    let entries = vec![
        HistoryEntry { id: 1, joke: joke(1) },
        HistoryEntry { id: 3, joke: joke(3) },
        HistoryEntry { id: 2, joke: joke(2) },
    ];
    let history = JokeHistory::from_entries(entries, 3);
    assert_eq!(texts(&history), vec!["joke 3", "joke 2", "joke 1"]);
}

#[test]
fn from_entries_collapses_duplicate_ids() {
    let entries = vec![
        HistoryEntry { id: 7, joke: joke(1) },
        HistoryEntry { id: 7, joke: joke(2) },
        HistoryEntry { id: 6, joke: joke(3) },
    ];
    let mut history = JokeHistory::from_entries(entries, 3);
    assert_eq!(history.len(), 2);
    history.push(joke(4), 1);
    let ids: Vec<u64> = history.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![8, 7, 6]);
}
