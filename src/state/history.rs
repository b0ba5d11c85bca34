//! Newest-first ring of recently fetched jokes.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::net::types::Joke;

/// One remembered joke, keyed by its millisecond timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Milliseconds since the Unix epoch. Unique and increasing within a history.
    pub id: u64,
    pub joke: Joke,
}

/// Fixed-capacity history, newest first. Pushing onto a full ring drops the oldest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JokeHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl JokeHistory {
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    /// Rebuild from persisted entries, keeping at most `capacity` of the newest.
    ///
    /// Stored order is not trusted: entries are sorted newest first and
    /// duplicate ids collapse to one. An entry at `u64::MAX` is dropped since
    /// no later id could follow it.
    pub fn from_entries(mut entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        entries.retain(|e| e.id < u64::MAX);
        entries.sort_by(|a, b| b.id.cmp(&a.id));
        entries.dedup_by_key(|e| e.id);
        let mut entries = VecDeque::from(entries);
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Record `joke` at `now_ms` and return the assigned id.
    ///
    /// Ids never repeat: a clock reading at or behind the newest entry yields
    /// `newest + 1`. If the newest id is already `u64::MAX` the history is
    /// discarded and the clock reading is used.
    pub fn push(&mut self, joke: Joke, now_ms: u64) -> u64 {
        let id = match self.entries.front() {
            Some(newest) if now_ms <= newest.id => match newest.id.checked_add(1) {
                Some(next) => next,
                None => {
                    self.entries.clear();
                    now_ms
                }
            },
            _ => now_ms,
        };
        if self.capacity == 0 {
            return id;
        }
        self.entries.push_front(HistoryEntry { id, joke });
        self.entries.truncate(self.capacity);
        id
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Snapshot in newest-first order, as persisted.
    #[must_use]
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}
