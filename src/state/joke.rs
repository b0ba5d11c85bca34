//! The app store and its fetch/copy/history transitions.
//!
//! DESIGN
//! ======
//! Every mutating operation returns the persisted [`Slice`] it touched so the
//! caller can hand it to the persistence observer. Timer callbacks carry a
//! generation number; a callback whose generation is no longer current is a
//! no-op, so a late timer can never overwrite newer state.

#[cfg(test)]
#[path = "joke_test.rs"]
mod joke_test;

use super::history::{HistoryEntry, JokeHistory};
use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::net::types::{Category, Joke};

/// Persisted portion of the store that an operation changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slice {
    DarkMode,
    History,
}

/// Implemented by anything that mirrors store changes elsewhere.
pub trait StateObserver {
    fn notify(&self, state: &JokeState, slice: Slice);
}

/// Run `op` on `state` and hand the slice it changed to `observer`.
pub fn apply_observed<O: StateObserver>(
    state: &mut JokeState,
    observer: &O,
    op: impl FnOnce(&mut JokeState) -> Slice,
) -> Slice {
    let slice = op(state);
    observer.notify(state, slice);
    slice
}

/// Settle the in-flight fetch and persist the history it grew.
pub fn settle_fetch<O: StateObserver>(state: &mut JokeState, observer: &O, joke: Joke, now_ms: u64) -> FetchSettled {
    let settled = state.finish_request(joke, now_ms);
    observer.notify(state, settled.changed);
    settled
}

/// Result of settling a fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchSettled {
    pub changed: Slice,
    /// Reveal generation to schedule, for two-part jokes only.
    pub reveal: Option<u64>,
}

/// Values restored from storage at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Restored {
    pub dark_mode: bool,
    pub history: Vec<HistoryEntry>,
}

#[derive(Clone, Debug)]
pub struct JokeState {
    pub current: Option<Joke>,
    pub loading: bool,
    pub category: Category,
    pub dark_mode: bool,
    pub history: JokeHistory,
    pub copied: bool,
    pub show_delivery: bool,
    pub reveal_seq: u64,
    pub copy_seq: u64,
}

impl Default for JokeState {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl JokeState {
    pub fn with_capacity(history_capacity: usize) -> Self {
        Self {
            current: None,
            loading: false,
            category: Category::Any,
            dark_mode: false,
            history: JokeHistory::new(history_capacity),
            copied: false,
            show_delivery: false,
            reveal_seq: 0,
            copy_seq: 0,
        }
    }

    pub fn restore(restored: Restored, history_capacity: usize) -> Self {
        Self {
            dark_mode: restored.dark_mode,
            history: JokeHistory::from_entries(restored.history, history_capacity),
            ..Self::with_capacity(history_capacity)
        }
    }

    /// Enter `loading` and return the category to fetch.
    ///
    /// Returns `None` while a fetch is already in flight. Hides the delivery
    /// line and invalidates any pending reveal.
    pub fn begin_request(&mut self) -> Option<Category> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.show_delivery = false;
        self.reveal_seq += 1;
        Some(self.category)
    }

    /// Settle the in-flight fetch with `joke`, successful or not.
    pub fn finish_request(&mut self, joke: Joke, now_ms: u64) -> FetchSettled {
        let reveal = joke.is_two_part().then_some(self.reveal_seq);
        self.history.push(joke.clone(), now_ms);
        self.current = Some(joke);
        self.loading = false;
        FetchSettled { changed: Slice::History, reveal }
    }

    /// Show the delivery line if `generation` is still current.
    pub fn reveal_delivery(&mut self, generation: u64) -> bool {
        let applies = generation == self.reveal_seq
            && !self.loading
            && self.current.as_ref().is_some_and(Joke::is_two_part);
        if applies {
            self.show_delivery = true;
        }
        applies
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn toggle_dark_mode(&mut self) -> Slice {
        self.dark_mode = !self.dark_mode;
        Slice::DarkMode
    }

    /// Text to copy for `given`, falling back to the current joke.
    #[must_use]
    pub fn copy_text(&self, given: Option<&Joke>) -> Option<String> {
        given.or(self.current.as_ref()).map(Joke::clipboard_text)
    }

    /// Raise the copied confirmation and return its reset generation.
    pub fn mark_copied(&mut self) -> u64 {
        self.copy_seq += 1;
        self.copied = true;
        self.copy_seq
    }

    /// Clear the copied confirmation if `generation` is still current.
    pub fn reset_copied(&mut self, generation: u64) -> bool {
        let applies = generation == self.copy_seq;
        if applies {
            self.copied = false;
        }
        applies
    }

    pub fn clear_history(&mut self) -> Slice {
        self.history.clear();
        Slice::History
    }

    #[must_use]
    pub fn can_copy(&self) -> bool {
        self.current.is_some() && !self.loading
    }

    /// Header tagline.
    #[must_use]
    pub fn status_line(&self) -> String {
        if self.history.is_empty() {
            "Ready to make you smile".to_owned()
        } else {
            format!("{} jokes delivered", self.history.len())
        }
    }
}
