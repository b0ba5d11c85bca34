//! Joke payload and category types.
//!
//! DESIGN
//! ======
//! `Joke` mirrors JokeAPI's `type`-tagged payload so the same serde shape reads
//! API responses and the persisted history. The `error` variant only ever
//! originates locally; `net::api` rejects it from the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User-facing text of the locally synthesized error joke.
pub const FETCH_FAILED_MESSAGE: &str = "Oops! Couldn't fetch a joke. Try again later.";

/// Category label shown for the error joke.
pub const ERROR_CATEGORY_LABEL: &str = "Error";

/// Joke filter selectable in the category bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Any,
    Programming,
    Pun,
    Dark,
    Spooky,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 5] = [Self::Any, Self::Programming, Self::Pun, Self::Dark, Self::Spooky];

    /// Stable UI identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Any => "all",
            Self::Programming => "programming",
            Self::Pun => "pun",
            Self::Dark => "dark",
            Self::Spooky => "spooky",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "All",
            Self::Programming => "Programming",
            Self::Pun => "Pun",
            Self::Dark => "Dark",
            Self::Spooky => "Spooky",
        }
    }

    /// JokeAPI path segment for this filter.
    #[must_use]
    pub fn api_name(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Programming => "Programming",
            Self::Pun => "Pun",
            Self::Dark => "Dark",
            Self::Spooky => "Spooky",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Resolve a `category` string as reported by the API.
    ///
    /// Categories outside the filter set (`Misc`, `Christmas`) return `None`.
    #[must_use]
    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.api_name() == name)
    }
}

/// A joke as displayed and stored in history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Joke {
    Single {
        category: String,
        #[serde(rename = "joke")]
        text: String,
    },
    TwoPart {
        category: String,
        setup: String,
        delivery: String,
    },
    /// Synthesized when a fetch fails.
    Error { message: String },
}

impl Joke {
    /// The fixed fallback shown in place of a joke after a failed fetch.
    #[must_use]
    pub fn fetch_failed() -> Self {
        Self::Error { message: FETCH_FAILED_MESSAGE.to_owned() }
    }

    /// API category; `None` for the error variant.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Single { category, .. } | Self::TwoPart { category, .. } => Some(category),
            Self::Error { .. } => None,
        }
    }

    /// Category text for history rows and theming lookups.
    #[must_use]
    pub fn display_category(&self) -> &str {
        self.category().unwrap_or(ERROR_CATEGORY_LABEL)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    #[must_use]
    pub fn is_two_part(&self) -> bool {
        matches!(self, Self::TwoPart { .. })
    }

    /// Plain-text form written to the clipboard.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        match self {
            Self::Single { text, .. } => text.clone(),
            Self::TwoPart { setup, delivery, .. } => format!("{setup}\n{delivery}"),
            Self::Error { message } => message.clone(),
        }
    }
}
