//! Application configuration with compiled-in defaults.
//!
//! DESIGN
//! ======
//! The app has no server and reads no environment, so configuration is a
//! typed value built from constants. Tests construct variants directly; the
//! root component provides the default through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://v2.jokeapi.dev/joke";
pub const DEFAULT_BLACKLIST_FLAGS: [&str; 4] = ["religious", "political", "racist", "sexist"];
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 1500;
pub const DEFAULT_COPY_RESET_MS: u32 = 2000;
pub const DEFAULT_HISTORY_CAPACITY: usize = 3;
pub const DEFAULT_DARK_MODE_KEY: &str = "darkMode";
pub const DEFAULT_HISTORY_KEY: &str = "jokeHistory";

/// `localStorage` keys for the two persisted slices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub dark_mode: String,
    pub history: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { dark_mode: DEFAULT_DARK_MODE_KEY.to_owned(), history: DEFAULT_HISTORY_KEY.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// JokeAPI base, without trailing slash.
    pub api_base_url: String,
    /// Content flags excluded from every request.
    pub blacklist_flags: Vec<String>,
    /// Delay before a two-part joke's delivery is shown.
    pub reveal_delay_ms: u32,
    /// How long the "Copied!" confirmation stays up.
    pub copy_reset_ms: u32,
    /// Number of history entries retained.
    pub history_capacity: usize,
    pub storage_keys: StorageKeys,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            blacklist_flags: DEFAULT_BLACKLIST_FLAGS.iter().map(|f| (*f).to_owned()).collect(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            copy_reset_ms: DEFAULT_COPY_RESET_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            storage_keys: StorageKeys::default(),
        }
    }
}

impl AppConfig {
    /// Replace the API base URL, normalizing away trailing slashes.
    #[must_use]
    pub fn with_api_base_url(mut self, base: &str) -> Self {
        self.api_base_url = normalize_base_url(base);
        self
    }

    /// Comma-joined `blacklistFlags` query value.
    #[must_use]
    pub fn blacklist_query(&self) -> String {
        self.blacklist_flags.join(",")
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
