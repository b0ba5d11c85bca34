//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::AppConfig;
use crate::pages::home::HomePage;
use crate::state::joke::JokeState;
use crate::util::dark_mode;
use crate::util::persistence::{BrowserStorage, Persistence};

/// Root application component.
///
/// Restores the persisted slices once, applies the theme, and provides the
/// store, config, and persistence observer to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    let persistence = Persistence::new(BrowserStorage, &config);
    let restored = persistence.load(dark_mode::prefers_dark_scheme());
    let state = RwSignal::new(JokeState::restore(restored, config.history_capacity));
    dark_mode::apply(state.with_untracked(|s| s.dark_mode));

    provide_context(state);
    provide_context(StoredValue::new(config));
    provide_context(StoredValue::new(persistence));

    view! {
        <Title text="LaughX"/>
        <HomePage/>
    }
}
