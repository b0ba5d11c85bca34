//! Fetch and copy buttons under the joke card.

use leptos::prelude::*;

use crate::net::types::Joke;
use crate::state::joke::JokeState;

#[component]
pub fn ActionBar(on_fetch: Callback<()>, on_copy: Callback<Option<Joke>>) -> impl IntoView {
    let state = expect_context::<RwSignal<JokeState>>();
    let loading = move || state.with(|s| s.loading);
    let copied = move || state.with(|s| s.copied);
    let copy_disabled = move || !state.with(JokeState::can_copy);

    view! {
        <div class="action-bar">
            <button
                class="btn btn--primary action-bar__fetch"
                disabled=loading
                on:click=move |_| on_fetch.run(())
            >
                {move || if loading() { "Getting Joke..." } else { "Get Random Joke" }}
            </button>
            <button
                class="btn action-bar__copy"
                class:action-bar__copy--done=copied
                disabled=copy_disabled
                on:click=move |_| on_copy.run(None)
            >
                {move || if copied() { "Copied!" } else { "Copy" }}
            </button>
        </div>
    }
}
