//! "Previous Laughs" list with per-row copy and a clear action.

use leptos::prelude::*;

use crate::net::types::Joke;
use crate::state::history::HistoryEntry;
use crate::state::joke::JokeState;
use crate::util::category_style::joke_style;
use crate::util::clock::local_time_label;

#[component]
pub fn HistoryPanel(on_copy: Callback<Option<Joke>>, on_clear: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<JokeState>>();
    let has_entries = move || state.with(|s| !s.history.is_empty());

    let rows = move || {
        state
            .with(|s| s.history.to_vec())
            .into_iter()
            .map(|entry| history_row(entry, on_copy))
            .collect_view()
    };

    view! {
        <section class="history">
            <div class="history__header">
                <h2 class="history__title">"Previous Laughs"</h2>
                <Show when=has_entries>
                    <button class="btn history__clear" on:click=move |_| on_clear.run(())>
                        "Clear"
                    </button>
                </Show>
            </div>
            <Show
                when=has_entries
                fallback=|| {
                    view! {
                        <div class="history__empty">
                            <div class="history__empty-icon">"📚"</div>
                            <p>"Your joke history will appear here"</p>
                        </div>
                    }
                }
            >
                <ul class="history__list">{rows}</ul>
            </Show>
        </section>
    }
}

fn history_row(entry: HistoryEntry, on_copy: Callback<Option<Joke>>) -> impl IntoView {
    let reaction = joke_style(&entry.joke).reaction;
    let meta = format!("{} • {}", entry.joke.display_category(), local_time_label(entry.id));
    let lines = match &entry.joke {
        Joke::TwoPart { setup, delivery, .. } => view! {
            <div class="history__lines">
                <p class="history__setup">{setup.clone()}</p>
                <p class="history__delivery">{delivery.clone()}</p>
            </div>
        }
        .into_any(),
        single_or_error => view! {
            <div class="history__lines">
                <p class="history__text">{single_or_error.clipboard_text()}</p>
            </div>
        }
        .into_any(),
    };
    let joke = entry.joke;

    view! {
        <li class="history__row">
            <div class="history__body">
                {lines}
                <div class="history__meta">
                    <span class="history__reaction">{reaction}</span>
                    <span class="history__category">{meta}</span>
                </div>
            </div>
            <button
                class="btn history__copy"
                on:click=move |_| on_copy.run(Some(joke.clone()))
                title="Copy joke"
            >
                "⧉"
            </button>
        </li>
    }
}
