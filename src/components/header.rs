//! Title block with the delivered-jokes tagline.

use leptos::prelude::*;

use crate::state::joke::JokeState;

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<RwSignal<JokeState>>();

    view! {
        <header class="header">
            <div class="header__logo">"😂"</div>
            <h1 class="header__title">
                <span class="header__title-laugh">"Laugh"</span>
                <span class="header__title-x">"X"</span>
            </h1>
            <p class="header__tagline">"Your daily dose of laughter ✨"</p>
            <span class="header__status">{move || state.with(JokeState::status_line)}</span>
        </header>
    }
}
