//! Card showing the current joke, the loading state, or the empty prompt.
//!
//! DESIGN
//! ======
//! Two-part jokes render the setup immediately and the delivery only once the
//! store's reveal flag is set. The category badge is hidden for the error joke.

use leptos::prelude::*;

use crate::net::types::Joke;
use crate::state::joke::JokeState;
use crate::util::category_style::joke_style;

#[component]
pub fn JokeCard() -> impl IntoView {
    let state = expect_context::<RwSignal<JokeState>>();

    let card_class = move || {
        state.with(|s| {
            let mut class = match &s.current {
                Some(joke) => format!("joke-card joke-card--themed bg-gradient-to-br {}", joke_style(joke).gradient),
                None => "joke-card".to_owned(),
            };
            if s.loading {
                class.push_str(" joke-card--loading");
            }
            class
        })
    };

    let body = move || {
        let (is_loading, current, show_delivery) = state.with(|s| (s.loading, s.current.clone(), s.show_delivery));
        if is_loading {
            return view! {
                <div class="joke-card__loading">
                    <div class="joke-card__spinner"></div>
                    <p>"Finding the perfect joke..."</p>
                </div>
            }
            .into_any();
        }
        match current {
            Some(joke) => joke_body(joke, show_delivery),
            None => view! {
                <div class="joke-card__empty">
                    <div class="joke-card__mask">"🎭"</div>
                    <p>"Click the button below to get a joke!"</p>
                </div>
            }
            .into_any(),
        }
    };

    let badge = move || {
        state.with(|s| {
            s.current
                .as_ref()
                .and_then(Joke::category)
                .map(str::to_owned)
        })
    };

    view! {
        <section class=card_class>
            <div class="joke-card__content">{body}</div>
            {move || badge().map(|category| view! { <span class="joke-card__badge">{category}</span> })}
        </section>
    }
}

fn joke_body(joke: Joke, show_delivery: bool) -> AnyView {
    let reaction = joke_style(&joke).reaction;
    match joke {
        Joke::Single { text, .. } => view! {
            <div class="joke-card__single">
                <p class="joke-card__text">{text}</p>
                <div class="joke-card__reaction">{reaction}</div>
            </div>
        }
        .into_any(),
        Joke::TwoPart { setup, delivery, .. } => view! {
            <div class="joke-card__twopart">
                <p class="joke-card__setup">{setup}</p>
                {show_delivery.then(|| view! {
                    <div class="joke-card__delivery">
                        <p class="joke-card__punchline">{delivery}</p>
                        <div class="joke-card__reaction">{reaction}</div>
                    </div>
                })}
            </div>
        }
        .into_any(),
        Joke::Error { message } => view! {
            <div class="joke-card__single joke-card__single--error">
                <p class="joke-card__text">{message}</p>
                <div class="joke-card__reaction">{reaction}</div>
            </div>
        }
        .into_any(),
    }
}
