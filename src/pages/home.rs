//! The single screen: controls, joke card, actions, and history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Handlers here run the store transitions, hand changed slices to the
//! persistence observer, and own the two timer slots (delivery reveal and
//! copy confirmation). Each slot is cancelled or replaced before new work is
//! scheduled, and the store's generation check drops anything that slips
//! through.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::components::{
    action_bar::ActionBar, category_bar::CategoryBar, header::Header, history_panel::HistoryPanel,
    joke_card::JokeCard,
};
use crate::config::AppConfig;
use crate::net::types::{Category, Joke};
use crate::state::joke::{JokeState, apply_observed};
use crate::util::dark_mode;
use crate::util::persistence::{BrowserStorage, Persistence};
use crate::util::timer::TimerSlot;

type Timer = StoredValue<TimerSlot, LocalStorage>;
type Observer = StoredValue<Persistence<BrowserStorage>>;

/// Home page.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<JokeState>>();
    let config = expect_context::<StoredValue<AppConfig>>();
    let persistence = expect_context::<Observer>();
    let reveal_timer: Timer = StoredValue::new_local(TimerSlot::default());
    let copy_timer: Timer = StoredValue::new_local(TimerSlot::default());

    let on_fetch = Callback::new(move |()| start_fetch(state, config, persistence, reveal_timer));
    let on_copy = Callback::new(move |given: Option<Joke>| start_copy(state, config, copy_timer, given));
    let on_category = Callback::new(move |category: Category| state.update(|s| s.set_category(category)));

    let on_clear = Callback::new(move |()| {
        state.update(|s| {
            persistence.with_value(|p| apply_observed(s, p, JokeState::clear_history));
        });
    });

    let on_toggle_dark = Callback::new(move |()| {
        state.update(|s| {
            persistence.with_value(|p| apply_observed(s, p, JokeState::toggle_dark_mode));
        });
        dark_mode::apply(state.with_untracked(|s| s.dark_mode));
    });

    on_cleanup(move || {
        reveal_timer.update_value(TimerSlot::cancel);
        copy_timer.update_value(TimerSlot::cancel);
    });

    view! {
        <div class="app" class:app--dark=move || state.with(|s| s.dark_mode)>
            <Header/>
            <CategoryBar on_toggle_dark=on_toggle_dark on_category=on_category/>
            <main class="app__main">
                <JokeCard/>
                <ActionBar on_fetch=on_fetch on_copy=on_copy/>
                <HistoryPanel on_copy=on_copy on_clear=on_clear/>
            </main>
            <footer class="app__footer">"Made with ♥ and laughter"</footer>
        </div>
    }
}

fn start_fetch(state: RwSignal<JokeState>, config: StoredValue<AppConfig>, persistence: Observer, reveal_timer: Timer) {
    let Some(category) = state.try_update(JokeState::begin_request).flatten() else {
        return;
    };
    reveal_timer.update_value(TimerSlot::cancel);

    #[cfg(feature = "csr")]
    {
        use crate::net::api::{HttpJokeSource, request_joke};
        use crate::state::joke::settle_fetch;

        leptos::task::spawn_local(async move {
            let source = HttpJokeSource::new(config.get_value());
            let joke = request_joke(&source, category).await;
            let now = crate::util::clock::now_ms();
            let settled = state.try_update(|s| persistence.with_value(|p| settle_fetch(s, p, joke, now)));
            if let Some(generation) = settled.and_then(|s| s.reveal) {
                let delay = config.with_value(|c| c.reveal_delay_ms);
                reveal_timer.update_value(|timer| {
                    timer.schedule(delay, move || {
                        state.update(|s| {
                            s.reveal_delivery(generation);
                        });
                    });
                });
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (category, config, persistence);
    }
}

fn start_copy(state: RwSignal<JokeState>, config: StoredValue<AppConfig>, copy_timer: Timer, given: Option<Joke>) {
    let Some(text) = state.with_untracked(|s| s.copy_text(given.as_ref())) else {
        return;
    };

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match crate::util::clipboard::write_text(&text).await {
                Ok(()) => {
                    let Some(generation) = state.try_update(JokeState::mark_copied) else {
                        return;
                    };
                    let delay = config.with_value(|c| c.copy_reset_ms);
                    copy_timer.update_value(|timer| {
                        timer.schedule(delay, move || {
                            state.update(|s| {
                                s.reset_copied(generation);
                            });
                        });
                    });
                }
                Err(err) => log::error!("failed to copy: {err}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (text, config, copy_timer);
    }
}
