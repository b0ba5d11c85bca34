//! Dark-mode toggle and category filter buttons.

use leptos::prelude::*;

use crate::net::types::Category;
use crate::state::joke::JokeState;
use crate::util::category_style::filter_glyph;

/// Control strip above the joke card.
#[component]
pub fn CategoryBar(on_toggle_dark: Callback<()>, on_category: Callback<Category>) -> impl IntoView {
    let state = expect_context::<RwSignal<JokeState>>();
    let dark = move || state.with(|s| s.dark_mode);

    let filters = Category::ALL
        .into_iter()
        .map(|category| {
            let active = move || state.with(|s| s.category == category);
            view! {
                <button
                    class="category-bar__filter"
                    class:category-bar__filter--active=active
                    on:click=move |_| on_category.run(category)
                    title=category.label()
                >
                    <span class="category-bar__glyph">{filter_glyph(category)}</span>
                    <span class="category-bar__label">{category.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="category-bar">
            <button
                class="btn category-bar__dark-toggle"
                on:click=move |_| on_toggle_dark.run(())
                title="Toggle dark mode"
            >
                {move || if dark() { "☀" } else { "☾" }}
            </button>
            {filters}
        </nav>
    }
}
