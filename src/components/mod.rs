//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the `JokeState` store from Leptos context and report user
//! actions through callbacks owned by the home page.

pub mod action_bar;
pub mod category_bar;
pub mod header;
pub mod history_panel;
pub mod joke_card;
