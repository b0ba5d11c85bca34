//! # laughx
//!
//! Leptos + WASM joke client. Fetches a random joke from JokeAPI, themes it by
//! category, keeps the last few jokes in `localStorage`, and offers copy and
//! dark-mode toggles.
//!
//! Browser effects are gated behind the `csr` feature. Without it the state
//! machine, wire types, and persistence logic compile and run natively, which
//! is how the test suite exercises them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
