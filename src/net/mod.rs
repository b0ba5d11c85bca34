//! Networking modules for the JokeAPI boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single GET per fetch and classifies the outcome, and
//! `types` defines the joke payload shared with persisted history.

pub mod api;
pub mod types;
