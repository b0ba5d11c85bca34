//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `joke` holds the single app store and its transitions; `history` is the
//! bounded ring the store owns. Both are plain structs so transitions are
//! testable without a reactive runtime. Components wrap the store in an
//! `RwSignal` provided through context.

pub mod history;
pub mod joke;
