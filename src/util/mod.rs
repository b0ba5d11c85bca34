//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod category_style;
pub mod clipboard;
pub mod clock;
pub mod dark_mode;
pub mod persistence;
pub mod timer;
