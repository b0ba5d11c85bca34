//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The page owns fetch/copy orchestration and timer slots, and delegates
//! rendering details to `components`.

pub mod home;
