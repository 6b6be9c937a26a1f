//! Page modules for the two screens.
//!
//! ARCHITECTURE
//! ============
//! Which page renders is a pure function of session presence, decided by the
//! root component; pages own their screen's orchestration and read shared
//! state from context.

pub mod auth;
pub mod profile;
