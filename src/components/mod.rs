//! Reusable UI component modules.

pub mod toast_host;
