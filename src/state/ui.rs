//! Local UI chrome state for the auth card.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs available on the unauthenticated card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    /// Sign-in form (the landing tab).
    #[default]
    Login,
    /// Account-creation form.
    Register,
}
