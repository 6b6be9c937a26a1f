use super::*;

#[test]
fn auth_tab_default_is_login() {
    assert_eq!(AuthTab::default(), AuthTab::Login);
}

#[test]
fn auth_tab_variants_are_distinct() {
    assert_ne!(AuthTab::Login, AuthTab::Register);
}
