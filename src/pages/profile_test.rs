use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(User {
            id: 1,
            email: "a@b.com".to_owned(),
            username: "Bob".to_owned(),
        }),
        busy: false,
    }
}

#[test]
fn display_helpers_read_the_signed_in_user() {
    let state = signed_in();
    assert_eq!(display_username(&state), "Bob");
    assert_eq!(display_email(&state), "a@b.com");
}

#[test]
fn display_helpers_are_empty_without_a_user() {
    let state = AuthState::default();
    assert_eq!(display_username(&state), "");
    assert_eq!(display_email(&state), "");
}

#[test]
fn farewell_copy_is_stable() {
    assert_eq!(farewell_notification(), ("Выход выполнен", "До скорой встречи!"));
}
