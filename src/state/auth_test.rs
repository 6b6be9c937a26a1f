use super::*;

fn bob() -> User {
    User {
        id: 1,
        email: "a@b.com".to_owned(),
        username: "Bob".to_owned(),
    }
}

#[test]
fn default_state_is_unauthenticated_and_idle() {
    let state = AuthState::default();
    assert_eq!(state.user, None);
    assert!(!state.busy);
}

#[test]
fn begin_submit_sets_busy() {
    let mut state = AuthState::default();
    state.begin_submit();
    assert!(state.busy);
}

#[test]
fn finish_submit_success_stores_user_and_clears_busy() {
    let mut state = AuthState::default();
    state.begin_submit();
    state.finish_submit(&Ok(bob()));
    assert!(!state.busy);
    assert_eq!(state.user, Some(bob()));
}

#[test]
fn finish_submit_failure_keeps_session_absent() {
    let mut state = AuthState::default();
    state.begin_submit();
    state.finish_submit(&Err(AuthError::Rejected {
        status: 401,
        message: Some("Invalid credentials".to_owned()),
    }));
    assert!(!state.busy);
    assert_eq!(state.user, None);
}

#[test]
fn finish_submit_failure_leaves_existing_session_alone() {
    let mut state = AuthState {
        user: Some(bob()),
        busy: true,
    };
    state.finish_submit(&Err(AuthError::Connection));
    assert!(!state.busy);
    assert_eq!(state.user, Some(bob()));
}

#[test]
fn sign_out_always_returns_to_unauthenticated() {
    let mut state = AuthState {
        user: Some(bob()),
        busy: true,
    };
    state.sign_out();
    assert_eq!(state.user, None);
    assert!(!state.busy);

    // Idempotent from the initial state too.
    let mut idle = AuthState::default();
    idle.sign_out();
    assert_eq!(idle.user, None);
    assert!(!idle.busy);
}

#[test]
fn busy_is_true_only_between_dispatch_and_resolution() {
    let mut state = AuthState::default();
    assert!(!state.busy);
    state.begin_submit();
    assert!(state.busy);
    state.finish_submit(&Ok(bob()));
    assert!(!state.busy);

    state.begin_submit();
    assert!(state.busy);
    state.finish_submit(&Err(AuthError::Connection));
    assert!(!state.busy);
}
