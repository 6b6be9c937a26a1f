use super::*;

#[test]
fn push_appends_with_monotonic_ids() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "A", "first");
    state.push(ToastKind::Destructive, "B", "second");

    let ids: Vec<u64> = state.toasts.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![0, 1]);
    assert_eq!(state.toasts[1].kind, ToastKind::Destructive);
    assert_eq!(state.toasts[1].title, "B");
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "A", "first");
    state.push(ToastKind::Success, "B", "second");

    state.dismiss(0);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].title, "B");

    // Dismissing an unknown id is a no-op.
    state.dismiss(42);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "A", "first");
    state.dismiss(0);
    state.push(ToastKind::Success, "B", "second");

    assert_eq!(state.toasts[0].id, 1);
}

#[test]
fn default_kind_is_success() {
    assert_eq!(ToastKind::default(), ToastKind::Success);
}
