//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Every user-visible outcome (success, rejection, connection failure,
//! farewell) surfaces as a toast; there is no other feedback channel. Ids
//! increase monotonically and are never reused, so the overlay can schedule
//! one dismiss timer per toast without bookkeeping collisions.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral/confirming notification.
    #[default]
    Success,
    /// Failure notification.
    Destructive,
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast with the next id.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.into(),
            description: description.into(),
        });
    }

    /// Remove the toast with the given id, if it is still visible.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
