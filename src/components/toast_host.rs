//! Fixed overlay rendering the toast queue.
//!
//! Toasts dismiss on click anywhere in the browser build and auto-dismiss
//! after a few seconds; the native build renders the stack without timers.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Seconds a toast stays visible unless clicked away.
#[cfg(feature = "csr")]
const DISMISS_AFTER_SECS: u64 = 4;

/// Overlay host for the shared [`ToastState`] queue.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // One dismiss timer per new toast. Ids are monotonic, so a watermark of
    // the next untimed id is the only bookkeeping needed.
    #[cfg(feature = "csr")]
    {
        let timed_below = StoredValue::new(0u64);
        Effect::new(move || {
            for toast in &toasts.get().toasts {
                if toast.id < timed_below.get_value() {
                    continue;
                }
                let id = toast.id;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
                    toasts.update(|state| state.dismiss(id));
                });
                timed_below.set_value(id + 1);
            }
        });
    }

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Success => "toast",
                            ToastKind::Destructive => "toast toast--destructive",
                        };
                        view! {
                            <div class=class on:click=move |_| toasts.update(|state| state.dismiss(id))>
                                <p class="toast__title">{toast.title.clone()}</p>
                                <p class="toast__description">{toast.description.clone()}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
