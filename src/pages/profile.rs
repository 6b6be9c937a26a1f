//! Profile card for the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::forms::{LoginForm, RegisterForm};
use crate::state::toast::{ToastKind, ToastState};

/// Farewell toast copy shown on logout.
fn farewell_notification() -> (&'static str, &'static str) {
    ("Выход выполнен", "До скорой встречи!")
}

fn display_username(state: &AuthState) -> String {
    state
        .user
        .as_ref()
        .map_or_else(String::new, |user| user.username.clone())
}

fn display_email(state: &AuthState) -> String {
    state
        .user
        .as_ref()
        .map_or_else(String::new, |user| user.email.clone())
}

/// Authenticated card: identity header, welcome panel, and logout.
///
/// Logout is a pure local reset — it clears the session and both credential
/// buffers without any network call.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let login = expect_context::<RwSignal<LoginForm>>();
    let register = expect_context::<RwSignal<RegisterForm>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_logout = move |_| {
        auth.update(AuthState::sign_out);
        login.update(LoginForm::clear);
        register.update(RegisterForm::clear);
        let (title, description) = farewell_notification();
        toasts.update(|t| t.push(ToastKind::Success, title, description));
    };

    view! {
        <div class="card profile-card">
            <header class="card__header">
                <div class="card__badge">"👤"</div>
                <h1 class="card__title">{move || display_username(&auth.get())}</h1>
                <p class="card__subtitle">{move || display_email(&auth.get())}</p>
            </header>

            <div class="profile-card__welcome">
                <p>"Добро пожаловать в личный кабинет"</p>
            </div>

            <button class="btn profile-card__logout" on:click=on_logout>
                "Выйти"
            </button>
        </div>
    }
}
