//! Tabbed login/register card shown while no user is signed in.
//!
//! ARCHITECTURE
//! ============
//! Each tab is a controlled form bound to its buffer. A submit validates the
//! buffer, dispatches one request through `net::api`, and surfaces exactly
//! one toast per outcome. Handlers early-return while a request is in
//! flight; overlapping submits are neither queued nor cancelled.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::AuthError;
use crate::net::types::AuthRequest;
use crate::state::auth::AuthState;
use crate::state::forms::{LoginForm, RegisterForm};
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::AuthTab;

const ERROR_TITLE: &str = "Ошибка";

/// Success toast copy for the given operation.
#[cfg(any(test, feature = "csr"))]
fn success_notification(request: &AuthRequest) -> (&'static str, &'static str) {
    match request {
        AuthRequest::Login { .. } => ("С возвращением!", "Вы вошли в систему"),
        AuthRequest::Register { .. } => ("Добро пожаловать!", "Регистрация успешна"),
    }
}

/// Fallback rejection copy for the given operation, used when the server
/// supplies no `error` text.
#[cfg(any(test, feature = "csr"))]
fn failure_fallback(request: &AuthRequest) -> &'static str {
    match request {
        AuthRequest::Login { .. } => "Неверные данные для входа",
        AuthRequest::Register { .. } => "Не удалось зарегистрироваться",
    }
}

/// Toast description for a failed submit: the server's message when present,
/// the per-operation fallback otherwise, and the connectivity copy for
/// transport failures.
#[cfg(any(test, feature = "csr"))]
fn failure_description(err: &AuthError, fallback: &'static str) -> String {
    match err {
        AuthError::Rejected {
            message: Some(message),
            ..
        } => message.clone(),
        AuthError::Rejected { .. } => fallback.to_owned(),
        AuthError::Connection => "Проблема с подключением к серверу".to_owned(),
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "auth-tab auth-tab--active" } else { "auth-tab" }
}

/// Dispatch one validated request and resolve it into state + a toast.
fn dispatch(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, request: AuthRequest) {
    auth.update(AuthState::begin_submit);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::submit(&request).await;
        match &outcome {
            Ok(_) => {
                let (title, description) = success_notification(&request);
                toasts.update(|t| t.push(ToastKind::Success, title, description));
            }
            Err(err) => {
                let description = failure_description(err, failure_fallback(&request));
                toasts.update(|t| t.push(ToastKind::Destructive, ERROR_TITLE, description));
            }
        }
        auth.update(|a| a.finish_submit(&outcome));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (toasts, request);
    }
}

/// Unauthenticated card: login/register tabs over the shared form buffers.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let login = expect_context::<RwSignal<LoginForm>>();
    let register = expect_context::<RwSignal<RegisterForm>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Local so the card lands back on the login tab after a logout.
    let tab = RwSignal::new(AuthTab::default());

    view! {
        <div class="card auth-card">
            <header class="card__header">
                <div class="card__badge">"✦"</div>
                <h1 class="card__title">"Личный кабинет"</h1>
                <p class="card__subtitle">"Зарегистрируйтесь или войдите в систему"</p>
            </header>

            <div class="auth-tabs">
                <button
                    type="button"
                    class=move || tab_class(tab.get() == AuthTab::Login)
                    on:click=move |_| tab.set(AuthTab::Login)
                >
                    "Вход"
                </button>
                <button
                    type="button"
                    class=move || tab_class(tab.get() == AuthTab::Register)
                    on:click=move |_| tab.set(AuthTab::Register)
                >
                    "Регистрация"
                </button>
            </div>

            <Show
                when=move || tab.get() == AuthTab::Register
                fallback=move || view! { <LoginTab auth=auth form=login toasts=toasts/> }
            >
                <RegisterTab auth=auth form=register toasts=toasts/>
            </Show>
        </div>
    }
}

#[component]
fn LoginTab(
    auth: RwSignal<AuthState>,
    form: RwSignal<LoginForm>,
    toasts: RwSignal<ToastState>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get().busy {
            return;
        }
        match form.get().validate() {
            Ok(request) => dispatch(auth, toasts, request),
            Err(message) => toasts.update(|t| t.push(ToastKind::Destructive, ERROR_TITLE, message)),
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="your@email.com"
                    required=true
                    prop:value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Пароль"
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="••••••••"
                    required=true
                    prop:value=move || form.get().password
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || auth.get().busy>
                {move || if auth.get().busy { "Загрузка..." } else { "Войти" }}
            </button>
        </form>
    }
}

#[component]
fn RegisterTab(
    auth: RwSignal<AuthState>,
    form: RwSignal<RegisterForm>,
    toasts: RwSignal<ToastState>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get().busy {
            return;
        }
        match form.get().validate() {
            Ok(request) => dispatch(auth, toasts, request),
            Err(message) => toasts.update(|t| t.push(ToastKind::Destructive, ERROR_TITLE, message)),
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__label">
                "Имя пользователя"
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="JohnDoe"
                    required=true
                    prop:value=move || form.get().username
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="your@email.com"
                    required=true
                    prop:value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Пароль"
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="••••••••"
                    required=true
                    prop:value=move || form.get().password
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || auth.get().busy>
                {move || if auth.get().busy { "Загрузка..." } else { "Зарегистрироваться" }}
            </button>
        </form>
    }
}
