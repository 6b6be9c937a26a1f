//! Root application component with context providers and the
//! session-driven view switch.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::toast_host::ToastHost;
use crate::pages::auth::AuthPage;
use crate::pages::profile::ProfilePage;
use crate::state::auth::AuthState;
use crate::state::forms::{LoginForm, RegisterForm};
use crate::state::toast::ToastState;

/// Root component.
///
/// Provides the shared state contexts and renders exactly one of the two
/// screens: the profile card when a user is signed in, the auth card
/// otherwise.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let login = RwSignal::new(LoginForm::default());
    let register = RwSignal::new(RegisterForm::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(login);
    provide_context(register);
    provide_context(toasts);

    view! {
        <Stylesheet id="kabinet" href="/pkg/kabinet.css"/>
        <Title text="Личный кабинет"/>

        <main class="page">
            <Show when=move || auth.get().user.is_some() fallback=move || view! { <AuthPage/> }>
                <ProfilePage/>
            </Show>
        </main>
        <ToastHost/>
    }
}
