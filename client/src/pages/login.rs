//! Login page backed by the hosted accounts service.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast::notify;
use crate::state::auth::AuthState;
use crate::state::toasts::{ToastKind, ToastStack};

/// Screens the submit locally before any network call. Returns the trimmed
/// email and the password as typed.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastStack>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        auth.update(|state| state.signed_in(user));
                        notify(toasts, ToastKind::Success, "Welcome back.");
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value, password_value);
        }
    };

    let sso_hint = move |_| notify(toasts, ToastKind::Info, "Single sign-on is on the way.");

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-card__brand">"Lumina"</a>
                <h1 class="auth-card__title">"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to keep creating"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="auth-form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="auth-form__input"
                        type="password"
                        placeholder="Your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="auth-card__divider"><span>"or"</span></div>
                <button class="btn btn--secondary auth-card__sso" on:click=sso_hint>
                    "Continue with Google"
                </button>
                <p class="auth-card__footer">
                    "New to Lumina? "
                    <a href="/auth/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
