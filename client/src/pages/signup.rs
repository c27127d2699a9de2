//! Signup page. A successful signup is immediately signed in server-side,
//! so the page lands straight on the dashboard.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toast::notify;
use crate::state::auth::AuthState;
use crate::state::toasts::{ToastKind, ToastStack};

/// Minimum password length accepted by the accounts service.
const PASSWORD_MIN_CHARS: usize = 8;

#[derive(Debug, PartialEq, Eq)]
struct SignupInput {
    username: String,
    email: String,
    password: String,
}

/// Screens the submit locally before any network call.
fn validate_signup_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<SignupInput, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Pick a username.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(SignupInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastStack>>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_signup_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(input) => input,
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
                let result = crate::net::api::signup(
                    &input.username,
                    &input.email,
                    &input.password,
                    &input.password,
                )
                .await;
                match result {
                    Ok(user) => {
                        auth.update(|state| state.signed_in(user));
                        notify(toasts, ToastKind::Success, "Welcome to Lumina.");
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
            let _ = (&navigate, input);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-card__brand">"Lumina"</a>
                <h1 class="auth-card__title">"Create your account"</h1>
                <p class="auth-card__subtitle">"Start with free credits, no card required"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="signup-username">"Username"</label>
                    <input
                        id="signup-username"
                        class="auth-form__input"
                        type="text"
                        placeholder="yourname"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="signup-email">"Email"</label>
                    <input
                        id="signup-email"
                        class="auth-form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="signup-password">"Password"</label>
                    <input
                        id="signup-password"
                        class="auth-form__input"
                        type="password"
                        placeholder="At least 8 characters"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="signup-confirm">"Confirm password"</label>
                    <input
                        id="signup-confirm"
                        class="auth-form__input"
                        type="password"
                        placeholder="Same password again"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/auth/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
