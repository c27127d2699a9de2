//! Top navigation chrome shared by the marketing and studio pages.
//!
//! DESIGN
//! ======
//! Renders signed-out call-to-action links until the session restore
//! settles, then swaps in the avatar menu. Logout leaves via a full page
//! load so every in-memory store resets.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);

    let display_name = move || {
        auth.get()
            .user
            .map(|user| user.display_name().to_owned())
            .unwrap_or_default()
    };
    let email = move || auth.get().user.map(|user| user.email).unwrap_or_default();
    let initial = move || {
        auth.get()
            .user
            .map(|user| user.avatar_initial())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::signed_out);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
    };

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    "Lumina"
                    <span class="navbar__badge">"Beta"</span>
                </a>
                <nav class="navbar__links">
                    <a href="/#features" class="navbar__link">"Features"</a>
                    <a href="/#pricing" class="navbar__link">"Pricing"</a>
                    <a href="/waitlist" class="navbar__link">"Waitlist"</a>
                </nav>
                <div class="navbar__account">
                    <Show
                        when=move || auth.get().user.is_some()
                        fallback=|| {
                            view! {
                                <a href="/auth/login" class="btn btn--ghost">"Sign in"</a>
                                <a href="/auth/signup" class="btn btn--primary">"Get started"</a>
                            }
                        }
                    >
                        <button
                            class="navbar__avatar"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                            aria-label="Account menu"
                        >
                            {initial}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="navbar__menu">
                                <div class="navbar__menu-identity">
                                    <span class="navbar__menu-name">{display_name}</span>
                                    <span class="navbar__menu-email">{email}</span>
                                </div>
                                <a href="/dashboard" class="navbar__menu-item">"Dashboard"</a>
                                <a href="/generation" class="navbar__menu-item">"New creation"</a>
                                <button
                                    class="navbar__menu-item navbar__menu-item--logout"
                                    on:click=on_logout
                                >
                                    "Log out"
                                </button>
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>
        </header>
    }
}
