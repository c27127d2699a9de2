//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, generate::GeneratePage, home::HomePage, login::LoginPage,
    signup::SignupPage, waitlist::WaitlistPage,
};
use crate::state::{
    auth::AuthState, history::HistoryState, toasts::ToastStack, wizard::WizardState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the session from the auth
/// cookie, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let wizard = RwSignal::new(WizardState::default());
    let history = RwSignal::new(HistoryState::default());
    let toasts = RwSignal::new(ToastStack::default());

    provide_context(auth);
    provide_context(wizard);
    provide_context(history);
    provide_context(toasts);

    // Restore the signed-in user from the session cookie, browser-side only.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Some(user) => auth.update(|state| state.signed_in(user)),
                None => auth.update(AuthState::signed_out),
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lumina.css"/>
        <Title text="Lumina"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                <Route path=StaticSegment("waitlist") view=WaitlistPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("generation") view=GeneratePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
