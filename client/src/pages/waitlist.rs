//! Waitlist capture page with a confirmation dialog.

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

use leptos::prelude::*;

static PERKS: [&str; 3] = ["Early access", "Founding pricing", "Priority support"];

fn validate_waitlist_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

#[component]
pub fn WaitlistPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let joined = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_waitlist_email(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        email.set(email_value);
        error.set(None);
        busy.set(true);

        // No waitlist backend yet; the submit is a staged delay.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2_000).await;
            busy.set(false);
            joined.set(true);
        });
    };

    view! {
        <div class="waitlist-page">
            <a href="/" class="waitlist-page__back">"Back to Lumina"</a>
            <div class="waitlist-card">
                <span class="waitlist-card__eyebrow">"Coming soon"</span>
                <h1 class="waitlist-card__title">"Be first in line"</h1>
                <p class="waitlist-card__sub">
                    "Lumina opens in waves. Leave your email and we'll save you a spot."
                </p>
                <ul class="waitlist-card__perks">
                    {PERKS
                        .iter()
                        .map(|perk| view! { <li class="waitlist-card__perk">{*perk}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <form class="waitlist-form" on:submit=on_submit>
                    <input
                        class="waitlist-form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary waitlist-form__submit"
                        type="submit"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Joining..." } else { "Join the waitlist" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="waitlist-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
            <Show when=move || joined.get()>
                <div class="dialog-backdrop" on:click=move |_| joined.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"You're on the list"</h2>
                        <p>
                            {move || {
                                format!("We'll email {} as soon as your invite is ready.", email.get())
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn btn--primary" on:click=move |_| joined.set(false)>
                                "Got it"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
