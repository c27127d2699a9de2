//! Landing hero with the prompt teaser.
//!
//! DESIGN
//! ======
//! The teaser stashes its text into the shared wizard draft before
//! navigating, so whatever the visitor typed is waiting in the prompt box
//! when the wizard opens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::wizard::WizardState;

#[component]
pub fn Hero() -> impl IntoView {
    let wizard = expect_context::<RwSignal<WizardState>>();
    let teaser = RwSignal::new(String::new());
    let navigate = use_navigate();

    let start_creating = move |_| {
        let prompt = teaser.get();
        if !prompt.trim().is_empty() {
            wizard.update(|draft| draft.set_prompt(prompt.trim()));
        }
        navigate("/generation", NavigateOptions::default());
    };

    view! {
        <section class="hero">
            <div class="hero__shape hero__shape--violet" aria-hidden="true"></div>
            <div class="hero__shape hero__shape--amber" aria-hidden="true"></div>
            <div class="hero__shape hero__shape--cyan" aria-hidden="true"></div>
            <div class="hero__content">
                <span class="hero__eyebrow">"Lumina Studio"</span>
                <h1 class="hero__title">
                    <span>"Create"</span>
                    <span class="hero__title-accent">"Beyond Imagination"</span>
                </h1>
                <p class="hero__sub">
                    "Turn a reference image and a few words into gallery-ready art in seconds."
                </p>
                <div class="hero__teaser">
                    <input
                        class="hero__teaser-input"
                        type="text"
                        placeholder="Describe what you want to create..."
                        prop:value=move || teaser.get()
                        on:input=move |ev| teaser.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary hero__teaser-button" on:click=start_creating>
                        "Start creating"
                    </button>
                </div>
                <div class="hero__meta">
                    <a href="/waitlist" class="hero__meta-link">"Join the waitlist"</a>
                    <span class="hero__meta-note">"Free credits for early members"</span>
                </div>
            </div>
        </section>
    }
}
