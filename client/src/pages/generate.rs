//! Generation wizard page: reference intake, guided options, prompt, and
//! simulated runs feeding the history panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard draft lives in shared state so the landing teaser can seed it
//! before this page mounts. Runs are simulated client-side until the
//! generation backend exists.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::preview_dialog::PreviewDialog;
use crate::components::toast::notify;
use crate::components::upload_zone::UploadZone;
use crate::state::auth::AuthState;
use crate::state::history::HistoryState;
use crate::state::toasts::{ToastKind, ToastStack};
use crate::state::wizard::{PROMPT_MAX_CHARS, WIZARD_STEPS, WizardState};
use crate::util::auth::install_unauth_redirect;

/// Simulated run duration until a generation backend exists.
const GENERATE_DELAY_MS: u32 = 2_000;

/// Why a run cannot start, in the order the user should fix things.
fn generate_blocker(draft: &WizardState) -> Option<&'static str> {
    if draft.generating {
        return Some("A run is already in flight.");
    }
    if draft.reference_image.is_none() {
        return Some("Upload a reference image first.");
    }
    if draft.prompt.trim().is_empty() {
        return Some("Describe what you want to create.");
    }
    None
}

fn step_pip_class(current: usize, index: usize) -> &'static str {
    if index == current {
        "step-indicator__pip step-indicator__pip--current"
    } else if index < current {
        "step-indicator__pip step-indicator__pip--done"
    } else {
        "step-indicator__pip"
    }
}

#[component]
pub fn GeneratePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastStack>>();
    let wizard = expect_context::<RwSignal<WizardState>>();
    let history = expect_context::<RwSignal<HistoryState>>();
    let preview = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let on_image = Callback::new(move |data_url: String| {
        wizard.update(|draft| {
            draft.set_reference_image(data_url);
            draft.next_step();
        });
        notify(toasts, ToastKind::Success, "Reference image added.");
    });
    let on_upload_error =
        Callback::new(move |message: String| notify(toasts, ToastKind::Error, message));

    let on_generate = move |_| {
        if let Some(message) = generate_blocker(&wizard.get()) {
            notify(toasts, ToastKind::Error, message);
            return;
        }
        wizard.update(|draft| draft.generating = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(GENERATE_DELAY_MS).await;
            let prompt = wizard.get_untracked().prompt;
            history.update(|state| state.record(&prompt));
            wizard.update(|draft| draft.generating = false);
            notify(toasts, ToastKind::Success, "Your image is ready.");
        });
    };

    view! {
        <div class="generate-page">
            <Navbar/>
            <main class="generate-page__main">
                <header class="generate-page__header">
                    <h1>"New creation"</h1>
                    <p>"Upload a reference, shape the look, and describe the scene."</p>
                </header>

                <ol class="step-indicator">
                    {WIZARD_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <li class="step-indicator__item">
                                    <button
                                        class=move || step_pip_class(wizard.get().step, index)
                                        on:click=move |_| wizard.update(|draft| draft.jump_to(index))
                                    >
                                        {index + 1}
                                    </button>
                                    <span class="step-indicator__label">{step.title}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>

                <div class="generate-page__grid">
                    <section class="generate-page__source">
                        <Show
                            when=move || wizard.get().reference_image.is_some()
                            fallback=move || {
                                view! { <UploadZone on_image=on_image on_error=on_upload_error/> }
                            }
                        >
                            <div class="reference-card">
                                <img
                                    class="reference-card__image"
                                    src=move || wizard.get().reference_image.unwrap_or_default()
                                    alt="Reference image"
                                />
                                <div class="reference-card__actions">
                                    <button
                                        class="btn btn--ghost"
                                        on:click=move |_| preview.set(wizard.get().reference_image)
                                    >
                                        "View"
                                    </button>
                                    <button
                                        class="btn btn--ghost"
                                        on:click=move |_| wizard.update(WizardState::clear_reference_image)
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            </div>
                        </Show>

                        <label class="prompt__label" for="prompt-input">"Prompt"</label>
                        <textarea
                            id="prompt-input"
                            class="prompt__input"
                            placeholder="A lighthouse on a cliff at golden hour..."
                            prop:value=move || wizard.get().prompt
                            on:input=move |ev| {
                                wizard.update(|draft| draft.set_prompt(&event_target_value(&ev)));
                            }
                        ></textarea>
                        <span class="prompt__counter">
                            {move || format!("{}/{PROMPT_MAX_CHARS}", wizard.get().prompt_chars())}
                        </span>

                        <button
                            class="btn btn--primary generate-page__run"
                            on:click=on_generate
                            disabled=move || !wizard.get().can_generate()
                        >
                            {move || if wizard.get().generating { "Generating..." } else { "Generate" }}
                        </button>
                        <Show when=move || generate_blocker(&wizard.get()).is_some()>
                            <p class="generate-page__hint">
                                {move || generate_blocker(&wizard.get()).unwrap_or_default()}
                            </p>
                        </Show>
                    </section>

                    <section class="generate-page__options">
                        {move || {
                            let draft = wizard.get();
                            let step = &WIZARD_STEPS[draft.step];
                            view! {
                                <h2 class="generate-page__step-title">{step.title}</h2>
                                <p class="generate-page__step-blurb">{step.blurb}</p>
                                <div class="option-grid">
                                    {step
                                        .options
                                        .iter()
                                        .enumerate()
                                        .map(|(option_index, label)| {
                                            let section = step.id;
                                            let option_class = if draft.selected(section) == Some(option_index) {
                                                "option-grid__option option-grid__option--selected"
                                            } else {
                                                "option-grid__option"
                                            };
                                            view! {
                                                <button
                                                    class=option_class
                                                    on:click=move |_| {
                                                        wizard.update(|d| d.toggle_option(section, option_index));
                                                    }
                                                >
                                                    {*label}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        }}
                        <div class="generate-page__step-nav">
                            <button
                                class="btn"
                                disabled=move || wizard.get().step == 0
                                on:click=move |_| wizard.update(WizardState::prev_step)
                            >
                                "Back"
                            </button>
                            <button
                                class="btn"
                                disabled=move || wizard.get().step == WizardState::last_step()
                                on:click=move |_| wizard.update(WizardState::next_step)
                            >
                                "Next"
                            </button>
                        </div>
                    </section>
                </div>

                <section class="generate-page__history">
                    <h2>"Recent prompts"</h2>
                    <ul class="history-list">
                        <For
                            each=move || history.get().items
                            key=|creation| creation.id.clone()
                            children=move |creation| {
                                let reuse_prompt = creation.prompt.clone();
                                let preview_url = creation.image_url.clone();
                                view! {
                                    <li class="history-list__item">
                                        <img
                                            class="history-list__thumb"
                                            src=creation.image_url.clone()
                                            alt=creation.prompt.clone()
                                        />
                                        <div class="history-list__body">
                                            <p class="history-list__prompt">{creation.prompt.clone()}</p>
                                            <span class="history-list__when">{creation.created_label.clone()}</span>
                                        </div>
                                        <div class="history-list__actions">
                                            <button
                                                class="btn btn--ghost"
                                                on:click=move |_| {
                                                    wizard.update(|draft| draft.set_prompt(&reuse_prompt));
                                                    notify(toasts, ToastKind::Info, "Prompt restored.");
                                                }
                                            >
                                                "Use again"
                                            </button>
                                            <button
                                                class="btn btn--ghost"
                                                on:click=move |_| preview.set(Some(preview_url.clone()))
                                            >
                                                "Preview"
                                            </button>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>
            </main>
            <PreviewDialog preview=preview/>
        </div>
    }
}
