//! Toast host and the helper for pushing timed notifications.
//!
//! DESIGN
//! ======
//! `notify` is the single entry point for feedback across pages, so every
//! toast gets the same lifetime and dismissal behavior.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastStack};

/// How long a toast stays up before auto-dismissal.
const TOAST_DURATION_MS: u32 = 4_000;

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast--success",
        ToastKind::Error => "toast--error",
        ToastKind::Info => "toast--info",
    }
}

/// Push a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastStack>, kind: ToastKind, message: impl Into<String>) {
    let mut scheduled_id = 0;
    toasts.update(|stack| scheduled_id = stack.push(kind, message));
    schedule_dismiss(toasts, scheduled_id);
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(toasts: RwSignal<ToastStack>, id: u64) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.update(|stack| stack.dismiss(id));
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(_toasts: RwSignal<ToastStack>, _id: u64) {}

/// Fixed-position toast stack. Mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastStack>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", kind_class(toast.kind))>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toasts.update(|stack| stack.dismiss(id))
                                aria-label="Dismiss notification"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
