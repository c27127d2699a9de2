//! Full-size image preview dialog.

use leptos::prelude::*;

/// Backdrop + image viewer. `preview` holds the image URL while open;
/// clearing it closes the dialog.
#[component]
pub fn PreviewDialog(preview: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || preview.get().is_some()>
            <div class="dialog-backdrop" on:click=move |_| preview.set(None)>
                <div class="dialog dialog--preview" on:click=move |ev| ev.stop_propagation()>
                    <img
                        class="dialog__image"
                        src=move || preview.get().unwrap_or_default()
                        alt="Creation preview"
                    />
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| preview.set(None)>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
