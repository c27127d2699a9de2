//! Drag-and-drop intake for the wizard's reference image.
//!
//! DESIGN
//! ======
//! Accepts a file from either a drop or the browse input, screens the MIME
//! type, and hands the caller a data URL. The component never touches
//! wizard state itself; the page decides what an accepted image means.

use leptos::prelude::*;

/// Drop zone with a browse fallback. Runs `on_image` with a data URL on
/// success and `on_error` with a user-facing message on failure.
#[component]
pub fn UploadZone(on_image: Callback<String>, on_error: Callback<String>) -> impl IntoView {
    let is_over = RwSignal::new(false);
    let reading = RwSignal::new(false);

    let zone_class = move || {
        if is_over.get() {
            "upload-zone upload-zone--over"
        } else {
            "upload-zone"
        }
    };

    view! {
        <div
            class=zone_class
            on:dragover=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                is_over.set(true);
            }
            on:dragleave=move |_| is_over.set(false)
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                is_over.set(false);
                #[cfg(feature = "hydrate")]
                {
                    let dropped = ev
                        .data_transfer()
                        .and_then(|transfer| transfer.files())
                        .and_then(|files| files.get(0));
                    if let Some(file) = dropped {
                        read_into_callbacks(file, reading, on_image, on_error);
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = &ev;
                }
            }
        >
            <Show
                when=move || reading.get()
                fallback=move || {
                    view! {
                        <div class="upload-zone__content">
                            <p class="upload-zone__headline">"Drop a reference image here"</p>
                            <p class="upload-zone__hint">"or"</p>
                            <label for="reference-file-input" class="btn btn--secondary">
                                "Browse files"
                            </label>
                            <input
                                id="reference-file-input"
                                class="upload-zone__input"
                                type="file"
                                accept="image/*"
                                on:change=move |ev| {
                                    #[cfg(feature = "hydrate")]
                                    {
                                        let input: web_sys::HtmlInputElement = event_target(&ev);
                                        let picked = input.files().and_then(|files| files.get(0));
                                        input.set_value("");
                                        if let Some(file) = picked {
                                            read_into_callbacks(file, reading, on_image, on_error);
                                        }
                                    }
                                    #[cfg(not(feature = "hydrate"))]
                                    {
                                        let _ = &ev;
                                    }
                                }
                            />
                            <p class="upload-zone__formats">"PNG, JPEG, or WebP"</p>
                        </div>
                    }
                }
            >
                <div class="upload-zone__reading">
                    <div class="spinner" aria-hidden="true"></div>
                    <p>"Reading image..."</p>
                </div>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn read_into_callbacks(
    file: web_sys::File,
    reading: RwSignal<bool>,
    on_image: Callback<String>,
    on_error: Callback<String>,
) {
    reading.set(true);
    leptos::task::spawn_local(async move {
        match crate::util::upload::read_file_as_data_url(file).await {
            Ok(data_url) => on_image.run(data_url),
            Err(message) => on_error.run(message),
        }
        reading.set(false);
    });
}
