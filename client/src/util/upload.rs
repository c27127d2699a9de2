//! Reference-image intake helpers: MIME screening and data-URL packaging.
//!
//! The pure helpers compile everywhere; the browser file reader only exists
//! on the hydrate build.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// The only validation applied to uploads: the browser-reported MIME type
/// must be an image type.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Package raw bytes as a `data:` URL usable in `src` attributes.
#[must_use]
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read a browser `File` into a data URL.
///
/// # Errors
///
/// Returns a user-facing message when the file is not an image or cannot
/// be read.
#[cfg(feature = "hydrate")]
pub async fn read_file_as_data_url(file: web_sys::File) -> Result<String, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let mime = file.type_();
    if !is_image_mime(&mime) {
        return Err("Only image files can be used as a reference.".to_owned());
    }

    let buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the selected file.".to_owned())?
        .dyn_into()
        .map_err(|_| "Could not read the selected file.".to_owned())?;

    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(to_data_url(&mime, &bytes))
}
