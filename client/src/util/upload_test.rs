use super::*;

// =============================================================
// MIME screening
// =============================================================

#[test]
fn accepts_common_image_types() {
    assert!(is_image_mime("image/png"));
    assert!(is_image_mime("image/jpeg"));
    assert!(is_image_mime("image/webp"));
}

#[test]
fn rejects_non_image_types() {
    assert!(!is_image_mime("application/pdf"));
    assert!(!is_image_mime("text/html"));
    assert!(!is_image_mime(""));
}

#[test]
fn mime_check_is_case_sensitive_like_the_browser_value() {
    // Browsers report lowercase MIME types; anything else is not one.
    assert!(!is_image_mime("IMAGE/PNG"));
}

// =============================================================
// Data URL packaging
// =============================================================

#[test]
fn to_data_url_encodes_bytes_as_base64() {
    assert_eq!(
        to_data_url("image/png", b"abc"),
        "data:image/png;base64,YWJj"
    );
}

#[test]
fn to_data_url_handles_empty_payloads() {
    assert_eq!(to_data_url("image/png", b""), "data:image/png;base64,");
}
