use super::*;

#[test]
fn auth_failed_message_uses_server_envelope() {
    let body = r#"{"error": "Invalid credentials"}"#;
    assert_eq!(auth_failed_message(401, body), "Invalid credentials");
}

#[test]
fn auth_failed_message_falls_back_on_non_json() {
    assert_eq!(
        auth_failed_message(502, "<html>Bad Gateway</html>"),
        "Request failed with status 502"
    );
}

#[test]
fn auth_failed_message_falls_back_on_blank_error() {
    let body = r#"{"error": "   "}"#;
    assert_eq!(auth_failed_message(400, body), "Request failed with status 400");
}

#[test]
fn auth_failed_message_falls_back_on_unrelated_json() {
    let body = r#"{"message": "nope"}"#;
    assert_eq!(auth_failed_message(503, body), "Request failed with status 503");
}
