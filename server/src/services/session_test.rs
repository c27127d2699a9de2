use super::*;

/// Build an unsigned test token with the given payload JSON.
fn make_token(payload_json: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload_json);
    format!("{header}.{payload}.sig")
}

// =============================================================================
// token_claims
// =============================================================================

#[test]
fn claims_parse_from_payload_segment() {
    let token = make_token(r#"{"id":"r1","exp":1900000000,"type":"authRecord"}"#);
    let claims = token_claims(&token).unwrap();
    assert_eq!(claims.exp, 1_900_000_000);
}

#[test]
fn claims_reject_missing_exp() {
    let token = make_token(r#"{"id":"r1"}"#);
    assert!(token_claims(&token).is_none());
}

#[test]
fn claims_reject_payload_that_is_not_base64() {
    assert!(token_claims("aaa.§§§.ccc").is_none());
}

#[test]
fn claims_reject_payload_that_is_not_json() {
    let payload = URL_SAFE_NO_PAD.encode("definitely not json");
    assert!(token_claims(&format!("h.{payload}.s")).is_none());
}

#[test]
fn claims_reject_wrong_segment_counts() {
    let payload = URL_SAFE_NO_PAD.encode(r#"{"exp":1900000000}"#);
    assert!(token_claims("").is_none());
    assert!(token_claims("just-one-segment").is_none());
    assert!(token_claims(&format!("h.{payload}")).is_none());
    assert!(token_claims(&format!("h.{payload}.s.extra")).is_none());
}

// =============================================================================
// token_is_live
// =============================================================================

#[test]
fn future_expiry_is_live() {
    let token = make_token(r#"{"exp":2000}"#);
    assert!(token_is_live(&token, 1999));
}

#[test]
fn past_expiry_is_not_live() {
    let token = make_token(r#"{"exp":2000}"#);
    assert!(!token_is_live(&token, 2001));
}

#[test]
fn expiry_at_now_is_not_live() {
    let token = make_token(r#"{"exp":2000}"#);
    assert!(!token_is_live(&token, 2000));
}

#[test]
fn malformed_token_is_not_live() {
    assert!(!token_is_live("garbage", 0));
    assert!(!token_is_live("", 0));
}

// =============================================================================
// unix_now_secs
// =============================================================================

#[test]
fn now_is_after_2020() {
    assert!(unix_now_secs() > 1_577_836_800);
}
