//! Session token inspection.
//!
//! ARCHITECTURE
//! ============
//! The session cookie carries the accounts service's JWT verbatim. Routes and
//! the navigation guard only check the embedded expiry locally; the accounts
//! service stays the authority and re-validates the token on every refresh.
//!
//! TRADE-OFFS
//! ==========
//! Skipping signature verification keeps the server free of key material. A
//! forged cookie can reach a protected page shell, but any account data
//! behind it still requires the accounts service to accept the token.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claims this app cares about. Everything else in the payload is opaque.
#[derive(Debug, Deserialize)]
pub struct TokenClaims {
    /// Expiry as unix seconds.
    pub exp: i64,
}

/// Decode the payload segment of a JWT without verifying its signature.
/// Returns `None` unless the token has the standard three-segment shape
/// and a payload that parses to the expected claims.
#[must_use]
pub fn token_claims(token: &str) -> Option<TokenClaims> {
    let mut parts = token.split('.');
    let (Some(_), Some(payload), Some(_), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether a token is well formed and not yet expired at `now_secs`.
#[must_use]
pub fn token_is_live(token: &str, now_secs: i64) -> bool {
    token_claims(token).is_some_and(|claims| claims.exp > now_secs)
}

/// Current unix time in seconds.
#[must_use]
pub fn unix_now_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
