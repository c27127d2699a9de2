//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! degrade to inline form errors without crashing hydration. Error strings
//! come from the server's `{ "error": ... }` envelope when one is present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::UserEnvelope;

#[cfg(any(test, feature = "hydrate"))]
fn auth_failed_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<super::types::ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.trim().is_empty() => envelope.error,
        _ => format!("Request failed with status {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn failure_from(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    auth_failed_message(status, &body)
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the credentials
/// are rejected.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure_from(resp).await);
        }
        let body: UserEnvelope = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// On success the server has already signed the new account in and set the
/// session cookie.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the accounts
/// service rejects the new account.
pub async fn signup(
    username: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "password_confirm": password_confirm,
        });
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure_from(resp).await);
        }
        let body: UserEnvelope = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password, password_confirm);
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserEnvelope>().await.ok().map(|body| body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}
