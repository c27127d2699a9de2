//! Auth routes: login, signup, logout, current user.
//!
//! All four are thin pass-throughs to the hosted accounts service. The only
//! state they touch is the session cookie, which carries the service's token
//! verbatim.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::accounts::{AccountsError, NewAccount};
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "lumina_auth";

/// Matches the accounts service's default token lifetime.
const COOKIE_TTL_DAYS: i64 = 14;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("APP_ENV")
        .map(|env| env.trim().eq_ignore_ascii_case("production"))
        .unwrap_or(false)
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(COOKIE_TTL_DAYS))
        .build()
}

fn expired_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Session token extracted from the auth cookie and checked for local expiry.
/// Use as a handler parameter to require a signed-in caller.
pub struct AuthToken(pub String);

impl<S> axum::extract::FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if !session::token_is_live(token, session::unix_now_secs()) {
            return Err(StatusCode::UNAUTHORIZED);
        }

        Ok(Self(token.to_owned()))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

/// `POST /api/auth/login`: verify credentials and set the session cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(req): Json<LoginRequest>) -> Response {
    let Some(accounts) = &state.accounts else {
        return error_body(StatusCode::SERVICE_UNAVAILABLE, "Accounts service not configured");
    };

    let session = match accounts.authenticate(req.email.trim(), &req.password).await {
        Ok(s) => s,
        Err(AccountsError::Rejected { status, message }) => {
            tracing::info!(%status, %message, "login rejected");
            return error_body(StatusCode::UNAUTHORIZED, "Invalid credentials");
        }
        Err(e) => {
            tracing::error!(error = %e, "login upstream failure");
            return error_body(StatusCode::BAD_GATEWAY, "Accounts service unavailable");
        }
    };

    let jar = jar.add(session_cookie(session.token, cookie_secure()));
    (jar, Json(serde_json::json!({ "user": session.record }))).into_response()
}

#[derive(Deserialize)]
pub struct SignupRequest {
    username: String,
    email: String,
    password: String,
    password_confirm: String,
}

/// `POST /api/auth/signup`: create the account, then sign it in so the
/// session cookie is set in the same response.
pub async fn signup(State(state): State<AppState>, jar: CookieJar, Json(req): Json<SignupRequest>) -> Response {
    let Some(accounts) = &state.accounts else {
        return error_body(StatusCode::SERVICE_UNAVAILABLE, "Accounts service not configured");
    };

    let new_account = NewAccount {
        username: req.username.trim().to_owned(),
        email: req.email.trim().to_owned(),
        password: req.password.clone(),
        password_confirm: req.password_confirm,
    };

    if let Err(e) = accounts.create_account(&new_account).await {
        return match e {
            AccountsError::Rejected { status, message } => {
                tracing::info!(%status, %message, "signup rejected");
                error_body(StatusCode::BAD_REQUEST, &message)
            }
            AccountsError::Upstream(_) => {
                tracing::error!(error = %e, "signup upstream failure");
                error_body(StatusCode::BAD_GATEWAY, "Accounts service unavailable")
            }
        };
    }

    let session = match accounts.authenticate(&new_account.email, &req.password).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "post-signup authentication failed");
            return error_body(StatusCode::BAD_GATEWAY, "Account created but sign-in failed");
        }
    };

    let jar = jar.add(session_cookie(session.token, cookie_secure()));
    (jar, Json(serde_json::json!({ "user": session.record }))).into_response()
}

/// `GET /api/auth/me`: refresh the token against the accounts service and
/// return the current account. Rotates the cookie with the fresh token.
pub async fn me(State(state): State<AppState>, jar: CookieJar, auth: AuthToken) -> Response {
    let Some(accounts) = &state.accounts else {
        return error_body(StatusCode::SERVICE_UNAVAILABLE, "Accounts service not configured");
    };

    match accounts.refresh(&auth.0).await {
        Ok(session) => {
            let jar = jar.add(session_cookie(session.token, cookie_secure()));
            (jar, Json(serde_json::json!({ "user": session.record }))).into_response()
        }
        Err(AccountsError::Rejected { status, message }) => {
            tracing::info!(%status, %message, "session refresh rejected");
            error_body(StatusCode::UNAUTHORIZED, "Session expired")
        }
        Err(e) => {
            tracing::error!(error = %e, "session refresh upstream failure");
            error_body(StatusCode::BAD_GATEWAY, "Accounts service unavailable")
        }
    }
}

/// `POST /api/auth/logout`: clear the session cookie. Always succeeds; the
/// token itself simply ages out on the accounts service.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(expired_cookie(cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
