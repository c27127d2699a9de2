//! Navigation guard for protected pages.
//!
//! Page paths are matched exactly; everything else passes through untouched.
//! API routes are not behind this guard, they require auth per-handler via
//! the `AuthToken` extractor.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::routes::auth::COOKIE_NAME;
use crate::services::session;

/// Page paths that require a live session.
pub(crate) const PROTECTED_PATHS: &[&str] = &["/dashboard", "/generation"];

/// Where unauthenticated visitors are sent.
const LOGIN_PATH: &str = "/auth/login";

pub(crate) fn is_protected(path: &str) -> bool {
    PROTECTED_PATHS.contains(&path)
}

/// Redirect page requests for protected paths unless the session cookie
/// holds a live token.
pub async fn require_session(jar: CookieJar, request: Request, next: Next) -> Response {
    if !is_protected(request.uri().path()) {
        return next.run(request).await;
    }

    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if session::token_is_live(token, session::unix_now_secs()) {
        next.run(request).await
    } else {
        Redirect::temporary(LOGIN_PATH).into_response()
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
