use super::*;

use axum::Router;
use axum::routing::post;

use crate::services::accounts::AccountsClient;
use crate::state::AppState;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive() {
    for (i, val) in ["TRUE", "True", "YES", "On"].iter().enumerate() {
        let key = format!("__TEST_EB_CI_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_4417__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_AURORA_42__"), None);
}

#[test]
fn env_bool_whitespace_trimmed() {
    let key = "__TEST_EB_WS_307__";
    unsafe { std::env::set_var(key, "  true  ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_empty_string_returns_none() {
    let key = "__TEST_EB_EMPTY_118__";
    unsafe { std::env::set_var(key, "") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// cookie_secure — COOKIE_SECURE and APP_ENV are shared globals, so the
// inference logic is tested directly instead of through cookie_secure()
// to avoid races with parallel tests that touch the same vars.
// =============================================================================

#[test]
fn cookie_secure_production_inference_logic() {
    assert!("production".trim().eq_ignore_ascii_case("production"));
    assert!(" Production ".trim().eq_ignore_ascii_case("production"));
    assert!(!"development".trim().eq_ignore_ascii_case("production"));
    assert!(!"".trim().eq_ignore_ascii_case("production"));
}

// =============================================================================
// cookie builders
// =============================================================================

#[test]
fn session_cookie_attributes() {
    let cookie = session_cookie("tok-123".into(), true);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok-123");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.max_age(), Some(Duration::days(COOKIE_TTL_DAYS)));
}

#[test]
fn session_cookie_respects_insecure_flag() {
    let cookie = session_cookie("tok".into(), false);
    assert_eq!(cookie.secure(), Some(false));
}

#[test]
fn expired_cookie_clears_value_immediately() {
    let cookie = expired_cookie(false);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.http_only(), Some(true));
}

// =============================================================================
// handlers — run against a local stand-in for the accounts service.
// =============================================================================

/// Serve `app` on an ephemeral local port and return its base URL.
async fn serve_accounts_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub should bind");
    let addr = listener.local_addr().expect("stub should report its addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub should serve");
    });
    format!("http://{addr}")
}

fn stub_state(base_url: &str) -> AppState {
    AppState::new(AccountsClient::new(base_url))
}

async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("response body should read");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

#[tokio::test]
async fn login_with_rejected_credentials_is_401_with_a_generic_body() {
    let stub = Router::new().route(
        "/api/collections/users/auth-with-password",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"code": 400, "message": "Failed to authenticate.", "data": {}})),
            )
        }),
    );
    let base = serve_accounts_stub(stub).await;

    let req = LoginRequest { email: "ada@example.com".into(), password: "wrong".into() };
    let response = login(State(stub_state(&base)), CookieJar::new(), Json(req)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(axum::http::header::SET_COOKIE).is_none());
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn signup_signs_in_and_sets_the_session_cookie() {
    let record = serde_json::json!({"id": "r1", "username": "ada", "email": "ada@example.com"});
    let created = record.clone();
    let session = serde_json::json!({"token": "tok-fresh", "record": record});

    let stub = Router::new()
        .route(
            "/api/collections/users/records",
            post(move || {
                let created = created.clone();
                async move { Json(created) }
            }),
        )
        .route(
            "/api/collections/users/auth-with-password",
            post(move || {
                let session = session.clone();
                async move { Json(session) }
            }),
        );
    let base = serve_accounts_stub(stub).await;

    let req = SignupRequest {
        username: "ada".into(),
        email: "ada@example.com".into(),
        password: "correct horse".into(),
        password_confirm: "correct horse".into(),
    };
    let response = signup(State(stub_state(&base)), CookieJar::new(), Json(req)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(
        set_cookie.starts_with("lumina_auth=tok-fresh"),
        "unexpected Set-Cookie: {set_cookie}"
    );
    let body = response_json(response).await;
    assert_eq!(body["user"]["username"], "ada");
}

#[tokio::test]
async fn login_without_accounts_client_is_503() {
    let req = LoginRequest { email: "ada@example.com".into(), password: "pw".into() };
    let response = login(State(AppState::new(None)), CookieJar::new(), Json(req)).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
