//! Hosted accounts service client: signup, password auth, token refresh.
//!
//! ARCHITECTURE
//! ============
//! All account data lives in an external PocketBase-compatible service; this
//! app never stores credentials. The client wraps one pooled `reqwest::Client`
//! and exposes the three calls the auth routes need. Tokens minted by the
//! service are relayed to the browser as the session cookie verbatim.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Errors from the accounts service boundary.
#[derive(Debug, thiserror::Error)]
pub enum AccountsError {
    /// The service answered with an error status (bad credentials,
    /// validation failure, revoked token).
    #[error("accounts service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// Transport failure or a response that could not be decoded.
    #[error("accounts service unreachable: {0}")]
    Upstream(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Account record as stored by the accounts service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
}

/// Token plus record, returned by password auth and refresh.
#[derive(Debug, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub record: Account,
}

/// Fields required to create an account.
#[derive(Debug, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Pull the service's top-level error message out of a response body.
fn rejection_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = parsed.message.trim();
    if message.is_empty() { None } else { Some(message.to_owned()) }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Client for the hosted accounts service. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AccountsClient {
    http: reqwest::Client,
    base_url: String,
}

impl AccountsClient {
    /// Build from `ACCOUNTS_URL`. Returns `None` when unset or empty
    /// (signup and login will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("ACCOUNTS_URL").ok()?;
        Self::new(&base_url)
    }

    #[must_use]
    pub fn new(base_url: &str) -> Option<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return None;
        }
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .ok()?;
        Some(Self { http, base_url: base_url.to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Verify credentials, returning a fresh token and the account record.
    pub async fn authenticate(&self, identity: &str, password: &str) -> Result<AuthSession, AccountsError> {
        let resp = self
            .http
            .post(self.endpoint("/api/collections/users/auth-with-password"))
            .json(&serde_json::json!({ "identity": identity, "password": password }))
            .send()
            .await
            .map_err(|e| AccountsError::Upstream(e.to_string()))?;
        Self::decode(resp).await
    }

    /// Create an account. The service enforces field validation and
    /// email/username uniqueness.
    pub async fn create_account(&self, account: &NewAccount) -> Result<Account, AccountsError> {
        let resp = self
            .http
            .post(self.endpoint("/api/collections/users/records"))
            .json(account)
            .send()
            .await
            .map_err(|e| AccountsError::Upstream(e.to_string()))?;
        Self::decode(resp).await
    }

    /// Re-validate a token against the service and rotate it, returning the
    /// current account record.
    pub async fn refresh(&self, token: &str) -> Result<AuthSession, AccountsError> {
        let resp = self
            .http
            .post(self.endpoint("/api/collections/users/auth-refresh"))
            .header("Authorization", token)
            .send()
            .await
            .map_err(|e| AccountsError::Upstream(e.to_string()))?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AccountsError> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AccountsError::Upstream(e.to_string()))?;

        if !status.is_success() {
            // A proper rejection carries the service's error envelope. Anything
            // else (proxy HTML, truncated body) counts as an upstream fault.
            return match rejection_message(&body) {
                Some(message) => Err(AccountsError::Rejected { status: status.as_u16(), message }),
                None => Err(AccountsError::Upstream(format!("status {status}: unexpected error body"))),
            };
        }

        serde_json::from_str(&body)
            .map_err(|_| AccountsError::Upstream(format!("unexpected response: {body}")))
    }
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
