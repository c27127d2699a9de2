//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The app keeps no local database: user accounts live in the hosted
//! accounts service, and everything else is client-side state. The only
//! shared resource is the accounts client with its pooled HTTP connections.

use crate::services::accounts::AccountsClient;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the accounts client is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Optional accounts client. `None` if `ACCOUNTS_URL` is not configured,
    /// in which case auth routes answer 503.
    pub accounts: Option<AccountsClient>,
}

impl AppState {
    #[must_use]
    pub fn new(accounts: Option<AccountsClient>) -> Self {
        Self { accounts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_without_accounts_client() {
        let state = AppState::new(None);
        assert!(state.accounts.is_none());
    }
}
