//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON envelopes so auth responses decode
//! the same way on the SSR and hydrate builds.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as relayed from the accounts service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account record identifier.
    pub id: String,
    /// Unique handle chosen at signup.
    pub username: String,
    /// Sign-in email address.
    pub email: String,
    /// Optional display name; the UI falls back to the username.
    #[serde(default)]
    pub name: Option<String>,
    /// Account creation timestamp, as formatted by the accounts service.
    #[serde(default)]
    pub created: String,
}

impl User {
    /// Name shown in the navbar and the dashboard greeting.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }

    /// Single uppercase character for the avatar chip.
    #[must_use]
    pub fn avatar_initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_owned())
    }
}

/// `{ "user": ... }` envelope returned by login, signup, and me.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// `{ "error": ... }` envelope returned on auth failures.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}
