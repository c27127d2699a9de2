//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the accounts-service integration and token handling
//! so route handlers can stay focused on protocol translation and cookie
//! plumbing.

pub mod accounts;
pub mod session;
