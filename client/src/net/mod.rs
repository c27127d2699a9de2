//! Networking modules for the HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the auth endpoints and `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
