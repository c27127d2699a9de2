//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod features;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod preview_dialog;
pub mod pricing;
pub mod toast;
pub mod upload_zone;
