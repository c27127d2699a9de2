//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `wizard`, `history`, `toasts`) so
//! individual components can depend on small focused models. Each store is
//! provided from the app root as an `RwSignal` context.

pub mod auth;
pub mod history;
pub mod toasts;
pub mod wizard;
