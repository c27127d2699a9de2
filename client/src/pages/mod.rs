//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod generate;
pub mod home;
pub mod login;
pub mod signup;
pub mod waitlist;
