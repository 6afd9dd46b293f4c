//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; list bookkeeping lives in
//! `state` so it can be tested without a browser.

pub mod login;
pub mod topics;
