//! View-local state for routed pages.

pub mod topics;
