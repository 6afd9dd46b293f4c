//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/runtime concerns from page logic to keep
//! the pages thin and the helpers testable.

pub mod lifetime;
