//! Liveness flag tying async work to the view that started it.
//!
//! A page creates a [`ViewLifetime`], hands clones to its spawned tasks, and
//! ends it from `on_cleanup`. Tasks check [`ViewLifetime::is_alive`] before
//! touching view state, so a response that settles after unmount is dropped.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the view as gone. Visible to every clone; idempotent.
    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}
