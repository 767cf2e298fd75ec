//! Mount-lifetime flag for async work started by a view.
//!
//! A response that lands after its view unmounted must not write into the
//! view's disposed signals. Views install a [`ViewLifetime`] and check it
//! after every await.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl ViewLifetime {
    /// Create a flag that ends when the current reactive owner is cleaned up.
    pub fn install() -> Self {
        let lifetime = Self::default();
        let ending = lifetime.clone();
        leptos::prelude::on_cleanup(move || ending.end());
        lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
