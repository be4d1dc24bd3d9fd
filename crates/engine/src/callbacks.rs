// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered multi-subscriber callback lists.
//!
//! Lists are append-only for the owner's lifetime (apart from a full
//! `clear`). Invocation runs every subscriber in subscription order; an empty
//! list is a no-op.

use std::sync::Arc;

/// Lifecycle hook with no payload (start, complete, cancel, done).
pub type Hook = dyn Fn() + Send + Sync;

/// Per-tick hook receiving a value (elapsed, progress, remaining).
pub type ValueHook = dyn Fn(f64) + Send + Sync;

/// Ordered list of subscribers.
pub struct Callbacks<F: ?Sized> {
    subscribers: Vec<Arc<F>>,
}

impl<F: ?Sized> Callbacks<F> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn push(&mut self, callback: Arc<F>) {
        self.subscribers.push(callback);
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<F: ?Sized> Default for Callbacks<F> {
    fn default() -> Self {
        Self::new()
    }
}

// Cloning copies handles, not closures, so a clone taken under a lock can be
// invoked after the lock is released.
impl<F: ?Sized> Clone for Callbacks<F> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
        }
    }
}

impl Callbacks<Hook> {
    pub fn invoke(&self) {
        for callback in &self.subscribers {
            callback();
        }
    }
}

impl Callbacks<ValueHook> {
    pub fn invoke_with(&self, value: f64) {
        for callback in &self.subscribers {
            callback(value);
        }
    }
}

impl<F: ?Sized> std::fmt::Debug for Callbacks<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "callbacks_tests.rs"]
mod tests;
