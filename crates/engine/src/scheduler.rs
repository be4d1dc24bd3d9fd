// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of active timers, ticked once per frame by the host.
//!
//! The scheduler owns membership in the active set, not the timers
//! themselves: a timer stays usable by its creator after it leaves the set.

use crate::snapshot::TimerSnapshot;
use crate::timer::Timer;
use parking_lot::Mutex;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Weak};
use tw_core::{IdGen, SequentialIdGen, SharedTimeSource, TimeSource, TimerId};

pub(crate) struct SchedulerInner {
    timers: Mutex<Vec<Timer>>,
    source: SharedTimeSource,
    ids: Box<dyn IdGen>,
}

/// Outcome of one [`Scheduler::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Timers whose update ran to the end.
    pub ticked: usize,
    /// Timers whose update panicked in a callback.
    pub failed: usize,
}

/// Manages the active timer set. Clones share the same set.
#[derive(Clone)]
pub struct Scheduler {
    inner: Arc<SchedulerInner>,
}

impl Scheduler {
    /// Create a scheduler whose timers default to `source`.
    pub fn new(source: impl TimeSource + 'static) -> Self {
        Self::with_id_gen(source, SequentialIdGen::default())
    }

    pub fn with_id_gen(source: impl TimeSource + 'static, ids: impl IdGen + 'static) -> Self {
        Self::with_shared_source(Arc::new(source), ids)
    }

    /// Create a scheduler around an already shared time source.
    pub fn with_shared_source(source: SharedTimeSource, ids: impl IdGen + 'static) -> Self {
        Self {
            inner: Arc::new(SchedulerInner {
                timers: Mutex::new(Vec::new()),
                source,
                ids: Box::new(ids),
            }),
        }
    }

    pub(crate) fn from_inner(inner: Arc<SchedulerInner>) -> Self {
        Self { inner }
    }

    pub(crate) fn downgrade(&self) -> Weak<SchedulerInner> {
        Arc::downgrade(&self.inner)
    }

    pub(crate) fn next_id(&self) -> TimerId {
        TimerId::new(self.inner.ids.next())
    }

    /// Default time source for timers created by this scheduler.
    pub fn time_source(&self) -> SharedTimeSource {
        Arc::clone(&self.inner.source)
    }

    /// Create a timer bound to this scheduler.
    pub fn timer(&self, duration: f64) -> Timer {
        Timer::new(self, duration)
    }

    /// Add a timer to the active set. No-op if already tracked.
    pub fn register(&self, timer: &Timer) {
        let mut timers = self.inner.timers.lock();
        if !timers.iter().any(|t| t.same_as(timer)) {
            timers.push(timer.clone());
            timer.set_registered(true);
            tracing::trace!(timer = %timer.id(), active = timers.len(), "timer registered");
        }
    }

    /// Remove a timer from the active set. No-op if not tracked.
    pub fn deregister(&self, timer: &Timer) {
        let mut timers = self.inner.timers.lock();
        if let Some(pos) = timers.iter().position(|t| t.same_as(timer)) {
            timers.remove(pos);
            timer.set_registered(false);
            tracing::trace!(timer = %timer.id(), active = timers.len(), "timer deregistered");
        }
    }

    pub fn contains(&self, timer: &Timer) -> bool {
        self.inner.timers.lock().iter().any(|t| t.same_as(timer))
    }

    /// Update every active timer once, last registered first.
    ///
    /// Timers may leave the set (or start other timers) while the tick runs.
    /// Timers added during the tick are first updated on the next tick. A
    /// panicking callback is logged and does not stop the remaining timers.
    pub fn tick(&self) -> TickReport {
        let mut report = TickReport::default();
        for timer in self.timers().iter().rev() {
            if !timer.is_registered() {
                continue;
            }
            match catch_unwind(AssertUnwindSafe(|| timer.update())) {
                Ok(()) => report.ticked += 1,
                Err(payload) => {
                    report.failed += 1;
                    tracing::error!(
                        timer = %timer.id(),
                        error = panic_message(payload.as_ref()),
                        "timer callback panicked"
                    );
                }
            }
        }
        report
    }

    pub fn pause_all(&self) {
        for timer in self.timers().iter().rev() {
            timer.pause();
        }
    }

    pub fn resume_all(&self) {
        for timer in self.timers().iter().rev() {
            timer.resume();
        }
    }

    /// Cancel every active timer, then clear the set.
    pub fn cancel_all(&self) {
        let timers = self.timers();
        tracing::debug!(count = timers.len(), "cancelling all timers");
        for timer in timers.iter().rev() {
            timer.cancel();
        }
        let leftover = std::mem::take(&mut *self.inner.timers.lock());
        for timer in leftover {
            timer.set_registered(false);
        }
    }

    pub fn active_count(&self) -> usize {
        self.inner.timers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.timers.lock().is_empty()
    }

    /// Handles of the active timers, in registration order.
    pub fn timers(&self) -> Vec<Timer> {
        self.inner.timers.lock().clone()
    }

    /// Inspection view of every active timer, in registration order.
    pub fn snapshots(&self) -> Vec<TimerSnapshot> {
        self.timers().iter().map(Timer::snapshot).collect()
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("active", &self.active_count())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
