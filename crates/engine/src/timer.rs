// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cancellable, pausable, optionally looping countdown.
//!
//! A [`Timer`] measures elapsed time against its [`TimeSource`] and fires
//! callbacks at lifecycle points. It joins its [`Scheduler`]'s active set on
//! [`Timer::start`] and leaves it exactly once when it completes (without
//! looping) or is cancelled. The scheduler calls [`Timer::update`] once per
//! tick:
//!
//! 1. an attached cancellation signal that is set cancels the timer;
//! 2. a paused timer does nothing;
//! 3. a done timer runs cleanup (idempotent);
//! 4. otherwise on-update, on-progress, on-time-remaining and on-remaining
//!    fire in that order;
//! 5. once elapsed time reaches the duration, on-complete fires and the timer
//!    either re-stamps its start (looping) or completes and cleans up.
//!
//! Callbacks always run with no internal lock held, so a callback may call
//! back into its own timer or start other timers.

use crate::callbacks::{Callbacks, Hook, ValueHook};
use crate::scheduler::{Scheduler, SchedulerInner};
use crate::snapshot::{TimerSnapshot, TimerStatus};
use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::sync::{Arc, Weak};
use tw_core::{CancelSignal, SharedTimeSource, TimerId};

#[derive(Default)]
struct Hooks {
    on_start: Callbacks<Hook>,
    on_update: Callbacks<ValueHook>,
    on_progress: Callbacks<ValueHook>,
    on_time_remaining: Callbacks<ValueHook>,
    on_remaining: Callbacks<ValueHook>,
    on_complete: Callbacks<Hook>,
    on_cancel: Callbacks<Hook>,
    on_done: Callbacks<Hook>,
}

impl Hooks {
    fn clear(&mut self) {
        self.on_start.clear();
        self.on_update.clear();
        self.on_progress.clear();
        self.on_time_remaining.clear();
        self.on_remaining.clear();
        self.on_complete.clear();
        self.on_cancel.clear();
        self.on_done.clear();
    }
}

#[derive(Default)]
struct TimerState {
    /// `None` until the first start.
    start_time: Option<f64>,
    paused_elapsed: Option<f64>,
    completed: bool,
    cancelled: bool,
    registered: bool,
    looped: bool,
    cleanup_done: bool,
    disposed: bool,
    /// Bumped on every reset; detects callbacks that restarted the timer.
    generation: u64,
    cancellation: Option<Arc<dyn CancelSignal>>,
    hooks: Hooks,
}

impl TimerState {
    fn is_done(&self) -> bool {
        self.completed || self.cancelled
    }

    fn reset(&mut self) {
        self.completed = false;
        self.cancelled = false;
        self.paused_elapsed = None;
        self.cleanup_done = false;
        self.generation += 1;
    }
}

pub(crate) struct TimerInner {
    id: TimerId,
    duration: f64,
    source: SharedTimeSource,
    scheduler: Weak<SchedulerInner>,
    state: Mutex<TimerState>,
}

/// Values computed once per tick and handed to the per-tick callbacks.
struct TickValues {
    elapsed: f64,
    progress: f64,
    time_remaining: f64,
    remaining: f64,
}

/// Handle to a countdown timer. Clones refer to the same timer.
#[derive(Clone)]
pub struct Timer {
    inner: Arc<TimerInner>,
}

impl Timer {
    /// Create a timer measured against the scheduler's time source.
    ///
    /// Negative or NaN durations clamp to 0.
    pub fn new(scheduler: &Scheduler, duration: f64) -> Self {
        Self::with_time_source(scheduler, duration, scheduler.time_source())
    }

    /// Create a timer measured against its own time source, e.g. real time
    /// for a timer that must keep running while the game is paused.
    pub fn with_time_source(scheduler: &Scheduler, duration: f64, source: SharedTimeSource) -> Self {
        let duration = if duration.is_nan() { 0.0 } else { duration.max(0.0) };
        Self {
            inner: Arc::new(TimerInner {
                id: scheduler.next_id(),
                duration,
                source,
                scheduler: scheduler.downgrade(),
                state: Mutex::new(TimerState::default()),
            }),
        }
    }

    pub fn id(&self) -> &TimerId {
        &self.inner.id
    }

    pub fn duration(&self) -> f64 {
        self.inner.duration
    }

    pub(crate) fn same_as(&self, other: &Timer) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ── Subscriptions ───────────────────────────────────────────────────────

    pub fn on_start(&self, f: impl Fn() + Send + Sync + 'static) -> &Self {
        self.lock().hooks.on_start.push(Arc::new(f));
        self
    }

    /// Elapsed seconds, between 0 and the duration.
    pub fn on_update(&self, f: impl Fn(f64) + Send + Sync + 'static) -> &Self {
        self.lock().hooks.on_update.push(Arc::new(f));
        self
    }

    /// Progress fraction, from 0 to 1.
    pub fn on_progress(&self, f: impl Fn(f64) + Send + Sync + 'static) -> &Self {
        self.lock().hooks.on_progress.push(Arc::new(f));
        self
    }

    /// Seconds left, from the duration down to 0.
    pub fn on_time_remaining(&self, f: impl Fn(f64) + Send + Sync + 'static) -> &Self {
        self.lock().hooks.on_time_remaining.push(Arc::new(f));
        self
    }

    /// Remaining fraction, from 1 down to 0.
    pub fn on_remaining(&self, f: impl Fn(f64) + Send + Sync + 'static) -> &Self {
        self.lock().hooks.on_remaining.push(Arc::new(f));
        self
    }

    pub fn on_complete(&self, f: impl Fn() + Send + Sync + 'static) -> &Self {
        self.lock().hooks.on_complete.push(Arc::new(f));
        self
    }

    pub fn on_cancel(&self, f: impl Fn() + Send + Sync + 'static) -> &Self {
        self.lock().hooks.on_cancel.push(Arc::new(f));
        self
    }

    /// Fires once per run when the timer completes or is cancelled.
    pub fn on_done(&self, f: impl Fn() + Send + Sync + 'static) -> &Self {
        self.lock().hooks.on_done.push(Arc::new(f));
        self
    }

    // ── Configuration ───────────────────────────────────────────────────────

    /// Restart instead of completing when the duration is reached.
    pub fn looped(&self, enabled: bool) -> &Self {
        self.lock().looped = enabled;
        self
    }

    /// Cancel the timer on the first tick that observes `signal` set.
    ///
    /// Replaces any previously attached signal.
    pub fn with_cancellation(&self, signal: impl CancelSignal + 'static) -> &Self {
        self.lock().cancellation = Some(Arc::new(signal));
        self
    }

    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// Start the timer.
    ///
    /// A finished (completed or cancelled) timer is reset first, so a timer
    /// can be reused without an explicit reset. Starting a timer that is
    /// already running or paused does nothing.
    pub fn start(&self) -> &Self {
        let now = self.now();
        {
            let mut state = self.lock();
            if state.disposed {
                return self;
            }
            let was_done = state.is_done();
            if was_done {
                state.reset();
            } else if state.registered {
                return self;
            }
            state.start_time = Some(now);
            if state.registered {
                // Reused after `already_done` without leaving the active set.
                return self;
            }
        }

        let Some(scheduler) = self.scheduler() else {
            tracing::warn!(timer = %self.inner.id, "scheduler dropped, timer not started");
            return self;
        };
        scheduler.register(self);
        tracing::debug!(timer = %self.inner.id, duration = self.inner.duration, "timer started");

        let on_start = self.lock().hooks.on_start.clone();
        on_start.invoke();
        self
    }

    /// Leave the active set, reset every state flag and start a fresh run.
    pub fn restart(&self) -> &Self {
        if self.lock().disposed {
            return self;
        }
        self.leave_scheduler();
        self.lock().reset();
        self.start()
    }

    /// Mark the timer completed without firing on-complete or on-done.
    ///
    /// The timer stays in the active set; the next tick runs cleanup.
    pub fn already_done(&self) -> &Self {
        self.lock().completed = true;
        self
    }

    pub fn pause(&self) {
        let now = self.now();
        let mut state = self.lock();
        if state.paused_elapsed.is_some() || state.is_done() {
            return;
        }
        let elapsed = self.elapsed_at(&state, now);
        state.paused_elapsed = Some(elapsed);
    }

    pub fn resume(&self) {
        let now = self.now();
        let mut state = self.lock();
        if let Some(elapsed) = state.paused_elapsed.take() {
            state.start_time = Some(now - elapsed);
        }
    }

    /// Cancel the timer: fires on-cancel, then cleanup. Idempotent.
    pub fn cancel(&self) {
        let on_cancel = {
            let mut state = self.lock();
            if state.cancelled {
                return;
            }
            state.cancelled = true;
            state.hooks.on_cancel.clone()
        };
        tracing::debug!(timer = %self.inner.id, "timer cancelled");
        on_cancel.invoke();
        self.cleanup();
    }

    /// Cancel, drop the cancellation signal and every subscription.
    ///
    /// A disposed timer ignores `start`, `restart` and `update`.
    pub fn dispose(&self) {
        self.cancel();
        let mut state = self.lock();
        state.cancellation = None;
        state.hooks.clear();
        state.disposed = true;
    }

    /// Advance the timer by one scheduler tick.
    pub fn update(&self) {
        let (cancel_requested, disposed) = {
            let state = self.lock();
            let requested = !state.cancelled
                && state
                    .cancellation
                    .as_ref()
                    .is_some_and(|signal| signal.is_cancelled());
            (requested, state.disposed)
        };
        if disposed {
            return;
        }
        if cancel_requested {
            self.cancel();
            return;
        }

        let now = self.now();
        let (values, generation, hooks) = {
            let state = self.lock();
            if state.paused_elapsed.is_some() {
                return;
            }
            if state.is_done() {
                drop(state);
                self.cleanup();
                return;
            }
            let values = self.values_at(&state, now);
            let hooks = (
                state.hooks.on_update.clone(),
                state.hooks.on_progress.clone(),
                state.hooks.on_time_remaining.clone(),
                state.hooks.on_remaining.clone(),
            );
            (values, state.generation, hooks)
        };

        let (on_update, on_progress, on_time_remaining, on_remaining) = hooks;
        on_update.invoke_with(values.elapsed);
        on_progress.invoke_with(values.progress);
        on_time_remaining.invoke_with(values.time_remaining);
        on_remaining.invoke_with(values.remaining);

        let now = self.now();
        let on_complete = {
            let state = self.lock();
            if !self.still_running_run(&state, generation) {
                return;
            }
            let Some(start) = state.start_time else {
                return;
            };
            if now < start + self.inner.duration {
                return;
            }
            state.hooks.on_complete.clone()
        };
        on_complete.invoke();

        let now = self.now();
        let mut state = self.lock();
        if !self.still_running_run(&state, generation) {
            return;
        }
        if state.looped {
            state.start_time = Some(now);
            tracing::trace!(timer = %self.inner.id, "timer looped");
        } else {
            state.completed = true;
            drop(state);
            tracing::debug!(timer = %self.inner.id, "timer completed");
            self.cleanup();
        }
    }

    // ── Observers ───────────────────────────────────────────────────────────

    /// Elapsed seconds of the current run.
    ///
    /// Reads the duration once completed and the frozen value while paused.
    pub fn elapsed(&self) -> f64 {
        let now = self.now();
        self.elapsed_at(&self.lock(), now)
    }

    /// Elapsed over duration, clamped to [0, 1]; 0 for a zero duration.
    pub fn progress(&self) -> f64 {
        fraction(self.elapsed(), self.inner.duration)
    }

    /// Seconds left, never negative.
    pub fn time_remaining(&self) -> f64 {
        (self.inner.duration - self.elapsed()).max(0.0)
    }

    /// Time remaining over duration, clamped to [0, 1]; 0 for a zero duration.
    pub fn remaining(&self) -> f64 {
        fraction(self.time_remaining(), self.inner.duration)
    }

    pub fn is_registered(&self) -> bool {
        self.lock().registered
    }

    pub fn is_completed(&self) -> bool {
        self.lock().completed
    }

    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    pub fn is_done(&self) -> bool {
        self.lock().is_done()
    }

    pub fn is_paused(&self) -> bool {
        self.lock().paused_elapsed.is_some()
    }

    pub fn is_looped(&self) -> bool {
        self.lock().looped
    }

    pub fn is_running(&self) -> bool {
        let state = self.lock();
        !state.is_done() && state.paused_elapsed.is_none() && state.registered
    }

    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    pub fn status(&self) -> TimerStatus {
        let state = self.lock();
        status_of(&state)
    }

    /// Point-in-time view for logs and status tables.
    pub fn snapshot(&self) -> TimerSnapshot {
        let now = self.now();
        let state = self.lock();
        let values = self.values_at(&state, now);
        TimerSnapshot {
            id: self.inner.id.clone(),
            duration: self.inner.duration,
            elapsed: values.elapsed,
            progress: values.progress,
            time_remaining: values.time_remaining,
            status: status_of(&state),
            looped: state.looped,
            registered: state.registered,
        }
    }

    // ── Scheduler plumbing ──────────────────────────────────────────────────

    pub(crate) fn set_registered(&self, registered: bool) {
        self.lock().registered = registered;
    }

    // ── Internals ───────────────────────────────────────────────────────────

    fn lock(&self) -> MutexGuard<'_, TimerState> {
        self.inner.state.lock()
    }

    fn now(&self) -> f64 {
        self.inner.source.seconds()
    }

    fn scheduler(&self) -> Option<Scheduler> {
        self.inner.scheduler.upgrade().map(Scheduler::from_inner)
    }

    fn elapsed_at(&self, state: &TimerState, now: f64) -> f64 {
        if state.completed {
            return self.inner.duration;
        }
        if let Some(elapsed) = state.paused_elapsed {
            return elapsed;
        }
        match state.start_time {
            Some(start) => (now - start).max(0.0),
            None => 0.0,
        }
    }

    fn values_at(&self, state: &TimerState, now: f64) -> TickValues {
        let duration = self.inner.duration;
        let elapsed = self.elapsed_at(state, now);
        let time_remaining = (duration - elapsed).max(0.0);
        TickValues {
            elapsed: elapsed.min(duration),
            progress: fraction(elapsed, duration),
            time_remaining,
            remaining: fraction(time_remaining, duration),
        }
    }

    /// True while the run that started at `generation` is still live.
    ///
    /// A callback may have cancelled, paused or restarted the timer.
    fn still_running_run(&self, state: &TimerState, generation: u64) -> bool {
        state.generation == generation
            && !state.is_done()
            && state.paused_elapsed.is_none()
            && !state.disposed
    }

    /// Leave the active set, then fire on-done once per run.
    ///
    /// On-done subscribers always observe a deregistered timer.
    fn cleanup(&self) {
        let on_done = {
            let mut state = self.lock();
            if state.cleanup_done {
                return;
            }
            state.cleanup_done = true;
            state.hooks.on_done.clone()
        };
        self.leave_scheduler();
        on_done.invoke();
    }

    fn leave_scheduler(&self) {
        if !self.is_registered() {
            return;
        }
        match self.scheduler() {
            Some(scheduler) => scheduler.deregister(self),
            None => self.set_registered(false),
        }
    }
}

fn fraction(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn status_of(state: &TimerState) -> TimerStatus {
    if !state.is_done() && state.registered {
        if state.paused_elapsed.is_some() {
            TimerStatus::Paused
        } else {
            TimerStatus::Running
        }
    } else if state.completed {
        TimerStatus::Completed
    } else if state.cancelled {
        TimerStatus::Cancelled
    } else {
        TimerStatus::Idle
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("id", &self.inner.id)
            .field("duration", &self.inner.duration)
            .field("status", &self.status())
            .finish()
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
