// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time sources that timers measure elapsed time against.
//!
//! A time source is a single function returning the current time in seconds.
//! Two standard sources are provided:
//!
//! - [`GameClock`]: game time, advanced by the host once per frame, affected
//!   by pause and time scale.
//! - [`RealTime`]: wall-clock seconds since the source was created, unaffected
//!   by game pause or time scale.
//!
//! Any `Fn() -> f64` closure is also a time source.

use crate::clock::Clock;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;

/// Returns the current time in seconds.
///
/// Readings are expected to be non-decreasing. Each call samples once.
pub trait TimeSource: Send + Sync {
    fn seconds(&self) -> f64;
}

impl<F> TimeSource for F
where
    F: Fn() -> f64 + Send + Sync,
{
    fn seconds(&self) -> f64 {
        self()
    }
}

/// Shared, type-erased time source handle.
pub type SharedTimeSource = Arc<dyn TimeSource>;

/// Real time since startup.
#[derive(Clone, Debug)]
pub struct RealTime<C: Clock> {
    clock: C,
    origin: Instant,
}

impl<C: Clock> RealTime<C> {
    pub fn new(clock: C) -> Self {
        let origin = clock.now();
        Self { clock, origin }
    }
}

impl<C: Clock> TimeSource for RealTime<C> {
    fn seconds(&self) -> f64 {
        self.clock
            .now()
            .saturating_duration_since(self.origin)
            .as_secs_f64()
    }
}

#[derive(Debug)]
struct GameState {
    last_frame: Instant,
    time: f64,
    delta: f64,
    scale: f64,
    paused: bool,
    frames: u64,
}

/// Pausable, scalable game time.
///
/// Game time only moves when the host calls [`GameClock::update`]; between
/// frames every reader sees the same value. Clones share one game time.
#[derive(Clone)]
pub struct GameClock<C: Clock> {
    clock: C,
    state: Arc<Mutex<GameState>>,
}

impl<C: Clock> GameClock<C> {
    pub fn new(clock: C) -> Self {
        let last_frame = clock.now();
        Self {
            clock,
            state: Arc::new(Mutex::new(GameState {
                last_frame,
                time: 0.0,
                delta: 0.0,
                scale: 1.0,
                paused: false,
                frames: 0,
            })),
        }
    }

    /// Advance game time by the real time since the previous frame, scaled.
    ///
    /// Returns the scaled delta applied this frame (0 while paused).
    pub fn update(&self) -> f64 {
        let now = self.clock.now();
        let mut state = self.state.lock();
        let real = now.saturating_duration_since(state.last_frame).as_secs_f64();
        state.last_frame = now;
        state.frames += 1;
        state.delta = if state.paused { 0.0 } else { real * state.scale };
        state.time += state.delta;
        state.delta
    }

    /// Current game time in seconds.
    pub fn time(&self) -> f64 {
        self.state.lock().time
    }

    /// Scaled delta of the last frame.
    pub fn delta(&self) -> f64 {
        self.state.lock().delta
    }

    pub fn frame_count(&self) -> u64 {
        self.state.lock().frames
    }

    pub fn pause(&self) {
        let mut state = self.state.lock();
        if !state.paused {
            state.paused = true;
            tracing::debug!(time = state.time, "game clock paused");
        }
    }

    pub fn resume(&self) {
        let mut state = self.state.lock();
        if state.paused {
            state.paused = false;
            tracing::debug!(time = state.time, "game clock resumed");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state.lock().paused
    }

    /// Set the time scale. Negative or non-finite scales clamp to 0.
    pub fn set_time_scale(&self, scale: f64) {
        let scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
        self.state.lock().scale = scale;
    }

    pub fn time_scale(&self) -> f64 {
        self.state.lock().scale
    }
}

impl<C: Clock> TimeSource for GameClock<C> {
    fn seconds(&self) -> f64 {
        self.time()
    }
}

#[cfg(test)]
#[path = "time_source_tests.rs"]
mod tests;
