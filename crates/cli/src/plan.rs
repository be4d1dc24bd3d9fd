// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative description of one timer driven by the host.
//!
//! Offsets are wall-clock seconds. `start_after` counts from the moment the
//! host starts running; `cancel_after` and `pause_at` count from the moment
//! the timer itself starts.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("timer name must not be empty")]
    EmptyName,

    #[error("{name}: {field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidSeconds {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("{name}: cycles must be at least 1")]
    ZeroCycles { name: String },

    #[error("{name}: pause_at and pause_for must be given together")]
    PartialPause { name: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimerPlan {
    pub name: String,
    pub duration: f64,
    #[serde(default, rename = "loop")]
    pub looped: bool,
    /// Loop completions before the timer finishes. Implies looping.
    #[serde(default)]
    pub cycles: Option<u32>,
    #[serde(default)]
    pub start_after: f64,
    #[serde(default)]
    pub cancel_after: Option<f64>,
    #[serde(default)]
    pub pause_at: Option<f64>,
    #[serde(default)]
    pub pause_for: Option<f64>,
    /// Measure against wall time instead of the scaled game clock.
    #[serde(default)]
    pub real_time: bool,
}

impl TimerPlan {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            looped: false,
            cycles: None,
            start_after: 0.0,
            cancel_after: None,
            pause_at: None,
            pause_for: None,
            real_time: false,
        }
    }

    pub fn looping(mut self, cycles: Option<u32>) -> Self {
        self.looped = true;
        self.cycles = cycles;
        self
    }

    pub fn loops(&self) -> bool {
        self.looped || self.cycles.is_some()
    }

    /// A looping timer with nothing scheduled to stop it.
    pub fn is_unbounded(&self) -> bool {
        self.loops() && self.cycles.is_none() && self.cancel_after.is_none()
    }

    /// A game-time timer that never finishes while game time stands still.
    pub fn needs_game_time(&self) -> bool {
        !self.real_time && self.duration > 0.0 && self.cancel_after.is_none()
    }

    /// Offset from the timer's start at which a scheduled pause ends.
    pub fn resume_at(&self) -> Option<f64> {
        Some(self.pause_at? + self.pause_for?)
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.name.trim().is_empty() {
            return Err(PlanError::EmptyName);
        }
        let seconds = [
            ("duration", Some(self.duration)),
            ("start_after", Some(self.start_after)),
            ("cancel_after", self.cancel_after),
            ("pause_at", self.pause_at),
            ("pause_for", self.pause_for),
        ];
        for (field, value) in seconds {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(PlanError::InvalidSeconds {
                        name: self.name.clone(),
                        field,
                        value,
                    });
                }
            }
        }
        if self.cycles == Some(0) {
            return Err(PlanError::ZeroCycles {
                name: self.name.clone(),
            });
        }
        if self.pause_at.is_some() != self.pause_for.is_some() {
            return Err(PlanError::PartialPause {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
