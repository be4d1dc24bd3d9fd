// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only views of timer state for logs, status tables and JSON output.

use serde::Serialize;
use std::fmt;
use tw_core::TimerId;

/// Coarse lifecycle state of a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    /// Not in the active set and not finished: never started, or restarted
    /// and waiting to rejoin.
    Idle,
    Running,
    Paused,
    Completed,
    Cancelled,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
            TimerStatus::Completed => "completed",
            TimerStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TimerStatus::Completed | TimerStatus::Cancelled)
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of one timer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerSnapshot {
    pub id: TimerId,
    pub duration: f64,
    /// Elapsed seconds, capped at the duration.
    pub elapsed: f64,
    pub progress: f64,
    pub time_remaining: f64,
    pub status: TimerStatus,
    pub looped: bool,
    pub registered: bool,
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
