// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tickwork timer engine: countdown timers and the scheduler that ticks them

pub mod callbacks;
mod scheduler;
mod snapshot;
mod timer;

pub use callbacks::{Callbacks, Hook, ValueHook};
pub use scheduler::{Scheduler, TickReport};
pub use snapshot::{TimerSnapshot, TimerStatus};
pub use timer::Timer;
