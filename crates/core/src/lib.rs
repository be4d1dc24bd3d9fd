// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tw-core: clocks, time sources and cancellation for tickwork timers

pub mod cancel;
pub mod clock;
pub mod id;
pub mod time_fmt;
pub mod time_source;

pub use cancel::{link_tokens, CancelSignal, CancellationToken, LinkedCancellation};
pub use clock::{Clock, FakeClock, SystemClock};
pub use id::{IdGen, SequentialIdGen, TimerId};
pub use time_fmt::{format_elapsed, format_seconds};
pub use time_source::{GameClock, RealTime, SharedTimeSource, TimeSource};
