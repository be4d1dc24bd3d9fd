// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

/// Frame period variable, read by clap as the `--tick-ms` fallback.
pub const TICK_MS: &str = "TW_TICK_MS";

/// Default frame period (about 60 frames per second).
pub const DEFAULT_TICK_MS: u64 = 16;

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
