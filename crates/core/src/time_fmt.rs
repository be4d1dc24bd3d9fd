// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable durations for timer logs and status tables.

/// Format seconds as a short human-readable duration: `"5s"`, `"2m"`, `"1h30m"`, `"3d"`.
///
/// For the hours range, minutes are included when non-zero (e.g. `"1h"` vs `"1h5m"`).
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        if m > 0 {
            format!("{}h{}m", h, m)
        } else {
            format!("{}h", h)
        }
    } else {
        format!("{}d", secs / 86400)
    }
}

/// Format fractional timer seconds with two decimals: `"1.50s"`.
///
/// Values of a minute or more fall back to [`format_elapsed`]. Negative and
/// non-finite values render as `"0.00s"`.
pub fn format_seconds(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "0.00s".to_string();
    }
    if secs < 60.0 {
        format!("{:.2}s", secs)
    } else {
        format_elapsed(secs as u64)
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
