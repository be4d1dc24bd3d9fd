// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tw run <duration>` - Run a single timer

use anyhow::Result;
use clap::Args;

use super::{drive, parse_seconds, HostSettings};
use crate::output::OutputFormat;
use crate::plan::TimerPlan;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Timer duration in seconds
    #[arg(value_parser = parse_seconds)]
    pub duration: f64,

    /// Name shown in event lines and the summary
    #[arg(long, default_value = "timer")]
    pub name: String,

    /// Restart the timer each time it completes
    #[arg(long = "loop")]
    pub looped: bool,

    /// Stop looping after this many completions (implies --loop)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub cycles: Option<u32>,

    /// Seconds after which to start the timer
    #[arg(long, value_parser = parse_seconds, default_value_t = 0.0)]
    pub start_after: f64,

    /// Cancel the timer this many seconds after it starts
    #[arg(long, value_parser = parse_seconds)]
    pub cancel_after: Option<f64>,

    /// Pause the timer this many seconds after it starts
    #[arg(long, value_parser = parse_seconds, requires = "pause_for")]
    pub pause_at: Option<f64>,

    /// How long the pause lasts, in seconds
    #[arg(long, value_parser = parse_seconds, requires = "pause_at")]
    pub pause_for: Option<f64>,

    /// Measure against wall time, ignoring --time-scale
    #[arg(long)]
    pub real_time: bool,
}

impl RunArgs {
    pub fn plan(&self) -> TimerPlan {
        TimerPlan {
            name: self.name.clone(),
            duration: self.duration,
            looped: self.looped,
            cycles: self.cycles,
            start_after: self.start_after,
            cancel_after: self.cancel_after,
            pause_at: self.pause_at,
            pause_for: self.pause_for,
            real_time: self.real_time,
        }
    }
}

pub async fn handle(args: RunArgs, settings: HostSettings, format: OutputFormat) -> Result<()> {
    drive(vec![args.plan()], settings, format).await
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
