// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tw demo <name>` - Built-in timer demonstrations

use anyhow::Result;
use clap::{Args, ValueEnum};

use super::{drive, HostSettings};
use crate::output::OutputFormat;
use crate::plan::TimerPlan;

#[derive(Args, Debug)]
pub struct DemoArgs {
    #[arg(value_enum)]
    pub demo: Demo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// A single 10 second countdown
    Countdown,
    /// A 2 second timer looping three times
    Loop,
    /// Three timers of 3, 5 and 7 seconds running side by side
    Multiple,
}

impl Demo {
    pub fn plans(self) -> Vec<TimerPlan> {
        match self {
            Self::Countdown => vec![TimerPlan::new("countdown", 10.0)],
            Self::Loop => vec![TimerPlan::new("loop", 2.0).looping(Some(3))],
            Self::Multiple => vec![
                TimerPlan::new("short", 3.0),
                TimerPlan::new("medium", 5.0),
                TimerPlan::new("long", 7.0),
            ],
        }
    }
}

pub async fn handle(args: DemoArgs, settings: HostSettings, format: OutputFormat) -> Result<()> {
    drive(args.demo.plans(), settings, format).await
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
