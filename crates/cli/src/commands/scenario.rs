// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tw scenario <file>` - Run the timers described in a TOML file

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use super::{drive, HostSettings};
use crate::output::OutputFormat;
use crate::scenario::Scenario;

#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Scenario file with one [[timer]] table per timer
    pub file: PathBuf,
}

/// Fill in settings the command line left unset from the scenario file.
pub fn settings_for(
    scenario: &Scenario,
    tick_ms: Option<u64>,
    time_scale: Option<f64>,
    simulate: bool,
) -> HostSettings {
    let tick_ms = tick_ms
        .or(scenario.tick_ms)
        .unwrap_or(crate::env::DEFAULT_TICK_MS);
    HostSettings {
        tick: Duration::from_millis(tick_ms),
        time_scale: time_scale.or(scenario.time_scale).unwrap_or(1.0),
        simulate,
    }
}

pub async fn handle(
    args: ScenarioArgs,
    tick_ms: Option<u64>,
    time_scale: Option<f64>,
    simulate: bool,
    format: OutputFormat,
) -> Result<()> {
    let scenario = Scenario::load(&args.file)?;
    let settings = settings_for(&scenario, tick_ms, time_scale, simulate);
    drive(scenario.timers, settings, format).await
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
