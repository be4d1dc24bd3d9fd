// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod demo;
pub mod run;
pub mod scenario;

use std::time::Duration;

use anyhow::{bail, Result};
use tw_core::{CancellationToken, Clock, FakeClock, SystemClock};

use crate::host::{Host, Pacer, TimerReport};
use crate::output::{self, OutputFormat};
use crate::plan::TimerPlan;

/// Frame settings shared by every command that runs timers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostSettings {
    pub tick: Duration,
    pub time_scale: f64,
    /// Step a fake clock each frame instead of sleeping.
    pub simulate: bool,
}

/// clap value parser for second counts.
pub(crate) fn parse_seconds(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a number of seconds"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("`{s}` must be a finite, non-negative number of seconds"));
    }
    Ok(value)
}

/// Run `plans` to completion, printing events and the final summary.
///
/// Ctrl-C cancels every running timer and ends the run.
pub async fn drive(plans: Vec<TimerPlan>, settings: HostSettings, format: OutputFormat) -> Result<()> {
    for plan in &plans {
        plan.validate()?;
    }
    if settings.simulate {
        if let Some(plan) = plans.iter().find(|p| p.is_unbounded()) {
            bail!(
                "timer '{}' loops forever; give it cycles or cancel_after to simulate it",
                plan.name
            );
        }
        if settings.time_scale == 0.0 {
            if let Some(plan) = plans.iter().find(|p| p.needs_game_time()) {
                bail!(
                    "timer '{}' never finishes at time scale 0; give it real_time or cancel_after to simulate it",
                    plan.name
                );
            }
        }
    }

    let shutdown = CancellationToken::new();
    let interrupt = tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupted, cancelling timers");
                shutdown.cancel();
            }
        }
    });

    tracing::debug!(
        timers = plans.len(),
        tick_ms = settings.tick.as_millis() as u64,
        time_scale = settings.time_scale,
        simulate = settings.simulate,
        "running timers"
    );
    let reports = if settings.simulate {
        let clock = FakeClock::new();
        let mut pacer = Pacer::simulated(clock.clone(), settings.tick);
        host_run(clock, plans, settings, shutdown, &mut pacer, format).await
    } else {
        let mut pacer = Pacer::realtime(settings.tick);
        host_run(SystemClock, plans, settings, shutdown, &mut pacer, format).await
    };
    interrupt.abort();

    output::print_summary(&reports, format)
}

async fn host_run<C: Clock>(
    clock: C,
    plans: Vec<TimerPlan>,
    settings: HostSettings,
    shutdown: CancellationToken,
    pacer: &mut Pacer,
    format: OutputFormat,
) -> Vec<TimerReport> {
    let mut host = Host::new(clock, settings.time_scale, shutdown);
    for plan in plans {
        host.add(plan);
    }
    host.run(pacer, |event| output::print_event(event, format))
        .await
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
