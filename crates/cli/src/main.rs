// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tw - frame-driven countdown timers in the terminal

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod color;
mod commands;
mod env;
mod host;
mod output;
mod plan;
mod scenario;
mod table;

use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use commands::{demo, run, scenario as scenario_cmd, HostSettings};
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "tw",
    version,
    about = "tickwork - frame-driven countdown timers"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Frame period in milliseconds [default: 16]
    #[arg(
        long,
        env = env::TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    tick_ms: Option<u64>,

    /// Game clock speed multiplier [default: 1.0]
    #[arg(long, value_parser = parse_time_scale, global = true)]
    time_scale: Option<f64>,

    /// Step a simulated clock each frame instead of sleeping
    #[arg(long, global = true)]
    simulate: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single timer and print its lifecycle events
    Run(run::RunArgs),
    /// Run a built-in demonstration
    Demo(demo::DemoArgs),
    /// Run the timers described in a TOML scenario file
    Scenario(scenario_cmd::ScenarioArgs),
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn parse_time_scale(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(scale) if scale.is_finite() && scale >= 0.0 => Ok(scale),
        _ => Err(format!("`{s}` is not a finite, non-negative scale")),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants embed their source in the message).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

/// Install the stderr log subscriber.
///
/// `-v` forces debug output; otherwise `RUST_LOG` applies, defaulting to
/// warnings only.
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let settings = HostSettings {
        tick: Duration::from_millis(cli.tick_ms.unwrap_or(env::DEFAULT_TICK_MS)),
        time_scale: cli.time_scale.unwrap_or(1.0),
        simulate: cli.simulate,
    };

    match command {
        Commands::Run(args) => run::handle(args, settings, format).await,
        Commands::Demo(args) => demo::handle(args, settings, format).await,
        Commands::Scenario(args) => {
            scenario_cmd::handle(args, cli.tick_ms, cli.time_scale, cli.simulate, format).await
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
