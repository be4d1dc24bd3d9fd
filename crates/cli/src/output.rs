// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;
use tw_core::format_seconds;

use crate::color;
use crate::host::{HostEvent, TimerReport};
use crate::table::{CellStyle, Column, Table};

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Text form of an event: `[  1.00s] countdown started`.
pub fn format_event(event: &HostEvent, colorize: bool) -> String {
    let stamp = event_stamp(event.time);
    let label = event_label(event);
    if colorize {
        format!(
            "{} {} {}",
            color::apply_muted(&stamp),
            event.timer,
            color::apply_status(&label)
        )
    } else {
        format!("{stamp} {} {label}", event.timer)
    }
}

fn event_stamp(time: f64) -> String {
    format!("[{time:>6.2}s]")
}

fn event_label(event: &HostEvent) -> String {
    match event.cycle {
        Some(cycle) => format!("{} (cycle {cycle})", event.event.as_str()),
        None => event.event.as_str().to_string(),
    }
}

/// Print one event as a text line or a JSON object line.
pub fn print_event(event: &HostEvent, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", format_event(event, color::should_colorize())),
        OutputFormat::Json => match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!(error = %e, "failed to encode event"),
        },
    }
}

pub fn summary_table(reports: &[TimerReport], colorize: bool) -> Table {
    let mut table = Table::with_color(
        vec![
            Column::left("NAME").with_max(32),
            Column::right("DURATION").styled(CellStyle::Muted),
            Column::left("STATUS").styled(CellStyle::Status),
            Column::right("PROGRESS"),
        ],
        colorize,
    );
    for report in reports {
        table.row(vec![
            report.name.clone(),
            format_seconds(report.snapshot.duration),
            report.snapshot.status.to_string(),
            format!("{:.0}%", report.snapshot.progress * 100.0),
        ]);
    }
    table
}

#[derive(Serialize)]
struct Summary<'a> {
    timers: &'a [TimerReport],
}

/// Print the end-of-run summary: a table in text mode, one JSON object in
/// JSON mode.
pub fn print_summary(reports: &[TimerReport], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let table = summary_table(reports, color::should_colorize());
            if !table.is_empty() {
                println!();
                table.render(&mut std::io::stdout())?;
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&Summary { timers: reports })?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
