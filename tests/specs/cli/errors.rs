//! CLI error handling specs
//!
//! Verify error messages and exit codes for invalid input.

use crate::prelude::*;

#[test]
fn missing_scenario_file() {
    let project = Project::empty();
    project
        .tw(100)
        .args(&["scenario", "nope.toml"])
        .fails()
        .exit_code(1)
        .stderr_has("Error: failed to read scenario nope.toml");
}

#[test]
fn malformed_scenario_file() {
    let project = Project::empty();
    project.file("bad.toml", "[[timer]]\nname = \"a\"\nduration = \n");

    project
        .tw(100)
        .args(&["scenario", "bad.toml"])
        .fails()
        .exit_code(1)
        .stderr_has("Error: invalid scenario bad.toml");
}

#[test]
fn scenario_without_timers() {
    let project = Project::empty();
    project.file("empty.toml", "tick_ms = 10\n");

    project
        .tw(100)
        .args(&["scenario", "empty.toml"])
        .fails()
        .stderr_has("Error: scenario has no [[timer]] entries");
}

#[test]
fn scenario_with_duplicate_names() {
    let project = Project::empty();
    project.file(
        "dup.toml",
        "[[timer]]\nname = \"a\"\nduration = 1\n[[timer]]\nname = \"a\"\nduration = 2\n",
    );

    project
        .tw(100)
        .args(&["scenario", "dup.toml"])
        .fails()
        .stderr_has("Error: duplicate timer name 'a'");
}

#[test]
fn scenario_with_negative_duration() {
    let project = Project::empty();
    project.file("neg.toml", "[[timer]]\nname = \"a\"\nduration = -1\n");

    project
        .tw(100)
        .args(&["scenario", "neg.toml"])
        .fails()
        .stderr_has("Error: a: duration must be a finite, non-negative number of seconds");
}

#[test]
fn simulating_an_endless_loop_is_refused() {
    simulated(100)
        .args(&["run", "1", "--loop"])
        .fails()
        .exit_code(1)
        .stderr_has("Error: timer 'timer' loops forever");
}

#[test]
fn simulating_at_time_scale_zero_is_refused() {
    simulated(100)
        .args(&["--time-scale", "0", "run", "2"])
        .fails()
        .exit_code(1)
        .stderr_has("Error: timer 'timer' never finishes at time scale 0");
}

#[test]
fn frozen_scenario_is_refused_when_simulating() {
    let project = Project::empty();
    project.file(
        "frozen.toml",
        "time_scale = 0
[[timer]]
name = \"stuck\"
duration = 1
",
    );

    project
        .tw(100)
        .args(&["scenario", "frozen.toml"])
        .fails()
        .exit_code(1)
        .stderr_has("Error: timer 'stuck' never finishes at time scale 0");
}

#[test]
fn invalid_duration_is_a_usage_error() {
    cli()
        .args(&["run", "soon"])
        .fails()
        .exit_code(2)
        .stderr_has("is not a number of seconds");
}

#[test]
fn unknown_demo_is_a_usage_error() {
    cli()
        .args(&["demo", "fireworks"])
        .fails()
        .exit_code(2)
        .stderr_has("invalid value 'fireworks'");
}

#[test]
fn pause_at_without_pause_for_is_a_usage_error() {
    cli()
        .args(&["run", "1", "--pause-at", "0.5"])
        .fails()
        .exit_code(2);
}
