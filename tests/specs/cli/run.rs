//! `tw run` specs
//!
//! One timer driven by a simulated clock: event lines, summary table and
//! JSON output.

use crate::prelude::*;

#[test]
fn countdown_prints_events_and_summary() {
    simulated(250)
        .args(&["run", "2", "--name", "countdown"])
        .passes()
        .stdout_eq(
            "\
[  0.00s] countdown started
[  2.00s] countdown completed

NAME       DURATION  STATUS     PROGRESS
countdown     2.00s  completed      100%
",
        );
}

#[test]
fn default_name_is_timer() {
    simulated(500)
        .args(&["run", "1"])
        .passes()
        .stdout_has("[  1.00s] timer completed");
}

#[test]
fn loop_with_cycles_reports_each_completion() {
    simulated(500)
        .args(&["run", "1", "--name", "blink", "--cycles", "3"])
        .passes()
        .stdout_eq(
            "\
[  0.00s] blink started
[  1.00s] blink completed (cycle 1)
[  2.00s] blink completed (cycle 2)
[  3.00s] blink completed (cycle 3)

NAME   DURATION  STATUS     PROGRESS
blink     1.00s  completed      100%
",
        );
}

#[test]
fn cancel_after_cancels_the_timer() {
    simulated(500)
        .args(&["run", "5", "--name", "bomb", "--cancel-after", "2"])
        .passes()
        .stdout_has("[  2.00s] bomb cancelled")
        .stdout_lacks("completed");
}

#[test]
fn cancel_after_ends_an_endless_loop() {
    simulated(500)
        .args(&["run", "1", "--loop", "--cancel-after", "2.5"])
        .passes()
        .stdout_has("[  2.00s] timer completed (cycle 2)")
        .stdout_has("[  2.50s] timer cancelled");
}

#[test]
fn pause_window_shifts_completion() {
    simulated(500)
        .args(&["run", "3", "--pause-at", "1", "--pause-for", "2"])
        .passes()
        .stdout_has("[  1.00s] timer paused")
        .stdout_has("[  3.00s] timer resumed")
        .stdout_has("[  5.00s] timer completed");
}

#[test]
fn time_scale_speeds_up_game_timers() {
    simulated(500)
        .args(&["--time-scale", "2", "run", "4"])
        .passes()
        .stdout_has("[  2.00s] timer completed");
}

#[test]
fn real_time_timers_ignore_time_scale() {
    simulated(500)
        .args(&["--time-scale", "2", "run", "4", "--real-time"])
        .passes()
        .stdout_has("[  4.00s] timer completed");
}

#[test]
fn start_after_delays_the_start() {
    simulated(500)
        .args(&["run", "1", "--start-after", "2"])
        .passes()
        .stdout_has("[  2.00s] timer started")
        .stdout_has("[  3.00s] timer completed");
}

#[test]
fn json_output_is_one_object_per_line() {
    let run = simulated(500)
        .args(&["-o", "json", "run", "1", "--name", "blink", "--cycles", "2"])
        .passes();
    let lines = run.json_lines();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        serde_json::json!({"time": 0.0, "timer": "blink", "event": "started"})
    );
    assert_eq!(
        lines[2],
        serde_json::json!({"time": 2.0, "timer": "blink", "event": "completed", "cycle": 2})
    );

    let summary = &lines[3]["timers"][0];
    assert_eq!(summary["name"], "blink");
    assert_eq!(summary["status"], "completed");
    assert_eq!(summary["completions"], 2);
    assert_eq!(summary["progress"], 1.0);
}

#[test]
fn real_clock_run_completes() {
    cli()
        .args(&["--tick-ms", "5", "run", "0.05", "--name", "quick"])
        .passes()
        .stdout_has("quick completed");
}

#[test]
fn tick_ms_can_come_from_environment() {
    cli()
        .env("TW_TICK_MS", "250")
        .args(&["--simulate", "run", "0.5"])
        .passes()
        .stdout_has("[  0.50s] timer completed");
}
