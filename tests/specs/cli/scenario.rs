//! `tw scenario` specs
//!
//! Timers described in TOML files.

use crate::prelude::*;

const WAVES: &str = r#"
[[timer]]
name = "spawn"
duration = 1.0
cycles = 2

[[timer]]
name = "boss"
duration = 10.0
start_after = 1.0
cancel_after = 2.0
"#;

#[test]
fn scenario_runs_every_timer() {
    let project = Project::empty();
    project.file("waves.toml", WAVES);

    project
        .tw(500)
        .args(&["scenario", "waves.toml"])
        .passes()
        .stdout_eq(
            "\
[  0.00s] spawn started
[  1.00s] boss started
[  1.00s] spawn completed (cycle 1)
[  2.00s] spawn completed (cycle 2)
[  3.00s] boss cancelled

NAME   DURATION  STATUS     PROGRESS
spawn     1.00s  completed      100%
boss     10.00s  cancelled       20%
",
        );
}

#[test]
fn scenario_tick_applies_without_flag() {
    let project = Project::empty();
    project.file(
        "tick.toml",
        "tick_ms = 250\n[[timer]]\nname = \"a\"\nduration = 0.75\n",
    );

    project
        .tw(250)
        .args(&["scenario", "tick.toml"])
        .passes()
        .stdout_has("[  0.75s] a completed");

    cli()
        .pwd(project.path())
        .args(&["--simulate", "scenario", "tick.toml"])
        .passes()
        .stdout_has("[  0.75s] a completed");
}

#[test]
fn scenario_time_scale_applies() {
    let project = Project::empty();
    project.file(
        "fast.toml",
        "time_scale = 4.0\n[[timer]]\nname = \"a\"\nduration = 4.0\n",
    );

    project
        .tw(500)
        .args(&["scenario", "fast.toml"])
        .passes()
        .stdout_has("[  1.00s] a completed");
}

#[test]
fn scenario_json_summary_lists_all_timers() {
    let project = Project::empty();
    project.file("waves.toml", WAVES);

    let run = project
        .tw(500)
        .args(&["-o", "json", "scenario", "waves.toml"])
        .passes();
    let lines = run.json_lines();
    let summary = lines.last().unwrap();

    assert_eq!(summary["timers"][0]["name"], "spawn");
    assert_eq!(summary["timers"][1]["name"], "boss");
    assert_eq!(summary["timers"][1]["status"], "cancelled");
}
