//! `tw demo` specs

use crate::prelude::*;

#[test]
fn countdown_demo_runs_ten_seconds() {
    simulated(500)
        .args(&["demo", "countdown"])
        .passes()
        .stdout_has("[  0.00s] countdown started")
        .stdout_has("[ 10.00s] countdown completed");
}

#[test]
fn loop_demo_completes_three_cycles() {
    simulated(500)
        .args(&["demo", "loop"])
        .passes()
        .stdout_has("[  2.00s] loop completed (cycle 1)")
        .stdout_has("[  4.00s] loop completed (cycle 2)")
        .stdout_has("[  6.00s] loop completed (cycle 3)")
        .stdout_lacks("cycle 4");
}

#[test]
fn multiple_demo_finishes_timers_independently() {
    simulated(500)
        .args(&["demo", "multiple"])
        .passes()
        .stdout_eq(
            "\
[  0.00s] short started
[  0.00s] medium started
[  0.00s] long started
[  3.00s] short completed
[  5.00s] medium completed
[  7.00s] long completed

NAME    DURATION  STATUS     PROGRESS
short      3.00s  completed      100%
medium     5.00s  completed      100%
long       7.00s  completed      100%
",
        );
}
