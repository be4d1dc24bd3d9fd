//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn tw_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn tw_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("demo")
        .stdout_has("scenario")
        .stdout_has("--tick-ms");
}

#[test]
fn tw_version_shows_package_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_has(concat!("tw ", env!("CARGO_PKG_VERSION")));
}

#[test]
fn tw_run_help_shows_timer_flags() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--loop")
        .stdout_has("--cycles")
        .stdout_has("--cancel-after")
        .stdout_has("--pause-at")
        .stdout_has("--real-time");
}

#[test]
fn tw_demo_help_lists_demos() {
    cli()
        .args(&["demo", "--help"])
        .passes()
        .stdout_has("countdown")
        .stdout_has("loop")
        .stdout_has("multiple");
}
