// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI surface specs
//!
//! Verify help output, argument validation, and usage errors.

use crate::prelude::*;

#[test]
fn help_lists_all_subcommands() {
    Scratch::new()
        .turnlock()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("demo")
        .stdout_has("clean");
}

#[test]
fn help_describes_the_protocol() {
    Scratch::new()
        .turnlock()
        .args(&["--help"])
        .passes()
        .stdout_has("strict alternation");
}

#[test]
fn version_flag_prints_the_binary_name() {
    Scratch::new()
        .turnlock()
        .args(&["--version"])
        .passes()
        .stdout_has("turnlock");
}

#[test]
fn run_requires_a_role() {
    Scratch::new()
        .turnlock()
        .args(&["run"])
        .fails()
        .stderr_has("--role");
}

#[test]
fn run_rejects_an_unknown_role() {
    Scratch::new()
        .turnlock()
        .args(&["run", "--role", "c"])
        .fails()
        .stderr_has("--role");
}

#[test]
fn demo_rejects_an_unknown_init_turn() {
    Scratch::new()
        .turnlock()
        .args(&["demo", "--init-turn", "z"])
        .fails()
        .stderr_has("--init-turn");
}

#[test]
fn timing_flags_reject_malformed_durations() {
    Scratch::new()
        .turnlock()
        .args(&["demo", "--step-delay", "soon"])
        .fails()
        .stderr_has("--step-delay");
}
