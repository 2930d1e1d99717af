// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run and clean error specs
//!
//! Verify segment failures surface on stderr with exit code 1, and that
//! clean handles both present and absent segments.

use crate::prelude::*;

#[test]
fn run_fails_when_the_segment_path_is_a_directory() {
    let scratch = Scratch::new();
    std::fs::create_dir(scratch.segment()).unwrap();
    let segment = scratch.segment();

    scratch
        .turnlock()
        .args(&["run", "--role", "a"])
        .args(&["--segment", segment.to_str().unwrap()])
        .fails()
        .code(1)
        .stderr_has("segment");
}

#[test]
fn run_fails_on_an_undersized_segment() {
    let scratch = Scratch::new();
    std::fs::write(scratch.segment(), b"0").unwrap();
    let segment = scratch.segment();

    scratch
        .turnlock()
        .args(&["run", "--role", "a"])
        .args(&["--segment", segment.to_str().unwrap()])
        .fails()
        .code(1);
}

#[test]
fn run_fails_on_a_missing_config_file() {
    let scratch = Scratch::new();

    scratch
        .turnlock()
        .args(&["run", "--role", "a", "--config", "no-such-file.toml"])
        .fails()
        .code(1)
        .stderr_has("no-such-file.toml");
}

#[test]
fn solo_run_removes_the_segment_it_created() {
    let scratch = Scratch::new();
    let segment = scratch.segment();

    scratch
        .turnlock()
        .args(&["run", "--role", "a", "--cycles", "1"])
        .args(&["--segment", segment.to_str().unwrap()])
        .args(QUICK_TIMING)
        .passes()
        .stdout_has("entering the critical section");

    assert!(!segment.exists(), "creator left its segment behind");
}

#[test]
fn clean_removes_a_leftover_segment() {
    let scratch = Scratch::new();
    std::fs::write(scratch.segment(), vec![b'0'; 10]).unwrap();
    let segment = scratch.segment();

    scratch
        .turnlock()
        .args(&["clean", "--segment", segment.to_str().unwrap()])
        .passes()
        .stdout_has("removed");
    assert!(!segment.exists());
}

#[test]
fn clean_is_a_no_op_without_a_segment() {
    let scratch = Scratch::new();
    let segment = scratch.segment();

    scratch
        .turnlock()
        .args(&["clean", "--segment", segment.to_str().unwrap()])
        .passes()
        .stdout_has("nothing to clean");
}
