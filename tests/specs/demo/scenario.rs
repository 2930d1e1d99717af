// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demo scenario specs
//!
//! Verify the single-process demo narrates a full strict-alternation
//! exchange between both participants.

use crate::prelude::*;

#[test]
fn demo_announces_the_initial_turn_first() {
    let out = Scratch::new()
        .turnlock()
        .args(&["demo", "--cycles", "1"])
        .args(QUICK_TIMING)
        .passes()
        .stdout();

    let first = out.lines().next().expect("demo produced no output");
    assert_eq!(first, "[I] turn flag initialized, participant a goes first");
}

#[test]
fn demo_runs_both_participants_to_completion() {
    Scratch::new()
        .turnlock()
        .args(&["demo", "--cycles", "1"])
        .args(QUICK_TIMING)
        .passes()
        .stdout_has("participant-a done after 1 cycles")
        .stdout_has("participant-b done after 1 cycles");
}

#[test]
fn demo_labels_every_critical_step() {
    Scratch::new()
        .turnlock()
        .args(&["demo", "--cycles", "1"])
        .args(QUICK_TIMING)
        .passes()
        .stdout_has("participant-a - step 1/2")
        .stdout_has("participant-a - step 2/2")
        .stdout_has("participant-b - step 1/2")
        .stdout_has("participant-b - step 2/2");
}

#[test]
fn demo_hands_off_before_the_peer_enters() {
    let out = Scratch::new()
        .turnlock()
        .args(&["demo", "--cycles", "1"])
        .args(QUICK_TIMING)
        .passes()
        .stdout();

    let handoff = out
        .find("participant-a handing the turn to b")
        .expect("a never handed off");
    let b_enter = out
        .find("participant-b (b) entering the critical section")
        .expect("b never entered");
    assert!(handoff < b_enter, "b entered before a released the turn");
}

#[test]
fn demo_entries_strictly_alternate() {
    let out = Scratch::new()
        .turnlock()
        .args(&["demo", "--cycles", "2"])
        .args(QUICK_TIMING)
        .passes()
        .stdout();

    let entries: Vec<&str> = out
        .lines()
        .filter(|l| l.contains("entering the critical section"))
        .map(|l| if l.contains("participant-a") { "a" } else { "b" })
        .collect();
    assert_eq!(entries, ["a", "b", "a", "b"]);
}

#[test]
fn demo_starts_with_b_when_asked() {
    let out = Scratch::new()
        .turnlock()
        .args(&["demo", "--cycles", "1", "--init-turn", "b"])
        .args(QUICK_TIMING)
        .passes()
        .stdout();

    let first = out.lines().next().expect("demo produced no output");
    assert_eq!(first, "[I] turn flag initialized, participant b goes first");

    let entries: Vec<&str> = out
        .lines()
        .filter(|l| l.contains("entering the critical section"))
        .map(|l| if l.contains("participant-a") { "a" } else { "b" })
        .collect();
    assert_eq!(entries, ["b", "a"]);
}
