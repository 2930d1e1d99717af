// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable narration of protocol events
//!
//! One line per state transition or wait iteration. `[I]` marks idle and
//! hand-off narration, `[O]` marks work inside the critical section.

use turnlock_core::{Event, EventReceiver};

/// Print every event from the bus until all publishers are gone
pub async fn narrate(mut events: EventReceiver) {
    while let Some(event) = events.recv().await {
        println!("{}", render(&event));
    }
}

/// Render one event as a narration line
pub fn render(event: &Event) -> String {
    match event {
        Event::FlagInitialized { role } => {
            format!("[I] turn flag initialized, participant {role} goes first")
        }
        Event::TurnWaiting { id, role, holder } => {
            format!("[I] participant {id} ({role}) is waiting for its turn (flag={holder})")
        }
        Event::CriticalEntered { id, role, waited } => {
            if waited.is_zero() {
                format!("[O] participant {id} ({role}) entering the critical section")
            } else {
                format!(
                    "[O] participant {id} ({role}) entering the critical section after waiting {}",
                    humantime::format_duration(*waited)
                )
            }
        }
        Event::CriticalStep {
            id, step, total, ..
        } => {
            format!("[O] participant {id} - step {step}/{total}")
        }
        Event::TurnHandedOff { id, to, .. } => {
            format!("[I] participant {id} handing the turn to {to}")
        }
        Event::NonCriticalEntered { id, role } => {
            format!("[I] participant {id} ({role}) is in the non-critical section")
        }
        Event::CycleCompleted { id, cycle, .. } => {
            format!("[I] participant {id} completed cycle {cycle}")
        }
        Event::ParticipantDone { id, cycles, .. } => {
            format!("[I] participant {id} done after {cycles} cycles")
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
