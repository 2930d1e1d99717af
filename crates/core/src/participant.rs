// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Participant state machine for strict two-party alternation
//!
//! The classic turn-taking protocol: wait until the shared flag holds your
//! role, do the critical work, hand the flag to the other role, do the
//! non-critical work, repeat. The machine is pure; all I/O (flag reads and
//! writes, sleeps, narration) happens through the effects it returns.

use crate::clock::Clock;
use crate::config::ParticipantConfig;
use crate::effect::{Effect, Event};
use crate::turn::TurnRole;
use std::time::Instant;

/// Where a participant is in its cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticipantState {
    /// Polling the flag until it holds our role
    Waiting,
    /// Inside the critical section, `step` iterations done so far
    InCriticalSection { step: u32 },
    /// Outside the protected region; the turn is already handed off
    InNonCriticalSection,
    /// Cycle budget exhausted
    Done,
}

/// Inputs fed by the runner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticipantInput {
    /// Result of one flag poll (or wake)
    FlagObserved(TurnRole),
    /// One critical-section iteration finished
    StepCompleted,
    /// Non-critical work finished
    NonCriticalCompleted,
}

/// The participant state machine
#[derive(Clone, Debug)]
pub struct Participant {
    config: ParticipantConfig,
    state: ParticipantState,
    completed_cycles: u64,
    /// When the current wait began, for the admission-latency measurement
    waiting_since: Option<Instant>,
}

impl Participant {
    pub fn new(config: ParticipantConfig) -> Self {
        Self {
            config,
            state: ParticipantState::Waiting,
            completed_cycles: 0,
            waiting_since: None,
        }
    }

    pub fn config(&self) -> &ParticipantConfig {
        &self.config
    }

    pub fn state(&self) -> ParticipantState {
        self.state
    }

    pub fn role(&self) -> TurnRole {
        self.config.role
    }

    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, ParticipantState::Done)
    }

    pub fn in_critical_section(&self) -> bool {
        matches!(self.state, ParticipantState::InCriticalSection { .. })
    }

    /// Pure state transition function
    ///
    /// Inputs that make no sense in the current state leave the machine
    /// unchanged and produce no effects.
    pub fn transition(
        &self,
        input: ParticipantInput,
        clock: &impl Clock,
    ) -> (Participant, Vec<Effect>) {
        let mut next = self.clone();
        let mut effects = Vec::new();
        let role = self.config.role;
        let id = self.config.id.clone();

        match (self.state, input) {
            (ParticipantState::Waiting, ParticipantInput::FlagObserved(observed)) => {
                if observed == role {
                    let waited = self
                        .waiting_since
                        .map_or(std::time::Duration::ZERO, |since| {
                            clock.now().duration_since(since)
                        });
                    next.waiting_since = None;
                    next.state = ParticipantState::InCriticalSection { step: 0 };
                    effects.push(Effect::Emit(Event::CriticalEntered { id, role, waited }));
                } else {
                    if next.waiting_since.is_none() {
                        next.waiting_since = Some(clock.now());
                    }
                    effects.push(Effect::Emit(Event::TurnWaiting {
                        id,
                        role,
                        holder: observed,
                    }));
                }
            }

            (ParticipantState::InCriticalSection { step }, ParticipantInput::StepCompleted) => {
                let total = self.config.critical_steps.max(1);
                let step = step + 1;
                effects.push(Effect::Emit(Event::CriticalStep {
                    id: id.clone(),
                    role,
                    step,
                    total,
                }));
                effects.push(Effect::Sleep(self.config.step_delay));

                if step < total {
                    next.state = ParticipantState::InCriticalSection { step };
                } else {
                    // Hand-off happens before the non-critical section, not
                    // after it. The write is the release of the critical
                    // section.
                    let to = role.other();
                    effects.push(Effect::Sleep(self.config.handoff_delay));
                    effects.push(Effect::WriteFlag(to));
                    effects.push(Effect::Emit(Event::TurnHandedOff {
                        id: id.clone(),
                        from: role,
                        to,
                    }));
                    effects.push(Effect::Emit(Event::NonCriticalEntered { id, role }));
                    effects.push(Effect::Sleep(self.config.non_critical_delay));
                    next.state = ParticipantState::InNonCriticalSection;
                }
            }

            (ParticipantState::InNonCriticalSection, ParticipantInput::NonCriticalCompleted) => {
                let cycle = self.completed_cycles + 1;
                next.completed_cycles = cycle;
                effects.push(Effect::Emit(Event::CycleCompleted {
                    id: id.clone(),
                    role,
                    cycle,
                }));
                if self.config.cycles.is_some_and(|limit| cycle >= limit) {
                    next.state = ParticipantState::Done;
                    effects.push(Effect::Emit(Event::ParticipantDone {
                        id,
                        role,
                        cycles: cycle,
                    }));
                } else {
                    next.state = ParticipantState::Waiting;
                }
            }

            // Anything else is a stale or misdirected input
            _ => {}
        }

        (next, effects)
    }
}

#[cfg(test)]
#[path = "participant_tests.rs"]
mod tests;
