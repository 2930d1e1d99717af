// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events emitted by the participant state machine

use crate::turn::{ParticipantId, TurnRole};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Side effects the state machine requests from its runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for observers
    Emit(Event),
    /// Pause before processing the next input
    Sleep(Duration),
    /// Hand the shared turn flag to the given role
    WriteFlag(TurnRole),
}

/// Events narrating protocol state transitions
///
/// Every event carries the participant's id label and role; the id is for
/// humans only, the role is the protocol identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The shared flag was created and set to its starting value
    FlagInitialized { role: TurnRole },
    /// One wait iteration: the flag designates someone else
    TurnWaiting {
        id: ParticipantId,
        role: TurnRole,
        holder: TurnRole,
    },
    /// Admitted to the critical section
    CriticalEntered {
        id: ParticipantId,
        role: TurnRole,
        /// How long this participant polled before admission
        #[serde(with = "humantime_serde")]
        waited: Duration,
    },
    /// One labeled iteration of critical-section work
    CriticalStep {
        id: ParticipantId,
        role: TurnRole,
        step: u32,
        total: u32,
    },
    /// The turn flag was handed to the other participant
    TurnHandedOff {
        id: ParticipantId,
        from: TurnRole,
        to: TurnRole,
    },
    /// Entered the non-critical section
    NonCriticalEntered { id: ParticipantId, role: TurnRole },
    /// One full wait/critical/non-critical cycle finished
    CycleCompleted {
        id: ParticipantId,
        role: TurnRole,
        cycle: u64,
    },
    /// The configured cycle budget is exhausted
    ParticipantDone {
        id: ParticipantId,
        role: TurnRole,
        cycles: u64,
    },
}

impl Event {
    /// Stable name for logging and subscription matching
    pub fn name(&self) -> &'static str {
        match self {
            Self::FlagInitialized { .. } => "flag.initialized",
            Self::TurnWaiting { .. } => "turn.waiting",
            Self::CriticalEntered { .. } => "critical.entered",
            Self::CriticalStep { .. } => "critical.step",
            Self::TurnHandedOff { .. } => "turn.handed_off",
            Self::NonCriticalEntered { .. } => "non_critical.entered",
            Self::CycleCompleted { .. } => "cycle.completed",
            Self::ParticipantDone { .. } => "participant.done",
        }
    }

    /// The role this event concerns; hand-offs are attributed to the sender
    pub fn role(&self) -> TurnRole {
        match self {
            Self::FlagInitialized { role } => *role,
            Self::TurnWaiting { role, .. }
            | Self::CriticalEntered { role, .. }
            | Self::CriticalStep { role, .. }
            | Self::NonCriticalEntered { role, .. }
            | Self::CycleCompleted { role, .. }
            | Self::ParticipantDone { role, .. } => *role,
            Self::TurnHandedOff { from, .. } => *from,
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
