// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! turnlock-core: strict-alternation mutual exclusion over a shared turn flag
//!
//! This crate provides:
//! - A pure state machine for the two-party turn-taking protocol
//! - Turn-flag backends: an in-process watch channel and a cross-process
//!   shared-memory segment
//! - Effect-based orchestration and an event bus for narration

pub mod clock;
pub mod config;
pub mod effect;
pub mod events;
pub mod flag;
pub mod participant;
pub mod runner;
pub mod shm;
pub mod turn;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{load_config, ConfigError, ParticipantConfig};
pub use effect::{Effect, Event};
pub use events::{EventBus, EventReceiver, EventSender};
pub use flag::{FlagError, LocalTurnFlag, TurnFlag};
pub use participant::{Participant, ParticipantInput, ParticipantState};
pub use runner::{shutdown_pair, ParticipantRunner, RunnerError};
pub use shm::{ShmSegment, ShmTurnFlag, DEFAULT_SEGMENT_NAME, SEGMENT_SIZE};
pub use turn::{ParticipantId, TurnRole};
