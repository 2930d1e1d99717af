// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drives a participant state machine against a turn-flag backend
//!
//! The runner owns the I/O the machine abstains from: it polls the flag,
//! feeds inputs, and executes the returned effects (narration, sleeps, the
//! hand-off write). A watch-based shutdown signal stops the loop on every
//! exit path, so teardown is reachable even for run-forever participants.

use crate::clock::Clock;
use crate::config::ParticipantConfig;
use crate::effect::Effect;
use crate::events::EventBus;
use crate::flag::{FlagError, TurnFlag};
use crate::participant::{Participant, ParticipantInput, ParticipantState};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("flag error: {0}")]
    Flag(#[from] FlagError),
}

/// Create a shutdown signal pair; sending `true` stops runners
pub fn shutdown_pair() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Runs one participant to completion (or shutdown)
pub struct ParticipantRunner<F: TurnFlag, C: Clock> {
    machine: Participant,
    flag: F,
    clock: C,
    bus: EventBus,
    shutdown: watch::Receiver<bool>,
}

impl<F: TurnFlag, C: Clock> ParticipantRunner<F, C> {
    pub fn new(
        config: ParticipantConfig,
        flag: F,
        clock: C,
        bus: EventBus,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            machine: Participant::new(config),
            flag,
            clock,
            bus,
            shutdown,
        }
    }

    /// Drive the machine until it reports done or shutdown fires.
    ///
    /// Returns the final machine so callers can inspect the state it
    /// stopped in and how many cycles it completed.
    pub async fn run(mut self) -> Result<Participant, RunnerError> {
        tracing::info!(role = %self.machine.role(), id = %self.machine.config().id, "participant starting");

        loop {
            // A dropped sender counts as a shutdown request.
            if *self.shutdown.borrow() || self.shutdown.has_changed().is_err() {
                tracing::info!(role = %self.machine.role(), "participant shut down");
                break;
            }

            let input = match self.machine.state() {
                ParticipantState::Waiting => ParticipantInput::FlagObserved(self.flag.read()?),
                ParticipantState::InCriticalSection { .. } => ParticipantInput::StepCompleted,
                ParticipantState::InNonCriticalSection => ParticipantInput::NonCriticalCompleted,
                ParticipantState::Done => break,
            };

            let (machine, effects) = self.machine.transition(input, &self.clock);
            self.machine = machine;
            self.execute(effects).await?;

            // Pace the wait loop off the backend: event-capable flags wake
            // on the hand-off, plain shared memory sleeps a poll interval.
            if matches!(self.machine.state(), ParticipantState::Waiting) {
                let interval = self.machine.config().poll_interval;
                let flag = &self.flag;
                let shutdown = &mut self.shutdown;
                tokio::select! {
                    result = flag.changed(interval) => result?,
                    _ = shutdown.changed() => {}
                }
            }
        }

        tracing::info!(
            role = %self.machine.role(),
            cycles = self.machine.completed_cycles(),
            "participant finished"
        );
        Ok(self.machine)
    }

    async fn execute(&mut self, effects: Vec<Effect>) -> Result<(), RunnerError> {
        for effect in effects {
            match effect {
                Effect::Emit(event) => {
                    tracing::debug!(event = event.name(), role = %event.role(), "event");
                    self.bus.publish(event);
                }
                Effect::Sleep(duration) => self.pause(duration).await,
                Effect::WriteFlag(role) => self.flag.write(role)?,
            }
        }
        Ok(())
    }

    /// Sleep that returns early when shutdown fires
    async fn pause(&mut self, duration: Duration) {
        let shutdown = self.shutdown.changed();
        tokio::select! {
            _ = tokio::time::sleep(duration) => {}
            _ = shutdown => {}
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
