// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Participant configuration
//!
//! Defaults give a watchable demonstration: five one-second critical steps,
//! a one-second pause before the hand-off, two-second wait polls, and a
//! two-second non-critical section.

use crate::turn::{ParticipantId, TurnRole};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Configuration for one participant
///
/// Both the role and the id label are explicit parameters; nothing about a
/// participant is hardcoded into a particular binary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParticipantConfig {
    /// Which turn value this participant owns
    pub role: TurnRole,
    /// Label used in narration output
    #[serde(default = "ParticipantId::from_pid")]
    pub id: ParticipantId,
    /// Labeled iterations inside the critical section
    #[serde(default = "default_critical_steps")]
    pub critical_steps: u32,
    /// Delay after each critical-section iteration
    #[serde(with = "humantime_serde", default = "default_step_delay")]
    pub step_delay: Duration,
    /// Delay between finishing critical work and writing the hand-off
    #[serde(with = "humantime_serde", default = "default_handoff_delay")]
    pub handoff_delay: Duration,
    /// Interval between turn-flag polls while waiting
    #[serde(with = "humantime_serde", default = "default_poll_interval")]
    pub poll_interval: Duration,
    /// Duration of the non-critical section
    #[serde(with = "humantime_serde", default = "default_non_critical_delay")]
    pub non_critical_delay: Duration,
    /// Stop after this many completed cycles; `None` runs forever
    #[serde(default)]
    pub cycles: Option<u64>,
}

fn default_critical_steps() -> u32 {
    5
}

fn default_step_delay() -> Duration {
    Duration::from_secs(1)
}

fn default_handoff_delay() -> Duration {
    Duration::from_secs(1)
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(2)
}

fn default_non_critical_delay() -> Duration {
    Duration::from_secs(2)
}

impl ParticipantConfig {
    pub fn new(role: TurnRole) -> Self {
        Self {
            role,
            id: ParticipantId::from_pid(),
            critical_steps: default_critical_steps(),
            step_delay: default_step_delay(),
            handoff_delay: default_handoff_delay(),
            poll_interval: default_poll_interval(),
            non_critical_delay: default_non_critical_delay(),
            cycles: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = ParticipantId::new(id);
        self
    }

    pub fn with_critical_steps(mut self, steps: u32) -> Self {
        self.critical_steps = steps;
        self
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_handoff_delay(mut self, delay: Duration) -> Self {
        self.handoff_delay = delay;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_non_critical_delay(mut self, delay: Duration) -> Self {
        self.non_critical_delay = delay;
        self
    }

    pub fn with_cycles(mut self, cycles: u64) -> Self {
        self.cycles = Some(cycles);
        self
    }
}

/// Load a participant config from a TOML file
pub fn load_config(path: &Path) -> Result<ParticipantConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
