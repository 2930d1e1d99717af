// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI subcommands

pub mod clean;
pub mod demo;
pub mod run;

use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use turnlock_core::{ParticipantConfig, TurnRole, DEFAULT_SEGMENT_NAME};

pub fn parse_role(s: &str) -> Result<TurnRole, String> {
    s.parse()
}

/// Default segment location when `--segment` is not given
pub fn default_segment_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_SEGMENT_NAME)
}

/// Timing knobs shared by `run` and `demo`
#[derive(Args, Clone)]
pub struct TimingArgs {
    /// Labeled iterations inside the critical section
    #[arg(long)]
    pub critical_steps: Option<u32>,

    /// Delay after each critical-section iteration (e.g. "1s")
    #[arg(long, value_parser = humantime::parse_duration)]
    pub step_delay: Option<Duration>,

    /// Delay between finishing critical work and handing off
    #[arg(long, value_parser = humantime::parse_duration)]
    pub handoff_delay: Option<Duration>,

    /// Interval between turn-flag polls while waiting
    #[arg(long, value_parser = humantime::parse_duration)]
    pub poll_interval: Option<Duration>,

    /// Duration of the non-critical section
    #[arg(long, value_parser = humantime::parse_duration)]
    pub non_critical_delay: Option<Duration>,
}

impl TimingArgs {
    /// Overlay explicit flags on top of a base config
    pub fn apply(&self, mut config: ParticipantConfig) -> ParticipantConfig {
        if let Some(steps) = self.critical_steps {
            config.critical_steps = steps;
        }
        if let Some(delay) = self.step_delay {
            config.step_delay = delay;
        }
        if let Some(delay) = self.handoff_delay {
            config.handoff_delay = delay;
        }
        if let Some(interval) = self.poll_interval {
            config.poll_interval = interval;
        }
        if let Some(delay) = self.non_critical_delay {
            config.non_critical_delay = delay;
        }
        config
    }
}
