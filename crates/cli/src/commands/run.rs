// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `turnlock run` - run one participant against a shared segment

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use turnlock_core::{
    load_config, shutdown_pair, Event, EventBus, ParticipantConfig, ParticipantRunner, ShmSegment,
    ShmTurnFlag, SystemClock, TurnRole,
};

use super::{default_segment_path, parse_role, TimingArgs};
use crate::output;

#[derive(Args)]
pub struct RunArgs {
    /// Which turn value this participant owns
    #[arg(long, value_parser = parse_role)]
    pub role: TurnRole,

    /// Segment file path (created if absent)
    #[arg(long)]
    pub segment: Option<PathBuf>,

    /// Turn value written when this side creates the segment
    #[arg(long, value_parser = parse_role, default_value = "a")]
    pub init_turn: TurnRole,

    /// Label for narration output (defaults to the process id)
    #[arg(long)]
    pub id: Option<String>,

    /// Stop after this many completed cycles (default: run forever)
    #[arg(long)]
    pub cycles: Option<u64>,

    #[command(flatten)]
    pub timing: TimingArgs,

    /// TOML config file; explicit flags override file values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn build_config(args: &RunArgs) -> Result<ParticipantConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let mut loaded = load_config(path)?;
            loaded.role = args.role;
            loaded
        }
        None => ParticipantConfig::new(args.role),
    };
    if let Some(id) = &args.id {
        config = config.with_id(id.clone());
    }
    if let Some(cycles) = args.cycles {
        config = config.with_cycles(cycles);
    }
    Ok(args.timing.apply(config))
}

pub async fn run(args: RunArgs) -> Result<()> {
    let config = build_config(&args)?;
    let path = args.segment.clone().unwrap_or_else(default_segment_path);

    let segment = ShmSegment::create_or_attach(&path, args.init_turn)
        .with_context(|| format!("cannot use segment {}", path.display()))?;
    let created = segment.created();

    let bus = EventBus::new();
    let narration = tokio::spawn(output::narrate(bus.subscribe()));

    if created {
        bus.publish(Event::FlagInitialized {
            role: args.init_turn,
        });
    }

    // Release on every exit path: ctrl-c flips the shutdown signal, the
    // runner drains, and the creator removes the segment below.
    let (shutdown_tx, shutdown_rx) = shutdown_pair();
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.send(true);
    })
    .context("failed to install signal handler")?;

    let runner = ParticipantRunner::new(
        config,
        ShmTurnFlag::new(segment),
        SystemClock,
        bus.clone(),
        shutdown_rx,
    );
    let machine = runner.run().await?;

    drop(bus);
    let _ = narration.await;

    if created {
        ShmSegment::remove(&path)
            .with_context(|| format!("failed to remove segment {}", path.display()))?;
        tracing::info!(path = %path.display(), "segment removed");
    }

    tracing::info!(cycles = machine.completed_cycles(), "run complete");
    Ok(())
}
