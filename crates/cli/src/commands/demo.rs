// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `turnlock demo` - both participants in one process
//!
//! The two-threads-in-one-process variant of the demonstration: two runners
//! share an in-memory flag, so waiters wake on the hand-off write instead of
//! polling, and a single stream narrates the alternation.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use turnlock_core::{
    shutdown_pair, Event, EventBus, LocalTurnFlag, ParticipantConfig, ParticipantRunner,
    SystemClock, TurnRole,
};

use super::{parse_role, TimingArgs};
use crate::output;

#[derive(Args)]
pub struct DemoArgs {
    /// Cycles each participant completes before stopping
    #[arg(long, default_value_t = 2)]
    pub cycles: u64,

    /// Turn value that goes first
    #[arg(long, value_parser = parse_role, default_value = "a")]
    pub init_turn: TurnRole,

    #[command(flatten)]
    pub timing: TimingArgs,
}

fn demo_config(args: &DemoArgs, role: TurnRole) -> ParticipantConfig {
    let config = ParticipantConfig::new(role)
        .with_id(format!("participant-{role}"))
        .with_cycles(args.cycles);
    args.timing.apply(config)
}

pub async fn demo(args: DemoArgs) -> Result<()> {
    let flag = LocalTurnFlag::new(args.init_turn);
    let bus = EventBus::new();
    let narration = tokio::spawn(output::narrate(bus.subscribe()));

    bus.publish(Event::FlagInitialized {
        role: args.init_turn,
    });

    let (shutdown_tx, shutdown_rx) = shutdown_pair();
    let ctrlc_tx = shutdown_tx.clone();
    ctrlc::set_handler(move || {
        let _ = ctrlc_tx.send(true);
    })
    .context("failed to install signal handler")?;

    let a = tokio::spawn(
        ParticipantRunner::new(
            demo_config(&args, TurnRole::A),
            flag.clone(),
            SystemClock,
            bus.clone(),
            shutdown_rx.clone(),
        )
        .run(),
    );
    let b = tokio::spawn(
        ParticipantRunner::new(
            demo_config(&args, TurnRole::B),
            flag,
            SystemClock,
            bus.clone(),
            shutdown_rx,
        )
        .run(),
    );

    let (a, b) = tokio::join!(a, b);
    let a = a.map_err(|e| anyhow!("participant a panicked: {e}"))??;
    let b = b.map_err(|e| anyhow!("participant b panicked: {e}"))??;
    drop(shutdown_tx);

    drop(bus);
    let _ = narration.await;

    tracing::info!(
        a_cycles = a.completed_cycles(),
        b_cycles = b.completed_cycles(),
        "demo complete"
    );
    Ok(())
}
