// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! turnlock - strict-alternation turn-taking over a shared memory segment

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{clean, demo, run};

#[derive(Parser)]
#[command(
    name = "turnlock",
    version,
    about = "Two-party mutual exclusion by strict alternation over a shared turn flag"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one participant against a shared-memory segment
    Run(run::RunArgs),
    /// Run both participants in one process over an in-memory flag
    Demo(demo::DemoArgs),
    /// Remove a leftover segment file
    Clean(clean::CleanArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run::run(args).await,
        Commands::Demo(args) => demo::demo(args).await,
        Commands::Clean(args) => clean::clean(&args),
    }
}
