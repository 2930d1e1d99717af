// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `turnlock clean` - remove a leftover segment file

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use turnlock_core::ShmSegment;

use super::default_segment_path;

#[derive(Args)]
pub struct CleanArgs {
    /// Segment file path
    #[arg(long)]
    pub segment: Option<PathBuf>,
}

pub fn clean(args: &CleanArgs) -> Result<()> {
    let path = args.segment.clone().unwrap_or_else(default_segment_path);
    if !path.exists() {
        println!("nothing to clean: {}", path.display());
        return Ok(());
    }
    ShmSegment::remove(&path)
        .with_context(|| format!("failed to remove segment {}", path.display()))?;
    println!("removed {}", path.display());
    Ok(())
}
