// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shared turn flag: the single coordination primitive of the protocol

use crate::turn::TurnRole;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error)]
pub enum FlagError {
    /// The shared segment could not be created or sized
    #[error("failed to allocate shared segment {path}: {source}")]
    Allocation {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The segment exists but could not be mapped
    #[error("failed to attach shared segment {path}: {source}")]
    Attachment {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The flag byte decodes to neither participant
    #[error("turn flag holds invalid byte {0:#04x}")]
    Corrupt(u8),
}

/// Backend holding the shared turn flag
///
/// `read` and `write` are non-blocking primitives with no lock of their own;
/// the turn-taking protocol is the substitute for a lock. `changed` bounds
/// one wait iteration: backends with a wake primitive return as soon as the
/// flag moves, backends without one sleep the full interval (a poll).
#[async_trait]
pub trait TurnFlag: Send + Sync {
    /// Non-blocking read of the current turn
    fn read(&self) -> Result<TurnRole, FlagError>;

    /// Non-blocking hand-off write
    fn write(&self, role: TurnRole) -> Result<(), FlagError>;

    /// Wait until the flag may have changed, for at most `max_wait`
    async fn changed(&self, max_wait: Duration) -> Result<(), FlagError>;
}

/// In-process turn flag over a watch channel
///
/// Used for the two-threads-in-one-process variant and in tests. Waiters
/// wake on the hand-off write instead of burning a full poll interval.
#[derive(Clone)]
pub struct LocalTurnFlag {
    tx: Arc<watch::Sender<TurnRole>>,
}

impl LocalTurnFlag {
    pub fn new(initial: TurnRole) -> Self {
        Self {
            tx: Arc::new(watch::Sender::new(initial)),
        }
    }
}

#[async_trait]
impl TurnFlag for LocalTurnFlag {
    fn read(&self) -> Result<TurnRole, FlagError> {
        Ok(*self.tx.borrow())
    }

    fn write(&self, role: TurnRole) -> Result<(), FlagError> {
        self.tx.send_replace(role);
        Ok(())
    }

    async fn changed(&self, max_wait: Duration) -> Result<(), FlagError> {
        let mut rx = self.tx.subscribe();
        // A write landing between read and subscribe is caught by the next
        // poll at the latest; the wait stays bounded either way.
        let _ = tokio::time::timeout(max_wait, rx.changed()).await;
        Ok(())
    }
}

#[cfg(test)]
#[path = "flag_tests.rs"]
mod tests;
