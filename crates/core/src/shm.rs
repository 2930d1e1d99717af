// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed shared-memory segment holding the turn flag
//!
//! A small fixed-size mapping identified by a filesystem path; only the
//! first byte is used. Created with create-if-absent semantics: whichever
//! participant starts first creates and initializes the segment, the other
//! attaches to it. Dropping a segment unmaps it; the creating side removes
//! the backing file on graceful shutdown.

// The raw byte view of the mapping is the one place the crate needs unsafe.
#![allow(unsafe_code)]

use crate::flag::{FlagError, TurnFlag};
use crate::turn::TurnRole;
use async_trait::async_trait;
use memmap2::MmapRaw;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

/// Segment size in bytes. Only byte 0 carries the flag; the rest is slack.
pub const SEGMENT_SIZE: u64 = 10;

/// Default segment file name. The `75` is the protocol's historical
/// shared-memory key.
pub const DEFAULT_SEGMENT_NAME: &str = "turnlock-75";

/// A mapped shared-memory segment
#[derive(Debug)]
pub struct ShmSegment {
    path: PathBuf,
    map: MmapRaw,
    created: bool,
}

impl ShmSegment {
    /// Attach to the segment at `path`, creating and initializing it to
    /// `init` if absent.
    pub fn create_or_attach(path: &Path, init: TurnRole) -> Result<Self, FlagError> {
        let existed = path.exists();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|source| {
                if existed {
                    FlagError::Attachment {
                        path: path.to_path_buf(),
                        source,
                    }
                } else {
                    FlagError::Allocation {
                        path: path.to_path_buf(),
                        source,
                    }
                }
            })?;

        if !existed {
            file.set_len(SEGMENT_SIZE)
                .map_err(|source| FlagError::Allocation {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        let segment = Self::map(path, &file, !existed)?;
        if !existed {
            segment.write_byte(init.as_byte());
        }
        Ok(segment)
    }

    /// Attach to an existing segment; fails if it does not exist.
    pub fn attach(path: &Path) -> Result<Self, FlagError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| FlagError::Attachment {
                path: path.to_path_buf(),
                source,
            })?;
        Self::map(path, &file, false)
    }

    fn map(path: &Path, file: &std::fs::File, created: bool) -> Result<Self, FlagError> {
        let len = file
            .metadata()
            .map_err(|source| FlagError::Attachment {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        if len < SEGMENT_SIZE {
            return Err(FlagError::Attachment {
                path: path.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("segment is {len} bytes, expected at least {SEGMENT_SIZE}"),
                ),
            });
        }

        let map = MmapRaw::map_raw(file).map_err(|source| FlagError::Attachment {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            map,
            created,
        })
    }

    /// Whether this side created (and therefore owns cleanup of) the segment
    pub fn created(&self) -> bool {
        self.created
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomic view of the flag byte.
    ///
    /// The mapping lives as long as `self`, so the reference never outlives
    /// the memory, and all access goes through this single atomic.
    fn flag_cell(&self) -> &AtomicU8 {
        unsafe { &*self.map.as_mut_ptr().cast::<AtomicU8>() }
    }

    pub fn read_byte(&self) -> u8 {
        self.flag_cell().load(Ordering::SeqCst)
    }

    pub fn write_byte(&self, byte: u8) {
        self.flag_cell().store(byte, Ordering::SeqCst);
    }

    /// Remove a segment's backing file
    pub fn remove(path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// Cross-process turn flag over a [`ShmSegment`]
///
/// Raw shared memory carries no wake primitive, so `changed` is a timed
/// sleep and waiting is genuine polling, one narrated iteration per
/// interval.
pub struct ShmTurnFlag {
    segment: ShmSegment,
}

impl ShmTurnFlag {
    pub fn new(segment: ShmSegment) -> Self {
        Self { segment }
    }

    pub fn segment(&self) -> &ShmSegment {
        &self.segment
    }
}

#[async_trait]
impl TurnFlag for ShmTurnFlag {
    fn read(&self) -> Result<TurnRole, FlagError> {
        let byte = self.segment.read_byte();
        TurnRole::from_byte(byte).ok_or(FlagError::Corrupt(byte))
    }

    fn write(&self, role: TurnRole) -> Result<(), FlagError> {
        self.segment.write_byte(role.as_byte());
        Ok(())
    }

    async fn changed(&self, max_wait: Duration) -> Result<(), FlagError> {
        tokio::time::sleep(max_wait).await;
        Ok(())
    }
}

#[cfg(test)]
#[path = "shm_tests.rs"]
mod tests;
