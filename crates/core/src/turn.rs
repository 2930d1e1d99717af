// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Participant roles and identities for the turn-taking protocol

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two values the shared turn flag can designate.
///
/// The flag byte encoding (`'0'` for A, `'1'` for B) is the wire format of
/// the shared segment; a segment written by one participant is readable by
/// any other build of the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    A,
    B,
}

impl TurnRole {
    /// The hand-off target: the other participant.
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Byte stored in the shared segment for this role.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::A => b'0',
            Self::B => b'1',
        }
    }

    /// Decode a segment byte. Returns `None` for anything but `'0'`/`'1'`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'0' => Some(Self::A),
            b'1' => Some(Self::B),
            _ => None,
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "a"),
            Self::B => write!(f, "b"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "A" | "0" => Ok(Self::A),
            "b" | "B" | "1" => Ok(Self::B),
            other => Err(format!("invalid turn role `{other}` (expected `a` or `b`)")),
        }
    }
}

/// Label used in narration output.
///
/// Carries no protocol semantics; which turn value a participant owns comes
/// from its configured [`TurnRole`], never from this id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Default label: the OS process id.
    pub fn from_pid() -> Self {
        Self(std::process::id().to_string())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "turn_tests.rs"]
mod tests;
