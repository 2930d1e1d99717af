// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for the behavioral specs

use std::path::PathBuf;
use std::time::Duration;

/// Timing flags that keep a spec run under a second
pub const QUICK_TIMING: &[&str] = &[
    "--critical-steps",
    "2",
    "--step-delay",
    "10ms",
    "--handoff-delay",
    "10ms",
    "--poll-interval",
    "10ms",
    "--non-critical-delay",
    "10ms",
];

/// Scratch directory plus a command builder bound to it
pub struct Scratch {
    dir: tempfile::TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Scratch {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn segment(&self) -> PathBuf {
        self.dir.path().join("segment")
    }

    pub fn turnlock(&self) -> Cmd {
        let mut inner = assert_cmd::Command::cargo_bin("turnlock").unwrap();
        inner.timeout(Duration::from_secs(30));
        Cmd { inner }
    }
}

pub struct Cmd {
    inner: assert_cmd::Command,
}

impl Cmd {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.inner.args(args);
        self
    }

    pub fn passes(mut self) -> Checked {
        let output = self.inner.assert().success().get_output().clone();
        Checked { output }
    }

    pub fn fails(mut self) -> Checked {
        let output = self.inner.assert().failure().get_output().clone();
        Checked { output }
    }
}

pub struct Checked {
    output: std::process::Output,
}

impl Checked {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout().contains(needle),
            "stdout missing {needle:?}:\n{}",
            self.stdout()
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr().contains(needle),
            "stderr missing {needle:?}:\n{}",
            self.stderr()
        );
        self
    }

    pub fn code(self, want: i32) -> Self {
        assert_eq!(self.output.status.code(), Some(want));
        self
    }
}
