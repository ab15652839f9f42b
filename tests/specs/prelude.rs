//! Test helpers for litani's behavioral specifications.
//!
//! Black-box: each test spawns the real `litani` binary and inspects the
//! run directory it produces. Every test gets its own `TMPDIR` so the
//! `<tmp>/litani` cache pointer never collides across parallel tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated sandbox: its own `TMPDIR`, so `litani`'s platform
/// temp-dir-rooted cache pointer doesn't leak across tests.
pub struct Sandbox {
    tmpdir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            tmpdir: TempDir::new().expect("create sandbox tmpdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.tmpdir.path()
    }

    pub fn litani_root(&self) -> PathBuf {
        self.tmpdir.path().join("litani")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("litani").expect("find litani binary");
        cmd.env("TMPDIR", self.tmpdir.path());
        cmd
    }

    /// Run `litani <args>` and assert it succeeds; returns stdout.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().expect("run litani");
        assert!(
            output.status.success(),
            "expected `litani {}` to succeed, got {:?}\nstdout: {}\nstderr: {}",
            args.join(" "),
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Run `litani <args>` without asserting the exit code.
    pub fn run_raw(&self, args: &[&str]) -> std::process::Output {
        self.cmd().args(args).output().expect("run litani")
    }

    pub fn active_run_dir(&self) -> PathBuf {
        std::fs::canonicalize(self.litani_root().join("latest")).expect("resolve latest pointer")
    }
}

pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> T {
    let bytes = std::fs::read(path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()));
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("parsing {}: {e}", path.display()))
}
