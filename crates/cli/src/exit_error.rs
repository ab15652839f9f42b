// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Carries a specific process exit code through an `anyhow::Result` chain
//! without reaching for `std::process::exit` deep in business logic.

use std::fmt;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
}

impl ExitError {
    pub fn new(code: i32) -> Self {
        Self { code }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exiting with code {}", self.code)
    }
}

impl std::error::Error for ExitError {}
