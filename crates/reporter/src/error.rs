// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors raised by the Reporter Loop (spec.md §4.6).
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error(transparent)]
    Store(#[from] litani_store::StoreError),
    #[error(transparent)]
    WriteJson(#[from] litani_core::WriteJsonError),
    #[error("renderer failed: {0}")]
    Render(String),
}
