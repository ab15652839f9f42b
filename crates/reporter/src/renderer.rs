// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The external renderer seam. Actual HTML/JSON report rendering is out of
//! scope (spec.md §1); this trait exists so the loop has somewhere to call.

use async_trait::async_trait;
use litani_core::RunSnapshot;

/// Consumes a freshly computed [`RunSnapshot`] on every reporter tick.
#[async_trait]
pub trait Renderer: Send + Sync + 'static {
    async fn render(&self, snapshot: &RunSnapshot) -> Result<(), RendererError>;
}

/// Errors from a renderer implementation.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("render failed: {0}")]
    Failed(String),
}

/// Renderer that discards every snapshot. The default when no real
/// renderer has been wired in.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl NullRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Renderer for NullRenderer {
    async fn render(&self, _snapshot: &RunSnapshot) -> Result<(), RendererError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
