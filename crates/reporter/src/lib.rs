// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! litani-reporter: the background snapshot loop spawned by `run-build`
//! (spec.md §4.6).

pub mod error;
#[path = "loop_.rs"]
pub mod reporter_loop;
pub mod renderer;

pub use error::ReporterError;
pub use renderer::{NullRenderer, Renderer, RendererError};
pub use reporter_loop::{run_reporter_loop, ReporterConfig, StopSignal};
