//! chartlet: a widget charting engine for dashboard UIs.
//!
//! This crate provides deterministic doughnut, bar and line chart geometry
//! behind a strict projection/rendering split so backends and tests consume
//! the exact same layout output.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
