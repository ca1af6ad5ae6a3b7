//! Shared application service layer for the engine health dashboard.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing configuration, engine/view selection, slice queries and the
//! pure render function that turns a selection into a view description.

pub mod config;
pub mod error;
pub mod export;
pub mod query;
pub mod render;
pub mod selection;
pub mod status;

// Re-export key types for convenience
pub use config::{DashboardConfig, RenderSettings};
pub use error::{AppError, AppResult};
pub use export::{Variable, export_series};
pub use query::{anomaly_slice, anomaly_threshold, prediction_slice, select_engine};
pub use render::{
    Axis, Chart, Metric, Notice, ReferenceLine, Series, SeriesColor, ViewModel, render,
};
pub use selection::{Selection, ViewMode, engine_ids};
pub use status::{Status, StatusLevel, derive_status};
