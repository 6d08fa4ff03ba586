//! profile-charts: turns progress records into renderer-agnostic chart scenes.
//!
//! Data flows one way: records are transformed into points or categories
//! (`core`), mapped through scales into a [`render::Scene`] (`api`), and a
//! composed line chart can then drive a pointer-following tooltip
//! (`interaction`). Fetching, persisting and drawing are left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
