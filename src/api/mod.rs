//! Chart composers, configuration and the engine facade.

mod audit_gauge;
mod bar_chart;
mod engine;
mod engine_config;
mod json_contract;
mod line_chart;
mod profile_summary;
mod proportion_chart;

pub use audit_gauge::{AuditGaugeLayout, audit_fill_percent, compose_audit_gauge};
pub use bar_chart::{BarChartLayout, bar_lengths, compose_bar_chart};
pub use engine::{ChartEngine, DashboardInput, DashboardScenes};
pub use engine_config::ChartConfig;
pub use json_contract::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
pub use line_chart::{LineChart, LineChartLayout, compose_line_chart};
pub use profile_summary::ProfileSummary;
pub use proportion_chart::{
    ProportionChartLayout, ProportionGeometry, compose_proportion_chart, proportion_geometry,
};
