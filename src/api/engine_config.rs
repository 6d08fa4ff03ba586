use serde::{Deserialize, Serialize};

use crate::core::category::{default_exclude_tokens, default_top_n};
use crate::core::format::is_valid_label_format;
use crate::core::{AggregationConfig, ValueScaleTuning};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipConfig;

use super::{AuditGaugeLayout, BarChartLayout, LineChartLayout, ProportionChartLayout};

/// Public engine configuration.
///
/// Every field has a serde default, so hosts can persist only the options
/// they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Categories whose name contains one of these (case-insensitive) are dropped.
    #[serde(default = "default_exclude_tokens")]
    pub exclude_tokens: Vec<String>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Share of the value span added above and below the line chart data.
    #[serde(default = "default_y_padding_ratio")]
    pub y_padding_ratio: f64,
    /// Audit ratio at which the gauge is full.
    #[serde(default = "default_audit_scale_cap")]
    pub audit_scale_cap: f64,
    /// strftime pattern for point and result date labels.
    #[serde(default = "default_date_label_format")]
    pub date_label_format: String,
    #[serde(default)]
    pub line_chart: LineChartLayout,
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub proportion_chart: ProportionChartLayout,
    #[serde(default)]
    pub bar_chart: BarChartLayout,
    #[serde(default)]
    pub audit_gauge: AuditGaugeLayout,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            exclude_tokens: default_exclude_tokens(),
            top_n: default_top_n(),
            y_padding_ratio: default_y_padding_ratio(),
            audit_scale_cap: default_audit_scale_cap(),
            date_label_format: default_date_label_format(),
            line_chart: LineChartLayout::default(),
            tooltip: TooltipConfig::default(),
            proportion_chart: ProportionChartLayout::default(),
            bar_chart: BarChartLayout::default(),
            audit_gauge: AuditGaugeLayout::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_exclude_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    #[must_use]
    pub fn with_y_padding_ratio(mut self, ratio: f64) -> Self {
        self.y_padding_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_audit_scale_cap(mut self, cap: f64) -> Self {
        self.audit_scale_cap = cap;
        self
    }

    #[must_use]
    pub fn with_date_label_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_label_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_line_chart_layout(mut self, layout: LineChartLayout) -> Self {
        self.line_chart = layout;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_bar_chart_layout(mut self, layout: BarChartLayout) -> Self {
        self.bar_chart = layout;
        self
    }

    #[must_use]
    pub fn aggregation(&self) -> AggregationConfig {
        AggregationConfig::new(self.exclude_tokens.clone(), self.top_n)
    }

    /// Value-axis tuning for cumulative series, which never go below zero.
    #[must_use]
    pub fn value_tuning(&self) -> ValueScaleTuning {
        ValueScaleTuning {
            padding_ratio: self.y_padding_ratio,
            ..ValueScaleTuning::default()
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.aggregation().validate()?;
        self.value_tuning().validate()?;
        if !self.audit_scale_cap.is_finite() || self.audit_scale_cap <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "audit scale cap must be finite and > 0".to_owned(),
            ));
        }
        if !is_valid_label_format(&self.date_label_format) {
            return Err(ChartError::InvalidConfig(format!(
                "invalid date label format `{}`",
                self.date_label_format
            )));
        }
        let line = self.line_chart.viewport.validate()?;
        self.line_chart.margins.validate_for(line)?;
        self.proportion_chart.viewport.validate()?;
        self.audit_gauge.viewport.validate()?;
        self.bar_chart.validate()?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn default_y_padding_ratio() -> f64 {
    0.05
}

fn default_audit_scale_cap() -> f64 {
    2.0
}

fn default_date_label_format() -> String {
    "%Y-%m-%d %H:%M".to_owned()
}
