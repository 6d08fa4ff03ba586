use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::format::{format_amount, truncate_chars};
use crate::core::{Category, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PaintStyle, RectPrimitive, Scene, SceneKind, TextHAlign, TextPrimitive};

const BAR_COLOR: Color = Color::rgb8(0x9b, 0x6b, 0xff);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartLayout {
    pub width: u32,
    pub bar_height: f64,
    pub gap: f64,
    pub padding: f64,
    /// Width of the name column left of the bars.
    pub label_width: f64,
    pub label_char_budget: usize,
    pub font_size_px: f64,
    pub empty_message: String,
}

impl Default for BarChartLayout {
    fn default() -> Self {
        Self {
            width: 850,
            bar_height: 24.0,
            gap: 5.0,
            padding: 10.0,
            label_width: 180.0,
            label_char_budget: 25,
            font_size_px: 11.0,
            empty_message: "No project data.".to_owned(),
        }
    }
}

impl BarChartLayout {
    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("bar_height", self.bar_height),
            ("gap", self.gap),
            ("padding", self.padding),
            ("label_width", self.label_width),
            ("font_size_px", self.font_size_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "bar chart `{field}` must be finite and >= 0"
                )));
            }
        }
        if self.bar_height == 0.0 || self.font_size_px == 0.0 {
            return Err(ChartError::InvalidConfig(
                "bar height and font size must be > 0".to_owned(),
            ));
        }
        if self.available_width() <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "bar chart width leaves no room for bars".to_owned(),
            ));
        }
        Ok(())
    }

    /// Horizontal room for the longest bar.
    #[must_use]
    pub fn available_width(&self) -> f64 {
        f64::from(self.width) - self.label_width - self.padding * 2.0
    }

    #[must_use]
    pub fn row_y(&self, row: usize) -> f64 {
        self.padding + row as f64 * (self.bar_height + self.gap)
    }

    /// Scene height for `rows` bars; grows linearly with the row count.
    #[must_use]
    pub fn height_for(&self, rows: usize) -> u32 {
        let height = self.padding * 2.0 + rows as f64 * (self.bar_height + self.gap);
        (height.ceil() as u32).max(1)
    }
}

/// Bar lengths proportional to each total, the largest total filling
/// `available_width`. Non-positive totals get zero length.
#[must_use]
pub fn bar_lengths(categories: &[Category], available_width: f64) -> Vec<f64> {
    let max_total = categories
        .iter()
        .map(|category| category.total)
        .fold(f64::NEG_INFINITY, f64::max);
    if max_total <= 0.0 {
        return vec![0.0; categories.len()];
    }

    categories
        .iter()
        .map(|category| (category.total / max_total * available_width).max(0.0))
        .collect()
}

/// Composes the ranked horizontal bar chart, one row per category in input
/// order. Each row is a bar, its right-aligned name and its value.
pub fn compose_bar_chart(categories: &[Category], layout: &BarChartLayout) -> ChartResult<Scene> {
    layout.validate()?;
    if categories.is_empty() {
        debug!("bar chart has no categories, composing placeholder");
        let viewport = Viewport::new(layout.width, layout.height_for(1));
        return Ok(Scene::placeholder(
            viewport,
            &layout.empty_message,
            Color::WHITE,
        ));
    }

    let lengths = bar_lengths(categories, layout.available_width());
    if lengths.iter().all(|length| *length == 0.0) {
        warn!(
            category_count = categories.len(),
            "all category totals are <= 0"
        );
    }

    let viewport = Viewport::new(layout.width, layout.height_for(categories.len()));
    let mut scene = Scene::new(SceneKind::BarChart, viewport);
    let text_offset = layout.bar_height / 2.0 + 5.0;
    for (row, (category, length)) in categories.iter().zip(lengths).enumerate() {
        let y = layout.row_y(row);
        scene.push(RectPrimitive::new(
            layout.label_width,
            y,
            length,
            layout.bar_height,
            PaintStyle::filled(BAR_COLOR),
        ));
        let name = truncate_chars(&category.name, layout.label_char_budget);
        if !name.is_empty() {
            scene.push(TextPrimitive::new(
                name,
                layout.label_width - 5.0,
                y + text_offset,
                layout.font_size_px,
                Color::WHITE,
                TextHAlign::Right,
            ));
        }
        scene.push(TextPrimitive::new(
            format_amount(category.total),
            layout.label_width + length + 5.0,
            y + text_offset,
            layout.font_size_px,
            Color::WHITE,
            TextHAlign::Left,
        ));
    }

    debug!(category_count = categories.len(), "composed bar chart");
    Ok(scene)
}
