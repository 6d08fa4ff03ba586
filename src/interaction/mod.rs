use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::format::format_amount;
use crate::core::{LinePlot, PlotArea, Point, Position};
use crate::render::{Color, TextHAlign, TextPrimitive};

/// Placement and text settings for the hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Minimum distance between the tooltip baseline and the plot top.
    pub top_clearance: f64,
    pub font_size_px: f64,
    /// Estimated advance per character, used to clamp the right edge.
    pub char_width_px: f64,
    pub unit: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 10.0,
            offset_y: -10.0,
            top_clearance: 10.0,
            font_size_px: 12.0,
            char_width_px: 7.0,
            unit: "XP".to_owned(),
        }
    }
}

impl TooltipConfig {
    #[must_use]
    pub fn text_for(&self, point: &Point) -> String {
        format!("{} {} - {}", format_amount(point.value), self.unit, point.label)
    }

    #[must_use]
    pub fn estimate_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width_px
    }

    /// Tooltip label primitive; hidden when `position` is `None`.
    #[must_use]
    pub fn text_primitive(&self, text: &str, position: Option<Position>) -> TextPrimitive {
        let anchor = position.unwrap_or(Position::new(0.0, 0.0));
        let primitive = TextPrimitive::new(
            text,
            anchor.x,
            anchor.y,
            self.font_size_px,
            Color::WHITE,
            TextHAlign::Left,
        )
        .bold();
        if position.is_some() {
            primitive
        } else {
            primitive.hidden()
        }
    }
}

/// Transient hover result; cleared when the pointer leaves the chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub active_point: Option<Point>,
    pub tooltip_position: Option<Position>,
    pub tooltip_text: Option<String>,
}

impl HoverState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_point.is_some()
    }
}

/// Index of the point whose x is closest to `pointer_x`.
///
/// Exact ties resolve to the lowest index.
#[must_use]
pub fn nearest_point_index(plot: &LinePlot, pointer_x: f64) -> Option<usize> {
    if !pointer_x.is_finite() {
        return None;
    }

    let index_scale = plot.index_scale();
    let mut best: Option<(OrderedFloat<f64>, usize)> = None;
    for (slot, point) in plot.points().iter().enumerate() {
        let dist = OrderedFloat((index_scale.index_to_pixel(point.index) - pointer_x).abs());
        match best {
            Some((current, _)) if current <= dist => {}
            _ => best = Some((dist, slot)),
        }
    }
    best.map(|(_, slot)| slot)
}

/// Clamps a tooltip anchor into the plot area.
///
/// The right edge never passes `area.right`, the left edge never precedes
/// `area.left` (left wins when the text is wider than the plot) and the
/// baseline never sits above `area.top + top_clearance`.
#[must_use]
pub fn clamp_tooltip(
    anchor: Position,
    text_width: f64,
    area: PlotArea,
    tooltip: &TooltipConfig,
) -> Position {
    let mut x = anchor.x;
    let mut y = anchor.y;
    if x + text_width > area.right {
        x = area.right - text_width;
    }
    if x < area.left {
        x = area.left;
    }
    let min_y = area.top + tooltip.top_clearance;
    if y < min_y {
        y = min_y;
    }
    Position::new(x, y)
}

/// Pointer-driven tooltip state for one composed line chart.
///
/// Pointer coordinates must already be in the chart's local space; undoing
/// host transforms (element scaling, offsets) is the caller's job.
#[derive(Debug, Clone)]
pub struct HoverController {
    plot: LinePlot,
    tooltip: TooltipConfig,
    state: HoverState,
}

impl HoverController {
    #[must_use]
    pub fn new(plot: LinePlot, tooltip: TooltipConfig) -> Self {
        Self {
            plot,
            tooltip,
            state: HoverState::default(),
        }
    }

    #[must_use]
    pub fn plot(&self) -> &LinePlot {
        &self.plot
    }

    #[must_use]
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// Recomputes the hover state for a pointer position.
    ///
    /// Repeated calls with the same position yield the same state.
    pub fn on_pointer_move(&mut self, pointer: Position) -> &HoverState {
        let Some(slot) = nearest_point_index(&self.plot, pointer.x) else {
            self.state = HoverState::default();
            return &self.state;
        };
        let point = self.plot.points()[slot].clone();

        let text = self.tooltip.text_for(&point);
        let anchor = Position::new(
            pointer.x + self.tooltip.offset_x,
            pointer.y + self.tooltip.offset_y,
        );
        let position = clamp_tooltip(
            anchor,
            self.tooltip.estimate_width(&text),
            self.plot.area(),
            &self.tooltip,
        );
        trace!(index = point.index, x = position.x, y = position.y, "hover");

        self.state = HoverState {
            active_point: Some(point),
            tooltip_position: Some(position),
            tooltip_text: Some(text),
        };
        &self.state
    }

    pub fn on_pointer_leave(&mut self) {
        self.state = HoverState::default();
    }

    /// Current tooltip label, ready to replace the hidden one in the scene.
    #[must_use]
    pub fn tooltip_primitive(&self) -> TextPrimitive {
        self.tooltip.text_primitive(
            self.state.tooltip_text.as_deref().unwrap_or_default(),
            self.state.tooltip_position,
        )
    }
}
