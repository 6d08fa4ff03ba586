use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{LinePlot, Margins, Point, ValueScaleTuning, Viewport};
use crate::error::ChartResult;
use crate::interaction::TooltipConfig;
use crate::render::{Color, PaintStyle, PathPrimitive, RectPrimitive, Scene, SceneKind};

const LINE_COLOR: Color = Color::rgb8(0xd5, 0x52, 0xf4);
// Painted but invisible, so hit-testing backends treat it as a target.
const CAPTURE_FILL: Color = Color::WHITE.with_alpha(0.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    pub stroke_width: f64,
    pub empty_message: String,
}

impl Default for LineChartLayout {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(900, 280),
            margins: Margins::new(20.0, 5.0, 20.0, 5.0),
            stroke_width: 2.0,
            empty_message: "No XP yet.".to_owned(),
        }
    }
}

/// Composed line chart.
///
/// `plot` is `None` for the empty placeholder; otherwise it carries what a
/// [`crate::interaction::HoverController`] needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub scene: Scene,
    pub plot: Option<LinePlot>,
}

/// Composes the cumulative line chart.
///
/// Paint order: the series path, a zero-alpha full-viewport rect that
/// captures pointer events, then the hidden tooltip label.
pub fn compose_line_chart(
    points: &[Point],
    layout: &LineChartLayout,
    tuning: ValueScaleTuning,
    tooltip: &TooltipConfig,
) -> ChartResult<LineChart> {
    let viewport = layout.viewport.validate()?;
    if points.is_empty() {
        debug!("line chart has no points, composing placeholder");
        return Ok(LineChart {
            scene: Scene::placeholder(viewport, &layout.empty_message, Color::WHITE),
            plot: None,
        });
    }

    let plot = LinePlot::new(points.to_vec(), viewport, layout.margins, tuning)?;
    let line = PathPrimitive::polyline(
        plot.positions(),
        PaintStyle::stroked(LINE_COLOR, layout.stroke_width),
    );
    let capture = RectPrimitive::new(
        0.0,
        0.0,
        f64::from(viewport.width),
        f64::from(viewport.height),
        PaintStyle::filled(CAPTURE_FILL),
    );

    let scene = Scene::new(SceneKind::LineChart, viewport)
        .with(line)
        .with(capture)
        .with(tooltip.text_primitive("", None));

    debug!(
        point_count = points.len(),
        flat = plot.value_scale().is_flat(),
        "composed line chart"
    );
    Ok(LineChart {
        scene,
        plot: Some(plot),
    })
}
