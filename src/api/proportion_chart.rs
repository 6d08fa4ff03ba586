use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Position, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, PaintStyle, PathCommand, PathPrimitive, Scene, SceneKind, TextHAlign,
    TextPrimitive, point_on_circle,
};

const SLICE_COLOR: Color = Color::rgb8(0xe0, 0x9b, 0xff);
const TRACK_FILL: Color = Color::WHITE.with_alpha(0.15);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionChartLayout {
    pub viewport: Viewport,
    pub center: Position,
    pub radius: f64,
    pub caption: String,
}

impl Default for ProportionChartLayout {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(200, 200),
            center: Position::new(100.0, 100.0),
            radius: 80.0,
            caption: "Pass Rate".to_owned(),
        }
    }
}

/// Angles and end point of the pass slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProportionGeometry {
    /// Pass share in `[0, 1]`.
    pub percent: f64,
    pub angle_deg: f64,
    /// Set when the slice spans more than half the circle.
    pub large_arc: bool,
    pub start: Position,
    pub end: Position,
}

impl ProportionGeometry {
    /// Rounded percentage shown in the chart center.
    #[must_use]
    pub fn percent_label(self) -> String {
        format!("{}%", (self.percent * 100.0).round() as i64)
    }
}

/// Slice geometry for `pass` out of `pass + fail`, starting at twelve o'clock
/// and sweeping clockwise. Zero attempts count as a total of one.
#[must_use]
pub fn proportion_geometry(
    pass: usize,
    fail: usize,
    center: Position,
    radius: f64,
) -> ProportionGeometry {
    let total = (pass + fail).max(1);
    let percent = pass as f64 / total as f64;
    let angle_deg = percent * 360.0;
    ProportionGeometry {
        percent,
        angle_deg,
        large_arc: angle_deg > 180.0,
        start: point_on_circle(center, radius, 0.0),
        end: point_on_circle(center, radius, angle_deg),
    }
}

/// Composes the pass/fail proportion chart.
///
/// A 0% share draws no slice and a 100% share draws the slice as a full
/// circle, since an arc whose end equals its start would vanish.
pub fn compose_proportion_chart(
    pass: usize,
    fail: usize,
    layout: &ProportionChartLayout,
) -> ChartResult<Scene> {
    let viewport = layout.viewport.validate()?;
    if !layout.radius.is_finite() || layout.radius <= 0.0 || !layout.center.is_finite() {
        return Err(ChartError::InvalidConfig(
            "proportion chart needs a finite center and a radius > 0".to_owned(),
        ));
    }

    let geometry = proportion_geometry(pass, fail, layout.center, layout.radius);
    let center = layout.center;
    let mut scene = Scene::new(SceneKind::ProportionChart, viewport).with(
        ArcPrimitive::full_circle(
            center,
            layout.radius,
            PaintStyle::filled(TRACK_FILL).with_stroke(Color::WHITE, 2.0),
        ),
    );

    if geometry.angle_deg >= 360.0 {
        scene.push(ArcPrimitive::full_circle(
            center,
            layout.radius,
            PaintStyle::filled(SLICE_COLOR),
        ));
    } else if geometry.angle_deg > 0.0 {
        scene.push(PathPrimitive::new(
            vec![
                PathCommand::MoveTo(geometry.start),
                PathCommand::ArcTo {
                    radius: layout.radius,
                    large_arc: geometry.large_arc,
                    clockwise: true,
                    to: geometry.end,
                },
                PathCommand::LineTo(center),
                PathCommand::Close,
            ],
            PaintStyle::filled(SLICE_COLOR),
        ));
    }

    scene.push(TextPrimitive::new(
        geometry.percent_label(),
        center.x,
        center.y + 5.0,
        22.0,
        Color::WHITE,
        TextHAlign::Center,
    ));
    if !layout.caption.is_empty() {
        scene.push(TextPrimitive::new(
            layout.caption.as_str(),
            center.x,
            center.y + 25.0,
            12.0,
            Color::WHITE,
            TextHAlign::Center,
        ));
    }

    debug!(
        pass,
        fail,
        percent = geometry.percent,
        large_arc = geometry.large_arc,
        "composed proportion chart"
    );
    Ok(scene)
}
