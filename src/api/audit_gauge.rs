use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Viewport;
use crate::core::format::format_ratio;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PaintStyle, RectPrimitive, Scene, SceneKind, TextHAlign, TextPrimitive};

const TRACK_COLOR: Color = Color::WHITE.with_alpha(0.15);
const FILL_COLOR: Color = Color::rgb8(0xe0, 0x9b, 0xff);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuditGaugeLayout {
    pub viewport: Viewport,
    pub track_width: f64,
    pub track_height: f64,
    pub font_size_px: f64,
}

impl Default for AuditGaugeLayout {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(240, 32),
            track_width: 180.0,
            track_height: 12.0,
            font_size_px: 14.0,
        }
    }
}

/// Fill percentage of the gauge, saturating at `cap`.
///
/// Non-finite or negative ratios read as empty.
#[must_use]
pub fn audit_fill_percent(ratio: f64, cap: f64) -> u32 {
    if !ratio.is_finite() || !cap.is_finite() || cap <= 0.0 {
        return 0;
    }
    let scaled = (ratio / cap).clamp(0.0, 1.0);
    (scaled * 100.0).round() as u32
}

/// Composes the audit ratio gauge: a track, its fill and the ratio value.
pub fn compose_audit_gauge(ratio: f64, cap: f64, layout: &AuditGaugeLayout) -> ChartResult<Scene> {
    let viewport = layout.viewport.validate()?;
    if !cap.is_finite() || cap <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "audit scale cap must be finite and > 0".to_owned(),
        ));
    }
    if !layout.track_width.is_finite()
        || !layout.track_height.is_finite()
        || layout.track_width <= 0.0
        || layout.track_height <= 0.0
    {
        return Err(ChartError::InvalidConfig(
            "audit track size must be finite and > 0".to_owned(),
        ));
    }

    let percent = audit_fill_percent(ratio, cap);
    let ratio = if ratio.is_finite() { ratio } else { 0.0 };
    let track_y = (f64::from(viewport.height) - layout.track_height) / 2.0;
    let scene = Scene::new(SceneKind::AuditGauge, viewport)
        .with(RectPrimitive::new(
            0.0,
            track_y,
            layout.track_width,
            layout.track_height,
            PaintStyle::filled(TRACK_COLOR),
        ))
        .with(RectPrimitive::new(
            0.0,
            track_y,
            layout.track_width * f64::from(percent) / 100.0,
            layout.track_height,
            PaintStyle::filled(FILL_COLOR),
        ))
        .with(
            TextPrimitive::new(
                format_ratio(ratio),
                layout.track_width + 10.0,
                track_y + layout.track_height,
                layout.font_size_px,
                Color::WHITE,
                TextHAlign::Left,
            )
            .bold(),
        );

    debug!(ratio, percent, "composed audit gauge");
    Ok(scene)
}
