use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, Color, PathPrimitive, Primitive, RectPrimitive, TextHAlign, TextPrimitive,
};

/// Which composer produced a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneKind {
    LineChart,
    ProportionChart,
    BarChart,
    AuditGauge,
    /// Stand-in for a chart that had nothing to draw.
    Placeholder,
}

/// Backend-agnostic drawing for one chart.
///
/// A scene is a plain value: it owns its primitives and keeps no reference
/// to the records it was composed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub kind: SceneKind,
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    #[must_use]
    pub fn new(kind: SceneKind, viewport: Viewport) -> Self {
        Self {
            kind,
            viewport,
            primitives: Vec::new(),
        }
    }

    /// Scene holding a single centered message.
    #[must_use]
    pub fn placeholder(viewport: Viewport, message: &str, color: Color) -> Self {
        let x = f64::from(viewport.width) / 2.0;
        let y = f64::from(viewport.height) / 2.0;
        Self::new(SceneKind::Placeholder, viewport).with(TextPrimitive::new(
            message,
            x,
            y,
            14.0,
            color,
            TextHAlign::Center,
        ))
    }

    #[must_use]
    pub fn with(mut self, primitive: impl Into<Primitive>) -> Self {
        self.push(primitive);
        self
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.kind == SceneKind::Placeholder
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }
}
