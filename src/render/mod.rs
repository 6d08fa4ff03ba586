mod null_renderer;
mod primitives;
mod scene;
mod svg_renderer;

pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, Color, PaintStyle, PathCommand, PathPrimitive, Primitive, RectPrimitive,
    TextHAlign, TextPrimitive, point_on_circle,
};
pub use scene::{Scene, SceneKind};
pub use svg_renderer::{SvgRenderStats, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully composed, deterministic `Scene` so drawing code
/// stays isolated from aggregation and interaction logic.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()>;
}
