use crate::error::ChartResult;
use crate::render::{Renderer, Scene};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates scene content so tests catch invalid geometry without
/// a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub rendered_scenes: usize,
    pub last_primitive_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.rendered_scenes += 1;
        self.last_primitive_count = scene.primitives.len();
        self.last_text_count = scene.texts().count();
        Ok(())
    }
}
