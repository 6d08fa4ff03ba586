use crate::core::scale::{IndexScale, PlotArea, ValueScale, ValueScaleTuning};
use crate::core::types::{Margins, Point, Position, Viewport};
use crate::error::ChartResult;

/// Points of a line chart together with the scales that placed them.
///
/// This is what pointer interaction reads after composition; it owns copies
/// of the points so it can outlive the input records.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    viewport: Viewport,
    area: PlotArea,
    points: Vec<Point>,
    index_scale: IndexScale,
    value_scale: ValueScale,
}

impl LinePlot {
    pub fn new(
        points: Vec<Point>,
        viewport: Viewport,
        margins: Margins,
        tuning: ValueScaleTuning,
    ) -> ChartResult<Self> {
        let area = PlotArea::new(viewport, margins)?;
        let index_scale = IndexScale::for_plot(points.len(), area)?;
        let value_scale = ValueScale::for_plot(points.iter().map(|p| p.value), tuning, area)?;
        Ok(Self {
            viewport,
            area,
            points,
            index_scale,
            value_scale,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn area(&self) -> PlotArea {
        self.area
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn index_scale(&self) -> IndexScale {
        self.index_scale
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.value_scale
    }

    #[must_use]
    pub fn position_of(&self, point: &Point) -> Position {
        Position::new(
            self.index_scale.index_to_pixel(point.index),
            self.value_scale.value_to_pixel(point.value),
        )
    }

    /// Scene positions of every point, in series order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.points.iter().map(|point| self.position_of(point))
    }
}
