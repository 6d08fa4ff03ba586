use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Drawing surface size in display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Plot insets measured from each viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Checks that margins are finite, non-negative and leave a drawable area.
    pub fn validate_for(self, viewport: Viewport) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        if self.left + self.right >= f64::from(viewport.width)
            || self.top + self.bottom >= f64::from(viewport.height)
        {
            return Err(ChartError::InvalidConfig(
                "margins must leave a non-empty plot area".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Position in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One sample of a chronologically ordered series.
///
/// `index` is the position after sorting, `value` the (usually cumulative)
/// quantity and `label` a pre-formatted display string for the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub index: usize,
    pub value: f64,
    pub label: String,
}

impl Point {
    #[must_use]
    pub fn new(index: usize, value: f64, label: impl Into<String>) -> Self {
        Self {
            index,
            value,
            label: label.into(),
        }
    }
}

/// Aggregated total for one derived category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub total: f64,
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>, total: f64) -> Self {
        Self {
            name: name.into(),
            total,
        }
    }
}
