use serde::{Deserialize, Serialize};

use crate::core::types::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};

/// Linear map from a non-degenerate domain to a pixel range.
///
/// The pixel range may be inverted (`range_start > range_end`), which is how
/// value axes grow upwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of [`Self::domain_to_pixel`]; a zero-width range maps to the domain start.
    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Drawable rectangle left after applying margins to a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn new(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        let margins = margins.validate_for(viewport)?;
        Ok(Self {
            left: margins.left,
            right: f64::from(viewport.width) - margins.right,
            top: margins.top,
            bottom: f64::from(viewport.height) - margins.bottom,
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Maps series positions `0..=max_index` onto the horizontal plot extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexScale {
    max_index: usize,
    pixel_start: f64,
    linear: Option<LinearScale>,
}

impl IndexScale {
    /// Builds the scale for `point_count` samples across `[area.left, area.right]`.
    pub fn for_plot(point_count: usize, area: PlotArea) -> ChartResult<Self> {
        Self::new(point_count.saturating_sub(1), area.left, area.right)
    }

    pub fn new(max_index: usize, pixel_start: f64, pixel_end: f64) -> ChartResult<Self> {
        let linear = if max_index == 0 {
            if !pixel_start.is_finite() {
                return Err(ChartError::InvalidData(
                    "scale range must be finite".to_owned(),
                ));
            }
            None
        } else {
            Some(LinearScale::new(
                0.0,
                max_index as f64,
                pixel_start,
                pixel_end,
            )?)
        };

        Ok(Self {
            max_index,
            pixel_start,
            linear,
        })
    }

    #[must_use]
    pub fn max_index(self) -> usize {
        self.max_index
    }

    /// A single-sample series maps to the start of the range.
    #[must_use]
    pub fn index_to_pixel(self, index: usize) -> f64 {
        match self.linear {
            Some(linear) => linear.domain_to_pixel(index as f64),
            None => self.pixel_start,
        }
    }
}

/// Tuning for fitting a value axis to data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScaleTuning {
    /// Fraction of the data span added below the minimum and above the maximum.
    pub padding_ratio: f64,
    /// Lower bound for the padded domain, for quantities known to be non-negative.
    ///
    /// Only applied while every value sits at or above it.
    pub floor: Option<f64>,
    /// Half-width of the domain used when every value is equal.
    pub flat_half_span: f64,
}

impl Default for ValueScaleTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.05,
            floor: Some(0.0),
            flat_half_span: 1.0,
        }
    }
}

impl ValueScaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(ChartError::InvalidConfig(
                "value padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.flat_half_span.is_finite() || self.flat_half_span <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "flat half span must be finite and > 0".to_owned(),
            ));
        }
        if self.floor.is_some_and(|floor| !floor.is_finite()) {
            return Err(ChartError::InvalidConfig(
                "value floor must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Vertical value axis: larger values map to smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    data_min: f64,
    data_max: f64,
    linear: LinearScale,
}

impl ValueScale {
    /// Fits the padded domain of `values` onto `[area.bottom, area.top]`.
    pub fn for_plot(
        values: impl IntoIterator<Item = f64>,
        tuning: ValueScaleTuning,
        area: PlotArea,
    ) -> ChartResult<Self> {
        Self::from_values(values, tuning, area.bottom, area.top)
    }

    /// Fits the padded domain of `values` onto `[pixel_low, pixel_high]`.
    ///
    /// Non-finite values are ignored. An empty or flat input uses
    /// `flat_half_span` around its value so the mapping stays defined, and
    /// the floor is skipped when any value lies below it.
    pub fn from_values(
        values: impl IntoIterator<Item = f64>,
        tuning: ValueScaleTuning,
        pixel_low: f64,
        pixel_high: f64,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }
        if min > max {
            min = 0.0;
            max = 0.0;
        }

        let (mut display_min, display_max) = if max > min {
            let padding = (max - min) * tuning.padding_ratio;
            (min - padding, max + padding)
        } else {
            (min - tuning.flat_half_span, max + tuning.flat_half_span)
        };
        // A floor above the data would push points out of the plot.
        if let Some(floor) = tuning.floor.filter(|floor| *floor <= min) {
            display_min = display_min.max(floor);
        }

        Ok(Self {
            data_min: min,
            data_max: max,
            linear: LinearScale::new(display_min, display_max, pixel_low, pixel_high)?,
        })
    }

    #[must_use]
    pub fn data_range(self) -> (f64, f64) {
        (self.data_min, self.data_max)
    }

    #[must_use]
    pub fn display_range(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.data_min == self.data_max
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        self.linear.domain_to_pixel(value)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        self.linear.pixel_to_domain(pixel)
    }
}
