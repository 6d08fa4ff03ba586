use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels.
    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Resolved fill/stroke of a shape. `None` means "do not paint".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl PaintStyle {
    #[must_use]
    pub const fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub const fn stroked(color: Color, stroke_width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, color: Color, stroke_width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = stroke_width;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// One step of a vector path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Position),
    LineTo(Position),
    /// Circular arc from the current point to `to`.
    ArcTo {
        radius: f64,
        large_arc: bool,
        clockwise: bool,
        to: Position,
    },
    Close,
}

impl PathCommand {
    #[must_use]
    pub fn end_point(self) -> Option<Position> {
        match self {
            Self::MoveTo(position) | Self::LineTo(position) => Some(position),
            Self::ArcTo { to, .. } => Some(to),
            Self::Close => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub style: PaintStyle,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(commands: Vec<PathCommand>, style: PaintStyle) -> Self {
        Self { commands, style }
    }

    /// Opens a polyline: move to the first position, line to the rest.
    #[must_use]
    pub fn polyline(positions: impl IntoIterator<Item = Position>, style: PaintStyle) -> Self {
        let commands = positions
            .into_iter()
            .enumerate()
            .map(|(i, position)| {
                if i == 0 {
                    PathCommand::MoveTo(position)
                } else {
                    PathCommand::LineTo(position)
                }
            })
            .collect();
        Self::new(commands, style)
    }

    /// End points of every command, in order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Position> {
        self.commands
            .iter()
            .filter_map(|command| command.end_point())
            .collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !matches!(self.commands.first(), Some(PathCommand::MoveTo(_))) {
            return Err(ChartError::InvalidData(
                "path must start with a move-to command".to_owned(),
            ));
        }
        for command in &self.commands {
            if let PathCommand::ArcTo { radius, .. } = *command {
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "path arc radius must be finite and > 0".to_owned(),
                    ));
                }
            }
            if command.end_point().is_some_and(|position| !position.is_finite()) {
                return Err(ChartError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        self.style.validate()
    }
}

/// Circular arc swept clockwise from `start_angle_deg` to `end_angle_deg`.
///
/// Angles are measured in degrees, clockwise from twelve o'clock. A sweep of
/// 360 degrees is a full circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPrimitive {
    pub center: Position,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub large_arc: bool,
    pub style: PaintStyle,
}

impl ArcPrimitive {
    #[must_use]
    pub fn full_circle(center: Position, radius: f64, style: PaintStyle) -> Self {
        Self {
            center,
            radius,
            start_angle_deg: 0.0,
            end_angle_deg: 360.0,
            large_arc: true,
            style,
        }
    }

    #[must_use]
    pub fn is_full_circle(self) -> bool {
        (self.end_angle_deg - self.start_angle_deg).abs() >= 360.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite() {
            return Err(ChartError::InvalidData(
                "arc center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "arc radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.start_angle_deg.is_finite() || !self.end_angle_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "arc angles must be finite".to_owned(),
            ));
        }
        self.style.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub style: PaintStyle,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, style: PaintStyle) -> Self {
        Self {
            x,
            y,
            width,
            height,
            style,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in scene space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub bold: bool,
    pub visible: bool,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            bold: false,
            visible: true,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.visible && self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "visible text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One entry of a scene, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Path(PathPrimitive),
    Arc(ArcPrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Path(path) => path.validate(),
            Self::Arc(arc) => arc.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

impl From<PathPrimitive> for Primitive {
    fn from(value: PathPrimitive) -> Self {
        Self::Path(value)
    }
}

impl From<ArcPrimitive> for Primitive {
    fn from(value: ArcPrimitive) -> Self {
        Self::Arc(value)
    }
}

impl From<RectPrimitive> for Primitive {
    fn from(value: RectPrimitive) -> Self {
        Self::Rect(value)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(value: TextPrimitive) -> Self {
        Self::Text(value)
    }
}

/// Point on a circle at `angle_deg`, measured clockwise from twelve o'clock.
#[must_use]
pub fn point_on_circle(center: Position, radius: f64, angle_deg: f64) -> Position {
    let radians = (angle_deg - 90.0).to_radians();
    Position::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}
