use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, PaintStyle, PathCommand, PathPrimitive, Primitive, RectPrimitive,
    Renderer, Scene, TextHAlign, TextPrimitive, point_on_circle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub paths_drawn: usize,
    pub arcs_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Reference renderer that materializes a scene as SVG markup.
///
/// The markup of the last rendered scene is kept until the next call.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;

        let mut stats = SvgRenderStats::default();
        let mut out = String::new();
        write_svg(&mut out, scene, &mut stats).map_err(|e| {
            ChartError::Serialization(format!("failed to write svg document: {e}"))
        })?;

        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_svg(out: &mut String, scene: &Scene, stats: &mut SvgRenderStats) -> std::fmt::Result {
    let (width, height) = (scene.viewport.width, scene.viewport.height);
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    for primitive in &scene.primitives {
        match primitive {
            Primitive::Path(path) => {
                write_path(out, path)?;
                stats.paths_drawn += 1;
            }
            Primitive::Arc(arc) => {
                write_arc(out, arc)?;
                stats.arcs_drawn += 1;
            }
            Primitive::Rect(rect) => {
                write_rect(out, rect)?;
                stats.rects_drawn += 1;
            }
            Primitive::Text(text) => {
                write_text(out, text)?;
                stats.texts_drawn += 1;
            }
        }
    }
    out.push_str("</svg>");
    Ok(())
}

fn write_path(out: &mut String, path: &PathPrimitive) -> std::fmt::Result {
    let mut data = String::new();
    for command in &path.commands {
        if !data.is_empty() {
            data.push(' ');
        }
        match *command {
            PathCommand::MoveTo(p) => write!(data, "M {} {}", num(p.x), num(p.y))?,
            PathCommand::LineTo(p) => write!(data, "L {} {}", num(p.x), num(p.y))?,
            PathCommand::ArcTo {
                radius,
                large_arc,
                clockwise,
                to,
            } => write!(
                data,
                "A {r} {r} 0 {} {} {} {}",
                u8::from(large_arc),
                u8::from(clockwise),
                num(to.x),
                num(to.y),
                r = num(radius)
            )?,
            PathCommand::Close => data.push('Z'),
        }
    }
    write!(out, r#"<path d="{data}"{}/>"#, paint(path.style))
}

fn write_arc(out: &mut String, arc: &ArcPrimitive) -> std::fmt::Result {
    if arc.is_full_circle() {
        return write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            num(arc.center.x),
            num(arc.center.y),
            num(arc.radius),
            paint(arc.style)
        );
    }
    let start = point_on_circle(arc.center, arc.radius, arc.start_angle_deg);
    let end = point_on_circle(arc.center, arc.radius, arc.end_angle_deg);
    write!(
        out,
        r#"<path d="M {} {} A {r} {r} 0 {} 1 {} {}"{}/>"#,
        num(start.x),
        num(start.y),
        u8::from(arc.large_arc),
        num(end.x),
        num(end.y),
        paint(arc.style),
        r = num(arc.radius)
    )
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        paint(rect.style)
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}""#,
        num(text.x),
        num(text.y),
        num(text.font_size_px),
        css_color(text.color)
    )?;
    if text.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    if !text.visible {
        out.push_str(r#" visibility="hidden""#);
    }
    write!(out, ">{}</text>", escape(&text.text))
}

fn paint(style: PaintStyle) -> String {
    let fill = style.fill.map_or_else(|| "none".to_owned(), css_color);
    match style.stroke {
        Some(stroke) => format!(
            r#" fill="{fill}" stroke="{}" stroke-width="{}""#,
            css_color(stroke),
            num(style.stroke_width)
        ),
        None => format!(r#" fill="{fill}""#),
    }
}

fn css_color(color: Color) -> String {
    let channel = |value: f64| (value * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{})",
        channel(color.red),
        channel(color.green),
        channel(color.blue),
        num(color.alpha)
    )
}

fn num(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
