//! Vector emitter: serializes a figure as a standalone SVG document.
//!
//! Layout coordinates are multiplied by the unit size and drawn inside a
//! group translated by the padding, over a full-size background rectangle.

use std::borrow::Cow;
use std::fmt::Write;

use crate::config::DiagramConfig;
use crate::layout::types::{DiagramFigure, LineSegment};

use super::Renderer;

pub struct SvgRenderer<'a> {
    config: &'a DiagramConfig,
}

impl<'a> SvgRenderer<'a> {
    pub fn new(config: &'a DiagramConfig) -> Self {
        Self { config }
    }

    fn line(&self, out: &mut String, segment: &LineSegment) {
        let unit = i64::from(self.config.unit_size);
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            segment.x1 * unit,
            segment.y1 * unit,
            segment.x2 * unit,
            segment.y2 * unit,
            escape_attribute(&self.config.stroke_color),
            self.config.line_width,
        );
    }
}

impl Renderer for SvgRenderer<'_> {
    fn render(&self, figure: &DiagramFigure) -> String {
        let unit = i64::from(self.config.unit_size);
        let padding = i64::from(self.config.padding);
        let width = figure.width_units * unit + padding * 2;
        let height = figure.height_units * unit + padding * 2;

        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" preserveAspectRatio="xMidYMid meet">"#
        );
        let _ = write!(
            out,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            escape_attribute(&self.config.background_color)
        );
        let _ = write!(out, r#"<g transform="translate({padding}, {padding})">"#);
        for segment in &figure.segments {
            self.line(&mut out, segment);
        }
        out.push_str("</g></svg>");
        out
    }
}

/// Colors are caller-supplied text placed inside double-quoted attributes.
fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
