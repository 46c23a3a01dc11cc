//! Configuration for diagram emission and rasterization.
//!
//! All sizes are in pixels of the emitted vector document.

use crate::renderers::charset::CharSet;

pub const DEFAULT_UNIT_SIZE: u32 = 30;
pub const DEFAULT_LINE_WIDTH: u32 = 3;
pub const DEFAULT_PADDING: u32 = 60;
pub const DEFAULT_BACKGROUND: &str = "#FFF";
pub const DEFAULT_STROKE: &str = "#000000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramConfig {
    /// Pixels per abstract grid unit.
    pub unit_size: u32,
    /// Stroke width of every line.
    pub line_width: u32,
    /// Margin around the diagram on every side.
    pub padding: u32,
    pub background_color: String,
    pub stroke_color: String,
    /// Glyphs used when the document is rasterized to text.
    pub charset: CharSet,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            unit_size: DEFAULT_UNIT_SIZE,
            line_width: DEFAULT_LINE_WIDTH,
            padding: DEFAULT_PADDING,
            background_color: DEFAULT_BACKGROUND.to_string(),
            stroke_color: DEFAULT_STROKE.to_string(),
            charset: CharSet::Unicode,
        }
    }
}

impl DiagramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero unit size falls back to the default.
    pub fn with_unit_size(mut self, unit_size: u32) -> Self {
        self.unit_size = if unit_size == 0 {
            DEFAULT_UNIT_SIZE
        } else {
            unit_size
        };
        self
    }

    /// A zero line width falls back to the default.
    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = if line_width == 0 {
            DEFAULT_LINE_WIDTH
        } else {
            line_width
        };
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// An empty color keeps the current background.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        if !color.is_empty() {
            self.background_color = color;
        }
        self
    }

    /// An empty color keeps the current stroke.
    pub fn with_stroke(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        if !color.is_empty() {
            self.stroke_color = color;
        }
        self
    }

    pub fn with_charset(mut self, charset: CharSet) -> Self {
        self.charset = charset;
        self
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
