//! Renderer trait and the two diagram back ends.

pub mod ascii;
pub mod canvas;
pub mod charset;
pub mod svg;

pub use ascii::{AsciiRenderer, rasterize};
pub use charset::CharSet;
pub use svg::SvgRenderer;

use crate::layout::types::DiagramFigure;

/// Turns a laid-out figure into text.
pub trait Renderer {
    fn render(&self, figure: &DiagramFigure) -> String;
}
