//! Layout engine: turns a resolved term into a segment scene.

pub mod tromp;
pub mod types;

pub use tromp::layout;
pub use types::{DiagramFigure, LineSegment};
