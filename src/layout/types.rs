//! Layout types: LineSegment and DiagramFigure.

// ─── LineSegment ─────────────────────────────────────────────────────────────

/// A straight line in abstract grid units. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl LineSegment {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn horizontal(y: i64, x1: i64, x2: i64) -> Self {
        Self::new(x1, y, x2, y)
    }

    pub fn vertical(x: i64, y1: i64, y2: i64) -> Self {
        Self::new(x, y1, x, y2)
    }

    /// A copy shifted by `(dx, dy)`.
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }
}

// ─── DiagramFigure ───────────────────────────────────────────────────────────

/// The laid-out drawing of one term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramFigure {
    pub segments: Vec<LineSegment>,
    pub width_units: i64,
    pub height_units: i64,
}

impl DiagramFigure {
    pub fn new(segments: Vec<LineSegment>, width_units: i64, height_units: i64) -> Self {
        Self {
            segments,
            width_units,
            height_units,
        }
    }

    /// Move every segment by `(dx, dy)`, consuming the figure.
    pub fn translated(self, dx: i64, dy: i64) -> Vec<LineSegment> {
        self.segments
            .into_iter()
            .map(|segment| segment.translate(dx, dy))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
