//! Canvas: 2D character grid the rasterizer paints onto.

use super::charset::Glyphs;

/// A fixed-size grid of characters, blank-filled.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn get(&self, col: usize, row: usize) -> char {
        if row < self.height && col < self.width {
            self.cells[row][col]
        } else {
            ' '
        }
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if row < self.height && col < self.width {
            self.cells[row][col] = ch;
        }
    }

    /// Paint rows `y1..=y2` of column `x`.
    pub fn vline(&mut self, x: usize, y1: usize, y2: usize, glyphs: &Glyphs) {
        for row in y1.min(y2)..=y1.max(y2) {
            self.set(x, row, glyphs.vertical);
        }
    }

    /// Paint columns `x1..=x2` of row `y`, using the cross glyph wherever
    /// `is_crossing(col)` holds.
    pub fn hline(
        &mut self,
        y: usize,
        x1: usize,
        x2: usize,
        glyphs: &Glyphs,
        is_crossing: impl Fn(usize) -> bool,
    ) {
        for col in x1.min(x2)..=x1.max(x2) {
            let ch = if is_crossing(col) {
                glyphs.cross
            } else {
                glyphs.horizontal
            };
            self.set(col, y, ch);
        }
    }

    /// Render the canvas to a string, trimming trailing whitespace per line
    /// and trailing blank lines. Always ends with a newline.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
