//! Grid rasterizer: redraws an SVG document's `<line>` elements as text.
//!
//! Only axis-aligned lines are kept. Distinct x coordinates map to every
//! other column and distinct y coordinates to consecutive rows, so the
//! picture keeps its topology but not its proportions. Verticals are
//! painted first, then horizontals, which take the cross glyph wherever
//! they meet a vertical.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::DiagramConfig;
use crate::layout::types::DiagramFigure;

use super::Renderer;
use super::canvas::Canvas;
use super::charset::CharSet;
use super::svg::SvgRenderer;

static LINE_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<line\b[^>]*>").expect("valid line pattern"));
static COORDINATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(x1|y1|x2|y2)\s*=\s*"([^"]*)""#).expect("valid attribute pattern")
});

// ─── Line extraction ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
struct Line {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Axis-aligned line with rounded coordinates; `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    at: i64,
    from: i64,
    to: i64,
}

fn lines(svg: &str) -> Vec<Line> {
    LINE_ELEMENT
        .find_iter(svg)
        .map(|element| {
            let mut line = Line {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: 0.0,
            };
            for caps in COORDINATE.captures_iter(element.as_str()) {
                // Unparseable coordinates read as 0.
                let value = caps[2].trim().parse::<f64>().unwrap_or(0.0);
                match &caps[1] {
                    "x1" => line.x1 = value,
                    "y1" => line.y1 = value,
                    "x2" => line.x2 = value,
                    _ => line.y2 = value,
                }
            }
            line
        })
        .collect()
}

fn round(value: f64) -> i64 {
    value.round() as i64
}

fn split(lines: &[Line]) -> (Vec<Span>, Vec<Span>) {
    let mut horizontals = Vec::new();
    let mut verticals = Vec::new();
    for line in lines {
        if (line.y1 - line.y2).abs() < 1.0 {
            horizontals.push(Span {
                at: round(line.y1),
                from: round(line.x1.min(line.x2)),
                to: round(line.x1.max(line.x2)),
            });
        } else if (line.x1 - line.x2).abs() < 1.0 {
            verticals.push(Span {
                at: round(line.x1),
                from: round(line.y1.min(line.y2)),
                to: round(line.y1.max(line.y2)),
            });
        }
    }
    (horizontals, verticals)
}

// ─── Rasterizer ──────────────────────────────────────────────────────────────

/// Rasterize every axis-aligned `<line>` of `svg` onto a character grid.
pub fn rasterize(svg: &str, charset: CharSet) -> String {
    let (horizontals, verticals) = split(&lines(svg));

    let mut xs = BTreeSet::new();
    let mut ys = BTreeSet::new();
    for v in &verticals {
        xs.insert(v.at);
        ys.extend([v.from, v.to]);
    }
    for h in &horizontals {
        ys.insert(h.at);
        xs.extend([h.from, h.to]);
    }

    let columns: BTreeMap<i64, usize> = xs.iter().enumerate().map(|(i, &x)| (x, i * 2)).collect();
    let rows: BTreeMap<i64, usize> = ys.iter().enumerate().map(|(i, &y)| (y, i)).collect();
    let column = |x: i64| columns.get(&x).copied().unwrap_or(0);
    let row = |y: i64| rows.get(&y).copied().unwrap_or(0);

    let mut crossings = HashSet::new();
    for h in &horizontals {
        for v in &verticals {
            if (h.from..=h.to).contains(&v.at) && (v.from..=v.to).contains(&h.at) {
                crossings.insert((column(v.at), row(h.at)));
            }
        }
    }

    let glyphs = charset.glyphs();
    let mut canvas = Canvas::new(xs.len() * 2 + 1, ys.len() + 1);
    for v in &verticals {
        canvas.vline(column(v.at), row(v.from), row(v.to), &glyphs);
    }
    for h in &horizontals {
        let y = row(h.at);
        canvas.hline(y, column(h.from), column(h.to), &glyphs, |x| {
            crossings.contains(&(x, y))
        });
    }

    debug!(
        columns = canvas.width,
        rows = canvas.height,
        crossings = crossings.len(),
        "rasterized diagram"
    );
    canvas.render_to_string()
}

// ─── AsciiRenderer ───────────────────────────────────────────────────────────

/// Emits the SVG for a figure and rasterizes it.
pub struct AsciiRenderer<'a> {
    config: &'a DiagramConfig,
}

impl<'a> AsciiRenderer<'a> {
    pub fn new(config: &'a DiagramConfig) -> Self {
        Self { config }
    }
}

impl Renderer for AsciiRenderer<'_> {
    fn render(&self, figure: &DiagramFigure) -> String {
        let svg = SvgRenderer::new(self.config).render(figure);
        rasterize(&svg, self.config.charset)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
