use super::*;
use crate::layout::types::LineSegment;
use pretty_assertions::assert_eq;

fn line(x1: i64, y1: i64, x2: i64, y2: i64) -> String {
    format!(r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="black"/>"#)
}

fn svg(lines: &[String]) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg"><g>{}</g></svg>"#,
        lines.concat()
    )
}

#[test]
fn test_single_crossing() {
    let doc = svg(&[line(0, 30, 60, 30), line(30, 0, 30, 60)]);
    let out = rasterize(&doc, CharSet::Unicode);
    assert_eq!(out, "  │\n──┼──\n  │\n");
    assert_eq!(out.matches('┼').count(), 1);
}

#[test]
fn test_ascii_glyphs() {
    let doc = svg(&[line(0, 30, 60, 30), line(30, 0, 30, 60)]);
    assert_eq!(rasterize(&doc, CharSet::Ascii), "  |\n--+--\n  |\n");
}

#[test]
fn test_disjoint_lines_do_not_cross() {
    let doc = svg(&[line(0, 0, 30, 0), line(60, 30, 60, 90)]);
    let out = rasterize(&doc, CharSet::Unicode);
    assert!(!out.contains('┼'));
    assert_eq!(out, "───\n    │\n    │\n");
}

#[test]
fn test_diagonal_lines_are_ignored() {
    let doc = svg(&[line(0, 0, 30, 30)]);
    assert_eq!(rasterize(&doc, CharSet::Unicode), "\n");
}

#[test]
fn test_attribute_order_and_decimals() {
    let doc = r#"<svg><line y2="0" x2="30.2" y1="0.4" x1="0"/></svg>"#;
    assert_eq!(rasterize(doc, CharSet::Unicode), "───\n");
}

#[test]
fn test_identity_diagram() {
    let config = DiagramConfig::default();
    let figure = DiagramFigure::new(
        vec![LineSegment::horizontal(0, 0, 1), LineSegment::vertical(0, 1, 0)],
        1,
        1,
    );
    assert_eq!(AsciiRenderer::new(&config).render(&figure), "┼──\n│\n");
}

#[test]
fn test_application_diagram() {
    let config = DiagramConfig::default().with_charset(CharSet::Ascii);
    let figure = DiagramFigure::new(
        vec![
            LineSegment::horizontal(0, 0, 2),
            LineSegment::vertical(0, 0, -1),
            LineSegment::vertical(2, 0, -1),
        ],
        3,
        1,
    );
    assert_eq!(AsciiRenderer::new(&config).render(&figure), "| |\n+-+\n");
}
