use super::*;

#[test]
fn test_default_config() {
    let config = DiagramConfig::default();
    assert_eq!(config.unit_size, 30);
    assert_eq!(config.line_width, 3);
    assert_eq!(config.padding, 60);
    assert_eq!(config.background_color, "#FFF");
    assert_eq!(config.stroke_color, "#000000");
    assert_eq!(config.charset, CharSet::Unicode);
    assert_eq!(config, DiagramConfig::new());
}

#[test]
fn test_builder_setters() {
    let config = DiagramConfig::new()
        .with_unit_size(10)
        .with_line_width(1)
        .with_padding(0)
        .with_background("white")
        .with_stroke("#333")
        .with_charset(CharSet::Ascii);
    assert_eq!(config.unit_size, 10);
    assert_eq!(config.line_width, 1);
    assert_eq!(config.padding, 0);
    assert_eq!(config.background_color, "white");
    assert_eq!(config.stroke_color, "#333");
    assert_eq!(config.charset, CharSet::Ascii);
}

#[test]
fn test_zero_sizes_fall_back_to_defaults() {
    let config = DiagramConfig::new().with_unit_size(0).with_line_width(0);
    assert_eq!(config.unit_size, DEFAULT_UNIT_SIZE);
    assert_eq!(config.line_width, DEFAULT_LINE_WIDTH);
}

#[test]
fn test_empty_colors_are_ignored() {
    let config = DiagramConfig::new()
        .with_background("#123")
        .with_background("")
        .with_stroke("");
    assert_eq!(config.background_color, "#123");
    assert_eq!(config.stroke_color, DEFAULT_STROKE);
}
