//! Line-drawing glyph sets for the text rasterizer.

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which glyphs the rasterizer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn glyphs(self) -> Glyphs {
        match self {
            CharSet::Unicode => Glyphs::unicode(),
            CharSet::Ascii => Glyphs::ascii(),
        }
    }
}

// ─── Glyphs ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub horizontal: char,
    pub vertical: char,
    pub cross: char,
}

impl Glyphs {
    pub fn unicode() -> Self {
        Self {
            horizontal: '─',
            vertical: '│',
            cross: '┼',
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: '-',
            vertical: '|',
            cross: '+',
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
