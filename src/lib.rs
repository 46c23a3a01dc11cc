//! jambda: compiles a JavaScript/TypeScript function subset to
//! Church-encoded lambda calculus and draws lambda terms as Tromp diagrams.
//!
//! Two pipelines share the crate:
//!
//! ```text
//! ESTree JSON ─► syntax::estree ─► compiler ─► lambda text
//! lambda text ─► parsers ─► syntax::numerals ─► syntax::debruijn ─► layout ─► renderers
//! ```
//!
//! The JavaScript front end is external: any parser that emits ESTree JSON
//! (acorn, espree, typescript-estree, babel) can feed [`transpile`].

pub mod compiler;
pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

use tracing::debug;

pub use config::DiagramConfig;
pub use error::{Error, Result};
pub use layout::{DiagramFigure, LineSegment};
pub use renderers::CharSet;
pub use syntax::{Program, Term};

use renderers::{AsciiRenderer, Renderer, SvgRenderer};

/// Compile ESTree JSON to lambda text.
pub fn transpile(estree_json: &str) -> Result<String> {
    let program = syntax::estree::parse_program(estree_json)?;
    debug!(statements = program.body.len(), "decoded syntax tree");
    compile_program(&program)
}

/// Compile an already-built program to lambda text.
pub fn compile_program(program: &Program) -> Result<String> {
    compiler::compile(program)
}

/// Parse lambda text and resolve its bindings.
pub fn parse_term(text: &str) -> Result<Term> {
    Ok(syntax::resolve(parsers::parse(text)?))
}

/// Parse, expand numeric variables, resolve, and lay out lambda text.
pub fn diagram(text: &str) -> Result<DiagramFigure> {
    let term = syntax::numerals::expand_numerals(parsers::parse(text)?);
    let term = syntax::resolve(term);
    let figure = layout::layout(&term);
    debug!(
        size = term.size(),
        width = figure.width_units,
        height = figure.height_units,
        segments = figure.segments.len(),
        "laid out diagram"
    );
    Ok(figure)
}

/// Draw lambda text as an SVG document.
pub fn render_svg(text: &str, config: &DiagramConfig) -> Result<String> {
    Ok(SvgRenderer::new(config).render(&diagram(text)?))
}

/// Draw lambda text as a character grid.
pub fn render_ascii(text: &str, config: &DiagramConfig) -> Result<String> {
    Ok(AsciiRenderer::new(config).render(&diagram(text)?))
}
