pub mod lambda;
pub mod lexer;

use crate::error::Result;
use crate::syntax::types::Term;

pub use lambda::{LambdaParser, MAX_TERM_DEPTH};

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Text front ends producing an unresolved [`Term`].
pub trait Parser {
    fn parse(&self, src: &str) -> Result<Term>;
}

/// Parse lambda-calculus text. Indices are not yet resolved.
pub fn parse(src: &str) -> Result<Term> {
    LambdaParser.parse(src)
}
