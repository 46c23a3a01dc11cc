//! Recursive-descent parser for lambda-calculus text.
//!
//! ```text
//! expression  := abstraction | application
//! abstraction := LAMBDA VARIABLE DOT expression
//! application := atomic atomic*      -- left-associative
//! atomic      := VARIABLE | LPAREN expression RPAREN
//! ```
//!
//! An abstraction body extends as far right as possible, so `λx.f x`
//! is `λx.(f x)`.

use tracing::debug;

use super::Parser;
use super::lexer::{Token, TokenKind, tokenize};
use crate::error::{Error, Result};
use crate::syntax::types::Term;

/// Deepest accepted term tree. Abstractions, parentheses and each argument
/// on an application spine all count one level.
pub const MAX_TERM_DEPTH: usize = 2048;

pub struct LambdaParser;

impl Parser for LambdaParser {
    fn parse(&self, src: &str) -> Result<Term> {
        let tokens = tokenize(src)?;
        debug!(tokens = tokens.len(), "parsing lambda text");
        let mut stream = TokenStream::new(tokens);
        let term = stream.expression()?;
        if stream.current().kind != TokenKind::EndOfInput {
            return Err(stream.error("end of input"));
        }
        Ok(term)
    }
}

// ─── Token stream ────────────────────────────────────────────────────────────

struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl TokenStream {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn current(&self) -> &Token {
        // `tokenize` always ends with EndOfInput and `advance` never moves past it.
        &self.tokens[self.pos.min(self.tokens.len().saturating_sub(1))]
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(expected))
        }
    }

    fn error(&self, expected: &str) -> Error {
        Error::Parse {
            position: self.current().position,
            expected: expected.to_string(),
        }
    }

    // ─── Grammar ─────────────────────────────────────────────────────────

    fn descend(&mut self) -> Result<()> {
        if self.depth >= MAX_TERM_DEPTH {
            return Err(Error::NestingTooDeep {
                limit: MAX_TERM_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn expression(&mut self) -> Result<Term> {
        self.descend()?;
        let term = if self.at(TokenKind::Lambda) {
            self.abstraction()
        } else {
            self.application()
        };
        self.depth -= 1;
        term
    }

    fn abstraction(&mut self) -> Result<Term> {
        self.expect(TokenKind::Lambda, "`λ`")?;
        let name = self.expect(TokenKind::Variable, "a variable after `λ`")?;
        self.expect(TokenKind::Dot, "`.` after the bound variable")?;
        let body = self.expression()?;
        Ok(Term::abs(name.text, body))
    }

    /// The spine `f a b c` nests leftward, so every argument deepens the tree.
    fn application(&mut self) -> Result<Term> {
        let base = self.depth;
        let mut term = self.atomic()?;
        while !matches!(
            self.current().kind,
            TokenKind::EndOfInput | TokenKind::RParen | TokenKind::Dot
        ) {
            self.descend()?;
            let argument = self.atomic()?;
            term = Term::app(term, argument);
        }
        self.depth = base;
        Ok(term)
    }

    fn atomic(&mut self) -> Result<Term> {
        match self.current().kind {
            TokenKind::Variable => Ok(Term::var(self.advance().text)),
            TokenKind::LParen => {
                self.advance();
                let inner = self.expression()?;
                self.expect(TokenKind::RParen, "`)`")?;
                Ok(inner)
            }
            _ => Err(self.error("a variable or `(`")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_lambda.rs"]
mod tests;
