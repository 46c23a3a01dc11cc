//! Tokenizer for lambda-calculus text.
//!
//! `λ`, `.`, `(` and `)` are single-character tokens. A variable is a
//! maximal run of `[A-Za-z0-9_'+*\-/]`, so `+`, `succ'` and `42` are all
//! names. Whitespace and any other character are skipped. Positions are
//! character offsets into the source.

use crate::error::{Error, MAX_SOURCE_LENGTH, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Lambda,
    Dot,
    Variable,
    LParen,
    RParen,
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}

pub fn is_variable_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '*' | '-' | '/')
}

// ─── Lexer ───────────────────────────────────────────────────────────────────

/// Single-pass token stream; yields exactly one `EndOfInput` and then stops.
pub struct Lexer {
    src: Vec<char>,
    pos: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(src: &str) -> Result<Self> {
        let src: Vec<char> = src.chars().collect();
        if src.len() > MAX_SOURCE_LENGTH {
            return Err(Error::SourceTooLong {
                length: src.len(),
                max: MAX_SOURCE_LENGTH,
            });
        }
        Ok(Self {
            src,
            pos: 0,
            finished: false,
        })
    }

    fn variable(&mut self) -> Token {
        let start = self.pos;
        while self.pos < self.src.len() && is_variable_char(self.src[self.pos]) {
            self.pos += 1;
        }
        let text: String = self.src[start..self.pos].iter().collect();
        Token::new(TokenKind::Variable, text, start)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        while let Some(&c) = self.src.get(self.pos) {
            let kind = match c {
                'λ' => TokenKind::Lambda,
                '.' => TokenKind::Dot,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                c if is_variable_char(c) => return Some(self.variable()),
                _ => {
                    self.pos += 1;
                    continue;
                }
            };
            let token = Token::new(kind, c, self.pos);
            self.pos += 1;
            return Some(token);
        }
        self.finished = true;
        Some(Token::new(TokenKind::EndOfInput, "", self.pos))
    }
}

/// Tokenize all of `src`; the last token is always `EndOfInput`.
pub fn tokenize(src: &str) -> Result<Vec<Token>> {
    Ok(Lexer::new(src)?.collect())
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_lexer.rs"]
mod tests;
