//! Error taxonomy shared by every pipeline stage.

use thiserror::Error;

/// Maximum accepted length of lambda-calculus source, in characters.
pub const MAX_SOURCE_LENGTH: usize = 100_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input defines no top-level function declaration.
    #[error("no function declarations found in input")]
    NoEntryPoint,

    /// A function body produced no result on any reachable path.
    #[error("no return statement found in body of `{function}`")]
    NoReturn { function: String },

    /// AST node kind, operator, parameter pattern, or recursive function
    /// outside the compilable subset.
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(String),

    /// Lambda-calculus syntax violation. `position` is a character offset.
    #[error("parse error at position {position}: expected {expected}")]
    Parse { position: usize, expected: String },

    #[error("source exceeds maximum length of {max} characters ({length} given)")]
    SourceTooLong { length: usize, max: usize },

    #[error("nesting exceeds maximum depth of {limit}")]
    NestingTooDeep { limit: usize },

    /// The ESTree input is not JSON or is missing a required field.
    #[error("malformed syntax tree: {0}")]
    MalformedAst(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedAst(e.to_string())
    }
}
