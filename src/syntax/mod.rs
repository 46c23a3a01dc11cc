//! Syntax trees: the JavaScript/TypeScript subset consumed by the compiler
//! and the lambda-calculus terms consumed by the diagram pipeline.

pub mod ast;
pub mod debruijn;
pub mod estree;
pub mod numerals;
pub mod types;

pub use ast::Program;
pub use debruijn::{Resolver, resolve};
pub use types::{Abstraction, Application, BinderId, Term, Variable};
