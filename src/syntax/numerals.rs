//! Numeric literals in lambda text.
//!
//! A free variable spelled with digits only (`3`) stands for the Church
//! numeral of that value when a term is drawn.

use crate::compiler::church::MAX_NUMERAL;
use crate::syntax::types::Term;

/// Church numeral term `λf.λx.f (f (… x))` with `n` applications.
pub fn church_numeral_term(n: usize) -> Term {
    let mut inner = Term::var("x");
    for _ in 0..n {
        inner = Term::app(Term::var("f"), inner);
    }
    Term::abs("f", Term::abs("x", inner))
}

/// Value of a digits-only name within the cached numeral range.
pub fn numeral_value(name: &str) -> Option<usize> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<usize>().ok().filter(|n| *n <= MAX_NUMERAL)
}

/// Replace every free numeric variable with its Church numeral term.
/// Variables bound by an enclosing abstraction are left alone.
pub fn expand_numerals(term: Term) -> Term {
    fn expand(term: Term, bound: &mut Vec<String>) -> Term {
        match term {
            Term::Variable(var) => match numeral_value(&var.name) {
                Some(n) if !bound.contains(&var.name) => church_numeral_term(n),
                _ => Term::Variable(var),
            },
            Term::Abstraction(mut abs) => {
                bound.push(abs.bound_name.clone());
                abs.body = Box::new(expand(*abs.body, bound));
                bound.pop();
                Term::Abstraction(abs)
            }
            Term::Application(mut app) => {
                app.function = Box::new(expand(*app.function, bound));
                app.argument = Box::new(expand(*app.argument, bound));
                Term::Application(app)
            }
        }
    }
    expand(term, &mut Vec::new())
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_numerals.rs"]
mod tests;
