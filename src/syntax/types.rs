//! Lambda-calculus term tree.
//!
//! `Variable`, `Abstraction` and `Application` form a strict tree: every
//! child is exclusively owned by its parent. Binder identities link a bound
//! variable back to the abstraction that introduced it without sharing.

use std::fmt;

// ─── BinderId ────────────────────────────────────────────────────────────────

/// Identity of one abstraction, unique within a single resolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinderId(pub u32);

impl fmt::Display for BinderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ─── Variable ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    /// De Bruijn index once resolved; `None` for free variables.
    pub debruijn_index: Option<usize>,
    pub binder: Option<BinderId>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            debruijn_index: None,
            binder: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.binder.is_none()
    }
}

// ─── Abstraction ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abstraction {
    pub bound_name: String,
    pub body: Box<Term>,
    pub binder: Option<BinderId>,
}

// ─── Application ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub function: Box<Term>,
    pub argument: Box<Term>,
}

// ─── Term ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Variable(Variable),
    Abstraction(Abstraction),
    Application(Application),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(Variable::new(name))
    }

    pub fn abs(bound_name: impl Into<String>, body: Term) -> Self {
        Term::Abstraction(Abstraction {
            bound_name: bound_name.into(),
            body: Box::new(body),
            binder: None,
        })
    }

    pub fn app(function: Term, argument: Term) -> Self {
        Term::Application(Application {
            function: Box::new(function),
            argument: Box::new(argument),
        })
    }

    /// Node count: variables count 1, abstractions 1 + body, applications
    /// the sum of both sides.
    pub fn size(&self) -> usize {
        match self {
            Term::Variable(_) => 1,
            Term::Abstraction(abs) => 1 + abs.body.size(),
            Term::Application(app) => app.function.size() + app.argument.size(),
        }
    }

    /// Longest root-to-leaf path, counted in nodes. Iterative so it is safe
    /// to call on terms of any depth.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((term, level)) = stack.pop() {
            deepest = deepest.max(level);
            match term {
                Term::Variable(_) => {}
                Term::Abstraction(abs) => stack.push((abs.body.as_ref(), level + 1)),
                Term::Application(app) => {
                    stack.push((app.function.as_ref(), level + 1));
                    stack.push((app.argument.as_ref(), level + 1));
                }
            }
        }
        deepest
    }

    /// Highest binder identity present anywhere in the term.
    pub fn max_binder(&self) -> Option<BinderId> {
        match self {
            Term::Variable(var) => var.binder,
            Term::Abstraction(abs) => abs.binder.max(abs.body.max_binder()),
            Term::Application(app) => app.function.max_binder().max(app.argument.max_binder()),
        }
    }

    /// Names of variables with no enclosing binder, in first-seen order.
    pub fn free_variables(&self) -> Vec<&str> {
        fn walk<'a>(term: &'a Term, bound: &mut Vec<&'a str>, out: &mut Vec<&'a str>) {
            match term {
                Term::Variable(var) => {
                    let name = var.name.as_str();
                    if !bound.contains(&name) && !out.contains(&name) {
                        out.push(name);
                    }
                }
                Term::Abstraction(abs) => {
                    bound.push(abs.bound_name.as_str());
                    walk(&abs.body, bound, out);
                    bound.pop();
                }
                Term::Application(app) => {
                    walk(&app.function, bound, out);
                    walk(&app.argument, bound, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(self, &mut Vec::new(), &mut out);
        out
    }
}

/// Prints lambda text that parses back to the same tree. Applications are
/// left-associative; abstractions extend as far right as possible.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(var) => write!(f, "{}", var.name),
            Term::Abstraction(abs) => write!(f, "λ{}.{}", abs.bound_name, abs.body),
            Term::Application(app) => {
                match app.function.as_ref() {
                    Term::Abstraction(_) => write!(f, "({})", app.function)?,
                    _ => write!(f, "{}", app.function)?,
                }
                match app.argument.as_ref() {
                    Term::Variable(_) => write!(f, " {}", app.argument),
                    _ => write!(f, " ({})", app.argument),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
