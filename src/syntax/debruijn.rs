//! Binding resolver: annotates variables with De Bruijn indices and the
//! identity of the abstraction that binds them.

use std::collections::HashMap;

use tracing::trace;

use crate::syntax::types::{BinderId, Term};

/// Hands out binder identities for one resolution run.
#[derive(Debug, Default)]
pub struct Resolver {
    next_binder: u32,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver whose fresh identities never collide with binders already
    /// present in `term`.
    pub fn for_term(term: &Term) -> Self {
        Self {
            next_binder: term.max_binder().map_or(0, |id| id.0 + 1),
        }
    }

    /// Annotate `term` in place.
    pub fn resolve(&mut self, term: &mut Term) {
        let mut env = HashMap::new();
        let mut binders = Vec::new();
        self.walk(term, &mut env, &mut binders);
    }

    /// `env` maps a bound name to the depth of its innermost binder;
    /// `binders[d]` is the identity of the abstraction at depth `d`.
    fn walk(
        &mut self,
        term: &mut Term,
        env: &mut HashMap<String, usize>,
        binders: &mut Vec<BinderId>,
    ) {
        let depth = binders.len();
        match term {
            Term::Variable(var) => match env.get(&var.name) {
                Some(&binding_depth) => {
                    var.debruijn_index = Some(depth - binding_depth - 1);
                    var.binder = Some(binders[binding_depth]);
                }
                None => {
                    trace!(name = %var.name, "free variable");
                    var.debruijn_index = None;
                    var.binder = None;
                }
            },
            Term::Abstraction(abs) => {
                let id = *abs.binder.get_or_insert_with(|| {
                    let id = BinderId(self.next_binder);
                    self.next_binder += 1;
                    id
                });
                let shadowed = env.insert(abs.bound_name.clone(), depth);
                binders.push(id);
                self.walk(&mut abs.body, env, binders);
                binders.pop();
                match shadowed {
                    Some(outer) => env.insert(abs.bound_name.clone(), outer),
                    None => env.remove(&abs.bound_name),
                };
            }
            Term::Application(app) => {
                self.walk(&mut app.function, env, binders);
                self.walk(&mut app.argument, env, binders);
            }
        }
    }
}

/// Resolve every binding in `term`.
pub fn resolve(mut term: Term) -> Term {
    Resolver::for_term(&term).resolve(&mut term);
    term
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_debruijn.rs"]
mod tests;
