//! Lexical scope for the compiler.
//!
//! A name maps to the text substituted for it: its own name for a bound
//! parameter, or the compiled initializer of a `let`/`const`/`var`.
//! Entering a block or function clones the parent, so a child never writes
//! through to its parent.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: HashMap<String, String>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh scope binding each parameter to itself.
    pub fn with_params<'a>(params: impl IntoIterator<Item = &'a str>) -> Self {
        let mut scope = Self::new();
        for param in params {
            scope.bind_param(param);
        }
        scope
    }

    /// Copy for a nested block or function.
    pub fn child(&self) -> Self {
        self.clone()
    }

    pub fn bind_param(&mut self, name: &str) {
        self.bindings.insert(name.to_string(), name.to_string());
    }

    pub fn bind(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.bindings.insert(name.into(), text.into());
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}
