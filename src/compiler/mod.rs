//! Church compiler: translates the JavaScript/TypeScript subset into
//! untyped lambda-calculus text.
//!
//! The first declared function is the entry point. Every top-level function
//! is visible to every other through the function table; calls to them are
//! inlined by recompiling the callee's body with its parameters bound to
//! the argument texts, and bare references compile the callee once into a
//! lambda term that is cached back into the table.

pub mod church;
pub mod recursion;
pub mod scope;

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::syntax::ast::{
    BinaryOperator, Expr, Function, FunctionBody, Literal, LogicalOperator, Pattern, Program, Stmt,
    SwitchCase, UnaryOperator,
};
use church::apply;
pub use scope::Scope;

/// Maximum nesting of expression and block expansions, inlined bodies
/// included.
pub const MAX_COMPILE_DEPTH: usize = 512;

// ─── Function table ──────────────────────────────────────────────────────────

/// A top-level function, either still a declaration or already compiled to
/// a lambda term by a bare reference.
#[derive(Debug, Clone)]
enum GlobalEntry<'a> {
    Function(&'a Function),
    Inlined(String),
}

/// What a statement list is being scanned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    /// Function and block bodies: every statement must be supported.
    Body,
    /// Switch case consequents: only returns and declarations matter, and
    /// `break` ends the case.
    Case,
}

/// How a scanned statement list was left.
#[derive(Debug)]
enum Exit {
    Return(String),
    /// A `break` ended the enclosing switch case.
    Break,
    End,
}

// ─── Compiler ────────────────────────────────────────────────────────────────

/// One compilation run. Owns the function table, so separate runs never
/// observe each other's cache.
pub struct Compiler<'a> {
    entry: &'a Function,
    functions: HashMap<&'a str, GlobalEntry<'a>>,
    recursive: HashSet<String>,
    depth: usize,
}

impl<'a> Compiler<'a> {
    /// Build the function table for `program`.
    pub fn new(program: &'a Program) -> Result<Self> {
        let declarations: Vec<(&'a str, &'a Function)> = program.function_declarations().collect();
        let Some(&(entry_name, _)) = declarations.first() else {
            return Err(Error::NoEntryPoint);
        };

        // A later declaration with the same name replaces an earlier one.
        let table: HashMap<&'a str, &'a Function> = declarations.into_iter().collect();
        let recursive = recursion::recursive_functions(&table);
        if !recursive.is_empty() {
            debug!(functions = ?recursive, "recursive functions will not be inlined");
        }

        Ok(Self {
            entry: table[entry_name],
            functions: table
                .into_iter()
                .map(|(name, func)| (name, GlobalEntry::Function(func)))
                .collect(),
            recursive,
            depth: 0,
        })
    }

    /// Compile the entry point to `λp1.λp2.….body`.
    pub fn compile(mut self) -> Result<String> {
        let entry = self.entry;
        debug!(
            entry = entry.display_name(),
            functions = self.functions.len(),
            "compiling entry point"
        );
        let params = param_names(entry)?;
        let scope = Scope::with_params(params.iter().copied());
        let body = self.function_body(entry, &scope)?;
        let text = if params.is_empty() {
            body
        } else {
            format!("{}.{}", binders(&params), body)
        };
        debug!(length = text.chars().count(), "compiled lambda text");
        Ok(text)
    }

    // ─── Depth guard ─────────────────────────────────────────────────────

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_COMPILE_DEPTH {
            return Err(Error::NestingTooDeep {
                limit: MAX_COMPILE_DEPTH,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // ─── Functions ───────────────────────────────────────────────────────

    fn function_body(&mut self, func: &'a Function, scope: &Scope) -> Result<String> {
        match &func.body {
            FunctionBody::Block(stmts) => self
                .scan(stmts, scope, ScanMode::Body)?
                .ok_or_else(|| Error::NoReturn {
                    function: func.display_name().to_string(),
                }),
            FunctionBody::Expression(expr) => self.expr(expr, scope),
        }
    }

    /// Declared global function `name`, unless a bare reference already
    /// replaced it with its compiled term.
    fn declared_function(&self, name: &str) -> Option<&'a Function> {
        match self.functions.get(name) {
            Some(GlobalEntry::Function(func)) => Some(*func),
            _ => None,
        }
    }

    fn ensure_not_recursive(&self, name: &str) -> Result<()> {
        if self.recursive.contains(name) {
            return Err(Error::UnsupportedConstruct(format!(
                "recursive function `{name}` cannot be inlined"
            )));
        }
        Ok(())
    }

    /// Inline a call to a global function: bind its parameters to the
    /// compiled arguments in a fresh scope and recompile its body.
    fn inline_call(
        &mut self,
        name: &str,
        func: &'a Function,
        arguments: &'a [Expr],
        scope: &Scope,
    ) -> Result<String> {
        self.ensure_not_recursive(name)?;
        let args = arguments
            .iter()
            .map(|arg| self.expr(arg, scope))
            .collect::<Result<Vec<_>>>()?;

        let mut callee_scope = Scope::new();
        for (i, param) in param_names(func)?.into_iter().enumerate() {
            let value = args.get(i).map_or(church::zero(), String::as_str);
            callee_scope.bind(param, value);
        }
        trace!(function = name, arguments = args.len(), "inlining call");
        self.function_body(func, &callee_scope)
    }

    /// Compile a global function referenced by name into a lambda term and
    /// cache it in the table.
    fn reference_function(&mut self, name: &str, func: &'a Function) -> Result<String> {
        self.ensure_not_recursive(name)?;
        let params = param_names(func)?;
        let body = self.function_body(func, &Scope::with_params(params.iter().copied()))?;
        let text = lambda(&params, &body);
        trace!(function = name, "caching compiled function");
        if let Some(entry) = self.functions.get_mut(name) {
            *entry = GlobalEntry::Inlined(text.clone());
        }
        Ok(text)
    }

    // ─── Statements ──────────────────────────────────────────────────────

    /// Scan `stmts` once in a child scope. Declarations are compiled eagerly
    /// into the scope; the first return (or returning switch) gives the
    /// result. `None` when nothing returns.
    fn scan(&mut self, stmts: &'a [Stmt], scope: &Scope, mode: ScanMode) -> Result<Option<String>> {
        match self.scan_until_exit(stmts, scope, mode)? {
            Exit::Return(text) => Ok(Some(text)),
            Exit::Break | Exit::End => Ok(None),
        }
    }

    fn scan_until_exit(&mut self, stmts: &'a [Stmt], scope: &Scope, mode: ScanMode) -> Result<Exit> {
        self.nested(|this| {
            let mut scope = scope.child();
            for stmt in stmts {
                match stmt {
                    Stmt::VariableDeclaration(declarators) => {
                        for decl in declarators {
                            match (&decl.target, &decl.init) {
                                (Pattern::Identifier(name), Some(init)) => {
                                    let value = this.expr(init, &scope)?;
                                    scope.bind(name.as_str(), value);
                                }
                                (Pattern::Identifier(_), None) => {}
                                (Pattern::Unsupported(kind), _) => {
                                    return Err(Error::UnsupportedConstruct(format!(
                                        "declaration pattern `{kind}`"
                                    )));
                                }
                            }
                        }
                    }
                    Stmt::Return(Some(expr)) => return this.expr(expr, &scope).map(Exit::Return),
                    Stmt::Return(None) | Stmt::Empty => {}
                    Stmt::Switch {
                        discriminant,
                        cases,
                    } => {
                        if let Some(result) = this.switch(discriminant, cases, &scope)? {
                            return Ok(Exit::Return(result));
                        }
                    }
                    Stmt::Block(inner) => match this.scan_until_exit(inner, &scope, mode)? {
                        Exit::End => {}
                        exit => return Ok(exit),
                    },
                    Stmt::Unsupported(kind) if mode == ScanMode::Case => {
                        if kind == "BreakStatement" {
                            return Ok(Exit::Break);
                        }
                        trace!(kind = kind.as_str(), "ignoring statement in switch case");
                    }
                    Stmt::FunctionDeclaration(func) => {
                        return Err(Error::UnsupportedConstruct(format!(
                            "nested function declaration `{}`",
                            func.display_name()
                        )));
                    }
                    Stmt::Unsupported(kind) => {
                        return Err(Error::UnsupportedConstruct(format!("statement `{kind}`")));
                    }
                }
            }
            Ok(Exit::End)
        })
    }

    /// Fold the cases right-to-left into nested Church conditionals. The
    /// default clause seeds the fold, otherwise Church zero does. Cases that
    /// never return are skipped.
    fn switch(
        &mut self,
        discriminant: &'a Expr,
        cases: &'a [SwitchCase],
        scope: &Scope,
    ) -> Result<Option<String>> {
        let discriminant = self.expr(discriminant, scope)?;

        let mut folded = match cases.iter().find(|case| case.test.is_none()) {
            Some(default) => self.scan(&default.consequent, scope, ScanMode::Case)?,
            None => None,
        };

        for case in cases.iter().rev() {
            let Some(test) = &case.test else {
                continue;
            };
            let test = self.expr(test, scope)?;
            let Some(result) = self.scan(&case.consequent, scope, ScanMode::Case)? else {
                trace!("skipping switch case without return");
                continue;
            };
            let remainder = folded.unwrap_or_else(|| church::zero().to_string());
            let equal = apply(church::EQ, &[&discriminant, &test]);
            folded = Some(apply(church::SELECT, &[&equal, &result, &remainder]));
        }
        Ok(folded)
    }

    // ─── Expressions ─────────────────────────────────────────────────────

    fn expr(&mut self, expr: &'a Expr, scope: &Scope) -> Result<String> {
        self.nested(|this| this.expr_inner(expr, scope))
    }

    fn expr_inner(&mut self, expr: &'a Expr, scope: &Scope) -> Result<String> {
        match expr {
            Expr::Literal(lit) => Ok(literal(lit).to_string()),
            Expr::Identifier(name) => self.identifier(name, scope),
            Expr::Binary {
                operator,
                left,
                right,
            } => {
                let left = self.expr(left, scope)?;
                let right = self.expr(right, scope)?;
                binary(operator, &left, &right)
            }
            Expr::Logical {
                operator,
                left,
                right,
            } => {
                let left = self.expr(left, scope)?;
                let right = self.expr(right, scope)?;
                match operator {
                    LogicalOperator::And => Ok(apply(church::AND, &[&left, &right])),
                    LogicalOperator::Or => Ok(apply(church::OR, &[&left, &right])),
                    LogicalOperator::Other(op) => Err(Error::UnsupportedConstruct(format!(
                        "logical operator `{op}`"
                    ))),
                }
            }
            Expr::Unary { operator, argument } => {
                let argument = self.expr(argument, scope)?;
                match operator {
                    UnaryOperator::Not => Ok(apply(church::NOT, &[&argument])),
                    UnaryOperator::Minus => Ok(apply(church::SUB, &[church::zero(), &argument])),
                    UnaryOperator::Other(op) => Err(Error::UnsupportedConstruct(format!(
                        "unary operator `{op}`"
                    ))),
                }
            }
            Expr::Call { callee, arguments } => self.call(callee, arguments, scope),
            Expr::Conditional {
                test,
                consequent,
                alternate,
            } => {
                let test = self.expr(test, scope)?;
                let consequent = self.expr(consequent, scope)?;
                let alternate = self.expr(alternate, scope)?;
                Ok(apply(church::SELECT, &[&test, &consequent, &alternate]))
            }
            Expr::Function(func) => {
                let params = param_names(func)?;
                let mut inner = scope.child();
                for param in &params {
                    inner.bind_param(param);
                }
                let body = self.function_body(func, &inner)?;
                Ok(lambda(&params, &body))
            }
            Expr::Member {
                object,
                property,
                computed,
            } => {
                let object = self.expr(object, scope)?;
                if *computed {
                    let property = self.expr(property, scope)?;
                    return Ok(apply(church::PROPERTY, &[&object, &property]));
                }
                match property.as_ref() {
                    Expr::Identifier(name) if name == "map" => Ok(apply(church::MAP, &[&object])),
                    Expr::Identifier(name) if name == "filter" => {
                        Ok(apply(church::FILTER, &[&object]))
                    }
                    Expr::Identifier(_) => Ok(apply(church::PROPERTY, &[&object, church::IDENTITY])),
                    _ => Err(Error::UnsupportedConstruct(
                        "member expression property".to_string(),
                    )),
                }
            }
            Expr::Unsupported(kind) => Err(Error::UnsupportedConstruct(format!(
                "expression `{kind}`"
            ))),
        }
    }

    fn identifier(&mut self, name: &str, scope: &Scope) -> Result<String> {
        if let Some(text) = scope.lookup(name) {
            return Ok(text.to_string());
        }
        match self.functions.get(name) {
            Some(GlobalEntry::Inlined(text)) => Ok(text.clone()),
            Some(GlobalEntry::Function(func)) => {
                let func = *func;
                self.reference_function(name, func)
            }
            // Free variable: not valid pure lambda calculus, kept by name.
            None => Ok(name.to_string()),
        }
    }

    fn call(&mut self, callee: &'a Expr, arguments: &'a [Expr], scope: &Scope) -> Result<String> {
        if let Expr::Identifier(name) = callee {
            if !scope.contains(name) {
                if let Some(func) = self.declared_function(name) {
                    return self.inline_call(name, func, arguments, scope);
                }
            }
        }

        let callee = self.expr(callee, scope)?;
        let args = arguments
            .iter()
            .map(|arg| self.expr(arg, scope))
            .collect::<Result<Vec<_>>>()?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        Ok(apply(&callee, &args))
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn param_names(func: &Function) -> Result<Vec<&str>> {
    func.params
        .iter()
        .map(|param| match param {
            Pattern::Identifier(name) => Ok(name.as_str()),
            Pattern::Unsupported(kind) => Err(Error::UnsupportedConstruct(format!(
                "parameter pattern `{kind}`"
            ))),
        })
        .collect()
}

/// `λa.λb` for `[a, b]`.
fn binders(params: &[&str]) -> String {
    params
        .iter()
        .map(|param| format!("λ{param}"))
        .collect::<Vec<_>>()
        .join(".")
}

/// Parenthesized lambda term; a parameterless function is just its body.
fn lambda(params: &[&str], body: &str) -> String {
    if params.is_empty() {
        format!("({body})")
    } else {
        format!("({}.{body})", binders(params))
    }
}

fn literal(lit: &Literal) -> &'static str {
    match lit {
        Literal::Number(value) if (0.0..=church::MAX_NUMERAL as f64).contains(value) => {
            church::numeral(value.round() as usize).unwrap_or(church::zero())
        }
        Literal::Boolean(true) => church::TRUE,
        Literal::Boolean(false) => church::FALSE,
        // Strings, out-of-range numbers, null: lossy fallback.
        _ => church::zero(),
    }
}

fn binary(operator: &BinaryOperator, left: &str, right: &str) -> Result<String> {
    let text = match operator {
        BinaryOperator::Add => apply(church::ADD, &[left, right]),
        BinaryOperator::Sub => apply(church::SUB, &[left, right]),
        BinaryOperator::Mul => apply(church::MUL, &[left, right]),
        BinaryOperator::Div => apply(church::DIV, &[left, right]),
        BinaryOperator::Eq | BinaryOperator::StrictEq => apply(church::EQ, &[left, right]),
        BinaryOperator::NotEq | BinaryOperator::StrictNotEq => {
            apply(church::NOT, &[&apply(church::EQ, &[left, right])])
        }
        BinaryOperator::Lt => apply(church::LT, &[left, right]),
        BinaryOperator::LtEq => apply(church::LE, &[left, right]),
        BinaryOperator::Gt => apply(church::LT, &[right, left]),
        BinaryOperator::GtEq => apply(church::GE, &[left, right]),
        BinaryOperator::Other(op) => {
            return Err(Error::UnsupportedConstruct(format!(
                "binary operator `{op}`"
            )));
        }
    };
    Ok(text)
}

/// Compile `program` starting from its first declared function.
pub fn compile(program: &Program) -> Result<String> {
    Compiler::new(program)?.compile()
}

#[cfg(test)]
#[path = "../../tests/rust/test_compiler.rs"]
mod tests;
