//! Call-graph analysis over top-level functions.
//!
//! Inlining re-expands a callee's body at every use, so a function that can
//! reach itself through references would expand forever. Functions on a
//! cycle of the call graph are found up front and refused by the compiler.

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::syntax::ast::{Expr, Function, FunctionBody, Pattern, Stmt};

/// Names bound by parameters and declarations at one point of a body. They
/// shadow globals of the same name, so using them is not a reference.
type Locals<'a> = HashSet<&'a str>;

/// Names of functions that reach themselves, directly or mutually.
pub fn recursive_functions<'a>(functions: &HashMap<&'a str, &'a Function>) -> HashSet<String> {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut index: HashMap<&str, NodeIndex> = HashMap::new();

    let mut names: Vec<&str> = functions.keys().copied().collect();
    names.sort_unstable();
    for &name in &names {
        index.insert(name, graph.add_node(name));
    }

    for &name in &names {
        let mut refs = Vec::new();
        references_in_function(functions[name], &Locals::new(), &mut refs);
        for callee in refs {
            if let Some(&to) = index.get(callee) {
                graph.update_edge(index[name], to, ());
            }
        }
    }

    let mut recursive = HashSet::new();
    for component in tarjan_scc(&graph) {
        let cyclic = component.len() > 1
            || component
                .first()
                .is_some_and(|&n| graph.contains_edge(n, n));
        if cyclic {
            recursive.extend(component.iter().map(|&n| graph[n].to_string()));
        }
    }
    recursive
}

fn references_in_function<'a>(func: &'a Function, locals: &Locals<'a>, out: &mut Vec<&'a str>) {
    let mut locals = locals.clone();
    for param in &func.params {
        if let Pattern::Identifier(name) = param {
            locals.insert(name.as_str());
        }
    }
    match &func.body {
        FunctionBody::Block(stmts) => references_in_stmts(stmts, &locals, out),
        FunctionBody::Expression(expr) => references_in_expr(expr, &locals, out),
    }
}

/// Walks statements in order, as the compiler scans them: a declaration
/// shadows only what follows it, and nothing after a return is compiled.
fn references_in_stmts<'a>(stmts: &'a [Stmt], locals: &Locals<'a>, out: &mut Vec<&'a str>) {
    let mut locals = locals.clone();
    for stmt in stmts {
        match stmt {
            Stmt::FunctionDeclaration(func) => references_in_function(func, &locals, out),
            Stmt::VariableDeclaration(declarators) => {
                for decl in declarators {
                    if let Some(init) = &decl.init {
                        references_in_expr(init, &locals, out);
                        // Uninitialised declarations never enter the scope.
                        if let Pattern::Identifier(name) = &decl.target {
                            locals.insert(name.as_str());
                        }
                    }
                }
            }
            Stmt::Return(Some(expr)) => {
                references_in_expr(expr, &locals, out);
                break;
            }
            Stmt::Switch {
                discriminant,
                cases,
            } => {
                references_in_expr(discriminant, &locals, out);
                for case in cases {
                    if let Some(test) = &case.test {
                        references_in_expr(test, &locals, out);
                    }
                    references_in_stmts(&case.consequent, &locals, out);
                }
            }
            Stmt::Block(inner) => references_in_stmts(inner, &locals, out),
            Stmt::Return(None) | Stmt::Empty | Stmt::Unsupported(_) => {}
        }
    }
}

fn references_in_expr<'a>(expr: &'a Expr, locals: &Locals<'a>, out: &mut Vec<&'a str>) {
    match expr {
        Expr::Identifier(name) => {
            if !locals.contains(name.as_str()) {
                out.push(name);
            }
        }
        Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
            references_in_expr(left, locals, out);
            references_in_expr(right, locals, out);
        }
        Expr::Unary { argument, .. } => references_in_expr(argument, locals, out),
        Expr::Call { callee, arguments } => {
            references_in_expr(callee, locals, out);
            for arg in arguments {
                references_in_expr(arg, locals, out);
            }
        }
        Expr::Conditional {
            test,
            consequent,
            alternate,
        } => {
            references_in_expr(test, locals, out);
            references_in_expr(consequent, locals, out);
            references_in_expr(alternate, locals, out);
        }
        Expr::Function(func) => references_in_function(func, locals, out),
        Expr::Member {
            object,
            property,
            computed,
        } => {
            references_in_expr(object, locals, out);
            if *computed {
                references_in_expr(property, locals, out);
            }
        }
        Expr::Literal(_) | Expr::Unsupported(_) => {}
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_compiler_recursion.rs"]
mod tests;
