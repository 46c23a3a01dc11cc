//! ESTree adapter: converts the JSON syntax tree emitted by an external
//! JavaScript/TypeScript front end (acorn, espree, typescript-estree, babel)
//! into the closed AST in [`crate::syntax::ast`].
//!
//! Structural problems (invalid JSON, a node without `type`, a missing
//! required child) are `MalformedAst`. Well-formed nodes of kinds outside
//! the subset become `Unsupported(kind)` and are rejected by the compiler.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::syntax::ast::{
    BinaryOperator, Declarator, Expr, Function, FunctionBody, Literal, LogicalOperator, Pattern,
    Program, Stmt, SwitchCase, UnaryOperator,
};

/// Parse ESTree JSON text into a [`Program`].
pub fn parse_program(json: &str) -> Result<Program> {
    let root: Value = serde_json::from_str(json)?;
    program_from_value(&root)
}

/// Convert an already-decoded ESTree value. Accepts a `Program` node or a
/// babel-style `File` wrapper around one.
pub fn program_from_value(root: &Value) -> Result<Program> {
    match node_type(root)? {
        "Program" => {
            let body = array(root, "body")?
                .iter()
                .map(statement)
                .collect::<Result<Vec<_>>>()?;
            Ok(Program::new(body))
        }
        "File" => program_from_value(child(root, "program")?),
        other => Err(Error::MalformedAst(format!(
            "expected a Program node at the root, found `{other}`"
        ))),
    }
}

// ─── Field access ────────────────────────────────────────────────────────────

fn node_type(node: &Value) -> Result<&str> {
    node.get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::MalformedAst("node without a `type` field".to_string()))
}

fn child<'a>(node: &'a Value, field: &str) -> Result<&'a Value> {
    match node.get(field) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(Error::MalformedAst(format!(
            "`{}` node is missing `{field}`",
            node_type(node).unwrap_or("?")
        ))),
    }
}

/// A child that ESTree allows to be `null`.
fn optional_child<'a>(node: &'a Value, field: &str) -> Option<&'a Value> {
    node.get(field).filter(|value| !value.is_null())
}

fn array<'a>(node: &'a Value, field: &str) -> Result<&'a Vec<Value>> {
    child(node, field)?.as_array().ok_or_else(|| {
        Error::MalformedAst(format!(
            "`{field}` of `{}` is not an array",
            node_type(node).unwrap_or("?")
        ))
    })
}

fn string<'a>(node: &'a Value, field: &str) -> Result<&'a str> {
    child(node, field)?.as_str().ok_or_else(|| {
        Error::MalformedAst(format!(
            "`{field}` of `{}` is not a string",
            node_type(node).unwrap_or("?")
        ))
    })
}

fn identifier_name(node: &Value) -> Result<String> {
    Ok(string(node, "name")?.to_string())
}

// ─── Statements ──────────────────────────────────────────────────────────────

fn statement(node: &Value) -> Result<Stmt> {
    let stmt = match node_type(node)? {
        "FunctionDeclaration" => Stmt::FunctionDeclaration(function(node)?),
        "VariableDeclaration" => {
            let declarators = array(node, "declarations")?
                .iter()
                .map(declarator)
                .collect::<Result<Vec<_>>>()?;
            Stmt::VariableDeclaration(declarators)
        }
        "ReturnStatement" => Stmt::Return(
            optional_child(node, "argument")
                .map(expression)
                .transpose()?,
        ),
        "SwitchStatement" => Stmt::Switch {
            discriminant: expression(child(node, "discriminant")?)?,
            cases: array(node, "cases")?
                .iter()
                .map(switch_case)
                .collect::<Result<Vec<_>>>()?,
        },
        "BlockStatement" => Stmt::Block(block(node)?),
        "EmptyStatement" => Stmt::Empty,
        kind @ ("ExportNamedDeclaration" | "ExportDefaultDeclaration") => {
            let Some(decl) = optional_child(node, "declaration") else {
                return Ok(Stmt::Unsupported(kind.to_string()));
            };
            match node_type(decl)? {
                "FunctionDeclaration" => Stmt::FunctionDeclaration(function(decl)?),
                "VariableDeclaration" => statement(decl)?,
                _ => Stmt::Unsupported(kind.to_string()),
            }
        }
        other => Stmt::Unsupported(other.to_string()),
    };
    Ok(stmt)
}

fn block(node: &Value) -> Result<Vec<Stmt>> {
    array(node, "body")?.iter().map(statement).collect()
}

fn declarator(node: &Value) -> Result<Declarator> {
    Ok(Declarator {
        target: pattern(child(node, "id")?)?,
        init: optional_child(node, "init").map(expression).transpose()?,
    })
}

fn switch_case(node: &Value) -> Result<SwitchCase> {
    Ok(SwitchCase {
        test: optional_child(node, "test").map(expression).transpose()?,
        consequent: array(node, "consequent")?
            .iter()
            .map(statement)
            .collect::<Result<Vec<_>>>()?,
    })
}

fn pattern(node: &Value) -> Result<Pattern> {
    Ok(match node_type(node)? {
        "Identifier" => Pattern::Identifier(identifier_name(node)?),
        other => Pattern::Unsupported(other.to_string()),
    })
}

/// Shared by declarations, function expressions, and arrows.
fn function(node: &Value) -> Result<Function> {
    let name = optional_child(node, "id").map(identifier_name).transpose()?;
    let params = array(node, "params")?
        .iter()
        .map(pattern)
        .collect::<Result<Vec<_>>>()?;
    let body_node = child(node, "body")?;
    let body = if node_type(body_node)? == "BlockStatement" {
        FunctionBody::Block(block(body_node)?)
    } else {
        FunctionBody::Expression(Box::new(expression(body_node)?))
    };
    Ok(Function::new(name, params, body))
}

// ─── Expressions ─────────────────────────────────────────────────────────────

fn expression(node: &Value) -> Result<Expr> {
    let expr = match node_type(node)? {
        "Literal" => Expr::Literal(literal(node)),
        "NumericLiteral" | "BooleanLiteral" | "StringLiteral" => Expr::Literal(literal(node)),
        "NullLiteral" => Expr::Literal(Literal::Null),
        "Identifier" => Expr::Identifier(identifier_name(node)?),
        "BinaryExpression" => Expr::Binary {
            operator: BinaryOperator::from_token(string(node, "operator")?),
            left: Box::new(expression(child(node, "left")?)?),
            right: Box::new(expression(child(node, "right")?)?),
        },
        "LogicalExpression" => Expr::Logical {
            operator: LogicalOperator::from_token(string(node, "operator")?),
            left: Box::new(expression(child(node, "left")?)?),
            right: Box::new(expression(child(node, "right")?)?),
        },
        "UnaryExpression" => Expr::Unary {
            operator: UnaryOperator::from_token(string(node, "operator")?),
            argument: Box::new(expression(child(node, "argument")?)?),
        },
        "CallExpression" => Expr::Call {
            callee: Box::new(expression(child(node, "callee")?)?),
            arguments: array(node, "arguments")?
                .iter()
                .map(expression)
                .collect::<Result<Vec<_>>>()?,
        },
        "ConditionalExpression" => Expr::Conditional {
            test: Box::new(expression(child(node, "test")?)?),
            consequent: Box::new(expression(child(node, "consequent")?)?),
            alternate: Box::new(expression(child(node, "alternate")?)?),
        },
        "ArrowFunctionExpression" | "FunctionExpression" => Expr::Function(function(node)?),
        "MemberExpression" => Expr::Member {
            object: Box::new(expression(child(node, "object")?)?),
            property: Box::new(expression(child(node, "property")?)?),
            computed: node.get("computed").and_then(Value::as_bool).unwrap_or(false),
        },
        // Type-only wrappers are erased.
        "TSAsExpression" | "TSNonNullExpression" | "TSSatisfiesExpression" | "TSTypeAssertion"
        | "ParenthesizedExpression" => expression(child(node, "expression")?)?,
        other => Expr::Unsupported(other.to_string()),
    };
    Ok(expr)
}

fn literal(node: &Value) -> Literal {
    if optional_child(node, "regex").is_some() || optional_child(node, "bigint").is_some() {
        return Literal::Other;
    }
    match node.get("value") {
        Some(Value::Number(n)) => n.as_f64().map_or(Literal::Other, Literal::Number),
        Some(Value::Bool(b)) => Literal::Boolean(*b),
        Some(Value::String(s)) => Literal::String(s.clone()),
        Some(Value::Null) | None => Literal::Null,
        Some(_) => Literal::Other,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_estree.rs"]
mod tests;
