//! AST for the compilable JavaScript/TypeScript subset.
//!
//! Closed enums per grammar category. Node kinds the compiler does not
//! understand are kept as `Unsupported(kind)` so rejection happens in the
//! compiler, where the enclosing context is known.

// ─── Program ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }

    /// Named top-level function declarations, in source order.
    pub fn function_declarations(&self) -> impl Iterator<Item = (&str, &Function)> {
        self.body.iter().filter_map(|stmt| match stmt {
            Stmt::FunctionDeclaration(func) => func.name.as_deref().map(|name| (name, func)),
            _ => None,
        })
    }
}

// ─── Functions ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// `None` for anonymous function expressions and arrows.
    pub name: Option<String>,
    pub params: Vec<Pattern>,
    pub body: FunctionBody,
}

impl Function {
    pub fn new(name: Option<String>, params: Vec<Pattern>, body: FunctionBody) -> Self {
        Self { name, params, body }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionBody {
    Block(Vec<Stmt>),
    /// Concise arrow body: `x => x + 1`.
    Expression(Box<Expr>),
}

/// Binding target of a parameter or declarator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Identifier(String),
    /// Destructuring, defaults, rest elements, ... (node kind kept for errors).
    Unsupported(String),
}

// ─── Statements ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    FunctionDeclaration(Function),
    VariableDeclaration(Vec<Declarator>),
    Return(Option<Expr>),
    Switch {
        discriminant: Expr,
        cases: Vec<SwitchCase>,
    },
    Block(Vec<Stmt>),
    Empty,
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub target: Pattern,
    pub init: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// `None` marks the `default` clause.
    pub test: Option<Expr>,
    pub consequent: Vec<Stmt>,
}

// ─── Expressions ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Boolean(bool),
    String(String),
    Null,
    /// Regex, bigint, ...
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    StrictEq,
    NotEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Other(String),
}

impl BinaryOperator {
    pub fn from_token(op: &str) -> Self {
        match op {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "==" => Self::Eq,
            "===" => Self::StrictEq,
            "!=" => Self::NotEq,
            "!==" => Self::StrictNotEq,
            "<" => Self::Lt,
            "<=" => Self::LtEq,
            ">" => Self::Gt,
            ">=" => Self::GtEq,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
    Other(String),
}

impl LogicalOperator {
    pub fn from_token(op: &str) -> Self {
        match op {
            "&&" => Self::And,
            "||" => Self::Or,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Minus,
    Other(String),
}

impl UnaryOperator {
    pub fn from_token(op: &str) -> Self {
        match op {
            "!" => Self::Not,
            "-" => Self::Minus,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(String),
    Binary {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        operator: LogicalOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        operator: UnaryOperator,
        argument: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    /// Arrow function or function expression.
    Function(Function),
    Member {
        object: Box<Expr>,
        property: Box<Expr>,
        computed: bool,
    },
    Unsupported(String),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn number(value: f64) -> Self {
        Expr::Literal(Literal::Number(value))
    }

    pub fn binary(operator: &str, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator: BinaryOperator::from_token(operator),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            arguments,
        }
    }
}
