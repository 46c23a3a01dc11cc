use super::*;
use crate::syntax::ast::Declarator;
use pretty_assertions::assert_eq;

fn func(name: &str, params: &[&str], body: Vec<Stmt>) -> Stmt {
    Stmt::FunctionDeclaration(Function::new(
        Some(name.to_string()),
        params
            .iter()
            .map(|p| Pattern::Identifier(p.to_string()))
            .collect(),
        FunctionBody::Block(body),
    ))
}

fn ret(expr: Expr) -> Stmt {
    Stmt::Return(Some(expr))
}

fn constant(name: &str, init: Expr) -> Stmt {
    Stmt::VariableDeclaration(vec![Declarator {
        target: Pattern::Identifier(name.to_string()),
        init: Some(init),
    }])
}

fn case(test: Option<Expr>, consequent: Vec<Stmt>) -> SwitchCase {
    SwitchCase { test, consequent }
}

fn member(object: &str, property: &str) -> Expr {
    Expr::Member {
        object: Box::new(Expr::ident(object)),
        property: Box::new(Expr::ident(property)),
        computed: false,
    }
}

fn compile_stmts(body: Vec<Stmt>) -> Result<String> {
    compile(&Program::new(body))
}

fn one() -> &'static str {
    church::numeral(1).unwrap()
}

fn two() -> &'static str {
    church::numeral(2).unwrap()
}

// ─── Entry point ─────────────────────────────────────────────────────────────

#[test]
fn test_add_function() {
    let text = compile_stmts(vec![func(
        "add",
        &["a", "b"],
        vec![ret(Expr::binary("+", Expr::ident("a"), Expr::ident("b")))],
    )])
    .unwrap();
    assert_eq!(text, "λa.λb.((λm.λn.λf.λx.m f (n f x)) a b)");
}

#[test]
fn test_is_zero_uses_cached_zero() {
    let text = compile_stmts(vec![func(
        "isZero",
        &["n"],
        vec![ret(Expr::binary("===", Expr::ident("n"), Expr::number(0.0)))],
    )])
    .unwrap();
    assert_eq!(
        text,
        "λn.((λm.λn.((m n) (λx.λy.y)) (λx.λy.x)) n (λf.λx.x))"
    );
}

#[test]
fn test_zero_parameter_entry_has_no_binders() {
    let text = compile_stmts(vec![func("answer", &[], vec![ret(Expr::number(2.0))])]).unwrap();
    assert_eq!(text, two());
}

#[test]
fn test_first_declaration_is_entry() {
    let text = compile_stmts(vec![
        func("first", &["x"], vec![ret(Expr::ident("x"))]),
        func("second", &["y"], vec![ret(Expr::ident("y"))]),
    ])
    .unwrap();
    assert_eq!(text, "λx.x");
}

#[test]
fn test_compilation_is_deterministic() {
    let program = Program::new(vec![
        func(
            "main",
            &["x"],
            vec![ret(Expr::call(Expr::ident("double"), vec![Expr::ident("x")]))],
        ),
        func(
            "double",
            &["n"],
            vec![ret(Expr::binary("*", Expr::ident("n"), Expr::number(2.0)))],
        ),
    ]);
    assert_eq!(compile(&program).unwrap(), compile(&program).unwrap());
}

// ─── Calls and references ────────────────────────────────────────────────────

#[test]
fn test_call_to_global_is_inlined() {
    let text = compile_stmts(vec![
        func(
            "main",
            &["x"],
            vec![ret(Expr::call(Expr::ident("double"), vec![Expr::ident("x")]))],
        ),
        func(
            "double",
            &["n"],
            vec![ret(Expr::binary("+", Expr::ident("n"), Expr::ident("n")))],
        ),
    ])
    .unwrap();
    assert_eq!(text, format!("λx.{}", church::apply(church::ADD, &["x", "x"])));
}

#[test]
fn test_inlined_arguments_are_compiled_in_caller_scope() {
    let text = compile_stmts(vec![
        func(
            "main",
            &["x"],
            vec![ret(Expr::call(
                Expr::ident("id"),
                vec![Expr::binary("+", Expr::ident("x"), Expr::number(1.0))],
            ))],
        ),
        func("id", &["n"], vec![ret(Expr::ident("n"))]),
    ])
    .unwrap();
    assert_eq!(text, format!("λx.{}", church::apply(church::ADD, &["x", one()])));
}

#[test]
fn test_missing_arguments_bind_zero() {
    let text = compile_stmts(vec![
        func(
            "main",
            &[],
            vec![ret(Expr::call(Expr::ident("add"), vec![Expr::number(1.0)]))],
        ),
        func(
            "add",
            &["a", "b"],
            vec![ret(Expr::binary("+", Expr::ident("a"), Expr::ident("b")))],
        ),
    ])
    .unwrap();
    assert_eq!(text, church::apply(church::ADD, &[one(), church::zero()]));
}

#[test]
fn test_bare_reference_compiles_to_lambda() {
    let text = compile_stmts(vec![
        func("main", &[], vec![ret(Expr::ident("inc"))]),
        func(
            "inc",
            &["n"],
            vec![ret(Expr::binary("+", Expr::ident("n"), Expr::number(1.0)))],
        ),
    ])
    .unwrap();
    assert_eq!(
        text,
        format!("(λn.{})", church::apply(church::ADD, &["n", one()]))
    );
}

#[test]
fn test_reference_is_cached_for_later_calls() {
    // function main() { const g = inc; return inc(g); }
    let text = compile_stmts(vec![
        func(
            "main",
            &[],
            vec![
                constant("g", Expr::ident("inc")),
                ret(Expr::call(Expr::ident("inc"), vec![Expr::ident("g")])),
            ],
        ),
        func("inc", &["n"], vec![ret(Expr::ident("n"))]),
    ])
    .unwrap();
    // After the bare reference, `inc` is a compiled term and the call is a
    // plain application of it.
    assert_eq!(text, "((λn.n) (λn.n))");
}

#[test]
fn test_local_binding_shadows_global_function() {
    let text = compile_stmts(vec![
        func(
            "main",
            &["double"],
            vec![ret(Expr::call(Expr::ident("double"), vec![Expr::number(2.0)]))],
        ),
        func(
            "double",
            &["n"],
            vec![ret(Expr::binary("+", Expr::ident("n"), Expr::ident("n")))],
        ),
    ])
    .unwrap();
    assert_eq!(text, format!("λdouble.(double {})", two()));
}

#[test]
fn test_unknown_callee_is_generic_application() {
    let text = compile_stmts(vec![func(
        "main",
        &["x"],
        vec![ret(Expr::call(
            Expr::ident("f"),
            vec![Expr::ident("x"), Expr::ident("y")],
        ))],
    )])
    .unwrap();
    assert_eq!(text, "λx.(f x y)");
}

// ─── Statements ──────────────────────────────────────────────────────────────

#[test]
fn test_const_binding_is_substituted() {
    let text = compile_stmts(vec![func(
        "main",
        &["a"],
        vec![
            constant(
                "b",
                Expr::binary("+", Expr::ident("a"), Expr::number(1.0)),
            ),
            ret(Expr::binary("*", Expr::ident("b"), Expr::number(2.0))),
        ],
    )])
    .unwrap();
    let b = church::apply(church::ADD, &["a", one()]);
    assert_eq!(text, format!("λa.{}", church::apply(church::MUL, &[&b, two()])));
}

#[test]
fn test_bare_return_is_skipped() {
    let text = compile_stmts(vec![func(
        "main",
        &["a"],
        vec![Stmt::Return(None), Stmt::Empty, ret(Expr::ident("a"))],
    )])
    .unwrap();
    assert_eq!(text, "λa.a");
}

#[test]
fn test_block_bindings_do_not_leak() {
    // function main(a) { { const a = 1; } return a; }
    let text = compile_stmts(vec![func(
        "main",
        &["a"],
        vec![
            Stmt::Block(vec![constant("a", Expr::number(1.0))]),
            ret(Expr::ident("a")),
        ],
    )])
    .unwrap();
    assert_eq!(text, "λa.a");
}

#[test]
fn test_switch_with_default() {
    let text = compile_stmts(vec![func(
        "pick",
        &["n", "a", "b", "c"],
        vec![Stmt::Switch {
            discriminant: Expr::ident("n"),
            cases: vec![
                case(Some(Expr::number(1.0)), vec![ret(Expr::ident("a"))]),
                case(Some(Expr::number(2.0)), vec![ret(Expr::ident("b"))]),
                case(None, vec![ret(Expr::ident("c"))]),
            ],
        }],
    )])
    .unwrap();

    let inner = church::apply(
        church::SELECT,
        &[&church::apply(church::EQ, &["n", two()]), "b", "c"],
    );
    let outer = church::apply(
        church::SELECT,
        &[&church::apply(church::EQ, &["n", one()]), "a", &inner],
    );
    assert_eq!(text, format!("λn.λa.λb.λc.{outer}"));
    assert!(!text.contains(church::zero()));
}

#[test]
fn test_switch_without_default_falls_back_to_zero() {
    let text = compile_stmts(vec![func(
        "pick",
        &["n"],
        vec![Stmt::Switch {
            discriminant: Expr::ident("n"),
            cases: vec![case(Some(Expr::number(1.0)), vec![ret(Expr::ident("n"))])],
        }],
    )])
    .unwrap();
    let expected = church::apply(
        church::SELECT,
        &[
            &church::apply(church::EQ, &["n", one()]),
            "n",
            church::zero(),
        ],
    );
    assert_eq!(text, format!("λn.{expected}"));
}

#[test]
fn test_switch_case_locals_and_breaks() {
    // case 1: const m = n + 1; return m;   case 2: foo(); break;
    let text = compile_stmts(vec![func(
        "pick",
        &["n"],
        vec![Stmt::Switch {
            discriminant: Expr::ident("n"),
            cases: vec![
                case(
                    Some(Expr::number(1.0)),
                    vec![
                        constant("m", Expr::binary("+", Expr::ident("n"), Expr::number(1.0))),
                        ret(Expr::ident("m")),
                    ],
                ),
                case(
                    Some(Expr::number(2.0)),
                    vec![
                        Stmt::Unsupported("ExpressionStatement".to_string()),
                        Stmt::Unsupported("BreakStatement".to_string()),
                    ],
                ),
                case(None, vec![ret(Expr::ident("n"))]),
            ],
        }],
    )])
    .unwrap();
    let m = church::apply(church::ADD, &["n", one()]);
    let expected = church::apply(
        church::SELECT,
        &[&church::apply(church::EQ, &["n", one()]), &m, "n"],
    );
    assert_eq!(text, format!("λn.{expected}"));
}

#[test]
fn test_break_inside_block_ends_the_case() {
    // case 1: { break; } return 1;   default: return n;
    let text = compile_stmts(vec![func(
        "pick",
        &["n"],
        vec![Stmt::Switch {
            discriminant: Expr::ident("n"),
            cases: vec![
                case(
                    Some(Expr::number(1.0)),
                    vec![
                        Stmt::Block(vec![Stmt::Unsupported("BreakStatement".to_string())]),
                        ret(Expr::number(1.0)),
                    ],
                ),
                case(None, vec![ret(Expr::ident("n"))]),
            ],
        }],
    )])
    .unwrap();
    assert_eq!(text, "λn.n");
}

#[test]
fn test_switch_without_returns_continues_scan() {
    let text = compile_stmts(vec![func(
        "main",
        &["n"],
        vec![
            Stmt::Switch {
                discriminant: Expr::ident("n"),
                cases: vec![case(
                    Some(Expr::number(1.0)),
                    vec![Stmt::Unsupported("BreakStatement".to_string())],
                )],
            },
            ret(Expr::ident("n")),
        ],
    )])
    .unwrap();
    assert_eq!(text, "λn.n");
}

// ─── Expressions ─────────────────────────────────────────────────────────────

fn compile_expr(params: &[&str], expr: Expr) -> String {
    compile_stmts(vec![func("main", params, vec![ret(expr)])]).unwrap()
}

#[test]
fn test_literals() {
    assert_eq!(
        compile_expr(&[], Expr::Literal(Literal::Boolean(true))),
        church::TRUE
    );
    assert_eq!(
        compile_expr(&[], Expr::Literal(Literal::Boolean(false))),
        church::FALSE
    );
    assert_eq!(compile_expr(&[], Expr::number(1.6)), two());
    assert_eq!(compile_expr(&[], Expr::number(500.0)), church::zero());
    assert_eq!(compile_expr(&[], Expr::number(-3.0)), church::zero());
    assert_eq!(
        compile_expr(&[], Expr::Literal(Literal::String("s".to_string()))),
        church::zero()
    );
}

#[test]
fn test_comparison_operators() {
    let cmp = |op: &str| compile_expr(&[], Expr::binary(op, Expr::ident("a"), Expr::ident("b")));
    assert_eq!(cmp("<"), church::apply(church::LT, &["a", "b"]));
    assert_eq!(cmp(">"), church::apply(church::LT, &["b", "a"]));
    assert_eq!(cmp("<="), church::apply(church::LE, &["a", "b"]));
    assert_eq!(cmp(">="), church::apply(church::GE, &["a", "b"]));
    assert_eq!(cmp("=="), church::apply(church::EQ, &["a", "b"]));
    assert_eq!(
        cmp("!=="),
        church::apply(church::NOT, &[&church::apply(church::EQ, &["a", "b"])])
    );
    assert_eq!(cmp("-"), church::apply(church::SUB, &["a", "b"]));
    assert_eq!(cmp("/"), church::apply(church::DIV, &["a", "b"]));
}

#[test]
fn test_logical_and_unary_operators() {
    let and = Expr::Logical {
        operator: LogicalOperator::And,
        left: Box::new(Expr::ident("p")),
        right: Box::new(Expr::ident("q")),
    };
    assert_eq!(compile_expr(&[], and), "((λp.λq.p q p) p q)");

    let or = Expr::Logical {
        operator: LogicalOperator::Or,
        left: Box::new(Expr::ident("p")),
        right: Box::new(Expr::ident("q")),
    };
    assert_eq!(compile_expr(&[], or), "((λp.λq.p p q) p q)");

    let not = Expr::Unary {
        operator: UnaryOperator::Not,
        argument: Box::new(Expr::ident("p")),
    };
    assert_eq!(compile_expr(&[], not), church::apply(church::NOT, &["p"]));

    let negate = Expr::Unary {
        operator: UnaryOperator::Minus,
        argument: Box::new(Expr::ident("a")),
    };
    assert_eq!(
        compile_expr(&[], negate),
        church::apply(church::SUB, &[church::zero(), "a"])
    );
}

#[test]
fn test_conditional() {
    let text = compile_expr(
        &["p", "a", "b"],
        Expr::Conditional {
            test: Box::new(Expr::ident("p")),
            consequent: Box::new(Expr::ident("a")),
            alternate: Box::new(Expr::ident("b")),
        },
    );
    assert_eq!(text, "λp.λa.λb.((λp.λa.λb.p a b) p a b)");
}

#[test]
fn test_arrow_function_expression() {
    let arrow = Expr::Function(Function::new(
        None,
        vec![Pattern::Identifier("x".to_string())],
        FunctionBody::Expression(Box::new(Expr::binary(
            "+",
            Expr::ident("x"),
            Expr::number(1.0),
        ))),
    ));
    assert_eq!(
        compile_expr(&[], arrow),
        format!("(λx.{})", church::apply(church::ADD, &["x", one()]))
    );
}

#[test]
fn test_member_access_stand_ins() {
    assert_eq!(
        compile_expr(&["xs"], member("xs", "map")),
        "λxs.((λarr.λf.arr f) xs)"
    );
    assert_eq!(
        compile_expr(&["xs"], member("xs", "filter")),
        "λxs.((λarr.λpred.arr (λx.pred x)) xs)"
    );
    assert_eq!(
        compile_expr(&["o"], member("o", "length")),
        "λo.((λobj.λprop.obj prop) o (λx.x))"
    );
    let computed = Expr::Member {
        object: Box::new(Expr::ident("o")),
        property: Box::new(Expr::ident("k")),
        computed: true,
    };
    assert_eq!(
        compile_expr(&["o", "k"], computed),
        "λo.λk.((λobj.λprop.obj prop) o k)"
    );
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn test_no_entry_point() {
    assert_eq!(compile_stmts(vec![]), Err(Error::NoEntryPoint));
    assert_eq!(
        compile_stmts(vec![constant("x", Expr::number(1.0))]),
        Err(Error::NoEntryPoint)
    );
}

#[test]
fn test_no_return_names_function() {
    assert_eq!(
        compile_stmts(vec![func("noop", &["x"], vec![])]),
        Err(Error::NoReturn {
            function: "noop".to_string()
        })
    );
}

#[test]
fn test_unsupported_statement() {
    let result = compile_stmts(vec![func(
        "main",
        &[],
        vec![Stmt::Unsupported("WhileStatement".to_string())],
    )]);
    assert!(
        matches!(result, Err(Error::UnsupportedConstruct(ref msg)) if msg.contains("WhileStatement"))
    );
}

#[test]
fn test_unsupported_operator() {
    let result = compile_stmts(vec![func(
        "main",
        &["a"],
        vec![ret(Expr::binary("%", Expr::ident("a"), Expr::number(2.0)))],
    )]);
    assert!(matches!(result, Err(Error::UnsupportedConstruct(ref msg)) if msg.contains('%')));
}

#[test]
fn test_unsupported_parameter_pattern() {
    let result = compile(&Program::new(vec![Stmt::FunctionDeclaration(Function::new(
        Some("main".to_string()),
        vec![Pattern::Unsupported("ArrayPattern".to_string())],
        FunctionBody::Block(vec![ret(Expr::number(0.0))]),
    ))]));
    assert!(matches!(result, Err(Error::UnsupportedConstruct(ref msg)) if msg.contains("ArrayPattern")));
}

#[test]
fn test_recursive_call_is_rejected() {
    let result = compile_stmts(vec![
        func(
            "main",
            &["n"],
            vec![ret(Expr::call(Expr::ident("fact"), vec![Expr::ident("n")]))],
        ),
        func(
            "fact",
            &["n"],
            vec![ret(Expr::binary(
                "*",
                Expr::ident("n"),
                Expr::call(
                    Expr::ident("fact"),
                    vec![Expr::binary("-", Expr::ident("n"), Expr::number(1.0))],
                ),
            ))],
        ),
    ]);
    assert!(matches!(result, Err(Error::UnsupportedConstruct(ref msg)) if msg.contains("fact")));
}

#[test]
fn test_unused_recursive_function_is_harmless() {
    let text = compile_stmts(vec![
        func("main", &["n"], vec![ret(Expr::ident("n"))]),
        func(
            "spin",
            &["n"],
            vec![ret(Expr::call(Expr::ident("spin"), vec![Expr::ident("n")]))],
        ),
    ])
    .unwrap();
    assert_eq!(text, "λn.n");
}

#[test]
fn test_parameter_named_like_a_global_is_not_recursion() {
    // `g` inside `f` is the parameter, so `f` never reaches itself.
    let text = compile_stmts(vec![
        func(
            "main",
            &["n"],
            vec![ret(Expr::call(Expr::ident("f"), vec![Expr::ident("n")]))],
        ),
        func("f", &["g"], vec![ret(Expr::call(Expr::ident("g"), vec![]))]),
        func(
            "g",
            &["y"],
            vec![ret(Expr::call(Expr::ident("f"), vec![Expr::ident("y")]))],
        ),
    ])
    .unwrap();
    assert_eq!(text, "λn.(n)");
}

#[test]
fn test_nesting_too_deep() {
    // Deep recursion on both the compile and drop paths.
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| {
            let mut expr = Expr::ident("p");
            for _ in 0..(MAX_COMPILE_DEPTH + 10) {
                expr = Expr::Unary {
                    operator: UnaryOperator::Not,
                    argument: Box::new(expr),
                };
            }
            compile_stmts(vec![func("main", &["p"], vec![ret(expr)])])
        })
        .unwrap();
    assert_eq!(
        handle.join().unwrap(),
        Err(Error::NestingTooDeep {
            limit: MAX_COMPILE_DEPTH
        })
    );
}
