use super::*;

fn parse(src: &str) -> Result<Term> {
    LambdaParser.parse(src)
}

#[test]
fn test_identity() {
    assert_eq!(parse("λx.x").unwrap(), Term::abs("x", Term::var("x")));
}

#[test]
fn test_application_is_left_associative() {
    assert_eq!(
        parse("f x y").unwrap(),
        Term::app(Term::app(Term::var("f"), Term::var("x")), Term::var("y"))
    );
}

#[test]
fn test_parentheses_group_right() {
    assert_eq!(
        parse("f (x y)").unwrap(),
        Term::app(Term::var("f"), Term::app(Term::var("x"), Term::var("y")))
    );
}

#[test]
fn test_abstraction_body_extends_right() {
    assert_eq!(
        parse("λf.λx.f x").unwrap(),
        Term::abs(
            "f",
            Term::abs("x", Term::app(Term::var("f"), Term::var("x")))
        )
    );
}

#[test]
fn test_compiled_output_parses() {
    let term = parse("λa.λb.((λm.λn.λf.λx.m f (n f x)) a b)").unwrap();
    assert_eq!(term.size(), 13);
    assert_eq!(term.free_variables(), Vec::<&str>::new());
}

#[test]
fn test_display_round_trips() {
    let src = "λn.((λm.λn.((m n) (λx.λy.y)) (λx.λy.x)) n (λf.λx.x))";
    let term = parse(src).unwrap();
    assert_eq!(parse(&term.to_string()).unwrap(), term);
}

#[test]
fn test_empty_input() {
    assert_eq!(
        parse(""),
        Err(Error::Parse {
            position: 0,
            expected: "a variable or `(`".to_string(),
        })
    );
}

#[test]
fn test_missing_variable_after_lambda() {
    assert!(matches!(
        parse("λ.x"),
        Err(Error::Parse { position: 1, .. })
    ));
}

#[test]
fn test_missing_dot() {
    assert!(matches!(
        parse("λx x"),
        Err(Error::Parse { position: 3, .. })
    ));
}

#[test]
fn test_unclosed_parenthesis() {
    assert_eq!(
        parse("(x y"),
        Err(Error::Parse {
            position: 4,
            expected: "`)`".to_string(),
        })
    );
}

#[test]
fn test_trailing_tokens() {
    assert_eq!(
        parse("x)"),
        Err(Error::Parse {
            position: 1,
            expected: "end of input".to_string(),
        })
    );
}

#[test]
fn test_lambda_in_argument_position_needs_parentheses() {
    assert!(matches!(parse("f λx.x"), Err(Error::Parse { position: 2, .. })));
    assert!(parse("f (λx.x)").is_ok());
}

#[test]
fn test_source_too_long() {
    let src = "x ".repeat(60_000);
    assert!(matches!(parse(&src), Err(Error::SourceTooLong { .. })));
}

#[test]
fn test_nesting_limit() {
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| {
            let ok = format!("{}x{}", "(".repeat(MAX_TERM_DEPTH - 1), ")".repeat(MAX_TERM_DEPTH - 1));
            let deep = format!("{}x{}", "(".repeat(MAX_TERM_DEPTH), ")".repeat(MAX_TERM_DEPTH));
            (parse(&ok).is_ok(), parse(&deep))
        })
        .unwrap();
    let (ok, deep) = handle.join().unwrap();
    assert!(ok);
    assert_eq!(
        deep,
        Err(Error::NestingTooDeep {
            limit: MAX_TERM_DEPTH
        })
    );
}

#[test]
fn test_application_spine_counts_toward_nesting_limit() {
    let ok = "x ".repeat(MAX_TERM_DEPTH);
    let long = "x ".repeat(MAX_TERM_DEPTH + 1);
    assert_eq!(parse(&ok).map(|t| t.depth()).ok(), Some(MAX_TERM_DEPTH));
    assert_eq!(
        parse(&long),
        Err(Error::NestingTooDeep {
            limit: MAX_TERM_DEPTH
        })
    );
}

#[test]
fn test_spine_depth_is_released_after_parentheses() {
    // Two spines side by side each fit, though together they would not.
    let spine = "x ".repeat(1500);
    let src = format!("({spine}) ({spine})");
    assert!(parse(&src).is_ok());
}
