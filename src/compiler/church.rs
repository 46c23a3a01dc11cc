//! Church encodings: cached numerals and the fixed combinator table.

use std::sync::LazyLock;

/// Largest integer with a cached Church numeral.
pub const MAX_NUMERAL: usize = 100;

pub const TRUE: &str = "(λx.λy.x)";
pub const FALSE: &str = "(λx.λy.y)";

pub const ADD: &str = "(λm.λn.λf.λx.m f (n f x))";
pub const SUB: &str = "(λm.λn.λf.λx.n (λg.λh.h (g f)) (λu.x) (λu.u) m)";
pub const MUL: &str = "(λm.λn.λf.λx.m (n f) x)";
pub const DIV: &str = "(λm.λn.n (λf.λx.m (λg.f (g x)) (λx.x)) (λf.λx.x))";

pub const EQ: &str = "(λm.λn.((m n) (λx.λy.y)) (λx.λy.x))";
pub const LT: &str = "(λm.λn.(n (λx.λy.y)) ((m (λx.λy.x)) (λx.λy.y)))";
/// `<=` applies NOT to `<` with its operands swapped.
pub const LE: &str =
    "(λm.λn.(λp.λa.λb.p b a) ((λm.λn.(n (λx.λy.y)) ((m (λx.λy.x)) (λx.λy.y))) n m))";
/// `>=` applies NOT to `<`.
pub const GE: &str =
    "(λm.λn.(λp.λa.λb.p b a) ((λm.λn.(n (λx.λy.y)) ((m (λx.λy.x)) (λx.λy.y))) m n))";

pub const NOT: &str = "(λp.λa.λb.p b a)";
pub const AND: &str = "(λp.λq.p q p)";
pub const OR: &str = "(λp.λq.p p q)";
/// Church if-then-else.
pub const SELECT: &str = "(λp.λa.λb.p a b)";

pub const MAP: &str = "(λarr.λf.arr f)";
pub const FILTER: &str = "(λarr.λpred.arr (λx.pred x))";
pub const PROPERTY: &str = "(λobj.λprop.obj prop)";
pub const IDENTITY: &str = "(λx.x)";

static NUMERALS: LazyLock<Vec<String>> = LazyLock::new(|| {
    (0..=MAX_NUMERAL)
        .map(|n| {
            let mut inner = String::from("x");
            for _ in 0..n {
                inner = format!("f({inner})");
            }
            format!("(λf.λx.{inner})")
        })
        .collect()
});

/// Cached Church numeral text, `None` above [`MAX_NUMERAL`].
pub fn numeral(n: usize) -> Option<&'static str> {
    NUMERALS.get(n).map(String::as_str)
}

/// Church zero, the fallback for literals with no encoding.
pub fn zero() -> &'static str {
    "(λf.λx.x)"
}

/// `(combinator a b …)`
pub fn apply(combinator: &str, args: &[&str]) -> String {
    let mut out = format!("({combinator}");
    for arg in args {
        out.push(' ');
        out.push_str(arg);
    }
    out.push(')');
    out
}

#[cfg(test)]
#[path = "../../tests/rust/test_compiler_church.rs"]
mod tests;
