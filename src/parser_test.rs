use super::*;

use crate::primitive::{Number, ToSymbol};
use crate::sexp::cons;


fn num(i: i64) -> HeapSexp {
    Number::new(i).into()
}

fn sym(s: &str) -> HeapSexp {
    s.to_symbol_or_panic().into()
}

fn reason(input: &str) -> ParseErrorReason {
    match read_str(input) {
        Err(Error::Parse(err)) => err.reason().clone(),
        other => panic!("expected parse error for {:?}, got {:?}", input, other),
    }
}

#[test]
fn atoms() {
    assert_eq!(read_str("42").unwrap(), num(42));
    assert_eq!(read_str("  -7 \n").unwrap(), num(-7));
    assert_eq!(read_str("foo").unwrap(), sym("foo"));
    assert_eq!(read_str("#t").unwrap(), HeapSexp::new(Sexp::from(true)));
    assert_eq!(read_str("#f").unwrap(), HeapSexp::new(Sexp::from(false)));
    // Only the exact literals become booleans.
    assert_eq!(read_str("#true").unwrap(), sym("#true"));
}

#[test]
fn empty_list() {
    assert_eq!(read_str("()").unwrap(), list!());
    assert_eq!(read_str("( \n )").unwrap(), list!());
}

#[test]
fn nested_lists() {
    assert_eq!(
        read_str("(+ 1 (* 2 3) ())").unwrap(),
        list!(sym("+"), num(1), list!(sym("*"), num(2), num(3)), list!())
    );
}

#[test]
fn dotted_pairs() {
    assert_eq!(read_str("(1 . 2)").unwrap(), cons(num(1), num(2)));
    assert_eq!(
        read_str("(1 2 . #t)").unwrap(),
        cons(num(1), cons(num(2), Sexp::from(true)))
    );
    // A list tail makes an ordinary proper list.
    assert_eq!(read_str("(1 . (2 3))").unwrap(), list!(num(1), num(2), num(3)));
}

#[test]
fn quote_shorthand() {
    assert_eq!(read_str("'a").unwrap(), list!(sym("quote"), sym("a")));
    assert_eq!(
        read_str("'(1 2)").unwrap(),
        list!(sym("quote"), list!(num(1), num(2)))
    );
    assert_eq!(
        read_str("''a").unwrap(),
        list!(sym("quote"), list!(sym("quote"), sym("a")))
    );
    assert_eq!(read_str("(1 . '2)").unwrap(), cons(num(1), list!(sym("quote"), num(2))));
}

#[test]
fn unterminated() {
    assert_eq!(reason("(1 2"), UnexpectedEof);
    assert_eq!(reason("((1) 2"), UnexpectedEof);
    assert_eq!(reason("'"), UnexpectedEof);
    assert_eq!(reason(""), UnexpectedEof);
    assert_eq!(reason("   "), UnexpectedEof);
    assert_eq!(reason("(1 ."), UnexpectedEof);
}

#[test]
fn misplaced_brackets() {
    assert_eq!(reason(")"), UnmatchedClose);
    assert_eq!(reason("(1 2))"), TrailingToken);
}

#[test]
fn misplaced_periods() {
    assert_eq!(reason("."), IsolatedPeriod);
    assert_eq!(reason("(. 1)"), IsolatedPeriod);
    assert_eq!(reason("(1 .)"), NotPenultimatePeriod);
    assert_eq!(reason("(1 . 2 3)"), NotPenultimatePeriod);
    assert_eq!(reason("(1 . 2 . 3)"), NotPenultimatePeriod);
    assert_eq!(reason("(1 . . 2)"), NotPenultimatePeriod);
}

#[test]
fn one_expression_per_call() {
    assert_eq!(reason("1 2"), TrailingToken);
    assert_eq!(reason("(+ 1 2) (+ 3 4)"), TrailingToken);

    match read_str("1 2") {
        Err(Error::Parse(err)) => {
            assert_eq!(err.token().as_ref().map(|t| (*t.line(), *t.col())), Some((1, 3)))
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn tokenize_errors_surface() {
    assert!(matches!(read_str("(1 [2])"), Err(Error::Tokenize(_))));
}

#[test]
fn parse_sexp_leaves_rest() {
    let mut tokens = Tokenizer::new("(a) b".chars());
    assert_eq!(parse_sexp(&mut tokens, 0).unwrap(), list!(sym("a")));
    assert_eq!(parse_sexp(&mut tokens, 0).unwrap(), sym("b"));
    assert!(tokens.is_end().unwrap());
}

#[test]
fn depth_limit() {
    let deep_ok = format!("{}{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert!(read_str(&deep_ok).is_ok());

    let too_deep = format!("{}{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    assert_eq!(reason(&too_deep), DepthOverflow);

    assert_eq!(reason(&"'".repeat(MAX_DEPTH + 1)), DepthOverflow);
}

#[test]
fn from_str() {
    let s: Sexp = "(1 . 2)".parse().unwrap();
    assert_eq!(s.to_string(), "(1 . 2)");
    assert!("(1".parse::<Sexp>().unwrap_err().is_syntax());
}
