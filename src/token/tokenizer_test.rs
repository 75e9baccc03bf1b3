use super::*;

use crate::primitive::ToSymbol;
use Token::{LeftParen, Period, Quote, RightParen};


fn tokens(input: &str) -> Vec<Token> {
    Tokenizer::new(input.chars())
        .map(|info| info.unwrap().into_token())
        .collect()
}

fn sym(s: &str) -> Token {
    Token::Primitive(Primitive::Symbol(s.to_symbol_or_panic()))
}

fn int(i: i64) -> Token {
    Token::Primitive(Primitive::Number(Number::new(i)))
}

fn nest(mut v: Vec<Token>) -> Vec<Token> {
    v.insert(0, LeftParen);
    v.push(RightParen);
    v
}

#[test]
fn nested() {
    let mut expected = nest(vec![sym("out")]);
    expected.insert(0, sym("this"));
    expected = nest(expected);
    expected.insert(0, sym("testing"));
    expected = nest(expected);

    assert_eq!(tokens("(testing (this (out)))"), expected);
}

#[test]
fn newlines() {
    let mut expected = nest(vec![sym("out")]);
    expected.insert(0, sym("this"));
    expected = nest(expected);
    expected.insert(0, sym("testing"));
    expected = nest(expected);

    assert_eq!(tokens("\n(testing\n\n (\nthis (out))\n)"), expected);
}

#[test]
fn ints() {
    let expected = nest(vec![int(1), int(2), int(-4), int(33), int(128), int(7)]);
    assert_eq!(tokens("(1 2 -4 33 128 +7)"), expected);
}

#[test]
fn signs_without_digits_are_symbols() {
    assert_eq!(
        tokens("(+ - -abc +<)"),
        nest(vec![sym("+"), sym("-"), sym("-abc"), sym("+<")])
    );
}

#[test]
fn symbol_character_sets() {
    assert_eq!(
        tokens("list-ref null? <= #t #f set! a1b2"),
        vec![
            sym("list-ref"),
            sym("null?"),
            sym("<="),
            sym("#t"),
            sym("#f"),
            sym("set!"),
            sym("a1b2"),
        ]
    );
}

#[test]
fn adjacent_tokens_split() {
    assert_eq!(tokens("12abc"), vec![int(12), sym("abc")]);
    assert_eq!(tokens("-5x"), vec![int(-5), sym("x")]);
    assert_eq!(tokens("a+b"), vec![sym("a"), sym("+b")]);
}

#[test]
fn quote_and_period() {
    assert_eq!(
        tokens("'(1 . 2)"),
        vec![Quote, LeftParen, int(1), Period, int(2), RightParen]
    );
    assert_eq!(tokens(".5"), vec![Period, int(5)]);
}

#[test]
fn one_token_lookahead() {
    let mut tokenizer = Tokenizer::new("(foo 1)".chars());
    assert_eq!(tokenizer.peek().unwrap().map(|t| t.token().clone()), Some(LeftParen));
    assert_eq!(tokenizer.peek().unwrap().map(|t| t.token().clone()), Some(LeftParen));
    tokenizer.advance().unwrap();
    assert_eq!(tokenizer.next_token().unwrap().unwrap().into_token(), sym("foo"));
    assert_eq!(tokenizer.next_token().unwrap().unwrap().into_token(), int(1));
    assert!(!tokenizer.is_end().unwrap());
    tokenizer.advance().unwrap();
    assert!(tokenizer.is_end().unwrap());
    assert_eq!(tokenizer.next_token().unwrap(), None);
}

#[test]
fn whitespace_only_is_end() {
    let mut tokenizer = Tokenizer::new("  \n \t ".chars());
    assert!(tokenizer.is_end().unwrap());
}

#[test]
fn positions() {
    let infos: Vec<TokenInfo> = Tokenizer::new("(a\n  42)".chars())
        .map(|info| info.unwrap())
        .collect();
    assert_eq!((*infos[0].line(), *infos[0].col()), (1, 1));
    assert_eq!((*infos[1].line(), *infos[1].col()), (1, 2));
    assert_eq!((*infos[2].line(), *infos[2].col()), (2, 3));
    assert_eq!((*infos[3].line(), *infos[3].col()), (2, 5));
}

#[test]
fn unexpected_char() {
    let mut tokenizer = Tokenizer::new("(1 %)".chars());
    tokenizer.advance().unwrap();
    tokenizer.advance().unwrap();
    let err = tokenizer.next_token().unwrap_err();
    assert_eq!(*err.kind(), TokenizeErrorKind::UnexpectedChar('%'));
    assert_eq!((*err.line(), *err.col()), (1, 4));

    // The bad character is consumed.
    assert_eq!(tokenizer.next_token().unwrap().unwrap().into_token(), RightParen);
}

#[test]
fn integer_out_of_range() {
    let err = Tokenizer::new("99999999999999999999".chars())
        .next()
        .unwrap()
        .unwrap_err();
    assert!(matches!(err.kind(), TokenizeErrorKind::IntegerOutOfRange(_)));

    assert_eq!(tokens("-9223372036854775808"), vec![int(i64::MIN)]);
}

#[test]
fn scanned_symbols_are_valid() {
    let input = "+ - -x +<= a-b?! #t #f <=> */ list-tail z9 ?- !";
    for token in tokens(input) {
        match token {
            Token::Primitive(Primitive::Symbol(symbol)) => {
                assert_eq!(Symbol::new(symbol.as_str()), Ok(symbol.clone()))
            }
            other => panic!("expected a symbol, got {}", other),
        }
    }
    assert_eq!(tokens(input).len(), 13);
}
