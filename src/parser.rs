//! Module for parsing tokens into an S-exp tree.
//!
//! Recursive descent over a Tokenizer with one token of lookahead:
//!
//!   expr   := integer | boolean | symbol | list | quoted
//!   list   := '(' expr* ( '.' expr )? ')'
//!   quoted := '\'' expr

use derive_getters::Getters;
use log::trace;
use std::fmt;

use self::ParseErrorReason::*;
use crate::error::Error;
use crate::primitive::{Primitive, Symbol};
use crate::sexp::{ConsList, HeapSexp, Sexp};
use crate::token::{Token, TokenInfo, Tokenizer};

/// Deepest nesting of lists and quotes the parser accepts.
pub const MAX_DEPTH: usize = 256;


#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorReason {
    DepthOverflow,
    UnexpectedEof,
    UnmatchedClose,
    IsolatedPeriod,
    NotPenultimatePeriod,
    TrailingToken,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct ParseError {
    reason: ParseErrorReason,
    /// Offending token; None when input ran out.
    token: Option<TokenInfo>,
}


/// Reads exactly one expression from s.
pub fn read_str<S: AsRef<str>>(s: S) -> Result<HeapSexp, Error> {
    read(&mut Tokenizer::new(s.as_ref().chars()))
}

/// Reads one expression and requires the tokenizer to be exhausted after it.
pub fn read<I: Iterator<Item = char>>(tokens: &mut Tokenizer<I>) -> Result<HeapSexp, Error> {
    let sexp = parse_sexp(tokens, 0)?;
    if let Some(token) = tokens.next_token()? {
        return Err(ParseError::new(TrailingToken, Some(token)).into());
    }
    Ok(sexp)
}

/// Parses the next expression, leaving anything after it unconsumed.
pub fn parse_sexp<I: Iterator<Item = char>>(
    tokens: &mut Tokenizer<I>,
    depth: usize,
) -> Result<HeapSexp, Error> {
    let info = match tokens.next_token()? {
        Some(info) => info,
        None => return Err(ParseError::new(UnexpectedEof, None).into()),
    };

    match info.token() {
        Token::LeftParen | Token::Quote if depth >= MAX_DEPTH => {
            Err(ParseError::new(DepthOverflow, Some(info)).into())
        }
        Token::LeftParen => parse_list(tokens, depth + 1),
        Token::Quote => {
            let quoted = parse_sexp(tokens, depth + 1)?;
            trace!("quote shorthand: {}", quoted);
            Ok(list!(quote_symbol(), quoted))
        }
        Token::RightParen => Err(ParseError::new(UnmatchedClose, Some(info)).into()),
        Token::Period => Err(ParseError::new(IsolatedPeriod, Some(info)).into()),
        Token::Primitive(primitive) => Ok(atom(primitive.clone())),
    }
}

// Called just after the opening bracket.
fn parse_list<I: Iterator<Item = char>>(
    tokens: &mut Tokenizer<I>,
    depth: usize,
) -> Result<HeapSexp, Error> {
    let mut list = ConsList::new();
    loop {
        let token = match tokens.peek()? {
            Some(info) => info.token().clone(),
            None => return Err(ParseError::new(UnexpectedEof, None).into()),
        };

        match token {
            Token::RightParen => {
                tokens.advance()?;
                return Ok(list.release());
            }
            Token::Period => {
                let period = tokens.next_token()?;
                if list.is_empty() {
                    return Err(ParseError::new(IsolatedPeriod, period).into());
                }
                let tail = parse_tail(tokens, depth)?;
                return Ok(list.release_with_tail(tail));
            }
            _ => list.append(parse_sexp(tokens, depth)?),
        }
    }
}

// Exactly one expression, then the closing bracket.
fn parse_tail<I: Iterator<Item = char>>(
    tokens: &mut Tokenizer<I>,
    depth: usize,
) -> Result<HeapSexp, Error> {
    let missing = match tokens.peek()? {
        Some(info) => matches!(info.token(), Token::RightParen | Token::Period),
        None => false,
    };
    if missing {
        let info = tokens.next_token()?;
        return Err(ParseError::new(NotPenultimatePeriod, info).into());
    }

    let tail = parse_sexp(tokens, depth)?;
    match tokens.next_token()? {
        Some(info) if *info.token() == Token::RightParen => Ok(tail),
        Some(info) => Err(ParseError::new(NotPenultimatePeriod, Some(info)).into()),
        None => Err(ParseError::new(UnexpectedEof, None).into()),
    }
}

fn atom(primitive: Primitive) -> HeapSexp {
    match primitive {
        Primitive::Symbol(symbol) if symbol.is_boolean_literal() => {
            Sexp::from(symbol.as_str() == "#t").into()
        }
        primitive => primitive.into(),
    }
}

fn quote_symbol() -> Symbol {
    Symbol::scanned("quote".to_string())
}


impl ParseError {
    pub fn new(reason: ParseErrorReason, token: Option<TokenInfo>) -> Self {
        Self { reason, token }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.reason {
            DepthOverflow => "Expression nested too deeply",
            UnexpectedEof => "Unexpected end of input",
            UnmatchedClose => "Unmatched closing bracket",
            IsolatedPeriod => "Dot outside of list tail position",
            NotPenultimatePeriod => "Dot must be followed by exactly one expression and ')'",
            TrailingToken => "Unexpected token after expression",
        };
        match &self.token {
            Some(token) => write!(f, "{}: {}", reason, token),
            None => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for ParseError {}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
