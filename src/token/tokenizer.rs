//! Module for breaking source text into tokens.
//!
//! The Tokenizer pulls characters on demand and holds at most one scanned
//! token, giving the parser a single token of lookahead.

use derive_getters::Getters;
use log::trace;
use std::fmt;
use std::iter::Peekable;

use super::token::{Token, TokenInfo};
use crate::primitive::{Number, Primitive, Symbol};


pub struct Tokenizer<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    current: Option<TokenInfo>,

    line: usize,
    col: usize,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct TokenizeError {
    line: usize,
    col: usize,
    kind: TokenizeErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenizeErrorKind {
    UnexpectedChar(char),
    IntegerOutOfRange(String),
}


fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r')
}

fn is_symbol_start(c: char) -> bool {
    c.is_ascii_alphabetic() || "<=>*/#!?".contains(c)
}

fn is_symbol_continuation(c: char) -> bool {
    is_symbol_start(c) || c.is_ascii_digit() || c == '-'
}


impl<I: Iterator<Item = char>> Tokenizer<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
            current: None,
            line: 1,
            col: 1,
        }
    }

    /// Current token, scanning it if needed. None means end of input.
    pub fn peek(&mut self) -> Result<Option<&TokenInfo>, TokenizeError> {
        if self.current.is_none() {
            self.current = self.scan()?;
        }
        Ok(self.current.as_ref())
    }

    /// Takes the current token, moving past it.
    pub fn next_token(&mut self) -> Result<Option<TokenInfo>, TokenizeError> {
        self.peek()?;
        Ok(self.current.take())
    }

    pub fn advance(&mut self) -> Result<(), TokenizeError> {
        self.next_token().map(|_| ())
    }

    pub fn is_end(&mut self) -> Result<bool, TokenizeError> {
        Ok(self.peek()?.is_none())
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn scan(&mut self) -> Result<Option<TokenInfo>, TokenizeError> {
        while let Some(&c) = self.chars.peek() {
            if !is_whitespace(c) {
                break;
            }
            self.bump();
        }

        let (line, col) = (self.line, self.col);
        let first = match self.bump() {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match first {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '\'' => Token::Quote,
            '.' => Token::Period,
            c if c.is_ascii_digit() => self.integer(c, line, col)?,
            '+' | '-' => {
                if self.chars.peek().map_or(false, |c| c.is_ascii_digit()) {
                    self.integer(first, line, col)?
                } else {
                    self.symbol(first)
                }
            }
            c if is_symbol_start(c) => self.symbol(c),
            c => {
                return Err(TokenizeError {
                    line,
                    col,
                    kind: TokenizeErrorKind::UnexpectedChar(c),
                });
            }
        };

        trace!("token {} @ ({}, {})", token, line, col);
        Ok(Some(TokenInfo::new(token, line, col)))
    }

    fn integer(&mut self, first: char, line: usize, col: usize) -> Result<Token, TokenizeError> {
        let mut literal = first.to_string();
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            literal.push(c);
            self.bump();
        }

        match literal.parse::<Number>() {
            Ok(num) => Ok(Token::Primitive(Primitive::Number(num))),
            Err(_) => Err(TokenizeError {
                line,
                col,
                kind: TokenizeErrorKind::IntegerOutOfRange(literal),
            }),
        }
    }

    fn symbol(&mut self, first: char) -> Token {
        let mut name = first.to_string();
        while let Some(&c) = self.chars.peek() {
            if !is_symbol_continuation(c) {
                break;
            }
            name.push(c);
            self.bump();
        }

        Token::Primitive(Primitive::Symbol(Symbol::scanned(name)))
    }
}


impl<I: Iterator<Item = char>> Iterator for Tokenizer<I> {
    type Item = Result<TokenInfo, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}


impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenizeErrorKind::UnexpectedChar(c) => write!(f, "Unexpected character {:?}", c)?,
            TokenizeErrorKind::IntegerOutOfRange(literal) => {
                write!(f, "Integer literal out of range: {}", literal)?
            }
        }
        write!(f, " @ ({}, {})", self.line, self.col)
    }
}

impl std::error::Error for TokenizeError {}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
