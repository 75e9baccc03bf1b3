//! Crate-level error, unifying failures from every stage of `run`.
//!
//! Tokenize and parse failures are syntax errors; everything raised while
//! evaluating a well-formed S-exp is a runtime error.

use std::fmt;

use crate::lang_err::LangErr;
use crate::parser::ParseError;
use crate::token::TokenizeError;


#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Tokenize(TokenizeError),
    Parse(ParseError),
    Lang(LangErr),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Syntax,
    Runtime,
}


impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Tokenize(_) | Error::Parse(_) => ErrorCategory::Syntax,
            Error::Lang(_) => ErrorCategory::Runtime,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.category() == ErrorCategory::Syntax
    }

    pub fn is_runtime(&self) -> bool {
        self.category() == ErrorCategory::Runtime
    }
}


impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "Syntax Error"),
            ErrorCategory::Runtime => write!(f, "Runtime Error"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.category())?;
        match self {
            Error::Tokenize(err) => write!(f, "{}", err),
            Error::Parse(err) => write!(f, "{}", err),
            Error::Lang(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Tokenize(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Lang(err) => Some(err),
        }
    }
}

impl From<TokenizeError> for Error {
    fn from(err: TokenizeError) -> Self {
        Error::Tokenize(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<LangErr> for Error {
    fn from(err: LangErr) -> Self {
        Error::Lang(err)
    }
}
