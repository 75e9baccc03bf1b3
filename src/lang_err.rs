//! Errors raised while evaluating a well-formed S-exp.

use std::borrow::Cow;
use std::fmt;

use self::ErrKind::*;
use self::ExpectedCount::*;
use crate::primitive::Symbol;
use crate::sexp::HeapSexp;


/// Creates an Err(LangErr) from an ErrKind variant.
///
/// Called as:  err!(DivisionByZero) or err!(UnboundSymbol(symbol)).
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::lang_err::LangErr::new(
            $crate::lang_err::ErrKind::$($kind)+,
        ))
    };
}


#[derive(Clone, Debug, PartialEq)]
pub struct LangErr {
    pub kind: ErrKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ErrKind {
    InvalidArgument {
        given: HeapSexp,
        expected: Cow<'static, str>,
    },
    InvalidSexp(HeapSexp),
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    UnboundSymbol(Symbol),
    NotAProcedure(HeapSexp),
    IndexOutOfRange {
        index: i64,
        len: usize,
    },
    DivisionByZero,
    IntegerOverflow(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}


impl LangErr {
    // Prefer using err! for convenience.
    pub fn new(kind: ErrKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &ErrKind {
        &self.kind
    }
}

impl ExpectedCount {
    pub fn allows(&self, given: usize) -> bool {
        match *self {
            Exactly(exactly) => given == exactly,
            AtLeast(minimum) => given >= minimum,
        }
    }

    pub fn check(&self, given: usize) -> Result<(), LangErr> {
        if self.allows(given) {
            Ok(())
        } else {
            err!(WrongArgumentCount {
                given,
                expected: *self,
            })
        }
    }
}


impl fmt::Display for LangErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            InvalidArgument { given, expected } => write!(
                f,
                "Wrong argument type: given {}, expected {}",
                given, expected
            ),
            InvalidSexp(val) => write!(f, "Invalid S-exp for evaluation: {}", val),
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            UnboundSymbol(symbol) => write!(f, "Unknown procedure: \"{}\"", symbol),
            NotAProcedure(val) => write!(f, "Not a procedure: {}", val),
            IndexOutOfRange { index, len } => write!(
                f,
                "Index out of range: index {}, length {}",
                index, len
            ),
            DivisionByZero => write!(f, "Division by zero"),
            IntegerOverflow(op) => write!(f, "Integer overflow in {}", op),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}

impl std::error::Error for LangErr {}
