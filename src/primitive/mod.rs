//! Representation of primitives.

use std::fmt;

#[macro_use]
mod try_from_helper;

pub mod builtin;
pub mod number;
pub mod symbol;

pub use self::builtin::{ArgMode, BuiltIn, Op};
pub use self::number::Number;
pub use self::symbol::{Symbol, ToSymbol};


/// Every non-list value. Procedures are only ever BuiltIns.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Number(Number),
    Symbol(Symbol),
    Boolean(bool),
    BuiltIn(BuiltIn),
}


impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(num) => write!(f, "{}", num),
            Primitive::Symbol(s) => write!(f, "{}", s),
            Primitive::Boolean(true) => write!(f, "#t"),
            Primitive::Boolean(false) => write!(f, "#f"),
            Primitive::BuiltIn(b) => write!(f, "{}", b),
        }
    }
}

impl_try_from!(Boolean => bool; Sexp, ref Sexp, Primitive,);
