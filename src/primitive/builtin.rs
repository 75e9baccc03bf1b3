//! Representation of builtin procedures.
//!
//! A BuiltIn pairs the name it was looked up by with a closed Op; the
//! interpreter dispatches on the Op alone.

use std::fmt;

use crate::lang_err::ExpectedCount::{self, *};


#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    op: Op,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Op {
    Quote,

    IsNumber,
    IsBoolean,
    IsPair,
    IsNull,
    IsList,

    NumEq,
    Lt,
    Gt,
    Le,
    Ge,
    Add,
    Mul,
    Sub,
    Div,
    Max,
    Min,
    Abs,

    Not,
    And,
    Or,

    Cons,
    Car,
    Cdr,
    List,
    ListRef,
    ListTail,
}

/// How a builtin receives its operands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgMode {
    /// Every operand is evaluated, in order, before the call.
    Eager,
    /// Operands are handed over unevaluated; the builtin evaluates them
    /// itself, left to right, possibly stopping early.
    Lazy,
    /// Operands are never evaluated.
    Quoted,
}


impl BuiltIn {
    pub const fn new(name: &'static str, op: Op) -> BuiltIn {
        BuiltIn { name, op }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn op(&self) -> Op {
        self.op
    }
}

impl Op {
    pub fn arg_mode(self) -> ArgMode {
        match self {
            Op::Quote => ArgMode::Quoted,
            Op::And | Op::Or => ArgMode::Lazy,
            _ => ArgMode::Eager,
        }
    }

    pub fn arity(self) -> ExpectedCount {
        match self {
            Op::Quote
            | Op::IsNumber
            | Op::IsBoolean
            | Op::IsPair
            | Op::IsNull
            | Op::IsList
            | Op::Abs
            | Op::Not
            | Op::Car
            | Op::Cdr => Exactly(1),

            Op::Cons | Op::ListRef | Op::ListTail => Exactly(2),

            Op::Sub | Op::Div | Op::Max | Op::Min => AtLeast(1),

            Op::NumEq
            | Op::Lt
            | Op::Gt
            | Op::Le
            | Op::Ge
            | Op::Add
            | Op::Mul
            | Op::And
            | Op::Or
            | Op::List => AtLeast(0),
        }
    }
}


impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{} ({:?})]", self.name, self.op)
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}


impl_try_from!(BuiltIn => BuiltIn; Sexp, ref Sexp, Primitive,);
