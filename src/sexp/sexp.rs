//! Module for representing S-exps.
//!
//! The same tree serves as parsed syntax and as evaluation result. Nothing
//! mutates a Sexp after construction, so sub-trees are shared freely through
//! HeapSexp.

use colored::*;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use super::cons::Cons;
use super::cons_list::ConsList;
use crate::error::Error;
use crate::parser::read_str;
use crate::primitive::{BuiltIn, Number, Primitive, Symbol};


/// Shared, immutable S-exp.
pub type HeapSexp = Rc<Sexp>;

#[derive(Clone, PartialEq)]
pub enum Sexp {
    Primitive(Primitive),
    Cons(Cons),
    /// The empty list.
    Nil,
}

/// Walks a pair chain, yielding (element, from_cons).
///
/// from_cons is false only for a non-pair tail, which is necessarily the last
/// element; () ends the walk without being yielded.
pub struct SexpIter<'a> {
    first: Option<&'a HeapSexp>,
    current: Option<&'a HeapSexp>,
}

/// Display adapter that colours brackets by nesting depth.
pub struct ColoredSexp<'a> {
    sexp: &'a Sexp,
}


impl Sexp {
    pub fn is_nil(&self) -> bool {
        matches!(self, Sexp::Nil)
    }

    pub fn is_cons(&self) -> bool {
        matches!(self, Sexp::Cons(_))
    }

    /// () or a pair chain ending in ().
    pub fn is_proper_list(&self) -> bool {
        match self {
            Sexp::Nil => true,
            Sexp::Cons(cons) => cons.iter().all(|(_, from_cons)| from_cons),
            Sexp::Primitive(_) => false,
        }
    }

    /// Iterating anything but a pair yields nothing.
    pub fn iter(&self) -> SexpIter {
        match self {
            Sexp::Cons(cons) => cons.iter(),
            _ => SexpIter {
                first: None,
                current: None,
            },
        }
    }

    pub fn colored(&self) -> ColoredSexp {
        ColoredSexp { sexp: self }
    }

    /// Writes the canonical text of self, delegating every bracket to
    /// write_paren along with its nesting depth.
    pub fn write_list<W, P>(&self, w: &mut W, depth: usize, write_paren: &mut P) -> fmt::Result
    where
        W: fmt::Write,
        P: FnMut(&mut W, &str, usize) -> fmt::Result,
    {
        let mut curr = match self {
            Sexp::Primitive(primitive) => return write!(w, "{}", primitive),
            Sexp::Nil => {
                write_paren(w, "(", depth)?;
                return write_paren(w, ")", depth);
            }
            Sexp::Cons(cons) => cons,
        };

        write_paren(w, "(", depth)?;
        loop {
            curr.car().write_list(w, depth + 1, write_paren)?;
            match curr.cdr().as_ref() {
                Sexp::Cons(next) => {
                    write!(w, " ")?;
                    curr = next;
                }
                Sexp::Nil => break,
                tail => {
                    write!(w, " . ")?;
                    tail.write_list(w, depth + 1, write_paren)?;
                    break;
                }
            }
        }
        write_paren(w, ")", depth)
    }
}

impl<'a> SexpIter<'a> {
    /// Iterates over the chain starting at list.
    pub fn new(list: &'a HeapSexp) -> Self {
        Self {
            first: None,
            current: Some(list),
        }
    }

    pub(super) fn from_cons(cons: &'a Cons) -> Self {
        Self {
            first: Some(cons.car()),
            current: Some(cons.cdr()),
        }
    }
}

impl<'a> Iterator for SexpIter<'a> {
    type Item = (&'a HeapSexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = self.first.take() {
            return Some((first, true));
        }

        let sexp = self.current.take()?;
        match sexp.as_ref() {
            Sexp::Cons(cons) => {
                self.current = Some(cons.cdr());
                Some((cons.car(), true))
            }
            Sexp::Nil => None,
            Sexp::Primitive(_) => Some((sexp, false)),
        }
    }
}

impl<'a> IntoIterator for &'a Sexp {
    type Item = (&'a HeapSexp, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl Default for Sexp {
    fn default() -> Self {
        Sexp::Nil
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_list(f, 0, &mut |writer, paren, _depth| writer.write_str(paren))
    }
}

impl<'a> fmt::Display for ColoredSexp<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn paren_color(depth: usize) -> (u8, u8, u8) {
            match depth % 6 {
                0 => (0, 255, 204),
                1 => (204, 51, 0),
                2 => (153, 255, 102),
                3 => (153, 102, 255),
                4 => (255, 255, 102),
                _ => (255, 179, 179),
            }
        }

        self.sexp.write_list(f, 0, &mut |writer, paren, depth| {
            let (r, g, b) = paren_color(depth);
            write!(writer, "{}", paren.truecolor(r, g, b))
        })
    }
}


impl FromStr for Sexp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sexp = read_str(s)?;
        Ok(Rc::try_unwrap(sexp).unwrap_or_else(|shared| (*shared).clone()))
    }
}

impl<T: Into<HeapSexp>> From<Vec<T>> for Sexp {
    fn from(vec: Vec<T>) -> Self {
        let mut list = ConsList::new();
        for value in vec {
            list.append(value);
        }
        let sexp = list.release();
        Rc::try_unwrap(sexp).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl From<Primitive> for Sexp {
    fn from(primitive: Primitive) -> Self {
        Sexp::Primitive(primitive)
    }
}

impl From<Primitive> for HeapSexp {
    fn from(primitive: Primitive) -> Self {
        HeapSexp::new(Sexp::Primitive(primitive))
    }
}

impl From<bool> for Sexp {
    fn from(b: bool) -> Self {
        Sexp::Primitive(Primitive::Boolean(b))
    }
}

// Impl From<T> over Primitive subtypes.
macro_rules! sexp_from {
    ($from:ident, $($tail:tt)*) => {
        impl From<$from> for Sexp {
            fn from(elem: $from) -> Self {
                Sexp::Primitive(Primitive::$from(elem))
            }
        }
        impl From<$from> for HeapSexp {
            fn from(elem: $from) -> Self {
                Self::new(Sexp::Primitive(Primitive::$from(elem)))
            }
        }
        sexp_from!($($tail)*);
    };
    () => {};
}

sexp_from!(Number, Symbol, BuiltIn,);


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
