//! Module for constructing lists as S-exps front to back.
//!
//! Pairs are immutable once built, so elements are buffered and the chain is
//! linked from the tail when released.

use super::sexp::{HeapSexp, Sexp};
use super::Cons;

#[derive(Debug, Default)]
pub struct ConsList {
    elems: Vec<HeapSexp>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn append<T: Into<HeapSexp>>(&mut self, val: T) {
        self.elems.push(val.into());
    }

    /// Proper list of the appended elements; () if none were appended.
    pub fn release(self) -> HeapSexp {
        self.release_with_tail(HeapSexp::new(Sexp::Nil))
    }

    /// List of the appended elements whose final cdr is tail. With no
    /// elements, the tail itself is returned.
    pub fn release_with_tail(self, tail: HeapSexp) -> HeapSexp {
        self.elems
            .into_iter()
            .rev()
            .fold(tail, |cdr, car| Cons::new(car, cdr).into())
    }
}
