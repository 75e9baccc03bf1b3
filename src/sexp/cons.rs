use std::convert::TryFrom;
use std::mem;

use super::sexp::{HeapSexp, Sexp, SexpIter};


/// A populated pair. The empty list is Sexp::Nil, never a Cons.
///
/// Dropping and comparing walk the cdr chain in a loop, so list length is
/// bounded by memory rather than stack depth.
#[derive(Clone, Debug)]
pub struct Cons {
    car: HeapSexp,
    cdr: HeapSexp,
}

/// Builds a new pair, sharing both operands.
pub fn cons<A: Into<HeapSexp>, D: Into<HeapSexp>>(car: A, cdr: D) -> HeapSexp {
    HeapSexp::new(Sexp::Cons(Cons::new(car.into(), cdr.into())))
}

impl Cons {
    pub fn new(car: HeapSexp, cdr: HeapSexp) -> Cons {
        Cons { car, cdr }
    }

    pub fn car(&self) -> &HeapSexp {
        &self.car
    }

    pub fn cdr(&self) -> &HeapSexp {
        &self.cdr
    }

    pub fn iter(&self) -> SexpIter {
        SexpIter::from_cons(self)
    }
}


thread_local! {
    static NIL: HeapSexp = HeapSexp::new(Sexp::Nil);
}

fn nil() -> HeapSexp {
    NIL.try_with(HeapSexp::clone)
        .unwrap_or_else(|_| HeapSexp::new(Sexp::Nil))
}


impl Drop for Cons {
    fn drop(&mut self) {
        let mut next = mem::replace(&mut self.cdr, nil());
        // Unlink each pair we own alone before it drops; a shared or
        // non-pair tail ends the walk.
        while let Ok(Sexp::Cons(mut cons)) = HeapSexp::try_unwrap(next) {
            next = mem::replace(&mut cons.cdr, nil());
        }
    }
}

impl PartialEq for Cons {
    fn eq(&self, other: &Self) -> bool {
        let (mut lhs, mut rhs) = (self, other);
        loop {
            if lhs.car != rhs.car {
                return false;
            }
            match (lhs.cdr.as_ref(), rhs.cdr.as_ref()) {
                (Sexp::Cons(l), Sexp::Cons(r)) => {
                    lhs = l;
                    rhs = r;
                }
                (l, r) => return l == r,
            }
        }
    }
}


impl From<Cons> for HeapSexp {
    fn from(cons: Cons) -> Self {
        HeapSexp::new(Sexp::Cons(cons))
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Cons {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
