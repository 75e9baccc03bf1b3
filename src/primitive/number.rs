//! Representation of numbers.
//!
//! Only fixed-width signed integers exist. All arithmetic is checked; callers
//! decide how to report a None.

use std::{fmt, num, str};


#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Number(i64);

#[derive(Debug, PartialEq)]
pub struct ParseNumberError(String);


impl Number {
    pub const fn new(value: i64) -> Self {
        Number(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Number)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Number)
    }

    pub fn checked_mul(self, other: Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Number)
    }

    /// Truncating division. None on a zero divisor or on overflow.
    pub fn checked_div(self, other: Self) -> Option<Self> {
        self.0.checked_div(other.0).map(Number)
    }

    pub fn checked_neg(self) -> Option<Self> {
        self.0.checked_neg().map(Number)
    }

    pub fn checked_abs(self) -> Option<Self> {
        self.0.checked_abs().map(Number)
    }
}


impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" is not a valid integer", self.0)
    }
}

impl str::FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Number)
            .map_err(|_: num::ParseIntError| ParseNumberError(s.to_string()))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number(value)
    }
}

impl From<Number> for i64 {
    fn from(num: Number) -> Self {
        num.0
    }
}


impl_try_from!(Number => Number; Sexp, ref Sexp, Primitive,);
