use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;


/// String which can be used as an identifier.
///
/// Starts with a letter or one of `<=>*/#!?`, or with a sign not followed by
/// a digit; continues with letters, digits, `<=>*/#!?` and `-`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> SymbolResult;

    fn to_symbol_or_panic(&self) -> Symbol {
        self.to_symbol().unwrap()
    }
}

pub type SymbolResult = Result<Symbol, SymbolError>;

#[derive(Debug, PartialEq)]
pub enum SymbolError {
    Empty,
    InvalidCharacters(String),
}

lazy_static! {
    static ref SYMBOL: Regex = Regex::new(
        r"^(?:[A-Za-z<=>*/#!?][A-Za-z0-9<=>*/#!?-]*|[+-](?:[A-Za-z<=>*/#!?-][A-Za-z0-9<=>*/#!?-]*)?)$"
    )
    .unwrap();
}


impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> SymbolResult {
        let s = sym.as_ref();
        if s.is_empty() {
            return Err(SymbolError::Empty);
        }
        if !SYMBOL.is_match(s) {
            return Err(SymbolError::InvalidCharacters(s.to_string()));
        }

        Ok(Symbol(s.to_string()))
    }

    /// Symbol from a name the tokenizer has already scanned with the same
    /// character classes the validator accepts.
    pub(crate) fn scanned(name: String) -> Self {
        debug_assert!(SYMBOL.is_match(&name), "invalid scanned symbol {:?}", name);
        Symbol(name)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// True for the two spellings the reader turns into booleans.
    pub fn is_boolean_literal(&self) -> bool {
        self.0 == "#t" || self.0 == "#f"
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> SymbolResult {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolError::Empty => write!(f, "empty symbol"),
            SymbolError::InvalidCharacters(s) => write!(f, "invalid symbol \"{}\"", s),
        }
    }
}


impl_try_from!(Symbol => Symbol; Sexp, ref Sexp, Primitive,);
