use log::debug;

use crate::error::Error;
use crate::sexp::HeapSexp;


#[macro_use]
pub mod lang_err;
#[macro_use]
pub mod sexp;

pub mod builtins;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod primitive;
pub mod token;

pub mod prelude {
    pub use crate::error::{Error, ErrorCategory};
    pub use crate::lang_err::{ErrKind, ExpectedCount, LangErr};
    pub use crate::primitive::{BuiltIn, Number, Primitive, Symbol, ToSymbol};
    pub use crate::sexp::{cons, Cons, ConsList, HeapSexp, Sexp};
    pub use crate::{eval_str, run};
    // Macros.
    pub use crate::list;
}


/// Reads exactly one expression from input and evaluates it.
pub fn eval_str<S: AsRef<str>>(input: S) -> Result<HeapSexp, Error> {
    let form = parser::read_str(input)?;
    Ok(interpreter::eval(&form)?)
}

/// Reads, evaluates and prints exactly one expression.
pub fn run<S: AsRef<str>>(input: S) -> Result<String, Error> {
    match eval_str(input.as_ref()) {
        Ok(val) => Ok(val.to_string()),
        Err(err) => {
            debug!("run failed on {:?}: {}", input.as_ref(), err);
            Err(err)
        }
    }
}
