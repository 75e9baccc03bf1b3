//! Module for evaluating S-exps.
//!
//! There are no bindings: a symbol always names a builtin, and the only
//! compound form is application of a builtin.

use log::{debug, trace};

use crate::builtins;
use crate::lang_err::LangErr;
use crate::primitive::{ArgMode, BuiltIn, Primitive};
use crate::sexp::{Cons, HeapSexp, Sexp, SexpIter};


pub type Ret = Result<HeapSexp, LangErr>;


pub fn eval(form: &HeapSexp) -> Ret {
    trace!("eval {}", form);
    match form.as_ref() {
        Sexp::Primitive(Primitive::Symbol(symbol)) => match builtins::lookup(symbol.as_str()) {
            Some(builtin) => Ok(builtin.into()),
            None => err!(UnboundSymbol(symbol.clone())),
        },
        Sexp::Primitive(_) => Ok(form.clone()),
        Sexp::Cons(cons) => apply(cons),
        Sexp::Nil => err!(InvalidSexp(form.clone())),
    }
}

/// Evaluates every form in order, stopping at the first failure.
pub fn evlis(forms: &[HeapSexp]) -> Result<Vec<HeapSexp>, LangErr> {
    forms.iter().map(eval).collect()
}

/// Operands of an application, in order. A non-pair tail is the final
/// operand.
pub fn operands(cons: &Cons) -> Vec<HeapSexp> {
    SexpIter::new(cons.cdr())
        .map(|(operand, _)| operand.clone())
        .collect()
}

fn apply(cons: &Cons) -> Ret {
    let builtin = procedure(cons.car())?;
    let operands = operands(cons);
    builtin.op().arity().check(operands.len())?;

    let args = match builtin.op().arg_mode() {
        ArgMode::Eager => evlis(&operands)?,
        ArgMode::Lazy | ArgMode::Quoted => operands,
    };

    builtins::apply(builtin, &args).map_err(|err| {
        debug!("{} failed: {}", builtin, err);
        err
    })
}

fn procedure(head: &HeapSexp) -> Result<BuiltIn, LangErr> {
    let val = eval(head)?;
    match val.as_ref() {
        Sexp::Primitive(Primitive::BuiltIn(builtin)) => Ok(*builtin),
        _ => err!(NotAProcedure(val)),
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
