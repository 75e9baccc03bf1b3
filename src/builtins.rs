//! Module holding the fixed table of builtin procedures and their
//! implementations.
//!
//! Every builtin receives its operands already flattened into a slice. Eager
//! builtins get evaluated values; and/or get the raw operand forms and
//! evaluate them on their own.

use lazy_static::lazy_static;
use log::debug;
use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::TryFrom;

use crate::interpreter::{self, Ret};
use crate::lang_err::LangErr;
use crate::primitive::{BuiltIn, Number, Op, Primitive};
use crate::sexp::{cons, ConsList, HeapSexp, Sexp};


macro_rules! builtins {
    [$($name:literal => $op:ident),+ $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($name, BuiltIn::new($name, Op::$op));
            )+
            m
        }
    };
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "quote" => Quote,

        "number?" => IsNumber,
        "boolean?" => IsBoolean,
        "pair?" => IsPair,
        "null?" => IsNull,
        "list?" => IsList,

        "=" => NumEq,
        "<" => Lt,
        ">" => Gt,
        "<=" => Le,
        ">=" => Ge,
        "+" => Add,
        "*" => Mul,
        "-" => Sub,
        "/" => Div,
        "max" => Max,
        "min" => Min,
        "abs" => Abs,

        "not" => Not,
        "and" => And,
        "or" => Or,

        "cons" => Cons,
        "car" => Car,
        "cdr" => Cdr,
        "list" => List,
        "list-ref" => ListRef,
        "list-tail" => ListTail,
    ];
}


/// Builtin bound to exactly name, if any.
pub fn lookup(name: &str) -> Option<BuiltIn> {
    BUILTINS.get(name).copied()
}

/// Names of every builtin, in no particular order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.keys().copied()
}

/// Runs builtin over args, which must already be in the form its ArgMode
/// asks for.
pub fn apply(builtin: BuiltIn, args: &[HeapSexp]) -> Ret {
    debug!("applying {} to {} operand(s)", builtin, args.len());
    match builtin.op() {
        Op::Quote => one(builtin, args).map(HeapSexp::clone),

        Op::IsNumber => predicate(builtin, args, |s| {
            matches!(s, Sexp::Primitive(Primitive::Number(_)))
        }),
        Op::IsBoolean => predicate(builtin, args, |s| {
            matches!(s, Sexp::Primitive(Primitive::Boolean(_)))
        }),
        Op::IsPair => predicate(builtin, args, is_pair),
        Op::IsNull => predicate(builtin, args, Sexp::is_nil),
        Op::IsList => predicate(builtin, args, Sexp::is_proper_list),

        Op::NumEq => compare(args, |a, b| a == b),
        Op::Lt => compare(args, |a, b| a < b),
        Op::Gt => compare(args, |a, b| a > b),
        Op::Le => compare(args, |a, b| a <= b),
        Op::Ge => compare(args, |a, b| a >= b),
        Op::Add => add(args),
        Op::Mul => mul(args),
        Op::Sub => sub(builtin, args),
        Op::Div => div(builtin, args),
        Op::Max => extremum(builtin, args, std::cmp::max),
        Op::Min => extremum(builtin, args, std::cmp::min),
        Op::Abs => abs(builtin, args),

        Op::Not => {
            let arg = one(builtin, args)?;
            Ok(Sexp::from(is_false(arg.as_ref())).into())
        }
        Op::And => and(args),
        Op::Or => or(args),

        Op::Cons => {
            let (car, cdr) = two(builtin, args)?;
            Ok(cons(car.clone(), cdr.clone()))
        }
        Op::Car => car(builtin, args),
        Op::Cdr => cdr(builtin, args),
        Op::List => {
            let mut list = ConsList::new();
            for arg in args {
                list.append(arg.clone());
            }
            Ok(list.release())
        }
        Op::ListRef => list_ref(builtin, args),
        Op::ListTail => list_tail(builtin, args),
    }
}


fn one<'a>(builtin: BuiltIn, args: &'a [HeapSexp]) -> Result<&'a HeapSexp, LangErr> {
    match args {
        [arg] => Ok(arg),
        _ => wrong_count(builtin, args),
    }
}

fn two<'a>(
    builtin: BuiltIn,
    args: &'a [HeapSexp],
) -> Result<(&'a HeapSexp, &'a HeapSexp), LangErr> {
    match args {
        [first, second] => Ok((first, second)),
        _ => wrong_count(builtin, args),
    }
}

fn wrong_count<T>(builtin: BuiltIn, args: &[HeapSexp]) -> Result<T, LangErr> {
    err!(WrongArgumentCount {
        given: args.len(),
        expected: builtin.op().arity(),
    })
}

fn invalid<T>(given: &HeapSexp, expected: &'static str) -> Result<T, LangErr> {
    err!(InvalidArgument {
        given: given.clone(),
        expected: Cow::Borrowed(expected),
    })
}

fn overflow<T>(builtin: BuiltIn) -> Result<T, LangErr> {
    err!(IntegerOverflow(builtin.name()))
}

fn is_false(sexp: &Sexp) -> bool {
    matches!(sexp, Sexp::Primitive(Primitive::Boolean(false)))
}

// Exactly two elements, counting a non-pair tail.
fn is_pair(sexp: &Sexp) -> bool {
    sexp.is_cons() && sexp.iter().count() == 2
}

fn predicate<F: Fn(&Sexp) -> bool>(builtin: BuiltIn, args: &[HeapSexp], pred: F) -> Ret {
    let arg = one(builtin, args)?;
    Ok(Sexp::from(pred(arg.as_ref())).into())
}

fn number(arg: &HeapSexp) -> Result<Number, LangErr> {
    match <&Number>::try_from(arg.as_ref()) {
        Ok(num) => Ok(*num),
        Err(_) => invalid(arg, "a Number"),
    }
}

// Type-checks every operand up front so no partial result is computed.
fn numbers(args: &[HeapSexp]) -> Result<Vec<Number>, LangErr> {
    args.iter().map(number).collect()
}

fn split_first(
    builtin: BuiltIn,
    args: &[HeapSexp],
) -> Result<(Number, Vec<Number>), LangErr> {
    let mut nums = numbers(args)?;
    if nums.is_empty() {
        return wrong_count(builtin, args);
    }
    let first = nums.remove(0);
    Ok((first, nums))
}

fn compare<F: Fn(Number, Number) -> bool>(args: &[HeapSexp], rel: F) -> Ret {
    let nums = numbers(args)?;
    let holds = nums.windows(2).all(|w| rel(w[0], w[1]));
    Ok(Sexp::from(holds).into())
}

fn add(args: &[HeapSexp]) -> Ret {
    let mut curr = Number::new(0);
    for num in numbers(args)? {
        curr = match curr.checked_add(num) {
            Some(sum) => sum,
            None => return err!(IntegerOverflow("+")),
        };
    }
    Ok(curr.into())
}

fn mul(args: &[HeapSexp]) -> Ret {
    let mut curr = Number::new(1);
    for num in numbers(args)? {
        curr = match curr.checked_mul(num) {
            Some(product) => product,
            None => return err!(IntegerOverflow("*")),
        };
    }
    Ok(curr.into())
}

fn sub(builtin: BuiltIn, args: &[HeapSexp]) -> Ret {
    let (first, rest) = split_first(builtin, args)?;
    if rest.is_empty() {
        return match first.checked_neg() {
            Some(neg) => Ok(neg.into()),
            None => overflow(builtin),
        };
    }

    let mut curr = first;
    for num in rest {
        curr = match curr.checked_sub(num) {
            Some(diff) => diff,
            None => return overflow(builtin),
        };
    }
    Ok(curr.into())
}

fn div(builtin: BuiltIn, args: &[HeapSexp]) -> Ret {
    let (first, rest) = split_first(builtin, args)?;
    let mut curr = first;
    for divisor in rest {
        if divisor.is_zero() {
            return err!(DivisionByZero);
        }
        curr = match curr.checked_div(divisor) {
            Some(quotient) => quotient,
            None => return overflow(builtin),
        };
    }
    Ok(curr.into())
}

fn extremum<F: Fn(Number, Number) -> Number>(builtin: BuiltIn, args: &[HeapSexp], pick: F) -> Ret {
    let (first, rest) = split_first(builtin, args)?;
    Ok(rest.into_iter().fold(first, pick).into())
}

fn abs(builtin: BuiltIn, args: &[HeapSexp]) -> Ret {
    let num = number(one(builtin, args)?)?;
    match num.checked_abs() {
        Some(abs) => Ok(abs.into()),
        None => overflow(builtin),
    }
}

fn and(forms: &[HeapSexp]) -> Ret {
    let mut last: HeapSexp = Sexp::from(true).into();
    for form in forms {
        last = interpreter::eval(form)?;
        if is_false(&last) {
            break;
        }
    }
    Ok(last)
}

fn or(forms: &[HeapSexp]) -> Ret {
    for form in forms {
        let val = interpreter::eval(form)?;
        if !is_false(&val) {
            return Ok(val);
        }
    }
    Ok(Sexp::from(false).into())
}

fn car(builtin: BuiltIn, args: &[HeapSexp]) -> Ret {
    let arg = one(builtin, args)?;
    match arg.as_ref() {
        Sexp::Cons(cons) => Ok(cons.car().clone()),
        _ => invalid(arg, "a non-empty list"),
    }
}

fn cdr(builtin: BuiltIn, args: &[HeapSexp]) -> Ret {
    let arg = one(builtin, args)?;
    match arg.as_ref() {
        Sexp::Cons(cons) => Ok(cons.cdr().clone()),
        _ => invalid(arg, "a non-empty list"),
    }
}

// Validates (list, index) and returns the list, index and pair count.
fn indexed<'a>(
    builtin: BuiltIn,
    args: &'a [HeapSexp],
) -> Result<(&'a HeapSexp, i64, usize), LangErr> {
    let (list, index) = two(builtin, args)?;
    if let Sexp::Primitive(_) = list.as_ref() {
        return invalid(list, "a list");
    }
    let index = number(index)?.value();
    let len = list.iter().filter(|(_, from_cons)| *from_cons).count();
    Ok((list, index, len))
}

fn list_ref(builtin: BuiltIn, args: &[HeapSexp]) -> Ret {
    let (list, index, len) = indexed(builtin, args)?;
    if index < 0 || index as u64 >= len as u64 {
        return err!(IndexOutOfRange { index, len });
    }

    match list.iter().nth(index as usize) {
        Some((elem, _)) => Ok(elem.clone()),
        None => err!(IndexOutOfRange { index, len }),
    }
}

fn list_tail(builtin: BuiltIn, args: &[HeapSexp]) -> Ret {
    let (list, index, len) = indexed(builtin, args)?;
    if index < 0 || index as u64 > len as u64 {
        return err!(IndexOutOfRange { index, len });
    }

    let mut curr = list;
    for _ in 0..index {
        curr = match curr.as_ref() {
            Sexp::Cons(cons) => cons.cdr(),
            _ => return err!(IndexOutOfRange { index, len }),
        };
    }
    Ok(curr.clone())
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
