//! Arithmetic: `+ - * /`, folded left over `Number` arguments.
//!
//! `-` with a single argument negates it; `/` with a single argument folds
//! to that argument unchanged (the fold loop has nothing to divide by).
//! Overflow wraps (`i64::wrapping_*`) rather than erroring — see
//! DESIGN.md for why wrapping was picked over the spec's open alternative
//! of a checked error.

use super::support::expect_number;
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn fold(op: &str, args: Vec<Value>, f: fn(i64, i64) -> i64) -> Value {
    if args.is_empty() {
        return EvalError::Arity {
            op: op.to_string(),
            expected: "at least 1".to_string(),
            actual: 0,
        }
        .into();
    }
    let mut acc = match expect_number(op, &args, 0) {
        Ok(n) => n,
        Err(e) => return e.into(),
    };
    for i in 1..args.len() {
        match expect_number(op, &args, i) {
            Ok(n) => acc = f(acc, n),
            Err(e) => return e.into(),
        }
    }
    Value::Number(acc)
}

/// `(+ a b c ...)` — sum, left to right.
pub fn add(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    fold("+", args, i64::wrapping_add)
}

/// `(- a)` negates; `(- a b c ...)` subtracts the rest from `a`.
pub fn sub(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return EvalError::Arity {
            op: "-".to_string(),
            expected: "at least 1".to_string(),
            actual: 0,
        }
        .into();
    }
    let first = match expect_number("-", &args, 0) {
        Ok(n) => n,
        Err(e) => return e.into(),
    };
    if args.len() == 1 {
        return Value::Number(first.wrapping_neg());
    }
    let mut acc = first;
    for i in 1..args.len() {
        match expect_number("-", &args, i) {
            Ok(n) => acc = acc.wrapping_sub(n),
            Err(e) => return e.into(),
        }
    }
    Value::Number(acc)
}

/// `(* a b c ...)` — product, left to right.
pub fn mul(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    fold("*", args, i64::wrapping_mul)
}

/// `(/ a b c ...)` — integer division, left to right; any zero divisor
/// produces `Division by zero`.
pub fn div(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if args.is_empty() {
        return EvalError::Arity {
            op: "/".to_string(),
            expected: "at least 1".to_string(),
            actual: 0,
        }
        .into();
    }
    let mut acc = match expect_number("/", &args, 0) {
        Ok(n) => n,
        Err(e) => return e.into(),
    };
    for i in 1..args.len() {
        let n = match expect_number("/", &args, i) {
            Ok(n) => n,
            Err(e) => return e.into(),
        };
        if n == 0 {
            return EvalError::DivisionByZero.into();
        }
        acc = acc.wrapping_div(n);
    }
    Value::Number(acc)
}

pub fn register(env: &Rc<Environment>) {
    env.define("+".to_string(), Value::Builtin(add));
    env.define("-".to_string(), Value::Builtin(sub));
    env.define("*".to_string(), Value::Builtin(mul));
    env.define("/".to_string(), Value::Builtin(div));
}
