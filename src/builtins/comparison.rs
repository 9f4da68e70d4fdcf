//! Comparison: `== != < > <= >=`.
//!
//! `==`/`!=` accept any two values and use `Value`'s structural equality
//! (lambda equality ignores captured environments — see DESIGN.md); the
//! four ordering operators require both arguments to be `Number`.

use super::support::{check_arity, expect_number};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

fn as_number(b: bool) -> Value {
    Value::Number(if b { 1 } else { 0 })
}

/// `(== a b)` — structural equality.
pub fn eq(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if let Err(e) = check_arity("==", &args, 2) {
        return e.into();
    }
    as_number(args[0] == args[1])
}

/// `(!= a b)` — structural inequality.
pub fn neq(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if let Err(e) = check_arity("!=", &args, 2) {
        return e.into();
    }
    as_number(args[0] != args[1])
}

fn ordering(op: &str, args: Vec<Value>, f: fn(i64, i64) -> bool) -> Value {
    if let Err(e) = check_arity(op, &args, 2) {
        return e.into();
    }
    let a = match expect_number(op, &args, 0) {
        Ok(n) => n,
        Err(e) => return e.into(),
    };
    let b = match expect_number(op, &args, 1) {
        Ok(n) => n,
        Err(e) => return e.into(),
    };
    as_number(f(a, b))
}

pub fn lt(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    ordering("<", args, |a, b| a < b)
}

pub fn gt(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    ordering(">", args, |a, b| a > b)
}

pub fn le(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    ordering("<=", args, |a, b| a <= b)
}

pub fn ge(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    ordering(">=", args, |a, b| a >= b)
}

pub fn register(env: &Rc<Environment>) {
    env.define("==".to_string(), Value::Builtin(eq));
    env.define("!=".to_string(), Value::Builtin(neq));
    env.define("<".to_string(), Value::Builtin(lt));
    env.define(">".to_string(), Value::Builtin(gt));
    env.define("<=".to_string(), Value::Builtin(le));
    env.define(">=".to_string(), Value::Builtin(ge));
}
