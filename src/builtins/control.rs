//! Control flow: `eval` (retag-and-evaluate) and `if` (branch-and-evaluate).

use super::support::{check_arity, expect_number, expect_qlist};
use crate::env::Environment;
use crate::eval::eval_sexpr;
use crate::value::Value;
use std::rc::Rc;

/// `(eval {+ 1 2})` — retags the `QList` argument as an `SList` and
/// evaluates it. This is also the mechanism a lambda call uses internally
/// to run its body (`eval::call`).
pub fn eval(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Err(e) = check_arity("eval", &args, 1) {
        return e.into();
    }
    if let Err(e) = expect_qlist("eval", &args, 0) {
        return e.into();
    }
    let items = match args.remove(0) {
        Value::QList(items) => items,
        _ => unreachable!("checked above"),
    };
    eval_sexpr(env, items)
}

/// `(if cond {then...} {else...})` — retags the chosen branch as an
/// `SList` and evaluates it.
pub fn if_(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Err(e) = check_arity("if", &args, 3) {
        return e.into();
    }
    let cond = match expect_number("if", &args, 0) {
        Ok(n) => n,
        Err(e) => return e.into(),
    };
    if let Err(e) = expect_qlist("if", &args, 1) {
        return e.into();
    }
    if let Err(e) = expect_qlist("if", &args, 2) {
        return e.into();
    }

    let else_branch = args.pop().expect("length checked above");
    let then_branch = args.pop().expect("length checked above");
    let branch = if cond != 0 { then_branch } else { else_branch };
    let items = match branch {
        Value::QList(items) => items,
        _ => unreachable!("checked above"),
    };
    eval_sexpr(env, items)
}

pub fn register(env: &Rc<Environment>) {
    env.define("eval".to_string(), Value::Builtin(eval));
    env.define("if".to_string(), Value::Builtin(if_));
}
