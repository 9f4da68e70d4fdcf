// ABOUTME: Evaluator: eval, eval_sexpr, and call (builtin dispatch / lambda application)

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// `eval(env, v)`. Symbols resolve against `env`; S-expressions are
/// handed to `eval_sexpr`; every other tag — including `QList`, which is
/// inert data, not something to recurse into — evaluates to itself.
pub fn eval(env: &Rc<Environment>, v: Value) -> Value {
    match v {
        Value::Symbol(name) => match env.get(&name) {
            Some(value) => value,
            None => EvalError::UnboundSymbol(name).into(),
        },
        Value::SList(items) => eval_sexpr(env, items),
        other => other,
    }
}

/// `eval_sexpr(env, sv)`. Every child is evaluated unconditionally before
/// the result is scanned for the first `Error` — a side effect in a later
/// child (e.g. a `def`) still lands even when an earlier child produced
/// an error. This mirrors the reference evaluator's two separate loops
/// rather than short-circuiting the per-child loop itself.
pub fn eval_sexpr(env: &Rc<Environment>, items: Vec<Value>) -> Value {
    let mut evaluated: Vec<Value> = items.into_iter().map(|child| eval(env, child)).collect();

    if let Some(pos) = evaluated.iter().position(Value::is_error) {
        return evaluated.swap_remove(pos);
    }

    if evaluated.is_empty() {
        return Value::empty_sexpr();
    }
    if evaluated.len() == 1 {
        return evaluated.pop().expect("len checked above");
    }

    let head = evaluated.remove(0);
    match head {
        Value::Builtin(_) | Value::Lambda { .. } => call(env, head, evaluated),
        other => EvalError::NotAFunction(other.type_name()).into(),
    }
}

/// Retags a QList as an SList and evaluates it. This is the `eval`
/// builtin's own logic, factored out so `call` can reuse it verbatim when
/// it hands a lambda's body to the evaluator (§4.5: "wrap the body into a
/// single-element SList and hand it to the eval builtin").
pub fn eval_qlist_as_sexpr(env: &Rc<Environment>, items: Vec<Value>) -> Value {
    eval_sexpr(env, items)
}

/// `call(env, f, args)`. `env` is the call-site environment: for a
/// builtin it is passed straight through; for a lambda it becomes the
/// parent of the captured frame only once every formal is bound (the
/// dynamic splice, §3.2/§9) — binding args into an unspliced frame first
/// matches the reference implementation's `lval_call`.
pub fn call(env: &Rc<Environment>, f: Value, mut args: Vec<Value>) -> Value {
    match f {
        Value::Builtin(builtin) => builtin(env, args),
        Value::Lambda { formals, body, env: captured } => {
            let mut formals = match *formals {
                Value::QList(items) => items,
                _ => unreachable!("Lambda::formals is always a QList"),
            };
            let given = args.len();
            let total = formals.len();

            while !args.is_empty() {
                if formals.is_empty() {
                    return EvalError::TooManyArguments {
                        expected: total,
                        given,
                    }
                    .into();
                }
                let sym = formals.remove(0);
                let name = match sym {
                    Value::Symbol(s) => s,
                    _ => unreachable!("Lambda::formals contains only Symbols"),
                };

                if name == "&" {
                    if formals.len() != 1 {
                        return EvalError::MalformedVariadic.into();
                    }
                    let sink = match formals.remove(0) {
                        Value::Symbol(s) => s,
                        _ => return EvalError::MalformedVariadic.into(),
                    };
                    captured.define(sink, Value::QList(std::mem::take(&mut args)));
                    break;
                }

                let value = args.remove(0);
                captured.define(name, value);
            }

            let starts_with_variadic =
                matches!(formals.first(), Some(Value::Symbol(s)) if s == "&");
            if starts_with_variadic {
                if formals.len() != 2 {
                    return EvalError::MalformedVariadic.into();
                }
                let sink = match formals.remove(1) {
                    Value::Symbol(s) => s,
                    _ => unreachable!("checked above"),
                };
                formals.clear();
                captured.define(sink, Value::QList(Vec::new()));
            }

            if formals.is_empty() {
                captured.splice_parent(Rc::clone(env));
                let body_items = match *body {
                    Value::QList(items) => items,
                    _ => unreachable!("Lambda::body is always a QList"),
                };
                eval_qlist_as_sexpr(&captured, body_items)
            } else {
                Value::Lambda {
                    formals: Box::new(Value::QList(formals)),
                    body,
                    env: captured,
                }
            }
        }
        _ => unreachable!("call is only invoked with Builtin or Lambda heads"),
    }
}
