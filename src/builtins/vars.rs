//! Variable and function construction: `lambda`, `def`, `=`.

use super::support::{check_arity, expect_qlist};
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// `(lambda {formals} {body})` — formals must be symbols only (one `&`,
/// followed by exactly one trailing symbol, is checked at call time, not
/// here). The captured frame starts with no parent; a parent is only
/// spliced in at call time (§3.2/§9).
pub fn lambda(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Err(e) = check_arity("lambda", &args, 2) {
        return e.into();
    }
    if let Err(e) = expect_qlist("lambda", &args, 0) {
        return e.into();
    }
    if let Err(e) = expect_qlist("lambda", &args, 1) {
        return e.into();
    }

    let body = args.pop().expect("length checked above");
    let formals = args.pop().expect("length checked above");
    let formal_items = match &formals {
        Value::QList(items) => items,
        _ => unreachable!("checked above"),
    };
    for (i, formal) in formal_items.iter().enumerate() {
        if !matches!(formal, Value::Symbol(_)) {
            return EvalError::LambdaNonSymbolFormal {
                actual: formal.type_name(),
                position: i,
            }
            .into();
        }
    }

    Value::Lambda {
        formals: Box::new(formals),
        body: Box::new(body),
        env: Environment::new(),
    }
}

/// Shared implementation of `def` (binds in the root frame) and `=`
/// (binds in the current frame). The first argument is a `QList` of
/// symbols; the remaining arguments are the values, one per symbol.
fn bind_vars(env: &Rc<Environment>, op: &str, mut args: Vec<Value>, global: bool) -> Value {
    if args.is_empty() {
        return EvalError::TypeMismatch {
            op: op.to_string(),
            expected: "Q-Expression",
            actual: "Nothing",
            position: 0,
        }
        .into();
    }
    if let Err(e) = expect_qlist(op, &args, 0) {
        return e.into();
    }
    let syms = args.remove(0);
    let sym_items = match &syms {
        Value::QList(items) => items,
        _ => unreachable!("checked above"),
    };
    for sym in sym_items {
        if !matches!(sym, Value::Symbol(_)) {
            return EvalError::VarNonSymbol {
                op: op.to_string(),
                actual: sym.type_name(),
            }
            .into();
        }
    }
    if sym_items.len() != args.len() {
        return EvalError::VarArityMismatch {
            op: op.to_string(),
            symbols: sym_items.len(),
            values: args.len(),
        }
        .into();
    }

    for (sym, value) in sym_items.iter().zip(args.into_iter()) {
        let name = match sym {
            Value::Symbol(s) => s.clone(),
            _ => unreachable!("checked above"),
        };
        if global {
            crate::env::define_global(env, name, value);
        } else {
            env.define(name, value);
        }
    }
    Value::empty_sexpr()
}

/// `(def {a b} 1 2)` — binds `a` and `b` in the root frame.
pub fn def(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    bind_vars(env, "def", args, true)
}

/// `(= {a b} 1 2)` — binds `a` and `b` in the current frame.
pub fn put(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    bind_vars(env, "=", args, false)
}

pub fn register(env: &Rc<Environment>) {
    env.define("lambda".to_string(), Value::Builtin(lambda));
    env.define("def".to_string(), Value::Builtin(def));
    env.define("=".to_string(), Value::Builtin(put));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::eval;

    fn env() -> Rc<Environment> {
        let env = Environment::new();
        register(&env);
        super::super::arithmetic::register(&env);
        env
    }

    fn run(env: &Rc<Environment>, src: &str) -> Vec<Value> {
        crate::reader::read_program(src)
            .unwrap()
            .into_iter()
            .map(|form| eval(env, form))
            .collect()
    }

    #[test]
    fn def_is_visible_from_a_nested_scope() {
        let env = env();
        let child = Environment::with_parent(env.clone());
        run(&env, "(def {x} 10)");
        assert_eq!(child.get("x"), Some(Value::Number(10)));
    }

    #[test]
    fn put_is_only_visible_in_current_and_descendant_scopes() {
        let root = env();
        let scope = Environment::with_parent(root.clone());
        crate::eval::eval(
            &scope,
            crate::reader::read_program("(= {y} 5)").unwrap().remove(0),
        );
        assert_eq!(scope.get("y"), Some(Value::Number(5)));
        assert!(root.get("y").is_none());
    }

    #[test]
    fn def_zero_symbols_zero_values_is_a_no_op() {
        let env = env();
        let results = run(&env, "(def {})");
        assert_eq!(results, vec![Value::empty_sexpr()]);
    }

    #[test]
    fn lambda_rejects_non_symbol_formal() {
        let env = env();
        match run(&env, "(lambda {1} {1})")[0].clone() {
            Value::Error(msg) => assert!(msg.contains("formal argument 0")),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_symbols_and_values_is_an_error() {
        let env = env();
        match run(&env, "(def {a b} 1)")[0].clone() {
            Value::Error(msg) => assert!(msg.contains("requires same number")),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn define_lambda_and_apply() {
        let env = env();
        run(
            &env,
            "(def {add-mul} (lambda {x y} {+ x (* x y)}))",
        );
        let result = run(&env, "(add-mul 10 20)");
        assert_eq!(result, vec![Value::Number(210)]);
    }
}
