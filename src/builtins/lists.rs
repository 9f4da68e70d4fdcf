//! List surgery: `list head tail join`, operating on `QList`s.

use super::support::{check_arity, expect_non_empty, expect_qlist};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// `(list a b c ...)` — retags the already-evaluated argument list as a
/// `QList`. Never fails; zero arguments gives the empty list.
pub fn list(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    Value::QList(args)
}

/// `(head {a b c})` — the `QList` containing only the first element.
pub fn head(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if let Err(e) = check_arity("head", &args, 1) {
        return e.into();
    }
    let items = match expect_qlist("head", &args, 0) {
        Ok(items) => items,
        Err(e) => return e.into(),
    };
    if let Err(e) = expect_non_empty("head", items, 0) {
        return e.into();
    }
    Value::QList(vec![items[0].clone()])
}

/// `(tail {a b c})` — the `QList` with its first element removed.
pub fn tail(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    if let Err(e) = check_arity("tail", &args, 1) {
        return e.into();
    }
    let items = match expect_qlist("tail", &args, 0) {
        Ok(items) => items,
        Err(e) => return e.into(),
    };
    if let Err(e) = expect_non_empty("tail", items, 0) {
        return e.into();
    }
    Value::QList(items[1..].to_vec())
}

/// `(join {1} {2 3} ...)` — concatenates every `QList` argument into one.
pub fn join(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    let mut result = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        match expect_qlist("join", &args, i) {
            Ok(items) => result.extend(items.iter().cloned()),
            Err(e) => return e.into(),
        }
    }
    Value::QList(result)
}

pub fn register(env: &Rc<Environment>) {
    env.define("list".to_string(), Value::Builtin(list));
    env.define("head".to_string(), Value::Builtin(head));
    env.define("tail".to_string(), Value::Builtin(tail));
    env.define("join".to_string(), Value::Builtin(join));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::eval;

    fn env() -> Rc<Environment> {
        let env = Environment::new();
        register(&env);
        env
    }

    fn run(env: &Rc<Environment>, src: &str) -> Value {
        let forms = crate::reader::read_program(src).unwrap();
        eval(env, forms.into_iter().next().unwrap())
    }

    #[test]
    fn list_wraps_args_as_qlist() {
        assert_eq!(
            run(&env(), "(list 1 2 3)"),
            Value::QList(vec![Value::Number(1), Value::Number(2), Value::Number(3)])
        );
    }

    #[test]
    fn head_takes_first_element() {
        assert_eq!(
            run(&env(), "(head {1 2 3})"),
            Value::QList(vec![Value::Number(1)])
        );
    }

    #[test]
    fn tail_drops_first_element() {
        assert_eq!(
            run(&env(), "(tail {1 2 3})"),
            Value::QList(vec![Value::Number(2), Value::Number(3)])
        );
    }

    #[test]
    fn head_on_empty_list_is_an_error() {
        match run(&env(), "(head {})") {
            Value::Error(msg) => assert!(msg.contains("{}")),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn join_concatenates_qlists() {
        assert_eq!(
            run(&env(), "(join {1 2} {3 4})"),
            Value::QList(vec![
                Value::Number(1),
                Value::Number(2),
                Value::Number(3),
                Value::Number(4)
            ])
        );
    }

    #[test]
    fn head_on_non_qlist_is_a_type_error() {
        match run(&env(), "(head 5)") {
            Value::Error(msg) => assert!(msg.contains("incorrect type")),
            other => panic!("expected Error, got {other:?}"),
        }
    }
}
