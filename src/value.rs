// ABOUTME: The tagged value algebra: numbers, symbols, errors, quoted and
// ABOUTME: calling lists, and functions (builtin or lambda).

use crate::env::Environment;
use crate::error::EvalError;
use std::fmt;
use std::rc::Rc;

/// A primitive operation registered into the root environment at start-up.
///
/// Builtins receive the (already-evaluated) argument list and the
/// environment the call happened in, and return a `Value` directly —
/// failures are reified as `Value::Error`, not a Rust `Err`.
pub type BuiltinFn = fn(&Rc<Environment>, Vec<Value>) -> Value;

#[derive(Debug)]
pub enum Value {
    Number(i64),
    Symbol(String),
    Error(String),
    /// A calling form: evaluating it applies the head to the tail.
    SList(Vec<Value>),
    /// Quoted data: evaluation is suppressed for its contents.
    QList(Vec<Value>),
    Builtin(BuiltinFn),
    Lambda {
        /// A QList of Symbols, at most one `&` followed by one trailing symbol.
        formals: Box<Value>,
        /// A QList; evaluated by retagging to SList at call time.
        body: Box<Value>,
        env: Rc<Environment>,
    },
}

impl Value {
    /// The tag name used in error messages (`ltype_name` in the source).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Symbol(_) => "Symbol",
            Value::Error(_) => "Error",
            Value::SList(_) => "S-Expression",
            Value::QList(_) => "Q-Expression",
            Value::Builtin(_) | Value::Lambda { .. } => "Function",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn empty_sexpr() -> Value {
        Value::SList(Vec::new())
    }
}

/// Failures are reified as `Value::Error`, never a Rust `Err`, at the
/// boundary between the typed `EvalError` taxonomy and the language's own
/// single-channel error handling (see `error.rs`).
impl From<EvalError> for Value {
    fn from(err: EvalError) -> Value {
        Value::Error(err.to_string())
    }
}

/// Deep, structural copy. Lists copy children recursively; a lambda copies
/// its captured environment (see `Environment::copy_frame`) rather than
/// sharing the frame with the value it was cloned from — this is what lets
/// a lambda's frame be re-parented at call time without disturbing other
/// holders of the same lambda.
impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::Symbol(s) => Value::Symbol(s.clone()),
            Value::Error(s) => Value::Error(s.clone()),
            Value::SList(items) => Value::SList(items.clone()),
            Value::QList(items) => Value::QList(items.clone()),
            Value::Builtin(f) => Value::Builtin(*f),
            Value::Lambda { formals, body, env } => Value::Lambda {
                formals: formals.clone(),
                body: body.clone(),
                env: env.copy_frame(),
            },
        }
    }
}

/// Tag-equal and payload-equal. Two builtins are equal iff they point at
/// the same primitive; two lambdas are equal iff formals and body match
/// (captured environments are ignored, per spec: intentional, not a bug).
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::SList(a), Value::SList(b)) => a == b,
            (Value::QList(a), Value::QList(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => *a as usize == *b as usize,
            (
                Value::Lambda {
                    formals: f1,
                    body: b1,
                    ..
                },
                Value::Lambda {
                    formals: f2,
                    body: b2,
                    ..
                },
            ) => f1 == f2 && b1 == b2,
            _ => false,
        }
    }
}

fn print_children(items: &[Value]) -> String {
    items
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Error(msg) => write!(f, "Error: {msg}"),
            Value::SList(items) => write!(f, "({})", print_children(items)),
            Value::QList(items) => write!(f, "{{{}}}", print_children(items)),
            Value::Builtin(_) => write!(f, "<builtin>"),
            Value::Lambda { formals, body, .. } => write!(f, "(lambda {formals} {body})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;

    #[test]
    fn prints_numbers_and_symbols() {
        assert_eq!(Value::Number(42).to_string(), "42");
        assert_eq!(Value::Number(-5).to_string(), "-5");
        assert_eq!(Value::Symbol("foo".into()).to_string(), "foo");
    }

    #[test]
    fn prints_lists_with_single_space_separators() {
        let q = Value::QList(vec![Value::Number(1), Value::Number(2), Value::Number(3)]);
        assert_eq!(q.to_string(), "{1 2 3}");
        let s = Value::SList(vec![Value::Symbol("+".into()), Value::Number(1)]);
        assert_eq!(s.to_string(), "(+ 1)");
    }

    #[test]
    fn prints_error_with_prefix() {
        assert_eq!(Value::Error("boom".into()).to_string(), "Error: boom");
    }

    #[test]
    fn sexpr_and_qexpr_of_equal_children_do_not_compare_equal() {
        let s = Value::SList(vec![Value::Number(1)]);
        let q = Value::QList(vec![Value::Number(1)]);
        assert_ne!(s, q);
    }

    #[test]
    fn lambda_equality_ignores_captured_environment() {
        let env_a = Environment::new();
        let env_b = Environment::new();
        env_a.define("x".to_string(), Value::Number(1));
        env_b.define("x".to_string(), Value::Number(2));
        let formals = Box::new(Value::QList(vec![Value::Symbol("x".into())]));
        let body = Box::new(Value::QList(vec![Value::Symbol("x".into())]));
        let lam_a = Value::Lambda {
            formals: formals.clone(),
            body: body.clone(),
            env: env_a,
        };
        let lam_b = Value::Lambda {
            formals,
            body,
            env: env_b,
        };
        assert_eq!(lam_a, lam_b);
    }

    #[test]
    fn builtin_equality_is_by_pointer() {
        fn a(_: &Rc<Environment>, _: Vec<Value>) -> Value {
            Value::Number(1)
        }
        fn b(_: &Rc<Environment>, _: Vec<Value>) -> Value {
            Value::Number(2)
        }
        assert_eq!(Value::Builtin(a), Value::Builtin(a));
        assert_ne!(Value::Builtin(a), Value::Builtin(b));
    }

    #[test]
    fn clone_of_lambda_gets_independent_frame() {
        let captured = Environment::new();
        captured.define("x".to_string(), Value::Number(1));
        let lam = Value::Lambda {
            formals: Box::new(Value::QList(vec![])),
            body: Box::new(Value::QList(vec![])),
            env: captured.clone(),
        };
        let cloned = lam.clone();
        if let Value::Lambda { env, .. } = &cloned {
            env.define("y".to_string(), Value::Number(2));
            assert!(captured.get("y").is_none());
        } else {
            panic!("expected lambda");
        }
    }
}
