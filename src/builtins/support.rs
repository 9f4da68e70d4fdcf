// ABOUTME: Shared argument-validation helpers, the Rust analogue of the
// ABOUTME: reference implementation's LASSERT family of macros.

use crate::error::EvalError;
use crate::value::Value;

/// `LASSERT_NUM_ARGS`: fail unless exactly `expected` arguments were given.
pub fn check_arity(op: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() != expected {
        return Err(EvalError::Arity {
            op: op.to_string(),
            expected: expected.to_string(),
            actual: args.len(),
        });
    }
    Ok(())
}

/// `LASSERT_ARG_TYPE` for `Number`.
pub fn expect_number(op: &str, args: &[Value], position: usize) -> Result<i64, EvalError> {
    match &args[position] {
        Value::Number(n) => Ok(*n),
        other => Err(EvalError::TypeMismatch {
            op: op.to_string(),
            expected: "Number",
            actual: other.type_name(),
            position,
        }),
    }
}

/// `LASSERT_ARG_TYPE` for `QList`.
pub fn expect_qlist<'a>(op: &str, args: &'a [Value], position: usize) -> Result<&'a Vec<Value>, EvalError> {
    match &args[position] {
        Value::QList(items) => Ok(items),
        other => Err(EvalError::TypeMismatch {
            op: op.to_string(),
            expected: "Q-Expression",
            actual: other.type_name(),
            position,
        }),
    }
}

/// `LASSERT_NOT_EMPTY`.
pub fn expect_non_empty(op: &str, items: &[Value], position: usize) -> Result<(), EvalError> {
    if items.is_empty() {
        return Err(EvalError::EmptyList {
            op: op.to_string(),
            position,
        });
    }
    Ok(())
}
