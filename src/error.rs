// ABOUTME: Error types reified into Value::Error by the evaluator and builtins

use thiserror::Error;

/// The evaluator's error taxonomy. Every variant's `Display` output is the
/// exact message text the corresponding failure produces in the language
/// (i.e. `Value::Error(e.to_string())` — see `From<EvalError> for Value`
/// in `value.rs`... note construction happens inline at call sites via
/// `.into()`, there is no separate exception channel at the language
/// level even though Rust models the taxonomy as a typed enum).
///
/// Wording is load-bearing: it's asserted on verbatim by the concrete
/// end-to-end scenarios and matches the reference C implementation this
/// crate was transcribed from, not a redesigned message set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("key '{0}' not in environment")]
    UnboundSymbol(String),

    #[error("'{op}' passed incorrect number of arguments. Expected {expected}, got {actual}.")]
    Arity {
        op: String,
        expected: String,
        actual: usize,
    },

    #[error("'{op}' passed incorrect type for argument {position}. Expected {expected}, got {actual}.")]
    TypeMismatch {
        op: String,
        expected: &'static str,
        actual: &'static str,
        position: usize,
    },

    #[error("'{op}' passed {{}} for argument {position}.")]
    EmptyList { op: String, position: usize },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid Number '{0}'")]
    InvalidNumber(String),

    #[error("S-Expression must start with a function. Expected Function, got {0}.")]
    NotAFunction(&'static str),

    #[error("Too many arguments given. Expected {expected}, given {given}.")]
    TooManyArguments { expected: usize, given: usize },

    #[error("Invalid format: '&' not followed by single symbol.")]
    MalformedVariadic,

    #[error("'lambda' can only define symbols. Expected Symbol, got {actual} for formal argument {position}.")]
    LambdaNonSymbolFormal {
        actual: &'static str,
        position: usize,
    },

    #[error("'{op}' can only define symbols. Expected Symbol, got {actual}.")]
    VarNonSymbol { op: String, actual: &'static str },

    #[error("'{op}' requires same number of values and symbols. Got {symbols} symbols, and {values} values")]
    VarArityMismatch {
        op: String,
        symbols: usize,
        values: usize,
    },
}
