//! Built-in functions registered into the root environment at start-up.
//!
//! Organized the way the reference implementation groups them: list
//! surgery, arithmetic, comparison, control flow, and variable/function
//! construction. Each sub-module owns a `register(env)` that inserts its
//! own bindings; `register_builtins` just calls all of them.

pub mod arithmetic;
pub mod comparison;
pub mod control;
pub mod lists;
mod support;
pub mod vars;

use crate::env::Environment;
use std::rc::Rc;

/// Registers every builtin in `env`. Called once, on the root frame, at
/// interpreter start-up (`main.rs`/`repl.rs`).
pub fn register_builtins(env: &Rc<Environment>) {
    lists::register(env);
    arithmetic::register(env);
    comparison::register(env);
    control::register(env);
    vars::register(env);
}
