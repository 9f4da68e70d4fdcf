// ABOUTME: Environment module for managing variable bindings and scopes

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A single frame in the environment chain.
///
/// A frame owns a flat map of bindings plus a mutable link to its parent.
/// The parent link is mutable (not just constructed once) because a
/// lambda's captured frame is re-parented to the call-site environment
/// every time it is invoked (see `Environment::splice_parent`) — this is
/// a dynamic splice, not a lexical closure in the strict sense.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Creates a fresh frame with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// Creates a fresh frame parented to `parent`.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(Some(parent)),
        })
    }

    /// Looks up `name` in this frame, falling back to the parent chain.
    /// Returns a deep copy of the bound value — no holder ever shares a
    /// mutable value with the environment.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = self.parent.borrow().as_ref() {
            return parent.get(name);
        }
        None
    }

    /// Binds `name` to a (deep) copy of `value` in this frame only. If the
    /// symbol is already bound here it is replaced; the old value is
    /// dropped.
    pub fn define(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Re-parents this frame. Used by the evaluator when invoking a
    /// lambda: the captured frame's parent becomes the call-site
    /// environment at the moment of the call, not at lambda construction.
    pub fn splice_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Deep-copies this frame: every binding is cloned, but the parent
    /// link is copied as a reference (not recursively). This is what lets
    /// a cloned lambda's frame be re-parented independently of the frame
    /// it was copied from.
    pub fn copy_frame(&self) -> Rc<Environment> {
        let bindings = self
            .bindings
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let parent = self.parent.borrow().clone();
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            parent: RefCell::new(parent),
        })
    }
}

/// Walks `env`'s parent chain to the root frame and binds `name` there.
/// Free function (rather than a method) because it needs to reseat `cur`
/// across `Rc` links as it walks, which an `&self` method can't do.
pub fn define_global(env: &Rc<Environment>, name: String, value: Value) {
    let mut cur = Rc::clone(env);
    loop {
        let next = cur.parent.borrow().clone();
        match next {
            Some(parent) => cur = parent,
            None => break,
        }
    }
    cur.define(name, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_get() {
        let env = Environment::new();
        env.define("x".to_string(), Value::Number(42));
        assert_eq!(env.get("x"), Some(Value::Number(42)));
    }

    #[test]
    fn undefined_symbol_is_none() {
        let env = Environment::new();
        assert!(env.get("undefined").is_none());
    }

    #[test]
    fn child_shadows_parent() {
        let parent = Environment::new();
        parent.define("x".to_string(), Value::Number(1));

        let child = Environment::with_parent(parent);
        child.define("x".to_string(), Value::Number(2));

        assert_eq!(child.get("x"), Some(Value::Number(2)));
    }

    #[test]
    fn child_sees_parent_bindings() {
        let parent = Environment::new();
        parent.define("x".to_string(), Value::Number(1));
        let child = Environment::with_parent(parent);
        assert_eq!(child.get("x"), Some(Value::Number(1)));
    }

    #[test]
    fn define_global_walks_to_root() {
        let root = Environment::new();
        let mid = Environment::with_parent(root.clone());
        let leaf = Environment::with_parent(mid);

        define_global(&leaf, "g".to_string(), Value::Number(9));

        assert_eq!(root.get("g"), Some(Value::Number(9)));
        assert_eq!(leaf.get("g"), Some(Value::Number(9)));
    }

    #[test]
    fn get_returns_independent_copy() {
        let env = Environment::new();
        env.define(
            "xs".to_string(),
            Value::QList(vec![Value::Number(1), Value::Number(2)]),
        );
        let mut copy = env.get("xs").unwrap();
        if let Value::QList(items) = &mut copy {
            items.push(Value::Number(3));
        }
        assert_eq!(
            env.get("xs"),
            Some(Value::QList(vec![Value::Number(1), Value::Number(2)]))
        );
    }

    #[test]
    fn copy_frame_is_independent_but_shares_parent_reference() {
        let parent = Environment::new();
        parent.define("shared".to_string(), Value::Number(1));
        let frame = Environment::with_parent(parent.clone());
        frame.define("local".to_string(), Value::Number(2));

        let copy = frame.copy_frame();
        copy.define("local".to_string(), Value::Number(99));

        assert_eq!(frame.get("local"), Some(Value::Number(2)));
        assert_eq!(copy.get("local"), Some(Value::Number(99)));
        assert_eq!(copy.get("shared"), Some(Value::Number(1)));
    }

    #[test]
    fn splice_parent_changes_lookup() {
        let frame = Environment::new();
        frame.define("x".to_string(), Value::Number(1));
        assert!(frame.get("y").is_none());

        let call_site = Environment::new();
        call_site.define("y".to_string(), Value::Number(7));
        frame.splice_parent(call_site);

        assert_eq!(frame.get("y"), Some(Value::Number(7)));
    }
}
