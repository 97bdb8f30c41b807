use std::{cell::RefCell, rc::Rc};

use rustc_hash::FxHashMap;

use crate::interpreter::value::core::Value;

/// Shared handle to an [`Environment`].
///
/// Function values hold one of these, so a scope lives exactly as long as the
/// longest-lived closure (or call frame) that can still reach it.
pub type Env = Rc<RefCell<Environment>>;

/// A lexical scope: a local name-to-value store plus an optional link to the
/// enclosing scope.
///
/// Lookups walk outward through the chain; writes only ever touch the local
/// store, so a child scope never mutates its parents.
///
/// ## Example
/// ```
/// use monkey::interpreter::{environment::Environment, value::core::Value};
///
/// let global = Environment::new().shared();
/// global.borrow_mut().set("x", Value::Integer(1));
///
/// let mut local = Environment::enclosed(&global);
/// local.set("y", Value::Integer(2));
///
/// assert_eq!(local.get("x"), Some(Value::Integer(1)));
/// assert_eq!(global.borrow().get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store: FxHashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates an empty top-level scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose lookups fall back to `outer`.
    #[must_use]
    pub fn enclosed(outer: &Env) -> Self {
        Self { store: FxHashMap::default(),
               outer: Some(Rc::clone(outer)), }
    }

    /// Wraps the scope in a shared handle.
    #[must_use]
    pub fn shared(self) -> Env {
        Rc::new(RefCell::new(self))
    }

    /// Resolves `name`, innermost scope first.
    ///
    /// A miss is reported as `None`; turning it into an error is the
    /// evaluator's job.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in the local store, overwriting any local binding, and
    /// returns the bound value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Value {
        self.store.insert(name.into(), value.clone());
        value
    }
}
