//! Runtime variable store.
//!
//! One flat table per run. Blocks, loops and function bodies do not open
//! frames here, so a declaration in a nested block overwrites the binding of
//! the same name in the enclosing block, and it stays overwritten after the
//! nested block ends. Compile-time scoping lives in `lum_types` and is not
//! consulted at run time.

use rustc_hash::FxHashMap;

use crate::Value;

/// The flat name -> value table.
#[derive(Clone, Debug, Default)]
pub struct RuntimeScope {
    bindings: FxHashMap<String, Value>,
}

impl RuntimeScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any earlier binding.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_owned(), value);
        }
    }

    /// Store into `name`. There is no undeclared-variable error at run time:
    /// assigning an unbound name creates it.
    #[inline]
    pub fn assign(&mut self, name: &str, value: Value) {
        self.define(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
