use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// A scope of variable bindings.
///
/// Each environment owns the scope that encloses it, forming a chain from
/// the innermost block out to the global scope. Lookups and assignments walk
/// the chain outward; definitions always land in the innermost scope.
#[derive(Debug, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<Box<Self>>,
}

impl Environment {
    /// Creates an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope nested inside `enclosing`.
    #[must_use]
    pub fn with_enclosing(enclosing: Self) -> Self {
        Self { values:    HashMap::new(),
               enclosing: Some(Box::new(enclosing)), }
    }

    /// Consumes this scope and returns the one it was nested in.
    ///
    /// The global scope returns itself.
    #[must_use]
    pub fn into_enclosing(self) -> Self {
        match self.enclosing {
            Some(enclosing) => *enclosing,
            None => self,
        }
    }

    /// Binds `name` in this scope, replacing any previous binding here.
    ///
    /// Redeclaring a variable is allowed; bindings in enclosing scopes are
    /// shadowed, not touched.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks up `name`, searching from this scope outward.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` when no scope in the chain
    /// binds `name`.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut globals = Environment::new();
    /// globals.define("a", Value::Number(1.0));
    ///
    /// let block = Environment::with_enclosing(globals);
    /// assert_eq!(block.get("a", 1).unwrap(), Value::Number(1.0));
    /// assert!(block.get("b", 1).is_err());
    /// ```
    pub fn get(&self, name: &str, line: usize) -> Result<Value, RuntimeError> {
        if let Some(value) = self.values.get(name) {
            return Ok(value.clone());
        }
        match &self.enclosing {
            Some(enclosing) => enclosing.get(name, line),
            None => Err(undefined(name, line)),
        }
    }

    /// Rebinds an existing variable in the nearest scope that defines it.
    ///
    /// Never creates a binding.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` when no scope in the chain
    /// binds `name`.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &mut self.enclosing {
            Some(enclosing) => enclosing.assign(name, value, line),
            None => Err(undefined(name, line)),
        }
    }

    /// Returns the nesting depth, `0` for the global scope.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.enclosing.as_ref().map_or(0, |enclosing| enclosing.depth() + 1)
    }
}

fn undefined(name: &str, line: usize) -> RuntimeError {
    RuntimeError::UndefinedVariable { name: name.to_string(),
                                      line }
}
