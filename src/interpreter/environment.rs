use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// The chain of lexical scopes mapping variable names to current values.
///
/// Scopes form a stack whose bottom entry is the global scope. Lookup and
/// assignment walk from the innermost scope outward; declaration always
/// targets the innermost scope, shadowing any outer binding of the same
/// name.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    scopes: Vec<HashMap<String, Value>>,
}

impl Environment {
    /// Creates an environment holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    /// Binds `name` in the innermost scope, replacing any existing binding
    /// there and shadowing outer ones.
    ///
    /// # Example
    /// ```
    /// use loxide::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Number(1.0));
    ///
    /// assert_eq!(env.get("x", 1).unwrap(), Value::Number(1.0));
    /// ```
    pub fn define(&mut self, name: &str, value: Value) {
        self.scopes
            .last_mut()
            .expect("at least the global scope")
            .insert(name.to_string(), value);
    }

    /// Returns the value bound to `name` in the nearest enclosing scope.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` when no scope binds `name`; the
    /// diagnostic carries `line`.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        for scope in self.scopes.iter().rev() {
            if let Some(value) = scope.get(name) {
                return Ok(value.clone());
            }
        }
        Err(RuntimeError::UndefinedVariable {
            name: name.to_string(),
            line,
        })
    }

    /// Overwrites the value in the nearest enclosing scope that binds
    /// `name`. Assignment never creates a binding.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` when no scope binds `name`.
    ///
    /// # Example
    /// ```
    /// use loxide::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Number(1.0));
    ///
    /// env.assign("x", Value::Number(2.0), 1).unwrap();
    /// assert_eq!(env.get("x", 1).unwrap(), Value::Number(2.0));
    ///
    /// assert!(env.assign("y", Value::Nil, 1).is_err());
    /// ```
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(name) {
                *slot = value;
                return Ok(());
            }
        }
        Err(RuntimeError::UndefinedVariable {
            name: name.to_string(),
            line,
        })
    }

    /// Pushes a fresh innermost scope. Used when entering a block.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Removes the innermost scope. Used when leaving a block; the global
    /// scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
