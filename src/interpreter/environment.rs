use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Built-in constants, keyed by their lower-case name.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Variable bindings and constants for one program run.
///
/// Variables are created once through [`Environment::define`] and afterwards
/// only changed through [`Environment::assign`]. Constants are fixed for the
/// lifetime of the environment.
#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<String, Value>,
    constants: HashMap<&'static str, f64>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment with no variables and the built-in constants.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(),
               constants: CONSTANTS.iter().copied().collect(), }
    }

    /// Creates an environment seeded with initial bindings.
    ///
    /// Later entries with the same name replace earlier ones.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::with_bindings([("x".to_string(), Value::Number(2.0))]);
    /// assert_eq!(env.get_variable("x"), Some(&Value::Number(2.0)));
    /// ```
    pub fn with_bindings<I>(bindings: I) -> Self
        where I: IntoIterator<Item = (String, Value)>
    {
        let mut env = Self::new();
        env.extend(bindings);
        env
    }

    /// Binds every pair in `bindings`, replacing existing variables.
    ///
    /// Unlike [`Environment::define`] this never fails; it is meant for
    /// seeding the environment before a program runs.
    pub fn extend<I>(&mut self, bindings: I)
        where I: IntoIterator<Item = (String, Value)>
    {
        self.variables.extend(bindings);
    }

    /// Returns the variable bound to `name`, if any.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns `true` if `name` is bound as a variable.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Returns the constant stored under exactly `name`, if any.
    #[must_use]
    pub fn get_constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// Resolves a bare identifier: variables first, then constants.
    ///
    /// # Returns
    /// - `Ok(Value)`: The bound value.
    /// - `Err(RuntimeError::UnknownIdentifier)`: If neither map has `name`.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::new();
    /// assert_eq!(env.resolve("pi", 1).unwrap(), Value::Number(std::f64::consts::PI));
    /// assert!(env.resolve("x", 1).is_err());
    /// ```
    pub fn resolve(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.lookup(name)
            .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string(),
                                                             line })
    }

    /// Like [`Environment::resolve`] but without an error.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.variables
            .get(name)
            .cloned()
            .or_else(|| self.get_constant(name).map(Value::Number))
    }

    /// Looks up a constant node's text, case-insensitively.
    ///
    /// # Returns
    /// - `Ok(Value::Number)`: The constant's value.
    /// - `Err(RuntimeError::UnknownConstant)`: If no constant has that name.
    pub fn constant(&self, text: &str, line: usize) -> EvalResult<Value> {
        self.get_constant(&text.to_lowercase())
            .map(Value::Number)
            .ok_or_else(|| RuntimeError::UnknownConstant { name: text.to_string(),
                                                           line })
    }

    /// Creates a new variable.
    ///
    /// # Returns
    /// - `Ok(())`: The variable was created.
    /// - `Err(RuntimeError::DuplicateDefinition)`: If it already exists.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Number(1.0), 1).unwrap();
    /// assert!(env.define("x", Value::Number(2.0), 2).is_err());
    /// ```
    pub fn define(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        self.ensure_undefined(name, line)?;
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Replaces the value of an existing variable.
    ///
    /// # Returns
    /// - `Ok(())`: The variable was updated.
    /// - `Err(RuntimeError::UndefinedVariable)`: If it does not exist.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        self.ensure_defined(name, line)?;
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Fails with `DuplicateDefinition` if `name` is already a variable.
    pub fn ensure_undefined(&self, name: &str, line: usize) -> EvalResult<()> {
        if self.is_defined(name) {
            return Err(RuntimeError::DuplicateDefinition { name: name.to_string(),
                                                           line });
        }
        Ok(())
    }

    /// Fails with `UndefinedVariable` if `name` is not a variable.
    pub fn ensure_defined(&self, name: &str, line: usize) -> EvalResult<()> {
        if !self.is_defined(name) {
            return Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                         line });
        }
        Ok(())
    }

    /// Iterates over all variable bindings in arbitrary order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }
}
