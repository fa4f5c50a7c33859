use std::io::Write;

use tracing::debug;

use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates `var name = value`.
    ///
    /// The name is checked before the value is evaluated, so a duplicate
    /// definition fails without running the right-hand side.
    ///
    /// # Returns
    /// - `Ok(Value)`: The newly bound value.
    /// - `Err(RuntimeError::DuplicateDefinition)`: If `name` already exists.
    ///
    /// # Example
    /// ```
    /// use calcite::{
    ///     ast::Node,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let program = Node::Program(vec![Node::define("x", Node::number("1", 1)),
    ///                                  Node::define("x", Node::number("2", 2))]);
    ///
    /// assert!(matches!(context.eval_program(&program),
    ///                  Err(RuntimeError::DuplicateDefinition { .. })));
    /// ```
    pub fn eval_define(&mut self, name: &str, value: &Node, line: usize) -> EvalResult<Value> {
        self.environment().ensure_undefined(name, line)?;
        let value = self.evaluate(value)?;
        debug!(name, %value, "define");
        self.environment_mut().define(name, value.clone(), line)?;
        Ok(value)
    }

    /// Evaluates `name = value` for an existing variable.
    ///
    /// # Returns
    /// - `Ok(Value)`: The new value.
    /// - `Err(RuntimeError::UndefinedVariable)`: If `name` was never defined.
    pub fn eval_assign(&mut self, name: &str, value: &Node, line: usize) -> EvalResult<Value> {
        self.environment().ensure_defined(name, line)?;
        let value = self.evaluate(value)?;
        debug!(name, %value, "assign");
        self.environment_mut().assign(name, value.clone(), line)?;
        Ok(value)
    }

    /// Evaluates `left = right` as an equality test. Nothing is bound.
    pub fn eval_equation(&mut self, left: &Node, right: &Node) -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        Ok(Value::Boolean(left.equals(&right)))
    }

    /// Evaluates `print(expr)`.
    ///
    /// Writes the formatted value as one line to the output sink and yields
    /// the value itself.
    ///
    /// # Example
    /// ```
    /// use calcite::{ast::Node, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.eval_program(&Node::Program(vec![Node::print(Node::imaginary("-i", 1))]))
    ///        .unwrap();
    ///
    /// assert_eq!(context.output().as_slice(), b"-1i\n");
    /// ```
    pub fn eval_print(&mut self, expr: &Node) -> EvalResult<Value> {
        let value = self.evaluate(expr)?;
        writeln!(self.output_mut(), "{value}")?;
        Ok(value)
    }
}
