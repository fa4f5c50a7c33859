use std::io::Write;

use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates `left or right` with short-circuiting.
    ///
    /// The right operand is only evaluated when the left one is falsy. The
    /// result is always a boolean.
    ///
    /// # Example
    /// ```
    /// use calcite::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    ///
    /// // The undefined identifier on the right is never touched.
    /// let result = context.eval_or(&Node::number("1", 1), &Node::ident("missing", 1));
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_or(&mut self, left: &Node, right: &Node) -> EvalResult<Value> {
        if self.evaluate(left)?.is_truthy() {
            return Ok(Value::Boolean(true));
        }
        Ok(Value::Boolean(self.evaluate(right)?.is_truthy()))
    }

    /// Evaluates `left and right` with short-circuiting.
    ///
    /// The right operand is only evaluated when the left one is truthy. The
    /// result is always a boolean.
    pub fn eval_and(&mut self, left: &Node, right: &Node) -> EvalResult<Value> {
        if !self.evaluate(left)?.is_truthy() {
            return Ok(Value::Boolean(false));
        }
        Ok(Value::Boolean(self.evaluate(right)?.is_truthy()))
    }

    /// Evaluates `not operand`.
    ///
    /// An operand that produces no value counts as falsy, so `not` of it is
    /// `true`.
    pub fn eval_not(&mut self, operand: &Node) -> EvalResult<Value> {
        let value = self.visit(operand)?;
        Ok(Value::Boolean(!value.is_some_and(|v| v.is_truthy())))
    }
}
