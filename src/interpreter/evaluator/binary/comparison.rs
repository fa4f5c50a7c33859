use std::io::Write;

use tracing::trace;

use crate::{
    ast::{Node, Terminal},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Applies a single comparison operator to two values.
///
/// `==` and `!=` use tolerant structural equality (`Value::equals`). The
/// ordering operators reduce both operands to real numbers first.
///
/// # Parameters
/// - `operator`: The operator token; its text selects the comparison.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
///
/// # Returns
/// - `Ok(bool)`: The outcome of the comparison.
/// - `Err(RuntimeError::UnsupportedOperator)`: For unknown operator text.
/// - `Err(RuntimeError::TypeMismatch)`: If an ordering operand is not real.
///
/// # Example
/// ```
/// use calcite::{
///     ast::{Terminal, TokenKind},
///     interpreter::{evaluator::binary::comparison::compare, value::core::Value},
/// };
///
/// let less = Terminal::new(TokenKind::Operator, "<", 1);
/// assert!(compare(&less, &Value::Number(3.0), &Value::Number(5.0)).unwrap());
///
/// let approx = Terminal::new(TokenKind::Operator, "~", 1);
/// assert!(compare(&approx, &Value::Number(3.0), &Value::Number(5.0)).is_err());
/// ```
pub fn compare(operator: &Terminal, left: &Value, right: &Value) -> EvalResult<bool> {
    let line = operator.line;
    let ordered = |test: fn(f64, f64) -> bool| -> EvalResult<bool> {
        Ok(test(left.to_number("comparison", line)?, right.to_number("comparison", line)?))
    };

    match operator.text.as_str() {
        "==" => Ok(left.equals(right)),
        "!=" => Ok(!left.equals(right)),
        "<" => ordered(|a, b| a < b),
        "<=" => ordered(|a, b| a <= b),
        ">" => ordered(|a, b| a > b),
        ">=" => ordered(|a, b| a >= b),
        other => Err(RuntimeError::UnsupportedOperator { operator: other.to_string(),
                                                         line }),
    }
}

impl<W: Write> Context<W> {
    /// Evaluates a comparison chain such as `a < b <= c`.
    ///
    /// Each link compares the current operand with the next one. The chain
    /// stops with `false` at the first failing link, so later operands are
    /// never evaluated. A chain without links returns its single operand
    /// unchanged rather than a boolean.
    ///
    /// # Parameters
    /// - `first`: The first operand.
    /// - `chain`: Operator and operand for each further link.
    ///
    /// # Returns
    /// A boolean, or the first operand's value for an empty chain.
    ///
    /// # Example
    /// ```
    /// use calcite::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let chain = Node::compare(Node::number("1", 1),
    ///                           vec![("<", Node::number("2", 1)), ("<", Node::number("3", 1))]);
    ///
    /// assert_eq!(context.evaluate(&chain).unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_comparison(&mut self,
                           first: &Node,
                           chain: &[(Terminal, Node)])
                           -> EvalResult<Value> {
        let mut current = self.evaluate(first)?;

        if chain.is_empty() {
            return Ok(current);
        }

        for (operator, operand) in chain {
            let next = self.evaluate(operand)?;
            if !compare(operator, &current, &next)? {
                trace!(operator = %operator, "comparison chain short-circuited");
                return Ok(Value::Boolean(false));
            }
            current = next;
        }

        Ok(Value::Boolean(true))
    }
}
