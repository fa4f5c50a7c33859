use std::io::Write;

use crate::{
    ast::{Node, Sign},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::scalar::multiply,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::{is_integral, iteration_count},
};

impl<W: Write> Context<W> {
    /// Evaluates a prefix sign.
    ///
    /// `+x` yields the operand unchanged. `-x` is computed as `-1 * x`, so it
    /// follows the same promotion rules as multiplication.
    ///
    /// # Example
    /// ```
    /// use calcite::{
    ///     ast::{Node, Sign},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let node = Node::unary(Sign::Minus, Node::number("4", 1));
    ///
    /// assert_eq!(context.evaluate(&node).unwrap(), Value::Number(-4.0));
    /// ```
    pub fn eval_unary(&mut self, sign: Sign, operand: &Node, line: usize) -> EvalResult<Value> {
        let value = self.evaluate(operand)?;
        match sign {
            Sign::Plus => Ok(value),
            Sign::Minus => multiply(&Value::Number(-1.0), &value, line),
        }
    }

    /// Evaluates a postfix factorial `operand!`.
    pub fn eval_factorial(&mut self, operand: &Node, line: usize) -> EvalResult<Value> {
        let value = self.evaluate(operand)?;
        factorial(&value, line)
    }
}

/// Computes `n!` for a value that reduces to a non-negative integer.
///
/// The product is built iteratively in `f64`. Large inputs overflow to
/// infinity instead of failing; the loop stops once that happens.
///
/// # Parameters
/// - `value`: The operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// - `Ok(Value::Number)`: The factorial.
/// - `Err(RuntimeError::InvalidFactorialArgument)`: If the operand is negative
///   or not integral.
/// - `Err(RuntimeError::TypeMismatch)`: If the operand is not a real number.
///
/// # Example
/// ```
/// use calcite::interpreter::{evaluator::unary::factorial, value::core::Value};
///
/// assert_eq!(factorial(&Value::Number(5.0), 1).unwrap(), Value::Number(120.0));
/// assert_eq!(factorial(&Value::Number(0.0), 1).unwrap(), Value::Number(1.0));
/// assert!(factorial(&Value::Number(2.5), 1).is_err());
/// assert!(factorial(&Value::Number(-1.0), 1).is_err());
/// ```
pub fn factorial(value: &Value, line: usize) -> EvalResult<Value> {
    let n = value.to_number("factorial", line)?;

    if n < 0.0 || !is_integral(n) {
        return Err(RuntimeError::InvalidFactorialArgument { found: value.to_string(),
                                                            line });
    }

    let mut result = 1.0_f64;
    let mut factor = 2.0;
    for _ in 1..iteration_count(n) {
        result *= factor;
        factor += 1.0;
        if result.is_infinite() {
            break;
        }
    }

    Ok(Value::Number(result))
}
