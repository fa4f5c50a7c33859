use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::approx_zero,
};

/// Adds two numeric values in the complex domain.
///
/// Both operands are promoted with `to_complex`; the sum is normalized back
/// to a plain number when its imaginary part vanishes.
///
/// # Example
/// ```
/// use calcite::interpreter::{
///     evaluator::binary::scalar::add,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// let i = Value::Complex(ComplexNumber::new(0.0, 1.0));
/// let minus_i = Value::Complex(ComplexNumber::new(0.0, -1.0));
///
/// assert_eq!(add(&i, &minus_i, 1).unwrap(), Value::Number(0.0));
/// assert_eq!(add(&Value::Boolean(true), &Value::Number(2.0), 1).unwrap(), Value::Number(3.0));
/// ```
pub fn add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let a = left.to_complex("addition", line)?;
    let b = right.to_complex("addition", line)?;
    Ok((a + b).into_value())
}

/// Subtracts `right` from `left` in the complex domain.
pub fn subtract(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let a = left.to_complex("subtraction", line)?;
    let b = right.to_complex("subtraction", line)?;
    Ok((a - b).into_value())
}

/// Multiplies two numeric values as `(ac - bd, ad + bc)`.
///
/// # Example
/// ```
/// use calcite::interpreter::{
///     evaluator::binary::scalar::multiply,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// let two_i = Value::Complex(ComplexNumber::new(0.0, 2.0));
/// assert_eq!(multiply(&two_i, &two_i, 1).unwrap(), Value::Number(-4.0));
/// ```
pub fn multiply(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let a = left.to_complex("multiplication", line)?;
    let b = right.to_complex("multiplication", line)?;
    Ok((a * b).into_value())
}

/// Divides `left` by `right` through the conjugate of `right`.
///
/// Fails with `DivisionByZero` when `|right|²` is within epsilon of zero.
///
/// # Example
/// ```
/// use calcite::interpreter::{evaluator::binary::scalar::divide, value::core::Value};
///
/// assert_eq!(divide(&Value::Number(3.0), &Value::Number(3.0), 1).unwrap(), Value::Number(1.0));
/// assert!(divide(&Value::Number(1.0), &Value::Number(1e-12), 1).is_err());
/// ```
pub fn divide(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let a = left.to_complex("division", line)?;
    let b = right.to_complex("division", line)?;
    Ok(a.checked_div(b, line)?.into_value())
}

/// Computes the floating point remainder of `left / right`.
///
/// Both operands must reduce to real numbers. The sign of the result follows
/// the dividend.
///
/// # Example
/// ```
/// use calcite::interpreter::{evaluator::binary::scalar::modulo, value::core::Value};
///
/// assert_eq!(modulo(&Value::Number(-7.0), &Value::Number(3.0), 1).unwrap(), Value::Number(-1.0));
/// assert!(modulo(&Value::Number(7.0), &Value::Number(0.0), 1).is_err());
/// ```
pub fn modulo(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let dividend = left.to_number("modulo", line)?;
    let divisor = right.to_number("modulo", line)?;

    if approx_zero(divisor) {
        return Err(RuntimeError::ModuloByZero { line });
    }

    Ok(Value::Number(dividend % divisor))
}
