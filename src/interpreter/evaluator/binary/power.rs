use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{approx_zero, is_integral, iteration_count},
};

/// Evaluates an exponentiation `base ^ exponent`.
///
/// The exponent must be real. Integer exponents (within epsilon) are computed
/// by repeated multiplication of the complex base, inverted through division
/// for negative exponents; this keeps results such as `i^2 = -1` exact and
/// free of branch cuts. Non-integer exponents require a real base and use
/// `powf`.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the result of `base ^ exponent`.
///
/// # Example
/// ```
/// use calcite::interpreter::{
///     evaluator::binary::power::eval_pow,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// let result = eval_pow(&Value::Number(2.0), &Value::Number(10.0), 1).unwrap();
/// assert_eq!(result, Value::Number(1024.0));
///
/// let i = Value::Complex(ComplexNumber::new(0.0, 1.0));
/// assert_eq!(eval_pow(&i, &Value::Number(2.0), 1).unwrap(), Value::Number(-1.0));
///
/// assert_eq!(eval_pow(&Value::Number(2.0), &Value::Number(-2.0), 1).unwrap(),
///            Value::Number(0.25));
/// ```
pub fn eval_pow(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
    let exponent = exponent.to_complex("power", line)?;
    if !approx_zero(exponent.imaginary) {
        return Err(RuntimeError::ComplexExponentUnsupported { line });
    }

    let exponent = exponent.real;
    let base = base.to_complex("power", line)?;

    if is_integral(exponent) {
        let result = base.checked_powi(iteration_count(exponent), exponent < 0.0, line)?;
        return Ok(result.into_value());
    }

    if !approx_zero(base.imaginary) {
        return Err(RuntimeError::NonIntegerComplexPowerUnsupported { line });
    }

    Ok(Value::Number(base.real.powf(exponent)))
}
