use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::single_argument},
    value::{complex::ComplexNumber, core::Value},
};

/// Computes the square root of a real value.
///
/// - Nonnegative values return a real square root.
/// - Negative values return the purely imaginary root `sqrt(|x|) i`.
///
/// Genuinely complex values, strings and lists produce a `TypeMismatch` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// A number or an imaginary complex value.
///
/// # Example
/// ```
/// use calcite::interpreter::{
///     evaluator::function::sqrt::sqrt,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// assert_eq!(sqrt(&[Value::Number(16.0)], 1).unwrap(), Value::Number(4.0));
/// assert_eq!(sqrt(&[Value::Number(-9.0)], 1).unwrap(),
///            Value::Complex(ComplexNumber::new(0.0, 3.0)));
/// ```
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    let x = single_argument("sqrt", args, line)?.to_number("sqrt", line)?;

    if x < 0.0 {
        return Ok(ComplexNumber::new(0.0, x.abs().sqrt()).into_value());
    }

    Ok(Value::Number(x.sqrt()))
}
