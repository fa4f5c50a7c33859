use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::single_argument},
    value::core::Value,
};

/// Applies a unary real function to a numeric value.
///
/// The generated functions accept exactly one argument, reduce it with
/// `to_number` and apply the `f64` method of the same name. Genuinely complex
/// values, strings and lists produce a `TypeMismatch` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed number.
///
/// # Example
/// ```
/// use calcite::interpreter::{evaluator::function::builtin::{floor, sin}, value::core::Value};
///
/// let x = Value::Number(std::f64::consts::PI / 2.0);
/// assert_eq!(sin(&[x], 1).unwrap(), Value::Number(1.0));
///
/// assert_eq!(floor(&[Value::Number(-3.5)], 1).unwrap(), Value::Number(-4.0));
/// ```
macro_rules! real_builtin {
    ($($fname:ident),* $(,)?) => {
        $(
            pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
                let name = stringify!($fname);
                let x = single_argument(name, args, line)?.to_number(name, line)?;
                Ok(Value::Number(x.$fname()))
            }
        )*
    };
}

real_builtin!(ceil, floor, sin, cos, tan, exp);

/// Rounds to the nearest integer, with halves going toward positive infinity.
///
/// # Example
/// ```
/// use calcite::interpreter::{evaluator::function::builtin::round, value::core::Value};
///
/// assert_eq!(round(&[Value::Number(2.5)], 1).unwrap(), Value::Number(3.0));
/// assert_eq!(round(&[Value::Number(-2.5)], 1).unwrap(), Value::Number(-2.0));
/// assert_eq!(round(&[Value::Number(-0.5)], 1).unwrap().to_string(), "0");
/// ```
pub fn round(args: &[Value], line: usize) -> EvalResult<Value> {
    let x = single_argument("round", args, line)?.to_number("round", line)?;
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    Ok(Value::Number(rounded))
}

/// Returns the magnitude of a numeric value.
///
/// Complex values yield `hypot(real, imaginary)`; everything numeric yields
/// its absolute value.
///
/// # Example
/// ```
/// use calcite::interpreter::{
///     evaluator::function::builtin::abs,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// let c = Value::Complex(ComplexNumber::new(3.0, -4.0));
/// assert_eq!(abs(&[c], 1).unwrap(), Value::Number(5.0));
/// assert_eq!(abs(&[Value::Number(-2.5)], 1).unwrap(), Value::Number(2.5));
/// ```
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    match single_argument("abs", args, line)? {
        Value::Complex(c) => Ok(Value::Number(c.abs())),
        value => Ok(Value::Number(value.to_number("abs", line)?.abs())),
    }
}

/// Returns the length of a list or string.
///
/// Strings count characters, not bytes.
///
/// # Example
/// ```
/// use calcite::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("héllo")], 1).unwrap(), Value::Number(5.0));
/// assert!(len(&[Value::Number(3.0)], 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    let length = single_argument("len", args, line)?.length(line)?;
    Ok(Value::Number(length as f64))
}
