use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Arity},
        value::core::Value,
    },
};

/// Computes a logarithm.
///
/// With one argument this is the natural logarithm. With two arguments,
/// `value` and `base`, it is `ln(value) / ln(base)`. Both arguments are
/// reduced to real numbers first.
///
/// # Returns
/// - `Ok(Value::Number)`: The logarithm.
/// - `Err(RuntimeError::InvalidLogBase)`: If `base <= 0` or `base == 1`.
/// - `Err(RuntimeError::ArityMismatch)`: For any other argument count.
///
/// # Example
/// ```
/// use calcite::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// let e = std::f64::consts::E;
/// assert!(log(&[Value::Number(e)], 1).unwrap().equals(&Value::Number(1.0)));
/// assert!(log(&[Value::Number(8.0), Value::Number(2.0)], 1).unwrap()
///                                                            .equals(&Value::Number(3.0)));
/// assert!(log(&[Value::Number(8.0), Value::Number(1.0)], 1).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn log(args: &[Value], line: usize) -> EvalResult<Value> {
    match args {
        [value] => Ok(Value::Number(value.to_number("log", line)?.ln())),
        [value, base] => {
            let value = value.to_number("log", line)?;
            let base = base.to_number("log", line)?;

            if base <= 0.0 || base == 1.0 {
                return Err(RuntimeError::InvalidLogBase { base, line });
            }

            Ok(Value::Number(value.ln() / base.ln()))
        },
        _ => Err(RuntimeError::ArityMismatch { name: "log",
                                               expected: Arity::OneOf(&[1, 2]).to_string(),
                                               found: args.len(),
                                               line }),
    }
}
