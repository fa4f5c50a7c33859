use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        function::core::{Arity, check_arity, variadic_items},
    },
    value::core::Value,
};

/// Returns the smallest of the arguments, or of a single list argument.
///
/// Every item is reduced with `to_number`. An empty list yields `inf`, and
/// any `NaN` item makes the result `NaN`.
///
/// # Example
/// ```
/// use calcite::interpreter::{evaluator::function::min_max::min, value::core::Value};
///
/// let r = min(&[Value::Number(3.0), Value::Number(-1.0), Value::Boolean(true)], 1).unwrap();
/// assert_eq!(r, Value::Number(-1.0));
///
/// let list = Value::from(vec![Value::Number(4.0), Value::Number(2.0)]);
/// assert_eq!(min(&[list], 1).unwrap(), Value::Number(2.0));
///
/// assert!(min(&[], 1).is_err());
/// ```
pub fn min(args: &[Value], line: usize) -> EvalResult<Value> {
    reduce("min", args, f64::INFINITY, f64::min, line)
}

/// Returns the largest of the arguments, or of a single list argument.
///
/// Every item is reduced with `to_number`. An empty list yields `-inf`, and
/// any `NaN` item makes the result `NaN`.
pub fn max(args: &[Value], line: usize) -> EvalResult<Value> {
    reduce("max", args, f64::NEG_INFINITY, f64::max, line)
}

fn reduce(name: &'static str,
          args: &[Value],
          initial: f64,
          pick: fn(f64, f64) -> f64,
          line: usize)
          -> EvalResult<Value> {
    check_arity(name, Arity::AtLeast(1), args, line)?;

    let numbers = variadic_items(args).iter()
                                      .map(|item| item.to_number(name, line))
                                      .collect::<EvalResult<Vec<f64>>>()?;

    // A NaN anywhere poisons the result instead of being skipped.
    if numbers.iter().any(|n| n.is_nan()) {
        return Ok(Value::Number(f64::NAN));
    }

    Ok(Value::Number(numbers.into_iter().fold(initial, pick)))
}
