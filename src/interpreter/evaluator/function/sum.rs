use crate::interpreter::{
    evaluator::{binary::scalar::add, core::EvalResult, function::core::variadic_items},
    value::core::Value,
};

/// Adds up the arguments, or the elements of a single list argument.
///
/// The fold starts from `0` and uses ordinary addition, so numbers, booleans
/// and complex values mix freely. With no arguments the result is `0`.
///
/// # Example
/// ```
/// use calcite::interpreter::{
///     evaluator::function::sum::sum,
///     value::{complex::ComplexNumber, core::Value},
/// };
///
/// let list = Value::from(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]);
/// assert_eq!(sum(&[list], 1).unwrap(), Value::Number(6.0));
///
/// let mixed = [Value::Number(1.0), Value::Complex(ComplexNumber::new(0.0, 2.0))];
/// assert_eq!(sum(&mixed, 1).unwrap(), Value::Complex(ComplexNumber::new(1.0, 2.0)));
///
/// assert_eq!(sum(&[], 1).unwrap(), Value::Number(0.0));
/// ```
pub fn sum(args: &[Value], line: usize) -> EvalResult<Value> {
    variadic_items(args).iter()
                        .try_fold(Value::Number(0.0), |total, item| add(&total, item, line))
}
