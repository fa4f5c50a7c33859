/// Numeric tolerance and literal helpers.
///
/// This module holds the epsilon used throughout the evaluator, the helpers
/// that compare floats against it, and the routines that decode numeric and
/// imaginary literal text into `f64` values.
///
/// Literal decoding returns a `Result` so that malformed token text surfaces
/// as a structured error instead of a silent `NaN`.
pub mod num;
