/// The builtin table, arity rules and call dispatch.
pub mod core;

/// `abs`, `len` and the one-argument real functions (`sin`, `floor`, ...).
pub mod builtin;

/// Logarithm with an optional base.
pub mod log;

/// Variadic `min` and `max`.
pub mod min_max;

/// The `sqrt` function implementation.
///
/// Negative inputs produce an imaginary result instead of `NaN`.
pub mod sqrt;

/// Variadic `sum`.
pub mod sum;
