/// Node-level dispatch for additive, multiplicative and power nodes.
pub mod core;

/// Arithmetic on numeric values: `+`, `-`, `*`, `/` and `%`.
///
/// Every operation promotes its operands into the complex domain (or to real
/// numbers for `%`) and normalizes the result.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// Comparison operators and comparison chains.
pub mod comparison;

/// Short-circuit `and` / `or` and logical `not`.
pub mod logic;
