/// Binary operator evaluation logic.
///
/// Handles arithmetic, power, comparison chains and the short-circuit logical
/// operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix signs and postfix factorial.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main dispatch over node kinds, the runtime context and error
/// propagation.
pub mod core;

/// Statement evaluation: definitions, assignments, equations and `print`.
pub mod statement;

/// Resolution of juxtaposed operands such as `2x` or `pi r`.
pub mod implicit_mul;

/// Function evaluation.
///
/// Handles builtin function calls, argument checking and the fallback that
/// reads `name(x)` as `name * x`.
pub mod function;
