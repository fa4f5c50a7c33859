/// The evaluator module executes tree nodes and computes results.
///
/// The evaluator traverses the parse tree, evaluates expressions and
/// statements, performs arithmetic and logical operations, manages variable
/// state and produces results. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every node kind, performing all supported operations.
/// - Handles variables, constants and builtin function calls.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// Variable bindings and the built-in constants.
///
/// Variables follow define-once, assign-after-define rules. Constants are
/// looked up case-insensitively by constant nodes.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during evaluation: numbers,
/// booleans, strings, complex numbers and lists. It also provides the
/// promotion, normalization and comparison rules of the numeric tower.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements conversion to real and complex numbers with error checking.
/// - Collapses complex results with a vanishing imaginary part to numbers.
pub mod value;
