/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined names, type mismatches, division by zero,
/// unsupported powers and invalid builtin arguments.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
