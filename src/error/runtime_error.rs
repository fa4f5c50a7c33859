use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Assigned to a variable that was never defined.
    #[error("Error on line {line}: Variable '{name}' is not defined.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Defined a variable that already exists.
    #[error("Error on line {line}: Variable '{name}' is already defined.")]
    DuplicateDefinition {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Referenced an identifier that is neither a variable nor a constant.
    #[error("Error on line {line}: Identifier '{name}' is not defined.")]
    UnknownIdentifier {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Referenced a constant that does not exist.
    #[error("Error on line {line}: Unknown constant '{name}'.")]
    UnknownConstant {
        /// The constant as written in the source.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    #[error("Error on line {line}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: {name} expects {expected} argument(s), but found {found}.")]
    ArityMismatch {
        /// The name of the function.
        name:     &'static str,
        /// Human readable description of the accepted argument counts.
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    #[error("Error on line {line}: Modulo by zero.")]
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An exponent had a non-zero imaginary part.
    #[error("Error on line {line}: Complex exponents are not supported.")]
    ComplexExponentUnsupported {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A complex base was raised to a fractional power.
    #[error("Error on line {line}: Non-integer powers of complex numbers are not supported.")]
    NonIntegerComplexPowerUnsupported {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Factorial of a negative or fractional value.
    #[error("Error on line {line}: Factorial expects a non-negative integer, but found {found}.")]
    InvalidFactorialArgument {
        /// The offending operand, formatted.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Logarithm base outside the valid domain.
    #[error("Error on line {line}: log base must be positive and not equal to 1, but found {base}."
    )]
    InvalidLogBase {
        /// The rejected base.
        base: f64,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A comparison operator token that the evaluator does not know.
    #[error("Error on line {line}: Unsupported operator '{operator}'.")]
    UnsupportedOperator {
        /// The operator text.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An atom node wrapping something that is not an atom.
    #[error("Error on line {line}: Unsupported atom '{text}'.")]
    UnsupportedAtom {
        /// Description of the wrapped node.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An implicit multiplication whose shape is not in the case table.
    #[error("Error on line {line}: Unsupported implicit multiplication '{text}'.")]
    UnsupportedImplicitMultiplication {
        /// The juxtaposed operands, formatted.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A node used as an expression produced no value.
    #[error("Error on line {line}: Expression produced no value.")]
    EmptyExpressionResult {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric or imaginary literal whose text cannot be decoded.
    #[error("Error on line {line}: Invalid literal '{text}'.")]
    InvalidLiteral {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The parser recovered from a syntax error and left an error node.
    #[error("Error on line {line}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing to the output sink failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
