use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::complex::{ComplexNumber, ONE, ZERO},
    },
    util::num::approx_zero,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression, statement or builtin can
/// produce. Numeric variants form a tower (`Boolean` → `Number` → `Complex`)
/// that arithmetic promotes through.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A real scalar (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparisons, logical operators and equations. Coerces to
    /// `1` or `0` in numeric contexts.
    Boolean(bool),
    /// Raw token text. Only produced when a bare terminal is evaluated.
    String(String),
    /// A complex number whose imaginary part is never within epsilon of zero.
    Complex(ComplexNumber),
    /// An ordered list of values, used for vectors and matrices (lists of
    /// row lists).
    List(Rc<Vec<Self>>),
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        c.into_value()
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl Value {
    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
            Self::Complex(_) => "complex",
            Self::List(_) => "list",
        }
    }

    /// Complex view of the numeric variants, `None` for strings and lists.
    fn numeric_parts(&self) -> Option<ComplexNumber> {
        match self {
            Self::Number(n) => Some(ComplexNumber::from(*n)),
            Self::Boolean(true) => Some(ONE),
            Self::Boolean(false) => Some(ZERO),
            Self::Complex(c) => Some(*c),
            Self::String(_) | Self::List(_) => None,
        }
    }

    /// Promotes the value to a `ComplexNumber`.
    ///
    /// Numbers become `(n, 0)`, booleans `(1, 0)` or `(0, 0)`, and complex
    /// values are returned unchanged.
    ///
    /// # Parameters
    /// - `context`: Name of the operation, used in the error message.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(ComplexNumber)`: The promoted value.
    /// - `Err(RuntimeError::TypeMismatch)`: For strings and lists.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// let c = Value::Boolean(true).to_complex("addition", 1).unwrap();
    /// assert_eq!(c, ComplexNumber::new(1.0, 0.0));
    ///
    /// assert!(Value::from(Vec::<Value>::new()).to_complex("addition", 1).is_err());
    /// ```
    pub fn to_complex(&self, context: &str, line: usize) -> EvalResult<ComplexNumber> {
        self.numeric_parts()
            .ok_or_else(|| self.numeric_expected(context, line))
    }

    /// Reduces the value to a real `f64`.
    ///
    /// Accepts numbers, booleans, and complex values whose imaginary part is
    /// within epsilon of zero.
    ///
    /// # Parameters
    /// - `context`: Name of the operation, used in the error message.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: The real value.
    /// - `Err(RuntimeError::TypeMismatch)`: For strings, lists and genuinely
    ///   complex values.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// assert_eq!(Value::Boolean(false).to_number("sin", 1).unwrap(), 0.0);
    /// assert!(Value::Complex(ComplexNumber::new(1.0, 2.0)).to_number("sin", 1)
    ///                                                      .is_err());
    /// ```
    pub fn to_number(&self, context: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Self::Complex(c) if c.is_real() => Ok(c.real),
            Self::Complex(c) => {
                Err(RuntimeError::TypeMismatch { details: format!("{context} does not support complex values, but found {c}"),
                                                 line })
            },
            Self::String(_) | Self::List(_) => Err(self.numeric_expected(context, line)),
        }
    }

    fn numeric_expected(&self, context: &str, line: usize) -> RuntimeError {
        RuntimeError::TypeMismatch { details: format!("{context} expects numeric arguments, but found {}",
                                                      self.type_name()),
                                     line }
    }

    /// Returns the truthiness of the value.
    ///
    /// Booleans are used as-is. Numbers and complex values are false only
    /// when (both parts are) within epsilon of zero. Strings and lists are
    /// false only when empty.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Number(1e-12).is_truthy());
    /// assert!(Value::from("x").is_truthy());
    /// assert!(!Value::from(Vec::<Value>::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Number(n) => !approx_zero(*n),
            Self::Complex(c) => !c.is_zero(),
            Self::String(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Tolerant structural equality.
    ///
    /// Two numeric values are compared as complex numbers, each part within
    /// epsilon. Strings compare exactly. Lists are equal when they have the
    /// same length and every pair of elements is equal. Every other pairing
    /// is unequal; no coercion crosses the numeric, string and list
    /// boundaries.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::value::core::Value;
    ///
    /// let a = Value::from(vec![1.0.into(), 2.0.into()]);
    /// let b = Value::from(vec![1.0.into(), Value::Number(2.0 + 1e-12)]);
    /// let c = Value::from(vec![1.0.into(), 3.0.into()]);
    ///
    /// assert!(a.equals(&b));
    /// assert!(!a.equals(&c));
    /// assert!(Value::Boolean(true).equals(&Value::Number(1.0)));
    /// assert!(!Value::from("1").equals(&Value::Number(1.0)));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            },
            _ => match (self.numeric_parts(), other.numeric_parts()) {
                (Some(a), Some(b)) => {
                    approx_zero(a.real - b.real) && approx_zero(a.imaginary - b.imaginary)
                },
                _ => false,
            },
        }
    }

    /// Returns the element count of a list or the character count of a
    /// string.
    ///
    /// # Returns
    /// - `Ok(usize)`: The length.
    /// - `Err(RuntimeError::TypeMismatch)`: For every other variant.
    pub fn length(&self, line: usize) -> EvalResult<usize> {
        match self {
            Self::List(items) => Ok(items.len()),
            Self::String(s) => Ok(s.chars().count()),
            _ => Err(RuntimeError::TypeMismatch { details: format!("len expects a list or string, but found {}",
                                                                   self.type_name()),
                                                  line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) if *n == 0.0 => write!(f, "0"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

