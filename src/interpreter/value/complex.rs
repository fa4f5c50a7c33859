use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{approx_zero, snap_zero},
};

/// The additive identity.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// The multiplicative identity, and the start of every power.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);

/// A point on the complex plane, the widest rung of the numeric tower.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// Real component.
    pub real:      f64,
    /// Imaginary component.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (snap_zero(self.real), snap_zero(self.imaginary)) {
            (real, 0.0) => write!(f, "{real}"),
            (0.0, imaginary) => write!(f, "{imaginary}i"),
            (real, imaginary) if imaginary > 0.0 => write!(f, "{real} + {imaginary}i"),
            (real, imaginary) => write!(f, "{real} - {}i", -imaginary),
        }
    }
}

impl ComplexNumber {
    /// Builds `real + imaginary·i` without normalizing either part.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.5, -3.0);
    /// assert_eq!((z.real, z.imaginary), (0.5, -3.0));
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Snaps both parts to exactly zero when they are within epsilon of it.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self { real:      snap_zero(self.real),
               imaginary: snap_zero(self.imaginary), }
    }

    /// Returns `true` if the imaginary part is within epsilon of zero.
    #[must_use]
    pub fn is_real(&self) -> bool {
        approx_zero(self.imaginary)
    }

    /// Returns `true` if both parts are within epsilon of zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        approx_zero(self.real) && approx_zero(self.imaginary)
    }

    /// Converts into the canonical runtime value.
    ///
    /// The number is normalized first; if the imaginary part vanishes the
    /// result is a `Value::Number`, otherwise a `Value::Complex`. No complex
    /// value with a zero imaginary part ever leaves this function.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::value::{complex::ComplexNumber, core::Value};
    /// let real = ComplexNumber::new(3.0, 1e-12);
    /// assert_eq!(real.into_value(), Value::Number(3.0));
    ///
    /// let z = ComplexNumber::new(-1.0, 0.5);
    /// assert!(matches!(z.into_value(), Value::Complex(_)));
    /// ```
    #[must_use]
    pub fn into_value(self) -> Value {
        let normalized = self.normalized();
        if normalized.imaginary == 0.0 {
            Value::Number(normalized.real)
        } else {
            Value::Complex(normalized)
        }
    }

    /// Distance from the origin, `sqrt(real² + imaginary²)`.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::value::complex::ComplexNumber;
    /// assert_eq!(ComplexNumber::new(-6.0, 8.0).abs(), 10.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Mirrors the number across the real axis.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(2.0, -7.0);
    /// assert_eq!(z.conj(), ComplexNumber::new(2.0, 7.0));
    /// ```
    #[must_use]
    pub const fn conj(&self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Returns the squared magnitude `real² + imaginary²`.
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.real.mul_add(self.real, self.imaginary * self.imaginary)
    }

    /// Divides by `rhs` using the conjugate.
    ///
    /// Fails with `DivisionByZero` when the squared magnitude of `rhs` is
    /// within epsilon of zero.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::value::complex::{ComplexNumber, ONE};
    /// let i = ComplexNumber::new(0.0, 1.0);
    /// assert_eq!(ONE.checked_div(i, 1).unwrap(), ComplexNumber::new(0.0, -1.0));
    /// assert!(ONE.checked_div(ComplexNumber::new(0.0, 0.0), 1).is_err());
    /// ```
    pub fn checked_div(self, rhs: Self, line: usize) -> EvalResult<Self> {
        let denom = rhs.norm_sqr();
        if approx_zero(denom) {
            return Err(RuntimeError::DivisionByZero { line });
        }

        let numerator = self * rhs.conj();
        Ok(Self { real:      numerator.real / denom,
                  imaginary: numerator.imaginary / denom, })
    }

    /// Raises the number to an integer power by repeated multiplication.
    ///
    /// The base is multiplied `|exp|` times, normalizing after every step, and
    /// stops early once the product stops changing or overflows. When the
    /// product returns to `1`, the remaining steps are reduced modulo that
    /// period, so `(-1)^k` and `i^k` finish for huge `k`. A
    /// negative exponent then inverts the product through `checked_div`, so
    /// `z^-k` is `1 / z^k` and a zero base fails with `DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use calcite::interpreter::value::complex::{ComplexNumber, ONE};
    /// let two = ComplexNumber::new(2.0, 0.0);
    /// assert_eq!(two.checked_powi(0, false, 1).unwrap(), ONE);
    /// assert_eq!(two.checked_powi(3, false, 1).unwrap(), ComplexNumber::new(8.0, 0.0));
    /// assert_eq!(two.checked_powi(2, true, 1).unwrap(), ComplexNumber::new(0.25, 0.0));
    /// ```
    pub fn checked_powi(self, iterations: u64, negative: bool, line: usize) -> EvalResult<Self> {
        let mut result = ONE;
        let mut remaining = iterations;
        let mut steps = 0_u64;
        while remaining > 0 {
            let next = (result * self).normalized();
            remaining -= 1;
            steps += 1;
            // A fixed point or an overflow cannot change any more.
            let settled = next == result || !next.real.is_finite() || !next.imaginary.is_finite();
            result = next;
            if settled {
                break;
            }
            // `self^steps == 1`, so the powers repeat with that period.
            if result == ONE {
                remaining %= steps;
            }
        }

        if negative {
            result = ONE.checked_div(result, line)?.normalized();
        }

        Ok(result)
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real * rhs.real - self.imaginary * rhs.imaginary,
               imaginary: self.real * rhs.imaginary + self.imaginary * rhs.real, }
    }
}

impl From<f64> for ComplexNumber {
    fn from(value: f64) -> Self {
        Self { real:      value,
               imaginary: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}
