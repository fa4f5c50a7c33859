/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts, together with normalization back into the canonical runtime value.
///
/// Every arithmetic operation is computed in the complex domain and collapsed
/// to a plain number whenever the imaginary part vanishes.
pub mod complex;

pub mod core;
