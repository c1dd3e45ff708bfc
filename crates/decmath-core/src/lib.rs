//! # decmath-core
//!
//! Arbitrary-precision signed decimal integers with a three-tier
//! multiplication dispatcher: schoolbook, Karatsuba over borrowed digit
//! ranges, and FFT convolution backed by `decmath-poly`.

pub(crate) mod arith;
pub mod constants;
pub mod integer;
pub mod karatsuba;
pub mod multiply;
pub mod options;
pub mod sign;

// Re-exports
pub use constants::{exit_codes, DEFAULT_FFT_THRESHOLD, DEFAULT_KARATSUBA_THRESHOLD, FFT_SAFE_DIGITS};
pub use integer::{LongInt, ParseLongIntError};
pub use karatsuba::karatsuba_mul;
pub use multiply::{fft_mul, mul, mul_with, standard_mul};
pub use options::Options;
pub use sign::Sign;

/// Multiply two values with default thresholds.
///
/// Convenience wrapper over [`multiply::mul_with`] for simple use cases.
///
/// # Example
/// ```
/// use decmath_core::LongInt;
///
/// let a: LongInt = "1234".parse().unwrap();
/// let b: LongInt = "9876".parse().unwrap();
/// assert_eq!(decmath_core::multiply(&a, &b).to_string(), "12186984");
/// ```
#[must_use]
pub fn multiply(a: &LongInt, b: &LongInt) -> LongInt {
    multiply::mul(a, b)
}
