//! Real-coefficient polynomial with Horner evaluation.
//!
//! Coefficient index is the power of the formal variable (index 0 is the
//! constant term). The same type doubles as the coefficient-vector view of
//! a decimal digit buffer during FFT multiplication, so coefficients may
//! transiently hold values far outside [0, 9].

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex64;

use crate::fft;

/// Error type for polynomial coefficient access.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PolyError {
    /// Coefficient index beyond the current length.
    #[error("coefficient index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Polynomial over `f64` coefficients, lowest power first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Build from an explicit coefficient vector, lowest power first.
    #[must_use]
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// View a decimal digit buffer (least-significant digit first) as a
    /// coefficient vector.
    #[must_use]
    pub fn from_digits(digits: &[u8]) -> Self {
        Self {
            coeffs: digits.iter().map(|&d| f64::from(d)).collect(),
        }
    }

    /// Number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial as stored (no trailing-zero trimming).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Borrow the raw coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Coefficient at `index`.
    ///
    /// # Errors
    /// Returns [`PolyError::IndexOutOfRange`] rather than a default value
    /// when `index` is beyond the current length.
    pub fn coeff(&self, index: usize) -> Result<f64, PolyError> {
        self.coeffs
            .get(index)
            .copied()
            .ok_or(PolyError::IndexOutOfRange {
                index,
                len: self.coeffs.len(),
            })
    }

    /// Evaluate at `x` by recursive Horner, innermost at the constant term.
    ///
    /// Works for any numeric domain that embeds `f64`, in particular `f64`
    /// itself and [`Complex64`]; the result stays in the domain of `x`.
    /// Recursion depth equals the coefficient count, so this is meant for
    /// polynomials of modest degree.
    pub fn eval<T>(&self, x: T) -> T
    where
        T: Copy + From<f64> + Add<Output = T> + Mul<Output = T>,
    {
        horner(&self.coeffs, x)
    }

    /// Evaluate at a complex point.
    #[must_use]
    pub fn eval_complex(&self, x: Complex64) -> Complex64 {
        self.eval(x)
    }

    /// Multiply two polynomials, selecting naive or FFT convolution by
    /// result size.
    #[must_use]
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        Polynomial {
            coeffs: fft::convolve(&self.coeffs, &other.coeffs),
        }
    }

    /// Multiply via the direct double-sum convolution, regardless of size.
    #[must_use]
    pub fn multiply_naive(&self, other: &Polynomial) -> Polynomial {
        Polynomial {
            coeffs: fft::convolve_naive(&self.coeffs, &other.coeffs),
        }
    }

    /// Multiply via FFT convolution, regardless of size.
    #[must_use]
    pub fn multiply_fft(&self, other: &Polynomial) -> Polynomial {
        Polynomial {
            coeffs: fft::convolve_fft(&self.coeffs, &other.coeffs),
        }
    }
}

fn horner<T>(coeffs: &[f64], x: T) -> T
where
    T: Copy + From<f64> + Add<Output = T> + Mul<Output = T>,
{
    match coeffs.split_first() {
        None => T::from(0.0),
        Some((&c, rest)) => T::from(c) + x * horner(rest, x),
    }
}

/// Pointwise addition. The shorter operand is zero-extended, so no
/// high-order terms of either operand are dropped.
impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut coeffs = Vec::with_capacity(len);
        for i in 0..len {
            let l = self.coeffs.get(i).copied().unwrap_or(0.0);
            let r = other.coeffs.get(i).copied().unwrap_or(0.0);
            coeffs.push(l + r);
        }
        Polynomial { coeffs }
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        &self + &other
    }
}

/// Pointwise subtraction, expressed as negate-then-add.
impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Polynomial {
        self + &(-other)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Polynomial {
        &self - &other
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        self.multiply(other)
    }
}

/// Terms from highest power to lowest; positive non-leading terms carry a
/// `+` prefix, zero coefficients are skipped, and the `*x^k` suffix is
/// omitted for the constant term. The zero polynomial renders as `0`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printed_any = false;
        for (pow, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }
            if c > 0.0 && printed_any {
                write!(f, "+")?;
            }
            write!(f, "{c}")?;
            if pow != 0 {
                write!(f, "*x^{pow}")?;
            }
            printed_any = true;
        }
        if !printed_any {
            write!(f, "0")?;
        }
        Ok(())
    }
}
