//! Three-tier multiplication dispatcher.
//!
//! Selects schoolbook, Karatsuba, or FFT convolution by the left
//! operand's digit count, and owns the decimal renormalization of
//! convolved coefficients.

use decmath_poly::Polynomial;

use crate::arith;
use crate::integer::LongInt;
use crate::karatsuba;
use crate::options::Options;
use crate::sign::Sign;

/// Multiply with default thresholds.
#[must_use]
pub fn mul(a: &LongInt, b: &LongInt) -> LongInt {
    mul_with(a, b, &Options::default())
}

/// Multiply, selecting the algorithm by the left operand's digit count
/// against the configured thresholds.
#[must_use]
pub fn mul_with(a: &LongInt, b: &LongInt, opts: &Options) -> LongInt {
    let n = a.digit_count();
    if n <= opts.karatsuba_threshold {
        tracing::debug!(digits = n, algo = "standard", "multiplying");
        standard_mul(a, b)
    } else if n <= opts.fft_threshold {
        tracing::debug!(digits = n, algo = "karatsuba", "multiplying");
        karatsuba::karatsuba_mul(a, b)
    } else {
        tracing::debug!(digits = n, algo = "fft", "multiplying");
        fft_mul(a, b)
    }
}

/// Schoolbook multiplication: for each digit of the right operand, run the
/// single-digit kernel over the left operand, shift by the digit's
/// position, and accumulate. O(n*m).
#[must_use]
pub fn standard_mul(a: &LongInt, b: &LongInt) -> LongInt {
    let mut acc = LongInt::zero();
    for (position, &digit) in b.digits().iter().enumerate() {
        if digit == 0 {
            continue;
        }
        let partial = LongInt::from_parts(Sign::Pos, arith::digit_mul(a.digits(), digit));
        acc = &acc + &partial.shift(position);
    }
    apply_product_sign(acc, a.sign(), b.sign())
}

/// FFT multiplication: view both digit buffers as polynomial coefficient
/// vectors, convolve them, and renormalize the real-valued result back
/// into base 10.
#[must_use]
pub fn fft_mul(a: &LongInt, b: &LongInt) -> LongInt {
    if a.is_zero() || b.is_zero() {
        return LongInt::zero();
    }
    let product = Polynomial::from_digits(a.digits()).multiply(&Polynomial::from_digits(b.digits()));
    let digits = renormalize(product.coeffs());
    apply_product_sign(
        LongInt::from_parts(Sign::Pos, digits),
        a.sign(),
        b.sign(),
    )
}

/// Round convolved coefficients to the nearest integer and propagate
/// base-10 carries left to right. A coefficient may far exceed 9 (it is a
/// sum of up to n digit products), so the carry accumulator is wide.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn renormalize(coeffs: &[f64]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(coeffs.len() + 4);
    let mut carry: u64 = 0;
    for &c in coeffs {
        // Rounding error may leave a tiny negative value where the exact
        // coefficient is zero; clamp before the cast.
        let value = c.round().max(0.0) as u64 + carry;
        digits.push((value % 10) as u8);
        carry = value / 10;
    }
    while carry > 0 {
        digits.push((carry % 10) as u8);
        carry /= 10;
    }
    digits
}

fn apply_product_sign(magnitude: LongInt, left: Sign, right: Sign) -> LongInt {
    if left.xor(right).is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_FFT_THRESHOLD, DEFAULT_KARATSUBA_THRESHOLD};

    fn li(s: &str) -> LongInt {
        s.parse().unwrap()
    }

    #[test]
    fn multiply_by_zero_one_and_small_factors() {
        let five = li("5");
        assert!(mul(&five, &LongInt::zero()).is_zero());
        assert!(mul(&LongInt::zero(), &five).is_zero());
        assert_eq!(mul(&five, &li("1")), li("5"));
        assert_eq!(mul(&five, &li("2")), li("10"));
        assert_eq!(mul(&five, &li("10")), li("50"));
        assert_eq!(mul(&five, &li("111")), li("555"));
    }

    #[test]
    fn sign_is_xor_of_operand_signs() {
        assert_eq!(mul(&li("5"), &li("-1")), li("-5"));
        assert_eq!(mul(&li("-5"), &li("2")), li("-10"));
        assert_eq!(mul(&li("-5"), &li("-2")), li("10"));
    }

    #[test]
    fn zero_product_is_positive() {
        let product = mul(&li("-7"), &LongInt::zero());
        assert!(product.is_zero());
        assert_eq!(product.sign(), Sign::Pos);
    }

    #[test]
    fn four_digit_product() {
        assert_eq!(mul(&li("1234"), &li("9876")), li("12186984"));
    }

    #[test]
    fn twelve_digit_product() {
        assert_eq!(
            mul(&li("123456789012"), &li("987654321098")),
            li("121932631136585886175176")
        );
    }

    #[test]
    fn all_tiers_agree_on_the_same_product() {
        let a = li("91827364546372819100293847565647382910");
        let b = li("-12345678901234567890123456789012345678");
        let expected = standard_mul(&a, &b);
        assert_eq!(karatsuba::karatsuba_mul(&a, &b), expected);
        assert_eq!(fft_mul(&a, &b), expected);
    }

    #[test]
    fn dispatcher_bands_select_consistent_results() {
        // One operand per band: at, just above, and far above the
        // default cutoffs.
        let sizes = [
            DEFAULT_KARATSUBA_THRESHOLD,
            DEFAULT_KARATSUBA_THRESHOLD + 1,
            DEFAULT_FFT_THRESHOLD,
            DEFAULT_FFT_THRESHOLD + 1,
            DEFAULT_FFT_THRESHOLD * 3,
        ];
        let opts = Options::default();
        for &n in &sizes {
            let digits: String = (0..n)
                .map(|i| char::from(b'1' + u8::try_from(i % 9).unwrap()))
                .collect();
            let a = li(&digits);
            let b = li("987654321");
            let expected = standard_mul(&a, &b);
            assert_eq!(mul_with(&a, &b, &opts), expected, "digit count {n}");
        }
    }

    #[test]
    fn renormalize_carries_across_coefficients() {
        // 999 * 99 as raw convolution coefficients.
        assert_eq!(
            renormalize(&[81.0, 162.0, 162.0, 81.0]),
            vec![1, 0, 9, 8, 9]
        );
    }

    #[test]
    fn renormalize_tolerates_near_integer_noise() {
        // 81 + 162 * 10 = 1701
        assert_eq!(renormalize(&[80.99999999, 162.00000001]), vec![1, 0, 7, 1]);
        assert_eq!(renormalize(&[-0.0000001]), vec![0]);
    }
}
