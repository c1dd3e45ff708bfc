//! Karatsuba divide-and-conquer multiplication over borrowed digit ranges.
//!
//! The recursion works on sub-slices of the operands' digit buffers, so
//! no sub-buffers are materialized for the half products; only the
//! half-sums and partial results are allocated. Depth is bounded by
//! `log2(n)` because every level strictly halves the active range.

use crate::arith;
use crate::integer::LongInt;
use crate::sign::Sign;

/// Multiply two values with the Karatsuba recursion. Sign handling and
/// final trimming live here; the recursion itself deals in magnitudes.
#[must_use]
pub fn karatsuba_mul(a: &LongInt, b: &LongInt) -> LongInt {
    let magnitude = mul_ranges(a.digits(), b.digits());
    if a.sign().xor(b.sign()).is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Recursive product of two digit ranges, as a non-negative value.
fn mul_ranges(x: &[u8], y: &[u8]) -> LongInt {
    if arith::is_zero(x) || arith::is_zero(y) {
        return LongInt::zero();
    }
    // Base case: a single-digit range multiplies the other range through
    // the shared single-digit kernel.
    if x.len() == 1 {
        return LongInt::from_parts(Sign::Pos, arith::digit_mul(y, x[0]));
    }
    if y.len() == 1 {
        return LongInt::from_parts(Sign::Pos, arith::digit_mul(x, y[0]));
    }

    // Both operands split at the same weight 10^m; the high half absorbs
    // any odd leftover digit and may be empty for the shorter operand.
    let m = x.len().max(y.len()) / 2;
    let (x_low, x_high) = split_clamped(x, m);
    let (y_low, y_high) = split_clamped(y, m);

    let z0 = mul_ranges(x_low, y_low);
    let z2 = mul_ranges(x_high, y_high);

    // Cross-term operands come straight from the sub-ranges: low + high
    // with carry, no intermediate LongInt.
    let sum_x = arith::add_digits(x_low, x_high);
    let sum_y = arith::add_digits(y_low, y_high);

    // cross = (x_low + x_high)(y_low + y_high) - z0 - z2, folded into the
    // signed adder via negation instead of two subtraction passes.
    let cross = &(&mul_ranges(&sum_x, &sum_y) + &(-&z0)) + &(-&z2);

    &(&z2.shift(2 * m) + &cross.shift(m)) + &z0
}

fn split_clamped(digits: &[u8], at: usize) -> (&[u8], &[u8]) {
    if at >= digits.len() {
        (digits, &[])
    } else {
        digits.split_at(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multiply::standard_mul;

    fn li(s: &str) -> LongInt {
        s.parse().unwrap()
    }

    #[test]
    fn single_digit_operands() {
        assert_eq!(karatsuba_mul(&li("7"), &li("8")), li("56"));
        assert_eq!(karatsuba_mul(&li("7"), &li("0")), LongInt::zero());
    }

    #[test]
    fn equal_length_operands() {
        assert_eq!(karatsuba_mul(&li("1234"), &li("9876")), li("12186984"));
        assert_eq!(
            karatsuba_mul(&li("123456789012"), &li("987654321098")),
            li("121932631136585886175176")
        );
    }

    #[test]
    fn unequal_length_operands() {
        assert_eq!(karatsuba_mul(&li("1234567"), &li("89")), li("109876463"));
        assert_eq!(karatsuba_mul(&li("89"), &li("1234567")), li("109876463"));
    }

    #[test]
    fn negative_operands() {
        assert_eq!(karatsuba_mul(&li("-1234"), &li("9876")), li("-12186984"));
        assert_eq!(karatsuba_mul(&li("-1234"), &li("-9876")), li("12186984"));
    }

    #[test]
    fn operands_with_interior_zeros() {
        let a = li("10203040506070809");
        let b = li("90000000000000001");
        assert_eq!(karatsuba_mul(&a, &b), standard_mul(&a, &b));
    }

    #[test]
    fn agrees_with_schoolbook_across_lengths() {
        // Lengths chosen to hit odd splits, empty high halves, and
        // carry-length mismatches in the half-sums.
        let long: String = (0..137)
            .map(|i| char::from(b'0' + u8::try_from((i * 7 + 1) % 10).unwrap()))
            .collect();
        let samples = [
            "5",
            "99",
            "123",
            "100001",
            "999999999",
            "31415926535897932384626433832795028841",
            long.as_str(),
        ];
        for left in &samples {
            for right in &samples {
                let a = li(left);
                let b = li(right);
                assert_eq!(
                    karatsuba_mul(&a, &b),
                    standard_mul(&a, &b),
                    "{left} * {right}"
                );
            }
        }
    }
}
