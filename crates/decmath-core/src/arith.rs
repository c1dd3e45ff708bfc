//! Carry/borrow engines over raw digit slices.
//!
//! These helpers operate on least-significant-first digit slices and know
//! nothing about signs. They are shared by the signed operations on
//! [`LongInt`](crate::LongInt), by `split_and_sum`, and by the Karatsuba
//! recursion, which works over borrowed sub-ranges of its operands
//! instead of materializing sub-buffers.

use std::cmp::Ordering;

/// True when every digit is zero (the empty slice is zero).
pub(crate) fn is_zero(digits: &[u8]) -> bool {
    digits.iter().all(|&d| d == 0)
}

/// Length ignoring high-order zero digits.
fn effective_len(digits: &[u8]) -> usize {
    digits
        .iter()
        .rposition(|&d| d != 0)
        .map_or(0, |pos| pos + 1)
}

/// Remove high-order zero digits in place.
pub(crate) fn trim(digits: &mut Vec<u8>) {
    digits.truncate(effective_len(digits));
}

/// Compare two magnitudes: by effective length first, then digit by digit
/// from the most significant end. Untrimmed buffers compare correctly.
pub(crate) fn cmp_digits(a: &[u8], b: &[u8]) -> Ordering {
    let la = effective_len(a);
    let lb = effective_len(b);
    if la != lb {
        return la.cmp(&lb);
    }
    for i in (0..la).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

/// Digit-wise sum with carry. The result may be one digit longer than the
/// longer operand.
pub(crate) fn add_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    let max_len = a.len().max(b.len());
    let mut out = Vec::with_capacity(max_len + 1);
    let mut carry = 0u8;
    for i in 0..max_len {
        let l = a.get(i).copied().unwrap_or(0);
        let r = b.get(i).copied().unwrap_or(0);
        let sum = l + r + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Digit-wise difference with borrow. Requires `a >= b` as magnitudes;
/// the result is trimmed.
pub(crate) fn sub_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(cmp_digits(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u8;
    for i in 0..a.len() {
        let mut l = a[i];
        let r = b.get(i).copied().unwrap_or(0) + borrow;
        if l < r {
            l += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(l - r);
    }
    trim(&mut out);
    out
}

/// Multiply a digit buffer by a single digit, propagating the carry.
/// Shared kernel of schoolbook multiplication and the Karatsuba base case.
pub(crate) fn digit_mul(digits: &[u8], factor: u8) -> Vec<u8> {
    debug_assert!(factor < 10);
    let mut out = Vec::with_capacity(digits.len() + 1);
    let mut carry = 0u8;
    for &d in digits {
        let product = d * factor + carry;
        out.push(product % 10);
        carry = product / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    trim(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_with_carry_growth() {
        // 2 + 199 = 201
        assert_eq!(add_digits(&[2], &[9, 9, 1]), vec![1, 0, 2]);
        // 99 + 1 = 100 grows by one digit
        assert_eq!(add_digits(&[9, 9], &[1]), vec![0, 0, 1]);
    }

    #[test]
    fn sub_with_borrow() {
        // 201 - 199 = 2
        assert_eq!(sub_digits(&[1, 0, 2], &[9, 9, 1]), vec![2]);
        // 100 - 1 = 99, trimmed
        assert_eq!(sub_digits(&[0, 0, 1], &[1]), vec![9, 9]);
    }

    #[test]
    fn sub_to_zero_is_empty() {
        assert_eq!(sub_digits(&[5, 3], &[5, 3]), Vec::<u8>::new());
    }

    #[test]
    fn cmp_ignores_high_order_zeros() {
        assert_eq!(cmp_digits(&[5, 1, 0, 0], &[5, 1]), Ordering::Equal);
        assert_eq!(cmp_digits(&[4, 1], &[5, 1]), Ordering::Less);
        assert_eq!(cmp_digits(&[1, 2, 3], &[9, 9]), Ordering::Greater);
        assert_eq!(cmp_digits(&[], &[0, 0]), Ordering::Equal);
    }

    #[test]
    fn digit_mul_carries() {
        // 57 * 8 = 456
        assert_eq!(digit_mul(&[7, 5], 8), vec![6, 5, 4]);
        // anything * 0 trims to zero
        assert_eq!(digit_mul(&[7, 5], 0), Vec::<u8>::new());
    }

    #[test]
    fn trim_keeps_low_zeros() {
        let mut v = vec![0, 3, 0, 0];
        trim(&mut v);
        assert_eq!(v, vec![0, 3]);
    }
}
