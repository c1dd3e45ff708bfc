//! Signed decimal big integer over a least-significant-first digit buffer.

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::arith;
use crate::sign::Sign;

/// Error returned when a decimal string cannot be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseLongIntError {
    /// Empty input, or input consisting only of a sign character.
    #[error("empty decimal literal")]
    Empty,

    /// A character other than a digit or a single leading sign.
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },
}

/// Arbitrary-precision signed decimal integer.
///
/// The magnitude is a base-10 digit buffer, least-significant digit first.
/// Canonical form: no high-order zero digits, zero is the empty buffer,
/// and an empty buffer always carries [`Sign::Pos`]. All public
/// constructors and operations maintain this form; ordering and equality
/// therefore never see a negative zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongInt {
    sign: Sign,
    digits: Vec<u8>,
}

impl LongInt {
    /// The canonical zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            sign: Sign::Pos,
            digits: Vec::new(),
        }
    }

    /// Build from a sign and a raw digit buffer; trims high-order zeros
    /// and canonicalizes the sign of zero.
    pub(crate) fn from_parts(sign: Sign, mut digits: Vec<u8>) -> Self {
        arith::trim(&mut digits);
        let sign = if digits.is_empty() { Sign::Pos } else { sign };
        Self { sign, digits }
    }

    /// Magnitude digits, least-significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Number of digits in the magnitude (0 for zero).
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Zero is detected from the digits, never from the sign.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        arith::is_zero(&self.digits)
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Total order over (sign, magnitude): zero equals zero regardless of
    /// sign, negatives sort below positives, and among equal signs the
    /// magnitude order is inverted for negatives.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => Ordering::Equal,
            (false, true) => {
                if self.is_negative() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (true, false) => {
                if other.is_negative() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, false) => {
                if self.sign != other.sign {
                    if self.is_negative() {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    }
                } else {
                    let magnitude = arith::cmp_digits(&self.digits, &other.digits);
                    if self.is_negative() {
                        magnitude.reverse()
                    } else {
                        magnitude
                    }
                }
            }
        }
    }

    /// Magnitude-only comparison, ignoring signs.
    #[must_use]
    pub fn abs_cmp(&self, other: &Self) -> Ordering {
        arith::cmp_digits(&self.digits, &other.digits)
    }

    /// Multiply the magnitude by `10^k` by inserting `k` zero digits at
    /// the low-order end. O(n); zero stays zero and the sign is untouched.
    #[must_use]
    pub fn shift(&self, k: usize) -> Self {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut digits = Vec::with_capacity(self.digits.len() + k);
        digits.resize(k, 0);
        digits.extend_from_slice(&self.digits);
        Self {
            sign: self.sign,
            digits,
        }
    }

    /// Split the digit range `[min..=max]` at `mid` (last index of the low
    /// half; the high half absorbs any odd leftover digit) and return
    /// low + high. `max` is clamped to the buffer. This is how the
    /// Karatsuba recursion forms its cross-term operands directly from a
    /// sub-range without materializing sub-vectors.
    #[must_use]
    pub fn split_and_sum(&self, min: usize, mid: usize, max: usize) -> Self {
        let len = self.digits.len();
        if len == 0 || min >= len || mid < min || max < mid {
            return Self::zero();
        }
        let low = &self.digits[min..=mid.min(len - 1)];
        let high_end = max.min(len - 1);
        let high: &[u8] = if mid + 1 <= high_end {
            &self.digits[mid + 1..=high_end]
        } else {
            &[]
        };
        Self::from_parts(Sign::Pos, arith::add_digits(low, high))
    }

    fn signed_add(left_sign: Sign, left: &[u8], right_sign: Sign, right: &[u8]) -> Self {
        if left_sign == right_sign {
            return Self::from_parts(left_sign, arith::add_digits(left, right));
        }
        // Mixed signs: subtract the smaller magnitude from the larger and
        // take the larger operand's sign; a tie is positive zero.
        match arith::cmp_digits(left, right) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_parts(left_sign, arith::sub_digits(left, right)),
            Ordering::Less => Self::from_parts(right_sign, arith::sub_digits(right, left)),
        }
    }
}

impl std::ops::Add for &LongInt {
    type Output = LongInt;

    fn add(self, other: &LongInt) -> LongInt {
        LongInt::signed_add(self.sign, &self.digits, other.sign, &other.digits)
    }
}

impl std::ops::Add for LongInt {
    type Output = LongInt;

    fn add(self, other: LongInt) -> LongInt {
        &self + &other
    }
}

impl std::ops::Sub for &LongInt {
    type Output = LongInt;

    fn sub(self, other: &LongInt) -> LongInt {
        LongInt::signed_add(self.sign, &self.digits, other.sign.flip(), &other.digits)
    }
}

impl std::ops::Sub for LongInt {
    type Output = LongInt;

    fn sub(self, other: LongInt) -> LongInt {
        &self - &other
    }
}

impl std::ops::Neg for &LongInt {
    type Output = LongInt;

    fn neg(self) -> LongInt {
        LongInt::from_parts(self.sign.flip(), self.digits.clone())
    }
}

impl std::ops::Neg for LongInt {
    type Output = LongInt;

    fn neg(self) -> LongInt {
        LongInt::from_parts(self.sign.flip(), self.digits)
    }
}

impl Ord for LongInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for LongInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for LongInt {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Neg } else { Sign::Pos };
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::new();
        while magnitude != 0 {
            digits.push(u8::try_from(magnitude % 10).unwrap_or(0));
            magnitude /= 10;
        }
        Self::from_parts(sign, digits)
    }
}

impl From<i32> for LongInt {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl FromStr for LongInt {
    type Err = ParseLongIntError;

    /// Parse a decimal literal with an optional single leading `-` or `+`.
    /// Any other non-digit character fails; leading zeros are accepted and
    /// trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Neg, rest),
            None => (Sign::Pos, s.strip_prefix('+').unwrap_or(s)),
        };
        if body.is_empty() {
            return Err(ParseLongIntError::Empty);
        }
        let sign_offset = s.len() - body.len();
        for (i, ch) in body.char_indices() {
            if !ch.is_ascii_digit() {
                return Err(ParseLongIntError::InvalidCharacter {
                    ch,
                    pos: i + sign_offset,
                });
            }
        }
        let digits = body.bytes().rev().map(|b| b - b'0').collect();
        Ok(Self::from_parts(sign, digits))
    }
}

/// Canonical rendering: digits most-significant first, `-` only when
/// negative, `0` for zero. The `{:+}` flag requests the sign-explicit
/// mode, which prefixes `+` or `-` to every nonzero value (zero still
/// renders as an unsigned `0`).
impl fmt::Display for LongInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_char('0');
        }
        if self.is_negative() {
            f.write_char('-')?;
        } else if f.sign_plus() {
            f.write_char('+')?;
        }
        for &d in self.digits.iter().rev() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
