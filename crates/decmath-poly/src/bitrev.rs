//! Bit-reversal permutation for the iterative FFT.
//!
//! Reversal of a `log2(n)`-bit index is computed from a 256-entry
//! reversed-byte table composed across 32 bits and shifted into place,
//! instead of reversing bit by bit.

use num_complex::Complex64;

/// Error type for FFT index and size domain violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FftError {
    /// Asked to reverse an index not strictly less than the transform size.
    #[error("index {index} out of range for transform size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Transform sizes must be powers of two.
    #[error("transform size {0} is not a power of two")]
    NonPowerOfTwo(usize),
}

/// Each byte mapped to its bit-reversed value.
const REVERSED_BYTES: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut v = i as u8;
        let mut r = 0u8;
        let mut bit = 0;
        while bit < 8 {
            r = (r << 1) | (v & 1);
            v >>= 1;
            bit += 1;
        }
        table[i] = r;
        i += 1;
    }
    table
};

/// Reverse the low `width` bits of `i`. Requires `1 <= width <= 32`
/// and `i < 2^width`.
fn reverse_bits(i: u32, width: u32) -> u32 {
    debug_assert!((1..=32).contains(&width));
    let r = (u32::from(REVERSED_BYTES[(i & 0xFF) as usize]) << 24)
        | (u32::from(REVERSED_BYTES[((i >> 8) & 0xFF) as usize]) << 16)
        | (u32::from(REVERSED_BYTES[((i >> 16) & 0xFF) as usize]) << 8)
        | u32::from(REVERSED_BYTES[((i >> 24) & 0xFF) as usize]);
    r >> (32 - width)
}

/// Checked bit reversal of index `i` within a transform of size `n`.
///
/// # Errors
/// Returns [`FftError::NonPowerOfTwo`] if `n` is not a power of two, and
/// [`FftError::IndexOutOfRange`] if `i >= n`.
#[allow(clippy::cast_possible_truncation)]
pub fn bit_reverse(i: usize, n: usize) -> Result<usize, FftError> {
    if !n.is_power_of_two() {
        return Err(FftError::NonPowerOfTwo(n));
    }
    if i >= n {
        return Err(FftError::IndexOutOfRange { index: i, size: n });
    }
    if n == 1 {
        return Ok(0);
    }
    Ok(reverse_bits(i as u32, n.trailing_zeros()) as usize)
}

/// Apply the bit-reversal permutation in-place.
///
/// `data.len()` must be a power of two; callers inside this crate
/// guarantee it by construction.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn permute(data: &mut [Complex64]) {
    let n = data.len();
    debug_assert!(n.is_power_of_two());
    if n <= 1 {
        return;
    }
    let width = n.trailing_zeros();
    for i in 0..n {
        let j = reverse_bits(i as u32, width) as usize;
        if i < j {
            data.swap(i, j);
        }
    }
}
