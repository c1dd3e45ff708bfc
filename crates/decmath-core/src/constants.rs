//! Default multiplication thresholds and process exit codes.

/// Default digit count at or below which schoolbook multiplication is used.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 10;

/// Default digit count at or below which Karatsuba is used; above it the
/// FFT convolution path takes over.
pub const DEFAULT_FFT_THRESHOLD: usize = 100;

/// Largest operand digit count for which double-precision FFT convolution
/// is trusted.
///
/// A convolved coefficient is at most `81 * n` for `n`-digit operands and
/// must round to the correct integer; the accumulated transform error at
/// this size stays well below the 0.5 rounding margin. Past this bound,
/// use the exact Karatsuba path (or cross-validate, as the property tests
/// do).
pub const FFT_SAFE_DIGITS: usize = 200_000;

/// Process exit codes used by the CLI.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or operand.
    pub const ERROR_CONFIG: i32 = 4;
}
