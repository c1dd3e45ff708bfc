//! # decmath-poly
//!
//! Real-coefficient polynomials and the convolution engine behind
//! FFT-based decimal multiplication. Provides Horner evaluation,
//! pointwise arithmetic, naive O(n*m) convolution, and an iterative
//! radix-2 Cooley-Tukey FFT with bit-reversal permutation.

pub mod bitrev;
pub mod fft;
pub mod poly;

pub use bitrev::{bit_reverse, FftError};
pub use fft::{convolve, convolve_fft, convolve_naive, NAIVE_CONVOLUTION_THRESHOLD};
pub use poly::{PolyError, Polynomial};
