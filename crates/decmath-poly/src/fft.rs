//! Iterative radix-2 Cooley-Tukey FFT and coefficient convolution.
//!
//! The transform mutates a working buffer in place (bit-reversal then
//! butterfly stages); the public convolution functions stay value-semantic.

use num_complex::Complex64;
use num_traits::Zero;

use crate::bitrev;

/// Result length below which naive convolution wins on constant factors.
/// Established empirically; see the calibration crate's convolution sweep.
pub const NAIVE_CONVOLUTION_THRESHOLD: usize = 1500;

/// Transform size at or above which the two forward transforms of a
/// convolution run on separate rayon workers. The transforms are
/// independent, so results are bit-identical to sequential execution.
pub const PARALLEL_FFT_THRESHOLD: usize = 1 << 15;

/// Forward transform, in-place. `data.len()` must be a power of two.
pub fn fft_forward(data: &mut [Complex64]) {
    transform(data, false);
}

/// Inverse transform, in-place, including the 1/N scaling.
/// `data.len()` must be a power of two.
#[allow(clippy::cast_precision_loss)]
pub fn fft_inverse(data: &mut [Complex64]) {
    let n = data.len();
    transform(data, true);
    if n > 1 {
        let scale = 1.0 / n as f64;
        for value in data.iter_mut() {
            *value *= scale;
        }
    }
}

/// Butterfly network shared by both transform directions.
///
/// Each of the `log2(n)` stages doubles the block size `m`. The stage root
/// `omega_m = exp(±i*2π/m)` is generated once per stage and advanced by
/// repeated complex multiplication within each block.
#[allow(clippy::cast_precision_loss)]
fn transform(data: &mut [Complex64], inverse: bool) {
    let n = data.len();
    debug_assert!(n.is_power_of_two());
    if n <= 1 {
        return;
    }

    bitrev::permute(data);

    let angle_sign = if inverse { -1.0 } else { 1.0 };
    let stages = n.trailing_zeros();

    for s in 1..=stages {
        let m = 1usize << s;
        let half = m / 2;
        let omega_m = Complex64::from_polar(1.0, angle_sign * std::f64::consts::TAU / m as f64);

        for block in (0..n).step_by(m) {
            let mut omega = Complex64::new(1.0, 0.0);
            for j in 0..half {
                let t = omega * data[block + j + half];
                let u = data[block + j];
                data[block + j] = u + t;
                data[block + j + half] = u - t;
                omega *= omega_m;
            }
        }
    }
}

/// Convolve two coefficient slices, selecting naive or FFT convolution
/// by the size of the result.
pub fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let out_len = a.len() + b.len() - 1;
    if out_len < NAIVE_CONVOLUTION_THRESHOLD {
        tracing::trace!(out_len, "convolving naively");
        convolve_naive(a, b)
    } else {
        tracing::trace!(out_len, "convolving via FFT");
        convolve_fft(a, b)
    }
}

/// Direct double-sum convolution, O(n*m). Exact for integral inputs.
pub fn convolve_naive(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let out_len = a.len() + b.len() - 1;
    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let mut coef = 0.0;
        for j in 0..=i {
            if i - j < a.len() && j < b.len() {
                coef += a[i - j] * b[j];
            }
        }
        out.push(coef);
    }
    out
}

/// FFT convolution: zero-pad both inputs to the next power of two at or
/// above `a.len() + b.len() - 1`, transform, multiply spectra pointwise,
/// inverse-transform, and keep the real parts of the first `out_len`
/// coefficients.
///
/// Output coefficients carry floating-point rounding error; callers that
/// need integral results must round and must not trust results beyond
/// their documented operand-size bound.
pub fn convolve_fft(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let out_len = a.len() + b.len() - 1;
    let n = out_len.next_power_of_two();

    let mut fa = to_complex(a, n);
    let mut fb = to_complex(b, n);

    if n >= PARALLEL_FFT_THRESHOLD {
        rayon::join(|| fft_forward(&mut fa), || fft_forward(&mut fb));
    } else {
        fft_forward(&mut fa);
        fft_forward(&mut fb);
    }

    for (x, y) in fa.iter_mut().zip(&fb) {
        *x *= *y;
    }

    fft_inverse(&mut fa);

    fa.truncate(out_len);
    fa.into_iter().map(|c| c.re).collect()
}

fn to_complex(coeffs: &[f64], n: usize) -> Vec<Complex64> {
    let mut out = Vec::with_capacity(n);
    out.extend(coeffs.iter().map(|&c| Complex64::new(c, 0.0)));
    out.resize(n, Complex64::zero());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: &[f64], expected: &[f64]) {
        assert_eq!(got.len(), expected.len());
        for (i, (g, e)) in got.iter().zip(expected).enumerate() {
            assert!((g - e).abs() < 1e-6, "coefficient {i}: {g} != {e}");
        }
    }

    #[test]
    fn forward_inverse_roundtrip() {
        let original: Vec<Complex64> = (0..8)
            .map(|i| Complex64::new(f64::from(i) - 3.0, 0.0))
            .collect();
        let mut data = original.clone();
        fft_forward(&mut data);
        fft_inverse(&mut data);
        for (got, expected) in data.iter().zip(&original) {
            assert!((got - expected).norm() < 1e-9);
        }
    }

    #[test]
    fn forward_of_constant_is_impulse() {
        // FFT of an all-ones vector concentrates everything in bin 0.
        let mut data = vec![Complex64::new(1.0, 0.0); 8];
        fft_forward(&mut data);
        assert!((data[0].re - 8.0).abs() < 1e-9);
        for value in &data[1..] {
            assert!(value.norm() < 1e-9);
        }
    }

    #[test]
    fn naive_convolution_known_product() {
        // (1 + 2x)^2 = 1 + 4x + 4x^2
        let got = convolve_naive(&[1.0, 2.0], &[1.0, 2.0]);
        assert_close(&got, &[1.0, 4.0, 4.0]);
    }

    #[test]
    fn naive_convolution_asymmetric_lengths() {
        // (1 - 2x - 19x^2) * 1
        let got = convolve_naive(&[1.0, -2.0, -19.0], &[1.0]);
        assert_close(&got, &[1.0, -2.0, -19.0]);
    }

    #[test]
    fn fft_convolution_matches_naive() {
        let a: Vec<f64> = (0..37).map(|i| f64::from(i % 10)).collect();
        let b: Vec<f64> = (0..53).map(|i| f64::from((i * 7) % 10)).collect();
        let naive = convolve_naive(&a, &b);
        let fft = convolve_fft(&a, &b);
        assert_close(&fft, &naive);
    }

    #[test]
    fn fft_convolution_matches_naive_above_parallel_threshold() {
        let len = PARALLEL_FFT_THRESHOLD / 2 + 1;
        let a: Vec<f64> = (0..len).map(|i| f64::from(u8::try_from(i % 10).unwrap())).collect();
        let b = a.clone();
        let fft = convolve_fft(&a, &b);
        assert_eq!(fft.len(), 2 * len - 1);
        // Spot-check a few coefficients against the direct sum.
        for &i in &[0usize, 1, 17, len - 1, 2 * len - 2] {
            let mut expected = 0.0;
            for j in 0..=i {
                if i - j < a.len() && j < b.len() {
                    expected += a[i - j] * b[j];
                }
            }
            assert!(
                (fft[i] - expected).abs() < 1e-3,
                "coefficient {i}: {} != {expected}",
                fft[i]
            );
        }
    }

    #[test]
    fn convolve_dispatches_to_exact_result() {
        let a = [9.0, 9.0, 9.0];
        let b = [9.0, 9.0];
        // 999 * 99 digitwise before carry propagation.
        let got = convolve(&a, &b);
        assert_close(&got, &[81.0, 162.0, 162.0, 81.0]);
    }

    #[test]
    fn empty_operands_convolve_to_empty() {
        assert!(convolve(&[], &[1.0]).is_empty());
        assert!(convolve_fft(&[1.0], &[]).is_empty());
        assert!(convolve_naive(&[], &[]).is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            /// FFT convolution agrees with the exact double sum for random
            /// digit-range coefficients.
            #[test]
            fn fft_matches_naive(
                a in prop::collection::vec(0u8..10, 1..128),
                b in prop::collection::vec(0u8..10, 1..128),
            ) {
                let a: Vec<f64> = a.into_iter().map(f64::from).collect();
                let b: Vec<f64> = b.into_iter().map(f64::from).collect();
                let naive = convolve_naive(&a, &b);
                let fft = convolve_fft(&a, &b);
                prop_assert_eq!(naive.len(), fft.len());
                for (i, (n, f)) in naive.iter().zip(&fft).enumerate() {
                    prop_assert!((n - f).abs() < 1e-6, "coefficient {}: {} != {}", i, n, f);
                }
            }
        }
    }
}
