//! Micro-benchmarks for the crossover search.

use std::time::Duration;

use decmath_core::{fft_mul, karatsuba_mul, standard_mul, LongInt};
use decmath_poly::{convolve_fft, convolve_naive};

use crate::runner::{sample, time_median, Samples};

/// Timing comparison of two algorithms at one operand size.
#[derive(Debug, Clone)]
pub struct CrossoverPoint {
    pub digits: usize,
    pub lower_ns: u64,
    pub upper_ns: u64,
    /// True when the asymptotically faster algorithm already wins here.
    pub upper_is_faster: bool,
}

/// Benchmark schoolbook multiplication at a given digit count.
#[must_use]
pub fn bench_standard(digits: usize) -> Duration {
    let a = make_operand(digits, 3);
    let b = make_operand(digits, 7);
    time_median(10, || {
        let _ = standard_mul(&a, &b);
    })
}

/// Benchmark Karatsuba multiplication at a given digit count.
#[must_use]
pub fn bench_karatsuba(digits: usize) -> Duration {
    let a = make_operand(digits, 3);
    let b = make_operand(digits, 7);
    time_median(10, || {
        let _ = karatsuba_mul(&a, &b);
    })
}

/// Benchmark FFT multiplication at a given digit count.
#[must_use]
pub fn bench_fft(digits: usize) -> Duration {
    let a = make_operand(digits, 3);
    let b = make_operand(digits, 7);
    time_median(10, || {
        let _ = fft_mul(&a, &b);
    })
}

/// Compare schoolbook against Karatsuba at each of the given digit counts.
#[must_use]
pub fn find_karatsuba_crossover(digit_counts: &[usize]) -> Vec<CrossoverPoint> {
    digit_counts
        .iter()
        .map(|&digits| {
            let standard = bench_detailed(digits, "standard", standard_mul);
            let karatsuba = bench_detailed(digits, "karatsuba", karatsuba_mul);
            crossover_point(digits, &standard, &karatsuba)
        })
        .collect()
}

/// Compare Karatsuba against FFT multiplication at each of the given digit counts.
#[must_use]
pub fn find_fft_crossover(digit_counts: &[usize]) -> Vec<CrossoverPoint> {
    digit_counts
        .iter()
        .map(|&digits| {
            let karatsuba = bench_detailed(digits, "karatsuba", karatsuba_mul);
            let fft = bench_detailed(digits, "fft", fft_mul);
            crossover_point(digits, &karatsuba, &fft)
        })
        .collect()
}

/// Compare naive convolution against FFT convolution at each coefficient count.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn find_convolution_crossover(coeff_counts: &[usize]) -> Vec<CrossoverPoint> {
    coeff_counts
        .iter()
        .map(|&n| {
            let a: Vec<f64> = (0..n).map(|i| (i % 10) as f64).collect();
            let b: Vec<f64> = (0..n).map(|i| ((i + 3) % 10) as f64).collect();

            let naive = sample("conv_naive", 3, 10, || {
                let _ = convolve_naive(&a, &b);
            });
            let fft = sample("conv_fft", 3, 10, || {
                let _ = convolve_fft(&a, &b);
            });
            crossover_point(n, &naive, &fft)
        })
        .collect()
}

fn bench_detailed(
    digits: usize,
    name: &str,
    mul: fn(&LongInt, &LongInt) -> LongInt,
) -> Samples {
    let a = make_operand(digits, 3);
    let b = make_operand(digits, 7);
    sample(&format!("{name}_{digits}"), 3, 10, || {
        let _ = mul(&a, &b);
    })
}

#[allow(clippy::cast_possible_truncation)]
fn crossover_point(digits: usize, lower: &Samples, upper: &Samples) -> CrossoverPoint {
    CrossoverPoint {
        digits,
        lower_ns: lower.median().as_nanos() as u64,
        upper_ns: upper.median().as_nanos() as u64,
        upper_is_faster: upper.median() < lower.median(),
    }
}

/// Build a deterministic operand with exactly `digits` decimal digits.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn make_operand(digits: usize, seed: u64) -> LongInt {
    if digits == 0 {
        return LongInt::zero();
    }
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    let mut s = String::with_capacity(digits);
    for i in 0..digits {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let d = (state >> 33) % 10;
        // no leading zero
        if i == 0 && d == 0 {
            s.push('1');
        } else {
            s.push(char::from(b'0' + d as u8));
        }
    }
    s.parse().unwrap_or_else(|_| LongInt::zero())
}
