//! Multiplication options and threshold configuration.

use crate::constants::{DEFAULT_FFT_THRESHOLD, DEFAULT_KARATSUBA_THRESHOLD};

/// Tunable thresholds for the multiplication dispatcher.
///
/// The cutoffs are configuration, not architecture: they can be retuned
/// per platform (see the calibration crate) without touching the
/// dispatcher.
#[derive(Debug, Clone)]
pub struct Options {
    /// Digit count at or below which schoolbook multiplication is used.
    pub karatsuba_threshold: usize,
    /// Digit count at or below which Karatsuba is used; FFT above.
    pub fft_threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            karatsuba_threshold: DEFAULT_KARATSUBA_THRESHOLD,
            fft_threshold: DEFAULT_FFT_THRESHOLD,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero and
    /// keeping the bands ordered.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.karatsuba_threshold == 0 {
            self.karatsuba_threshold = DEFAULT_KARATSUBA_THRESHOLD;
        }
        if self.fft_threshold == 0 {
            self.fft_threshold = DEFAULT_FFT_THRESHOLD;
        }
        if self.fft_threshold < self.karatsuba_threshold {
            self.fft_threshold = self.karatsuba_threshold;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.karatsuba_threshold, DEFAULT_KARATSUBA_THRESHOLD);
        assert_eq!(opts.fft_threshold, DEFAULT_FFT_THRESHOLD);
    }

    #[test]
    fn normalize_zero_thresholds() {
        let opts = Options {
            karatsuba_threshold: 0,
            fft_threshold: 0,
        }
        .normalize();
        assert_eq!(opts.karatsuba_threshold, DEFAULT_KARATSUBA_THRESHOLD);
        assert_eq!(opts.fft_threshold, DEFAULT_FFT_THRESHOLD);
    }

    #[test]
    fn normalize_reorders_inverted_bands() {
        let opts = Options {
            karatsuba_threshold: 50,
            fft_threshold: 20,
        }
        .normalize();
        assert_eq!(opts.fft_threshold, 50);
    }
}
