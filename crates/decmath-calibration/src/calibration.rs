//! Calibration engine.

use decmath_core::{DEFAULT_FFT_THRESHOLD, DEFAULT_KARATSUBA_THRESHOLD};

use crate::microbench;
use crate::profile::{self, TuningProfile};

/// Digit counts probed when searching for the Karatsuba crossover.
const KARATSUBA_SWEEP: &[usize] = &[4, 8, 12, 16, 24, 32, 48, 64];

/// Digit counts probed when searching for the FFT crossover.
const FFT_SWEEP: &[usize] = &[32, 64, 96, 128, 192, 256, 384, 512];

/// Progress callback for calibration.
pub type ProgressCallback = Box<dyn Fn(CalibrationProgress) + Send>;

/// Progress information during calibration.
#[derive(Debug, Clone)]
pub struct CalibrationProgress {
    /// Current step name.
    pub step: String,
    /// Current step number (1-based).
    pub current: usize,
    /// Total number of steps.
    pub total: usize,
}

/// Calibration engine that measures optimal multiplication thresholds.
#[derive(Default)]
pub struct CalibrationEngine {
    progress_cb: Option<ProgressCallback>,
}

impl CalibrationEngine {
    /// Create a new calibration engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a progress callback.
    #[must_use]
    pub fn with_progress(mut self, cb: ProgressCallback) -> Self {
        self.progress_cb = Some(cb);
        self
    }

    /// Run the crossover sweeps and produce a tuning profile.
    #[must_use]
    pub fn calibrate(&self) -> TuningProfile {
        let total_steps = 3;

        self.report_progress("Finding Karatsuba crossover point", 1, total_steps);
        let karatsuba_points = microbench::find_karatsuba_crossover(KARATSUBA_SWEEP);
        let karatsuba_threshold = first_win(&karatsuba_points, DEFAULT_KARATSUBA_THRESHOLD);

        self.report_progress("Finding FFT crossover point", 2, total_steps);
        let fft_points = microbench::find_fft_crossover(FFT_SWEEP);
        let fft_threshold = first_win(&fft_points, DEFAULT_FFT_THRESHOLD);

        self.report_progress("Building profile", 3, total_steps);
        // The dispatcher requires ordered bands.
        let fft_threshold = fft_threshold.max(karatsuba_threshold);

        tracing::info!(
            karatsuba_threshold,
            fft_threshold,
            "calibration sweep complete"
        );

        TuningProfile {
            version: profile::PROFILE_VERSION,
            karatsuba_threshold,
            fft_threshold,
            cpu_model: profile::cpu_model(),
            num_cores: std::thread::available_parallelism()
                .map(std::num::NonZero::get)
                .unwrap_or(4),
            cpu_fingerprint: profile::cpu_fingerprint(),
            timestamp: profile::current_timestamp(),
        }
    }

    fn report_progress(&self, step: &str, current: usize, total: usize) {
        if let Some(cb) = &self.progress_cb {
            cb(CalibrationProgress {
                step: step.to_string(),
                current,
                total,
            });
        }
    }
}

/// Load the cached profile, falling back to defaults when absent or invalid.
#[must_use]
pub fn cached_or_default() -> TuningProfile {
    crate::io::load_validated_profile().unwrap_or_else(|| {
        tracing::debug!("no usable cached profile, using default thresholds");
        TuningProfile::default()
    })
}

/// Smallest probed size where the asymptotically faster algorithm wins.
fn first_win(points: &[microbench::CrossoverPoint], fallback: usize) -> usize {
    points
        .iter()
        .find(|p| p.upper_is_faster)
        .map_or(fallback, |p| p.digits)
}
