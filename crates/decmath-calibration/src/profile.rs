//! Tuning profile (serializable).

use serde::{Deserialize, Serialize};

use decmath_core::{DEFAULT_FFT_THRESHOLD, DEFAULT_KARATSUBA_THRESHOLD};

/// Current profile format version.
pub const PROFILE_VERSION: u32 = 1;

/// Tuning profile holding measured multiplication thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningProfile {
    /// Profile format version for compatibility checking.
    pub version: u32,
    /// Digit count where Karatsuba starts beating schoolbook.
    pub karatsuba_threshold: usize,
    /// Digit count where FFT convolution starts beating Karatsuba.
    pub fft_threshold: usize,
    /// CPU model the profile was measured on.
    pub cpu_model: String,
    /// Number of CPU cores.
    pub num_cores: usize,
    /// CPU fingerprint for invalidation.
    pub cpu_fingerprint: String,
    /// Measurement timestamp.
    pub timestamp: String,
}

impl Default for TuningProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            karatsuba_threshold: DEFAULT_KARATSUBA_THRESHOLD,
            fft_threshold: DEFAULT_FFT_THRESHOLD,
            cpu_model: String::new(),
            num_cores: num_cpus(),
            cpu_fingerprint: String::new(),
            timestamp: String::new(),
        }
    }
}

impl TuningProfile {
    /// Check if this profile is compatible with the current format version.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == PROFILE_VERSION
    }

    /// Check if this profile matches the current CPU.
    #[must_use]
    pub fn matches_cpu(&self, current_fingerprint: &str) -> bool {
        if self.cpu_fingerprint.is_empty() || current_fingerprint.is_empty() {
            return true; // can't verify, assume compatible
        }
        self.cpu_fingerprint == current_fingerprint
    }

    /// Validate that thresholds are positive and correctly ordered.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.karatsuba_threshold > 0
            && self.fft_threshold > 0
            && self.fft_threshold >= self.karatsuba_threshold
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4)
}

/// Get a CPU fingerprint based on model and core count.
#[must_use]
pub fn cpu_fingerprint() -> String {
    let model = cpu_model();
    let cores = num_cpus();
    format!("{model}/cores={cores}")
}

/// Get the current CPU model string.
#[must_use]
pub fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_default()
}

/// Get the current timestamp as seconds since the Unix epoch.
#[must_use]
pub fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}
