//! Application configuration from CLI flags and environment.

use clap::Parser;

/// decmath — arbitrary-precision decimal arithmetic.
#[derive(Parser, Debug)]
#[command(name = "decmath", version, about, allow_negative_numbers = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Left operand (decimal integer, optional leading sign).
    pub lhs: Option<String>,

    /// Right operand.
    pub rhs: Option<String>,

    /// Operation to perform: mul, add, sub, or cmp.
    #[arg(long, default_value = "mul", env = "DECMATH_OP")]
    pub op: String,

    /// Multiplication algorithm: auto, standard, karatsuba, fft, or all.
    #[arg(long, default_value = "auto")]
    pub algo: String,

    /// Karatsuba threshold in digits (0 = profile or built-in default).
    #[arg(long, default_value = "0")]
    pub karatsuba_threshold: usize,

    /// FFT threshold in digits (0 = profile or built-in default).
    #[arg(long, default_value = "0")]
    pub fft_threshold: usize,

    /// Sum the decimal integers listed one per line in FILE.
    #[arg(long, value_name = "FILE")]
    pub input: Option<String>,

    /// Run the threshold calibration sweep and save a tuning profile.
    #[arg(long)]
    pub calibrate: bool,

    /// Print per-algorithm wall-clock timings.
    #[arg(long)]
    pub timings: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
