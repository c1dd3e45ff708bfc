//! Error handling and exit codes.

use decmath_core::constants::exit_codes;
use decmath_core::ParseLongIntError;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid operand: {0}")]
    Parse(#[from] ParseLongIntError),

    #[error("missing operand: {0}")]
    MissingOperand(&'static str),

    #[error("unknown operation '{0}' (expected mul, add, sub, or cmp)")]
    UnknownOp(String),

    #[error("unknown algorithm '{0}' (expected auto, standard, karatsuba, fft, or all)")]
    UnknownAlgo(String),

    #[error("multiplication algorithms disagree: {0} != {1}")]
    Mismatch(String, String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Map an error chain to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AppError>() {
        Some(AppError::Mismatch(_, _)) => exit_codes::ERROR_MISMATCH,
        Some(
            AppError::Parse(_)
            | AppError::MissingOperand(_)
            | AppError::UnknownOp(_)
            | AppError::UnknownAlgo(_),
        ) => exit_codes::ERROR_CONFIG,
        Some(AppError::Io(_)) | None => exit_codes::ERROR_GENERIC,
    }
}
