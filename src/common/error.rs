//! Error handling primitives shared across the crate.
//!
//! Every failure surfaces immediately to the caller; there is no partial
//! result mode. Numeric codes are attached to log events and must stay stable.

use thiserror::Error;

/// Stable error codes emitted in log events and process exit paths.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// A ratio was requested whose denominator is zero.
    UndefinedMetric = 1,
    /// A scorer produced a value outside [0, 1].
    InvalidScore = 2,
    /// Input failed validation.
    InvalidInput = 3,
    /// Filesystem or CSV/JSON failure.
    Io = 4,
    /// The external model fitting routine failed.
    Fit = 5,
}

/// Canonical error type for the crate.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("metric `{metric}` is undefined: zero denominator")]
    UndefinedMetric { metric: &'static str },

    #[error("score {score} is outside [0, 1]")]
    InvalidScore { score: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model fit failed: {0}")]
    Fit(String),
}

/// Result alias used throughout the crate.
pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    /// Zero-denominator helper.
    pub const fn undefined(metric: &'static str) -> Self {
        Self::UndefinedMetric { metric }
    }

    /// Validation helper.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Machine parsable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UndefinedMetric { .. } => ErrorCode::UndefinedMetric,
            EvalError::InvalidScore { .. } => ErrorCode::InvalidScore,
            EvalError::InvalidInput(_) => ErrorCode::InvalidInput,
            EvalError::Io(_) | EvalError::Csv(_) | EvalError::Json(_) => ErrorCode::Io,
            EvalError::Fit(_) => ErrorCode::Fit,
        }
    }
}
