//! Error types for kernel density estimation
//!
//! Provides a unified error type for all density crates.

use thiserror::Error;

/// Core error type for density estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The observed sample has no values
    #[error("Empty sample: cannot estimate a density from zero observations")]
    EmptySample,

    /// No evaluation points were supplied
    #[error("Empty evaluation set: no points to evaluate the density at")]
    EmptyEvaluationSet,

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Bandwidth is zero, negative, subnormal, NaN or infinite
    #[error("Invalid bandwidth {value}: must be a positive normal number")]
    InvalidBandwidth { value: f64 },

    /// A selection rule and an explicit bandwidth were both requested
    #[error("Conflicting bandwidth: a selection rule and an explicit value cannot both be set")]
    ConflictingBandwidth,

    /// Input contains NaN or infinite values
    #[error("Non-finite input: {0} contains NaN or infinite values")]
    NonFinite(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Kernel name not present in the catalog
    #[error("Unknown kernel: {0}")]
    UnknownKernel(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error is the non-fatal empty-input condition.
    ///
    /// Callers that follow the "empty result means failure" convention treat
    /// these as an empty density rather than a hard failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptySample | Self::EmptyEvaluationSet)
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite(context.to_string())
    }
}

/// Check that a bandwidth can be used as a divisor in the density sum.
///
/// Subnormal values are rejected: `1 / h` overflows for them, which would
/// turn the density into infinity or NaN.
pub fn validate_bandwidth(h: f64) -> Result<f64> {
    if h.is_normal() && h > 0.0 {
        Ok(h)
    } else {
        Err(Error::InvalidBandwidth { value: h })
    }
}
