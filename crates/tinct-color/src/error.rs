//! Error types for colour operations.
//!
//! Failures here are limited to invalid numeric input (non-finite values,
//! out-of-domain parameters), degenerate matrices and iterative inverses
//! that do not reach their tolerance.

use thiserror::Error;
use tinct_primaries::PrimariesError;

/// Colour operation error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Input value is NaN or infinite.
    #[error("invalid input value: {0}")]
    InvalidValue(String),

    /// Parameter outside its valid domain.
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfDomain {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },

    /// Matrix operation failed (singular, non-finite).
    #[error("matrix error: {0}")]
    Matrix(String),

    /// Iterative inverse stopped above its residual tolerance.
    #[error("inverse did not converge after {iterations} iterations (residual {residual:e})")]
    NotConverged {
        /// Iterations performed.
        iterations: usize,
        /// Distance between the forward image of the result and the target.
        residual: f64,
        /// Best estimate found.
        best: tinct_math::Vec3,
    },

    /// No colourspace registered under this name.
    #[error("unknown colourspace: {0}")]
    UnknownColorspace(String),

    /// Not a recognised colour-vision deficiency.
    #[error("unknown deficiency: {0} (expected protanomaly, deuteranomaly or tritanomaly)")]
    UnknownDeficiency(String),

    /// Primaries do not define a valid colourspace.
    #[error(transparent)]
    Primaries(#[from] PrimariesError),
}

/// Result type for colour operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// Rejects triplets containing NaN or infinity.
pub(crate) fn ensure_finite(what: &str, v: tinct_math::Vec3) -> ColorResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ColorError::InvalidValue(format!(
            "{} ({}, {}, {}) is not finite",
            what, v.x, v.y, v.z
        )))
    }
}
