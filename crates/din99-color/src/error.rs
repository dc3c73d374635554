//! Error types for colour operations.
//!
//! Domain violations are reported as errors at the call boundary rather
//! than clamped, since clamping would break the Lab <-> DIN99 round trip.

use thiserror::Error;

/// Colour operation error.
///
/// Covers all failure modes of the DIN99 transforms:
/// - Input shape problems (wrong channel axis, bad flat length)
/// - Logarithm arguments outside the domain
/// - Invalid parametric factors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Array shape or channel error.
    #[error("array error: {0}")]
    Array(#[from] din99_core::Error),

    /// A channel value makes a logarithm argument non-positive.
    ///
    /// For Lab input this happens when `1 + 0.0158 * L <= 0`, i.e.
    /// `L <= -63.29`, or when L is NaN.
    #[error("{channel} = {value} is outside the transform domain (triple {index})")]
    Domain {
        /// Channel name ("L").
        channel: &'static str,
        /// Offending value.
        value: f64,
        /// Position of the triple in its batch (0 for scalar calls).
        index: usize,
    },

    /// A parametric factor is zero, negative or not finite.
    #[error("parametric factor {name} must be finite and positive, got {value}")]
    InvalidFactor {
        /// Factor name ("k_E" or "k_CH").
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Two batches that must pair up have different lengths.
    #[error("length mismatch: {left} vs {right} triples")]
    LengthMismatch {
        /// Length of the first batch.
        left: usize,
        /// Length of the second batch.
        right: usize,
    },

    /// A conversion name did not match any known transform.
    #[error("unknown conversion: {0}")]
    UnknownConversion(String),
}

/// Result type for colour operations.
pub type ColorResult<T> = Result<T, ColorError>;
