//! Error types for din99-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of building and reshaping
//! triple buffers:
//! - A trailing axis that is not 3 channels wide
//! - A flat buffer whose length is not a multiple of 3
//! - A shape whose element count disagrees with the backing data
//!
//! # Usage
//!
//! ```rust
//! use din99_core::{Error, Result};
//!
//! fn check_flat(values: &[f64]) -> Result<()> {
//!     if values.len() % 3 != 0 {
//!         return Err(Error::flat_length(values.len()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_flat(&[1.0, 2.0]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::array::TripleArray`] - Shape validation
//! - `din99-color` - Wrapped into `ColorError`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or reshaping triple buffers.
///
/// # Categories
///
/// - **Channel errors**: [`ShapeMismatch`](Error::ShapeMismatch), [`FlatLength`](Error::FlatLength)
/// - **Shape errors**: [`InvalidShape`](Error::InvalidShape)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The trailing axis does not hold exactly three channels.
    ///
    /// Returned when an array's last axis is not 3.
    ///
    /// # Example
    ///
    /// ```rust
    /// use din99_core::Error;
    ///
    /// let err = Error::shape_mismatch(3, 4);
    /// assert!(err.to_string().contains("got 4"));
    /// ```
    #[error("last axis must have {expected} channels, got {got}")]
    ShapeMismatch {
        /// Expected channel count
        expected: usize,
        /// Actual channel count
        got: usize,
    },

    /// A flat `[x0, y0, z0, x1, ...]` buffer does not split into triples.
    ///
    /// # Example
    ///
    /// ```rust
    /// use din99_core::Error;
    ///
    /// let err = Error::flat_length(7);
    /// assert_eq!(err.to_string(), "flat buffer of 7 values is not a multiple of 3");
    /// ```
    #[error("flat buffer of {len} values is not a multiple of 3")]
    FlatLength {
        /// Number of values in the buffer
        len: usize,
    },

    /// Shape is unusable for the given data.
    ///
    /// Returned when the product of the shape does not match the number of
    /// values, or when the shape is empty.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        /// Requested shape
        shape: Vec<usize>,
        /// Reason why the shape is invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(expected: usize, got: usize) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Creates an [`Error::FlatLength`] error.
    #[inline]
    pub fn flat_length(len: usize) -> Self {
        Self::FlatLength { len }
    }

    /// Creates an [`Error::InvalidShape`] error.
    #[inline]
    pub fn invalid_shape(shape: &[usize], reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            shape: shape.to_vec(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error comes from the channel axis.
    #[inline]
    pub fn is_channel_error(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. } | Self::FlatLength { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch() {
        let err = Error::shape_mismatch(3, 4);
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
        assert!(err.is_channel_error());
    }

    #[test]
    fn test_flat_length() {
        let err = Error::flat_length(7);
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(!msg.contains("channels"));
        assert!(err.is_channel_error());
    }

    #[test]
    fn test_invalid_shape() {
        let err = Error::invalid_shape(&[2, 2, 3], "expected 12 values, got 9");
        let msg = err.to_string();
        assert!(msg.contains("[2, 2, 3]"));
        assert!(msg.contains("got 9"));
        assert!(!err.is_channel_error());
    }
}
