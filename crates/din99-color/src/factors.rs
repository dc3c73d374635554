//! Parametric factors k_E and k_CH.
//!
//! The factors compensate for texture and other specimen presentation
//! effects. They apply uniformly to every triple of a call and default to 1.
//!
//! # Example
//!
//! ```rust
//! use din99_color::KFactors;
//!
//! let k = KFactors::new(2.0, 0.5).unwrap();
//! assert_eq!(k, KFactors::TEXTILES);
//! assert!(KFactors::new(0.0, 1.0).is_err());
//! ```

use crate::{ColorError, ColorResult};

/// Parametric factors for the DIN99 transforms.
///
/// Fields are public for struct-literal construction and deserialization;
/// every transform re-validates them, so an invalid literal is rejected at
/// the call rather than producing garbage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KFactors {
    /// Lightness factor k_E.
    pub k_e: f64,
    /// Chroma/hue factor k_CH.
    pub k_ch: f64,
}

impl KFactors {
    /// k_E = k_CH = 1.
    pub const UNIT: Self = Self { k_e: 1.0, k_ch: 1.0 };

    /// Factors used for textile colour differences: k_E = 2, k_CH = 0.5.
    pub const TEXTILES: Self = Self { k_e: 2.0, k_ch: 0.5 };

    /// Creates validated factors.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidFactor`] if either factor is not finite and
    /// strictly positive.
    pub fn new(k_e: f64, k_ch: f64) -> ColorResult<Self> {
        let k = Self { k_e, k_ch };
        k.validate()?;
        Ok(k)
    }

    /// Checks both factors are finite and strictly positive.
    pub fn validate(&self) -> ColorResult<()> {
        check_factor("k_E", self.k_e)?;
        check_factor("k_CH", self.k_ch)
    }

    /// Combined chroma divisor `k_E * k_CH`.
    #[inline]
    pub fn chroma_scale(&self) -> f64 {
        self.k_e * self.k_ch
    }
}

impl Default for KFactors {
    fn default() -> Self {
        Self::UNIT
    }
}

fn check_factor(name: &'static str, value: f64) -> ColorResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ColorError::InvalidFactor { name, value })
    }
}
