//! Logarithmic compression curve.
//!
//! [`LogCurve`] is the shape DIN99 uses for both lightness and chroma:
//!
//! ```text
//! compress(x) = gain * ln(1 + slope * x)
//! expand(y)   = (exp(y / gain) - 1) / slope
//! ```
//!
//! `expand` is the exact inverse of `compress` wherever `1 + slope * x > 0`.
//! Outside that domain `compress` returns NaN (or -inf at the boundary);
//! callers that need a hard error check [`LogCurve::is_in_domain`] first.
//!
//! # Usage
//!
//! ```rust
//! use din99_math::LogCurve;
//!
//! let curve = LogCurve::new(0.0158, 105.509);
//! let y = curve.compress(50.0);
//! assert!((curve.expand(y) - 50.0).abs() < 1e-9);
//! ```

/// `x -> gain * ln(1 + slope * x)` and its inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogCurve {
    /// Input scale inside the logarithm
    pub slope: f64,
    /// Output scale
    pub gain: f64,
}

impl LogCurve {
    /// Creates a curve. Both `slope` and `gain` must be non-zero.
    #[inline]
    pub const fn new(slope: f64, gain: f64) -> Self {
        Self { slope, gain }
    }

    /// Returns true if `ln(1 + slope * x)` is defined.
    #[inline]
    pub fn is_in_domain(&self, x: f64) -> bool {
        1.0 + self.slope * x > 0.0
    }

    /// `gain * ln(1 + slope * x)`.
    #[inline]
    pub fn compress(&self, x: f64) -> f64 {
        self.gain * (self.slope * x).ln_1p()
    }

    /// `(exp(y / gain) - 1) / slope`.
    #[inline]
    pub fn expand(&self, y: f64) -> f64 {
        (y / self.gain).exp_m1() / self.slope
    }
}
