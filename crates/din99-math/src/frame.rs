//! Rotated and anisotropically scaled chroma frame.
//!
//! Lab chroma contours are not circles. DIN99 corrects for this by rotating
//! the (a, b) plane and shrinking the rotated b-axis before taking the polar
//! form:
//!
//! ```text
//! | e |   | 1   0  |   |  cos  sin |   | a |
//! |   | = |        | * |           | * |   |
//! | f |   | 0  0.7 |   | -sin  cos |   | b |
//! ```
//!
//! The inverse divides by the scale and applies the transposed rotation.
//! Both directions read the same cosine and sine, stored once in
//! [`DIN99_FRAME`].
//!
//! # Usage
//!
//! ```rust
//! use din99_math::DIN99_FRAME;
//!
//! let ef = DIN99_FRAME.to_frame([-23.6, -4.4]);
//! let ab = DIN99_FRAME.from_frame(ef);
//! assert!((ab[0] + 23.6).abs() < 1e-12);
//! ```

use glam::{DMat2, DVec2};
use std::sync::LazyLock;

/// Rotation of the DIN99 chroma frame, in degrees.
pub const DIN99_ROTATION_DEG: f64 = 16.0;

/// Scale applied to the rotated b-axis.
pub const DIN99_B_SCALE: f64 = 0.7;

/// The DIN99 chroma frame (16 degrees, 0.7).
///
/// Built on first use and shared by the forward and inverse transforms.
pub static DIN99_FRAME: LazyLock<ChromaFrame> =
    LazyLock::new(|| ChromaFrame::new(DIN99_ROTATION_DEG, DIN99_B_SCALE));

/// A rotation of the chroma plane followed by a scale of the second axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaFrame {
    /// Rotation by `-angle` (maps (a, b) onto the frame axes)
    rotation: DMat2,
    /// Scale of the second frame axis, never zero
    scale: f64,
}

impl ChromaFrame {
    /// Creates a frame rotated by `angle_deg` with the second axis scaled.
    ///
    /// `scale` must be non-zero.
    pub fn new(angle_deg: f64, scale: f64) -> Self {
        debug_assert!(scale != 0.0, "chroma frame scale must be non-zero");
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Self {
            rotation: DMat2::from_cols(DVec2::new(cos, -sin), DVec2::new(sin, cos)),
            scale,
        }
    }

    /// Cosine of the frame angle.
    #[inline]
    pub fn cos(&self) -> f64 {
        self.rotation.x_axis.x
    }

    /// Sine of the frame angle.
    #[inline]
    pub fn sin(&self) -> f64 {
        self.rotation.y_axis.x
    }

    /// Second-axis scale.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps `[a, b]` into the frame, returning `[e, f]`.
    #[inline]
    pub fn to_frame(&self, [a, b]: [f64; 2]) -> [f64; 2] {
        let v = self.rotation * DVec2::new(a, b);
        [v.x, v.y * self.scale]
    }

    /// Maps `[e, f]` back out of the frame, returning `[a, b]`.
    #[inline]
    pub fn from_frame(&self, [e, f]: [f64; 2]) -> [f64; 2] {
        let v = self.rotation.transpose() * DVec2::new(e, f / self.scale);
        [v.x, v.y]
    }
}
