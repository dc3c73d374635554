//! Polar decomposition of a 2D chroma vector.
//!
//! [`Polar`] splits an opponent-axis pair (a, b) into a magnitude and a hue
//! angle and puts it back together. The DIN99 transforms compress only the
//! magnitude, so both directions go through this type.
//!
//! # Usage
//!
//! ```rust
//! use din99_math::Polar;
//!
//! let p = Polar::from_cartesian([3.0, 4.0]);
//! assert_eq!(p.radius, 5.0);
//! let [x, y] = p.to_cartesian();
//! assert!((x - 3.0).abs() < 1e-12 && (y - 4.0).abs() < 1e-12);
//! ```

/// A 2D vector in polar form.
///
/// `angle` is in radians, in (-pi, pi], as returned by [`f64::atan2`].
/// The zero vector has `angle == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    /// Magnitude (chroma)
    pub radius: f64,
    /// Angle in radians (hue)
    pub angle: f64,
}

impl Polar {
    /// Creates a polar vector.
    #[inline]
    pub const fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }

    /// Splits `[x, y]` into magnitude and angle.
    #[inline]
    pub fn from_cartesian([x, y]: [f64; 2]) -> Self {
        Self {
            radius: x.hypot(y),
            angle: y.atan2(x),
        }
    }

    /// Recomposes `[x, y]`.
    #[inline]
    pub fn to_cartesian(self) -> [f64; 2] {
        let (sin, cos) = self.angle.sin_cos();
        [self.radius * cos, self.radius * sin]
    }

    /// Same angle, new magnitude.
    #[inline]
    pub fn with_radius(self, radius: f64) -> Self {
        Self { radius, ..self }
    }

    /// Maps the magnitude through `f`, keeping the angle.
    #[inline]
    pub fn map_radius(self, f: impl FnOnce(f64) -> f64) -> Self {
        self.with_radius(f(self.radius))
    }

    /// Angle in degrees, wrapped to [0, 360).
    pub fn angle_degrees(self) -> f64 {
        let deg = self.angle.to_degrees().rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if deg >= 360.0 { 0.0 } else { deg }
    }
}
