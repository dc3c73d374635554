//! DIN99 colour space transforms.
//!
//! DIN99 is a logarithmic reshaping of CIE L\*a\*b\* in which Euclidean
//! distance tracks perceived colour difference much better than in Lab.
//! Chroma is compressed in a rotated, anisotropically scaled frame and
//! lightness is compressed separately.
//!
//! # Range
//!
//! - Input lightness: [0, 100] (L = 100 maps to L99 ~ 100)
//! - Lightness below -63.29 is outside the transform domain
//!
//! # Reference
//!
//! DIN 6176; ASTM D2244-07, Standard Practice for Calculation of Color
//! Tolerances and Color Differences from Instrumentally Measured Color
//! Coordinates.

use din99_core::Triple;
use din99_math::{DIN99_FRAME, LogCurve, Polar};

use crate::{ColorError, ColorResult, KFactors};

/// Lightness compression: `L99 = 105.509 * ln(1 + 0.0158 * L)`.
pub const LIGHTNESS_CURVE: LogCurve = LogCurve::new(0.0158, 105.509);

/// Chroma compression: `C99 = ln(1 + 0.045 * G) / 0.045`.
pub const CHROMA_CURVE: LogCurve = LogCurve::new(0.045, 1.0 / 0.045);

/// Converts CIE L\*a\*b\* to DIN99.
///
/// # Formula
///
/// ```text
/// e   = cos16 * a + sin16 * b
/// f   = 0.7 * (-sin16 * a + cos16 * b)
/// G   = sqrt(e^2 + f^2),  h_ef = atan2(f, e)
/// C99 = ln(1 + 0.045 * G) / (0.045 * k_CH * k_E)
/// a99 = C99 * cos(h_ef),  b99 = C99 * sin(h_ef)
/// L99 = 105.509 * ln(1 + 0.0158 * L) * k_E
/// ```
///
/// # Errors
///
/// - [`ColorError::InvalidFactor`] if `k` is not strictly positive.
/// - [`ColorError::Domain`] if `1 + 0.0158 * L <= 0` or L is NaN.
///
/// # Example
///
/// ```rust
/// use din99_color::{lab_to_din99, KFactors};
///
/// let din99 = lab_to_din99([37.98562910, -23.62907688, -4.41746615], KFactors::default()).unwrap();
/// assert!((din99[0] - 49.60101649).abs() < 1e-6);
/// assert!((din99[1] + 16.23145729).abs() < 1e-6);
/// assert!((din99[2] - 1.07618123).abs() < 1e-6);
/// ```
pub fn lab_to_din99(lab: Triple, k: KFactors) -> ColorResult<Triple> {
    k.validate()?;
    check_lightness(lab[0], 0)?;
    Ok(forward(lab, k))
}

/// Converts DIN99 to CIE L\*a\*b\*.
///
/// Exact inverse of [`lab_to_din99`] for the same `k`.
///
/// The lightness step divides by `k_E`. The published reference (and
/// colour-science's `DIN99_to_Lab`) multiplies by `k_E`, so results differ
/// from it whenever `k_E != 1`; with `k_E = 1` both agree.
///
/// # Formula
///
/// ```text
/// h99 = atan2(b99, a99),  C99 = sqrt(a99^2 + b99^2)
/// G   = (exp(0.045 * C99 * k_CH * k_E) - 1) / 0.045
/// e   = G * cos(h99),  f = G * sin(h99)
/// a   = e * cos16 - (f / 0.7) * sin16
/// b   = e * sin16 + (f / 0.7) * cos16
/// L   = (exp(L99 / (105.509 * k_E)) - 1) / 0.0158
/// ```
///
/// # Errors
///
/// [`ColorError::InvalidFactor`] if `k` is not strictly positive. The
/// exponential has no domain restriction; very large inputs overflow to
/// infinity.
///
/// # Example
///
/// ```rust
/// use din99_color::{din99_to_lab, KFactors};
///
/// let lab = din99_to_lab([49.60101649, -16.2314573, 1.07618123], KFactors::default()).unwrap();
/// assert!((lab[0] - 37.9856291).abs() < 1e-6);
/// assert!((lab[1] + 23.6290768).abs() < 1e-6);
/// assert!((lab[2] + 4.4174661).abs() < 1e-6);
/// ```
pub fn din99_to_lab(din99: Triple, k: KFactors) -> ColorResult<Triple> {
    k.validate()?;
    Ok(inverse(din99, k))
}

/// Forward kernel. Expects validated `k` and in-domain L.
#[inline]
pub(crate) fn forward(lab: Triple, k: KFactors) -> Triple {
    let [l, a, b] = lab;
    let ef = DIN99_FRAME.to_frame([a, b]);
    let [a99, b99] = Polar::from_cartesian(ef)
        .map_radius(|g| CHROMA_CURVE.compress(g) / k.chroma_scale())
        .to_cartesian();
    [LIGHTNESS_CURVE.compress(l) * k.k_e, a99, b99]
}

/// Inverse kernel. Expects validated `k`.
#[inline]
pub(crate) fn inverse(din99: Triple, k: KFactors) -> Triple {
    let [l99, a99, b99] = din99;
    let ef = Polar::from_cartesian([a99, b99])
        .map_radius(|c99| CHROMA_CURVE.expand(c99 * k.chroma_scale()))
        .to_cartesian();
    let [a, b] = DIN99_FRAME.from_frame(ef);
    [LIGHTNESS_CURVE.expand(l99 / k.k_e), a, b]
}

/// Rejects lightness values the logarithm cannot take.
#[inline]
pub(crate) fn check_lightness(l: f64, index: usize) -> ColorResult<()> {
    if LIGHTNESS_CURVE.is_in_domain(l) {
        Ok(())
    } else {
        Err(ColorError::Domain {
            channel: "L",
            value: l,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const LAB: Triple = [37.98562910, -23.62907688, -4.41746615];
    const DIN99: Triple = [49.60101649, -16.23145729, 1.07618123];

    fn assert_triple_eq(got: Triple, want: Triple, eps: f64) {
        for c in 0..3 {
            assert_abs_diff_eq!(got[c], want[c], epsilon = eps);
        }
    }

    #[test]
    fn test_reference_forward() {
        let got = lab_to_din99(LAB, KFactors::default()).unwrap();
        assert_triple_eq(got, DIN99, 1e-7);
    }

    #[test]
    fn test_reference_inverse() {
        let got = din99_to_lab(DIN99, KFactors::default()).unwrap();
        assert_triple_eq(got, LAB, 1e-6);
    }

    #[test]
    fn test_roundtrip_grid() {
        let factors = [
            KFactors::UNIT,
            KFactors::TEXTILES,
            KFactors { k_e: 1.5, k_ch: 2.0 },
            KFactors { k_e: 0.25, k_ch: 3.0 },
        ];
        for k in factors {
            for l in [0.0, 1.0, 18.0, 50.0, 99.0, 100.0] {
                for a in [-120.0, -23.6, 0.0, 0.5, 80.0] {
                    for b in [-110.0, -4.4, 0.0, 64.0] {
                        let lab = [l, a, b];
                        let back = din99_to_lab(lab_to_din99(lab, k).unwrap(), k).unwrap();
                        for c in 0..3 {
                            assert_relative_eq!(back[c], lab[c], epsilon = 1e-9, max_relative = 1e-9);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_achromatic_fixed_point() {
        for k in [KFactors::UNIT, KFactors::TEXTILES] {
            for l in [0.0, 25.0, 50.0, 100.0] {
                let [l99, a99, b99] = lab_to_din99([l, 0.0, 0.0], k).unwrap();
                assert!(l99 >= 0.0);
                assert_eq!(a99, 0.0);
                assert_eq!(b99, 0.0);
            }
        }
    }

    #[test]
    fn test_zero_point() {
        let k = KFactors { k_e: 3.0, k_ch: 0.2 };
        assert_eq!(lab_to_din99([0.0; 3], k).unwrap(), [0.0; 3]);
        assert_eq!(din99_to_lab([0.0; 3], k).unwrap(), [0.0; 3]);
    }

    #[test]
    fn test_inverse_lightness_divides_by_k_e() {
        let k = KFactors { k_e: 2.0, k_ch: 0.5 };
        let [l, _, _] = din99_to_lab([99.20203298, 0.0, 0.0], k).unwrap();
        assert_abs_diff_eq!(l, 37.98562910, epsilon = 1e-6);

        // Unit factors agree with the multiplicative reference form
        let l99: f64 = 49.60101649;
        let reference = ((l99 * 1.0) / 105.509).exp_m1() / 0.0158;
        let [l, _, _] = din99_to_lab([l99, 0.0, 0.0], KFactors::UNIT).unwrap();
        assert_relative_eq!(l, reference, max_relative = 1e-12);
    }

    #[test]
    fn test_lightness_scales_with_k_e() {
        let base = lab_to_din99(LAB, KFactors::UNIT).unwrap()[0];
        for k_e in [0.5, 2.0, 3.7] {
            let k = KFactors { k_e, k_ch: 1.0 };
            let scaled = lab_to_din99(LAB, k).unwrap()[0];
            assert_relative_eq!(scaled, k_e * base, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_chroma_scales_inverse_with_factors() {
        let unit = lab_to_din99(LAB, KFactors::UNIT).unwrap();
        let k = KFactors { k_e: 1.5, k_ch: 2.0 };
        let scaled = lab_to_din99(LAB, k).unwrap();
        assert_relative_eq!(scaled[1], unit[1] / 3.0, max_relative = 1e-12);
        assert_relative_eq!(scaled[2], unit[2] / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_white_maps_near_100() {
        let [l99, _, _] = lab_to_din99([100.0, 0.0, 0.0], KFactors::UNIT).unwrap();
        assert_abs_diff_eq!(l99, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_domain_error() {
        let err = lab_to_din99([-100.0, 0.0, 0.0], KFactors::UNIT).unwrap_err();
        assert_eq!(
            err,
            ColorError::Domain {
                channel: "L",
                value: -100.0,
                index: 0
            }
        );
        assert!(lab_to_din99([f64::NAN, 0.0, 0.0], KFactors::UNIT).is_err());
        // Negative but in domain is allowed
        assert!(lab_to_din99([-10.0, 5.0, 5.0], KFactors::UNIT).is_ok());
    }

    #[test]
    fn test_invalid_factor() {
        let k = KFactors { k_e: 0.0, k_ch: 1.0 };
        assert!(matches!(lab_to_din99(LAB, k), Err(ColorError::InvalidFactor { .. })));
        assert!(matches!(din99_to_lab(DIN99, k), Err(ColorError::InvalidFactor { .. })));
    }

    #[test]
    fn test_nan_chroma_propagates() {
        let out = lab_to_din99([50.0, f64::NAN, 0.0], KFactors::UNIT).unwrap();
        assert!(out[1].is_nan());
        assert!(out[0].is_finite());
    }
}
