//! Typed colour values and conversion helpers.
//!
//! # Types
//!
//! - [`Lab`] - CIE L\*a\*b\* triple
//! - [`Din99`] - DIN99 triple with chroma/hue accessors
//! - [`Din99Convert`] - Chainable conversions on plain `[f64; 3]`
//! - [`Conversion`] - A transform direction selectable by name
//!
//! # Example
//!
//! ```rust
//! use din99_color::{Conversion, Din99Convert, KFactors, Lab};
//!
//! let k = KFactors::default();
//! let din99 = Lab::new(37.98562910, -23.62907688, -4.41746615).to_din99(k).unwrap();
//! assert!((din99.l - 49.60101649).abs() < 1e-6);
//!
//! let back = [50.0_f64, 10.0, -10.0].to_din99(k).and_then(|t| t.to_lab(k)).unwrap();
//! assert!((back[1] - 10.0).abs() < 1e-9);
//!
//! let conv: Conversion = "DIN99_to_Lab".parse().unwrap();
//! assert_eq!(conv.inverse(), Conversion::LabToDin99);
//! ```

use std::fmt;
use std::str::FromStr;

use din99_core::{Triple, TripleArray};
use din99_math::Polar;

use crate::{
    ColorError, ColorResult, KFactors, din99_to_lab, din99_to_lab_array, din99_to_lab_slice,
    lab_to_din99, lab_to_din99_array, lab_to_din99_slice,
};

/// CIE L\*a\*b\* colour coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Creates a Lab colour.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Creates Lab from an array.
    #[inline]
    pub const fn from_array(arr: Triple) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> Triple {
        [self.l, self.a, self.b]
    }

    /// Converts to DIN99.
    pub fn to_din99(self, k: KFactors) -> ColorResult<Din99> {
        lab_to_din99(self.to_array(), k).map(Din99::from_array)
    }
}

/// DIN99 colour coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Din99 {
    /// Lightness L99
    pub l: f64,
    /// Opponent axis a99
    pub a: f64,
    /// Opponent axis b99
    pub b: f64,
}

impl Din99 {
    /// Creates a DIN99 colour.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Creates DIN99 from an array.
    #[inline]
    pub const fn from_array(arr: Triple) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> Triple {
        [self.l, self.a, self.b]
    }

    /// Chroma C99.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.polar().radius
    }

    /// Hue angle h99 in degrees, in [0, 360). Zero for achromatic colours.
    ///
    /// The hue is the angle of (a99, b99), which is also the hue in the
    /// rotated DIN99 chroma frame.
    #[inline]
    pub fn hue(self) -> f64 {
        self.polar().angle_degrees()
    }

    /// Chroma and hue (radians) as a polar pair.
    #[inline]
    pub fn polar(self) -> Polar {
        Polar::from_cartesian([self.a, self.b])
    }

    /// Euclidean distance to another DIN99 colour.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Converts to Lab.
    pub fn to_lab(self, k: KFactors) -> ColorResult<Lab> {
        din99_to_lab(self.to_array(), k).map(Lab::from_array)
    }
}

impl From<Triple> for Lab {
    fn from(arr: Triple) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for Triple {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}

impl From<Triple> for Din99 {
    fn from(arr: Triple) -> Self {
        Self::from_array(arr)
    }
}

impl From<Din99> for Triple {
    fn from(din99: Din99) -> Self {
        din99.to_array()
    }
}

/// DIN99 conversions on plain triples.
///
/// # Example
///
/// ```rust
/// use din99_color::{Din99Convert, KFactors};
///
/// let din99 = [0.0_f64, 0.0, 0.0].to_din99(KFactors::default()).unwrap();
/// assert_eq!(din99, [0.0, 0.0, 0.0]);
/// ```
pub trait Din99Convert: Sized {
    /// Treats `self` as Lab and converts to DIN99.
    fn to_din99(self, k: KFactors) -> ColorResult<Self>;

    /// Treats `self` as DIN99 and converts to Lab.
    fn to_lab(self, k: KFactors) -> ColorResult<Self>;
}

impl Din99Convert for Triple {
    fn to_din99(self, k: KFactors) -> ColorResult<Self> {
        lab_to_din99(self, k)
    }

    fn to_lab(self, k: KFactors) -> ColorResult<Self> {
        din99_to_lab(self, k)
    }
}

/// Direction of a DIN99 transform.
///
/// Parses from the registry names `Lab_to_DIN99` / `DIN99_to_Lab` and the
/// kebab-case forms `lab-to-din99` / `din99-to-lab`, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Conversion {
    /// CIE L\*a\*b\* to DIN99.
    LabToDin99,
    /// DIN99 to CIE L\*a\*b\*.
    Din99ToLab,
}

impl Conversion {
    /// All conversions.
    pub const ALL: [Conversion; 2] = [Conversion::LabToDin99, Conversion::Din99ToLab];

    /// Registry name of the conversion.
    pub fn name(self) -> &'static str {
        match self {
            Self::LabToDin99 => "Lab_to_DIN99",
            Self::Din99ToLab => "DIN99_to_Lab",
        }
    }

    /// The opposite direction.
    pub fn inverse(self) -> Self {
        match self {
            Self::LabToDin99 => Self::Din99ToLab,
            Self::Din99ToLab => Self::LabToDin99,
        }
    }

    /// Converts one triple.
    pub fn apply(self, triple: Triple, k: KFactors) -> ColorResult<Triple> {
        match self {
            Self::LabToDin99 => lab_to_din99(triple, k),
            Self::Din99ToLab => din99_to_lab(triple, k),
        }
    }

    /// Converts a slice of triples.
    pub fn apply_slice(self, triples: &[Triple], k: KFactors) -> ColorResult<Vec<Triple>> {
        match self {
            Self::LabToDin99 => lab_to_din99_slice(triples, k),
            Self::Din99ToLab => din99_to_lab_slice(triples, k),
        }
    }

    /// Converts an array, keeping its shape.
    pub fn apply_array(self, array: &TripleArray, k: KFactors) -> ColorResult<TripleArray> {
        match self {
            Self::LabToDin99 => lab_to_din99_array(array, k),
            Self::Din99ToLab => din99_to_lab_array(array, k),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Conversion {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "lab_to_din99" => Ok(Self::LabToDin99),
            "din99_to_lab" => Ok(Self::Din99ToLab),
            _ => Err(ColorError::UnknownConversion(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_typed_roundtrip() {
        let k = KFactors::TEXTILES;
        let lab = Lab::new(65.70971934, 44.46103281, 21.19211483);
        let back = lab.to_din99(k).unwrap().to_lab(k).unwrap();
        assert_abs_diff_eq!(back.l, lab.l, epsilon = 1e-9);
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 1e-9);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_second_sample() {
        let din99 = Lab::new(65.70971934, 44.46103281, 21.19211483)
            .to_din99(KFactors::default())
            .unwrap();
        assert_abs_diff_eq!(din99.l, 75.13018623, epsilon = 1e-6);
        assert_abs_diff_eq!(din99.a, 25.67972863, epsilon = 1e-6);
        assert_abs_diff_eq!(din99.b, 3.00313782, epsilon = 1e-6);
    }

    #[test]
    fn test_hue_and_chroma() {
        let d = Din99::new(50.0, 0.0, 10.0);
        assert_abs_diff_eq!(d.chroma(), 10.0);
        assert_abs_diff_eq!(d.hue(), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Din99::new(50.0, 0.0, -10.0).hue(), 270.0, epsilon = 1e-12);
        assert_eq!(Din99::new(50.0, 0.0, 0.0).hue(), 0.0);
    }

    #[test]
    fn test_distance() {
        let a = Din99::new(0.0, 0.0, 0.0);
        let b = Din99::new(2.0, 3.0, 6.0);
        assert_eq!(a.distance(b), 7.0);
    }

    #[test]
    fn test_array_conversions() {
        let lab: Lab = [1.0, 2.0, 3.0].into();
        let back: Triple = lab.into();
        assert_eq!(back, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_conversion_parse() {
        for name in ["Lab_to_DIN99", "lab-to-din99", " LAB_TO_DIN99 "] {
            assert_eq!(name.parse::<Conversion>().unwrap(), Conversion::LabToDin99);
        }
        for name in ["DIN99_to_Lab", "din99-to-lab"] {
            assert_eq!(name.parse::<Conversion>().unwrap(), Conversion::Din99ToLab);
        }
        assert!(matches!(
            "XYZ_to_Lab".parse::<Conversion>(),
            Err(ColorError::UnknownConversion(_))
        ));
    }

    #[test]
    fn test_conversion_name_roundtrip() {
        for conv in Conversion::ALL {
            assert_eq!(conv.to_string().parse::<Conversion>().unwrap(), conv);
            assert_eq!(conv.inverse().inverse(), conv);
        }
    }

    #[test]
    fn test_conversion_apply_matches_inverse() {
        let k = KFactors::default();
        let lab = [42.0, -12.0, 30.0];
        let fwd = Conversion::LabToDin99.apply(lab, k).unwrap();
        let back = Conversion::LabToDin99.inverse().apply(fwd, k).unwrap();
        for c in 0..3 {
            assert_abs_diff_eq!(back[c], lab[c], epsilon = 1e-9);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let lab = Lab::new(50.0, -1.5, 2.25);
        let json = serde_json::to_string(&lab).unwrap();
        assert_eq!(json, r#"{"l":50.0,"a":-1.5,"b":2.25}"#);
        let parsed: Lab = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lab);

        let k: KFactors = serde_json::from_str(r#"{"k_e":2.0,"k_ch":0.5}"#).unwrap();
        assert_eq!(k, KFactors::TEXTILES);
    }
}
