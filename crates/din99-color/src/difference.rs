//! DIN99 colour difference (Delta E 99).
//!
//! The colour difference of two Lab samples is the Euclidean distance of
//! their DIN99 images. For textiles the parametric factors switch to
//! [`KFactors::TEXTILES`].
//!
//! # Example
//!
//! ```rust
//! use din99_color::delta_e_din99;
//!
//! let a = [60.2574, -34.0099, 36.2677];
//! let b = [60.4626, -34.1751, 39.4387];
//! let de = delta_e_din99(a, b, false).unwrap();
//! assert!((de - 1.17721662).abs() < 1e-6);
//! ```

use din99_core::Triple;

use crate::{ColorError, ColorResult, Din99, KFactors, lab_to_din99, lab_to_din99_slice};

/// Factors used by the colour difference.
#[inline]
pub fn difference_factors(textiles: bool) -> KFactors {
    if textiles {
        KFactors::TEXTILES
    } else {
        KFactors::UNIT
    }
}

/// Colour difference of two Lab triples in DIN99.
///
/// # Errors
///
/// [`ColorError::Domain`] if either lightness is outside the transform
/// domain. The reported index is 0 for `lab1` and 1 for `lab2`.
pub fn delta_e_din99(lab1: Triple, lab2: Triple, textiles: bool) -> ColorResult<f64> {
    let k = difference_factors(textiles);
    let d1 = lab_to_din99(lab1, k)?;
    let d2 = lab_to_din99(lab2, k).map_err(|e| match e {
        ColorError::Domain { channel, value, .. } => ColorError::Domain {
            channel,
            value,
            index: 1,
        },
        other => other,
    })?;
    Ok(Din99::from_array(d1).distance(Din99::from_array(d2)))
}

/// Pairwise colour differences of two equally long batches.
///
/// # Errors
///
/// - [`ColorError::LengthMismatch`] if the batches differ in length.
/// - [`ColorError::Domain`] for the first out-of-domain lightness, checked
///   in `lab1` first.
pub fn delta_e_din99_slice(lab1: &[Triple], lab2: &[Triple], textiles: bool) -> ColorResult<Vec<f64>> {
    if lab1.len() != lab2.len() {
        return Err(ColorError::LengthMismatch {
            left: lab1.len(),
            right: lab2.len(),
        });
    }
    let k = difference_factors(textiles);
    let d1 = lab_to_din99_slice(lab1, k)?;
    let d2 = lab_to_din99_slice(lab2, k)?;
    Ok(d1
        .into_iter()
        .zip(d2)
        .map(|(p, q)| Din99::from_array(p).distance(Din99::from_array(q)))
        .collect())
}
