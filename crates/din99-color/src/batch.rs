//! Batch DIN99 transforms.
//!
//! Every entry point validates the whole batch (factors, shape, lightness
//! domain) before transforming anything, then maps the triples
//! independently. Large batches run on the rayon pool; the result is the
//! same as calling [`lab_to_din99`](crate::lab_to_din99) per triple.
//!
//! # Input forms
//!
//! | Form | Forward | Inverse |
//! |------|---------|---------|
//! | `&[[f64; 3]]` | [`lab_to_din99_slice`] | [`din99_to_lab_slice`] |
//! | flat `&[f64]` | [`lab_to_din99_flat`] | [`din99_to_lab_flat`] |
//! | [`TripleArray`] | [`lab_to_din99_array`] | [`din99_to_lab_array`] |
//! | `&mut [[f64; 3]]` | [`lab_to_din99_inplace`] | [`din99_to_lab_inplace`] |
//!
//! # Example
//!
//! ```rust
//! use din99_color::{lab_to_din99_array, din99_to_lab_array, KFactors};
//! use din99_core::TripleArray;
//!
//! let lab = TripleArray::from_shape_vec(&[1, 2, 3], vec![
//!     50.0, 10.0, -10.0,
//!     75.0, 0.0, 0.0,
//! ]).unwrap();
//! let din99 = lab_to_din99_array(&lab, KFactors::default()).unwrap();
//! assert_eq!(din99.shape(), vec![1, 2, 3]);
//!
//! let back = din99_to_lab_array(&din99, KFactors::default()).unwrap();
//! assert!((back.get(&[0, 1]).unwrap()[0] - 75.0).abs() < 1e-9);
//! ```

use din99_core::batch::{
    for_each_triple_mut, map_triples, position_first, runs_parallel, triples_from_flat,
};
use din99_core::{Triple, TripleArray};
use tracing::{debug, trace};

use crate::din99::{LIGHTNESS_CURVE, check_lightness, forward, inverse};
use crate::{ColorResult, KFactors};

/// Converts a slice of Lab triples to DIN99.
///
/// # Errors
///
/// - [`ColorError::InvalidFactor`](crate::ColorError::InvalidFactor) for bad `k`.
/// - [`ColorError::Domain`](crate::ColorError::Domain) naming the first
///   out-of-domain triple.
pub fn lab_to_din99_slice(lab: &[Triple], k: KFactors) -> ColorResult<Vec<Triple>> {
    prepare_forward(lab, k)?;
    Ok(map_triples(lab, |t| forward(t, k)))
}

/// Converts a slice of DIN99 triples to Lab.
///
/// # Errors
///
/// [`ColorError::InvalidFactor`](crate::ColorError::InvalidFactor) for bad `k`.
pub fn din99_to_lab_slice(din99: &[Triple], k: KFactors) -> ColorResult<Vec<Triple>> {
    prepare_inverse(din99, k)?;
    Ok(map_triples(din99, |t| inverse(t, k)))
}

/// Converts flat `[L, a, b, L, a, b, ...]` values to DIN99.
///
/// # Errors
///
/// As [`lab_to_din99_slice`], plus
/// [`ColorError::Array`](crate::ColorError::Array) if the length is not a
/// multiple of 3.
///
/// ```rust
/// use din99_color::{lab_to_din99_flat, ColorError, KFactors};
///
/// let err = lab_to_din99_flat(&[50.0, 0.0, 0.0, 1.0], KFactors::default()).unwrap_err();
/// assert!(matches!(err, ColorError::Array(_)));
/// ```
pub fn lab_to_din99_flat(lab: &[f64], k: KFactors) -> ColorResult<Vec<f64>> {
    let triples = split_flat(lab)?;
    Ok(lab_to_din99_slice(&triples, k)?.into_flattened())
}

/// Converts flat `[L99, a99, b99, ...]` values to Lab.
pub fn din99_to_lab_flat(din99: &[f64], k: KFactors) -> ColorResult<Vec<f64>> {
    let triples = split_flat(din99)?;
    Ok(din99_to_lab_slice(&triples, k)?.into_flattened())
}

/// Converts a Lab array to DIN99, keeping its shape.
pub fn lab_to_din99_array(lab: &TripleArray, k: KFactors) -> ColorResult<TripleArray> {
    prepare_forward(lab.triples(), k)?;
    Ok(lab.map(|t| forward(t, k)))
}

/// Converts a DIN99 array to Lab, keeping its shape.
pub fn din99_to_lab_array(din99: &TripleArray, k: KFactors) -> ColorResult<TripleArray> {
    prepare_inverse(din99.triples(), k)?;
    Ok(din99.map(|t| inverse(t, k)))
}

/// Converts Lab triples to DIN99 in place.
///
/// On error the buffer is left untouched.
pub fn lab_to_din99_inplace(data: &mut [Triple], k: KFactors) -> ColorResult<()> {
    prepare_forward(data, k)?;
    for_each_triple_mut(data, |t| *t = forward(*t, k));
    Ok(())
}

/// Converts DIN99 triples to Lab in place.
///
/// On error the buffer is left untouched.
pub fn din99_to_lab_inplace(data: &mut [Triple], k: KFactors) -> ColorResult<()> {
    prepare_inverse(data, k)?;
    for_each_triple_mut(data, |t| *t = inverse(*t, k));
    Ok(())
}

fn prepare_forward(lab: &[Triple], k: KFactors) -> ColorResult<()> {
    k.validate()?;
    if let Some(index) = position_first(lab, |t| !LIGHTNESS_CURVE.is_in_domain(t[0])) {
        check_lightness(lab[index][0], index)?;
    }
    log_dispatch("lab_to_din99", lab.len(), k);
    Ok(())
}

fn prepare_inverse(din99: &[Triple], k: KFactors) -> ColorResult<()> {
    k.validate()?;
    log_dispatch("din99_to_lab", din99.len(), k);
    Ok(())
}

fn log_dispatch(op: &'static str, count: usize, k: KFactors) {
    let parallel = runs_parallel(count);
    trace!(op, count, k_e = k.k_e, k_ch = k.k_ch, parallel, "batch transform");
    if parallel {
        debug!(op, count, "dispatching batch to rayon pool");
    }
}

fn split_flat(values: &[f64]) -> ColorResult<Vec<Triple>> {
    triples_from_flat(values)
        .ok_or_else(|| din99_core::Error::flat_length(values.len()).into())
}
