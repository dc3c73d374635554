//! DIN99 validation tests.
//!
//! Checks the transform pair against reference values and the algebraic
//! properties consumers rely on.
//!
//! # Reference Documents
//!
//! - DIN 6176: Colorimetric evaluation of colour differences with the DIN99 formula
//! - ASTM D2244-07: Calculation of Color Tolerances and Color Differences

use approx::assert_abs_diff_eq;
use din99_color::prelude::*;

// ============================================================================
// Reference Values
// ============================================================================
// DIN99 formula:
//   e   = cos16 * a + sin16 * b
//   f   = 0.7 * (-sin16 * a + cos16 * b)
//   C99 = ln(1 + 0.045 * hypot(e, f)) / (0.045 * k_CH * k_E)
//   L99 = 105.509 * ln(1 + 0.0158 * L) * k_E

/// (Lab, k_E, k_CH, DIN99)
const REFERENCE: &[([f64; 3], f64, f64, [f64; 3])] = &[
    (
        [37.98562910, -23.62907688, -4.41746615],
        1.0,
        1.0,
        [49.60101649, -16.23145729, 1.07618123],
    ),
    (
        [37.98562910, -23.62907688, -4.41746615],
        2.0,
        0.5,
        [99.20203298, -16.23145730, 1.07618123],
    ),
    (
        [37.98562910, -23.62907688, -4.41746615],
        1.5,
        2.0,
        [74.40152474, -5.41048577, 0.35872708],
    ),
    (
        [65.70971934, 44.46103281, 21.19211483],
        1.0,
        1.0,
        [75.13018623, 25.67972863, 3.00313782],
    ),
    (
        [100.0, 20.0, -30.0],
        1.0,
        1.0,
        [100.00031169, 7.21896584, -15.84348862],
    ),
    (
        [50.0, 0.0, 0.0],
        1.5,
        2.0,
        [92.14348175, 0.0, 0.0],
    ),
];

fn factors(k_e: f64, k_ch: f64) -> KFactors {
    KFactors::new(k_e, k_ch).expect("reference factors are valid")
}

// ============================================================================
// Transform Pair
// ============================================================================

#[test]
fn test_forward_reference_values() {
    for &(lab, k_e, k_ch, expected) in REFERENCE {
        let got = lab_to_din99(lab, factors(k_e, k_ch)).unwrap();
        for c in 0..3 {
            assert!(
                (got[c] - expected[c]).abs() < 1e-7,
                "Lab_to_DIN99({:?}, k_E={}, k_CH={})[{}] = {} (expected {})",
                lab,
                k_e,
                k_ch,
                c,
                got[c],
                expected[c]
            );
        }
    }
}

#[test]
fn test_inverse_reference_values() {
    for &(lab, k_e, k_ch, din99) in REFERENCE {
        let got = din99_to_lab(din99, factors(k_e, k_ch)).unwrap();
        for c in 0..3 {
            assert!(
                (got[c] - lab[c]).abs() < 1e-6,
                "DIN99_to_Lab({:?}, k_E={}, k_CH={})[{}] = {} (expected {})",
                din99,
                k_e,
                k_ch,
                c,
                got[c],
                lab[c]
            );
        }
    }
}

#[test]
fn test_roundtrip_dense() {
    let k = factors(1.25, 0.8);
    for li in 0..=10 {
        for ai in -8..=8 {
            for bi in -8..=8 {
                let lab = [li as f64 * 10.0, ai as f64 * 15.0, bi as f64 * 15.0];
                let back = din99_to_lab(lab_to_din99(lab, k).unwrap(), k).unwrap();
                for c in 0..3 {
                    assert_abs_diff_eq!(back[c], lab[c], epsilon = 1e-9);
                }
            }
        }
    }
}

// ============================================================================
// Batches
// ============================================================================

#[test]
fn test_batch_independence() {
    let k = KFactors::TEXTILES;
    let lab: Vec<Triple> = REFERENCE.iter().map(|r| r.0).collect();
    let batch = lab_to_din99_array(&TripleArray::from_triples(lab.clone()), k).unwrap();
    for (i, &t) in lab.iter().enumerate() {
        assert_eq!(batch.get(&[i]).unwrap(), lab_to_din99(t, k).unwrap());
    }
}

#[test]
fn test_image_shaped_batch() {
    let (h, w) = (64, 96);
    let mut values = Vec::with_capacity(h * w * 3);
    for y in 0..h {
        for x in 0..w {
            values.extend_from_slice(&[
                100.0 * y as f64 / (h - 1) as f64,
                x as f64 - 48.0,
                y as f64 - 32.0,
            ]);
        }
    }
    let lab = TripleArray::from_shape_vec(&[h, w, 3], values).unwrap();
    let k = KFactors::default();
    let din99 = lab_to_din99_array(&lab, k).unwrap();
    assert_eq!(din99.shape(), vec![h, w, 3]);

    let back = din99_to_lab_array(&din99, k).unwrap();
    for (a, b) in lab.as_flat().iter().zip(back.as_flat()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }
}

#[test]
fn test_shape_mismatch_at_boundary() {
    let err = TripleArray::from_shape_vec(&[4, 4], vec![0.0; 16]).unwrap_err();
    assert!(err.is_channel_error());

    let err = din99_color::lab_to_din99_flat(&[0.0; 4], KFactors::default()).unwrap_err();
    assert_eq!(err, ColorError::Array(din99_core::Error::flat_length(4)));
}

// ============================================================================
// Colour Difference
// ============================================================================

#[test]
fn test_delta_e_matches_distance() {
    let a = [50.0, 2.6772, -79.7751];
    let b = [50.0, 0.0, -82.7485];
    let k = KFactors::default();
    let da = Din99::from_array(lab_to_din99(a, k).unwrap());
    let db = Din99::from_array(lab_to_din99(b, k).unwrap());
    assert_abs_diff_eq!(delta_e_din99(a, b, false).unwrap(), da.distance(db), epsilon = 1e-12);
}
