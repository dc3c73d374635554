//! N-dimensional arrays of colour triples.
//!
//! [`TripleArray`] is the container the colour transforms consume and
//! produce. The trailing axis is always the 3-channel colour axis; every
//! leading axis is a batch dimension that transforms pass through unchanged.
//!
//! # Memory Layout
//!
//! Triples are stored contiguously in **row-major** order of the batch axes:
//!
//! ```text
//! shape [2, 2, 3]
//! Memory: [L a b] [L a b]   <- row 0
//!         [L a b] [L a b]   <- row 1
//! ```
//!
//! # Usage
//!
//! ```rust
//! use din99_core::TripleArray;
//!
//! let flat = vec![0.0; 2 * 4 * 3];
//! let arr = TripleArray::from_shape_vec(&[2, 4, 3], flat).unwrap();
//! assert_eq!(arr.shape(), vec![2, 4, 3]);
//! assert_eq!(arr.len(), 8);
//! ```
//!
//! # Dependencies
//!
//! - [`crate::batch`] - Elementwise mapping (parallel with `rayon`)
//! - [`crate::error::Error`] - Shape errors

use crate::batch::{self, Triple};
use crate::{Error, Result};

/// Owned array of colour triples with an arbitrary batch shape.
///
/// A batch shape of `[]` describes a single triple (full shape `[3]`),
/// `[n]` a list of triples, `[h, w]` an image plane, and so on.
///
/// # Example
///
/// ```rust
/// use din99_core::TripleArray;
///
/// let arr = TripleArray::from_triples(vec![[50.0, 10.0, -10.0], [75.0, 0.0, 0.0]]);
/// assert_eq!(arr.batch_shape(), &[2]);
/// assert_eq!(arr.get(&[1]), Some([75.0, 0.0, 0.0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TripleArray {
    /// Leading (batch) axes
    batch_shape: Vec<usize>,
    /// Triples in row-major order of `batch_shape`
    data: Vec<Triple>,
}

impl TripleArray {
    /// Creates a zero-filled array with the given batch shape.
    ///
    /// ```rust
    /// use din99_core::TripleArray;
    ///
    /// let arr = TripleArray::zeros(&[4, 5]);
    /// assert_eq!(arr.shape(), vec![4, 5, 3]);
    /// ```
    pub fn zeros(batch_shape: &[usize]) -> Self {
        let count = batch_shape.iter().product();
        Self {
            batch_shape: batch_shape.to_vec(),
            data: vec![[0.0; 3]; count],
        }
    }

    /// Creates an array holding a single triple (shape `[3]`).
    pub fn from_triple(triple: Triple) -> Self {
        Self {
            batch_shape: Vec::new(),
            data: vec![triple],
        }
    }

    /// Creates a one-dimensional batch (shape `[n, 3]`).
    pub fn from_triples(triples: Vec<Triple>) -> Self {
        Self {
            batch_shape: vec![triples.len()],
            data: triples,
        }
    }

    /// Creates an array from a full shape and flat values.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidShape`] if `shape` is empty or its product differs
    ///   from `values.len()`.
    /// - [`Error::ShapeMismatch`] if the last axis is not 3.
    ///
    /// ```rust
    /// use din99_core::{Error, TripleArray};
    ///
    /// let err = TripleArray::from_shape_vec(&[2, 4], vec![0.0; 8]).unwrap_err();
    /// assert!(matches!(err, Error::ShapeMismatch { expected: 3, got: 4 }));
    /// ```
    pub fn from_shape_vec(shape: &[usize], values: Vec<f64>) -> Result<Self> {
        let Some((&channels, batch_shape)) = shape.split_last() else {
            return Err(Error::invalid_shape(shape, "shape has no axes"));
        };
        if channels != 3 {
            return Err(Error::shape_mismatch(3, channels));
        }
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(Error::invalid_shape(
                shape,
                format!("expected {} values, got {}", expected, values.len()),
            ));
        }
        let data = batch::triples_from_flat(&values)
            .ok_or_else(|| Error::flat_length(values.len()))?;
        Ok(Self {
            batch_shape: batch_shape.to_vec(),
            data,
        })
    }

    /// Returns the array with a new batch shape over the same triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if the new batch shape holds a
    /// different number of triples.
    pub fn reshape(self, batch_shape: &[usize]) -> Result<Self> {
        let count: usize = batch_shape.iter().product();
        if count != self.data.len() {
            return Err(Error::invalid_shape(
                batch_shape,
                format!("holds {} triples, array has {}", count, self.data.len()),
            ));
        }
        Ok(Self {
            batch_shape: batch_shape.to_vec(),
            data: self.data,
        })
    }

    /// Full shape, including the trailing channel axis.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = self.batch_shape.clone();
        shape.push(3);
        shape
    }

    /// Leading (batch) axes only.
    #[inline]
    pub fn batch_shape(&self) -> &[usize] {
        &self.batch_shape
    }

    /// Number of triples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the array holds no triples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Triples in row-major order.
    #[inline]
    pub fn triples(&self) -> &[Triple] {
        &self.data
    }

    /// Mutable access to the triples.
    #[inline]
    pub fn triples_mut(&mut self) -> &mut [Triple] {
        &mut self.data
    }

    /// Flat view `[x0, y0, z0, x1, ...]`.
    #[inline]
    pub fn as_flat(&self) -> &[f64] {
        self.data.as_flattened()
    }

    /// Consumes the array, returning its triples.
    pub fn into_triples(self) -> Vec<Triple> {
        self.data
    }

    /// Consumes the array, returning flat values.
    pub fn into_flat(self) -> Vec<f64> {
        self.data.into_iter().flatten().collect()
    }

    /// Returns the triple at a batch index, or `None` if out of bounds.
    ///
    /// `index` must have one entry per batch axis.
    pub fn get(&self, index: &[usize]) -> Option<Triple> {
        self.offset(index).map(|i| self.data[i])
    }

    /// Row-major offset of a batch index.
    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.batch_shape.len() {
            return None;
        }
        let mut offset = 0usize;
        for (&i, &dim) in index.iter().zip(&self.batch_shape) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }
        Some(offset)
    }

    /// Maps every triple through `f`, keeping the batch shape.
    ///
    /// ```rust
    /// use din99_core::TripleArray;
    ///
    /// let arr = TripleArray::from_triples(vec![[1.0, 2.0, 3.0]]);
    /// let neg = arr.map(|[x, y, z]| [-x, -y, -z]);
    /// assert_eq!(neg.triples()[0], [-1.0, -2.0, -3.0]);
    /// ```
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Triple) -> Triple + Sync + Send,
    {
        Self {
            batch_shape: self.batch_shape.clone(),
            data: batch::map_triples(&self.data, f),
        }
    }

    /// Maps every triple through `f` in place.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: Fn(&mut Triple) + Sync + Send,
    {
        batch::for_each_triple_mut(&mut self.data, f);
    }
}

impl From<Vec<Triple>> for TripleArray {
    fn from(triples: Vec<Triple>) -> Self {
        Self::from_triples(triples)
    }
}
