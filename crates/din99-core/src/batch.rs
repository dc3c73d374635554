//! Elementwise operations over slices of colour triples.
//!
//! Every helper here treats its input as independent triples: the output at
//! index `i` depends only on the input at index `i`. That makes it safe to
//! split a batch across threads without any coordination.
//!
//! # Parallelism
//!
//! With the `rayon` feature (enabled by default), batches holding at least
//! [`PARALLEL_THRESHOLD`] triples run on the global rayon pool. Smaller
//! batches stay on the calling thread, where the pool overhead would
//! dominate. Both paths produce identical results.
//!
//! # Example
//!
//! ```rust
//! use din99_core::batch::map_triples;
//!
//! let input = vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
//! let doubled = map_triples(&input, |[x, y, z]| [x * 2.0, y * 2.0, z * 2.0]);
//! assert_eq!(doubled[1], [8.0, 10.0, 12.0]);
//! ```

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A single colour triple: `[L, a, b]` or `[L99, a99, b99]`.
pub type Triple = [f64; 3];

/// Minimum batch length dispatched to the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Returns true if a batch of `len` triples would run in parallel.
#[inline]
pub fn runs_parallel(len: usize) -> bool {
    cfg!(feature = "rayon") && len >= PARALLEL_THRESHOLD
}

/// Maps every triple of `input` through `f`, preserving order.
pub fn map_triples<F>(input: &[Triple], f: F) -> Vec<Triple>
where
    F: Fn(Triple) -> Triple + Sync + Send,
{
    #[cfg(feature = "rayon")]
    {
        if runs_parallel(input.len()) {
            return input.par_iter().map(|&t| f(t)).collect();
        }
    }
    input.iter().map(|&t| f(t)).collect()
}

/// Applies `f` to every triple of `data` in place.
pub fn for_each_triple_mut<F>(data: &mut [Triple], f: F)
where
    F: Fn(&mut Triple) + Sync + Send,
{
    #[cfg(feature = "rayon")]
    {
        if runs_parallel(data.len()) {
            data.par_iter_mut().for_each(f);
            return;
        }
    }
    data.iter_mut().for_each(f);
}

/// Returns the index of the first triple matching `pred`.
///
/// "First" is by position, also when the search runs in parallel, so error
/// reports built on it are deterministic.
pub fn position_first<P>(input: &[Triple], pred: P) -> Option<usize>
where
    P: Fn(&Triple) -> bool + Sync + Send,
{
    #[cfg(feature = "rayon")]
    {
        if runs_parallel(input.len()) {
            return input.par_iter().position_first(pred);
        }
    }
    input.iter().position(pred)
}

/// Splits a flat `[x0, y0, z0, x1, ...]` buffer into triples.
///
/// Returns `None` if the length is not a multiple of 3.
pub fn triples_from_flat(values: &[f64]) -> Option<Vec<Triple>> {
    if values.len() % 3 != 0 {
        return None;
    }
    Some(
        values
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect(),
    )
}
