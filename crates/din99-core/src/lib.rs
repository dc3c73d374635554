//! # din99-core
//!
//! Core types for DIN99 colour processing.
//!
//! This crate provides the containers and error types shared by the rest of
//! the workspace:
//!
//! - [`TripleArray`] - N-dimensional array whose last axis is a colour triple
//! - [`batch`] - Order-preserving elementwise maps over triple slices
//! - [`Error`] - Shape and channel errors
//!
//! ## Crate Structure
//!
//! ```text
//! din99-core (this crate)
//!    ^
//!    |
//!    +-- din99-color (DIN99 transforms)
//!    +-- din99-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` - Run large batches on the rayon pool (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod array;
pub mod batch;
pub mod error;

pub use array::TripleArray;
pub use batch::{PARALLEL_THRESHOLD, Triple};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::array::TripleArray;
    pub use crate::batch::Triple;
    pub use crate::error::{Error, Result};
}
