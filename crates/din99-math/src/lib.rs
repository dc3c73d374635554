//! # din99-math
//!
//! Numeric building blocks for the DIN99 colour space.
//!
//! - [`Polar`] - Magnitude/angle split of a chroma vector
//! - [`ChromaFrame`] - Rotation plus anisotropic scale of the (a, b) plane
//! - [`LogCurve`] - `gain * ln(1 + slope * x)` and its exact inverse
//!
//! The forward and inverse DIN99 transforms are written entirely in terms of
//! these three types, so a change to a constant reaches both directions.
//!
//! # Design
//!
//! [`ChromaFrame`] wraps a [`glam::DMat2`]. Vectors are column vectors:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - 2x2 matrix and vector types
//!
//! # Used By
//!
//! - `din99-color` - DIN99 transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod curve;
mod frame;
mod polar;

pub use curve::*;
pub use frame::*;
pub use polar::*;
