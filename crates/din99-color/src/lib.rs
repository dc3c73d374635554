//! # din99-color
//!
//! The DIN99 uniform colour space.
//!
//! DIN99 reshapes CIE L\*a\*b\* with logarithmic compressions of lightness
//! and chroma so that Euclidean distance approximates perceived colour
//! difference. This crate provides the transform pair and what is built on
//! it:
//!
//! - **Transforms** - [`lab_to_din99`] and its exact inverse [`din99_to_lab`]
//! - **Batches** - slices, flat buffers, shaped [`TripleArray`]s, in place
//! - **Typed values** - [`Lab`], [`Din99`], [`Din99Convert`]
//! - **Colour difference** - [`delta_e_din99`]
//! - **Lookup by name** - [`Conversion`]
//!
//! # Architecture
//!
//! ```text
//!          din99-color
//!              |
//!     +--------+--------+
//!     |                 |
//! din99-math       din99-core
//! (frame, polar,   (TripleArray,
//!  log curve)       batch maps)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use din99_color::{din99_to_lab, lab_to_din99, KFactors};
//!
//! let k = KFactors::default();
//! let lab = [37.98562910, -23.62907688, -4.41746615];
//! let din99 = lab_to_din99(lab, k).unwrap();
//! let back = din99_to_lab(din99, k).unwrap();
//! assert!((back[0] - lab[0]).abs() < 1e-9);
//! ```
//!
//! # Errors
//!
//! Domain violations (lightness at or below -63.29, non-positive factors)
//! are returned as [`ColorError`]s. Values are never clamped.
//!
//! # Feature Flags
//!
//! - `rayon` - Parallel batches (enabled by default)
//! - `serde` - Serialization for [`Lab`], [`Din99`], [`KFactors`], [`Conversion`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod batch;
mod din99;
mod error;
mod factors;
pub mod convert;
pub mod difference;

pub use batch::{
    din99_to_lab_array, din99_to_lab_flat, din99_to_lab_inplace, din99_to_lab_slice,
    lab_to_din99_array, lab_to_din99_flat, lab_to_din99_inplace, lab_to_din99_slice,
};
pub use convert::{Conversion, Din99, Din99Convert, Lab};
pub use difference::{delta_e_din99, delta_e_din99_slice};
pub use din99::{CHROMA_CURVE, LIGHTNESS_CURVE, din99_to_lab, lab_to_din99};
pub use error::{ColorError, ColorResult};
pub use factors::KFactors;

// Re-exports for convenience
pub use din99_core::{Triple, TripleArray};
pub use din99_math as math;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        ColorError, ColorResult, Conversion, Din99, Din99Convert, KFactors, Lab, Triple,
        TripleArray, delta_e_din99, din99_to_lab, din99_to_lab_array, lab_to_din99,
        lab_to_din99_array,
    };
}
