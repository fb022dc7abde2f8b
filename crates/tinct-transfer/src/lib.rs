//! # tinct-transfer
//!
//! Transfer functions for RGB colourspace encoding and decoding.
//!
//! Transfer functions convert between linear light values and encoded values
//! for storage, display, or transmission.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! Here the decoding functions are the exact inverses of the encoding ones,
//! so that `eotf(oetf(x)) == x` up to rounding.
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`rec2020`] | UHDTV (10 and 12 bit systems) | [0, 1] |
//! | [`rec709`] | HDTV broadcast | [0, 1] |
//! | [`srgb`] | Web, consumer displays | [0, 1] |
//!
//! # Usage
//!
//! ```rust
//! use tinct_transfer::rec2020;
//!
//! let encoded = rec2020::oetf_10(0.18);
//! let linear = rec2020::eotf_10(encoded);
//! assert!((linear - 0.18).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `tinct-color` - RGB colourspace records

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod rec2020;
pub mod rec709;
pub mod srgb;

pub use rec2020::{BitDepth, Rec2020Constants};

/// A scalar transfer function, as stored in colourspace records.
pub type TransferFn = fn(f64) -> f64;

/// Identity transfer function for linear colourspaces.
#[inline]
pub fn linear(v: f64) -> f64 {
    v
}
