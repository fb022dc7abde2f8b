//! # tinct-math
//!
//! Math primitives for colour science computations.
//!
//! This crate provides the small fixed-size linear algebra every colourimetric
//! transform is built from:
//!
//! - [`Mat3`] - 3x3 matrices for basis changes (RGB/XYZ, cone spaces, CVD)
//! - [`Vec3`] - 3D vectors for tristimulus and RGB triplets
//! - Chromatic adaptation transforms (Bradford, CAT02, Von Kries)
//! - Interpolation utilities ([`lerp`], [`inverse_lerp`])
//! - A derivative-free minimiser ([`nelder_mead`]) for transforms without
//!   a closed-form inverse
//!
//! # Design
//!
//! All values are `f64`. Colour-science reference values are published with
//! 7-10 significant digits and iterative inverses need the headroom.
//! Matrices use **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tinct_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Used By
//!
//! - `tinct-primaries` - normalised primary matrices
//! - `tinct-color` - colour model conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod interp;
mod mat3;
mod optimize;
mod vec3;

pub use adapt::*;
pub use interp::*;
pub use mat3::*;
pub use optimize::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
