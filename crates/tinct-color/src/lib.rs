//! # tinct-color
//!
//! Colour models, RGB colourspaces and colour-vision-deficiency simulation.
//!
//! - **OSA UCS** - forward XYZ to Ljg and an optimisation-based inverse
//! - **RGB colourspaces** - Rec. 2020, sRGB, Rec. 709 and friends, with
//!   matrices derived from their primaries
//! - **CVD** - Machado (2009) simulation matrices
//! - **xyY** - chromaticity helpers
//!
//! # Architecture
//!
//! ```text
//!                   tinct-color
//!                        |
//!        +---------------+---------------+
//!        |                               |
//! tinct-transfer                 tinct-primaries
//!                                        |
//!                                   tinct-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_color::prelude::*;
//!
//! let ljg = xyz_to_osa_ucs(Vec3::new(7.049534, 10.08, 9.558313));
//! let xyz = osa_ucs_to_xyz(ljg, &InverseOptions::default()).unwrap();
//! assert!((xyz.y - 10.08).abs() < 1e-6);
//!
//! let cs = rec2020().unwrap();
//! let seen = simulate_cvd(cs.xyz_to_rgb(xyz / 100.0, false), Deficiency::Deuteranomaly, 1.0);
//! assert!(seen.is_ok());
//! ```
//!
//! # Conventions
//!
//! All values are `f64`. XYZ for OSA UCS is on the [0, 100] scale; RGB
//! colourspace records use Y = 1 for the whitepoint. Functions that can
//! fail return [`ColorResult`].
//!
//! # Used By
//!
//! - `tinct-cli` - command-line calculator

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod colorspace;
pub mod convert;
pub mod cvd;
pub mod osa_ucs;
pub mod xyy;

pub use colorspace::{RgbColorspace, colorspace_by_name};
pub use convert::{RgbConvert, convert_rgb};
pub use cvd::{Deficiency, cvd_matrix_machado2009, simulate_cvd};
pub use error::{ColorError, ColorResult};
pub use osa_ucs::{InverseOptions, OsaUcsFit, fit_osa_ucs, osa_ucs_to_xyz, xyz_to_osa_ucs};

// Re-export sub-crates for convenience
pub use tinct_math as math;
pub use tinct_primaries as primaries;
pub use tinct_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::colorspace::{rec709, rec2020, srgb};
    pub use crate::{
        ColorError, ColorResult, Deficiency, InverseOptions, RgbColorspace, RgbConvert,
        colorspace_by_name, convert_rgb, cvd_matrix_machado2009, osa_ucs_to_xyz, simulate_cvd,
        xyz_to_osa_ucs,
    };

    pub use tinct_transfer::{BitDepth, rec2020 as bt2020, srgb as iec61966};

    pub use tinct_primaries::{Primaries, D65_XY, REC709, REC2020, SRGB};

    pub use tinct_math::{Mat3, Vec3};
}
