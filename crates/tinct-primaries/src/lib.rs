//! # tinct-primaries
//!
//! Colour primaries, whitepoints, and RGB-XYZ matrix generation.
//!
//! An RGB colourspace is pinned to CIE XYZ by the chromaticities of its three
//! primaries and of its whitepoint. From those, the *normalised primary
//! matrix* (NPM) maps linear RGB to XYZ so that RGB (1, 1, 1) lands on the
//! whitepoint with luminance Y = 1.
//!
//! # Included Colour Spaces
//!
//! | Colour Space | Whitepoint | Primary Use |
//! |-------------|------------|-------------|
//! | sRGB / Rec.709 | D65 | Web, HDTV |
//! | Rec.2020 | D65 | UHDTV, HDR |
//! | DCI-P3 | DCI | Cinema |
//! | Display P3 | D65 | Wide gamut displays |
//! | ACES AP0 / AP1 | D60 | Archival, working space |
//! | Adobe RGB (1998) | D65 | Photography |
//! | ProPhoto RGB | D50 | Photography |
//!
//! # Usage
//!
//! ```rust
//! use tinct_primaries::{REC2020, normalised_primary_matrix};
//! use tinct_math::Vec3;
//!
//! let npm = normalised_primary_matrix(&REC2020).unwrap();
//! let white = npm * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `tinct-color` - RGB colourspace records

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use thiserror::Error;
use tinct_math::{Mat3, Vec3};

/// CIE xy chromaticity coordinates.
pub type Chromaticity = (f64, f64);

/// Error deriving matrices from primaries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PrimariesError {
    /// A chromaticity has y = 0 and cannot be lifted to XYZ.
    #[error("{name}: chromaticity ({x}, {y}) has zero y")]
    ZeroLuminance {
        /// Colourspace name.
        name: &'static str,
        /// x coordinate.
        x: f64,
        /// y coordinate.
        y: f64,
    },

    /// The primaries are collinear in xy and span no volume.
    #[error("{0}: primaries are collinear, matrix is singular")]
    Singular(&'static str),
}

/// Result type for primaries operations.
pub type PrimariesResult<T> = Result<T, PrimariesError>;

/// RGB colourspace primaries definition.
///
/// Defines a colourspace gamut by its three primaries (R, G, B) and white
/// point, all specified as CIE xy chromaticity coordinates.
///
/// # Example
///
/// ```rust
/// use tinct_primaries::{Primaries, D65_XY};
///
/// let my_space = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
///     w: D65_XY,
///     name: "Custom",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: Chromaticity,
    /// Green primary (x, y) chromaticity
    pub g: Chromaticity,
    /// Blue primary (x, y) chromaticity
    pub b: Chromaticity,
    /// White point (x, y) chromaticity
    pub w: Chromaticity,
    /// Colour space name
    pub name: &'static str,
}

impl Primaries {
    /// The three primaries as an array, red first.
    #[inline]
    pub fn rgb(&self) -> [Chromaticity; 3] {
        [self.r, self.g, self.b]
    }

    /// White point as XYZ (Y = 1).
    pub fn white_xyz(&self) -> PrimariesResult<Vec3> {
        lift(self.name, self.w)
    }
}

// ============================================================================
// Standard White Points (CIE 1931 2 degree standard observer)
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: Chromaticity = (0.31270, 0.32900);

/// D50 white point chromaticity (~5000K).
pub const D50_XY: Chromaticity = (0.34567, 0.35850);

/// D60 white point chromaticity (~6000K, used by ACES).
pub const D60_XY: Chromaticity = (0.32168, 0.33767);

/// DCI white point chromaticity (theatrical projection).
pub const DCI_XY: Chromaticity = (0.31400, 0.35100);

// ============================================================================
// Standard Colour Space Primaries
// ============================================================================

/// Rec.2020 primaries (D65 white point).
///
/// Ultra HD TV colourspace with a much wider gamut than Rec.709.
pub const REC2020: Primaries = Primaries {
    r: (0.708, 0.292),
    g: (0.170, 0.797),
    b: (0.131, 0.046),
    w: D65_XY,
    name: "Rec. 2020",
};

/// sRGB primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.64, 0.33),
    g: (0.30, 0.60),
    b: (0.15, 0.06),
    w: D65_XY,
    name: "sRGB",
};

/// Rec.709 primaries (identical to sRGB).
pub const REC709: Primaries = Primaries { name: "Rec. 709", ..SRGB };

/// DCI-P3 primaries (DCI white point).
pub const DCI_P3: Primaries = Primaries {
    r: (0.680, 0.320),
    g: (0.265, 0.690),
    b: (0.150, 0.060),
    w: DCI_XY,
    name: "DCI-P3",
};

/// Display P3 primaries: DCI-P3 with a D65 white point.
pub const DISPLAY_P3: Primaries = Primaries { w: D65_XY, name: "Display P3", ..DCI_P3 };

/// ACES AP0 primaries (D60 white point).
///
/// Encompasses the entire spectral locus; the blue primary has negative y.
pub const ACES_AP0: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.0000, 1.0000),
    b: (0.0001, -0.0770),
    w: D60_XY,
    name: "ACES2065-1",
};

/// ACES AP1 primaries (D60 white point).
pub const ACES_AP1: Primaries = Primaries {
    r: (0.713, 0.293),
    g: (0.165, 0.830),
    b: (0.128, 0.044),
    w: D60_XY,
    name: "ACEScg",
};

/// Adobe RGB (1998) primaries (D65 white point).
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.64, 0.33),
    g: (0.21, 0.71),
    b: (0.15, 0.06),
    w: D65_XY,
    name: "Adobe RGB (1998)",
};

/// ProPhoto RGB primaries (D50 white point).
pub const PROPHOTO_RGB: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.1596, 0.8404),
    b: (0.0366, 0.0001),
    w: D50_XY,
    name: "ProPhoto RGB",
};

/// Every primaries set defined in this crate.
pub const ALL: [Primaries; 9] = [
    REC2020, SRGB, REC709, DCI_P3, DISPLAY_P3, ACES_AP0, ACES_AP1, ADOBE_RGB, PROPHOTO_RGB,
];

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ with Y = 1.
///
/// Returns `None` when `y == 0`.
#[inline]
pub fn xy_to_xyz(xy: Chromaticity) -> Option<Vec3> {
    let (x, y) = xy;
    if y == 0.0 {
        None
    } else {
        Some(Vec3::new(x / y, 1.0, (1.0 - x - y) / y))
    }
}

fn lift(name: &'static str, xy: Chromaticity) -> PrimariesResult<Vec3> {
    xy_to_xyz(xy).ok_or(PrimariesError::ZeroLuminance { name, x: xy.0, y: xy.1 })
}

/// Computes the normalised primary matrix (linear RGB to XYZ).
///
/// # Algorithm
///
/// 1. Lift the xy chromaticities to XYZ with Y = 1
/// 2. Solve for scaling factors so RGB (1, 1, 1) maps to the white point
/// 3. Scale each primary column by its factor
///
/// # Errors
///
/// [`PrimariesError::ZeroLuminance`] if any chromaticity has y = 0,
/// [`PrimariesError::Singular`] if the primaries are collinear.
pub fn normalised_primary_matrix(primaries: &Primaries) -> PrimariesResult<Mat3> {
    let r = lift(primaries.name, primaries.r)?;
    let g = lift(primaries.name, primaries.g)?;
    let b = lift(primaries.name, primaries.b)?;
    let w = lift(primaries.name, primaries.w)?;

    let m = Mat3::from_col_vecs(r, g, b);
    let m_inv = m.inverse().ok_or(PrimariesError::Singular(primaries.name))?;
    let s = m_inv * w;

    Ok(Mat3::from_col_vecs(r * s.x, g * s.y, b * s.z))
}

/// Alias of [`normalised_primary_matrix`].
#[inline]
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> PrimariesResult<Mat3> {
    normalised_primary_matrix(primaries)
}

/// Computes the XYZ to linear RGB matrix, the inverse of the NPM.
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> PrimariesResult<Mat3> {
    normalised_primary_matrix(primaries)?
        .inverse()
        .ok_or(PrimariesError::Singular(primaries.name))
}

/// Computes a matrix converting linear RGB from one colourspace to another.
///
/// Goes through XYZ without chromatic adaptation; callers converting
/// between different whitepoints insert an adaptation matrix in between
/// (see `tinct_math::adapt_matrix`).
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> PrimariesResult<Mat3> {
    Ok(xyz_to_rgb_matrix(dst)? * normalised_primary_matrix(src)?)
}
