//! Chainable RGB conversions.
//!
//! [`RgbConvert`] adds transfer, matrix and adaptation steps to plain
//! `[f64; 3]` triplets so conversions read left to right.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::convert::RgbConvert;
//! use tinct_color::transfer::{rec2020, srgb};
//! use tinct_color::primaries::{SRGB, REC2020};
//!
//! let rec2020_pixel = [0.5_f64, 0.3, 0.2]
//!     .linearize(srgb::eotf)       // sRGB -> linear
//!     .to_xyz(&SRGB).unwrap()      // linear RGB -> XYZ
//!     .from_xyz(&REC2020).unwrap() // XYZ -> Rec.2020 linear
//!     .encode(rec2020::oetf_10);   // linear -> Rec.2020
//! ```

use tinct_math::{BRADFORD, Mat3, Vec3, adapt_matrix};
use tinct_primaries::{Primaries, rgb_to_xyz_matrix, xyz_to_rgb_matrix};
use tinct_transfer::TransferFn;
use tracing::trace;

use crate::colorspace::RgbColorspace;
use crate::error::{ColorResult, ensure_finite};

/// RGB-specific conversion operations.
pub trait RgbConvert: Sized {
    /// Applies a decoding function (non-linear to linear).
    fn linearize(self, f: TransferFn) -> Self;

    /// Applies an encoding function (linear to non-linear).
    fn encode(self, f: TransferFn) -> Self;

    /// Converts linear RGB to XYZ using the given primaries.
    fn to_xyz(self, primaries: &Primaries) -> ColorResult<Self>;

    /// Converts XYZ to linear RGB using the given primaries.
    fn from_xyz(self, primaries: &Primaries) -> ColorResult<Self>;

    /// Applies a 3x3 matrix.
    fn transform(self, matrix: &Mat3) -> Self;

    /// Applies chromatic adaptation between whitepoints (XYZ input).
    ///
    /// ```rust
    /// use tinct_color::RgbConvert;
    /// use tinct_math::{BRADFORD, D50, D65};
    ///
    /// let xyz_d50 = [0.95047_f64, 1.0, 1.08883].adapt(BRADFORD, D65, D50);
    /// assert!((xyz_d50[0] - 0.96422).abs() < 1e-4);
    /// ```
    fn adapt(self, method: Mat3, from_white: Vec3, to_white: Vec3) -> Self;
}

impl RgbConvert for [f64; 3] {
    fn linearize(self, f: TransferFn) -> Self {
        self.map(f)
    }

    fn encode(self, f: TransferFn) -> Self {
        self.map(f)
    }

    fn to_xyz(self, primaries: &Primaries) -> ColorResult<Self> {
        Ok(self.transform(&rgb_to_xyz_matrix(primaries)?))
    }

    fn from_xyz(self, primaries: &Primaries) -> ColorResult<Self> {
        Ok(self.transform(&xyz_to_rgb_matrix(primaries)?))
    }

    fn transform(self, matrix: &Mat3) -> Self {
        (*matrix * Vec3::from_array(self)).to_array()
    }

    fn adapt(self, method: Mat3, from_white: Vec3, to_white: Vec3) -> Self {
        self.transform(&adapt_matrix(method, from_white, to_white))
    }
}

/// Matrix from `src` linear RGB to `dst` linear RGB.
///
/// Inserts a Bradford adaptation when the whitepoints differ.
pub fn rgb_to_rgb(src: &RgbColorspace, dst: &RgbColorspace) -> ColorResult<Mat3> {
    if src.whitepoint == dst.whitepoint {
        return Ok(dst.from_xyz * src.to_xyz);
    }
    let cat = adapt_matrix(BRADFORD, src.whitepoint_xyz()?, dst.whitepoint_xyz()?);
    trace!(src = %src.name, dst = %dst.name, "adapting whitepoint");
    Ok(dst.from_xyz * cat * src.to_xyz)
}

/// Converts an encoded RGB value from one colourspace to another.
///
/// Decodes with `src`, converts through XYZ (with Bradford adaptation for
/// differing whitepoints) and encodes with `dst`.
///
/// # Errors
///
/// [`crate::ColorError::InvalidValue`] for non-finite input.
pub fn convert_rgb(rgb: [f64; 3], src: &RgbColorspace, dst: &RgbColorspace) -> ColorResult<[f64; 3]> {
    ensure_finite("RGB", Vec3::from_array(rgb))?;
    let m = rgb_to_rgb(src, dst)?;
    Ok(rgb.linearize(src.decode).transform(&m).encode(dst.encode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorspace::{acescg, rec2020, srgb};
    use approx::assert_abs_diff_eq;
    use tinct_primaries::{REC2020, SRGB};
    use tinct_transfer::srgb as iec;

    #[test]
    fn test_chain_matches_matrices() {
        let xyz = [0.5_f64, 0.3, 0.2].linearize(iec::eotf).to_xyz(&SRGB).unwrap();
        let y = 0.21263901 * iec::eotf(0.5) + 0.71516868 * iec::eotf(0.3) + 0.07219232 * iec::eotf(0.2);
        assert_abs_diff_eq!(xyz[1], y, epsilon = 1e-7);
        let back = xyz.from_xyz(&SRGB).unwrap().encode(iec::oetf);
        assert_abs_diff_eq!(back[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(back[2], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_srgb_to_rec2020_matrix() {
        let m = rgb_to_rgb(&srgb().unwrap(), &rec2020().unwrap()).unwrap();
        let expected = Mat3::from_rows([
            [0.627404, 0.329283, 0.043313],
            [0.069097, 0.919540, 0.011362],
            [0.016391, 0.088013, 0.895595],
        ]);
        assert!(m.approx_eq(&expected, 1e-5), "{:?}", m);
    }

    #[test]
    fn test_white_is_preserved_across_whitepoints() {
        let out = convert_rgb([1.0, 1.0, 1.0], &srgb().unwrap(), &acescg().unwrap()).unwrap();
        for c in out {
            assert_abs_diff_eq!(c, 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_convert_roundtrip() {
        let (a, b) = (srgb().unwrap(), rec2020().unwrap());
        let rgb = [0.8_f64, 0.4, 0.1];
        let there = convert_rgb(rgb, &a, &b).unwrap();
        let back = convert_rgb(there, &b, &a).unwrap();
        for (x, y) in rgb.iter().zip(back) {
            assert_abs_diff_eq!(*x, y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_convert_rejects_nan() {
        let cs = srgb().unwrap();
        assert!(convert_rgb([f64::NAN, 0.0, 0.0], &cs, &cs).is_err());
    }

    #[test]
    fn test_primaries_chain() {
        let rgb = [0.2_f64, 0.4, 0.6];
        let via = rgb.to_xyz(&SRGB).unwrap().from_xyz(&REC2020).unwrap();
        let m = rgb_to_rgb(&srgb().unwrap(), &rec2020().unwrap()).unwrap();
        let direct = rgb.transform(&m);
        for (x, y) in via.iter().zip(direct) {
            assert_abs_diff_eq!(*x, y, epsilon = 1e-12);
        }
    }
}
