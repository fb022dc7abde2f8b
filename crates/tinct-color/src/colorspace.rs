//! RGB colourspace records.
//!
//! An [`RgbColorspace`] bundles primaries, whitepoint, the two matrices
//! between linear RGB and CIE XYZ, and the encoding/decoding transfer
//! functions. Matrices are derived from the primaries at construction.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::colorspace::rec2020;
//! use tinct_math::Vec3;
//!
//! let cs = rec2020().unwrap();
//! let xyz = cs.rgb_to_xyz(Vec3::ONE, true);
//! assert!((xyz.y - 1.0).abs() < 1e-12);
//! ```

use tinct_math::{Mat3, Vec3};
use tinct_primaries::{
    ACES_AP0, ACES_AP1, Chromaticity, DISPLAY_P3, Primaries, REC709, REC2020, SRGB,
    normalised_primary_matrix,
};
use tinct_transfer::{TransferFn, linear, rec2020 as bt2020, rec709 as bt709, srgb as iec};

use crate::error::{ColorError, ColorResult};

/// An RGB colourspace: gamut, whitepoint and transfer functions.
#[derive(Debug, Clone)]
pub struct RgbColorspace {
    /// Display name.
    pub name: String,
    /// Primaries and whitepoint chromaticities.
    pub primaries: Primaries,
    /// Whitepoint chromaticity.
    pub whitepoint: Chromaticity,
    /// Linear RGB to XYZ.
    pub to_xyz: Mat3,
    /// XYZ to linear RGB.
    pub from_xyz: Mat3,
    /// Encoding function, linear to non-linear.
    pub encode: TransferFn,
    /// Decoding function, non-linear to linear.
    pub decode: TransferFn,
}

impl RgbColorspace {
    /// Builds a colourspace, deriving both matrices from `primaries`.
    ///
    /// # Errors
    ///
    /// [`ColorError::Primaries`] if the primaries are degenerate,
    /// [`ColorError::Matrix`] if the derived matrix is not invertible.
    pub fn new(
        name: impl Into<String>,
        primaries: Primaries,
        encode: TransferFn,
        decode: TransferFn,
    ) -> ColorResult<Self> {
        let name = name.into();
        let to_xyz = normalised_primary_matrix(&primaries)?;
        let from_xyz = to_xyz
            .inverse()
            .ok_or_else(|| ColorError::Matrix(format!("{}: RGB to XYZ matrix is singular", name)))?;

        Ok(Self {
            name,
            whitepoint: primaries.w,
            primaries,
            to_xyz,
            from_xyz,
            encode,
            decode,
        })
    }

    /// Converts RGB to XYZ, decoding first when `apply_decoding` is set.
    pub fn rgb_to_xyz(&self, rgb: Vec3, apply_decoding: bool) -> Vec3 {
        let rgb = if apply_decoding { rgb.map(self.decode) } else { rgb };
        self.to_xyz * rgb
    }

    /// Converts XYZ to RGB, encoding the result when `apply_encoding` is set.
    pub fn xyz_to_rgb(&self, xyz: Vec3, apply_encoding: bool) -> Vec3 {
        let rgb = self.from_xyz * xyz;
        if apply_encoding { rgb.map(self.encode) } else { rgb }
    }

    /// Whitepoint as XYZ with Y = 1.
    pub fn whitepoint_xyz(&self) -> ColorResult<Vec3> {
        Ok(self.primaries.white_xyz()?)
    }
}

/// ITU-R BT.2020 with the 10 bit system transfer functions.
pub fn rec2020() -> ColorResult<RgbColorspace> {
    RgbColorspace::new("Rec. 2020", REC2020, bt2020::oetf_10, bt2020::eotf_10)
}

/// ITU-R BT.2020 with the 12 bit system transfer functions.
pub fn rec2020_12bit() -> ColorResult<RgbColorspace> {
    RgbColorspace::new("Rec. 2020 12 bit", REC2020, bt2020::oetf_12, bt2020::eotf_12)
}

/// IEC 61966-2-1 sRGB.
pub fn srgb() -> ColorResult<RgbColorspace> {
    RgbColorspace::new("sRGB", SRGB, iec::oetf, iec::eotf)
}

/// ITU-R BT.709.
pub fn rec709() -> ColorResult<RgbColorspace> {
    RgbColorspace::new("Rec. 709", REC709, bt709::oetf, bt709::eotf)
}

/// Display P3 (DCI-P3 primaries, D65, sRGB curve).
pub fn display_p3() -> ColorResult<RgbColorspace> {
    RgbColorspace::new("Display P3", DISPLAY_P3, iec::oetf, iec::eotf)
}

/// ACEScg (AP1, linear).
pub fn acescg() -> ColorResult<RgbColorspace> {
    RgbColorspace::new("ACEScg", ACES_AP1, linear, linear)
}

/// ACES2065-1 (AP0, linear).
pub fn aces2065_1() -> ColorResult<RgbColorspace> {
    RgbColorspace::new("ACES2065-1", ACES_AP0, linear, linear)
}

type Record = (&'static [&'static str], fn() -> ColorResult<RgbColorspace>);

const RECORDS: [Record; 7] = [
    (&["rec2020", "bt2020", "iturbt2020"], rec2020),
    (&["rec202012bit", "bt202012bit"], rec2020_12bit),
    (&["srgb", "iec6196621"], srgb),
    (&["rec709", "bt709", "iturbt709"], rec709),
    (&["displayp3", "p3d65"], display_p3),
    (&["acescg", "ap1"], acescg),
    (&["aces20651", "aces", "ap0"], aces2065_1),
];

/// Display names of every registered colourspace.
pub const NAMES: [&str; 7] = [
    "Rec. 2020",
    "Rec. 2020 12 bit",
    "sRGB",
    "Rec. 709",
    "Display P3",
    "ACEScg",
    "ACES2065-1",
];

fn canonical(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Looks up a colourspace record by name.
///
/// Matching ignores case and punctuation, so `"Rec. 2020"`, `"rec2020"`
/// and `"ITU-R BT.2020"` all resolve to the same record.
///
/// # Errors
///
/// [`ColorError::UnknownColorspace`] if no record matches.
pub fn colorspace_by_name(name: &str) -> ColorResult<RgbColorspace> {
    let key = canonical(name);
    RECORDS
        .iter()
        .find(|(aliases, _)| aliases.contains(&key.as_str()))
        .map(|(_, build)| build())
        .unwrap_or_else(|| Err(ColorError::UnknownColorspace(name.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rec2020_record() {
        let cs = rec2020().unwrap();
        assert_eq!(cs.name, "Rec. 2020");
        assert_eq!(cs.whitepoint, tinct_primaries::D65_XY);
        assert_abs_diff_eq!(cs.to_xyz.m[0][0], 0.6369580483, epsilon = 1e-9);
        assert_abs_diff_eq!(cs.to_xyz.m[1][1], 0.6779980715, epsilon = 1e-9);
        assert!((cs.to_xyz * cs.from_xyz).approx_eq(&Mat3::IDENTITY, 1e-12));
        assert_abs_diff_eq!((cs.encode)(0.01), 0.045, epsilon = 1e-15);
    }

    #[test]
    fn test_rgb_xyz_roundtrip() {
        let cs = rec2020().unwrap();
        let rgb = Vec3::new(0.7, 0.3, 0.1);
        for apply in [false, true] {
            let back = cs.xyz_to_rgb(cs.rgb_to_xyz(rgb, apply), apply);
            assert!(back.distance(rgb) < 1e-12, "{:?}", back);
        }
    }

    #[test]
    fn test_decoding_flag() {
        let cs = srgb().unwrap();
        let encoded = cs.rgb_to_xyz(Vec3::splat(0.5), true);
        let raw = cs.rgb_to_xyz(Vec3::splat(0.5), false);
        assert!(encoded.y < raw.y);
        assert_abs_diff_eq!(encoded.y, iec::eotf(0.5), epsilon = 1e-12);
    }

    #[test]
    fn test_lookup() {
        for name in ["Rec. 2020", "rec2020", "ITU-R BT.2020", "BT-2020"] {
            assert_eq!(colorspace_by_name(name).unwrap().name, "Rec. 2020");
        }
        assert_eq!(colorspace_by_name("sRGB").unwrap().name, "sRGB");
        assert!(matches!(
            colorspace_by_name("Rec. 2100"),
            Err(ColorError::UnknownColorspace(_))
        ));
    }

    #[test]
    fn test_every_name_resolves() {
        for name in NAMES {
            assert_eq!(colorspace_by_name(name).unwrap().name, name);
        }
    }

    #[test]
    fn test_degenerate_primaries() {
        let flat = Primaries {
            r: (0.3, 0.3),
            g: (0.4, 0.4),
            b: (0.5, 0.5),
            ..REC2020
        };
        assert!(matches!(
            RgbColorspace::new("flat", flat, linear, linear),
            Err(ColorError::Primaries(_))
        ));
    }
}
