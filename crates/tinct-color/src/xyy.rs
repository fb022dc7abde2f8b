//! CIE xyY colourspace.
//!
//! Chromaticity (x, y) plus luminance Y. Black has no chromaticity, so
//! conversions from XYZ take a fallback (usually the whitepoint of the
//! working space) for `X + Y + Z == 0`.

use tinct_math::Vec3;
use tinct_primaries::{Chromaticity, D65_XY};

/// Converts XYZ to xyY, using `fallback` as the chromaticity of black.
///
/// # Example
///
/// ```rust
/// use tinct_color::xyy::xyz_to_xyy;
/// use tinct_math::Vec3;
/// use tinct_primaries::D65_XY;
///
/// let xyy = xyz_to_xyy(Vec3::new(0.20654008, 0.12197225, 0.05136952), D65_XY);
/// assert!((xyy.x - 0.5436).abs() < 1e-4);
/// ```
#[inline]
pub fn xyz_to_xyy(xyz: Vec3, fallback: Chromaticity) -> Vec3 {
    let (x, y) = xyz_to_xy(xyz, fallback);
    Vec3::new(x, y, xyz.y)
}

/// Converts XYZ to xy chromaticity, `fallback` for black.
#[inline]
pub fn xyz_to_xy(xyz: Vec3, fallback: Chromaticity) -> Chromaticity {
    let sum = xyz.sum();
    if sum == 0.0 {
        fallback
    } else {
        (xyz.x / sum, xyz.y / sum)
    }
}

/// Converts XYZ to xyY with the D65 chromaticity for black.
#[inline]
pub fn xyz_to_xyy_d65(xyz: Vec3) -> Vec3 {
    xyz_to_xyy(xyz, D65_XY)
}

/// Converts xyY to XYZ.
///
/// `y == 0` carries no luminance information and yields zero.
#[inline]
pub fn xyy_to_xyz(xyy: Vec3) -> Vec3 {
    let Vec3 { x, y, z: big_y } = xyy;
    if y == 0.0 {
        Vec3::ZERO
    } else {
        Vec3::new(x * big_y / y, big_y, (1.0 - x - y) * big_y / y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        let xyz = Vec3::new(0.20654008, 0.12197225, 0.05136952);
        let back = xyy_to_xyz(xyz_to_xyy_d65(xyz));
        assert!(back.distance(xyz) < 1e-14);
    }

    #[test]
    fn test_reference() {
        let xyy = xyz_to_xyy_d65(Vec3::new(0.20654008, 0.12197225, 0.05136952));
        assert_abs_diff_eq!(xyy.x, 0.54369557, epsilon = 1e-8);
        assert_abs_diff_eq!(xyy.y, 0.32107944, epsilon = 1e-8);
        assert_abs_diff_eq!(xyy.z, 0.12197225, epsilon = 1e-15);
    }

    #[test]
    fn test_black_uses_fallback() {
        let xyy = xyz_to_xyy(Vec3::ZERO, (0.3457, 0.3585));
        assert_eq!(xyy, Vec3::new(0.3457, 0.3585, 0.0));
    }

    #[test]
    fn test_zero_y_chromaticity() {
        assert_eq!(xyy_to_xyz(Vec3::new(0.3, 0.0, 0.5)), Vec3::ZERO);
    }
}
