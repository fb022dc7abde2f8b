//! Von Kries style chromatic adaptation.
//!
//! Tristimulus values are moved into a cone-like response space, scaled
//! channel by channel by the ratio of the two whites, and moved back.
//! The response space is picked by passing one of the matrices below:
//!
//! | Matrix | Origin |
//! |--------|--------|
//! | [`BRADFORD`] | Lam (1985), sharpened cones; used for RGB colourspace conversion |
//! | [`VON_KRIES`] | Hunt-Pointer-Estevez cone fundamentals |
//! | [`CAT02`] | CIECAM02 |
//! | [`XYZ_SCALING`] | no response space, scales XYZ directly |
//!
//! ```rust
//! use tinct_math::{adapt_matrix, BRADFORD, D65, D50, Vec3};
//!
//! let to_d50 = adapt_matrix(BRADFORD, D65, D50);
//! let paper_white = to_d50 * Vec3::new(0.95047, 1.0, 1.08883);
//! assert!(paper_white.distance(D50) < 1e-9);
//! ```

use crate::{Mat3, Vec3};

// Illuminant whites, XYZ with Y = 1

/// CIE Standard Illuminant D65 (daylight, ~6500K), 2 degree observer.
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D50 (horizon light, ~5000K), 2 degree observer.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D60 (~6000K), as used by ACES.
pub const D60: Vec3 = Vec3::new(0.95265, 1.0, 1.00883);

/// Equal-energy illuminant E.
pub const E: Vec3 = Vec3::new(1.0, 1.0, 1.0);

// Cone response spaces

/// Bradford response matrix (Lam, 1985).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries chromatic adaptation matrix (Hunt-Pointer-Estevez).
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// CAT02 chromatic adaptation matrix from CIECAM02.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Identity response: plain per-channel XYZ scaling.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

/// Builds the matrix adapting XYZ seen under `src_white` to `dst_white`.
///
/// Equals `M^-1 * diag(M dst / M src) * M` for response matrix `M`. A
/// singular `method` degrades to XYZ scaling.
///
/// ```rust
/// use tinct_math::{adapt_matrix, CAT02, D60, D65};
///
/// let m = adapt_matrix(CAT02, D65, D60);
/// assert!((m * D65).distance(D60) < 1e-9);
/// ```
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let Some(back) = method.inverse() else {
        let gain = dst_white / src_white;
        return Mat3::diagonal(gain.x, gain.y, gain.z);
    };
    let gain = (method * dst_white) / (method * src_white);
    back * Mat3::diagonal(gain.x, gain.y, gain.z) * method
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_then_back_is_identity() {
        let there = adapt_matrix(BRADFORD, D65, D50);
        let back = adapt_matrix(BRADFORD, D50, D65);
        assert!((back * there).approx_eq(&Mat3::IDENTITY, 1e-12));
    }

    #[test]
    fn test_same_white_is_identity() {
        for method in [BRADFORD, VON_KRIES, CAT02, XYZ_SCALING] {
            assert!(adapt_matrix(method, D65, D65).approx_eq(&Mat3::IDENTITY, 1e-12));
        }
    }

    #[test]
    fn test_adapt_maps_white() {
        for method in [BRADFORD, VON_KRIES, CAT02, XYZ_SCALING] {
            let result = adapt_matrix(method, D65, D60) * D65;
            assert!(result.distance(D60) < 1e-9, "{:?}", result);
        }
    }

    #[test]
    fn test_singular_method_scales_xyz() {
        let m = adapt_matrix(Mat3::ZERO, D65, D50);
        assert!((m * D65).distance(D50) < 1e-12);
    }

    #[test]
    fn test_bradford_d65_to_d50_reference() {
        // Lindbloom's published Bradford D65 -> D50 matrix
        let m = adapt_matrix(BRADFORD, D65, D50);
        assert!((m.m[0][0] - 1.0478112).abs() < 1e-5);
        assert!((m.m[1][1] - 0.9904844).abs() < 1e-5);
        assert!((m.m[2][2] - 0.7521316).abs() < 1e-5);
    }
}
