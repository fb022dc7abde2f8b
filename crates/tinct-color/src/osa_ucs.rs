//! Optical Society of America Uniform Colour Scales (OSA UCS).
//!
//! OSA UCS describes a colour by *Ljg*: lightness L, jaune (yellowness) j
//! and greenness g. L is usually in [-9, 5] centred on middle grey
//! (Munsell N/6), j in [-15, 15] and g in [-20, 15].
//!
//! Input XYZ is under the CIE 1964 10 degree standard observer, scaled to
//! the domain [0, 100].
//!
//! # Inverse
//!
//! The forward transform has no analytical inverse. [`osa_ucs_to_xyz`]
//! minimises `|xyz_to_osa_ucs(XYZ) - Ljg|` with the Nelder-Mead simplex
//! method, then refines the result with a few Newton steps on a
//! finite-difference Jacobian. It is orders of magnitude slower than the
//! forward direction.
//!
//! The search starts at `options.x0` and, if that stalls, at the neutral
//! grey with the target lightness. From each start the simplex is restarted
//! at its best vertex until the residual drops below `max_residual` or the
//! restart budget runs out. [`fit_osa_ucs`] returns the best estimate
//! whatever its residual.
//!
//! # Usage
//!
//! ```rust
//! use tinct_color::osa_ucs::{xyz_to_osa_ucs, osa_ucs_to_xyz, InverseOptions};
//! use tinct_math::Vec3;
//!
//! let xyz = Vec3::new(7.049534, 10.080000, 9.558313);
//! let ljg = xyz_to_osa_ucs(xyz);
//! assert!((ljg.x + 4.4900683).abs() < 1e-6);
//!
//! let back = osa_ucs_to_xyz(ljg, &InverseOptions::default()).unwrap();
//! assert!(back.distance(xyz) < 1e-6);
//! ```
//!
//! # References
//!
//! - Cao, R., Trussell, H. J., & Shamey, R. (2013). Comparison of the
//!   performance of inverse transformation methods from OSA-UCS to CIEXYZ.
//!   JOSA A, 30(8), 1508.
//! - Moroney, N. (2003). A radial sampling of the OSA uniform color scales.
//!   Color and Imaging Conference, 1-14.

use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;
use tinct_math::{Mat3, NelderMeadOptions, Vec3, nelder_mead, sign};
use tracing::{debug, trace, warn};

use crate::error::{ColorError, ColorResult, ensure_finite};
use crate::xyy::{xyy_to_xyz, xyz_to_xy};

/// OSA UCS matrix converting CIE XYZ to its cone-like RGB.
pub const M_XYZ_TO_RGB_OSA_UCS: Mat3 = Mat3::from_rows([
    [0.799, 0.4194, -0.1648],
    [-0.4493, 1.3265, 0.0927],
    [-0.1149, 0.3394, 0.717],
]);

/// Chromaticity assigned to black when computing the luminance factor.
const BLACK_XY: (f64, f64) = tinct_primaries::D65_XY;

const J_WEIGHTS: Vec3 = Vec3::new(1.7, 8.0, -9.7);
const G_WEIGHTS: Vec3 = Vec3::new(-13.7, 17.7, -4.0);

/// Converts CIE XYZ (10 degree observer, domain [0, 100]) to OSA UCS Ljg.
///
/// Cube roots are real cube roots, so negative intermediate values (very
/// dark or out-of-gamut input) stay finite. The result is non-finite only
/// when `cbrt(Y0) == 2/3` exactly, where the chroma scale is undefined.
pub fn xyz_to_osa_ucs(xyz: Vec3) -> Vec3 {
    let (x, y) = xyz_to_xy(xyz, BLACK_XY);
    let y_0 = xyz.y * luminance_factor(x, y);

    let y_0_es = y_0.cbrt() - 2.0 / 3.0;
    let lambda = lightness_scale(y_0);

    let rgb_3 = (M_XYZ_TO_RGB_OSA_UCS * xyz).cbrt();

    let c = lambda / (5.9 * y_0_es);
    let l = (lambda - 14.4) / SQRT_2;
    let j = c * rgb_3.dot(J_WEIGHTS);
    let g = c * rgb_3.dot(G_WEIGHTS);

    Vec3::new(l, j, g)
}

/// `Y0 / Y` at chromaticity (x, y).
fn luminance_factor(x: f64, y: f64) -> f64 {
    4.4934 * x * x + 4.3034 * y * y - 4.276 * x * y - 1.3744 * x - 2.5643 * y + 1.8103
}

/// Lambda as a function of Y0. Strictly increasing.
fn lightness_scale(y_0: f64) -> f64 {
    // Below Y0 = 30 the correction term changes sign
    let y_0_s = y_0 - 30.0;
    5.9 * (y_0.cbrt() - 2.0 / 3.0 + sign(y_0_s) * 0.042 * y_0_s.abs().cbrt())
}

/// Neutral XYZ (D65 chromaticity) whose OSA UCS lightness is `l`.
///
/// Lightness below that of black gives black.
fn neutral_with_lightness(l: f64) -> Vec3 {
    let target = l * SQRT_2 + 14.4;
    if lightness_scale(0.0) >= target {
        return Vec3::ZERO;
    }
    let mut lo = 0.0;
    let mut hi = 1.0;
    while lightness_scale(hi) < target && hi < 1e12 {
        hi *= 2.0;
    }
    for _ in 0..100 {
        let mid = 0.5 * (lo + hi);
        if lightness_scale(mid) < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let (x, y) = BLACK_XY;
    let y_0 = 0.5 * (lo + hi);
    xyy_to_xyz(Vec3::new(x, y, y_0 / luminance_factor(x, y)))
}

/// Tunables for [`osa_ucs_to_xyz`].
///
/// Deserialises from partial JSON; missing fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InverseOptions {
    /// Starting XYZ for the simplex.
    pub x0: [f64; 3],
    /// Simplex vertex spread accepted as converged.
    pub xtol: f64,
    /// Objective spread accepted as converged.
    pub ftol: f64,
    /// Simplex iteration limit.
    pub max_iter: usize,
    /// Objective evaluation limit.
    pub max_evals: usize,
    /// Largest accepted `|forward(result) - target|`.
    pub max_residual: f64,
    /// Newton refinement steps after the simplex, 0 to disable.
    pub polish_steps: usize,
    /// Simplex restarts per starting point while above `max_residual`.
    pub restarts: usize,
}

impl Default for InverseOptions {
    fn default() -> Self {
        Self {
            x0: [30.0, 30.0, 30.0],
            xtol: 1e-10,
            ftol: 1e-10,
            max_iter: 2000,
            max_evals: 4000,
            max_residual: 1e-6,
            polish_steps: 10,
            restarts: 3,
        }
    }
}

impl InverseOptions {
    fn simplex(&self) -> NelderMeadOptions {
        NelderMeadOptions {
            xtol: self.xtol,
            ftol: self.ftol,
            max_iter: Some(self.max_iter),
            max_evals: Some(self.max_evals),
        }
    }
}

fn residual(xyz: Vec3, target: Vec3) -> f64 {
    xyz_to_osa_ucs(xyz).distance(target)
}

/// Newton steps on `forward(xyz) - target` with a forward-difference Jacobian.
///
/// Stops early once a step no longer reduces the residual.
fn polish(mut xyz: Vec3, target: Vec3, steps: usize) -> Vec3 {
    let mut best = residual(xyz, target);
    for _ in 0..steps {
        if best == 0.0 {
            break;
        }
        let f = xyz_to_osa_ucs(xyz);
        let mut cols = [Vec3::ZERO; 3];
        for (k, col) in cols.iter_mut().enumerate() {
            let h = 1e-7 * xyz[k].abs().max(1.0);
            let mut nudged = xyz;
            nudged[k] += h;
            *col = (xyz_to_osa_ucs(nudged) - f) / h;
        }
        let Some(j_inv) = Mat3::from_col_vecs(cols[0], cols[1], cols[2]).inverse() else {
            break;
        };
        let next = xyz - j_inv * (f - target);
        let r = residual(next, target);
        if r.is_nan() || r >= best {
            break;
        }
        xyz = next;
        best = r;
    }
    xyz
}

/// Best XYZ found for an Ljg target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OsaUcsFit {
    /// Estimated XYZ (domain [0, 100]).
    pub xyz: Vec3,
    /// `|xyz_to_osa_ucs(xyz) - target|`.
    pub residual: f64,
    /// Simplex iterations across all runs.
    pub iterations: usize,
    /// Simplex runs performed, restarts included.
    pub runs: usize,
}

impl OsaUcsFit {
    /// True if the residual is finite and within `max_residual`.
    pub fn is_within(&self, max_residual: f64) -> bool {
        self.residual.is_finite() && self.residual <= max_residual
    }
}

/// Searches for the XYZ whose OSA UCS image is closest to `ljg`.
///
/// Always returns the best estimate, converged or not. Ljg values outside
/// the image of the forward transform give the nearest reachable XYZ and a
/// large residual.
///
/// # Errors
///
/// [`ColorError::InvalidValue`] if `ljg` is not finite.
pub fn fit_osa_ucs(ljg: Vec3, options: &InverseOptions) -> ColorResult<OsaUcsFit> {
    ensure_finite("Ljg", ljg)?;

    let simplex = options.simplex();
    let x0 = Vec3::from_array(options.x0);
    let mut best = OsaUcsFit {
        xyz: x0,
        residual: residual(x0, ljg),
        iterations: 0,
        runs: 0,
    };
    let mut iterations = 0;
    let mut runs = 0;

    'starts: for start in [x0, neutral_with_lightness(ljg.x)] {
        let mut x = start;
        for _ in 0..=options.restarts {
            let min = nelder_mead(
                |p: &[f64; 3]| residual(Vec3::from_array(*p), ljg),
                x.to_array(),
                &simplex,
            );
            iterations += min.iterations;
            runs += 1;

            x = polish(Vec3::from_array(min.x), ljg, options.polish_steps);
            let r = residual(x, ljg);
            trace!(runs, simplex_residual = min.fx, residual = r, "OSA UCS inverse run");

            if !r.is_nan() && (best.residual.is_nan() || r < best.residual) {
                best = OsaUcsFit { xyz: x, residual: r, iterations, runs };
            }
            if r <= options.max_residual {
                break 'starts;
            }
        }
    }

    let fit = OsaUcsFit { iterations, runs, ..best };
    debug!(?ljg, xyz = ?fit.xyz, residual = fit.residual, runs, "OSA UCS inverse");
    if !fit.is_within(options.max_residual) {
        warn!(?ljg, residual = fit.residual, runs, "OSA UCS inverse stopped above max_residual");
    }
    Ok(fit)
}

/// Converts OSA UCS Ljg to CIE XYZ (10 degree observer, domain [0, 100]).
///
/// # Errors
///
/// - [`ColorError::InvalidValue`] if `ljg` is not finite.
/// - [`ColorError::NotConverged`] if the best XYZ found maps further than
///   `options.max_residual` from `ljg`. The error carries that XYZ.
pub fn osa_ucs_to_xyz(ljg: Vec3, options: &InverseOptions) -> ColorResult<Vec3> {
    let fit = fit_osa_ucs(ljg, options)?;
    if !fit.is_within(options.max_residual) {
        return Err(ColorError::NotConverged {
            iterations: fit.iterations,
            residual: fit.residual,
            best: fit.xyz,
        });
    }
    Ok(fit.xyz)
}

/// Forward transform over a slice of XYZ triplets.
pub fn xyz_to_osa_ucs_slice(xyz: &[Vec3]) -> Vec<Vec3> {
    xyz.iter().copied().map(xyz_to_osa_ucs).collect()
}

/// Inverse transform over a slice of Ljg triplets.
///
/// Fails on the first triplet that does not invert; use
/// [`fit_osa_ucs_slice`] to keep every estimate.
pub fn osa_ucs_to_xyz_slice(ljg: &[Vec3], options: &InverseOptions) -> ColorResult<Vec<Vec3>> {
    ljg.iter().map(|&v| osa_ucs_to_xyz(v, options)).collect()
}

/// Best-fit inverse over a slice of Ljg triplets.
///
/// Fails only on non-finite input.
pub fn fit_osa_ucs_slice(ljg: &[Vec3], options: &InverseOptions) -> ColorResult<Vec<OsaUcsFit>> {
    ljg.iter().map(|&v| fit_osa_ucs(v, options)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_forward_reference() {
        let ljg = xyz_to_osa_ucs(Vec3::new(7.049534, 10.080000, 9.558313));
        assert_abs_diff_eq!(ljg.x, -4.4900683, epsilon = 1e-6);
        assert_abs_diff_eq!(ljg.y, 0.7030594, epsilon = 1e-6);
        assert_abs_diff_eq!(ljg.z, 3.0346366, epsilon = 1e-6);
    }

    #[test]
    fn test_forward_black() {
        let ljg = xyz_to_osa_ucs(Vec3::ZERO);
        assert_abs_diff_eq!(ljg.x, -13.5080769, epsilon = 1e-6);
        assert_eq!(ljg.y, 0.0);
        assert_eq!(ljg.z, 0.0);
    }

    #[test]
    fn test_forward_negative_input_is_finite() {
        let ljg = xyz_to_osa_ucs(Vec3::new(-1.0, 2.0, 5.0));
        assert!(ljg.is_finite());
    }

    #[test]
    fn test_inverse_reference() {
        let xyz = osa_ucs_to_xyz(
            Vec3::new(-4.4900683, 0.70305936, 3.03463664),
            &InverseOptions::default(),
        )
        .unwrap();
        assert_abs_diff_eq!(xyz.x, 7.049534, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz.y, 10.080000, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz.z, 9.558313, epsilon = 1e-4);
    }

    #[test]
    fn test_inverse_rejects_nan() {
        let err = osa_ucs_to_xyz(Vec3::new(f64::NAN, 0.0, 0.0), &InverseOptions::default());
        assert!(matches!(err, Err(ColorError::InvalidValue(_))));
    }

    #[test]
    fn test_inverse_reports_non_convergence() {
        let options = InverseOptions {
            max_iter: 2,
            polish_steps: 0,
            restarts: 0,
            ..InverseOptions::default()
        };
        let target = Vec3::new(-4.49, 0.70, 3.03);
        let fit = fit_osa_ucs(target, &options).unwrap();
        assert_eq!(fit.runs, 2);
        assert!(!fit.is_within(options.max_residual));

        match osa_ucs_to_xyz(target, &options) {
            Err(ColorError::NotConverged { iterations, residual, best }) => {
                assert_eq!(iterations, 4);
                assert_eq!(residual, fit.residual);
                assert_eq!(best, fit.xyz);
            }
            other => panic!("expected NotConverged, got {:?}", other),
        }
    }

    #[test]
    fn test_inverse_black() {
        let xyz = osa_ucs_to_xyz(xyz_to_osa_ucs(Vec3::ZERO), &InverseOptions::default()).unwrap();
        assert!(xyz.distance(Vec3::ZERO) < 1e-6, "{:?}", xyz);
    }

    #[test]
    fn test_inverse_near_black() {
        let options = InverseOptions::default();
        for xyz in [
            Vec3::new(0.4123908, 0.21263901, 0.01933082),
            Vec3::new(0.18048079, 0.07219232, 0.95053215),
            Vec3::new(0.59287159, 0.28483133, 0.96986297),
        ] {
            let back = osa_ucs_to_xyz(xyz_to_osa_ucs(xyz), &options).unwrap();
            assert!(back.distance(xyz) < 1e-6, "{:?} -> {:?}", xyz, back);
        }
    }

    #[test]
    fn test_neutral_with_lightness() {
        let grey = neutral_with_lightness(-4.49);
        assert_abs_diff_eq!(xyz_to_osa_ucs(grey).x, -4.49, epsilon = 1e-9);
        assert_eq!(neutral_with_lightness(-20.0), Vec3::ZERO);
    }

    #[test]
    fn test_fit_outside_image_keeps_estimate() {
        let options = InverseOptions::default();
        let target = Vec3::new(0.0, 30.0, 30.0);
        let fit = fit_osa_ucs(target, &options).unwrap();
        assert!(fit.xyz.is_finite());
        assert!(fit.residual > 1.0);
        assert_abs_diff_eq!(xyz_to_osa_ucs(fit.xyz).distance(target), fit.residual, epsilon = 1e-12);
        assert!(matches!(
            osa_ucs_to_xyz(target, &options),
            Err(ColorError::NotConverged { best, .. }) if best == fit.xyz
        ));
    }

    #[test]
    fn test_options_from_partial_json() {
        let options: InverseOptions = serde_json::from_str(r#"{"max_iter": 50}"#).unwrap();
        assert_eq!(options.max_iter, 50);
        assert_eq!(options.x0, [30.0, 30.0, 30.0]);
    }

    #[test]
    fn test_slice_helpers() {
        let xyz = [Vec3::new(7.049534, 10.08, 9.558313), Vec3::new(18.0, 18.0, 18.0)];
        let ljg = xyz_to_osa_ucs_slice(&xyz);
        assert_eq!(ljg.len(), 2);
        let back = osa_ucs_to_xyz_slice(&ljg, &InverseOptions::default()).unwrap();
        for (a, b) in xyz.iter().zip(&back) {
            assert!(a.distance(*b) < 1e-6);
        }
    }

    #[test]
    fn test_fit_slice_keeps_every_estimate() {
        let ljg = [xyz_to_osa_ucs(Vec3::new(18.0, 18.0, 18.0)), Vec3::new(-13.0, 5.0, 5.0)];
        let fits = fit_osa_ucs_slice(&ljg, &InverseOptions::default()).unwrap();
        assert_eq!(fits.len(), 2);
        assert!(fits[0].is_within(1e-6));
        assert!(fits[1].xyz.is_finite());
        assert!(osa_ucs_to_xyz_slice(&ljg, &InverseOptions::default()).is_err());
    }
}
