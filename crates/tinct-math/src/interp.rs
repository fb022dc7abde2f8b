//! Interpolation utilities.
//!
//! ```rust
//! use tinct_math::{lerp, inverse_lerp};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// Returns 0 for a degenerate range.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < 1e-15 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}
