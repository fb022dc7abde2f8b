//! IEC 61966-2-1 (sRGB) piecewise curve.
//!
//! A 12.92 slope near black hands over to an offset 2.4 power, which reads
//! close to a pure 2.2 gamma overall. The two published breakpoints
//! (0.04045 encoded, 0.0031308 linear) do not quite coincide, so the curve
//! has a step of about 2e-9 there.

/// Decodes an sRGB value to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use tinct_transfer::srgb::eotf;
///
/// assert!((eotf(0.5) - 0.21404).abs() < 1e-5);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes linear light as sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-9, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_end_points() {
        for f in [eotf, oetf] {
            assert_eq!(f(0.0), 0.0);
            assert!((f(1.0) - 1.0).abs() < 1e-12);
        }
    }
}
