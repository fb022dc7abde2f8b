//! Rec.2020 (BT.2020) transfer function.
//!
//! The Rec.2020 OETF has the same shape as Rec.709: a linear segment near
//! black joined to a 0.45 power curve. The recommendation publishes the
//! joining constants rounded for two system bit depths:
//!
//! | System | alpha | beta |
//! |--------|-------|------|
//! | 10 bit | 1.099 | 0.018 |
//! | 12 bit | 1.0993 | 0.0181 |
//!
//! [`Rec2020Constants::EXACT`] holds the values that make the curve and its
//! slope continuous at the breakpoint; the rounded constants leave a small
//! step there.
//!
//! # Range
//!
//! - Input/Output: [0, 1]. Negative values continue the linear segment.
//!
//! # Reference
//!
//! ITU-R BT.2020-2

use std::fmt;

/// Linear segment slope.
const SLOPE: f64 = 4.5;
/// Power curve exponent.
const EXPONENT: f64 = 0.45;

/// Joining constants of the Rec.2020 curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rec2020Constants {
    /// Power segment scale.
    pub alpha: f64,
    /// Linear-light breakpoint.
    pub beta: f64,
}

impl Rec2020Constants {
    /// Constants for 10 bit systems.
    pub const TEN_BIT: Self = Self { alpha: 1.099, beta: 0.018 };

    /// Constants for 12 bit systems.
    pub const TWELVE_BIT: Self = Self { alpha: 1.0993, beta: 0.0181 };

    /// Unrounded constants solving the continuity equations.
    #[allow(clippy::excessive_precision)]
    pub const EXACT: Self = Self {
        alpha: 1.09929682680944,
        beta: 0.018053968510807,
    };

    /// Encoded value at the breakpoint: the power segment evaluated at `beta`.
    ///
    /// This is where [`oetf`] output switches to the power segment, so
    /// [`inverse_oetf`] uses it as its own breakpoint.
    #[inline]
    pub fn encoded_beta(&self) -> f64 {
        self.alpha * self.beta.powf(EXPONENT) - (self.alpha - 1.0)
    }
}

impl Default for Rec2020Constants {
    fn default() -> Self {
        Self::TEN_BIT
    }
}

/// System bit depth selecting the published constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// 10 bit system.
    #[default]
    Ten,
    /// 12 bit system.
    Twelve,
}

impl BitDepth {
    /// Published constants for this bit depth.
    pub const fn constants(self) -> Rec2020Constants {
        match self {
            Self::Ten => Rec2020Constants::TEN_BIT,
            Self::Twelve => Rec2020Constants::TWELVE_BIT,
        }
    }

    /// Parses `10` or `12`.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            10 => Some(Self::Ten),
            12 => Some(Self::Twelve),
            _ => None,
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ten => write!(f, "10 bit"),
            Self::Twelve => write!(f, "12 bit"),
        }
    }
}

/// Rec.2020 OETF: Encodes linear to Rec.2020.
///
/// # Formula
///
/// ```text
/// if L < beta:
///     V = 4.5 * L
/// else:
///     V = alpha * L^0.45 - (alpha - 1)
/// ```
///
/// # Example
///
/// ```rust
/// use tinct_transfer::rec2020::{oetf, Rec2020Constants};
///
/// let v = oetf(0.18, &Rec2020Constants::TEN_BIT);
/// assert!((v - 0.40901).abs() < 1e-4);
/// ```
#[inline]
pub fn oetf(l: f64, c: &Rec2020Constants) -> f64 {
    if l < c.beta {
        SLOPE * l
    } else {
        c.alpha * l.powf(EXPONENT) - (c.alpha - 1.0)
    }
}

/// Rec.2020 inverse OETF: Decodes Rec.2020 to linear.
///
/// The breakpoint is [`Rec2020Constants::encoded_beta`], so every value at
/// or above `beta` decodes back exactly. With the 12 bit constants the two
/// segments overlap in [0.0814472, 0.08145): linear values just below
/// `beta` encode into that band and decode slightly above `beta`.
#[inline]
pub fn inverse_oetf(v: f64, c: &Rec2020Constants) -> f64 {
    if v < c.encoded_beta() {
        v / SLOPE
    } else {
        ((v + (c.alpha - 1.0)) / c.alpha).powf(1.0 / EXPONENT)
    }
}

/// OETF for the given bit depth.
#[inline]
pub fn encode(l: f64, depth: BitDepth) -> f64 {
    oetf(l, &depth.constants())
}

/// Inverse OETF for the given bit depth.
#[inline]
pub fn decode(v: f64, depth: BitDepth) -> f64 {
    inverse_oetf(v, &depth.constants())
}

/// 10 bit OETF.
#[inline]
pub fn oetf_10(l: f64) -> f64 {
    oetf(l, &Rec2020Constants::TEN_BIT)
}

/// 10 bit inverse OETF.
#[inline]
pub fn eotf_10(v: f64) -> f64 {
    inverse_oetf(v, &Rec2020Constants::TEN_BIT)
}

/// 12 bit OETF.
#[inline]
pub fn oetf_12(l: f64) -> f64 {
    oetf(l, &Rec2020Constants::TWELVE_BIT)
}

/// 12 bit inverse OETF.
#[inline]
pub fn eotf_12(v: f64) -> f64 {
    inverse_oetf(v, &Rec2020Constants::TWELVE_BIT)
}

/// Applies the 10 bit OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf_10)
}

/// Applies the 10 bit inverse OETF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf_10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for c in [
            Rec2020Constants::TEN_BIT,
            Rec2020Constants::TWELVE_BIT,
            Rec2020Constants::EXACT,
        ] {
            for i in 0..=200 {
                let l = i as f64 / 200.0;
                let back = inverse_oetf(oetf(l, &c), &c);
                assert_abs_diff_eq!(l, back, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_roundtrip_at_beta() {
        for c in [
            Rec2020Constants::TEN_BIT,
            Rec2020Constants::TWELVE_BIT,
            Rec2020Constants::EXACT,
        ] {
            for l in [c.beta, c.beta + 1e-7, c.beta + 6e-7, c.beta + 1e-5] {
                assert_abs_diff_eq!(inverse_oetf(oetf(l, &c), &c), l, epsilon = 1e-12);
            }
        }
        let l = decode(encode(0.0181, BitDepth::Twelve), BitDepth::Twelve);
        assert_abs_diff_eq!(l, 0.0181, epsilon = 1e-12);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(oetf_10(0.0), 0.0);
        assert_abs_diff_eq!(oetf_10(1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(oetf_12(1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eotf_12(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_constants_are_continuous() {
        let c = Rec2020Constants::EXACT;
        let below = SLOPE * c.beta;
        let above = c.alpha * c.beta.powf(EXPONENT) - (c.alpha - 1.0);
        assert_abs_diff_eq!(below, above, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_segment() {
        assert_abs_diff_eq!(oetf_10(0.01), 0.045, epsilon = 1e-15);
        assert_abs_diff_eq!(eotf_10(0.045), 0.01, epsilon = 1e-15);
        assert_abs_diff_eq!(oetf_10(-0.01), -0.045, epsilon = 1e-15);
    }

    #[test]
    fn test_bit_depth() {
        assert_eq!(BitDepth::default(), BitDepth::Ten);
        assert_eq!(BitDepth::from_bits(12), Some(BitDepth::Twelve));
        assert_eq!(BitDepth::from_bits(8), None);
        assert_eq!(encode(0.5, BitDepth::Twelve), oetf_12(0.5));
        assert_eq!(decode(0.5, BitDepth::Ten), eotf_10(0.5));
    }
}
