//! Rec.709 (BT.709) transfer function.
//!
//! Same curve family as [`crate::rec2020`] with the 10 bit constants. The
//! display EOTF of a Rec.709 chain is BT.1886 (gamma 2.4); [`eotf`] here is
//! the inverse of the camera OETF, which is what colourspace round trips
//! need.
//!
//! # Reference
//!
//! ITU-R BT.709-6

use crate::rec2020::{Rec2020Constants, inverse_oetf, oetf as bt2020_oetf};

const CONSTANTS: Rec2020Constants = Rec2020Constants::TEN_BIT;

/// Rec.709 OETF: Encodes linear to Rec.709.
///
/// # Formula
///
/// ```text
/// if L < 0.018:
///     V = 4.5 * L
/// else:
///     V = 1.099 * L^0.45 - 0.099
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    bt2020_oetf(l, &CONSTANTS)
}

/// Rec.709 inverse OETF: Decodes Rec.709 to linear.
#[inline]
pub fn eotf(v: f64) -> f64 {
    inverse_oetf(v, &CONSTANTS)
}
