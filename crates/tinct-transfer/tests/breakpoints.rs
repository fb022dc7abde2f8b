//! Continuity of the piecewise transfer functions at their breakpoints.
//!
//! Each curve joins a linear segment to a power segment. Evaluating both
//! segments at the breakpoint must give the same value, up to the rounding
//! of the published constants.

use approx::assert_abs_diff_eq;
use tinct_transfer::rec2020::{self, BitDepth, Rec2020Constants};
use tinct_transfer::{rec709, srgb};

/// Largest step allowed by the rounded 10 bit constants (1.099 / 0.018).
const TEN_BIT_STEP: f64 = 3e-4;
/// Largest step allowed by the rounded 12 bit constants (1.0993 / 0.0181).
const TWELVE_BIT_STEP: f64 = 5e-6;

fn step_at_breakpoint(c: &Rec2020Constants) -> f64 {
    let below = rec2020::oetf(c.beta - 1e-12, c);
    let above = rec2020::oetf(c.beta, c);
    (above - below).abs()
}

#[test]
fn rec2020_exact_constants_have_no_step() {
    assert!(step_at_breakpoint(&Rec2020Constants::EXACT) < 1e-10);
}

#[test]
fn rec2020_rounded_constants_step_is_small() {
    assert!(step_at_breakpoint(&BitDepth::Ten.constants()) < TEN_BIT_STEP);
    assert!(step_at_breakpoint(&BitDepth::Twelve.constants()) < TWELVE_BIT_STEP);
}

fn inverse_step_at_breakpoint(c: &Rec2020Constants) -> f64 {
    let e = c.encoded_beta();
    let below = rec2020::inverse_oetf(e - 1e-12, c);
    let above = rec2020::inverse_oetf(e, c);
    (above - below).abs()
}

#[test]
fn rec2020_inverse_is_continuous() {
    assert!(inverse_step_at_breakpoint(&Rec2020Constants::EXACT) < 1e-10);
}

#[test]
fn rec2020_rounded_inverse_step_is_small() {
    assert!(inverse_step_at_breakpoint(&BitDepth::Ten.constants()) < TEN_BIT_STEP);
    assert!(inverse_step_at_breakpoint(&BitDepth::Twelve.constants()) < TWELVE_BIT_STEP);
}

#[test]
fn rec2020_decodes_its_own_breakpoint() {
    for depth in [BitDepth::Ten, BitDepth::Twelve] {
        let c = depth.constants();
        assert_abs_diff_eq!(rec2020::decode(c.encoded_beta(), depth), c.beta, epsilon = 1e-12);
        for k in 1..=100 {
            let l = c.beta + k as f64 * 1e-8;
            assert_abs_diff_eq!(rec2020::decode(rec2020::encode(l, depth), depth), l, epsilon = 1e-12);
        }
    }
}

#[test]
fn rec2020_is_monotonic() {
    for c in [Rec2020Constants::TEN_BIT, Rec2020Constants::EXACT] {
        let mut prev = rec2020::oetf(0.0, &c);
        for i in 1..=1000 {
            let v = rec2020::oetf(i as f64 / 1000.0, &c);
            assert!(v > prev, "not increasing at {}", i);
            prev = v;
        }
    }
}

#[test]
fn rec709_matches_rec2020_ten_bit() {
    for i in 0..=50 {
        let l = i as f64 / 50.0;
        assert_eq!(rec709::oetf(l), rec2020::oetf_10(l));
    }
}

#[test]
fn srgb_is_continuous() {
    let below = 0.0031308 * 12.92;
    let above = 1.055 * 0.0031308_f64.powf(1.0 / 2.4) - 0.055;
    assert_abs_diff_eq!(below, above, epsilon = 1e-7);
    assert_abs_diff_eq!(srgb::eotf(0.04045), srgb::eotf(0.04045 + 1e-12), epsilon = 1e-8);
}
