//! 3D vector type for colour triplets.
//!
//! [`Vec3`] represents XYZ, RGB, Ljg or any other 3-component colour value.
//!
//! # Usage
//!
//! ```rust
//! use tinct_math::Vec3;
//!
//! let xyz = Vec3::new(7.049534, 10.08, 9.558313);
//! let scaled = xyz / 100.0;
//! let roots = scaled.cbrt();
//! ```

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// Sign of `v` with zero mapped to zero.
///
/// Unlike `f64::signum`, both `0.0` and `-0.0` give `0.0`.
#[inline]
pub fn sign(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v.signum() }
}

/// A 3D vector for colour triplets (XYZ, RGB, Ljg, ...).
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
///
/// # Example
///
/// ```rust
/// use tinct_math::Vec3;
///
/// let color = Vec3::new(0.5, 0.5, 0.5);
/// assert_eq!(color.x, 0.5);
/// assert_eq!(color[0], 0.5);
///
/// let luminance = color.dot(Vec3::new(0.2627, 0.6780, 0.0593));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ, L for Ljg)
    pub x: f64,
    /// Y component (G for RGB, Y for XYZ, j for Ljg)
    pub y: f64,
    /// Z component (B for RGB, Z for XYZ, g for Ljg)
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_math::Vec3;
    ///
    /// let gray = Vec3::splat(0.5);
    /// assert_eq!(gray, Vec3::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another vector.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Sum of the components.
    #[inline]
    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(f64::abs)
    }

    /// Component-wise power.
    ///
    /// Negative bases follow `f64::powf` and produce NaN for fractional
    /// exponents; use [`Vec3::cbrt`] for real cube roots.
    #[inline]
    pub fn powf(self, exp: f64) -> Self {
        self.map(|v| v.powf(exp))
    }

    /// Component-wise real cube root, defined for negative values.
    #[inline]
    pub fn cbrt(self) -> Self {
        self.map(f64::cbrt)
    }

    /// Component-wise [`sign`]: -1, 0 or 1, NaN stays NaN.
    #[inline]
    pub fn signum(self) -> Self {
        self.map(sign)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Clamps each component to [min, max].
    #[inline]
    pub fn clamp(self, min: f64, max: f64) -> Self {
        self.map(|v| v.clamp(min, max))
    }

    /// Linear interpolation between self and other.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns other.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Returns the largest absolute component.
    #[inline]
    pub fn max_abs(self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Component-wise
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

// Component-wise
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> glam::DVec3 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_cbrt_negative() {
        let v = Vec3::new(-8.0, 27.0, 0.0).cbrt();
        assert!((v.x + 2.0).abs() < 1e-12);
        assert!((v.y - 3.0).abs() < 1e-12);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_vec3_powf_negative_is_nan() {
        let v = Vec3::new(-8.0, 8.0, 1.0).powf(1.0 / 3.0);
        assert!(v.x.is_nan());
        assert!(!v.is_finite());
    }

    #[test]
    fn test_vec3_signum() {
        let v = Vec3::new(-3.5, 0.0, 2.0).signum();
        assert_eq!(v, Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(sign(-0.0), 0.0);
        assert!(sign(f64::NAN).is_nan());
    }

    #[test]
    fn test_vec3_lerp() {
        assert_eq!(Vec3::ZERO.lerp(Vec3::ONE, 0.5), Vec3::splat(0.5));
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.sum(), 6.0);
        assert_eq!(Vec3::new(-4.0, 2.0, 3.0).max_abs(), 4.0);
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!(Vec3::from(v.to_glam()), v);
    }
}
