//! 3x3 matrix type for colour transformations.
//!
//! [`Mat3`] is used for RGB-to-XYZ conversions, chromatic adaptation,
//! colour-vision-deficiency simulation and other linear colour transforms.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```

use crate::Vec3;
use std::ops::{Index, Mul};

/// Determinants below this magnitude are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// A 3x3 matrix for colour transformations.
///
/// Stored in row-major order. Use [`Mat3::from_rows`] or [`Mat3::from_cols`]
/// to construct from component arrays.
///
/// # Example
///
/// ```rust
/// use tinct_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[f64; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a matrix from Vec3 columns.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self::from_rows([
            [d0, 0.0, 0.0],
            [0.0, d1, 0.0],
            [0.0, 0.0, d2],
        ])
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[0][i], self.m[1][i], self.m[2][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Determinant, computed through glam.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.to_glam().determinant()
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular or not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 4.0, 8.0);
    /// let inv = m.inverse().unwrap();
    /// assert!((m * inv).approx_eq(&Mat3::IDENTITY, 1e-12));
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }

        let m = &self.m;
        let inv_det = 1.0 / det;

        // Adjugate scaled by 1/det
        Some(Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }

    /// Applies the matrix to a column vector; same as `self * v`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Matrix product `self * other`, computed through glam.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_glam(self.to_glam() * other.to_glam())
    }

    /// Element-wise linear interpolation between two matrices.
    ///
    /// Used to blend between tabulated transforms.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = crate::lerp(self.m[i][j], other.m[i][j], t);
            }
        }
        result
    }

    /// Sum of each row, i.e. the image of (1, 1, 1).
    #[inline]
    pub fn row_sums(&self) -> Vec3 {
        self.transform(Vec3::ONE)
    }

    /// Returns true if every element differs from `other` by at most `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam DMat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&self.transpose().m)
    }

    /// Creates from glam DMat3.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Mul<f64> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        let mut result = self;
        result.m.iter_mut().flatten().for_each(|v| *v *= rhs);
        result
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3_transpose() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let t = m.transpose();
        assert_eq!(t.m[0][1], 4.0);
        assert_eq!(t.m[1][0], 2.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_mat3_determinant() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert!((m.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mat3_inverse() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let inv = m.inverse().unwrap();
        assert!((m * inv).approx_eq(&Mat3::IDENTITY, 1e-12));
    }

    #[test]
    fn test_mat3_singular() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0], // Row 2 = 2 * Row 1
            [1.0, 1.0, 1.0],
        ]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat3_lerp() {
        let a = Mat3::IDENTITY;
        let b = Mat3::diagonal(3.0, 3.0, 3.0);
        assert_eq!(a.lerp(&b, 0.5), Mat3::diagonal(2.0, 2.0, 2.0));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_mat3_row_sums() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_eq!(m.row_sums(), Vec3::new(6.0, 5.0, 11.0));
    }

    #[test]
    fn test_mat3_glam_roundtrip() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let g = m.to_glam();
        let v = Vec3::new(0.3, -0.2, 0.9);
        assert!(Vec3::from(g * v.to_glam()).distance(m * v) < 1e-12);
        assert_eq!(Mat3::from_glam(g), m);
    }
}
