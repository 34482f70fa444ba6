//! 3x3 Matrix operations for the tristimulus stage
//!
//! The two fixed matrices map linear sRGB to the SR XYZ waypoint and back.
//! Both are hard-coded rather than derived from one another at runtime, so
//! their product is identity only to about 3e-4.

use std::ops::Mul;

/// Linear sRGB → SR XYZ
pub const LRGB_TO_SR_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.32053, 0.63692, 0.04256],
    [0.161987, 0.756636, 0.081376],
    [0.017228, 0.10866, 0.874112],
]);

/// SR XYZ → linear sRGB
pub const SR_XYZ_TO_LRGB: Matrix3x3 = Matrix3x3::new([
    [5.435679, -4.599131, 0.163593],
    [-1.16809, 2.327977, -0.159798],
    [0.03784, -0.198564, 1.160644],
]);

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        Self { m }
    }

    /// Check if approximately equal to another matrix
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    #[inline]
    fn mul(self, rhs: [f64; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}
