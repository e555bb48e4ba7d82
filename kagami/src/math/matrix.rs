use approx::{AbsDiffEq, RelativeEq};
use std::ops::Mul;

use super::{common::FloatValueType, vector::Vec4};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Utilities/Mathematical_Routines.html#Matrix4x4

/// A row-major 4x4 `Matrix4x4`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Raw values in row-major order.
    pub m: [[T; 4]; 4],
}

impl<T> Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix4x4`.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        let ret = Self { m };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new `Matrix4x4` filled with zeroes.
    pub fn zeros() -> Self {
        Self {
            m: [[T::zero(); 4]; 4],
        }
    }

    /// Checks if this `Matrix4x4` contains NaNs.
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|v| v.is_nan())
    }

    /// Returns the inverse of this `Matrix4x4`.
    ///
    /// Panics if the matrix is singular.
    pub fn inverted(&self) -> Self {
        // Gauss-Jordan elimination with full pivoting.
        // The inverse is built in place by doing the same elementary row operations on an
        // implicit identity matrix. Column swaps from pivoting are recorded and undone at the end.

        let mut mi = self.m;
        let mut indxc = [0, 0, 0, 0];
        let mut indxr = [0, 0, 0, 0];
        let mut ipiv = [0, 0, 0, 0];

        for col in 0..4 {
            let mut icol = 0;
            let mut irow = 0;
            let mut big = T::zero();

            // Largest value that is not already part of a pivot
            for row in 0..4 {
                if ipiv[row] != 1 {
                    for (rcol, &piv) in ipiv.iter().enumerate() {
                        if (piv == 0) && (mi[row][rcol].abs() > big) {
                            big = mi[row][rcol].abs();
                            irow = row;
                            icol = rcol;
                        }
                    }
                }
            }
            ipiv[icol] += 1;

            if irow != icol {
                mi.swap(irow, icol);
            }

            indxr[col] = irow;
            indxc[col] = icol;

            assert!(mi[icol][icol] != T::zero(), "Can't invert, singular matrix");

            let pivinv = T::one() / mi[icol][icol];
            mi[icol][icol] = T::one();
            for l in 0..4 {
                mi[icol][l] *= pivinv;
            }

            // Zero the pivot column on other rows
            for row in 0..4 {
                if row != icol {
                    let factor = mi[row][icol];
                    mi[row][icol] = T::zero();
                    for rcol in 0..4 {
                        mi[row][rcol] -= factor * mi[icol][rcol];
                    }
                }
            }
        }

        for col in (0..4).rev() {
            if indxr[col] != indxc[col] {
                for row in &mut mi {
                    row.swap(indxr[col], indxc[col]);
                }
            }
        }
        Matrix4x4::new(mi)
    }
}

// By ref is about twice as fast as by value so let's just endure the syntax
impl<'a, 'b, T> Mul<&'b Matrix4x4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Matrix4x4<T>;

    fn mul(self, other: &'b Matrix4x4<T>) -> Matrix4x4<T> {
        let mut ret = Matrix4x4::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[row][col] = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col]
                    + self.m[row][3] * other.m[3][col];
            }
        }
        debug_assert!(!ret.has_nans());
        ret
    }
}

impl<'a, T> Mul<Vec4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        let m = &self.m;
        Vec4 {
            x: m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3] * v.w,
            y: m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3] * v.w,
            z: m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3] * v.w,
            w: m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3] * v.w,
        }
    }
}

impl<T> AbsDiffEq for Matrix4x4<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix4x4<T>
where
    T: FloatValueType + RelativeEq + AbsDiffEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
