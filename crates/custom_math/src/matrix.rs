//! Matrices.

use crate::{
    error::{MathError, Result},
    quaternion::Quaternion,
    vector::{Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 4x4 matrix of `f32` for transforming homogeneous column vectors.
///
/// Field `mij` is the element at row `i` and column `j`. The fields are laid
/// out column by column, so the matrix can be cast with [`bytemuck`] to a
/// column-major `[f32; 16]`. Vectors are multiplied from the right, so the
/// translation of an affine transform lives in the last column.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4x4 {
    pub m00: f32,
    pub m10: f32,
    pub m20: f32,
    pub m30: f32,
    pub m01: f32,
    pub m11: f32,
    pub m21: f32,
    pub m31: f32,
    pub m02: f32,
    pub m12: f32,
    pub m22: f32,
    pub m32: f32,
    pub m03: f32,
    pub m13: f32,
    pub m23: f32,
    pub m33: f32,
}

impl Matrix4x4 {
    pub const ZERO: Self = Self::from_columns(
        Vector4::ZERO,
        Vector4::ZERO,
        Vector4::ZERO,
        Vector4::ZERO,
    );

    pub const IDENTITY: Self = Self::from_columns(
        Vector4::new(1.0, 0.0, 0.0, 0.0),
        Vector4::new(0.0, 1.0, 0.0, 0.0),
        Vector4::new(0.0, 0.0, 1.0, 0.0),
        Vector4::new(0.0, 0.0, 0.0, 1.0),
    );

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::ZERO
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_0: Vector4,
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
    ) -> Self {
        Self {
            m00: column_0.x,
            m10: column_0.y,
            m20: column_0.z,
            m30: column_0.w,
            m01: column_1.x,
            m11: column_1.y,
            m21: column_1.z,
            m31: column_1.w,
            m02: column_2.x,
            m12: column_2.y,
            m22: column_2.z,
            m32: column_2.w,
            m03: column_3.x,
            m13: column_3.y,
            m23: column_3.z,
            m33: column_3.w,
        }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(row_0: Vector4, row_1: Vector4, row_2: Vector4, row_3: Vector4) -> Self {
        Self::from_columns(row_0, row_1, row_2, row_3).transposed()
    }

    /// Creates a matrix scaling each axis independently by the corresponding
    /// component of `scaling`.
    #[inline]
    pub const fn scale(scaling: &Vector3) -> Self {
        let mut m = Self::IDENTITY;
        m.m00 = scaling.x;
        m.m11 = scaling.y;
        m.m22 = scaling.z;
        m
    }

    /// Creates a matrix translating points by `translation`.
    #[inline]
    pub const fn translate(translation: &Vector3) -> Self {
        let mut m = Self::IDENTITY;
        m.m03 = translation.x;
        m.m13 = translation.y;
        m.m23 = translation.z;
        m
    }

    /// Creates the rotation matrix corresponding to the given quaternion. The
    /// quaternion is assumed to be normalized.
    pub fn rotate(rotation: &Quaternion) -> Self {
        let Quaternion { x, y, z, w } = *rotation;

        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, xy, xz) = (x * x2, x * y2, x * z2);
        let (yy, yz, zz) = (y * y2, y * z2, z * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        let mut m = Self::IDENTITY;
        m.m00 = 1.0 - (yy + zz);
        m.m10 = xy + wz;
        m.m20 = xz - wy;

        m.m01 = xy - wz;
        m.m11 = 1.0 - (xx + zz);
        m.m21 = yz + wx;

        m.m02 = xz + wy;
        m.m12 = yz - wx;
        m.m22 = 1.0 - (xx + yy);
        m
    }

    /// Creates the transform that scales, then rotates and finally translates,
    /// computed as `translate(position) * rotate(rotation) * scale(scaling)`.
    pub fn trs(position: &Vector3, rotation: &Quaternion, scaling: &Vector3) -> Self {
        Self::translate(position) * Self::rotate(rotation) * Self::scale(scaling)
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        assert!(i < 4 && j < 4, "index out of bounds");
        bytemuck::cast_ref::<Self, [f32; 16]>(self)[4 * j + i]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        assert!(i < 4 && j < 4, "index out of bounds");
        &mut bytemuck::cast_mut::<Self, [f32; 16]>(self)[4 * j + i]
    }

    /// Returns row `index`, or the zero vector if `index` is larger than 3.
    #[inline]
    pub fn row(&self, index: usize) -> Vector4 {
        self.try_row(index).unwrap_or(Vector4::ZERO)
    }

    /// Returns row `index`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if `index` is larger than 3.
    pub fn try_row(&self, index: usize) -> Result<Vector4> {
        match index {
            0 => Ok(Vector4::new(self.m00, self.m01, self.m02, self.m03)),
            1 => Ok(Vector4::new(self.m10, self.m11, self.m12, self.m13)),
            2 => Ok(Vector4::new(self.m20, self.m21, self.m22, self.m23)),
            3 => Ok(Vector4::new(self.m30, self.m31, self.m32, self.m33)),
            _ => Err(MathError::IndexOutOfRange { index, len: 4 }),
        }
    }

    /// Returns column `index`, or the zero vector if `index` is larger than 3.
    #[inline]
    pub fn column(&self, index: usize) -> Vector4 {
        self.try_column(index).unwrap_or(Vector4::ZERO)
    }

    /// Returns column `index`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if `index` is larger than 3.
    pub fn try_column(&self, index: usize) -> Result<Vector4> {
        match index {
            0 => Ok(Vector4::new(self.m00, self.m10, self.m20, self.m30)),
            1 => Ok(Vector4::new(self.m01, self.m11, self.m21, self.m31)),
            2 => Ok(Vector4::new(self.m02, self.m12, self.m22, self.m32)),
            3 => Ok(Vector4::new(self.m03, self.m13, self.m23, self.m33)),
            _ => Err(MathError::IndexOutOfRange { index, len: 4 }),
        }
    }

    /// Sets row `index` to `row`. Does nothing if `index` is larger than 3.
    #[inline]
    pub fn set_row(&mut self, index: usize, row: Vector4) {
        let _ = self.try_set_row(index, row);
    }

    /// Sets row `index` to `row`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if `index` is larger than 3, in
    /// which case the matrix is left unchanged.
    pub fn try_set_row(&mut self, index: usize, row: Vector4) -> Result<()> {
        let Vector4 { x, y, z, w } = row;
        match index {
            0 => (self.m00, self.m01, self.m02, self.m03) = (x, y, z, w),
            1 => (self.m10, self.m11, self.m12, self.m13) = (x, y, z, w),
            2 => (self.m20, self.m21, self.m22, self.m23) = (x, y, z, w),
            3 => (self.m30, self.m31, self.m32, self.m33) = (x, y, z, w),
            _ => return Err(MathError::IndexOutOfRange { index, len: 4 }),
        }
        Ok(())
    }

    /// Sets column `index` to `column`. Does nothing if `index` is larger
    /// than 3.
    #[inline]
    pub fn set_column(&mut self, index: usize, column: Vector4) {
        let _ = self.try_set_column(index, column);
    }

    /// Sets column `index` to `column`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if `index` is larger than 3, in
    /// which case the matrix is left unchanged.
    pub fn try_set_column(&mut self, index: usize, column: Vector4) -> Result<()> {
        let Vector4 { x, y, z, w } = column;
        match index {
            0 => (self.m00, self.m10, self.m20, self.m30) = (x, y, z, w),
            1 => (self.m01, self.m11, self.m21, self.m31) = (x, y, z, w),
            2 => (self.m02, self.m12, self.m22, self.m32) = (x, y, z, w),
            3 => (self.m03, self.m13, self.m23, self.m33) = (x, y, z, w),
            _ => return Err(MathError::IndexOutOfRange { index, len: 4 }),
        }
        Ok(())
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self {
            m00: self.m00,
            m10: self.m01,
            m20: self.m02,
            m30: self.m03,
            m01: self.m10,
            m11: self.m11,
            m21: self.m12,
            m31: self.m13,
            m02: self.m20,
            m12: self.m21,
            m22: self.m22,
            m32: self.m23,
            m03: self.m30,
            m13: self.m31,
            m23: self.m32,
            m33: self.m33,
        }
    }

    /// Transposes this matrix in place.
    #[inline]
    pub fn transpose(&mut self) {
        std::mem::swap(&mut self.m01, &mut self.m10);
        std::mem::swap(&mut self.m02, &mut self.m20);
        std::mem::swap(&mut self.m03, &mut self.m30);
        std::mem::swap(&mut self.m12, &mut self.m21);
        std::mem::swap(&mut self.m13, &mut self.m31);
        std::mem::swap(&mut self.m23, &mut self.m32);
    }

    /// Returns the diagonal of the upper-left 3x3 block.
    ///
    /// This equals the scale factors only for transforms without rotation or
    /// shear.
    #[inline]
    pub const fn lossy_scale(&self) -> Vector3 {
        Vector3::new(self.m00, self.m11, self.m22)
    }

    /// Transforms the given point, including translation. The homogeneous
    /// coordinate of the result is discarded.
    #[inline]
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        (self * Vector4::from_point(point)).xyz()
    }

    /// Transforms the given direction, ignoring translation.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        (self * Vector4::from_direction(vector)).xyz()
    }
}

impl_binop!(Mul, mul, Matrix4x4, Vector4, Vector4, |m, v| {
    Vector4::new(
        m.m00 * v.x + m.m01 * v.y + m.m02 * v.z + m.m03 * v.w,
        m.m10 * v.x + m.m11 * v.y + m.m12 * v.z + m.m13 * v.w,
        m.m20 * v.x + m.m21 * v.y + m.m22 * v.z + m.m23 * v.w,
        m.m30 * v.x + m.m31 * v.y + m.m32 * v.z + m.m33 * v.w,
    )
});

impl_binop!(Mul, mul, Matrix4x4, Matrix4x4, Matrix4x4, |a, b| {
    Matrix4x4::from_columns(
        a * b.column(0),
        a * b.column(1),
        a * b.column(2),
        a * b.column(3),
    )
});

impl From<[[f32; 4]; 4]> for Matrix4x4 {
    /// Interprets the array as four columns.
    fn from(columns: [[f32; 4]; 4]) -> Self {
        let [c0, c1, c2, c3] = columns.map(Vector4::from);
        Self::from_columns(c0, c1, c2, c3)
    }
}

impl From<Matrix4x4> for [[f32; 4]; 4] {
    /// Gives the columns of the matrix.
    fn from(m: Matrix4x4) -> Self {
        bytemuck::cast(m)
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..4 {
            let row = self.row(i);
            writeln!(f, "[{}, {}, {}, {}]", row.x, row.y, row.z, row.w)?;
        }
        Ok(())
    }
}

impl_approx_eq_for_fields!(
    Matrix4x4,
    [m00, m10, m20, m30, m01, m11, m21, m31, m02, m12, m22, m32, m03, m13, m23, m33]
);
