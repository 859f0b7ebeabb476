//! Quaternions.

use crate::{
    angle::{Angle, Degrees, Radians},
    error::{MathError, Result},
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A quaternion `xi + yj + zk + w`, where `w` is the real part.
///
/// A quaternion of unit length represents a rotation. Most constructors
/// return normalized quaternions, but the fields are public and nothing keeps
/// a quaternion normalized after direct mutation. Operations that interpret
/// the quaternion as a rotation assume it has unit length unless stated
/// otherwise.
///
/// Euler angles are in degrees and use the convention where
/// [`Quaternion::euler`]`(x, y, z)` rotates by `x` about the X-axis, then by
/// `z` about the Z-axis and finally by `y` about the Y-axis.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    /// The quaternion representing no rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Tolerance for treating two rotations as equal in [`Self::angle`] and
    /// two directions as opposite in [`Self::from_to_rotation`].
    pub const EPSILON: f32 = 1e-6;

    /// Above this dot product, [`Self::slerp`] falls back to normalized linear
    /// interpolation.
    pub const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

    /// Beyond this value of `xy + zw` (relative to the squared norm), the
    /// Z-angle is snapped to ±90 degrees when extracting Euler angles. This
    /// corresponds to a Z-angle within about 0.1 degrees of ±90.
    const GIMBAL_LOCK_THRESHOLD: f32 = 0.5 - 1e-6;

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Sets all four components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        *self = Self::new(x, y, z, w);
    }

    /// The imaginary part `(x, y, z)`.
    #[inline]
    pub const fn imag(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the component at `index`, where 0, 1, 2 and 3 correspond to
    /// `x`, `y`, `z` and `w`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if `index` is larger than 3.
    pub fn component(&self, index: usize) -> Result<f32> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::IndexOutOfRange { index, len: 4 }),
        }
    }

    /// Sets the component at `index`. See [`Self::component`].
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if `index` is larger than 3.
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            _ => return Err(MathError::IndexOutOfRange { index, len: 4 }),
        }
        Ok(())
    }

    /// The four-term scalar product of the two quaternions.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn squared_norm(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.squared_norm().sqrt()
    }

    /// Returns a copy of the quaternion divided by its norm.
    ///
    /// The quaternion must be nonzero, otherwise all components of the result
    /// are non-finite. Use [`Self::try_normalized`] when the input may be
    /// degenerate.
    #[inline]
    pub fn normalized(&self) -> Self {
        let inv_norm = self.norm().recip();
        Self::new(
            self.x * inv_norm,
            self.y * inv_norm,
            self.z * inv_norm,
            self.w * inv_norm,
        )
    }

    /// Normalizes the quaternion in place. See [`Self::normalized`].
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns a normalized copy of the quaternion.
    ///
    /// # Errors
    /// Returns [`MathError::ZeroLength`] if the norm is zero or not finite.
    pub fn try_normalized(&self) -> Result<Self> {
        let norm = self.norm();
        if norm > 0.0 && norm.is_finite() {
            Ok(self.normalized())
        } else {
            Err(MathError::ZeroLength)
        }
    }

    /// The conjugate `(-x, -y, -z, w)`, which is the inverse rotation for a
    /// unit quaternion.
    #[inline]
    pub const fn inverse(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub const fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// The angle of the smallest rotation taking `self` to `other`, in the
    /// range `[0, 180]` degrees. Rotations within [`Self::EPSILON`] of each
    /// other are reported as zero degrees apart.
    pub fn angle(&self, other: &Self) -> Degrees {
        let difference = other * self.inverse();
        let cos_half_angle = difference.w.abs().min(1.0);
        if cos_half_angle > 1.0 - Self::EPSILON {
            return Degrees(0.0);
        }
        Radians(2.0 * cos_half_angle.acos()).as_degrees()
    }

    /// Creates a rotation of `angle` about `axis`. The axis is normalized
    /// first, and a zero axis gives the identity.
    pub fn angle_axis(angle: impl Angle, axis: &Vector3) -> Self {
        let axis = axis.normalized();
        if axis == Vector3::ZERO {
            log::trace!("Zero rotation axis, using identity rotation");
            return Self::IDENTITY;
        }
        let (sin_half_angle, cos_half_angle) = (0.5 * angle.radians()).sin_cos();
        Self::new(
            axis.x * sin_half_angle,
            axis.y * sin_half_angle,
            axis.z * sin_half_angle,
            cos_half_angle,
        )
        .normalized()
    }

    /// Creates a rotation from Euler angles in degrees.
    pub fn euler(x: f32, y: f32, z: f32) -> Self {
        let (sx, cx) = (0.5 * x.to_radians()).sin_cos();
        let (sy, cy) = (0.5 * y.to_radians()).sin_cos();
        let (sz, cz) = (0.5 * z.to_radians()).sin_cos();
        Self::new(
            sy * sz * cx + cy * cz * sx,
            sy * cz * cx + cy * sz * sx,
            cy * sz * cx - sy * cz * sx,
            cy * cz * cx - sy * sz * sx,
        )
        .normalized()
    }

    /// Creates a rotation from a vector of Euler angles in degrees. See
    /// [`Self::euler`].
    #[inline]
    pub fn from_euler_angles(euler: &Vector3) -> Self {
        Self::euler(euler.x, euler.y, euler.z)
    }

    /// Returns the Euler angles in degrees, each in the range (-180, 180].
    ///
    /// This is the inverse of [`Self::from_euler_angles`] as long as the
    /// Z-angle is strictly between -90 and 90 degrees. Within about 0.1 degrees
    /// of ±90 the X- and Y-rotations become degenerate, so the Z-angle is
    /// reported as exactly ±90 and the X-angle as zero.
    pub fn euler_angles(&self) -> Vector3 {
        let Self { x, y, z, w } = *self;
        let (xx, yy, zz, ww) = (x * x, y * y, z * z, w * w);
        let unit = xx + yy + zz + ww;
        let test = x * y + z * w;

        if test > Self::GIMBAL_LOCK_THRESHOLD * unit {
            return Vector3::new(
                0.0,
                Radians(2.0 * x.atan2(w)).as_degrees().wrapped().0,
                90.0,
            );
        }
        if test < -Self::GIMBAL_LOCK_THRESHOLD * unit {
            return Vector3::new(
                0.0,
                Radians(-2.0 * x.atan2(w)).as_degrees().wrapped().0,
                -90.0,
            );
        }

        let heading = (2.0 * (y * w - x * z)).atan2(xx - yy - zz + ww);
        let attitude = (2.0 * test / unit).clamp(-1.0, 1.0).asin();
        let bank = (2.0 * (x * w - y * z)).atan2(-xx + yy - zz + ww);

        Vector3::new(bank, heading, attitude).mapped(f32::to_degrees)
    }

    /// Replaces this rotation with the one given by the Euler angles in
    /// degrees.
    #[inline]
    pub fn set_euler_angles(&mut self, euler: &Vector3) {
        *self = Self::from_euler_angles(euler);
    }

    /// Creates the smallest rotation that takes the direction of `from` to the
    /// direction of `to`.
    ///
    /// Only the directions matter. If either vector normalizes to zero (see
    /// [`Vector3::normalized`]), the identity is returned. If the vectors
    /// point in opposite directions, a half-turn about some axis perpendicular
    /// to `from` is returned.
    pub fn from_to_rotation(from: &Vector3, to: &Vector3) -> Self {
        let from = from.normalized();
        let to = to.normalized();
        if from == Vector3::ZERO || to == Vector3::ZERO {
            log::trace!("Zero vector given for from-to rotation, using identity rotation");
            return Self::IDENTITY;
        }

        let real = 1.0 + from.dot(&to);
        if real <= Self::EPSILON {
            log::trace!("Opposite vectors given for from-to rotation, using half-turn");
            let mut axis = Vector3::RIGHT.cross(&from);
            if axis.squared_magnitude() <= Self::EPSILON {
                axis = Vector3::UP.cross(&from);
            }
            let axis = axis.normalized();
            return Self::new(axis.x, axis.y, axis.z, 0.0);
        }

        let imag = from.cross(&to);
        Self::new(imag.x, imag.y, imag.z, real).normalized()
    }

    /// Replaces this rotation with [`Self::from_to_rotation`].
    #[inline]
    pub fn set_from_to_rotation(&mut self, from: &Vector3, to: &Vector3) {
        *self = Self::from_to_rotation(from, to);
    }

    /// Creates a rotation that turns the Z-axis towards `forward`, keeping the
    /// Y-axis as close as possible to [`Vector3::UP`].
    #[inline]
    pub fn look_rotation(forward: &Vector3) -> Self {
        Self::look_rotation_with_up(forward, &Vector3::UP)
    }

    /// Creates a rotation that turns the Z-axis towards `forward`, keeping the
    /// Y-axis as close as possible to `upwards`.
    ///
    /// A zero `forward` gives the identity. If `upwards` is zero or parallel
    /// to `forward`, the result is the smallest rotation from the Z-axis to
    /// `forward`.
    pub fn look_rotation_with_up(forward: &Vector3, upwards: &Vector3) -> Self {
        let forward = forward.normalized();
        if forward == Vector3::ZERO {
            log::trace!("Zero look direction, using identity rotation");
            return Self::IDENTITY;
        }

        let right = upwards.cross(&forward).normalized();
        if right == Vector3::ZERO {
            return Self::from_to_rotation(&Vector3::FORWARD, &forward);
        }
        let up = forward.cross(&right);

        Self::from_rotation_basis(&right, &up, &forward)
    }

    /// Replaces this rotation with [`Self::look_rotation`].
    #[inline]
    pub fn set_look_rotation(&mut self, view: &Vector3) {
        *self = Self::look_rotation(view);
    }

    /// Replaces this rotation with [`Self::look_rotation_with_up`].
    #[inline]
    pub fn set_look_rotation_with_up(&mut self, view: &Vector3, up: &Vector3) {
        *self = Self::look_rotation_with_up(view, up);
    }

    /// Interpolates linearly from `self` to `other` with `t` clamped to
    /// `[0, 1]`, and normalizes the result.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.lerp_unclamped(other, t.clamp(0.0, 1.0))
    }

    /// Interpolates linearly from `self` to `other` and normalizes the
    /// result. `t` is not clamped.
    pub fn lerp_unclamped(&self, other: &Self, t: f32) -> Self {
        Self::new(
            (other.x - self.x) * t + self.x,
            (other.y - self.y) * t + self.y,
            (other.z - self.z) * t + self.z,
            (other.w - self.w) * t + self.w,
        )
        .normalized()
    }

    /// Interpolates spherically from `self` to `other` with `t` clamped to
    /// `[0, 1]`. See [`Self::slerp_unclamped`].
    #[inline]
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        self.slerp_unclamped(other, t.clamp(0.0, 1.0))
    }

    /// Interpolates spherically from `self` to `other` with constant angular
    /// velocity. `t` is not clamped.
    ///
    /// Both inputs are normalized first. When they lie in opposite
    /// hemispheres, `self` is negated so that the interpolation follows the
    /// shortest arc. For nearly parallel inputs, normalized linear
    /// interpolation is used instead.
    pub fn slerp_unclamped(&self, other: &Self, t: f32) -> Self {
        let mut a = self.normalized();
        let b = other.normalized();

        let mut dot = a.dot(&b);
        if dot < 0.0 {
            a = a.negated();
            dot = -dot;
        }

        if dot > Self::SLERP_LINEAR_THRESHOLD {
            log::trace!("Nearly parallel quaternions, falling back to lerp");
            return a.lerp_unclamped(&b, t);
        }

        let angle = dot.min(1.0).acos();
        let inv_sin_angle = angle.sin().recip();
        let weight_a = ((1.0 - t) * angle).sin() * inv_sin_angle;
        let weight_b = (t * angle).sin() * inv_sin_angle;

        Self::new(
            a.x * weight_a + b.x * weight_b,
            a.y * weight_a + b.y * weight_b,
            a.z * weight_a + b.z * weight_b,
            a.w * weight_a + b.w * weight_b,
        )
    }

    /// Rotates `self` towards `target` by at most `max_delta`.
    ///
    /// The target is returned once it is within `max_delta`. A negative
    /// `max_delta` rotates away from the target.
    pub fn rotate_towards(&self, target: &Self, max_delta: impl Angle) -> Self {
        let angle = self.angle(target).0;
        if angle == 0.0 {
            return *target;
        }
        let t = max_delta.degrees() / angle;
        if t >= 1.0 {
            log::trace!("Target rotation within {angle} degrees, snapping to it");
            return *target;
        }
        self.slerp_unclamped(target, t)
    }

    /// Returns the rotation angle, in the range `[0, 360]` degrees, and the
    /// unit rotation axis.
    ///
    /// For rotations too small to determine an axis, the axis is
    /// [`Vector3::RIGHT`]. The quaternion is normalized first, so it must be
    /// nonzero; a zero quaternion gives a non-finite angle and axis, as for
    /// [`Self::normalized`].
    pub fn to_angle_axis(&self) -> (Degrees, Vector3) {
        let mut q = self.normalized();
        if q.w.abs() > 1.0 {
            q.w = q.w.signum();
        }
        let angle = Radians(2.0 * q.w.acos()).as_degrees();

        let sin_half_angle = (1.0 - q.w * q.w).sqrt();
        let axis = if sin_half_angle < 1e-4 {
            Vector3::RIGHT
        } else {
            q.imag() * sin_half_angle.recip()
        };
        (angle, axis)
    }

    /// Rotates the given vector using `q v q⁻¹`. The quaternion is assumed to
    /// be normalized.
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        let imag = self.imag();
        let t = imag.cross(vector) * 2.0;
        vector + t * self.w + imag.cross(&t)
    }

    /// Treats `euler` as Euler angles in degrees, applies this rotation to the
    /// corresponding orientation and returns the resulting Euler angles.
    ///
    /// This composes orientations. Use [`Self::rotate_vector`] or `*` to rotate
    /// points and directions.
    pub fn compose_euler_angles(&self, euler: &Vector3) -> Vector3 {
        let mut orientation = Self::from_euler_angles(euler);
        orientation *= self;
        orientation.euler_angles()
    }

    /// Builds the rotation whose matrix has the given orthonormal columns.
    fn from_rotation_basis(x_axis: &Vector3, y_axis: &Vector3, z_axis: &Vector3) -> Self {
        let (m00, m10, m20) = (x_axis.x, x_axis.y, x_axis.z);
        let (m01, m11, m21) = (y_axis.x, y_axis.y, y_axis.z);
        let (m02, m12, m22) = (z_axis.x, z_axis.y, z_axis.z);
        let trace = m00 + m11 + m22;

        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        };
        q.normalized()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    *a = *a * b;
});

impl_binop!(Mul, mul, Quaternion, Vector3, Vector3, |q, v| {
    q.rotate_vector(v)
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |q| { q.negated() });

impl Index<usize> for Quaternion {
    type Output = f32;

    /// # Panics
    /// If `index` is larger than 3.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Quaternion {
    /// # Panics
    /// If `index` is larger than 3.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f32; 4] {
    fn from(q: Quaternion) -> Self {
        [q.x, q.y, q.z, q.w]
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl_approx_eq_for_fields!(Quaternion, [x, y, z, w]);
