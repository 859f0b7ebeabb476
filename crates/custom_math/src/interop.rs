//! Conversions to and from [`nalgebra`] types.

use crate::{
    matrix::Matrix4x4,
    quaternion::Quaternion,
    vector::{Vector3, Vector4},
};

impl From<nalgebra::Vector3<f32>> for Vector3 {
    #[inline]
    fn from(vector: nalgebra::Vector3<f32>) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    #[inline]
    fn from(vector: Vector3) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl From<nalgebra::Vector4<f32>> for Vector4 {
    #[inline]
    fn from(vector: nalgebra::Vector4<f32>) -> Self {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }
}

impl From<Vector4> for nalgebra::Vector4<f32> {
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }
}

impl From<nalgebra::Quaternion<f32>> for Quaternion {
    #[inline]
    fn from(quaternion: nalgebra::Quaternion<f32>) -> Self {
        Self::new(quaternion.i, quaternion.j, quaternion.k, quaternion.w)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<f32> {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        Self::new(quaternion.w, quaternion.x, quaternion.y, quaternion.z)
    }
}

impl From<nalgebra::Matrix4<f32>> for Matrix4x4 {
    #[inline]
    fn from(matrix: nalgebra::Matrix4<f32>) -> Self {
        Self::from(<[[f32; 4]; 4]>::from(matrix))
    }
}

impl From<Matrix4x4> for nalgebra::Matrix4<f32> {
    #[inline]
    fn from(matrix: Matrix4x4) -> Self {
        Self::from(<[[f32; 4]; 4]>::from(matrix))
    }
}
