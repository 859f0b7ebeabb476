//! Matrices and quaternions for composing 3D transforms.

#[macro_use]
mod macros;

pub mod angle;
pub mod error;
pub mod interop;
pub mod matrix;
pub mod quaternion;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use error::{MathError, Result};
pub use matrix::Matrix4x4;
pub use quaternion::Quaternion;
pub use vector::{Vector3, Vector4};
