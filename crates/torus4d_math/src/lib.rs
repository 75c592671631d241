//! 4D Mathematics Library
//!
//! Pure math kernel for the Torus4D renderer. Nothing in this crate holds
//! state: every function maps its inputs to a fresh value.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D point with x, y, z, w components
//! - [`Vec3`] - 3D point produced by the 4D→3D projection
//! - [`Angles4D`] / [`Angles3D`] - orientation angles in radians
//!
//! ## Operations
//!
//! - [`rotate_4d`] - XY, XZ, XW, YZ planar rotations in that order
//! - [`rotate_3d`] - X, Y, Z axis rotations in that order
//! - [`Perspective4D`] / [`Perspective3D`] - perspective divides

mod vec4;
mod vec3;
pub mod rotation;
pub mod projection;

pub use vec4::Vec4;
pub use vec3::Vec3;
pub use rotation::{rotate_3d, rotate_4d, rotate_in_plane, Angles3D, Angles4D, RotationPlane};
pub use projection::{
    project_3d_to_2d, project_4d_to_3d, Perspective3D, Perspective4D, DEFAULT_SINGULARITY_EPSILON,
};
