//! Sequential planar rotations in 4D and 3D
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! Orientation here is not a single combined matrix. Each angle drives one
//! planar rotation and the stages are applied one after another, so the
//! composite depends on the stage order.
//!
//! Angles are `f64`. They accumulate for the whole session and are never
//! wrapped, so they grow large; the sine and cosine are taken in `f64` and
//! only the results are narrowed to `f32`.

use serde::{Serialize, Deserialize};

use crate::{Vec3, Vec4};

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPlane {
    XY,
    XZ,
    XW,
    YZ,
    YW,
    ZW,
}

impl RotationPlane {
    /// Stage order used by [`rotate_4d`]
    pub const ROTATE_4D_ORDER: [RotationPlane; 4] =
        [RotationPlane::XY, RotationPlane::XZ, RotationPlane::XW, RotationPlane::YZ];

    /// Component indices (into x, y, z, w) spanned by this plane
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }
}

/// Rotate the pair `(a, b)` by `angle`, counter-clockwise positive
#[inline]
pub fn rotate_in_plane(a: f32, b: f32, angle: f64) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    let (sin, cos) = (sin as f32, cos as f32);
    (a * cos - b * sin, a * sin + b * cos)
}

impl Vec4 {
    /// Rotate within a single plane, leaving the other two components untouched
    pub fn rotated_in_plane(self, plane: RotationPlane, angle: f64) -> Vec4 {
        let mut c = self.to_array();
        let (i, j) = plane.axes();
        let (a, b) = rotate_in_plane(c[i], c[j], angle);
        c[i] = a;
        c[j] = b;
        Vec4::from(c)
    }
}

/// 4D orientation angles in radians
///
/// Each field drives one plane of [`rotate_4d`]: `x` → XY, `z` → XZ,
/// `w` → XW, `y` → YZ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Angles4D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Angles4D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Angle used for a given plane of [`rotate_4d`]
    pub fn for_plane(&self, plane: RotationPlane) -> f64 {
        match plane {
            RotationPlane::XY => self.x,
            RotationPlane::XZ => self.z,
            RotationPlane::XW => self.w,
            RotationPlane::YZ => self.y,
            RotationPlane::YW | RotationPlane::ZW => 0.0,
        }
    }

    /// Add `delta * scale` to every angle
    pub fn advance(&mut self, delta: Angles4D, scale: f64) {
        self.x += delta.x * scale;
        self.y += delta.y * scale;
        self.z += delta.z * scale;
        self.w += delta.w * scale;
    }
}

impl std::ops::Neg for Angles4D {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// 3D orientation angles in radians, one per axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Angles3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Angles3D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Add `delta * scale` to every angle
    pub fn advance(&mut self, delta: Angles3D, scale: f64) {
        self.x += delta.x * scale;
        self.y += delta.y * scale;
        self.z += delta.z * scale;
    }
}

impl std::ops::Neg for Angles3D {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Rotate a 4D point through the XY, XZ, XW and YZ planes, in that order
pub fn rotate_4d(point: Vec4, angles: Angles4D) -> Vec4 {
    RotationPlane::ROTATE_4D_ORDER
        .iter()
        .fold(point, |p, &plane| p.rotated_in_plane(plane, angles.for_plane(plane)))
}

/// Rotate a 3D point about the X, then Y, then Z axis
pub fn rotate_3d(point: Vec3, angles: Angles3D) -> Vec3 {
    let Vec3 { x, y, z } = point;

    // X axis: (y, z) plane
    let (y, z) = rotate_in_plane(y, z, angles.x);
    // Y axis: (x, z) plane
    let (x, z) = rotate_in_plane(x, z, angles.y);
    // Z axis: (x, y) plane
    let (x, y) = rotate_in_plane(x, y, angles.z);

    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    fn approx_eq4(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < EPSILON
    }

    fn approx_eq3(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_rotate_in_plane_quarter_turn() {
        let (a, b) = rotate_in_plane(1.0, 0.0, FRAC_PI_2);
        assert!(a.abs() < EPSILON);
        assert!((b - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_planar_stage_preserves_norm() {
        let p = Vec4::new(0.3, -1.2, 0.7, 2.0);
        for i in 0..16 {
            let theta = i as f64 * 0.41 - 3.0;
            let r = p.rotated_in_plane(RotationPlane::XY, theta);
            let before = (p.x * p.x + p.y * p.y).sqrt();
            let after = (r.x * r.x + r.y * r.y).sqrt();
            assert!((before - after).abs() < EPSILON);
            // Other two coordinates untouched
            assert_eq!(r.z, p.z);
            assert_eq!(r.w, p.w);
        }
    }

    #[test]
    fn test_rotate_4d_identity() {
        let p = Vec4::new(0.15, -0.4, 1.1, 0.9);
        assert!(approx_eq4(rotate_4d(p, Angles4D::ZERO), p));
    }

    #[test]
    fn test_rotate_3d_identity() {
        let p = Vec3::new(0.5, -2.0, 1.25);
        assert!(approx_eq3(rotate_3d(p, Angles3D::ZERO), p));
    }

    #[test]
    fn test_rotate_4d_preserves_length() {
        let p = Vec4::new(1.0, 2.0, -0.5, 0.25);
        let r = rotate_4d(p, Angles4D::new(0.3, 1.7, -0.9, 2.2));
        assert!((p.length() - r.length()).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_3d_preserves_length() {
        let p = Vec3::new(1.0, 2.0, -0.5);
        let r = rotate_3d(p, Angles3D::new(0.3, 1.7, -0.9));
        assert!((p.length() - r.length()).abs() < 1e-4);
    }

    #[test]
    fn test_single_plane_round_trip() {
        let p = Vec4::new(0.2, 0.4, 0.6, 0.8);
        for plane in RotationPlane::ROTATE_4D_ORDER {
            let there = p.rotated_in_plane(plane, 1.3);
            let back = there.rotated_in_plane(plane, -1.3);
            assert!(approx_eq4(back, p), "round trip failed for {:?}", plane);
        }
    }

    #[test]
    fn test_rotate_3d_single_axis_round_trip() {
        let p = Vec3::new(0.2, -0.4, 0.6);
        for angles in [
            Angles3D::new(0.8, 0.0, 0.0),
            Angles3D::new(0.0, -1.1, 0.0),
            Angles3D::new(0.0, 0.0, 2.5),
        ] {
            let back = rotate_3d(rotate_3d(p, angles), -angles);
            assert!(approx_eq3(back, p));
        }
    }

    #[test]
    fn test_rotate_4d_single_angle_round_trip() {
        let p = Vec4::new(0.2, -0.4, 0.6, 1.0);
        for angles in [
            Angles4D::new(0.8, 0.0, 0.0, 0.0),
            Angles4D::new(0.0, 1.4, 0.0, 0.0),
            Angles4D::new(0.0, 0.0, -0.6, 0.0),
            Angles4D::new(0.0, 0.0, 0.0, 2.9),
        ] {
            let back = rotate_4d(rotate_4d(p, angles), -angles);
            assert!(approx_eq4(back, p));
        }
    }

    #[test]
    fn test_rotate_4d_is_order_dependent() {
        let angles = Angles4D::new(FRAC_PI_2, 0.0, FRAC_PI_2, 0.0);

        // +x → +y after XY; the XZ stage then sees x == 0
        let r = rotate_4d(Vec4::new(1.0, 0.0, 0.0, 0.0), angles);
        assert!(approx_eq4(r, Vec4::new(0.0, 1.0, 0.0, 0.0)));

        // +y → -x after XY, -x → -z after XZ.
        // XZ first would have left +y alone and XY would then give -x.
        let r = rotate_4d(Vec4::new(0.0, 1.0, 0.0, 0.0), angles);
        assert!(approx_eq4(r, Vec4::new(0.0, 0.0, -1.0, 0.0)));
    }

    #[test]
    fn test_rotate_4d_xw_stage_moves_into_w() {
        let r = rotate_4d(Vec4::new(1.0, 0.0, 0.0, 0.0), Angles4D::new(0.0, 0.0, 0.0, FRAC_PI_2));
        assert!(approx_eq4(r, Vec4::new(0.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rotate_3d_half_turn_about_x() {
        let r = rotate_3d(Vec3::new(1.0, 1.0, 0.0), Angles3D::new(PI, 0.0, 0.0));
        assert!(approx_eq3(r, Vec3::new(1.0, -1.0, 0.0)));
    }

    #[test]
    fn test_every_plane_touches_only_its_axes() {
        let p = Vec4::new(0.1, 0.2, 0.3, 0.4);
        let all = [
            RotationPlane::XY,
            RotationPlane::XZ,
            RotationPlane::XW,
            RotationPlane::YZ,
            RotationPlane::YW,
            RotationPlane::ZW,
        ];
        for plane in all {
            let (i, j) = plane.axes();
            let before = p.to_array();
            let after = p.rotated_in_plane(plane, 0.9).to_array();
            for k in 0..4 {
                if k != i && k != j {
                    assert_eq!(after[k], before[k], "{:?} moved axis {}", plane, k);
                }
            }
            assert!((after[i] - before[i]).abs() > 1e-3);
        }
        // rotate_4d never drives the two planes it leaves out
        let angles = Angles4D::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(angles.for_plane(RotationPlane::YW), 0.0);
        assert_eq!(angles.for_plane(RotationPlane::ZW), 0.0);
    }

    #[test]
    fn test_large_angle_matches_wrapped_angle() {
        // A day of auto-rotation at 0.007 rad per frame
        let big = 36288.0_f64;
        let wrapped = big.rem_euclid(std::f64::consts::TAU);
        let p = Vec4::new(0.15, 0.15, 0.15, 0.15);
        let a = p.rotated_in_plane(RotationPlane::YZ, big);
        let b = p.rotated_in_plane(RotationPlane::YZ, wrapped);
        assert!(approx_eq4(a, b));
    }

    #[test]
    fn test_advance() {
        let mut a = Angles4D::ZERO;
        a.advance(Angles4D::new(0.005, 0.007, 0.006, 0.004), 2.0);
        assert!((a.x - 0.01).abs() < 1e-7);
        assert!((a.w - 0.008).abs() < 1e-7);

        let mut b = Angles3D::ZERO;
        b.advance(Angles3D::new(0.003, 0.005, 0.0), 1.0);
        assert_eq!(b, Angles3D::new(0.003, 0.005, 0.0));
    }
}
