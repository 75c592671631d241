//! Perspective projections from 4D to 3D and 3D to 2D
//!
//! Both are simple perspective divides chosen for visual effect. The divisor
//! of each projection can reach zero (`w == D` or `z == -F`); it is clamped
//! away from zero by `epsilon`, keeping the sign, so finite input always
//! gives finite output.

use serde::{Serialize, Deserialize};

use crate::{Vec3, Vec4};

/// Smallest divisor magnitude used by the projections
pub const DEFAULT_SINGULARITY_EPSILON: f32 = 1e-3;

/// Replace a divisor whose magnitude is below `epsilon` by `±epsilon`
#[inline]
fn guarded_divisor(d: f32, epsilon: f32) -> f32 {
    if d.abs() >= epsilon {
        d
    } else if d < 0.0 {
        -epsilon
    } else {
        epsilon
    }
}

/// 4D→3D perspective divide by the w coordinate
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Perspective4D {
    /// Camera distance along w
    pub camera_distance: f32,
    pub epsilon: f32,
}

impl Perspective4D {
    pub fn new(camera_distance: f32) -> Self {
        Self {
            camera_distance,
            epsilon: DEFAULT_SINGULARITY_EPSILON,
        }
    }

    /// Scale factor `D / (D - w)`
    #[inline]
    pub fn factor(&self, w: f32) -> f32 {
        let d = self.camera_distance;
        d / guarded_divisor(d - w, self.epsilon)
    }

    pub fn project(&self, point: Vec4) -> Vec3 {
        let factor = self.factor(point.w);
        Vec3::new(point.x * factor, point.y * factor, point.z * factor)
    }
}

/// 3D→2D perspective divide by the z coordinate
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Perspective3D {
    /// Field-of-view constant
    pub fov: f32,
    pub epsilon: f32,
}

impl Perspective3D {
    pub fn new(fov: f32) -> Self {
        Self {
            fov,
            epsilon: DEFAULT_SINGULARITY_EPSILON,
        }
    }

    /// Scale factor `F / (F + z)`
    #[inline]
    pub fn scale(&self, z: f32) -> f32 {
        self.fov / guarded_divisor(self.fov + z, self.epsilon)
    }

    pub fn project(&self, point: Vec3) -> [f32; 2] {
        let scale = self.scale(point.z);
        [point.x * scale, point.y * scale]
    }
}

/// Project with the default singularity epsilon
pub fn project_4d_to_3d(point: Vec4, camera_distance: f32) -> Vec3 {
    Perspective4D::new(camera_distance).project(point)
}

/// Project with the default singularity epsilon
pub fn project_3d_to_2d(point: Vec3, fov: f32) -> [f32; 2] {
    Perspective3D::new(fov).project(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_w_zero_is_identity_scale() {
        for d in [0.5, 1.0, 5.0, 42.0] {
            let p = Vec4::new(0.3, -1.5, 2.25, 0.0);
            let q = project_4d_to_3d(p, d);
            assert_eq!(q, Vec3::new(0.3, -1.5, 2.25));
        }
    }

    #[test]
    fn test_4d_factor() {
        let proj = Perspective4D::new(5.0);
        // 5 / (5 - 1) = 1.25
        assert!((proj.factor(1.0) - 1.25).abs() < 1e-6);
        let q = proj.project(Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert!((q.x - 1.25).abs() < 1e-6);
        assert!((q.y - 2.5).abs() < 1e-6);
        assert!((q.z - 3.75).abs() < 1e-6);
    }

    #[test]
    fn test_3d_scale() {
        // 500 / (500 + 500) = 0.5
        let [x, y] = project_3d_to_2d(Vec3::new(2.0, -4.0, 500.0), 500.0);
        assert!((x - 1.0).abs() < 1e-6);
        assert!((y + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_4d_singularity_is_finite() {
        let proj = Perspective4D::new(5.0);
        let at = proj.project(Vec4::new(1.0, 1.0, 1.0, 5.0));
        assert!(at.x.is_finite() && at.y.is_finite() && at.z.is_finite());
        // Divisor clamped to +epsilon
        assert!((proj.factor(5.0) - 5.0 / DEFAULT_SINGULARITY_EPSILON).abs() < 1.0);

        // Just past the singularity keeps the negative sign
        assert!(proj.factor(5.0 + 1e-5) < 0.0);
    }

    #[test]
    fn test_3d_singularity_is_finite() {
        let [x, y] = project_3d_to_2d(Vec3::new(1.0, 1.0, -500.0), 500.0);
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn test_guarded_divisor_passthrough() {
        assert_eq!(guarded_divisor(2.0, 1e-3), 2.0);
        assert_eq!(guarded_divisor(-2.0, 1e-3), -2.0);
        assert_eq!(guarded_divisor(0.0, 1e-3), 1e-3);
        assert_eq!(guarded_divisor(-1e-6, 1e-3), -1e-3);
    }
}
