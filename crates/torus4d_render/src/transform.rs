//! Model space → screen space
//!
//! Tesseract vertices go through every stage:
//!
//! 1. add the placement offset
//! 2. add the damped wind offset
//! 3. rotate in 4D
//! 4. project 4D → 3D
//! 5. rotate in 3D
//! 6. project 3D → 2D
//! 7. scale to pixels around the viewport center
//!
//! Sphere vertices have no w and skip stages 1, 3 and 4. The post-rotation
//! z (stage 5) is kept on the result as the depth used for sorting and
//! alpha. Transforms only read the scene, so any point can be transformed
//! independently of any other.

use serde::{Serialize, Deserialize};
use torus4d_core::SceneState;
use torus4d_math::{
    rotate_3d, rotate_4d, Perspective3D, Perspective4D, Vec3, Vec4, DEFAULT_SINGULARITY_EPSILON,
};

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> [f32; 2] {
        [self.width / 2.0, self.height / 2.0]
    }
}

/// Projection constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    /// 4D camera distance along w
    pub camera_distance: f32,
    /// 3D field-of-view constant
    pub fov: f32,
    /// Pixels per projected unit
    pub display_scale: f32,
    /// Smallest divisor magnitude in either perspective divide
    pub singularity_epsilon: f32,
    /// Wind damping for tesseract vertices
    pub tesseract_wind_damping: f32,
    /// Wind damping for sphere vertices
    pub sphere_wind_damping: f32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            camera_distance: 5.0,
            fov: 500.0,
            display_scale: 100.0,
            singularity_epsilon: DEFAULT_SINGULARITY_EPSILON,
            tesseract_wind_damping: 0.3,
            sphere_wind_damping: 0.1,
        }
    }
}

/// A transformed point: pixel position plus depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Depth after 3D rotation; only for sorting and alpha
    pub z: f32,
}

impl ScreenPoint {
    pub fn xy(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

#[derive(Debug, Clone)]
pub struct TransformPipeline {
    viewport: Viewport,
    perspective_4d: Perspective4D,
    perspective_3d: Perspective3D,
    display_scale: f32,
    tesseract_wind_damping: f32,
    sphere_wind_damping: f32,
}

impl TransformPipeline {
    pub fn new(settings: &ProjectionSettings, viewport: Viewport) -> Self {
        Self {
            viewport,
            perspective_4d: Perspective4D {
                camera_distance: settings.camera_distance,
                epsilon: settings.singularity_epsilon,
            },
            perspective_3d: Perspective3D {
                fov: settings.fov,
                epsilon: settings.singularity_epsilon,
            },
            display_scale: settings.display_scale,
            tesseract_wind_damping: settings.tesseract_wind_damping,
            sphere_wind_damping: settings.sphere_wind_damping,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Full pipeline for a tesseract vertex at `placement_offset`
    pub fn transform_point(&self, local: Vec4, placement_offset: Vec4, scene: &SceneState) -> ScreenPoint {
        let positioned = local + placement_offset;
        let deformed = positioned + scene.wind.offset(self.tesseract_wind_damping);
        let rotated = rotate_4d(deformed, scene.angles_4d);
        let projected = self.perspective_4d.project(rotated);
        self.to_screen(rotate_3d(projected, scene.angles_3d))
    }

    /// 3D-only pipeline for a sphere vertex
    pub fn transform_sphere_point(&self, point: Vec3, scene: &SceneState) -> ScreenPoint {
        let deformed = point + scene.wind.offset_3d(self.sphere_wind_damping);
        self.to_screen(rotate_3d(deformed, scene.angles_3d))
    }

    /// Stages 6 and 7 on a rotated 3D point
    fn to_screen(&self, rotated: Vec3) -> ScreenPoint {
        let [px, py] = self.perspective_3d.project(rotated);
        let [cx, cy] = self.viewport.center();
        ScreenPoint {
            x: cx + px * self.display_scale,
            y: cy + py * self.display_scale,
            z: rotated.z,
        }
    }
}
