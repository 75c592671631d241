//! Wind deformation field
//!
//! Wind is a cosmetic bias added to positions before rotation. The direction
//! components and the intensity are set directly by user controls; intensity
//! gates the whole field, so zero intensity means no deformation whatever the
//! direction.

use serde::{Serialize, Deserialize};
use torus4d_math::{Vec3, Vec4};

/// One direction component of the wind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindAxis {
    X,
    Y,
    Z,
    W,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindField {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    /// Multiplier on the direction, typically in [0, 1]
    pub intensity: f32,
}

impl Default for WindField {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 0.5,
            intensity: 0.5,
        }
    }
}

impl WindField {
    /// No wind at all
    pub const CALM: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0, intensity: 0.0 };

    pub fn direction(&self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    pub fn component(&self, axis: WindAxis) -> f32 {
        match axis {
            WindAxis::X => self.x,
            WindAxis::Y => self.y,
            WindAxis::Z => self.z,
            WindAxis::W => self.w,
        }
    }

    pub fn set_component(&mut self, axis: WindAxis, value: f32) {
        match axis {
            WindAxis::X => self.x = value,
            WindAxis::Y => self.y = value,
            WindAxis::Z => self.z = value,
            WindAxis::W => self.w = value,
        }
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    /// 4D offset for an object damped by `damping`
    pub fn offset(&self, damping: f32) -> Vec4 {
        self.direction() * (self.intensity * damping)
    }

    /// 3D offset (w ignored) for an object damped by `damping`
    pub fn offset_3d(&self, damping: f32) -> Vec3 {
        self.offset(damping).truncate()
    }
}
