//! Torus placement of the tesseracts
//!
//! Tesseracts sit on a torus parametrized by a major angle `u` (around the
//! ring) and a minor angle `v` (around the tube). `v` advances `minor_turns`
//! times faster than `u`, so the placements trace a spiral rather than rings.

use std::f64::consts::TAU;

use serde::{Serialize, Deserialize};
use torus4d_math::Vec4;

/// Torus layout and animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusSettings {
    /// Number of tesseracts, fixed for the process lifetime
    pub count: usize,
    /// Distance from torus center to tube center
    pub major_radius: f32,
    /// Tube radius
    pub minor_radius: f32,
    /// Minor revolutions per major revolution
    pub minor_turns: f32,
    /// Half side length of every tesseract
    pub tesseract_scale: f32,
    /// Major-angle drift per unit of animation time (in revolutions)
    pub major_rate: f32,
    /// Minor-angle drift per unit of animation time (in revolutions)
    pub minor_rate: f32,
}

impl Default for TorusSettings {
    fn default() -> Self {
        Self {
            count: 32,
            major_radius: 2.5,
            minor_radius: 0.8,
            minor_turns: 3.0,
            tesseract_scale: 0.15,
            major_rate: 0.1,
            minor_rate: 0.15,
        }
    }
}

impl TorusSettings {
    /// Torus angles `(u, v)` of placement `index` at `animation_time`
    pub fn angles(&self, index: usize, animation_time: f64) -> (f64, f64) {
        let t = index as f64 / self.count as f64;
        let u = (t + animation_time * f64::from(self.major_rate)) * TAU;
        let v = (t + animation_time * f64::from(self.minor_rate)) * TAU * f64::from(self.minor_turns);
        (u, v)
    }

    /// Placements at animation time zero
    pub fn generate(&self) -> Vec<TesseractPlacement> {
        let placements: Vec<_> = (0..self.count)
            .map(|i| {
                let (u, v) = self.angles(i, 0.0);
                TesseractPlacement {
                    offset: torus_point(u, v, self.major_radius, self.minor_radius),
                    rotation_phase: [u as f32, (v * 2.0) as f32, (u * 1.5) as f32, 0.0],
                }
            })
            .collect();
        log::debug!(
            "Generated {} torus placements (R={}, r={})",
            placements.len(),
            self.major_radius,
            self.minor_radius
        );
        placements
    }

    /// Slide every placement to its position at `animation_time`
    pub fn reposition(&self, placements: &mut [TesseractPlacement], animation_time: f64) {
        for (i, placement) in placements.iter_mut().enumerate() {
            let (u, v) = self.angles(i, animation_time);
            placement.slide_to(torus_point(u, v, self.major_radius, self.minor_radius));
        }
    }
}

/// One tesseract's place on the torus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TesseractPlacement {
    /// Current torus-surface position
    pub offset: Vec4,
    /// Per-tesseract phase angles; generated but not consumed by the renderer
    pub rotation_phase: [f32; 4],
}

impl TesseractPlacement {
    /// Move to `target` in x, y, z; w is left as it is
    pub fn slide_to(&mut self, target: Vec4) {
        self.offset.x = target.x;
        self.offset.y = target.y;
        self.offset.z = target.z;
    }
}

/// Standard torus parametric position with w = 0
///
/// The angles grow without bound as the animation runs, so the trig stays
/// in `f64`.
pub fn torus_point(u: f64, v: f64, major_radius: f32, minor_radius: f32) -> Vec4 {
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_v, cos_v) = v.sin_cos();
    let ring = major_radius + minor_radius * cos_v as f32;
    Vec4::new(ring * cos_u as f32, ring * sin_u as f32, minor_radius * sin_v as f32, 0.0)
}

/// Placements with the default three minor turns
pub fn generate_torus_placements(
    count: usize,
    major_radius: f32,
    minor_radius: f32,
) -> Vec<TesseractPlacement> {
    TorusSettings {
        count,
        major_radius,
        minor_radius,
        ..TorusSettings::default()
    }
    .generate()
}
