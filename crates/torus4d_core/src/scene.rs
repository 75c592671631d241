//! Mutable scene state
//!
//! A single [`SceneState`] is owned by the host and passed by reference to
//! the simulation step, the input handlers and the renderer. All mutations
//! are plain overwrites or additive increments.

use torus4d_math::{Angles3D, Angles4D};

use crate::torus::{TesseractPlacement, TorusSettings};
use crate::wind::{WindAxis, WindField};

#[derive(Debug, Clone)]
pub struct SceneState {
    /// Global 3D orientation, advanced by the simulation and by dragging
    pub angles_3d: Angles3D,
    /// Global 4D orientation
    pub angles_4d: Angles4D,
    pub wind: WindField,
    /// Sphere spin; drives the sphere palette only
    pub sphere_rotation: Angles3D,
    /// Accumulated animation time, never reset
    pub animation_time: f64,
    /// Whether the simulation step advances anything
    pub auto_rotate: bool,
    torus: TorusSettings,
    placements: Vec<TesseractPlacement>,
}

impl SceneState {
    pub fn new(torus: TorusSettings, wind: WindField) -> Self {
        let placements = torus.generate();
        Self {
            angles_3d: Angles3D::ZERO,
            angles_4d: Angles4D::ZERO,
            wind,
            sphere_rotation: Angles3D::ZERO,
            animation_time: 0.0,
            auto_rotate: true,
            torus,
            placements,
        }
    }

    pub fn torus(&self) -> &TorusSettings {
        &self.torus
    }

    /// Placements in their fixed index order
    pub fn placements(&self) -> &[TesseractPlacement] {
        &self.placements
    }

    /// Number of tesseracts; constant for the lifetime of the state
    pub fn tesseract_count(&self) -> usize {
        self.placements.len()
    }

    /// Slide every placement to its torus position at the current time
    pub fn reposition_placements(&mut self) {
        self.torus.reposition(&mut self.placements, self.animation_time);
    }

    /// Rotate the 3D view by a pointer drag of `(dx, dy)` pixels
    pub fn apply_drag(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.angles_3d.y += f64::from(dx) * f64::from(sensitivity);
        self.angles_3d.x += f64::from(dy) * f64::from(sensitivity);
    }

    pub fn set_wind_component(&mut self, axis: WindAxis, value: f32) {
        self.wind.set_component(axis, value);
    }

    pub fn set_wind_intensity(&mut self, intensity: f32) {
        self.wind.set_intensity(intensity);
    }

    /// Flip auto-rotation, returning the new value
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(TorusSettings::default(), WindField::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene() {
        let scene = SceneState::default();
        assert_eq!(scene.tesseract_count(), 32);
        assert_eq!(scene.angles_3d, Angles3D::ZERO);
        assert_eq!(scene.angles_4d, Angles4D::ZERO);
        assert!(scene.auto_rotate);
        assert_eq!(scene.animation_time, 0.0);
    }

    #[test]
    fn test_apply_drag() {
        let mut scene = SceneState::default();
        scene.apply_drag(10.0, -5.0, 0.01);
        assert!((scene.angles_3d.y - 0.1).abs() < 1e-6);
        assert!((scene.angles_3d.x + 0.05).abs() < 1e-6);
        assert_eq!(scene.angles_3d.z, 0.0);

        // Drag accumulates
        scene.apply_drag(10.0, 0.0, 0.01);
        assert!((scene.angles_3d.y - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_drag_independent_of_auto_rotate() {
        let mut scene = SceneState::default();
        scene.auto_rotate = false;
        scene.apply_drag(3.0, 4.0, 0.01);
        assert!(scene.angles_3d.x > 0.0);
        assert!(scene.angles_3d.y > 0.0);
    }

    #[test]
    fn test_wind_setters() {
        let mut scene = SceneState::default();
        scene.set_wind_component(WindAxis::X, 0.7);
        scene.set_wind_intensity(0.9);
        assert_eq!(scene.wind.x, 0.7);
        assert_eq!(scene.wind.intensity, 0.9);
    }

    #[test]
    fn test_toggle_auto_rotate() {
        let mut scene = SceneState::default();
        assert!(!scene.toggle_auto_rotate());
        assert!(scene.toggle_auto_rotate());
    }
}
