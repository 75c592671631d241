//! Per-frame simulation step
//!
//! Each step advances the animation clock, slides the placements along the
//! torus and spins the sphere and the global orientations by fixed per-axis
//! rates. Nothing moves while auto-rotate is off.
//!
//! With [`TimeMode::Fixed`] every step adds the same increments regardless of
//! how long the frame took, so motion speed follows the display refresh rate.
//! [`TimeMode::Elapsed`] scales the increments by `dt * reference_fps`
//! instead.
//!
//! The clock and the angles are `f64` and never reset. At `f32` a few hours
//! of steps would round the increments to the float spacing.

use serde::{Serialize, Deserialize};
use torus4d_math::{Angles3D, Angles4D};

use crate::scene::SceneState;

/// How a step's increments relate to elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimeMode {
    /// Fixed increments per frame
    Fixed,
    /// Increments scaled so `reference_fps` frames per second match `Fixed`
    Elapsed { reference_fps: f32 },
}

impl TimeMode {
    /// Multiplier applied to every increment for a frame lasting `dt` seconds
    pub fn scale(&self, dt: f32) -> f64 {
        match *self {
            TimeMode::Fixed => 1.0,
            TimeMode::Elapsed { reference_fps } => (f64::from(dt) * f64::from(reference_fps)).max(0.0),
        }
    }
}

/// Per-step angle increments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationRates {
    pub angles_4d: Angles4D,
    pub angles_3d: Angles3D,
    pub sphere: Angles3D,
}

impl Default for RotationRates {
    fn default() -> Self {
        Self {
            angles_4d: Angles4D::new(0.005, 0.007, 0.006, 0.004),
            angles_3d: Angles3D::new(0.003, 0.005, 0.0),
            sphere: Angles3D::new(0.01, 0.007, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Initial auto-rotate flag
    pub auto_rotate: bool,
    /// Animation-time increment per step
    pub time_step: f64,
    pub time_mode: TimeMode,
    pub rates: RotationRates,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            time_step: 0.01,
            time_mode: TimeMode::Fixed,
            rates: RotationRates::default(),
        }
    }
}

/// Advances a [`SceneState`] once per frame
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    settings: SimulationSettings,
}

impl Simulation {
    pub fn new(settings: SimulationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Run one step for a frame lasting `dt` seconds
    ///
    /// Returns false when auto-rotate is off and nothing changed.
    pub fn step(&self, scene: &mut SceneState, dt: f32) -> bool {
        if !scene.auto_rotate {
            return false;
        }

        let k = self.settings.time_mode.scale(dt);
        let rates = &self.settings.rates;

        scene.animation_time += self.settings.time_step * k;
        scene.reposition_placements();

        scene.sphere_rotation.advance(rates.sphere, k);
        scene.angles_4d.advance(rates.angles_4d, k);
        scene.angles_3d.advance(rates.angles_3d, k);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_increments() {
        let sim = Simulation::default();
        let mut scene = SceneState::default();

        // dt is ignored in fixed mode
        assert!(sim.step(&mut scene, 0.5));

        assert!((scene.animation_time - 0.01).abs() < 1e-7);
        assert!((scene.angles_4d.x - 0.005).abs() < 1e-7);
        assert!((scene.angles_4d.y - 0.007).abs() < 1e-7);
        assert!((scene.angles_4d.z - 0.006).abs() < 1e-7);
        assert!((scene.angles_4d.w - 0.004).abs() < 1e-7);
        assert!((scene.angles_3d.x - 0.003).abs() < 1e-7);
        assert!((scene.angles_3d.y - 0.005).abs() < 1e-7);
        assert_eq!(scene.angles_3d.z, 0.0);
        assert!((scene.sphere_rotation.x - 0.01).abs() < 1e-7);
        assert!((scene.sphere_rotation.y - 0.007).abs() < 1e-7);
    }

    #[test]
    fn test_increments_hold_late_in_a_session() {
        let sim = Simulation::default();
        let mut scene = SceneState::default();
        // 24 hours of 60 Hz frames
        scene.animation_time = 51840.0;
        scene.angles_4d = Angles4D::new(25920.0, 36288.0, 31104.0, 20736.0);
        scene.sphere_rotation = Angles3D::new(51840.0, 36288.0, 0.0);

        let before = scene.clone();
        sim.step(&mut scene, 0.0);

        assert!((scene.animation_time - before.animation_time - 0.01).abs() < 1e-9);
        assert!((scene.angles_4d.y - before.angles_4d.y - 0.007).abs() < 1e-9);
        assert!((scene.angles_4d.w - before.angles_4d.w - 0.004).abs() < 1e-9);
        assert!((scene.sphere_rotation.x - before.sphere_rotation.x - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_paused_step_changes_nothing() {
        let sim = Simulation::default();
        let mut scene = SceneState::default();
        scene.auto_rotate = false;
        let before = scene.clone();

        assert!(!sim.step(&mut scene, 1.0 / 60.0));
        assert_eq!(scene.angles_4d, before.angles_4d);
        assert_eq!(scene.angles_3d, before.angles_3d);
        assert_eq!(scene.animation_time, before.animation_time);
        assert_eq!(scene.placements(), before.placements());
    }

    #[test]
    fn test_elapsed_mode_scales_by_frame_time() {
        let sim = Simulation::new(SimulationSettings {
            time_mode: TimeMode::Elapsed { reference_fps: 60.0 },
            ..Default::default()
        });
        let mut scene = SceneState::default();

        // A 30 Hz frame is worth two reference frames
        sim.step(&mut scene, 1.0 / 30.0);
        assert!((scene.animation_time - 0.02).abs() < 1e-6);
        assert!((scene.angles_4d.x - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_elapsed_mode_ignores_negative_dt() {
        assert_eq!(TimeMode::Elapsed { reference_fps: 60.0 }.scale(-1.0), 0.0);
        assert_eq!(TimeMode::Fixed.scale(-1.0), 1.0);
    }

    #[test]
    fn test_placements_slide_with_time() {
        let sim = Simulation::default();
        let mut scene = SceneState::default();
        let start = scene.placements()[0].offset;

        for _ in 0..10 {
            sim.step(&mut scene, 0.0);
        }

        let moved = scene.placements()[0].offset;
        assert_ne!(start, moved);
        assert_eq!(scene.tesseract_count(), 32);

        let (u, v) = scene.torus().angles(0, scene.animation_time);
        let expected = crate::torus_point(u, v, 2.5, 0.8);
        assert!((moved.x - expected.x).abs() < 1e-4);
        assert!((moved.z - expected.z).abs() < 1e-4);
    }
}
