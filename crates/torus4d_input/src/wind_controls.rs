//! Wind controls
//!
//! Controls:
//! - Q/A: wind x up/down
//! - W/S: wind y up/down
//! - E/D: wind z up/down
//! - R/F: wind w up/down
//! - T/G: intensity up/down
//!
//! Text values (from a settings field, a console, a test) go through
//! [`WindControls::apply_raw`], which parses and validates before writing.

use torus4d_core::{SceneState, WindAxis};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// One adjustable wind value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindControl {
    X,
    Y,
    Z,
    W,
    Intensity,
}

impl WindControl {
    pub const ALL: [WindControl; 5] = [
        WindControl::X,
        WindControl::Y,
        WindControl::Z,
        WindControl::W,
        WindControl::Intensity,
    ];

    /// Range the key nudges stay within
    pub fn range(self) -> (f32, f32) {
        match self {
            WindControl::Intensity => (0.0, 1.0),
            _ => (-1.0, 1.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WindControl::X => "wind x",
            WindControl::Y => "wind y",
            WindControl::Z => "wind z",
            WindControl::W => "wind w",
            WindControl::Intensity => "wind intensity",
        }
    }

    fn axis(self) -> Option<WindAxis> {
        match self {
            WindControl::X => Some(WindAxis::X),
            WindControl::Y => Some(WindAxis::Y),
            WindControl::Z => Some(WindAxis::Z),
            WindControl::W => Some(WindAxis::W),
            WindControl::Intensity => None,
        }
    }

    /// Current value in the scene
    pub fn get(self, scene: &SceneState) -> f32 {
        match self.axis() {
            Some(axis) => scene.wind.component(axis),
            None => scene.wind.intensity,
        }
    }

    fn set(self, scene: &mut SceneState, value: f32) {
        match self.axis() {
            Some(axis) => scene.set_wind_component(axis, value),
            None => scene.set_wind_intensity(value),
        }
    }
}

/// A rejected control value
#[derive(Debug, Clone, PartialEq)]
pub enum ControlError {
    /// The text is not a number
    Parse { control: WindControl, raw: String },
    /// The number is NaN or infinite
    NonFinite { control: WindControl, value: f32 },
}

impl std::fmt::Display for ControlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlError::Parse { control, raw } => {
                write!(f, "Invalid value for {}: {:?} is not a number", control.name(), raw)
            }
            ControlError::NonFinite { control, value } => {
                write!(f, "Invalid value for {}: {} is not finite", control.name(), value)
            }
        }
    }
}

impl std::error::Error for ControlError {}

/// Numeric wind inputs
pub struct WindControls {
    /// Amount one key press moves a value
    pub step: f32,
}

impl Default for WindControls {
    fn default() -> Self {
        Self::new()
    }
}

impl WindControls {
    pub fn new() -> Self {
        Self { step: 0.1 }
    }

    /// Builder: set key nudge step
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Parse `raw` and write it to `control`
    ///
    /// On error the scene keeps its previous value.
    pub fn apply_raw(
        &self,
        scene: &mut SceneState,
        control: WindControl,
        raw: &str,
    ) -> Result<f32, ControlError> {
        let value: f32 = raw.trim().parse().map_err(|_| ControlError::Parse {
            control,
            raw: raw.to_string(),
        })?;
        if !value.is_finite() {
            return Err(ControlError::NonFinite { control, value });
        }
        control.set(scene, value);
        log::debug!("{} set to {}", control.name(), value);
        Ok(value)
    }

    /// Move `control` by `steps` key steps, clamped to its range
    pub fn nudge(&self, scene: &mut SceneState, control: WindControl, steps: f32) -> f32 {
        let (lo, hi) = control.range();
        let value = (control.get(scene) + steps * self.step).clamp(lo, hi);
        control.set(scene, value);
        value
    }

    /// Process keyboard input; returns true if the key is a wind key
    pub fn process_keyboard(&self, scene: &mut SceneState, key: KeyCode, state: ElementState) -> bool {
        let (control, direction) = match key {
            KeyCode::KeyQ => (WindControl::X, 1.0),
            KeyCode::KeyA => (WindControl::X, -1.0),
            KeyCode::KeyW => (WindControl::Y, 1.0),
            KeyCode::KeyS => (WindControl::Y, -1.0),
            KeyCode::KeyE => (WindControl::Z, 1.0),
            KeyCode::KeyD => (WindControl::Z, -1.0),
            KeyCode::KeyR => (WindControl::W, 1.0),
            KeyCode::KeyF => (WindControl::W, -1.0),
            KeyCode::KeyT => (WindControl::Intensity, 1.0),
            KeyCode::KeyG => (WindControl::Intensity, -1.0),
            _ => return false,
        };
        if state == ElementState::Pressed {
            let value = self.nudge(scene, control, direction);
            log::info!("{}: {:.2}", control.name(), value);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_raw_sets_value() {
        let controls = WindControls::new();
        let mut scene = SceneState::default();
        assert_eq!(controls.apply_raw(&mut scene, WindControl::X, "0.75"), Ok(0.75));
        assert_eq!(scene.wind.x, 0.75);
        assert_eq!(controls.apply_raw(&mut scene, WindControl::Intensity, " 0.2 "), Ok(0.2));
        assert_eq!(scene.wind.intensity, 0.2);
    }

    #[test]
    fn test_apply_raw_rejects_garbage() {
        let controls = WindControls::new();
        let mut scene = SceneState::default();
        let before = scene.wind;
        let err = controls.apply_raw(&mut scene, WindControl::W, "gusty");
        assert!(matches!(err, Err(ControlError::Parse { control: WindControl::W, .. })));
        assert_eq!(scene.wind, before);
    }

    #[test]
    fn test_apply_raw_rejects_non_finite() {
        let controls = WindControls::new();
        let mut scene = SceneState::default();
        let before = scene.wind;
        for raw in ["NaN", "inf", "-inf"] {
            let err = controls.apply_raw(&mut scene, WindControl::Y, raw);
            assert!(matches!(err, Err(ControlError::NonFinite { .. })), "{} accepted", raw);
        }
        assert_eq!(scene.wind, before);
    }

    #[test]
    fn test_error_display_names_control() {
        let err = ControlError::Parse {
            control: WindControl::Intensity,
            raw: "x".to_string(),
        };
        assert!(err.to_string().contains("wind intensity"));
    }

    #[test]
    fn test_nudge_clamps_to_range() {
        let controls = WindControls::new().with_step(0.4);
        let mut scene = SceneState::default();
        scene.wind.intensity = 0.5;
        controls.nudge(&mut scene, WindControl::Intensity, 1.0);
        controls.nudge(&mut scene, WindControl::Intensity, 1.0);
        assert_eq!(scene.wind.intensity, 1.0);
        for _ in 0..5 {
            controls.nudge(&mut scene, WindControl::X, -1.0);
        }
        assert_eq!(scene.wind.x, -1.0);
    }

    #[test]
    fn test_keyboard_mapping() {
        let controls = WindControls::new();
        let mut scene = SceneState::default();
        scene.wind.z = 0.0;

        assert!(controls.process_keyboard(&mut scene, KeyCode::KeyE, ElementState::Pressed));
        assert!((scene.wind.z - 0.1).abs() < 1e-6);

        // Releases are consumed but change nothing
        assert!(controls.process_keyboard(&mut scene, KeyCode::KeyE, ElementState::Released));
        assert!((scene.wind.z - 0.1).abs() < 1e-6);

        assert!(controls.process_keyboard(&mut scene, KeyCode::KeyG, ElementState::Pressed));
        assert!((scene.wind.intensity - 0.4).abs() < 1e-6);

        assert!(!controls.process_keyboard(&mut scene, KeyCode::Space, ElementState::Pressed));
    }

    #[test]
    fn test_get_reads_every_control() {
        let mut scene = SceneState::default();
        scene.wind.x = 0.1;
        scene.wind.y = 0.2;
        scene.wind.z = 0.3;
        scene.wind.w = 0.4;
        scene.wind.intensity = 0.9;
        let values: Vec<f32> = WindControl::ALL.iter().map(|c| c.get(&scene)).collect();
        assert_eq!(values, vec![0.1, 0.2, 0.3, 0.4, 0.9]);
    }
}
