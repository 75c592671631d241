//! Command-line wind overrides
//!
//! Arguments of the form `name=value` set a wind control at startup, e.g.
//! `torus4d w=-0.3 intensity=0.9`. Names are `x`, `y`, `z`, `w` and
//! `intensity`. A bad argument is reported and skipped; the rest still apply.

use torus4d_core::SceneState;
use torus4d_input::{ControlError, WindControl, WindControls};

/// A command-line argument that could not be applied
#[derive(Debug, Clone, PartialEq)]
pub enum WindArgError {
    /// Not of the form `name=value`, or an unknown name
    Unrecognized(String),
    /// Known name, unusable value
    Value(ControlError),
}

impl std::fmt::Display for WindArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindArgError::Unrecognized(arg) => {
                write!(f, "Unrecognized argument {:?} (expected x|y|z|w|intensity=<number>)", arg)
            }
            WindArgError::Value(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for WindArgError {}

/// Split `name=value` into a control and its raw value
pub fn parse_wind_arg(arg: &str) -> Option<(WindControl, &str)> {
    let (name, raw) = arg.split_once('=')?;
    let control = match name.trim().to_ascii_lowercase().as_str() {
        "x" => WindControl::X,
        "y" => WindControl::Y,
        "z" => WindControl::Z,
        "w" => WindControl::W,
        "intensity" => WindControl::Intensity,
        _ => return None,
    };
    Some((control, raw))
}

/// Apply every argument in order, collecting the ones that failed
pub fn apply_wind_args<I, S>(
    scene: &mut SceneState,
    controls: &WindControls,
    args: I,
) -> Vec<WindArgError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut errors = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        match parse_wind_arg(arg) {
            Some((control, raw)) => {
                if let Err(e) = controls.apply_raw(scene, control, raw) {
                    errors.push(WindArgError::Value(e));
                }
            }
            None => errors.push(WindArgError::Unrecognized(arg.to_string())),
        }
    }
    errors
}
