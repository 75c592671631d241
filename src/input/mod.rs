//! Input handling module
//!
//! Maps raw events to application actions and applies command-line wind
//! overrides.

mod input_mapper;
mod wind_args;

pub use input_mapper::{InputAction, InputMapper};
pub use wind_args::{apply_wind_args, parse_wind_arg, WindArgError};
