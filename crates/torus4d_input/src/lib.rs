//! Torus4D Input Handling
//!
//! Pointer and touch dragging rotates the 3D view; the wind controls set
//! the wind direction and intensity from text or key nudges.

mod drag_controller;
mod wind_controls;

pub use drag_controller::DragController;
pub use wind_controls::{ControlError, WindControl, WindControls};
