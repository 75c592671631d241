//! Torus4D - tesseract torus viewer
//!
//! A ring of rotating 4D hypercubes around a textured sphere, projected to
//! the screen and drawn back to front. This crate hosts the desktop
//! application: configuration, the window/render/simulation systems and the
//! input mapping that feed the library crates.

pub mod config;
pub mod input;
pub mod systems;
