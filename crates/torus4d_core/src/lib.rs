//! Core types for the Torus4D scene
//!
//! This crate provides the static geometry and the mutable simulation state:
//!
//! - [`TesseractMesh`] - 16 vertices and 32 edges of a scaled hypercube
//! - [`TesseractPlacement`] - Position of one tesseract on the torus
//! - [`SphereMesh`] - Latitude/longitude grid of the central sphere
//! - [`WindField`] - User-controlled additive deformation
//! - [`SceneState`] - Everything the animation step and input mutate
//! - [`Simulation`] - Per-frame advance of a [`SceneState`]

mod tesseract;
mod torus;
mod sphere;
mod wind;
mod scene;
mod simulation;

pub use tesseract::{TesseractMesh, TESSERACT_EDGE_COUNT, TESSERACT_VERTEX_COUNT};
pub use torus::{generate_torus_placements, torus_point, TesseractPlacement, TorusSettings};
pub use sphere::{SphereFace, SphereMesh, SphereVertex};
pub use wind::{WindAxis, WindField};
pub use scene::SceneState;
pub use simulation::{RotationRates, Simulation, SimulationSettings, TimeMode};

// Re-export commonly used types from torus4d_math for convenience
pub use torus4d_math::{Angles3D, Angles4D, Vec3, Vec4};
