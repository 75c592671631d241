//! Torus4D Rendering Library
//!
//! This crate maps scene points to the screen and draws them back to front.
//!
//! ## Key Components
//!
//! - [`transform::TransformPipeline`] - wind, 4D rotation, projections, pixel mapping
//! - [`renderer::SceneRenderer`] - sphere faces and tesseract wireframes, painter's order
//! - [`surface::DrawSurface`] - the 2D drawing interface the renderer targets
//! - [`surface::RecordingSurface`] - headless surface that records draw calls
//! - [`pipeline::Tessellator`] / [`pipeline::CanvasPipeline`] - wgpu backend
//! - [`context::RenderContext`] - WGPU device, queue, and surface management

pub mod color;
pub mod context;
pub mod pipeline;
pub mod renderer;
pub mod surface;
pub mod transform;

pub use color::Rgba;
pub use renderer::{RenderSettings, SceneRenderer, SphereFaceDraw};
pub use surface::{DrawCommand, DrawSurface, Paint, Path, RecordingSurface};
pub use transform::{ProjectionSettings, ScreenPoint, TransformPipeline, Viewport};

// Re-export core types for convenience
pub use torus4d_core::{SceneState, SphereMesh, TesseractMesh, TesseractPlacement};
pub use torus4d_math::{Vec3, Vec4};
