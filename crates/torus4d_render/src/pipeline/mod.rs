//! wgpu canvas backend
//!
//! The [`Tessellator`] turns draw calls into colored triangles on the CPU;
//! the [`CanvasPipeline`] uploads and draws them in submission order.

pub mod types;
pub mod tessellator;
pub mod canvas_pipeline;

pub use types::{CanvasUniforms, CanvasVertex};
pub use tessellator::Tessellator;
pub use canvas_pipeline::CanvasPipeline;
