//! GPU-compatible data types for the canvas pipeline
//!
//! Layouts match `shaders/canvas.wgsl`.

use bytemuck::{Pod, Zeroable};

/// A triangle vertex in pixel space
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CanvasVertex {
    /// Pixel position, origin top-left, y down
    pub position: [f32; 2],
    /// Straight (non-premultiplied) RGBA
    pub color: [f32; 4],
}

impl CanvasVertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CanvasUniforms {
    /// Viewport width and height in pixels
    pub viewport: [f32; 2],
    /// Padding to 16 bytes
    pub _padding: [f32; 2],
}

impl CanvasUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: [width, height],
            _padding: [0.0; 2],
        }
    }
}

impl Default for CanvasUniforms {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
