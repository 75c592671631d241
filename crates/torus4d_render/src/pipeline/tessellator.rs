//! CPU tessellation of canvas draw calls
//!
//! Fills become triangle fans, strokes become one quad per segment and
//! circles become fans around the center. Gradients are evaluated at each
//! emitted vertex and interpolated by the rasterizer.

use crate::surface::{DrawSurface, Paint, Path};

use super::types::CanvasVertex;

/// Triangles per circle
const CIRCLE_SEGMENTS: usize = 16;

/// Collects triangles for one frame in draw order
#[derive(Debug, Default)]
pub struct Tessellator {
    vertices: Vec<CanvasVertex>,
}

impl Tessellator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[CanvasVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Drop everything queued so far
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    fn push_triangle(&mut self, paint: &Paint, a: [f32; 2], b: [f32; 2], c: [f32; 2]) {
        for p in [a, b, c] {
            self.vertices.push(CanvasVertex::new(p, paint.color_at(p)));
        }
    }
}

impl DrawSurface for Tessellator {
    /// Only whole-frame clears occur, so any clear discards the queue; the
    /// render pass clears the target itself.
    fn clear_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {
        self.clear();
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        let points = path.points();
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        for pair in rest.windows(2) {
            self.push_triangle(paint, first, pair[0], pair[1]);
        }
    }

    fn stroke_path(&mut self, path: &Path, paint: &Paint, line_width: f32) {
        let half = line_width / 2.0;
        for (a, b) in path.segments() {
            let dx = b[0] - a[0];
            let dy = b[1] - a[1];
            let len = (dx * dx + dy * dy).sqrt();
            if len <= f32::EPSILON {
                continue;
            }
            let n = [-dy / len * half, dx / len * half];
            let a0 = [a[0] + n[0], a[1] + n[1]];
            let a1 = [a[0] - n[0], a[1] - n[1]];
            let b0 = [b[0] + n[0], b[1] + n[1]];
            let b1 = [b[0] - n[0], b[1] - n[1]];
            self.push_triangle(paint, a0, b0, a1);
            self.push_triangle(paint, a1, b0, b1);
        }
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, paint: &Paint) {
        if radius <= 0.0 {
            return;
        }
        let ring = |k: usize| {
            let theta = k as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
            [center[0] + radius * theta.cos(), center[1] + radius * theta.sin()]
        };
        for k in 0..CIRCLE_SEGMENTS {
            self.push_triangle(paint, center, ring(k), ring(k + 1));
        }
    }
}
