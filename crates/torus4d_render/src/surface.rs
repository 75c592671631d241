//! 2D drawing surface abstraction
//!
//! The renderer issues canvas-style primitives: clear a region, fill or
//! stroke a path, fill a circle. Paint is a solid color or a linear/radial
//! gradient with color stops. Any backend implementing [`DrawSurface`] can
//! display a frame; [`RecordingSurface`] keeps the calls for inspection.

use crate::color::Rgba;

/// A single open or closed polyline in pixel space
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<[f32; 2]>,
    closed: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the path at `(x, y)`, discarding any previous points
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.points.clear();
        self.points.push([x, y]);
        self.closed = false;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.points.push([x, y]);
        self
    }

    /// Connect the last point back to the first
    pub fn close(mut self) -> Self {
        self.closed = true;
        self
    }

    pub fn points(&self) -> &[[f32; 2]] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Segments in drawing order, including the closing one
    pub fn segments(&self) -> impl Iterator<Item = ([f32; 2], [f32; 2])> + '_ {
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(&first), Some(&last)) if self.points.len() > 2 => Some((last, first)),
            _ => None,
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient in [0, 1]
    pub offset: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    LinearGradient {
        start: [f32; 2],
        end: [f32; 2],
        stops: Vec<ColorStop>,
    },
    /// Concentric radial gradient
    RadialGradient {
        center: [f32; 2],
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<ColorStop>,
    },
}

impl Paint {
    /// Two-stop linear gradient from `from` at `start` to `to` at `end`
    pub fn linear(start: [f32; 2], end: [f32; 2], from: Rgba, to: Rgba) -> Self {
        Paint::LinearGradient {
            start,
            end,
            stops: vec![
                ColorStop { offset: 0.0, color: from },
                ColorStop { offset: 1.0, color: to },
            ],
        }
    }

    /// Two-stop radial gradient from `from` at the center to `to` at `radius`
    pub fn radial(center: [f32; 2], radius: f32, from: Rgba, to: Rgba) -> Self {
        Paint::RadialGradient {
            center,
            inner_radius: 0.0,
            outer_radius: radius,
            stops: vec![
                ColorStop { offset: 0.0, color: from },
                ColorStop { offset: 1.0, color: to },
            ],
        }
    }

    /// Normalized RGBA of the paint at pixel `p`
    pub fn color_at(&self, p: [f32; 2]) -> [f32; 4] {
        match self {
            Paint::Solid(c) => c.to_f32_array(),
            Paint::LinearGradient { start, end, stops } => {
                let d = [end[0] - start[0], end[1] - start[1]];
                let len_sq = d[0] * d[0] + d[1] * d[1];
                let t = if len_sq > 0.0 {
                    ((p[0] - start[0]) * d[0] + (p[1] - start[1]) * d[1]) / len_sq
                } else {
                    1.0
                };
                sample_stops(stops, t)
            }
            Paint::RadialGradient { center, inner_radius, outer_radius, stops } => {
                let dx = p[0] - center[0];
                let dy = p[1] - center[1];
                let dist = (dx * dx + dy * dy).sqrt();
                let span = outer_radius - inner_radius;
                let t = if span > 0.0 { (dist - inner_radius) / span } else { 1.0 };
                sample_stops(stops, t)
            }
        }
    }
}

/// Interpolate the color stops at `t`, clamped to the first/last stop
fn sample_stops(stops: &[ColorStop], t: f32) -> [f32; 4] {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return [0.0; 4],
    };
    if t <= first.offset {
        return first.color.to_f32_array();
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let local = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
            return Rgba::lerp_f32(a.color.to_f32_array(), b.color.to_f32_array(), local);
        }
    }
    last.color.to_f32_array()
}

/// Canvas-style drawing target
pub trait DrawSurface {
    /// Clear a rectangle to transparent
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill the interior of a closed path
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    /// Stroke the segments of a path
    fn stroke_path(&mut self, path: &Path, paint: &Paint, line_width: f32);

    /// Fill a full circle
    fn fill_circle(&mut self, center: [f32; 2], radius: f32, paint: &Paint);
}

/// A draw call captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    FillPath {
        path: Path,
        paint: Paint,
    },
    StrokePath {
        path: Path,
        paint: Paint,
        line_width: f32,
    },
    FillCircle {
        center: [f32; 2],
        radius: f32,
        paint: Paint,
    },
}

/// Headless surface that keeps every call in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPath { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokePath { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, path: &Path, paint: &Paint, line_width: f32) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            paint: paint.clone(),
            line_width,
        });
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_path_builder() {
        let path = Path::new().move_to(0.0, 0.0).line_to(1.0, 0.0).line_to(1.0, 1.0).close();
        assert_eq!(path.points().len(), 3);
        assert!(path.is_closed());
        assert_eq!(path.segments().count(), 3);
    }

    #[test]
    fn test_open_line_has_one_segment() {
        let path = Path::new().move_to(0.0, 0.0).line_to(5.0, 5.0);
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments, vec![([0.0, 0.0], [5.0, 5.0])]);
    }

    #[test]
    fn test_linear_gradient_endpoints() {
        let from = Rgba::new(255, 0, 0, 0.5);
        let to = Rgba::new(255, 0, 0, 0.4);
        let paint = Paint::linear([0.0, 0.0], [10.0, 0.0], from, to);
        assert!(approx(paint.color_at([0.0, 0.0]), from.to_f32_array()));
        assert!(approx(paint.color_at([10.0, 3.0]), to.to_f32_array()));
        let mid = paint.color_at([5.0, 0.0]);
        assert!((mid[3] - 0.45).abs() < 1e-5);
        // Beyond the ends the outer stops repeat
        assert!(approx(paint.color_at([-4.0, 0.0]), from.to_f32_array()));
    }

    #[test]
    fn test_radial_gradient() {
        let from = Rgba::new(0, 0, 255, 0.8);
        let to = Rgba::new(0, 0, 255, 0.16);
        let paint = Paint::radial([5.0, 5.0], 2.0, from, to);
        assert!(approx(paint.color_at([5.0, 5.0]), from.to_f32_array()));
        assert!(approx(paint.color_at([7.0, 5.0]), to.to_f32_array()));
        assert!((paint.color_at([6.0, 5.0])[3] - 0.48).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_gradients_use_last_stop() {
        let from = Rgba::new(1, 2, 3, 1.0);
        let to = Rgba::new(4, 5, 6, 0.5);
        let line = Paint::linear([1.0, 1.0], [1.0, 1.0], from, to);
        assert!(approx(line.color_at([1.0, 1.0]), to.to_f32_array()));
        let dot = Paint::radial([0.0, 0.0], 0.0, from, to);
        assert!(approx(dot.color_at([0.0, 0.0]), to.to_f32_array()));
    }

    #[test]
    fn test_recording_surface_counts() {
        let mut surface = RecordingSurface::new();
        let paint = Paint::Solid(Rgba::opaque(1, 2, 3));
        let path = Path::new().move_to(0.0, 0.0).line_to(1.0, 1.0);
        surface.clear_rect(0.0, 0.0, 10.0, 10.0);
        surface.fill_path(&path, &paint);
        surface.stroke_path(&path, &paint, 1.0);
        surface.fill_circle([0.0, 0.0], 2.0, &paint);
        assert_eq!(surface.commands().len(), 4);
        assert_eq!(surface.fill_count(), 1);
        assert_eq!(surface.stroke_count(), 1);
        assert_eq!(surface.circle_count(), 1);
        assert_eq!(surface.take().len(), 4);
        assert!(surface.commands().is_empty());
    }
}
