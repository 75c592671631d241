//! Depth-sorted scene renderer
//!
//! Draws one frame onto a [`DrawSurface`] using the painter's algorithm:
//! no depth buffer, so visibility comes entirely from draw order. The sphere
//! is drawn first with its faces sorted back to front, then every tesseract
//! in placement order (edges, then vertex dots).

use serde::{Serialize, Deserialize};
use torus4d_core::{SceneState, SphereFace, SphereMesh, TesseractMesh, TesseractPlacement};

use crate::color::{sphere_face_color, tesseract_color};
use crate::surface::{DrawSurface, Paint, Path};
use crate::transform::{ProjectionSettings, ScreenPoint, TransformPipeline, Viewport};

/// Faces whose average depth is below this are culled
const SPHERE_DEPTH_CUTOFF: f32 = -1.0;
/// Tesseract edges and vertices with a point below this depth are culled
const TESSERACT_DEPTH_CUTOFF: f32 = -3.0;

const SPHERE_OUTLINE_WIDTH: f32 = 0.5;
const SPHERE_OUTLINE_ALPHA: f32 = 0.3;
const EDGE_WIDTH: f32 = 1.5;
const EDGE_FADE: f32 = 0.8;
const VERTEX_FADE: f32 = 0.2;

/// Mesh settings for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub sphere_radius: f32,
    /// Latitude and longitude steps of the sphere grid
    pub sphere_resolution: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            sphere_radius: 0.6,
            sphere_resolution: 25,
        }
    }
}

/// A sphere face ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereFaceDraw {
    /// Screen corners in outline order: (i,j), (i+1,j), (i+1,j+1), (i,j+1)
    pub corners: [ScreenPoint; 4],
    /// Average depth of the corners
    pub depth: f32,
    /// Longitude fraction of the face's first corner
    pub u: f32,
    /// Latitude fraction of the face's first corner
    pub v: f32,
}

impl SphereFaceDraw {
    /// Build the face over already transformed grid points
    ///
    /// `None` when a corner index is outside `points` or the face is behind
    /// the depth cutoff.
    fn assemble(face: &SphereFace, points: &[ScreenPoint], resolution: usize) -> Option<Self> {
        let [c0, c1, c2, c3] = face.corners;
        // Outline order swaps the last two grid corners
        let corners = [
            *points.get(c0)?,
            *points.get(c1)?,
            *points.get(c3)?,
            *points.get(c2)?,
        ];
        let depth = corners.iter().map(|p| p.z).sum::<f32>() / 4.0;
        if depth < SPHERE_DEPTH_CUTOFF {
            return None;
        }
        let res = resolution as f32;
        Some(SphereFaceDraw {
            corners,
            depth,
            u: face.j as f32 / res,
            v: face.i as f32 / res,
        })
    }

    /// Closed quad outline through the corners
    pub fn path(&self) -> Path {
        let [a, b, c, d] = self.corners;
        Path::new()
            .move_to(a.x, a.y)
            .line_to(b.x, b.y)
            .line_to(c.x, c.y)
            .line_to(d.x, d.y)
            .close()
    }
}

/// Owns the static meshes and the transform; reads the scene each frame
pub struct SceneRenderer {
    transform: TransformPipeline,
    tesseract: TesseractMesh,
    sphere: SphereMesh,
}

impl SceneRenderer {
    pub fn new(
        projection: &ProjectionSettings,
        settings: &RenderSettings,
        tesseract_scale: f32,
        viewport: Viewport,
    ) -> Self {
        log::info!(
            "Scene renderer: {}x{} viewport, sphere resolution {}",
            viewport.width,
            viewport.height,
            settings.sphere_resolution
        );
        Self {
            transform: TransformPipeline::new(projection, viewport),
            tesseract: TesseractMesh::new(tesseract_scale),
            sphere: SphereMesh::generate(settings.sphere_resolution, settings.sphere_radius),
        }
    }

    /// Track a new surface size; the center moves with it
    pub fn resize(&mut self, viewport: Viewport) {
        self.transform.set_viewport(viewport);
    }

    pub fn transform(&self) -> &TransformPipeline {
        &self.transform
    }

    /// Visible sphere faces, farthest first
    ///
    /// Each grid point is transformed once. A face with a missing corner or
    /// an average depth below the cutoff is skipped.
    pub fn sphere_faces(&self, scene: &SceneState) -> Vec<SphereFaceDraw> {
        let points: Vec<ScreenPoint> = self
            .sphere
            .vertices()
            .iter()
            .map(|v| self.transform.transform_sphere_point(v.position, scene))
            .collect();

        let resolution = self.sphere.resolution();
        let mut faces: Vec<SphereFaceDraw> = self
            .sphere
            .faces()
            .filter_map(|face| SphereFaceDraw::assemble(&face, &points, resolution))
            .collect();

        // Stable: equal depths keep grid order
        faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        faces
    }

    pub fn render_sphere(&self, scene: &SceneState, surface: &mut dyn DrawSurface) {
        for face in self.sphere_faces(scene) {
            let alpha = ((face.depth + 2.0) / 2.0).clamp(0.4, 0.9);
            let base = sphere_face_color(face.u, face.v, scene.sphere_rotation.x);
            let path = face.path();
            surface.fill_path(&path, &Paint::Solid(base.with_alpha(alpha)));
            surface.stroke_path(
                &path,
                &Paint::Solid(base.with_alpha(alpha * SPHERE_OUTLINE_ALPHA)),
                SPHERE_OUTLINE_WIDTH,
            );
        }
    }

    /// Wireframe and vertex dots of one tesseract
    pub fn render_tesseract(
        &self,
        placement: &TesseractPlacement,
        index: usize,
        scene: &SceneState,
        surface: &mut dyn DrawSurface,
    ) {
        let locals = *self.tesseract.vertices();
        let points = locals.map(|v| self.transform.transform_point(v, placement.offset, scene));
        let base = tesseract_color(index, scene.tesseract_count(), &scene.angles_4d);

        for &(a, b) in self.tesseract.edges() {
            let (pa, pb) = (points[a], points[b]);
            if pa.z < TESSERACT_DEPTH_CUTOFF || pb.z < TESSERACT_DEPTH_CUTOFF {
                continue;
            }
            let depth = (pa.z + pb.z) / 2.0;
            let alpha = ((depth + 3.0) / 3.0).clamp(0.2, 0.7);
            let paint = Paint::linear(
                pa.xy(),
                pb.xy(),
                base.with_alpha(alpha),
                base.with_alpha(alpha * EDGE_FADE),
            );
            let path = Path::new().move_to(pa.x, pa.y).line_to(pb.x, pb.y);
            surface.stroke_path(&path, &paint, EDGE_WIDTH);
        }

        for p in points.iter().filter(|p| p.z >= TESSERACT_DEPTH_CUTOFF) {
            let radius = 2.0 * (1.0 + p.z / 3.0);
            let alpha = ((p.z + 3.0) / 3.0).clamp(0.4, 0.9);
            let paint = Paint::radial(
                p.xy(),
                radius,
                base.with_alpha(alpha),
                base.with_alpha(alpha * VERTEX_FADE),
            );
            surface.fill_circle(p.xy(), radius, &paint);
        }
    }

    /// Clear, sphere, then every tesseract in placement order
    pub fn render_frame(&self, scene: &SceneState, surface: &mut dyn DrawSurface) {
        let viewport = self.transform.viewport();
        surface.clear_rect(0.0, 0.0, viewport.width, viewport.height);

        self.render_sphere(scene, surface);

        for (index, placement) in scene.placements().iter().enumerate() {
            self.render_tesseract(placement, index, scene, surface);
        }
    }
}
