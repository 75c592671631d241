//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Scene renderer, tessellator and canvas pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use torus4d_core::SceneState;
use torus4d_render::{
    context::{ContextError, RenderContext},
    pipeline::{CanvasPipeline, CanvasUniforms, Tessellator},
    SceneRenderer,
};

use crate::config::AppConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    renderer: SceneRenderer,
    tessellator: Tessellator,
    canvas: CanvasPipeline,
    background: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(window: Arc<Window>, config: &AppConfig) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, config.window.vsync))?;

        let renderer = SceneRenderer::new(
            &config.projection,
            &config.sphere.to_render_settings(),
            config.torus.tesseract_scale,
            context.viewport(),
        );
        let canvas = CanvasPipeline::new(&context.device, context.config.format);

        let bg = &config.rendering.background_color;
        Ok(Self {
            context,
            renderer,
            tessellator: Tessellator::new(),
            canvas,
            background: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.renderer.resize(self.context.viewport());
    }

    /// Reconfigure after the surface was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame
    pub fn render_frame(&mut self, scene: &SceneState) -> Result<(), RenderError> {
        self.renderer.render_frame(scene, &mut self.tessellator);

        let viewport = self.context.viewport();
        self.canvas.update_uniforms(
            &self.context.queue,
            &CanvasUniforms::new(viewport.width, viewport.height),
        );
        self.canvas.upload_vertices(
            &self.context.device,
            &self.context.queue,
            self.tessellator.vertices(),
        );

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Canvas Encoder"),
            });

        self.canvas.render(&mut encoder, &view, self.background);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
