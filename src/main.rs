//! Torus4D - tesseract torus viewer
//!
//! Opens a window and animates the scene until Escape or close.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use torus4d::config::AppConfig;
use torus4d::input::{apply_wind_args, InputAction, InputMapper};
use torus4d::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use torus4d_core::SceneState;
use torus4d_input::{DragController, WindControls};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    scene: SceneState,
    simulation: SimulationSystem,
    drag: DragController,
    wind_controls: WindControls,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let mut scene = SceneState::new(config.torus, config.wind);
        scene.auto_rotate = config.simulation.auto_rotate;

        let wind_controls = WindControls::new().with_step(config.input.wind_step);
        for err in apply_wind_args(&mut scene, &wind_controls, std::env::args().skip(1)) {
            log::warn!("{}", err);
        }

        log::info!(
            "Scene: {} tesseracts, wind ({}, {}, {}, {}) x{}",
            scene.tesseract_count(),
            scene.wind.x,
            scene.wind.y,
            scene.wind.z,
            scene.wind.w,
            scene.wind.intensity
        );

        let drag = DragController::new().with_sensitivity(config.input.drag_sensitivity);
        let simulation = SimulationSystem::new(config.simulation);

        Self {
            config,
            window: None,
            render: None,
            scene,
            simulation,
            drag,
            wind_controls,
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ToggleAutoRotate => {
                let enabled = self.scene.toggle_auto_rotate();
                log::info!("Auto-rotate: {}", if enabled { "ON" } else { "OFF" });
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation.update(&mut self.scene, &mut self.drag);

        if let Some(window) = &self.window {
            if self.config.debug.show_state_in_title {
                window.update_title(&self.scene);
            }
        }

        if let Some(render) = &mut self.render {
            match render.render_frame(&self.scene) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => {
                    log::debug!("Surface lost, reconfiguring");
                    render.recover_surface();
                }
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        // Request next frame
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(window.window().clone(), &self.config) {
            Ok(render) => {
                let (width, height) = render.size();
                log::info!("Rendering at {}x{}", width, height);
                self.render = Some(render);
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                        return;
                    }
                    self.wind_controls
                        .process_keyboard(&mut self.scene, key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.drag.process_mouse_button(button, state);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.drag.process_cursor_moved(position);
            }

            WindowEvent::CursorLeft { .. } => {
                self.drag.process_cursor_left();
            }

            WindowEvent::Touch(touch) => {
                self.drag.process_touch(touch.id, touch.phase, touch.location);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    // Config first so its log level can seed the logger
    let config = AppConfig::load();
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting Torus4D");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
