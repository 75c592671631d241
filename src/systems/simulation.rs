//! Frame simulation system
//!
//! Manages one tick of the scene:
//! - Delta time calculation
//! - Pending drag → 3D rotation
//! - Auto-rotation step

use std::time::Instant;

use torus4d_core::{SceneState, Simulation, SimulationSettings};
use torus4d_input::DragController;

/// Longest frame time passed to the step, in seconds
const MAX_FRAME_TIME: f32 = 0.25;

/// Manages the per-frame scene update
pub struct SimulationSystem {
    last_frame: Instant,
    simulation: Simulation,
}

impl SimulationSystem {
    pub fn new(settings: SimulationSettings) -> Self {
        Self {
            last_frame: Instant::now(),
            simulation: Simulation::new(settings),
        }
    }

    pub fn settings(&self) -> &SimulationSettings {
        self.simulation.settings()
    }

    /// Run one frame: apply the drag, then step the animation
    ///
    /// Returns true if anything in the scene changed.
    pub fn update(&mut self, scene: &mut SceneState, drag: &mut DragController) -> bool {
        let now = Instant::now();
        // Cap dt after a stall (first frame, window drag, focus loss)
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_TIME);
        self.last_frame = now;

        self.tick(scene, drag, dt)
    }

    /// One frame with an explicit frame time
    pub fn tick(&self, scene: &mut SceneState, drag: &mut DragController, dt: f32) -> bool {
        let dragged = drag.update(scene);
        let stepped = self.simulation.step(scene, dt);
        dragged || stepped
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(SimulationSettings::default())
    }
}
