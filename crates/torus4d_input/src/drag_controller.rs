//! Pointer drag rotation
//!
//! Controls:
//! - Left mouse drag: rotate the 3D view
//! - One-finger touch drag: same as mouse
//!
//! Horizontal motion turns about y, vertical motion about x. Deltas are
//! accumulated between frames and applied once in [`DragController::update`].

use torus4d_core::SceneState;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, TouchPhase};

pub struct DragController {
    dragging: bool,
    /// Last pointer position seen while dragging
    last: Option<[f64; 2]>,
    /// Latest cursor position, tracked even when not dragging
    cursor: Option<[f64; 2]>,
    /// Finger that owns the current touch drag
    touch_id: Option<u64>,
    pending_dx: f32,
    pending_dy: f32,

    /// Radians per pixel of drag
    pub sensitivity: f32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            last: None,
            cursor: None,
            touch_id: None,
            pending_dx: 0.0,
            pending_dy: 0.0,
            sensitivity: 0.01,
        }
    }

    /// Builder: set drag sensitivity
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Accumulated, not yet applied, pixel delta
    pub fn pending_delta(&self) -> (f32, f32) {
        (self.pending_dx, self.pending_dy)
    }

    /// Begin a drag at `(x, y)`
    pub fn press(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.last = Some([x, y]);
    }

    /// Pointer moved to `(x, y)`; only counts while dragging
    pub fn move_to(&mut self, x: f64, y: f64) {
        if !self.dragging {
            return;
        }
        if let Some([lx, ly]) = self.last {
            self.pending_dx += (x - lx) as f32;
            self.pending_dy += (y - ly) as f32;
        }
        self.last = Some([x, y]);
    }

    /// End the drag; motion already accumulated is kept
    pub fn release(&mut self) {
        self.dragging = false;
        self.last = None;
        self.touch_id = None;
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                if let Some([x, y]) = self.cursor {
                    self.press(x, y);
                } else {
                    // No position yet: the first motion event starts tracking
                    self.dragging = true;
                }
            }
            ElementState::Released => self.release(),
        }
    }

    /// Process cursor motion
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some([position.x, position.y]);
        if self.dragging && self.touch_id.is_none() {
            if self.last.is_none() {
                self.last = Some([position.x, position.y]);
            } else {
                self.move_to(position.x, position.y);
            }
        }
    }

    /// Cursor left the window; ends a mouse drag
    pub fn process_cursor_left(&mut self) {
        self.cursor = None;
        if self.touch_id.is_none() {
            self.release();
        }
    }

    /// Process a touch event; only the first finger drags
    pub fn process_touch(&mut self, id: u64, phase: TouchPhase, location: PhysicalPosition<f64>) {
        match phase {
            TouchPhase::Started => {
                if self.touch_id.is_none() {
                    self.touch_id = Some(id);
                    self.press(location.x, location.y);
                }
            }
            TouchPhase::Moved => {
                if self.touch_id == Some(id) {
                    self.move_to(location.x, location.y);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.touch_id == Some(id) {
                    self.release();
                }
            }
        }
    }

    /// Apply the accumulated drag to the scene and reset it
    ///
    /// Returns true if the view changed.
    pub fn update(&mut self, scene: &mut SceneState) -> bool {
        if self.pending_dx == 0.0 && self.pending_dy == 0.0 {
            return false;
        }
        scene.apply_drag(self.pending_dx, self.pending_dy, self.sensitivity);
        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> PhysicalPosition<f64> {
        PhysicalPosition::new(x, y)
    }

    #[test]
    fn test_motion_without_press_is_ignored() {
        let mut drag = DragController::new();
        drag.process_cursor_moved(at(10.0, 10.0));
        drag.process_cursor_moved(at(50.0, 80.0));
        assert_eq!(drag.pending_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_mouse_drag_accumulates() {
        let mut drag = DragController::new();
        drag.process_cursor_moved(at(100.0, 100.0));
        drag.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        drag.process_cursor_moved(at(110.0, 95.0));
        drag.process_cursor_moved(at(120.0, 90.0));
        assert_eq!(drag.pending_delta(), (20.0, -10.0));

        drag.process_mouse_button(MouseButton::Left, ElementState::Released);
        drag.process_cursor_moved(at(300.0, 300.0));
        assert_eq!(drag.pending_delta(), (20.0, -10.0));
    }

    #[test]
    fn test_right_button_does_not_drag() {
        let mut drag = DragController::new();
        drag.process_cursor_moved(at(0.0, 0.0));
        drag.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_press_before_any_motion() {
        let mut drag = DragController::new();
        drag.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        drag.process_cursor_moved(at(40.0, 40.0));
        drag.process_cursor_moved(at(45.0, 41.0));
        assert_eq!(drag.pending_delta(), (5.0, 1.0));
    }

    #[test]
    fn test_cursor_left_ends_drag() {
        let mut drag = DragController::new();
        drag.press(0.0, 0.0);
        drag.process_cursor_left();
        assert!(!drag.is_dragging());
        drag.move_to(10.0, 10.0);
        assert_eq!(drag.pending_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_touch_drag_follows_first_finger() {
        let mut drag = DragController::new();
        drag.process_touch(1, TouchPhase::Started, at(10.0, 10.0));
        drag.process_touch(2, TouchPhase::Started, at(500.0, 500.0));
        drag.process_touch(2, TouchPhase::Moved, at(600.0, 600.0));
        drag.process_touch(1, TouchPhase::Moved, at(13.0, 14.0));
        assert_eq!(drag.pending_delta(), (3.0, 4.0));

        drag.process_touch(2, TouchPhase::Ended, at(600.0, 600.0));
        assert!(drag.is_dragging());
        drag.process_touch(1, TouchPhase::Ended, at(13.0, 14.0));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_update_applies_sensitivity_once() {
        let mut drag = DragController::new();
        let mut scene = SceneState::default();
        drag.press(0.0, 0.0);
        drag.move_to(10.0, -5.0);

        assert!(drag.update(&mut scene));
        assert!((scene.angles_3d.y - 0.1).abs() < 1e-6);
        assert!((scene.angles_3d.x + 0.05).abs() < 1e-6);

        // Nothing pending the second time
        assert!(!drag.update(&mut scene));
        assert!((scene.angles_3d.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_custom_sensitivity() {
        let mut drag = DragController::new().with_sensitivity(0.02);
        let mut scene = SceneState::default();
        drag.press(0.0, 0.0);
        drag.move_to(0.0, 10.0);
        drag.update(&mut scene);
        assert!((scene.angles_3d.x - 0.2).abs() < 1e-6);
    }
}
