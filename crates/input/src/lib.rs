//! Input handling for keyboard and pointer-lock mouse look.
//!
//! Raw events arrive through the [`EventQueue`] (see [`events`]) and are
//! folded into [`InputState`] exactly once per frame tick. Systems only ever
//! read the folded state; nothing reacts to events re-entrantly.

pub mod events;

pub use events::{ControlEvent, EventQueue, FrameSignals};

use glam::Vec2;
use std::collections::HashSet;

/// Manages input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,

    /// Mouse movement delta this frame.
    mouse_delta: Vec2,
    /// Accumulated mouse delta (raw motion while the pointer is locked).
    accumulated_delta: Vec2,

    /// Whether the pointer is captured/locked.
    cursor_locked: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame, before the
    /// event queue is drained.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_delta = self.accumulated_delta;
        self.accumulated_delta = Vec2::ZERO;
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
        }
    }

    /// Process raw mouse movement. Ignored while the pointer is unlocked so
    /// stray motion during the pause overlay cannot turn the view.
    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.cursor_locked {
            self.accumulated_delta.x += delta.0 as f32;
            self.accumulated_delta.y += delta.1 as f32;
        }
    }

    /// Release every held key and drop any pending motion. Used when the
    /// window blurs or the pointer unlocks, so no intent flag survives a pause.
    pub fn clear_held(&mut self) {
        self.keys_held.clear();
        self.accumulated_delta = Vec2::ZERO;
    }

    // Query methods

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Get the mouse movement delta for this frame.
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Check if the pointer is locked.
    pub fn is_cursor_locked(&self) -> bool {
        self.cursor_locked
    }

    /// Set pointer lock state.
    pub fn set_cursor_locked(&mut self, locked: bool) {
        self.cursor_locked = locked;
    }

    /// Get movement intent as a normalized vector (WASD or arrow keys;
    /// y = forward/back, x = strafe).
    pub fn get_movement_input(&self) -> Vec2 {
        let mut movement = Vec2::ZERO;

        if self.is_key_held(KeyCode::KeyW) || self.is_key_held(KeyCode::ArrowUp) {
            movement.y += 1.0;
        }
        if self.is_key_held(KeyCode::KeyS) || self.is_key_held(KeyCode::ArrowDown) {
            movement.y -= 1.0;
        }
        if self.is_key_held(KeyCode::KeyA) || self.is_key_held(KeyCode::ArrowLeft) {
            movement.x -= 1.0;
        }
        if self.is_key_held(KeyCode::KeyD) || self.is_key_held(KeyCode::ArrowRight) {
            movement.x += 1.0;
        }

        if movement.length_squared() > 0.0 {
            movement = movement.normalize();
        }

        movement
    }

    /// Check if any movement key is held (unnormalized intent).
    pub fn wants_to_move(&self) -> bool {
        self.get_movement_input().length_squared() > 0.0
    }

    /// Check if interact was pressed (E).
    pub fn is_interact_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyE)
    }

    /// Check if the world reset key was pressed (R).
    pub fn is_reset_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyR)
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;

#[cfg(test)]
mod tests {
    use super::*;

    /// Holding a key sets pressed exactly on the frame it went down.
    #[test]
    fn pressed_is_edge_triggered() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        assert!(input.is_key_pressed(KeyCode::KeyW));
        assert!(input.is_key_held(KeyCode::KeyW));

        input.begin_frame();
        assert!(!input.is_key_pressed(KeyCode::KeyW));
        assert!(input.is_key_held(KeyCode::KeyW));
    }

    /// Arrow keys and WASD both drive movement intent; diagonals normalize.
    #[test]
    fn movement_vector_normalized() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);
        input.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        let m = input.get_movement_input();
        assert!((m.length() - 1.0).abs() < 1e-5);
        assert!(m.x > 0.0 && m.y > 0.0);
    }

    /// Mouse motion only accumulates while the pointer is locked.
    #[test]
    fn motion_gated_by_lock() {
        let mut input = InputState::new();
        input.process_mouse_motion((5.0, 3.0));
        input.begin_frame();
        assert_eq!(input.mouse_delta(), Vec2::ZERO);

        input.set_cursor_locked(true);
        input.process_mouse_motion((5.0, 3.0));
        input.begin_frame();
        assert_eq!(input.mouse_delta(), Vec2::new(5.0, 3.0));
    }

    /// clear_held drops movement intent so a pause never leaves a stuck key.
    #[test]
    fn clear_held_drops_intent() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        input.clear_held();
        assert!(!input.wants_to_move());
    }
}
