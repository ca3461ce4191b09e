//! Explicit control-event queue.
//!
//! The embedding shell (window loop, browser bridge, test script) pushes
//! [`ControlEvent`]s as they happen; the simulation drains the queue exactly
//! once per tick via [`EventQueue::drain_into`]. Lock/unlock and blur are
//! surfaced as [`FrameSignals`] so the state machine can react on the tick
//! boundary instead of inside a callback chain.

use std::collections::VecDeque;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::InputState;

/// A single input-layer event, queued until the next simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Pointer lock acquired (start/continue button analog).
    CursorLocked,
    /// Pointer lock released (escape / focus loss on the pointer).
    CursorUnlocked,
    /// Keyboard key transition.
    Key(KeyCode, ElementState),
    /// Raw relative mouse motion.
    MouseMotion { dx: f64, dy: f64 },
    /// The window lost focus entirely.
    WindowBlurred,
}

/// Lock/blur transitions observed while draining one tick's events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSignals {
    pub lock_acquired: bool,
    pub lock_released: bool,
    pub blurred: bool,
}

/// FIFO buffer of control events, consumed once per frame tick.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<ControlEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next tick.
    pub fn push(&mut self, event: ControlEvent) {
        self.events.push_back(event);
    }

    /// Number of events waiting.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain every queued event into the input state, in arrival order, and
    /// report the lock/blur transitions seen this tick.
    ///
    /// Lock state is applied before any motion that follows it in the queue,
    /// so motion sent while unlocked is still discarded even when both arrive
    /// within the same tick.
    pub fn drain_into(&mut self, input: &mut InputState) -> FrameSignals {
        let mut signals = FrameSignals::default();

        while let Some(event) = self.events.pop_front() {
            match event {
                ControlEvent::CursorLocked => {
                    input.set_cursor_locked(true);
                    signals.lock_acquired = true;
                    log::debug!("pointer lock acquired");
                }
                ControlEvent::CursorUnlocked => {
                    input.set_cursor_locked(false);
                    input.clear_held();
                    signals.lock_released = true;
                    log::debug!("pointer lock released");
                }
                ControlEvent::Key(code, state) => {
                    input.process_keyboard(code, state);
                }
                ControlEvent::MouseMotion { dx, dy } => {
                    input.process_mouse_motion((dx, dy));
                }
                ControlEvent::WindowBlurred => {
                    input.clear_held();
                    signals.blurred = true;
                }
            }
        }

        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Draining applies events in order and empties the queue.
    #[test]
    fn drain_applies_in_order_and_empties() {
        let mut queue = EventQueue::new();
        let mut input = InputState::new();

        queue.push(ControlEvent::CursorLocked);
        queue.push(ControlEvent::Key(KeyCode::KeyW, ElementState::Pressed));
        queue.push(ControlEvent::MouseMotion { dx: 2.0, dy: -1.0 });

        let signals = queue.drain_into(&mut input);
        assert!(queue.is_empty());
        assert!(signals.lock_acquired && !signals.lock_released);
        assert!(input.is_key_held(KeyCode::KeyW));

        input.begin_frame();
        assert_eq!(input.mouse_delta().x, 2.0);
    }

    /// Unlock inside the same tick drops held keys and later motion.
    #[test]
    fn unlock_clears_intent_mid_tick() {
        let mut queue = EventQueue::new();
        let mut input = InputState::new();

        queue.push(ControlEvent::CursorLocked);
        queue.push(ControlEvent::Key(KeyCode::KeyW, ElementState::Pressed));
        queue.push(ControlEvent::CursorUnlocked);
        queue.push(ControlEvent::MouseMotion { dx: 50.0, dy: 0.0 });

        let signals = queue.drain_into(&mut input);
        assert!(signals.lock_acquired && signals.lock_released);
        assert!(!input.wants_to_move());

        input.begin_frame();
        assert_eq!(input.mouse_delta().x, 0.0);
    }

    /// A blur releases movement intent even without a pointer-lock event.
    #[test]
    fn blur_releases_keys() {
        let mut queue = EventQueue::new();
        let mut input = InputState::new();

        queue.push(ControlEvent::Key(KeyCode::KeyD, ElementState::Pressed));
        queue.drain_into(&mut input);
        assert!(input.wants_to_move());

        queue.push(ControlEvent::WindowBlurred);
        let signals = queue.drain_into(&mut input);
        assert!(signals.blurred);
        assert!(!input.wants_to_move());
    }
}
