//! Input management system
//!
//! Keeps two views of the keyboard: which keys are held right now, and which
//! keys went down during the current frame. Held state drives continuous
//! controls; presses drive one-shot actions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Input manager
#[derive(Debug, Default)]
pub struct InputManager {
    held: HashSet<KeyCode>,
    pressed: Vec<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame presses (called once the frame has been processed)
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// Handle key input
    ///
    /// A press on a key that is already held is a repeat and does not
    /// register as a new press.
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.held.insert(key) {
                self.pressed.push(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Is the key currently held down?
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Did the key go down during this frame?
    pub fn was_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Keys pressed this frame, in arrival order
    pub fn pressed_keys(&self) -> &[KeyCode] {
        &self.pressed
    }

    /// Release everything (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Up, true);

        assert!(input.is_key_down(KeyCode::Up));
        assert!(input.was_key_pressed(KeyCode::Up));

        input.handle_key_input(KeyCode::Up, false);
        assert!(!input.is_key_down(KeyCode::Up));
        // The press still happened this frame
        assert!(input.was_key_pressed(KeyCode::Up));
    }

    #[test]
    fn test_presses_clear_at_frame_end_but_hold_persists() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Left, true);
        input.end_frame();

        assert!(input.is_key_down(KeyCode::Left));
        assert!(!input.was_key_pressed(KeyCode::Left));
    }

    #[test]
    fn test_repeat_press_is_not_a_new_press() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Space, true);
        input.end_frame();
        input.handle_key_input(KeyCode::Space, true);

        assert!(!input.was_key_pressed(KeyCode::Space));

        input.handle_key_input(KeyCode::Space, false);
        input.handle_key_input(KeyCode::Space, true);
        assert!(input.was_key_pressed(KeyCode::Space));
        assert_eq!(input.pressed_keys(), &[KeyCode::Space]);
    }

    #[test]
    fn test_reset() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::R, true);
        input.reset();

        assert!(!input.is_key_down(KeyCode::R));
        assert!(input.pressed_keys().is_empty());
    }
}
