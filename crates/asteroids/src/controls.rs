//! Continuous ship controls sampled from held keys

use bitflags::bitflags;
use rust_engine::input::InputManager;

use crate::config::ControlsConfig;

bitflags! {
    /// Ship controls held during a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Controls: u8 {
        /// Turn counter-clockwise
        const ROTATE_LEFT = 1 << 0;
        /// Turn clockwise
        const ROTATE_RIGHT = 1 << 1;
        /// Accelerate along the heading
        const THRUST = 1 << 2;
    }
}

impl Controls {
    /// Read the held keys for this frame through the configured bindings
    pub fn from_input(input: &InputManager, bindings: &ControlsConfig) -> Self {
        let mut controls = Self::empty();
        controls.set(Self::ROTATE_LEFT, input.is_key_down(bindings.rotate_left));
        controls.set(Self::ROTATE_RIGHT, input.is_key_down(bindings.rotate_right));
        controls.set(Self::THRUST, input.is_key_down(bindings.thrust));
        controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_engine::input::KeyCode;

    #[test]
    fn test_reads_held_keys() {
        let mut input = InputManager::new();
        let bindings = ControlsConfig::default();

        assert_eq!(Controls::from_input(&input, &bindings), Controls::empty());

        input.handle_key_input(KeyCode::Left, true);
        input.handle_key_input(KeyCode::Up, true);
        assert_eq!(
            Controls::from_input(&input, &bindings),
            Controls::ROTATE_LEFT | Controls::THRUST
        );

        input.handle_key_input(KeyCode::Left, false);
        input.handle_key_input(KeyCode::Right, true);
        assert_eq!(
            Controls::from_input(&input, &bindings),
            Controls::ROTATE_RIGHT | Controls::THRUST
        );
    }

    #[test]
    fn test_custom_bindings() {
        let mut input = InputManager::new();
        let bindings = ControlsConfig {
            rotate_left: KeyCode::A,
            rotate_right: KeyCode::D,
            thrust: KeyCode::W,
            ..Default::default()
        };

        input.handle_key_input(KeyCode::Up, true);
        input.handle_key_input(KeyCode::W, true);
        input.handle_key_input(KeyCode::D, true);

        assert_eq!(
            Controls::from_input(&input, &bindings),
            Controls::ROTATE_RIGHT | Controls::THRUST
        );
    }
}
