use glam::Vec2;
use winit::keyboard::KeyCode;

use crate::player::Facing;

/// Held-key state for the movement keys, fed from winit keyboard events.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Record a key press/release. Returns true if the key was one we track.
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::KeyW | KeyCode::ArrowUp => self.up = pressed,
            KeyCode::KeyS | KeyCode::ArrowDown => self.down = pressed,
            KeyCode::KeyA | KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::KeyD | KeyCode::ArrowRight => self.right = pressed,
            _ => return false,
        }
        true
    }

    /// Movement direction for this tick, normalized so diagonals aren't
    /// faster, plus the facing derived from the held keys.
    ///
    /// When opposing keys cancel out, the last matching key still wins the
    /// facing, same precedence as checking up, down, left, right in order.
    pub fn direction(&self) -> (Vec2, Option<Facing>) {
        let mut dir = Vec2::ZERO;
        let mut facing = None;

        if self.up {
            dir.y -= 1.0;
            facing = Some(Facing::Up);
        }
        if self.down {
            dir.y += 1.0;
            facing = Some(Facing::Down);
        }
        if self.left {
            dir.x -= 1.0;
            facing = Some(Facing::Left);
        }
        if self.right {
            dir.x += 1.0;
            facing = Some(Facing::Right);
        }

        if dir.length_squared() > 0.0 {
            dir = dir.normalize();
        }
        (dir, facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrows_map_to_same_axes() {
        let mut a = InputState::default();
        let mut b = InputState::default();
        assert!(a.set_key(KeyCode::KeyW, true));
        assert!(b.set_key(KeyCode::ArrowUp, true));
        assert_eq!(a.direction().0, b.direction().0);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut input = InputState::default();
        assert!(!input.set_key(KeyCode::Space, true));
        let (dir, facing) = input.direction();
        assert_eq!(dir, Vec2::ZERO);
        assert_eq!(facing, None);
    }

    #[test]
    fn diagonal_is_normalized() {
        let mut input = InputState::default();
        input.set_key(KeyCode::KeyD, true);
        input.set_key(KeyCode::KeyS, true);
        let (dir, facing) = input.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.y > 0.0);
        // Left/right checked last, so right wins the facing.
        assert_eq!(facing, Some(Facing::Right));
    }

    #[test]
    fn opposing_keys_cancel_movement() {
        let mut input = InputState::default();
        input.set_key(KeyCode::KeyA, true);
        input.set_key(KeyCode::KeyD, true);
        let (dir, facing) = input.direction();
        assert_eq!(dir, Vec2::ZERO);
        assert_eq!(facing, Some(Facing::Right));
    }

    #[test]
    fn release_clears_the_axis() {
        let mut input = InputState::default();
        input.set_key(KeyCode::ArrowLeft, true);
        input.set_key(KeyCode::ArrowLeft, false);
        let (dir, facing) = input.direction();
        assert_eq!(dir, Vec2::ZERO);
        assert_eq!(facing, None);
    }
}
