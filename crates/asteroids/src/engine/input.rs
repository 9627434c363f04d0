//! Keyboard input
//!
//! Keys are tracked as a bitflag set per frame. Comparing the current set with
//! the previous one tells apart keys that are held, just pressed, or just
//! released.

use bitflags::bitflags;

bitflags! {
    /// Logical game keys
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Keys: u8 {
        /// Accelerate along the heading (W)
        const THRUST = 1 << 0;
        /// Accelerate against the heading (S)
        const REVERSE = 1 << 1;
        /// Turn counter-clockwise (A)
        const LEFT = 1 << 2;
        /// Turn clockwise (D)
        const RIGHT = 1 << 3;
        /// Shoot (Space)
        const FIRE = 1 << 4;
    }
}

/// Keyboard queries for the current frame
pub trait Keyboard {
    /// Any of `keys` is currently held
    fn is_down(&self, keys: Keys) -> bool;

    /// Any of `keys` was released this frame
    fn is_released(&self, keys: Keys) -> bool;

    /// Any of `keys` went down this frame; true once per physical press
    fn is_pressed_once(&self, keys: Keys) -> bool;
}

/// Held keys for this frame and the one before it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    held: Keys,
    previous: Keys,
}

impl KeyState {
    /// Create a state with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame with `held` as the keys currently down
    pub fn advance(&mut self, held: Keys) {
        self.previous = self.held;
        self.held = held;
    }
}

impl Keyboard for KeyState {
    fn is_down(&self, keys: Keys) -> bool {
        self.held.intersects(keys)
    }

    fn is_released(&self, keys: Keys) -> bool {
        (self.previous - self.held).intersects(keys)
    }

    fn is_pressed_once(&self, keys: Keys) -> bool {
        (self.held - self.previous).intersects(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_reported_once() {
        let mut state = KeyState::new();

        state.advance(Keys::FIRE);
        assert!(state.is_pressed_once(Keys::FIRE));
        assert!(state.is_down(Keys::FIRE));

        state.advance(Keys::FIRE);
        assert!(!state.is_pressed_once(Keys::FIRE));
        assert!(state.is_down(Keys::FIRE));
    }

    #[test]
    fn test_release_is_reported_once() {
        let mut state = KeyState::new();
        state.advance(Keys::THRUST | Keys::LEFT);
        state.advance(Keys::LEFT);

        assert!(state.is_released(Keys::THRUST));
        assert!(!state.is_released(Keys::LEFT));
        assert!(!state.is_down(Keys::THRUST));

        state.advance(Keys::LEFT);
        assert!(!state.is_released(Keys::THRUST));
    }

    #[test]
    fn test_queries_match_any_of_several_keys() {
        let mut state = KeyState::new();
        state.advance(Keys::REVERSE);
        assert!(state.is_down(Keys::THRUST | Keys::REVERSE));
        assert!(!state.is_down(Keys::LEFT | Keys::RIGHT));
    }
}
