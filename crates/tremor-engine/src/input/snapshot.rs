use std::collections::HashSet;

use crate::entity::Component;

use super::types::{InputEvent, Key, KeyState};

/// Keyboard/touch state snapshot component.
///
/// Holds which logical keys are currently down. Keyboard events and synthetic
/// touch presses write into the same set, so gameplay code sees one
/// level-triggered view regardless of where a press came from.
///
/// Attach one to any entity that reads input; the game loop routes every key
/// event to every live `Input`.
#[derive(Debug, Default, Clone)]
pub struct Input {
    keys_down: HashSet<Key>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a key or focus event. Touch events are handled by
    /// [`TouchControls`](super::TouchControls) and ignored here.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Key { key, state, .. } => {
                self.set_key(*key, *state == KeyState::Pressed);
            }

            InputEvent::Focused(false) => {
                // Key-up events are lost while unfocused; never leave keys stuck.
                self.keys_down.clear();
            }

            InputEvent::Focused(true) | InputEvent::Touch(_) => {}
        }
    }

    /// Writes a key's pressed state directly (used by synthetic sources).
    pub fn set_key(&mut self, key: Key, down: bool) {
        if down {
            self.keys_down.insert(key);
        } else {
            self.keys_down.remove(&key);
        }
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// True if any of `keys` is down (e.g. arrow key or WASD alternative).
    pub fn any_down(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.keys_down.contains(k))
    }

    pub fn release_all(&mut self) {
        self.keys_down.clear();
    }
}

impl Component for Input {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut input = Input::new();
        input.apply_event(&InputEvent::key_down(Key::ArrowLeft));
        assert!(input.is_key_down(Key::ArrowLeft));
        assert!(!input.is_key_down(Key::ArrowRight));

        input.apply_event(&InputEvent::key_up(Key::ArrowLeft));
        assert!(!input.is_key_down(Key::ArrowLeft));
    }

    #[test]
    fn repeat_press_keeps_key_down() {
        let mut input = Input::new();
        input.apply_event(&InputEvent::key_down(Key::D));
        input.apply_event(&InputEvent::Key { key: Key::D, state: KeyState::Pressed, repeat: true });
        assert!(input.is_key_down(Key::D));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut input = Input::new();
        input.apply_event(&InputEvent::key_down(Key::A));
        input.apply_event(&InputEvent::key_down(Key::Space));
        input.apply_event(&InputEvent::Focused(false));
        assert!(!input.any_down(&[Key::A, Key::Space]));
    }

    #[test]
    fn synthetic_keys_share_state_with_keyboard() {
        let mut input = Input::new();
        input.set_key(Key::E, true);
        assert!(input.any_down(&[Key::E, Key::Space]));
        input.apply_event(&InputEvent::key_up(Key::E));
        assert!(!input.is_key_down(Key::E));
    }
}
