use std::fmt;

use crate::coords::Vec2;

/// Logical key identifier.
///
/// The host maps platform key codes into these variants where possible.
/// Unsupported keys become `Key::Unknown(code)` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Lifecycle of a single finger on the touch surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// One finger update in viewport (screen) coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchEvent {
    /// Finger identifier, stable from `Started` until `Ended`/`Cancelled`.
    pub id: u64,
    pub phase: TouchPhase,
    pub position: Vec2,
}

/// Platform-agnostic input events delivered to the game loop.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is an OS key-repeat.
        repeat: bool,
    },

    Touch(TouchEvent),

    /// Window focus change. Losing focus releases every held key.
    Focused(bool),
}

impl InputEvent {
    /// Convenience constructor for a non-repeat key press.
    pub fn key_down(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    /// Convenience constructor for a key release.
    pub fn key_up(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Released, repeat: false }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
