//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The host translates platform events into `InputEvent`s (see
//! [`platform::winit`]); the game loop routes them into `Input` components.

mod snapshot;
mod touch;
mod types;

pub mod platform;

pub use snapshot::Input;
pub use touch::{ActiveTouches, HitArea, TouchControls, VirtualButton};
pub use types::{InputEvent, Key, KeyState, TouchEvent, TouchPhase};
