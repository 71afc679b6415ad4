//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and one Window, feeds platform input into the
//! [`Game`](crate::game::Game) and hands each frame's draw list to a
//! [`Presenter`].

mod present;
mod runtime;

pub use present::{AppControl, Presenter};
pub use runtime::{Runtime, RuntimeConfig};
