//! Scene / loop controller.
//!
//! Responsibilities:
//! - own the live entity list and the deferred spawn/despawn queue
//! - drive the fixed-role frame: timers, update, removals, camera, draw
//! - host the active [`Level`] and tear scenes down on level switches
//! - route input events to `Input` components and the touch bridge

mod commands;
mod config;
mod ctx;
mod game;
mod level;
mod timers;

#[cfg(test)]
pub(crate) mod test_support;

pub use commands::Commands;
pub use config::{ConfigError, GameConfig};
pub use ctx::UpdateCtx;
pub use game::{Game, LoopState};
pub use level::{Level, LevelCtx};
pub use timers::{DueTimer, Timers};
