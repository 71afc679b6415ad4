//! Draw stream types.
//!
//! Responsibilities:
//! - store renderer-agnostic, screen-space draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - carry the per-frame camera view into component `draw` hooks
//!
//! The game loop never rasterizes anything itself; a `Presenter` consumes
//! the list once per frame.

mod cmd;
mod ctx;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use ctx::DrawCtx;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::{Border, CircleCmd, ImageHandle, RectCmd, SpriteCmd, TextAlign, TextCmd};
pub use z_index::ZIndex;
