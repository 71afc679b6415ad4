//! Coordinate and geometry types shared by the runtime and the draw stream.
//!
//! Canonical space:
//! - world units are logical pixels
//! - origin top-left, +X right, +Y down
//!
//! Screen space is world space shifted by the camera origin.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
