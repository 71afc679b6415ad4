//! Paint model for the draw stream.
//!
//! Scope is intentionally small: solid colors only. Images are referenced by
//! opaque handles in `draw::shapes::sprite`.

pub mod color;

pub use color::{Color, ColorParseError};
