mod circle;
mod rect;
mod sprite;
mod text;

pub use circle::CircleCmd;
pub use rect::RectCmd;
pub use sprite::{ImageHandle, SpriteCmd};
pub use text::{TextAlign, TextCmd};

use crate::paint::Color;

/// Stroke drawn along the outer edge of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
