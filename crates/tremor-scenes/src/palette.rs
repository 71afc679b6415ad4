//! Scene colors.

use tremor_engine::paint::Color;

/// Opaque color from a `0xRRGGBB` literal.
pub fn rgb(hex: u32) -> Color {
    Color::from_srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
}

pub fn rgba(hex: u32, alpha: f32) -> Color {
    rgb(hex).with_alpha(alpha)
}
