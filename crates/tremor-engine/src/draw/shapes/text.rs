use crate::coords::Vec2;
use crate::draw::{DrawCmd, DrawList, ZIndex};
use crate::paint::Color;

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Anchor point; vertically this is the text's middle line.
    pub origin: Vec2,
    pub align: TextAlign,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        size: f32,
        color: Color,
        origin: Vec2,
        align: TextAlign,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            size,
            color,
            origin,
            align,
        }));
    }
}
