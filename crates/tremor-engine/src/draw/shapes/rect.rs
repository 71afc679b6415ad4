use crate::coords::Rect;
use crate::draw::{DrawCmd, DrawList, ZIndex};
use crate::paint::Color;

use super::Border;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rectangle, optionally outlined.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, color: Color, border: Option<Border>) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, color, border }));
    }

    /// Records a solid rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rect(z, rect, color, None);
    }
}
