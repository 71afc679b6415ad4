use crate::coords::Rect;
use crate::draw::{DrawCmd, DrawList, ZIndex};

/// Opaque reference to a pre-loaded image owned by the host application.
///
/// The runtime never inspects or loads images; it only forwards the handle to
/// the presenter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ImageHandle(pub u32);

/// Sprite draw payload: `image` stretched over `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCmd {
    pub image: ImageHandle,
    pub rect: Rect,
    /// Mirror horizontally around the rect's vertical center line.
    pub flip_x: bool,
}

impl DrawList {
    /// Records a sprite draw command.
    #[inline]
    pub fn push_sprite(&mut self, z: ZIndex, image: ImageHandle, rect: Rect, flip_x: bool) {
        self.push(z, DrawCmd::Sprite(SpriteCmd { image, rect, flip_x }));
    }
}
