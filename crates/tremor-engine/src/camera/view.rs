use crate::coords::{Rect, Vec2, Viewport};

/// The camera transform for one frame: shaken origin plus viewport.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CameraView {
    pub origin: Vec2,
    pub viewport: Viewport,
}

impl CameraView {
    pub fn new(origin: Vec2, viewport: Viewport) -> Self {
        Self { origin, viewport }
    }

    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.origin
    }

    #[inline]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.origin
    }

    /// World-space rectangle currently on screen.
    #[inline]
    pub fn visible(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.viewport.size())
    }
}
