use crate::camera::CameraView;
use crate::coords::{Rect, Vec2, Viewport};
use crate::paint::Color;

use super::{Border, DrawList, ImageHandle, TextAlign, ZIndex};

/// Per-entity draw context.
///
/// `view` is computed once per frame before the draw pass and is read-only for
/// the whole pass. The `world_*` helpers translate world coordinates into
/// screen space; HUD-style components push to `list` directly.
pub struct DrawCtx<'a> {
    pub list: &'a mut DrawList,
    pub view: &'a CameraView,
}

impl<'a> DrawCtx<'a> {
    pub fn new(list: &'a mut DrawList, view: &'a CameraView) -> Self {
        Self { list, view }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.view.viewport
    }

    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        self.view.to_screen(world)
    }

    #[inline]
    pub fn to_screen_rect(&self, world: Rect) -> Rect {
        world.translated(-self.view.origin)
    }

    pub fn world_rect(&mut self, z: ZIndex, rect: Rect, color: Color, border: Option<Border>) {
        let rect = self.to_screen_rect(rect);
        self.list.push_rect(z, rect, color, border);
    }

    pub fn world_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        let center = self.to_screen(center);
        self.list.push_solid_circle(z, center, radius, color);
    }

    pub fn world_sprite(&mut self, z: ZIndex, image: ImageHandle, rect: Rect, flip_x: bool) {
        let rect = self.to_screen_rect(rect);
        self.list.push_sprite(z, image, rect, flip_x);
    }

    pub fn world_text(
        &mut self,
        z: ZIndex,
        text: &str,
        size: f32,
        color: Color,
        origin: Vec2,
        align: TextAlign,
    ) {
        let origin = self.to_screen(origin);
        self.list.push_text(z, text, size, color, origin, align);
    }
}
