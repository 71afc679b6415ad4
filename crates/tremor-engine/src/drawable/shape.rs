use crate::coords::{Rect, Vec2};
use crate::draw::{Border, DrawCtx, ZIndex};
use crate::entity::{Body, Component};
use crate::paint::Color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeKind {
    Rect { size: Vec2 },
    /// Anchored by its bounding box, like every other entity visual.
    Circle { radius: f32 },
}

/// Solid primitive drawn at the owner's position (plus `offset`).
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Color,
    pub border: Option<Border>,
    pub offset: Vec2,
    pub z: ZIndex,
}

impl Shape {
    pub fn rect(w: f32, h: f32, color: Color) -> Self {
        Self::new(ShapeKind::Rect { size: Vec2::new(w, h) }, color)
    }

    pub fn circle(radius: f32, color: Color) -> Self {
        Self::new(ShapeKind::Circle { radius }, color)
    }

    fn new(kind: ShapeKind, color: Color) -> Self {
        Self {
            kind,
            color,
            border: None,
            offset: Vec2::zero(),
            z: ZIndex::WORLD,
        }
    }

    pub fn with_z(mut self, z: ZIndex) -> Self {
        self.z = z;
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }
}

impl Component for Shape {
    fn draw(&self, owner: &Body, ctx: &mut DrawCtx<'_>) {
        let origin = owner.position + self.offset;

        match self.kind {
            ShapeKind::Rect { size } => {
                ctx.world_rect(self.z, Rect::from_origin_size(origin, size), self.color, self.border.clone());
            }
            ShapeKind::Circle { radius } => {
                let center = origin + Vec2::new(radius, radius);
                ctx.world_circle(self.z, center, radius, self.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraView;
    use crate::coords::Viewport;
    use crate::draw::{DrawCmd, DrawList};

    fn draw(shape: &Shape, at: Vec2) -> DrawList {
        let mut list = DrawList::new();
        let view = CameraView { origin: Vec2::new(10.0, 10.0), viewport: Viewport::new(100.0, 100.0) };
        let body = Body { position: at, size: Vec2::zero() };
        shape.draw(&body, &mut DrawCtx::new(&mut list, &view));
        list
    }

    #[test]
    fn rect_follows_owner_and_camera() {
        let list = draw(&Shape::rect(20.0, 5.0, Color::WHITE).with_offset(Vec2::new(1.0, 2.0)), Vec2::new(50.0, 50.0));
        match &list.items()[0].cmd {
            DrawCmd::Rect(r) => assert_eq!(r.rect, Rect::new(41.0, 42.0, 20.0, 5.0)),
            other => panic!("unexpected {}", other.kind()),
        }
    }

    #[test]
    fn circle_is_anchored_by_bounding_box() {
        let list = draw(&Shape::circle(15.0, Color::BLACK).with_z(ZIndex::HUD), Vec2::new(10.0, 10.0));
        let item = &list.items()[0];
        assert_eq!(item.key.z, ZIndex::HUD);
        match &item.cmd {
            DrawCmd::Circle(c) => {
                assert_eq!(c.center, Vec2::new(15.0, 15.0));
                assert_eq!(c.radius, 15.0);
            }
            other => panic!("unexpected {}", other.kind()),
        }
    }
}
