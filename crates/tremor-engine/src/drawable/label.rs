use crate::coords::Vec2;
use crate::draw::{DrawCtx, TextAlign, ZIndex};
use crate::entity::{Body, Component};
use crate::paint::Color;

/// Coordinate space a [`Label`] is positioned in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LabelSpace {
    /// `offset` is relative to the owner's world position; moves with the camera.
    #[default]
    World,
    /// `offset` is an absolute screen position; ignores the camera (HUD text).
    Screen,
}

/// Single line of text.
///
/// An empty label draws nothing, so gameplay code can clear feedback text by
/// setting it to `""`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub offset: Vec2,
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
    pub space: LabelSpace,
    pub z: ZIndex,
}

impl Label {
    pub fn new(text: impl Into<String>, size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            offset: Vec2::zero(),
            size,
            color,
            align: TextAlign::Left,
            space: LabelSpace::World,
            z: ZIndex::WORLD,
        }
    }

    /// Screen-anchored label at `position`, drawn on the HUD layer.
    pub fn hud(text: impl Into<String>, size: f32, color: Color, position: Vec2) -> Self {
        Self {
            offset: position,
            space: LabelSpace::Screen,
            z: ZIndex::HUD,
            ..Self::new(text, size, color)
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_z(mut self, z: ZIndex) -> Self {
        self.z = z;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Component for Label {
    fn draw(&self, owner: &Body, ctx: &mut DrawCtx<'_>) {
        if self.text.is_empty() {
            return;
        }

        match self.space {
            LabelSpace::World => {
                let origin = owner.position + self.offset;
                ctx.world_text(self.z, &self.text, self.size, self.color, origin, self.align);
            }
            LabelSpace::Screen => {
                ctx.list.push_text(self.z, self.text.as_str(), self.size, self.color, self.offset, self.align);
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

    fn draw(label: &Label) -> DrawList {
        let mut list = DrawList::new();
        let view = CameraView { origin: Vec2::new(300.0, 0.0), viewport: Viewport::new(800.0, 600.0) };
        let body = Body { position: Vec2::new(400.0, 100.0), size: Vec2::zero() };
        label.draw(&body, &mut DrawCtx::new(&mut list, &view));
        list
    }

    fn origin(list: &DrawList) -> Vec2 {
        match &list.items()[0].cmd {
            DrawCmd::Text(t) => t.origin,
            other => panic!("unexpected {}", other.kind()),
        }
    }

    #[test]
    fn world_label_moves_with_camera() {
        let list = draw(&Label::new("!", 20.0, Color::WHITE).with_offset(Vec2::new(0.0, -30.0)));
        assert_eq!(origin(&list), Vec2::new(100.0, 70.0));
    }

    #[test]
    fn hud_label_ignores_camera() {
        let list = draw(&Label::hud("Score: 0", 24.0, Color::WHITE, Vec2::new(20.0, 40.0)));
        assert_eq!(origin(&list), Vec2::new(20.0, 40.0));
        assert_eq!(list.items()[0].key.z, ZIndex::HUD);
    }

    #[test]
    fn empty_text_draws_nothing() {
        let mut label = Label::hud("PERFECT", 24.0, Color::WHITE, Vec2::zero());
        label.set_text("");
        assert!(draw(&label).is_empty());
    }
}
