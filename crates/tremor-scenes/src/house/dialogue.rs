use tremor_engine::coords::Rect;
use tremor_engine::draw::{Border, DrawCtx, TextAlign, ZIndex};
use tremor_engine::entity::{Body, Component};
use tremor_engine::paint::Color;

use crate::palette::rgba;

const BOX_W: f32 = 600.0;
const BOX_H: f32 = 80.0;
const BOX_TOP: f32 = 50.0;

/// Screen-anchored message box near the top of the view.
///
/// Hidden until the first message; a message stays up until replaced.
#[derive(Debug, Clone, Default)]
pub struct Dialogue {
    text: Option<String>,
}

impl Dialogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::info!("dialogue: {text}");
        self.text = Some(text);
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Component for Dialogue {
    fn draw(&self, _owner: &Body, ctx: &mut DrawCtx<'_>) {
        let Some(text) = self.text.as_deref() else {
            return;
        };

        let viewport = ctx.viewport();
        let frame = Rect::new(viewport.width / 2.0 - BOX_W / 2.0, BOX_TOP, BOX_W, BOX_H);
        ctx.list.push_rect(ZIndex::HUD, frame, rgba(0x000000, 0.7), Some(Border::new(2.0, Color::WHITE)));
        ctx.list.push_text(ZIndex::HUD, text, 24.0, Color::WHITE, frame.center(), TextAlign::Center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tremor_engine::camera::CameraView;
    use tremor_engine::coords::{Vec2, Viewport};
    use tremor_engine::draw::{DrawCmd, DrawList};

    fn draw(dialogue: &Dialogue) -> DrawList {
        let mut list = DrawList::new();
        let view = CameraView::new(Vec2::new(900.0, 0.0), Viewport::new(1280.0, 720.0));
        let body = Body { position: Vec2::zero(), size: Vec2::zero() };
        dialogue.draw(&body, &mut DrawCtx::new(&mut list, &view));
        list
    }

    #[test]
    fn hidden_until_first_message() {
        assert!(draw(&Dialogue::new()).is_empty());
    }

    #[test]
    fn box_is_centered_on_screen_regardless_of_camera() {
        let mut d = Dialogue::new();
        d.show("Glass is dangerous!");
        let list = draw(&d);

        assert_eq!(list.len(), 2);
        match &list.items()[1].cmd {
            DrawCmd::Text(t) => {
                assert_eq!(t.text, "Glass is dangerous!");
                assert_eq!(t.origin, Vec2::new(640.0, 90.0));
            }
            other => panic!("unexpected {}", other.kind()),
        }
    }
}
