//! Title screen: pick a scene with `1` / `2` (or tap a button), `Esc` quits.

use tremor_engine::coords::{Rect, Vec2, Viewport};
use tremor_engine::draw::TextAlign;
use tremor_engine::drawable::Label;
use tremor_engine::entity::{Behavior, Entity};
use tremor_engine::game::{Level, LevelCtx, UpdateCtx};
use tremor_engine::input::{HitArea, Input, Key, TouchControls, VirtualButton};
use tremor_engine::paint::Color;

use crate::edges::KeyEdges;
use crate::house::HouseLevel;
use crate::palette::rgb;
use crate::rhythm::RhythmLevel;

const BUTTON_W: f32 = 260.0;
const BUTTON_H: f32 = 50.0;
const BUTTON_SPACING: f32 = 70.0;

const ENTRIES: [(Key, &str); 2] = [(Key::Digit1, "1. Safe Spots"), (Key::Digit2, "2. Drop & Cover")];

pub struct MenuLevel {
    seed: u64,
}

impl MenuLevel {
    /// `seed` feeds whichever scene gets picked next.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn button_rect(viewport: Viewport, index: usize) -> Rect {
        let c = viewport.center();
        Rect::new(c.x - BUTTON_W / 2.0, c.y - 50.0 + BUTTON_SPACING * index as f32, BUTTON_W, BUTTON_H)
    }
}

impl Level for MenuLevel {
    fn name(&self) -> &str {
        "menu"
    }

    fn enter(&mut self, ctx: &mut LevelCtx<'_>) {
        let viewport = ctx.viewport;
        let center = viewport.center();

        ctx.spawn(
            Entity::new("title", Vec2::zero()).with_component(
                Label::hud("Earthquake Safety Helper", 40.0, Color::WHITE, Vec2::new(center.x, center.y - 150.0))
                    .with_align(TextAlign::Center),
            ),
        );

        // The entry buttons are the touch overlay itself; keyboard digits and
        // taps both land on the controller's `Input`.
        let controls = ENTRIES.iter().enumerate().fold(TouchControls::new(), |controls, (i, (key, text))| {
            controls.with_button(VirtualButton::new(HitArea::Rect(Self::button_rect(viewport, i)), *key, *text))
        });

        ctx.spawn(
            Entity::new("menu-input", Vec2::zero())
                .with_component(Input::new())
                .with_component(controls)
                .with_behavior(MenuInput::new(self.seed)),
        );
        ctx.spawn(
            Entity::new("menu-hint", Vec2::zero()).with_component(
                Label::hud("Esc to quit", 16.0, rgb(0xAAAAAA), Vec2::new(center.x, viewport.height - 40.0))
                    .with_align(TextAlign::Center),
            ),
        );
    }
}

struct MenuInput {
    seed: u64,
    edges: KeyEdges<3>,
}

impl MenuInput {
    fn new(seed: u64) -> Self {
        Self { seed, edges: KeyEdges::new([Key::Digit1, Key::Digit2, Key::Escape]) }
    }
}

impl Behavior for MenuInput {
    fn update(&mut self, entity: &mut Entity, ctx: &mut UpdateCtx<'_>) {
        let Some(input) = entity.component::<Input>() else {
            return;
        };
        let [house, rhythm, quit] = self.edges.pressed(input);

        if house {
            log::info!("menu: starting house scene (seed {})", self.seed);
            ctx.commands.switch_level(Box::new(HouseLevel::new(self.seed)));
        } else if rhythm {
            log::info!("menu: starting rhythm scene (seed {})", self.seed);
            ctx.commands.switch_level(Box::new(RhythmLevel::new(self.seed)));
        } else if quit {
            ctx.commands.request_exit();
        }
    }
}
