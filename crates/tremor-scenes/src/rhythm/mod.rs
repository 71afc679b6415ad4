//! "Drop & Cover": hit falling arrows on the beat; when the ground shakes,
//! the dancer takes cover and every hit counts double.

mod dancer;
mod note;
mod scoring;

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tremor_engine::coords::Vec2;
use tremor_engine::draw::{Border, TextAlign, ZIndex};
use tremor_engine::drawable::{Label, Shape};
use tremor_engine::entity::{Entity, EntityId};
use tremor_engine::game::{Level, LevelCtx};
use tremor_engine::input::{Input, Key, TouchControls};
use tremor_engine::paint::Color;

use crate::edges::KeyEdges;
use crate::menu::MenuLevel;
use crate::palette::{rgb, rgba};

pub use dancer::Dancer;
pub use note::{Lane, Note};
use scoring::{Difficulty, judge};

use note::{LANE_SPACING, NOTE_SIZE};

const FIRST_QUAKE: f32 = 10.0;
const QUAKE_SECONDS: f32 = 4.0;
const FEEDBACK_SECONDS: f32 = 0.5;
/// Distance of the target line from the bottom of the view.
const TARGET_FROM_BOTTOM: f32 = 100.0;

const QUAKE_OVER: &str = "quake_over";
const CLEAR_FEEDBACK: &str = "clear_feedback";

const QUAKE_TEXT: &str = "EARTHQUAKE!";

/// Where notes should be when their key is pressed.
pub fn target_y(viewport_height: f32) -> f32 {
    viewport_height - TARGET_FROM_BOTTOM
}

#[derive(Debug, Default, Clone, Copy)]
struct Hud {
    score: Option<EntityId>,
    combo: Option<EntityId>,
    feedback: Option<EntityId>,
}

pub struct RhythmLevel {
    rng: StdRng,
    seed: u64,
    target_y: f32,

    score: i64,
    combo: u32,
    difficulty: Difficulty,
    spawn_timer: f32,
    quake_timer: f32,
    quake: bool,

    controller: Option<EntityId>,
    dancer: Option<EntityId>,
    hud: Hud,
    edges: KeyEdges<5>,
    /// Texts shown with an auto-clear pending, oldest first.
    feedback_queue: VecDeque<String>,
}

impl RhythmLevel {
    pub fn new(seed: u64) -> Self {
        let keys = [Key::ArrowLeft, Key::ArrowDown, Key::ArrowUp, Key::ArrowRight, Key::Escape];
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            target_y: 0.0,
            score: 0,
            combo: 0,
            difficulty: Difficulty::default(),
            spawn_timer: 0.0,
            quake_timer: FIRST_QUAKE,
            quake: false,
            controller: None,
            dancer: None,
            hud: Hud::default(),
            edges: KeyEdges::new(keys),
            feedback_queue: VecDeque::new(),
        }
    }

    fn set_label(ctx: &mut LevelCtx<'_>, id: Option<EntityId>, text: &str, color: Option<Color>) {
        if let Some(label) = id.and_then(|id| ctx.component_mut::<Label>(id)) {
            label.set_text(text);
            if let Some(color) = color {
                label.color = color;
            }
        }
    }

    /// Shows `text`; anything but the quake alert clears itself shortly after,
    /// unless replaced in the meantime.
    fn feedback(&mut self, ctx: &mut LevelCtx<'_>, text: &str, color: Color) {
        Self::set_label(ctx, self.hud.feedback, text, Some(color));
        if text.contains(QUAKE_TEXT) {
            return;
        }
        self.feedback_queue.push_back(text.to_owned());
        ctx.timers.schedule_secs(FEEDBACK_SECONDS, CLEAR_FEEDBACK);
    }

    fn refresh_hud(&self, ctx: &mut LevelCtx<'_>) {
        Self::set_label(ctx, self.hud.score, &format!("Score: {}", self.score), None);
        Self::set_label(ctx, self.hud.combo, &format!("Combo: {}", self.combo), None);
    }

    fn dancer<'c>(&self, ctx: &'c mut LevelCtx<'_>) -> Option<&'c mut Dancer> {
        self.dancer.and_then(|id| ctx.component_mut::<Dancer>(id))
    }

    fn spawn_note(&mut self, ctx: &mut LevelCtx<'_>) {
        let lane = Lane::ALL[self.rng.random_range(0..Lane::ALL.len())];
        ctx.spawn(note::spawn(lane, self.difficulty.note_speed));
    }

    fn start_quake(&mut self, ctx: &mut LevelCtx<'_>) {
        log::info!("rhythm: earthquake");
        self.quake = true;
        ctx.camera.start(QUAKE_SECONDS);
        self.feedback(ctx, QUAKE_TEXT, rgb(0xFF0000));
        if let Some(dancer) = self.dancer(ctx) {
            dancer.start_cover();
        }
        ctx.timers.schedule_secs(QUAKE_SECONDS, QUAKE_OVER);
    }

    fn end_quake(&mut self, ctx: &mut LevelCtx<'_>) {
        self.quake = false;
        if let Some(dancer) = self.dancer(ctx) {
            dancer.stop_cover();
        }
        self.feedback(ctx, "All Clear!", rgb(0x00FF00));
    }

    fn press(&mut self, lane: Lane, ctx: &mut LevelCtx<'_>) {
        if !self.quake {
            if let Some(dancer) = self.dancer(ctx) {
                dancer.strike(lane);
            }
        }

        let target_y = self.target_y;
        let nearest = ctx
            .entities()
            .iter()
            .filter(|e| e.component::<Note>().is_some_and(|n| n.lane() == lane))
            .filter(|e| !ctx.commands.is_despawn_pending(e.id()))
            .map(|e| (e.id(), (e.position().y - target_y).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match nearest.and_then(|(id, distance)| judge(distance, self.quake).map(|j| (id, j))) {
            Some((id, judgement)) => {
                ctx.despawn(id);
                self.score += judgement.points;
                self.combo += 1;
                self.feedback(ctx, &judgement.label, judgement.color);
            }
            None => {
                self.combo = 0;
                self.score -= scoring::MISS_PENALTY;
            }
        }

        self.refresh_hud(ctx);
    }
}

impl Level for RhythmLevel {
    fn name(&self) -> &str {
        "rhythm"
    }

    fn enter(&mut self, ctx: &mut LevelCtx<'_>) {
        let viewport = ctx.viewport;
        self.target_y = target_y(viewport.height);

        ctx.spawn(
            Entity::new("background", Vec2::zero())
                .with_component(Shape::rect(2000.0, 2000.0, rgb(0x212121)).with_z(ZIndex::BACKGROUND)),
        );

        for lane in Lane::ALL {
            let line_x = lane.x() + LANE_SPACING / 2.0;
            ctx.spawn(
                Entity::new("lane", Vec2::new(line_x, 0.0))
                    .with_component(Shape::rect(2.0, 2000.0, rgba(0xFFFFFF, 0.1)).with_z(ZIndex::BACKGROUND)),
            );
            ctx.spawn(
                Entity::new("receptor", Vec2::new(lane.x() + 5.0, self.target_y)).with_component(
                    Shape::rect(NOTE_SIZE, NOTE_SIZE, Color::transparent())
                        .with_border(Border::new(2.0, lane.color().with_alpha(0.5)))
                        .with_z(ZIndex::BACKGROUND),
                ),
            );
        }

        self.dancer = Some(ctx.spawn(
            Entity::new("dancer", Vec2::new(350.0, viewport.height / 2.0 + 100.0)).with_component(Dancer::new()),
        ));

        self.controller = Some(ctx.spawn(
            Entity::new("controller", Vec2::zero())
                .with_component(Input::new())
                .with_component(TouchControls::dpad(viewport)),
        ));

        let hud = |text: &str, size: f32, color: Color, at: Vec2| Entity::new("hud", Vec2::zero()).with_component(Label::hud(text, size, color, at));
        self.hud = Hud {
            score: Some(ctx.spawn(hud("Score: 0", 30.0, Color::WHITE, Vec2::new(20.0, 20.0)))),
            combo: Some(ctx.spawn(hud("Combo: 0", 20.0, rgb(0xFFFF00), Vec2::new(20.0, 60.0)))),
            feedback: Some(ctx.spawn(
                Entity::new("feedback", Vec2::zero()).with_component(
                    Label::hud("", 40.0, Color::WHITE, Vec2::new(500.0, viewport.height / 2.0)).with_align(TextAlign::Center),
                ),
            )),
        };

        self.feedback(ctx, "GET READY...", rgb(0x00FFFF));
    }

    fn update(&mut self, ctx: &mut LevelCtx<'_>) {
        let dt = ctx.dt;

        self.difficulty.advance(dt);

        self.quake_timer -= dt;
        if self.quake_timer <= 0.0 {
            self.start_quake(ctx);
            self.quake_timer = 15.0 + self.rng.random::<f32>() * 10.0;
        }

        self.spawn_timer -= dt;
        if self.spawn_timer <= 0.0 {
            self.spawn_note(ctx);
            self.spawn_timer = self.difficulty.spawn_interval;
        }

        let pressed = match self.controller.and_then(|id| ctx.entity(id)).and_then(|e| e.component::<Input>()) {
            Some(input) => self.edges.pressed(input),
            None => [false; 5],
        };

        if pressed[4] {
            ctx.switch_level(MenuLevel::new(self.seed));
            return;
        }
        for lane in Lane::ALL {
            if pressed[lane.index()] {
                self.press(lane, ctx);
            }
        }
    }

    fn on_timer(&mut self, timer: &str, ctx: &mut LevelCtx<'_>) {
        match timer {
            QUAKE_OVER => self.end_quake(ctx),
            CLEAR_FEEDBACK => {
                let Some(text) = self.feedback_queue.pop_front() else {
                    return;
                };
                let current = self.hud.feedback.and_then(|id| ctx.entity(id)).and_then(|e| e.component::<Label>());
                if current.is_some_and(|l| l.text == text) {
                    Self::set_label(ctx, self.hud.feedback, "", None);
                }
            }
            other => log::warn!("rhythm: unexpected timer {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::Headless;
    use tremor_engine::game::{Game, GameConfig};

    fn rhythm(seed: u64) -> Headless {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.load_level(Box::new(RhythmLevel::new(seed)));
        let mut h = Headless::new(game, 60);
        h.run(1);
        h
    }

    fn label(h: &Headless, name: &str) -> String {
        h.game().find(name).and_then(|e| e.component::<Label>()).map(|l| l.text.clone()).unwrap_or_default()
    }

    fn hud(h: &Headless, prefix: &str) -> String {
        h.game()
            .entities()
            .iter()
            .filter_map(|e| e.component::<Label>())
            .map(|l| l.text.clone())
            .find(|t| t.starts_with(prefix))
            .unwrap_or_default()
    }

    fn notes(h: &Headless) -> Vec<(EntityId, Lane, f32)> {
        h.game()
            .entities()
            .iter()
            .filter_map(|e| e.component::<Note>().map(|n| (e.id(), n.lane(), e.position().y)))
            .collect()
    }

    /// Moves the newest note to just above the target line and presses its key.
    fn hit_newest(h: &mut Headless) -> EntityId {
        let (id, lane, _) = notes(h)
            .into_iter()
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .unwrap();
        let x = h.game().entity(id).unwrap().position().x;
        if let Some(note) = h.game_mut().entity_mut(id) {
            note.set_position(Vec2::new(x, target_y(720.0) - 5.0));
        }
        h.tap(lane.key());
        id
    }

    #[test]
    fn first_note_spawns_immediately_and_falls() {
        let mut h = rhythm(1);
        h.run(1);
        let first = notes(&h);
        assert_eq!(first.len(), 1);

        h.run(30);
        let (_, _, y) = notes(&h)[0];
        assert!(y > first[0].2 + 100.0);
        assert_eq!(label(&h, "feedback"), "");
    }

    #[test]
    fn perfect_hit_scores_and_removes_note() {
        let mut h = rhythm(2);
        h.run(2);
        let id = hit_newest(&mut h);

        assert!(h.game().entity(id).is_none());
        assert_eq!(hud(&h, "Score"), "Score: 100");
        assert_eq!(hud(&h, "Combo"), "Combo: 1");
        assert_eq!(label(&h, "feedback"), "PERFECT!");

        h.run(40);
        assert_eq!(label(&h, "feedback"), "");
    }

    #[test]
    fn miss_costs_points_and_combo() {
        let mut h = rhythm(3);
        h.run(2);
        hit_newest(&mut h);

        // Nothing near the line now.
        let lane = notes(&h).first().map(|n| n.1).unwrap_or(Lane::Left);
        h.tap(lane.key());
        assert_eq!(hud(&h, "Score"), "Score: 90");
        assert_eq!(hud(&h, "Combo"), "Combo: 0");
    }

    #[test]
    fn quake_doubles_points_then_clears() {
        let mut h = rhythm(4);
        h.run(60 * 10 + 5);

        assert!(h.game().camera().is_shaking());
        assert_eq!(label(&h, "feedback"), QUAKE_TEXT);
        let dancer = h.game().find("dancer").and_then(|e| e.component::<Dancer>()).unwrap();
        assert!(dancer.is_covering());

        hit_newest(&mut h);
        assert_eq!(hud(&h, "Score"), "Score: 200");
        assert_eq!(label(&h, "feedback"), "SAFE! PERFECT!");

        h.run(60 * 4);
        assert!(!h.game().camera().is_shaking());
        let dancer = h.game().find("dancer").and_then(|e| e.component::<Dancer>()).unwrap();
        assert!(!dancer.is_covering());
    }

    #[test]
    fn escape_returns_to_menu() {
        let mut h = rhythm(5);
        h.tap(Key::Escape);
        assert_eq!(h.game().level_name(), Some("menu"));
    }
}
