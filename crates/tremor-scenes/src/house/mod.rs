//! "Safe Spots": walk through a three-room house, inspect furniture, then
//! find real cover when the earthquake starts.

mod background;
mod dialogue;
mod furniture;
mod layout;
mod player;

use rand::SeedableRng;
use rand::rngs::StdRng;

use tremor_engine::camera::Confiner;
use tremor_engine::coords::Vec2;
use tremor_engine::entity::{Entity, EntityId};
use tremor_engine::game::{Level, LevelCtx};
use tremor_engine::input::{Input, Key, TouchControls};

use crate::menu::MenuLevel;

pub use dialogue::Dialogue;
pub use furniture::Furniture;
pub use player::HousePlayer;

use layout::{BEDROOM, DOORS, FLOOR_H, HOUSE_WIDTH, KITCHEN, LIVING_ROOM, Placed, ROOMS};

const REQUIRED_INSPECTIONS: u32 = 4;
const QUAKE_DELAY: f32 = 2.0;
const QUAKE_SECONDS: f32 = 10.0;
const RETURN_DELAY: f32 = 4.0;

const EARTHQUAKE: &str = "earthquake";
const BACK_TO_MENU: &str = "back_to_menu";

const INTRO: &str = "I need to inspect the house. (WASD to Move, E to Interact)";
const QUAKE_ALERT: &str = "EARTHQUAKE! Find a safe spot quickly!";
const SHELTERED: &str = "I'm safe here! The earthquake is passing...";
const NOT_SAFE: &str = "This isn't safe! I need to move!";

pub struct HouseLevel {
    seed: u64,
    player: Option<EntityId>,
    dialogue: Option<EntityId>,
    inspected: u32,
    quake_scheduled: bool,
    quake: bool,
    sheltered: bool,
}

impl HouseLevel {
    /// `seed` drives the furniture shuffle.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            player: None,
            dialogue: None,
            inspected: 0,
            quake_scheduled: false,
            quake: false,
            sheltered: false,
        }
    }

    fn say(&self, ctx: &mut LevelCtx<'_>, text: &str) {
        if let Some(dialogue) = self.dialogue.and_then(|id| ctx.component_mut::<Dialogue>(id)) {
            dialogue.show(text);
        }
    }

    fn interact(&mut self, target: EntityId, ctx: &mut LevelCtx<'_>) {
        let Some(furniture) = ctx.behavior_mut::<Furniture>(target) else {
            return;
        };

        if furniture.blocks() {
            furniture.open();
            log::info!("house: door {target} opened");
            return;
        }

        let safe = furniture.is_safe();
        let message = furniture.message();

        if !self.quake {
            if furniture.inspect() {
                self.inspected += 1;
                log::debug!("house: {} of {REQUIRED_INSPECTIONS} inspected", self.inspected);
            }
            self.say(ctx, message);

            if self.inspected >= REQUIRED_INSPECTIONS && !self.quake_scheduled {
                self.quake_scheduled = true;
                ctx.timers.schedule_secs(QUAKE_DELAY, EARTHQUAKE);
            }
            return;
        }

        if self.sheltered {
            return;
        }

        if safe {
            self.sheltered = true;
            self.say(ctx, SHELTERED);
            ctx.camera.stop_shake();
            if let Some(player) = self.player.and_then(|id| ctx.behavior_mut::<HousePlayer>(id)) {
                player.set_protecting(true);
            }
            ctx.timers.schedule_secs(RETURN_DELAY, BACK_TO_MENU);
        } else {
            self.say(ctx, NOT_SAFE);
        }
    }

    fn start_quake(&mut self, ctx: &mut LevelCtx<'_>) {
        if self.quake {
            return;
        }
        self.quake = true;
        log::info!("house: earthquake");
        self.say(ctx, QUAKE_ALERT);
        ctx.camera.start(QUAKE_SECONDS);
    }
}

impl Level for HouseLevel {
    fn name(&self) -> &str {
        "house"
    }

    fn enter(&mut self, ctx: &mut LevelCtx<'_>) {
        let height = ctx.viewport.height;
        let mut rng = StdRng::seed_from_u64(self.seed);

        ctx.spawn(background::spawn(height));

        for (x, item) in DOORS {
            ctx.spawn(furniture::spawn(Placed { item, x, y: layout::door_y(height) }));
        }
        for (room, items) in ROOMS.iter().zip([&BEDROOM[..], &LIVING_ROOM[..], &KITCHEN[..]]) {
            for placed in layout::place_room(&mut rng, *room, items, height) {
                ctx.spawn(furniture::spawn(placed));
            }
        }

        let start = Vec2::new(150.0, height - FLOOR_H - 80.0);
        let player = ctx.spawn(player::spawn(start, TouchControls::dpad(ctx.viewport)));
        self.player = Some(player);

        ctx.camera.set_target(Some(player));
        ctx.camera.set_confiner(Some(Confiner::new(0.0, 0.0, HOUSE_WIDTH, height)));

        let mut dialogue = Dialogue::new();
        dialogue.show(INTRO);
        self.dialogue = Some(ctx.spawn(Entity::new("dialogue", Vec2::zero()).with_component(dialogue)));
    }

    fn update(&mut self, ctx: &mut LevelCtx<'_>) {
        let Some(player) = self.player else {
            return;
        };

        let escape = ctx
            .entity(player)
            .and_then(|e| e.component::<Input>())
            .is_some_and(|i| i.is_key_down(Key::Escape));
        if escape {
            ctx.switch_level(MenuLevel::new(self.seed));
            return;
        }

        if let Some(target) = ctx.behavior_mut::<HousePlayer>(player).and_then(|p| p.take_interaction()) {
            self.interact(target, ctx);
        }
    }

    fn on_timer(&mut self, timer: &str, ctx: &mut LevelCtx<'_>) {
        match timer {
            EARTHQUAKE => self.start_quake(ctx),
            BACK_TO_MENU => ctx.switch_level(MenuLevel::new(self.seed)),
            other => log::warn!("house: unexpected timer {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::Headless;
    use tremor_engine::coords::Rect;
    use tremor_engine::game::{Game, GameConfig};

    fn house(seed: u64) -> Headless {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.load_level(Box::new(HouseLevel::new(seed)));
        let mut h = Headless::new(game, 60);
        h.run(1);
        h
    }

    fn player_id(h: &Headless) -> EntityId {
        h.game().find("player").map(|e| e.id()).unwrap()
    }

    fn player(h: &Headless) -> &Entity {
        h.game().find("player").unwrap()
    }

    fn furniture(h: &Headless) -> Vec<(EntityId, Rect, Furniture)> {
        h.game()
            .entities()
            .iter()
            .filter_map(|e| e.behavior::<Furniture>().map(|f| (e.id(), e.bounds(), f.clone())))
            .collect()
    }

    fn state(h: &Headless, id: EntityId) -> Furniture {
        h.game().entity(id).and_then(|e| e.behavior::<Furniture>()).cloned().unwrap()
    }

    fn dialogue(h: &Headless) -> String {
        h.game()
            .entities()
            .iter()
            .find_map(|e| e.component::<Dialogue>())
            .and_then(|d| d.text())
            .unwrap_or_default()
            .to_owned()
    }

    /// Centers the player on `target` and taps E, then waits out the cooldown.
    fn inspect(h: &mut Headless, target: Rect) {
        let id = player_id(h);
        let y = player(h).position().y;
        let x = target.center().x - player::PLAYER_W / 2.0;
        if let Some(p) = h.game_mut().entity_mut(id) {
            p.set_position(Vec2::new(x, y));
        }
        h.tap(Key::E);
        h.run(40);
    }

    // ── setup ────────────────────────────────────────────────────────────

    #[test]
    fn house_is_furnished_and_followed() {
        let h = house(1);
        let items = furniture(&h);

        assert_eq!(items.len(), 11);
        assert_eq!(items.iter().filter(|(_, _, f)| f.is_door()).count(), 2);
        assert!(items.iter().all(|(_, _, f)| !f.is_inspected() && !f.is_open()));
        assert_eq!(h.game().camera().target(), Some(player_id(&h)));
        assert_eq!(dialogue(&h), INTRO);
    }

    #[test]
    fn player_lands_on_the_floor() {
        let mut h = house(1);
        h.run(30);
        assert_eq!(player(&h).position().y, 720.0 - FLOOR_H - player::PLAYER_H);
    }

    // ── doors ────────────────────────────────────────────────────────────

    #[test]
    fn closed_door_blocks_until_opened() {
        let mut h = house(2);
        h.key(Key::D, true);
        h.run(240);
        assert!(player(&h).position().x <= 660.0, "walked through at {}", player(&h).position().x);
        h.key(Key::D, false);

        let (door, bounds, _) = furniture(&h)
            .into_iter()
            .find(|(_, b, f)| f.is_door() && b.min().x == 700.0)
            .unwrap();
        inspect(&mut h, bounds);
        assert!(state(&h, door).is_open());
        // Opening is not an inspection.
        assert!(!state(&h, door).is_inspected());

        h.key(Key::D, true);
        h.run(60);
        assert!(player(&h).position().x > 740.0);
    }

    // ── earthquake ───────────────────────────────────────────────────────

    #[test]
    fn four_inspections_trigger_quake_then_cover_ends_it() {
        let mut h = house(3);
        let items = furniture(&h);
        let plain: Vec<_> = items.iter().filter(|(_, _, f)| !f.is_door()).collect();

        for (_, bounds, f) in plain.iter().take(3) {
            inspect(&mut h, *bounds);
            assert_eq!(dialogue(&h), f.message());
        }
        // Re-inspecting does not count.
        inspect(&mut h, plain[0].1);
        h.run(150);
        assert!(!h.game().camera().is_shaking());

        inspect(&mut h, plain[3].1);
        h.run(130);
        assert!(h.game().camera().is_shaking());
        assert_eq!(dialogue(&h), QUAKE_ALERT);

        let unsafe_spot = plain.iter().find(|(_, _, f)| !f.is_safe()).unwrap();
        inspect(&mut h, unsafe_spot.1);
        assert_eq!(dialogue(&h), NOT_SAFE);
        assert!(h.game().camera().is_shaking());

        let safe_spot = plain.iter().find(|(_, _, f)| f.is_safe()).unwrap();
        inspect(&mut h, safe_spot.1);
        assert_eq!(dialogue(&h), SHELTERED);
        assert!(!h.game().camera().is_shaking());
        assert!(player(&h).behavior::<HousePlayer>().unwrap().is_protecting());

        h.run(240);
        assert_eq!(h.game().level_name(), Some("menu"));
    }

    #[test]
    fn escape_returns_to_menu() {
        let mut h = house(4);
        h.tap(Key::Escape);
        h.run(1);
        assert_eq!(h.game().level_name(), Some("menu"));
    }
}
