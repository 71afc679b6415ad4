//! Scripted player used by the headless runner.

use std::collections::BTreeSet;

use tremor_engine::coords::Rect;
use tremor_engine::entity::EntityId;
use tremor_engine::game::Game;
use tremor_engine::input::{InputEvent, Key};

use crate::house::{Furniture, HousePlayer};
use crate::rhythm::{Lane, Note, target_y};

/// Source of synthetic input, polled once before every headless frame.
pub trait Pilot {
    fn events(&mut self, game: &Game) -> Vec<InputEvent>;
}

/// Within this many px of the target line a note gets pressed.
const PRESS_WINDOW: f32 = 20.0;
/// Close enough to a furniture center to interact.
const ARRIVE: f32 = 10.0;

/// Plays every scene well enough to reach its ending.
///
/// Keys are diffed against the previous frame; "taps" are only pressed on a
/// frame after they were released, so edge-triggered scenes see each one.
#[derive(Debug, Default)]
pub struct Autopilot {
    held: BTreeSet<Key>,
    menu_visits: u32,
    in_menu: bool,
    /// Latched once the house starts shaking; cleared on leaving the house.
    quake_seen: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    fn menu(&mut self) -> Vec<Key> {
        if !self.in_menu {
            self.in_menu = true;
            self.menu_visits += 1;
        }
        let choice = if self.menu_visits % 2 == 1 { Key::Digit1 } else { Key::Digit2 };
        self.tap(choice).into_iter().collect()
    }

    fn tap(&self, key: Key) -> Option<Key> {
        (!self.held.contains(&key)).then_some(key)
    }

    fn house(&mut self, game: &Game) -> Vec<Key> {
        let Some((player, hp)) = game.find("player").and_then(|e| e.behavior::<HousePlayer>().map(|b| (e, b))) else {
            return Vec::new();
        };
        let px = player.bounds().center().x;
        self.quake_seen |= game.camera().is_shaking();
        let quake = self.quake_seen;

        let furniture: Vec<(EntityId, Rect, &Furniture)> = game
            .entities()
            .iter()
            .filter_map(|e| e.behavior::<Furniture>().map(|f| (e.id(), e.bounds(), f)))
            .collect();

        let wanted = furniture
            .iter()
            .filter(|(_, _, f)| !f.is_door() && if quake { f.is_safe() } else { !f.is_inspected() })
            .min_by(|a, b| (a.1.center().x - px).abs().total_cmp(&(b.1.center().x - px).abs()));
        let Some(&(wanted_id, mut bounds, _)) = wanted else {
            return Vec::new();
        };
        let mut target = wanted_id;

        // A closed door on the way has to be opened first.
        let tx = bounds.center().x;
        let (lo, hi) = if tx < px { (tx, px) } else { (px, tx) };
        if let Some(&(door, door_bounds, _)) = furniture
            .iter()
            .filter(|(_, b, f)| f.blocks() && b.center().x > lo && b.center().x < hi)
            .min_by(|a, b| (a.1.center().x - px).abs().total_cmp(&(b.1.center().x - px).abs()))
        {
            target = door;
            bounds = door_bounds;
        }

        // Doors stop the player short of their center; being in reach is enough.
        let dx = bounds.center().x - px;
        if hp.nearby() == Some(target) && (dx.abs() <= ARRIVE || target != wanted_id) {
            return self.tap(Key::E).into_iter().collect();
        }
        if dx.abs() > ARRIVE {
            return vec![if dx > 0.0 { Key::D } else { Key::A }];
        }
        Vec::new()
    }

    fn rhythm(&self, game: &Game) -> Vec<Key> {
        let line = target_y(game.viewport().height);
        Lane::ALL
            .into_iter()
            .filter(|lane| {
                game.entities().iter().any(|e| {
                    e.component::<Note>().is_some_and(|n| n.lane() == *lane)
                        && (e.position().y - line).abs() < PRESS_WINDOW
                })
            })
            .filter_map(|lane| self.tap(lane.key()))
            .collect()
    }
}

impl Pilot for Autopilot {
    fn events(&mut self, game: &Game) -> Vec<InputEvent> {
        let wanted: BTreeSet<Key> = match game.level_name() {
            Some("menu") => self.menu(),
            Some(level) => {
                self.in_menu = false;
                if level != "house" {
                    self.quake_seen = false;
                }
                match level {
                    "house" => self.house(game),
                    "rhythm" => self.rhythm(game),
                    _ => Vec::new(),
                }
            }
            None => Vec::new(),
        }
        .into_iter()
        .collect();

        let mut events: Vec<InputEvent> = self.held.difference(&wanted).map(|k| InputEvent::key_up(*k)).collect();
        events.extend(wanted.difference(&self.held).map(|k| InputEvent::key_down(*k)));
        self.held = wanted;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::Headless;
    use crate::menu::MenuLevel;
    use tremor_engine::game::GameConfig;

    fn start(seed: u64) -> Headless {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.load_level(Box::new(MenuLevel::new(seed)));
        Headless::new(game, 60)
    }

    #[test]
    fn taps_release_before_repeating() {
        let mut pilot = Autopilot::new();
        let h = start(0);
        let first = pilot.events(h.game());
        assert_eq!(first, vec![InputEvent::key_down(Key::Digit1)]);
        let second = pilot.events(h.game());
        assert_eq!(second, vec![InputEvent::key_up(Key::Digit1)]);
    }

    #[test]
    fn finishes_the_house_and_returns_to_menu() {
        let mut h = start(11);
        let summary = h.run_with(&mut Autopilot::new(), 60.0);
        assert_eq!(summary.levels[..3], ["menu".to_owned(), "house".to_owned(), "menu".to_owned()]);
    }

    #[test]
    fn scores_in_the_rhythm_scene() {
        let mut h = start(12);
        let mut pilot = Autopilot::new();
        // Second menu visit picks the rhythm scene.
        pilot.menu_visits = 1;

        h.run_with(&mut pilot, 8.0);
        assert_eq!(h.game().level_name(), Some("rhythm"));

        let score = h
            .game()
            .entities()
            .iter()
            .filter_map(|e| e.component::<tremor_engine::drawable::Label>())
            .find(|l| l.text.starts_with("Score: "))
            .map(|l| l.text.clone())
            .unwrap();
        let points: i64 = score.trim_start_matches("Score: ").parse().unwrap();
        assert!(points > 0, "{score}");
    }
}
