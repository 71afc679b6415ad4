//! Fixed-step driver: runs the game without a window on a synthetic clock.

use std::time::{Duration, Instant};

use tremor_engine::game::Game;
#[cfg(test)]
use tremor_engine::input::{InputEvent, Key};
use tremor_engine::time::FrameTime;

use crate::autopilot::Pilot;

/// What a headless run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub seconds: f32,
    /// Level names in the order they were entered.
    pub levels: Vec<String>,
    pub exit_requested: bool,
}

pub struct Headless {
    game: Game,
    start: Instant,
    step: Duration,
    frames: u32,
}

impl Headless {
    /// Starts `game` with a clock advancing exactly `1 / fps` per frame.
    pub fn new(mut game: Game, fps: u32) -> Self {
        let start = Instant::now();
        game.start_at(start);
        Self {
            game,
            start,
            step: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            frames: 0,
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[cfg(test)]
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Synthetic time since start.
    pub fn elapsed(&self) -> Duration {
        self.step * self.frames
    }

    pub fn step(&mut self) -> Option<FrameTime> {
        self.frames += 1;
        let now = self.start + self.elapsed();
        self.game.frame_at(now)
    }

    #[cfg(test)]
    pub fn run(&mut self, frames: u32) {
        for _ in 0..frames {
            self.step();
        }
    }

    #[cfg(test)]
    pub fn key(&mut self, key: Key, down: bool) {
        let ev = if down { InputEvent::key_down(key) } else { InputEvent::key_up(key) };
        self.game.handle_input(&ev);
    }

    /// Press, one frame, release, one frame.
    #[cfg(test)]
    pub fn tap(&mut self, key: Key) {
        self.key(key, true);
        self.step();
        self.key(key, false);
        self.step();
    }

    /// Runs for `seconds` of game time with `pilot` at the controls.
    /// Stops early when the game asks to exit.
    pub fn run_with<P: Pilot>(&mut self, pilot: &mut P, seconds: f32) -> RunSummary {
        let mut summary = RunSummary::default();
        let total = (f64::from(seconds.max(0.0)) / self.step.as_secs_f64()).round() as u32;
        let report_every = (5.0 / self.step.as_secs_f64()).round().max(1.0) as u32;

        for n in 1..=total {
            if let Some(name) = self.game.level_name() {
                if summary.levels.last().map(String::as_str) != Some(name) {
                    log::info!("headless: level {name}");
                    summary.levels.push(name.to_owned());
                }
            }

            for ev in pilot.events(&self.game) {
                self.game.handle_input(&ev);
            }
            self.step();
            summary.frames += 1;

            if n % report_every == 0 {
                log::info!(
                    "headless: t={:.1}s frame={} entities={}",
                    self.elapsed().as_secs_f32(),
                    self.game.frame_index(),
                    self.game.entities().len()
                );
            }

            if self.game.exit_requested() {
                summary.exit_requested = true;
                break;
            }
        }

        summary.seconds = (self.step * summary.frames as u32).as_secs_f32();
        summary
    }
}
