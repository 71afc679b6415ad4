//! Hit judgement and difficulty ramp.

use tremor_engine::paint::Color;

use crate::palette::rgb;

/// Farther than this from the target line is a miss.
pub const HIT_WINDOW: f32 = 80.0;
pub const PERFECT_WINDOW: f32 = 25.0;
pub const MISS_PENALTY: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Judgement {
    pub points: i64,
    pub label: String,
    pub color: Color,
}

/// Judges a press `distance` px from the target line. Presses during an
/// earthquake score double.
pub fn judge(distance: f32, quake: bool) -> Option<Judgement> {
    if distance >= HIT_WINDOW {
        return None;
    }

    let (mut points, label, mut color) = if distance < PERFECT_WINDOW {
        (100, "PERFECT!", rgb(0x00FFFF))
    } else {
        (50, "GOOD", rgb(0x00FF00))
    };

    let label = if quake {
        points *= 2;
        color = rgb(0xFFA500);
        format!("SAFE! {label}")
    } else {
        label.to_owned()
    };

    Some(Judgement { points, label, color })
}

const RAMP_INTERVAL: f32 = 5.0;
const MIN_SPAWN_INTERVAL: f32 = 0.3;
const MAX_NOTE_SPEED: f32 = 800.0;

/// Every few seconds notes come faster and more often, up to a cap.
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub spawn_interval: f32,
    pub note_speed: f32,
    elapsed: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self { spawn_interval: 1.2, note_speed: 300.0, elapsed: 0.0 }
    }
}

impl Difficulty {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed <= RAMP_INTERVAL {
            return;
        }

        self.elapsed = 0.0;
        if self.spawn_interval > MIN_SPAWN_INTERVAL {
            self.spawn_interval -= 0.05;
        }
        if self.note_speed < MAX_NOTE_SPEED {
            self.note_speed += 20.0;
        }
        log::debug!("rhythm: spawn every {:.2}s at {:.0}px/s", self.spawn_interval, self.note_speed);
    }
}
