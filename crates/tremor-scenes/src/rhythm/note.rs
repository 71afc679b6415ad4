use tremor_engine::coords::Vec2;
use tremor_engine::draw::{Border, TextAlign, ZIndex};
use tremor_engine::drawable::{Label, Shape};
use tremor_engine::entity::{Body, Component, Entity};
use tremor_engine::game::UpdateCtx;
use tremor_engine::input::Key;
use tremor_engine::paint::Color;

use crate::palette::rgb;

pub const NOTE_SIZE: f32 = 50.0;
pub const LANE_X: f32 = 600.0;
pub const LANE_SPACING: f32 = 60.0;
const SPAWN_Y: f32 = -50.0;
/// Notes this far below the view are gone for good.
const EXIT_MARGIN: f32 = 100.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Lane {
    Left,
    Down,
    Up,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 4] = [Lane::Left, Lane::Down, Lane::Up, Lane::Right];

    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Down => 1,
            Lane::Up => 2,
            Lane::Right => 3,
        }
    }

    pub fn key(self) -> Key {
        match self {
            Lane::Left => Key::ArrowLeft,
            Lane::Down => Key::ArrowDown,
            Lane::Up => Key::ArrowUp,
            Lane::Right => Key::ArrowRight,
        }
    }

    /// Left edge of the lane.
    pub fn x(self) -> f32 {
        LANE_X + LANE_SPACING * self.index() as f32
    }

    pub fn color(self) -> Color {
        match self {
            Lane::Left => rgb(0xE91E63),
            Lane::Down => rgb(0x2196F3),
            Lane::Up => rgb(0x4CAF50),
            Lane::Right => rgb(0xFFC107),
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Lane::Left => "<",
            Lane::Down => "v",
            Lane::Up => "^",
            Lane::Right => ">",
        }
    }
}

/// Falling note. Removes itself once it leaves the bottom of the view.
#[derive(Debug, Clone)]
pub struct Note {
    lane: Lane,
    speed: f32,
}

impl Note {
    pub fn new(lane: Lane, speed: f32) -> Self {
        Self { lane, speed }
    }

    #[inline]
    pub fn lane(&self) -> Lane {
        self.lane
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Component for Note {
    fn update(&mut self, owner: &mut Body, ctx: &mut UpdateCtx<'_>) {
        owner.position.y += self.speed * ctx.dt;
        if owner.position.y > ctx.viewport.height + EXIT_MARGIN {
            ctx.despawn_self();
        }
    }
}

pub fn spawn(lane: Lane, speed: f32) -> Entity {
    Entity::new("note", Vec2::new(lane.x() + 5.0, SPAWN_Y))
        .with_size(NOTE_SIZE, NOTE_SIZE)
        .with_component(Note::new(lane, speed))
        .with_component(Shape::rect(NOTE_SIZE, NOTE_SIZE, lane.color()).with_border(Border::new(4.0, Color::WHITE)))
        .with_component(
            Label::new(lane.glyph(), 30.0, Color::WHITE)
                .with_offset(Vec2::new(NOTE_SIZE / 2.0, NOTE_SIZE / 2.0))
                .with_align(TextAlign::Center)
                .with_z(ZIndex(1)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_are_evenly_spaced() {
        let xs: Vec<f32> = Lane::ALL.iter().map(|l| l.x()).collect();
        assert_eq!(xs, vec![600.0, 660.0, 720.0, 780.0]);
    }

    #[test]
    fn spawns_above_its_lane() {
        let e = spawn(Lane::Up, 300.0);
        assert_eq!(e.position(), Vec2::new(725.0, -50.0));
        assert_eq!(e.component::<Note>().map(Note::lane), Some(Lane::Up));
    }
}
