//! Static room backdrop: three rooms, two dividing walls and the floor.

use tremor_engine::coords::Vec2;
use tremor_engine::draw::ZIndex;
use tremor_engine::drawable::Shape;
use tremor_engine::entity::Entity;

use crate::palette::{rgb, rgba};

use super::layout::{FLOOR_H, HOUSE_WIDTH, ROOMS, WALL_W};

const STRIPE_W: f32 = 25.0;
const STRIPE_STEP: f32 = 50.0;

fn panel(x: f32, y: f32, w: f32, h: f32, color: tremor_engine::paint::Color) -> Shape {
    Shape::rect(w, h, color).with_offset(Vec2::new(x, y)).with_z(ZIndex::BACKGROUND)
}

pub fn spawn(height: f32) -> Entity {
    let wall_h = height - FLOOR_H;
    let [bedroom, living, kitchen] = ROOMS;
    let mut bg = Entity::new("background", Vec2::zero()).with_size(HOUSE_WIDTH, height);

    // Bedroom: pink with lighter stripes.
    bg.add_component(panel(bedroom.x, 0.0, bedroom.width, wall_h, rgb(0xFFC0CB)));
    let mut x = bedroom.x;
    while x < bedroom.x + bedroom.width {
        bg.add_component(panel(x, 0.0, STRIPE_W, wall_h, rgba(0xFFFFFF, 0.2)));
        x += STRIPE_STEP;
    }

    // Living room: two-tone with a rail.
    bg.add_component(panel(living.x, 0.0, living.width, wall_h, rgb(0xC1E1C1)));
    bg.add_component(panel(living.x, wall_h / 2.0, living.width, 10.0, rgb(0xA0C1A0)));
    bg.add_component(panel(living.x, wall_h / 2.0 + 10.0, living.width, wall_h / 2.0 - 10.0, rgb(0xE8F5E9)));

    bg.add_component(panel(kitchen.x, 0.0, kitchen.width, wall_h, rgb(0xFFF9C4)));

    bg.add_component(panel(0.0, wall_h, HOUSE_WIDTH, FLOOR_H, rgb(0x5D4037)));

    for room in [bedroom, living] {
        bg.add_component(panel(room.x + room.width, 0.0, WALL_W, wall_h, rgb(0x424242)));
    }

    bg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_the_whole_house() {
        let bg = spawn(720.0);
        assert_eq!(bg.bounds().width(), HOUSE_WIDTH);
        assert!(bg.components().len() > 10);
    }
}
