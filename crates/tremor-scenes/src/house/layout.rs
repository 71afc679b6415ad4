//! House geometry and the furniture catalogue.

use rand::Rng;
use rand::seq::SliceRandom;

pub const HOUSE_WIDTH: f32 = 2480.0;
pub const FLOOR_H: f32 = 80.0;
pub const WALL_W: f32 = 40.0;

pub const DOOR_W: f32 = 40.0;
pub const DOOR_H: f32 = 220.0;

/// Windows hang this far above the floor line.
const WINDOW_LIFT: f32 = 150.0;
const ROOM_MARGIN: f32 = 50.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Room {
    pub x: f32,
    pub width: f32,
}

pub const ROOMS: [Room; 3] = [
    Room { x: 0.0, width: 700.0 },
    Room { x: 740.0, width: 900.0 },
    Room { x: 1680.0, width: 800.0 },
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Kind {
    Door,
    Wardrobe,
    Bed,
    Window,
    Bookshelf,
    DiningTable,
    Fridge,
    Oven,
    Counter,
}

impl Kind {
    pub fn size(self) -> (f32, f32) {
        match self {
            Kind::Door => (DOOR_W, DOOR_H),
            Kind::Wardrobe => (140.0, 250.0),
            Kind::Bed => (220.0, 100.0),
            Kind::Window => (120.0, 120.0),
            Kind::Bookshelf => (130.0, 220.0),
            Kind::DiningTable => (200.0, 90.0),
            Kind::Fridge => (100.0, 210.0),
            Kind::Oven => (100.0, 110.0),
            Kind::Counter => (180.0, 110.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Door => "Door",
            Kind::Wardrobe => "Wardrobe",
            Kind::Bed => "Bed",
            Kind::Window => "Window",
            Kind::Bookshelf => "Bookshelf",
            Kind::DiningTable => "DiningTable",
            Kind::Fridge => "Fridge",
            Kind::Oven => "Oven",
            Kind::Counter => "Counter",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Item {
    pub kind: Kind,
    pub safe: bool,
    pub message: &'static str,
}

const fn item(kind: Kind, safe: bool, message: &'static str) -> Item {
    Item { kind, safe, message }
}

pub const BEDROOM: [Item; 3] = [
    item(Kind::Wardrobe, true, "Nailed to the wall. Safe!"),
    item(Kind::Bed, false, "Too soft, debris could crush me."),
    item(Kind::Window, false, "Glass is dangerous!"),
];

pub const LIVING_ROOM: [Item; 3] = [
    item(Kind::Bookshelf, false, "Not bolted down! Dangerous."),
    item(Kind::DiningTable, true, "Strong table. Perfect for Drop, Cover, Hold."),
    item(Kind::Window, false, "Stay away from windows."),
];

pub const KITCHEN: [Item; 3] = [
    item(Kind::Fridge, false, "Heavy, could tip over!"),
    item(Kind::Oven, false, "Gas lines could rupture. Unsafe."),
    item(Kind::Counter, true, "Sturdy counter, good cover."),
];

/// The doors sit in the two dividing walls.
pub const DOORS: [(f32, Item); 2] = [
    (700.0, item(Kind::Door, false, "Hiding in a doorway is NOT safe anymore!")),
    (1640.0, item(Kind::Door, false, "Doorways are not strong enough. Find a table!")),
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placed {
    pub item: Item,
    pub x: f32,
    pub y: f32,
}

/// Shuffles `items` and spreads them over `room`, one slot of
/// `width / len` each, jittered inside the slot.
pub fn place_room<R: Rng>(rng: &mut R, room: Room, items: &[Item], height: f32) -> Vec<Placed> {
    let mut items = items.to_vec();
    items.shuffle(rng);

    let gap = room.width / items.len().max(1) as f32;
    let mut slot_x = room.x + ROOM_MARGIN;

    items
        .into_iter()
        .map(|item| {
            let (w, h) = item.kind.size();
            let mut y = height - FLOOR_H - h;
            if item.kind == Kind::Window {
                y -= WINDOW_LIFT;
            }

            let slack = (gap - w - 20.0).max(0.0);
            let x = slot_x + rng.random::<f32>() * slack;
            slot_x += gap;

            Placed { item, x, y }
        })
        .collect()
}

pub fn door_y(height: f32) -> f32 {
    height - FLOOR_H - DOOR_H
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rooms_and_walls_tile_the_house() {
        let [a, b, c] = ROOMS;
        assert_eq!(a.x + a.width + WALL_W, b.x);
        assert_eq!(b.x + b.width + WALL_W, c.x);
        assert_eq!(c.x + c.width, HOUSE_WIDTH);
        assert_eq!(DOORS[0].0, a.x + a.width);
        assert_eq!(DOORS[1].0, b.x + b.width);
    }

    #[test]
    fn placement_stays_in_slots() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (room, items) in ROOMS.iter().zip([&BEDROOM, &LIVING_ROOM, &KITCHEN]) {
                let placed = place_room(&mut rng, *room, items, 720.0);
                assert_eq!(placed.len(), 3);

                let gap = room.width / 3.0;
                for (i, p) in placed.iter().enumerate() {
                    let slot = room.x + ROOM_MARGIN + gap * i as f32;
                    assert!(p.x >= slot && p.x <= slot + gap, "seed {seed}: {p:?}");
                    let (_, h) = p.item.kind.size();
                    let floor = 720.0 - FLOOR_H;
                    match p.item.kind {
                        Kind::Window => assert_eq!(p.y + h, floor - WINDOW_LIFT),
                        _ => assert_eq!(p.y + h, floor),
                    }
                }
            }
        }
    }

    #[test]
    fn every_room_has_exactly_one_safe_spot() {
        for items in [&BEDROOM, &LIVING_ROOM, &KITCHEN] {
            assert_eq!(items.iter().filter(|i| i.safe).count(), 1);
        }
        assert!(DOORS.iter().all(|(_, d)| !d.safe));
    }

    #[test]
    fn same_seed_same_layout() {
        let a = place_room(&mut StdRng::seed_from_u64(3), ROOMS[1], &LIVING_ROOM, 720.0);
        let b = place_room(&mut StdRng::seed_from_u64(3), ROOMS[1], &LIVING_ROOM, 720.0);
        assert_eq!(a, b);
    }
}
