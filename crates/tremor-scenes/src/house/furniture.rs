use tremor_engine::coords::{Rect, Vec2};
use tremor_engine::draw::{Border, DrawCtx, TextAlign, ZIndex};
use tremor_engine::drawable::{Label, Shape};
use tremor_engine::entity::{Behavior, Entity};
use tremor_engine::game::UpdateCtx;
use tremor_engine::paint::Color;

use crate::palette::{rgb, rgba};

use super::layout::{Item, Kind, Placed};
use super::player::HousePlayer;

const DETAIL_Z: ZIndex = ZIndex(1);
const HIGHLIGHT_Z: ZIndex = ZIndex(2);
const PROMPT_Z: ZIndex = ZIndex(3);

/// Inspectable piece of furniture (or a door).
///
/// Highlighted while it is the player's nearest interactable; the prompt
/// label above it only shows then.
#[derive(Debug, Clone)]
pub struct Furniture {
    item: Item,
    inspected: bool,
    open: bool,
    highlighted: bool,
}

impl Furniture {
    pub fn new(item: Item) -> Self {
        Self { item, inspected: false, open: false, highlighted: false }
    }

    #[inline]
    pub fn is_safe(&self) -> bool {
        self.item.safe
    }

    #[inline]
    pub fn message(&self) -> &'static str {
        self.item.message
    }

    #[inline]
    pub fn is_door(&self) -> bool {
        self.item.kind == Kind::Door
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Closed doors stop the player.
    #[inline]
    pub fn blocks(&self) -> bool {
        self.is_door() && !self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    #[inline]
    pub fn is_inspected(&self) -> bool {
        self.inspected
    }

    /// Marks the item inspected. Returns `true` the first time only.
    pub fn inspect(&mut self) -> bool {
        !std::mem::replace(&mut self.inspected, true)
    }

    pub fn prompt(&self) -> &'static str {
        match (self.is_door(), self.open) {
            (true, false) => "E: Open",
            (true, true) => "E: Check Safe",
            _ => "Press E",
        }
    }
}

impl Behavior for Furniture {
    fn update(&mut self, entity: &mut Entity, ctx: &mut UpdateCtx<'_>) {
        let id = entity.id();
        self.highlighted = ctx.others.with_behavior::<HousePlayer>().any(|(_, p)| p.nearby() == Some(id));

        let text = if self.highlighted { self.prompt() } else { "" };
        if let Some(label) = entity.component_mut::<Label>() {
            if label.text != text {
                label.set_text(text);
            }
        }

        entity.update_components(ctx);
    }

    fn draw(&self, entity: &Entity, ctx: &mut DrawCtx<'_>) {
        entity.draw_components(ctx);

        let b = entity.bounds();
        if self.is_door() {
            let inner = Rect::new(b.origin.x + 5.0, b.origin.y + 5.0, b.width() - 10.0, b.height() - 5.0);
            if self.open {
                ctx.world_rect(DETAIL_Z, inner, rgba(0x000000, 0.5), None);
            } else {
                ctx.world_rect(DETAIL_Z, inner, rgb(0x8D6E63), None);
                let knob = Vec2::new(b.max().x - 15.0, b.origin.y + b.height() / 2.0);
                ctx.world_circle(DETAIL_Z, knob, 5.0, rgb(0xFFD700));
            }
        }

        if self.highlighted {
            let outline = Rect::new(b.origin.x - 5.0, b.origin.y - 5.0, b.width() + 10.0, b.height() + 10.0);
            ctx.world_rect(HIGHLIGHT_Z, outline, Color::transparent(), Some(Border::new(4.0, rgb(0xFFFF00))));
        }
    }
}

/// Base color plus a couple of detail panels per kind.
fn visuals(kind: Kind, w: f32, h: f32) -> Vec<Shape> {
    let at = |x: f32, y: f32, sw: f32, sh: f32, color: Color| {
        Shape::rect(sw, sh, color).with_offset(Vec2::new(x, y)).with_z(DETAIL_Z)
    };

    match kind {
        Kind::Door => vec![Shape::rect(w, h, rgb(0x4E342E))],
        Kind::Wardrobe => vec![
            Shape::rect(w, h, rgb(0x8D6E63)).with_border(Border::new(3.0, rgb(0x5D4037))),
            at(w / 2.0 - 1.5, 10.0, 3.0, h - 20.0, rgb(0x5D4037)),
            at(-5.0, 0.0, w + 10.0, 10.0, rgb(0x6D4C41)),
        ],
        Kind::Bed => vec![
            Shape::rect(w, h - 10.0, rgb(0xFFFFFF)).with_offset(Vec2::new(0.0, 10.0)),
            at(0.0, -20.0, 20.0, h + 20.0, rgb(0x5D4037)),
            at(30.0, 20.0, w - 30.0, h - 30.0, rgb(0xC62828)),
        ],
        Kind::Window => vec![
            Shape::rect(w, h, rgb(0x81D4FA)).with_border(Border::new(5.0, Color::WHITE)),
            at(-10.0, 0.0, 20.0, h, rgb(0xEF9A9A)),
            at(w - 10.0, 0.0, 20.0, h, rgb(0xEF9A9A)),
        ],
        Kind::Bookshelf => {
            let mut shapes = vec![Shape::rect(w, h, rgb(0x5D4037))];
            let shelf_gap = h / 4.0;
            for i in 0..4 {
                shapes.push(at(0.0, shelf_gap * (i + 1) as f32 - 5.0, w, 5.0, rgb(0x3E2723)));
            }
            shapes
        }
        Kind::DiningTable => vec![
            Shape::rect(w, 20.0, rgb(0x5D4037)).with_z(DETAIL_Z),
            Shape::rect(15.0, h - 20.0, rgb(0x3E2723)).with_offset(Vec2::new(20.0, 20.0)),
            Shape::rect(15.0, h - 20.0, rgb(0x3E2723)).with_offset(Vec2::new(w - 35.0, 20.0)),
        ],
        Kind::Fridge => vec![
            Shape::rect(w, h, rgb(0xE0E0E0)).with_border(Border::new(2.0, rgb(0x9E9E9E))),
            at(0.0, h / 3.0, w, 2.0, rgb(0x9E9E9E)),
            at(10.0, h / 3.0 + 20.0, 10.0, 40.0, rgb(0x757575)),
        ],
        Kind::Oven => vec![
            Shape::rect(w, h, rgb(0x212121)),
            at(0.0, 0.0, w, 10.0, rgb(0x424242)),
            at(20.0, 40.0, w - 40.0, h - 60.0, rgb(0x616161)),
        ],
        Kind::Counter => vec![
            Shape::rect(w, h, rgb(0xD7CCC8)),
            at(-5.0, 0.0, w + 10.0, 15.0, rgb(0x424242)),
            at(w / 2.0 - 1.0, 15.0, 2.0, h - 15.0, rgb(0xA1887F)),
        ],
    }
}

pub fn spawn(placed: Placed) -> Entity {
    let (w, h) = placed.item.kind.size();

    let mut entity = Entity::new(placed.item.kind.name(), Vec2::new(placed.x, placed.y)).with_size(w, h);
    for shape in visuals(placed.item.kind, w, h) {
        entity.add_component(shape);
    }

    entity
        .with_component(
            Label::new("", 20.0, rgb(0xFFFF00))
                .with_offset(Vec2::new(w / 2.0, -30.0))
                .with_align(TextAlign::Center)
                .with_z(PROMPT_Z),
        )
        .with_behavior(Furniture::new(placed.item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::house::layout::{BEDROOM, DOORS};

    #[test]
    fn door_prompt_follows_state() {
        let mut door = Furniture::new(DOORS[0].1);
        assert!(door.blocks());
        assert_eq!(door.prompt(), "E: Open");

        door.open();
        assert!(!door.blocks());
        assert_eq!(door.prompt(), "E: Check Safe");

        assert_eq!(Furniture::new(BEDROOM[0]).prompt(), "Press E");
    }

    #[test]
    fn first_inspection_counts_once() {
        let mut f = Furniture::new(BEDROOM[1]);
        assert!(f.inspect());
        assert!(!f.inspect());
        assert!(f.is_inspected());
    }

    #[test]
    fn spawned_entity_carries_visuals_and_prompt() {
        let e = spawn(Placed { item: BEDROOM[0], x: 60.0, y: 390.0 });
        assert_eq!(e.name(), "Wardrobe");
        assert_eq!(e.bounds(), Rect::new(60.0, 390.0, 140.0, 250.0));
        assert!(e.has_component::<Label>());
        assert!(e.behavior::<Furniture>().is_some_and(|f| f.is_safe()));
    }
}
