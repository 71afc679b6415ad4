use tremor_engine::animation::{Animation, Animator};
use tremor_engine::coords::Vec2;
use tremor_engine::draw::{ImageHandle, ZIndex};
use tremor_engine::entity::{Behavior, Entity, EntityId};
use tremor_engine::game::UpdateCtx;
use tremor_engine::input::{Input, Key, TouchControls};
use tremor_engine::paint::Color;
use tremor_engine::physics::Physics;

use super::furniture::Furniture;
use super::layout::{FLOOR_H, HOUSE_WIDTH};

pub const PLAYER_W: f32 = 85.0;
pub const PLAYER_H: f32 = 110.0;

const SPEED: f32 = 250.0;
const GRAVITY: f32 = 1000.0;
/// Only the leading part of the sprite collides with doors.
const COLLISION_W: f32 = 40.0;
/// Furniture further than this (center to center, horizontally) is out of reach.
const REACH: f32 = 150.0;
const INTERACT_COOLDOWN: f32 = 0.5;

const LEFT: [Key; 2] = [Key::ArrowLeft, Key::A];
const RIGHT: [Key; 2] = [Key::ArrowRight, Key::D];
const INTERACT: [Key; 2] = [Key::E, Key::Space];

pub const IDLE: &str = "Idle";
pub const WALK: &str = "Walk";
pub const PROTECT: &str = "Protect";

fn frames(first: u32, count: u32) -> Vec<ImageHandle> {
    (first..first + count).map(ImageHandle).collect()
}

fn animator() -> Animator {
    let size = Vec2::new(PLAYER_W, PLAYER_H);
    let mut animator = Animator::new(size).with_fallback(Color::WHITE).with_z(ZIndex(5));
    animator.add_animation(IDLE, Animation::new(frames(100, 4), 4.0, size));
    animator.add_animation(WALK, Animation::new(frames(110, 8), 12.0, size));
    animator.add_animation(PROTECT, Animation::new(frames(120, 4), 6.0, size));
    animator.set_animation(IDLE);
    animator
}

pub fn spawn(position: Vec2, touch: TouchControls) -> Entity {
    Entity::new("player", position)
        .with_size(PLAYER_W, PLAYER_H)
        .with_component(animator())
        .with_component(Physics::with_gravity(GRAVITY))
        .with_component(Input::new())
        .with_component(touch)
        .with_behavior(HousePlayer::new())
}

/// Side-scrolling walker that inspects furniture.
///
/// The player never acts on furniture itself: an accepted interaction is
/// parked in [`HousePlayer::take_interaction`] for the level to resolve.
#[derive(Debug, Clone, Default)]
pub struct HousePlayer {
    facing_left: bool,
    protecting: bool,
    cooldown: f32,
    nearby: Option<EntityId>,
    interaction: Option<EntityId>,
}

impl HousePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nearest furniture within reach, as of the last update.
    #[inline]
    pub fn nearby(&self) -> Option<EntityId> {
        self.nearby
    }

    pub fn take_interaction(&mut self) -> Option<EntityId> {
        self.interaction.take()
    }

    #[inline]
    pub fn is_protecting(&self) -> bool {
        self.protecting
    }

    /// Taking cover freezes horizontal movement.
    pub fn set_protecting(&mut self, protecting: bool) {
        self.protecting = protecting;
    }

    fn walk_velocity(&mut self, input: Option<&Input>) -> f32 {
        let Some(input) = input else {
            return 0.0;
        };
        if self.protecting {
            return 0.0;
        }

        if input.any_down(&LEFT) {
            self.facing_left = true;
            -SPEED
        } else if input.any_down(&RIGHT) {
            self.facing_left = false;
            SPEED
        } else {
            0.0
        }
    }
}

impl Behavior for HousePlayer {
    fn update(&mut self, entity: &mut Entity, ctx: &mut UpdateCtx<'_>) {
        let input = entity.component::<Input>();
        let wants_interact = input.is_some_and(|i| i.any_down(&INTERACT));
        let mut vx = self.walk_velocity(input);

        let next_x = entity.position().x + vx * ctx.dt;
        let blocked = ctx.others.with_behavior::<Furniture>().any(|(door, f)| {
            let d = door.bounds();
            f.blocks() && next_x + COLLISION_W > d.min().x && next_x < d.max().x
        });
        if blocked {
            vx = 0.0;
        }
        if let Some(physics) = entity.component_mut::<Physics>() {
            physics.velocity.x = vx;
        }

        if let Some(animator) = entity.component_mut::<Animator>() {
            let clip = if self.protecting {
                PROTECT
            } else if vx.abs() > 10.0 {
                WALK
            } else {
                IDLE
            };
            animator.set_animation(clip);
            animator.flip_x = self.facing_left;
        }

        entity.update_components(ctx);

        // Floor and house edges.
        let floor_y = ctx.viewport.height - FLOOR_H - entity.body.size.y;
        let max_x = HOUSE_WIDTH - entity.body.size.x;
        let mut pos = entity.position();
        let landed = pos.y > floor_y;
        pos.y = pos.y.min(floor_y);
        pos.x = pos.x.clamp(0.0, max_x);
        if pos != entity.position() {
            entity.set_position(pos);
        }
        if landed {
            if let Some(physics) = entity.component_mut::<Physics>() {
                physics.velocity.y = 0.0;
            }
        }

        let center_x = entity.bounds().center().x;
        self.nearby = ctx
            .others
            .with_behavior::<Furniture>()
            .map(|(f, _)| (f.id(), (f.bounds().center().x - center_x).abs()))
            .filter(|(_, d)| *d < REACH)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id);

        if self.cooldown > 0.0 {
            self.cooldown -= ctx.dt;
        }
        if wants_interact && self.cooldown <= 0.0 {
            if let Some(id) = self.nearby {
                log::debug!("player: interact with {id}");
                self.interaction = Some(id);
                self.cooldown = INTERACT_COOLDOWN;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protecting_freezes_walk() {
        let mut input = Input::new();
        input.set_key(Key::D, true);

        let mut p = HousePlayer::new();
        assert_eq!(p.walk_velocity(Some(&input)), SPEED);

        p.set_protecting(true);
        assert_eq!(p.walk_velocity(Some(&input)), 0.0);
    }

    #[test]
    fn left_wins_and_sets_facing() {
        let mut input = Input::new();
        input.set_key(Key::ArrowLeft, true);
        input.set_key(Key::ArrowRight, true);

        let mut p = HousePlayer::new();
        assert_eq!(p.walk_velocity(Some(&input)), -SPEED);
        assert!(p.facing_left);
    }

    #[test]
    fn spawned_player_starts_idle() {
        let e = spawn(Vec2::new(150.0, 560.0), TouchControls::new());
        let animator = e.component::<Animator>().map(|a| a.current().map(str::to_owned));
        assert_eq!(animator, Some(Some(IDLE.to_owned())));
        assert!(e.has_component::<Physics>());
    }
}
