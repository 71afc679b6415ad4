//! Point-mass motion component.

use crate::coords::Vec2;
use crate::entity::{Body, Component};
use crate::game::UpdateCtx;

/// Semi-implicit Euler integrator with constant gravity.
///
/// Per tick: gravity joins the accumulated acceleration, velocity integrates
/// first, then position integrates with the *new* velocity. Forces applied
/// via [`Physics::apply_force`] last exactly one tick.
///
/// The integrator keeps its own position and writes it to the owner after
/// every tick. If the owner's position changed since the last write-back
/// (a teleport or collision push-out), the integrator adopts it before
/// integrating.
#[derive(Debug, Clone, Default)]
pub struct Physics {
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub gravity: Vec2,

    position: Vec2,
    written: Option<Vec2>,
}

impl Physics {
    pub fn new(velocity: Vec2, acceleration: Vec2, gravity: Vec2) -> Self {
        Self {
            velocity,
            acceleration,
            gravity,
            position: Vec2::zero(),
            written: None,
        }
    }

    /// No initial motion, constant downward gravity of `g` units/s².
    pub fn with_gravity(g: f32) -> Self {
        Self::new(Vec2::zero(), Vec2::zero(), Vec2::new(0.0, g))
    }

    /// Adds `force` to this tick's acceleration (unit mass).
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Integrated position as of the last tick.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// One integration step from `from`. Returns the new position.
    pub fn integrate(&mut self, from: Vec2, dt: f32) -> Vec2 {
        self.acceleration += self.gravity;
        self.velocity += self.acceleration * dt;
        self.position = from + self.velocity * dt;
        self.acceleration = Vec2::zero();
        self.position
    }
}

impl Component for Physics {
    fn update(&mut self, owner: &mut Body, ctx: &mut UpdateCtx<'_>) {
        let from = match self.written {
            Some(p) if p == owner.position => self.position,
            _ => owner.position,
        };

        owner.position = self.integrate(from, ctx.dt);
        self.written = Some(owner.position);
    }
}
