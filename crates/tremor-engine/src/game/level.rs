use crate::camera::Camera;
use crate::coords::Viewport;
use crate::entity::{Behavior, Component, Entity, EntityId};

use super::{Commands, Timers};

/// Active scene controller.
///
/// A level populates the scene in [`Level::enter`] and can run logic after
/// each entity pass. Only one level is active; switching levels tears the
/// whole scene down first (entities, queues, camera, pending timers).
pub trait Level {
    fn name(&self) -> &str;

    fn enter(&mut self, ctx: &mut LevelCtx<'_>);

    /// Runs once per frame, after every entity has been updated.
    fn update(&mut self, ctx: &mut LevelCtx<'_>) {
        let _ = ctx;
    }

    /// Delivery of a timer scheduled while this level's scene was active.
    fn on_timer(&mut self, timer: &str, ctx: &mut LevelCtx<'_>) {
        let _ = (timer, ctx);
    }

    /// Called on teardown, before the scene is cleared.
    fn exit(&mut self) {}
}

/// Level-side view of the scene.
///
/// Unlike [`UpdateCtx`](super::UpdateCtx), a level may mutate any live
/// entity; it runs between entity passes.
pub struct LevelCtx<'a> {
    /// Last frame delta in seconds (0 during `enter`).
    pub dt: f32,
    pub viewport: Viewport,
    pub camera: &'a mut Camera,
    pub commands: &'a mut Commands,
    pub timers: &'a mut Timers,
    entities: &'a mut [Entity],
}

impl<'a> LevelCtx<'a> {
    pub(crate) fn new(
        dt: f32,
        viewport: Viewport,
        camera: &'a mut Camera,
        commands: &'a mut Commands,
        timers: &'a mut Timers,
        entities: &'a mut [Entity],
    ) -> Self {
        Self { dt, viewport, camera, commands, timers, entities }
    }

    #[inline]
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        self.commands.spawn(entity)
    }

    #[inline]
    pub fn despawn(&mut self, id: EntityId) {
        self.commands.despawn(id);
    }

    pub fn switch_level(&mut self, level: impl Level + 'static) {
        self.commands.switch_level(Box::new(level));
    }

    /// Live entities, in update order.
    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &*self.entities
    }

    #[inline]
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut *self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    /// Component of kind `C` on entity `id`.
    pub fn component_mut<C: Component>(&mut self, id: EntityId) -> Option<&mut C> {
        self.entity_mut(id)?.component_mut::<C>()
    }

    /// Behavior of kind `B` on entity `id`.
    pub fn behavior_mut<B: Behavior>(&mut self, id: EntityId) -> Option<&mut B> {
        self.entity_mut(id)?.behavior_mut::<B>()
    }

    /// Every live entity whose behavior is of kind `B`.
    pub fn behaviors<B: Behavior>(&self) -> impl Iterator<Item = (&Entity, &B)> + '_ {
        self.entities.iter().filter_map(|e| e.behavior::<B>().map(|b| (e, b)))
    }
}
