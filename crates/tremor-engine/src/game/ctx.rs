use crate::camera::Camera;
use crate::coords::Viewport;
use crate::entity::{Entity, EntityId, Others};

use super::{Commands, Timers};

/// Per-entity update context.
///
/// Replaces any back-reference from entities to the game: everything an
/// entity or component may touch during its update is reachable from here.
/// The other live entities are visible read-only; scene mutations go
/// through `commands` and take effect at the frame's safe points.
pub struct UpdateCtx<'a> {
    /// Clamped frame delta in seconds.
    pub dt: f32,
    /// Entity currently being updated.
    pub entity: EntityId,
    pub viewport: Viewport,
    pub camera: &'a mut Camera,
    pub commands: &'a mut Commands,
    pub timers: &'a mut Timers,
    pub others: Others<'a>,
}

impl<'a> UpdateCtx<'a> {
    #[inline]
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        self.commands.spawn(entity)
    }

    #[inline]
    pub fn despawn(&mut self, id: EntityId) {
        self.commands.despawn(id);
    }

    /// Removes the entity being updated at the end of the update pass.
    #[inline]
    pub fn despawn_self(&mut self) {
        self.commands.despawn(self.entity);
    }
}
