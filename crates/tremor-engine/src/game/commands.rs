use crate::entity::{Entity, EntityId};

use super::Level;

/// Deferred scene mutations recorded during a frame.
///
/// Nothing here touches the live entity list directly; the game applies
/// spawns at the start of the next frame and despawns / level switches at the
/// end of the current update pass.
#[derive(Default)]
pub struct Commands {
    spawns: Vec<Entity>,
    despawns: Vec<EntityId>,
    level: Option<Box<dyn Level>>,
    exit: bool,
}

impl Commands {
    /// Queues an entity for registration. Returns its id.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id();
        self.spawns.push(entity);
        id
    }

    /// Queues a removal. Removing an entity that is still queued for spawn
    /// cancels the spawn.
    pub fn despawn(&mut self, id: EntityId) {
        if let Some(i) = self.spawns.iter().position(|e| e.id() == id) {
            self.spawns.remove(i);
            return;
        }
        if !self.despawns.contains(&id) {
            self.despawns.push(id);
        }
    }

    /// Replaces the active level at the end of this frame's update pass.
    /// A later request in the same frame wins.
    pub fn switch_level(&mut self, level: Box<dyn Level>) {
        self.level = Some(level);
    }

    pub fn request_exit(&mut self) {
        self.exit = true;
    }

    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    #[inline]
    pub fn pending_spawns(&self) -> usize {
        self.spawns.len()
    }

    pub fn is_despawn_pending(&self, id: EntityId) -> bool {
        self.despawns.contains(&id)
    }

    pub(crate) fn take_spawns(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.spawns)
    }

    pub(crate) fn take_despawns(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.despawns)
    }

    pub(crate) fn take_level(&mut self) -> Option<Box<dyn Level>> {
        self.level.take()
    }

    /// Drops queued scene mutations. The exit request survives.
    pub(crate) fn clear_scene(&mut self) {
        self.spawns.clear();
        self.despawns.clear();
    }
}
