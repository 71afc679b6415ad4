use super::{Behavior, Component, Entity, EntityId};

/// Read-only view of every live entity except the one being updated.
///
/// Built by splitting the live list around the current entity, so it stays
/// valid while that entity is borrowed mutably.
#[derive(Clone, Copy)]
pub struct Others<'a> {
    before: &'a [Entity],
    after: &'a [Entity],
}

impl<'a> Others<'a> {
    pub fn new(before: &'a [Entity], after: &'a [Entity]) -> Self {
        Self { before, after }
    }

    pub fn empty() -> Self {
        Self { before: &[], after: &[] }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Entity> + 'a {
        self.before.iter().chain(self.after.iter())
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: EntityId) -> Option<&'a Entity> {
        self.iter().find(|e| e.id() == id)
    }

    pub fn find(&self, name: &str) -> Option<&'a Entity> {
        self.iter().find(|e| e.name() == name)
    }

    /// Entities carrying a component of kind `C`, paired with it.
    pub fn with_component<C: Component>(&self) -> impl Iterator<Item = (&'a Entity, &'a C)> + 'a {
        self.iter().filter_map(|e| e.component::<C>().map(|c| (e, c)))
    }

    /// Entities whose behavior is of kind `B`, paired with it.
    pub fn with_behavior<B: Behavior>(&self) -> impl Iterator<Item = (&'a Entity, &'a B)> + 'a {
        self.iter().filter_map(|e| e.behavior::<B>().map(|b| (e, b)))
    }
}
