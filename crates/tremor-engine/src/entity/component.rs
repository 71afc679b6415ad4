use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::draw::DrawCtx;
use crate::game::UpdateCtx;

use super::EntityId;
use super::entity::Body;

/// Upcast helper so trait objects can be downcast to their concrete kind.
///
/// Blanket-implemented for every `'static` type. Call it on the unboxed
/// trait object (`(**boxed).as_any()`), never on the `Box` itself.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Capability unit attached to an entity.
///
/// Both hooks default to no-ops so a component implements only what it needs;
/// the entity calls both uniformly on every component it owns.
///
/// `owner` is the owning entity's spatial state. Components that move the
/// entity (physics) write it; visual components read it.
pub trait Component: AsAny {
    fn update(&mut self, owner: &mut Body, ctx: &mut UpdateCtx<'_>) {
        let _ = (owner, ctx);
    }

    fn draw(&self, owner: &Body, ctx: &mut DrawCtx<'_>) {
        let _ = (owner, ctx);
    }
}

/// Ordered component storage with a kind-keyed index, bound to one entity.
///
/// Attachment order is preserved for iteration. The index maps each kind to
/// the slot of the *first* component of that kind; later duplicates are
/// iterated but never returned by typed lookup.
///
/// Components move into the store on attach and never leave it, so every
/// stored component belongs to [`Components::owner`] for its whole life.
pub struct Components {
    owner: EntityId,
    slots: Vec<Box<dyn Component>>,
    index: HashMap<TypeId, usize>,
}

impl Components {
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The entity every stored component is attached to.
    #[inline]
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    pub fn push<C: Component>(&mut self, component: C) {
        log::trace!("{}: attach {}", self.owner, std::any::type_name::<C>());
        let slot = self.slots.len();
        self.index.entry(TypeId::of::<C>()).or_insert(slot);
        self.slots.push(Box::new(component));
    }

    pub fn get<C: Component>(&self) -> Option<&C> {
        let &slot = self.index.get(&TypeId::of::<C>())?;
        (*self.slots[slot]).as_any().downcast_ref::<C>()
    }

    pub fn get_mut<C: Component>(&mut self) -> Option<&mut C> {
        let &slot = self.index.get(&TypeId::of::<C>())?;
        (*self.slots[slot]).as_any_mut().downcast_mut::<C>()
    }

    #[inline]
    pub fn contains<C: Component>(&self) -> bool {
        self.index.contains_key(&TypeId::of::<C>())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &dyn Component> {
        self.slots.iter().map(|c| &**c)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn Component + 'static)> {
        self.slots.iter_mut().map(|c| &mut **c)
    }
}

impl std::fmt::Debug for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Components")
            .field("owner", &self.owner)
            .field("len", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(u32);
    impl Component for Health {}

    #[derive(Debug, PartialEq)]
    struct Tag(&'static str);
    impl Component for Tag {}

    #[test]
    fn lookup_by_kind() {
        let mut store = Components::new(EntityId::next());
        store.push(Tag("player"));
        store.push(Health(3));

        assert_eq!(store.get::<Health>(), Some(&Health(3)));
        assert_eq!(store.get::<Tag>(), Some(&Tag("player")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_kind_is_none() {
        let mut store = Components::new(EntityId::next());
        store.push(Tag("door"));
        assert!(store.get::<Health>().is_none());
        assert!(!store.contains::<Health>());
    }

    #[test]
    fn duplicate_kind_returns_first() {
        let mut store = Components::new(EntityId::next());
        store.push(Health(1));
        store.push(Health(2));

        assert_eq!(store.get::<Health>(), Some(&Health(1)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn owner_is_fixed_at_construction() {
        let owner = EntityId::next();
        let mut store = Components::new(owner);
        store.push(Tag("crate"));
        store.push(Health(2));
        assert_eq!(store.owner(), owner);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut store = Components::new(EntityId::next());
        store.push(Health(5));
        if let Some(h) = store.get_mut::<Health>() {
            h.0 -= 1;
        }
        assert_eq!(store.get::<Health>(), Some(&Health(4)));
    }
}
