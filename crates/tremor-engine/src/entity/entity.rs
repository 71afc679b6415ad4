use crate::coords::{Rect, Vec2};
use crate::draw::DrawCtx;
use crate::game::UpdateCtx;

use super::{Behavior, Component, Components, EntityId, SceneId};

/// Spatial state of an entity: top-left position and extent in world units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
}

impl Body {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// A named game object.
///
/// The id is assigned at construction, so application code may keep it before
/// the entity is handed to the game loop. Registration with a scene happens at
/// most once; a removed entity is dropped, not recycled.
pub struct Entity {
    id: EntityId,
    name: String,
    pub body: Body,
    components: Components,
    behavior: Option<Box<dyn Behavior>>,
    scene: Option<SceneId>,
}

impl Entity {
    pub fn new(name: impl Into<String>, position: Vec2) -> Self {
        let id = EntityId::next();
        Self {
            id,
            name: name.into(),
            body: Body { position, size: Vec2::zero() },
            components: Components::new(id),
            behavior: None,
            scene: None,
        }
    }

    pub fn with_size(mut self, w: f32, h: f32) -> Self {
        self.body.size = Vec2::new(w, h);
        self
    }

    pub fn with_component<C: Component>(mut self, component: C) -> Self {
        self.add_component(component);
        self
    }

    pub fn with_behavior<B: Behavior>(mut self, behavior: B) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.body.position = position;
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    /// Scene the entity was registered into, if any.
    #[inline]
    pub fn scene(&self) -> Option<SceneId> {
        self.scene
    }

    /// Records scene membership. Returns `false` (and changes nothing) if the
    /// entity already belongs to a scene.
    pub(crate) fn register(&mut self, scene: SceneId) -> bool {
        if self.scene.is_some() {
            return false;
        }
        self.scene = Some(scene);
        true
    }

    // ── components ───────────────────────────────────────────────────────

    /// Attaches a component, recording this entity as its owner. Attachment
    /// order is update and draw order.
    pub fn add_component<C: Component>(&mut self, component: C) {
        self.components.push(component);
    }

    /// First attached component of kind `C`.
    pub fn component<C: Component>(&self) -> Option<&C> {
        self.components.get::<C>()
    }

    pub fn component_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.components.get_mut::<C>()
    }

    #[inline]
    pub fn has_component<C: Component>(&self) -> bool {
        self.components.contains::<C>()
    }

    #[inline]
    pub fn components(&self) -> &Components {
        &self.components
    }

    // ── behavior ─────────────────────────────────────────────────────────

    /// Typed view of the entity's behavior.
    ///
    /// Returns `None` while the behavior itself is running, since it is
    /// detached from the entity for the duration of its own hook.
    pub fn behavior<B: Behavior>(&self) -> Option<&B> {
        let b = self.behavior.as_deref()?;
        b.as_any().downcast_ref::<B>()
    }

    pub fn behavior_mut<B: Behavior>(&mut self) -> Option<&mut B> {
        let b = self.behavior.as_deref_mut()?;
        b.as_any_mut().downcast_mut::<B>()
    }

    // ── frame hooks ──────────────────────────────────────────────────────

    /// Per-frame update. Runs the behavior if one is attached, otherwise
    /// updates every component in attachment order.
    pub fn update(&mut self, ctx: &mut UpdateCtx<'_>) {
        ctx.entity = self.id;

        match self.behavior.take() {
            Some(mut behavior) => {
                behavior.update(self, ctx);
                self.behavior = Some(behavior);
            }
            None => self.update_components(ctx),
        }
    }

    /// Updates every component in attachment order.
    pub fn update_components(&mut self, ctx: &mut UpdateCtx<'_>) {
        ctx.entity = self.id;
        let body = &mut self.body;
        for component in self.components.iter_mut() {
            component.update(body, ctx);
        }
    }

    pub fn draw(&self, ctx: &mut DrawCtx<'_>) {
        match self.behavior.as_deref() {
            Some(behavior) => behavior.draw(self, ctx),
            None => self.draw_components(ctx),
        }
    }

    pub fn draw_components(&self, ctx: &mut DrawCtx<'_>) {
        for component in self.components.iter() {
            component.draw(&self.body, ctx);
        }
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("body", &self.body)
            .field("components", &self.components.len())
            .field("scene", &self.scene)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::Harness;

    #[derive(Default)]
    struct Counter {
        updates: u32,
    }

    impl Component for Counter {
        fn update(&mut self, _owner: &mut Body, _ctx: &mut UpdateCtx<'_>) {
            self.updates += 1;
        }
    }

    struct Mover;

    impl Component for Mover {
        fn update(&mut self, owner: &mut Body, ctx: &mut UpdateCtx<'_>) {
            owner.position.x += 10.0 * ctx.dt;
        }
    }

    /// Skips component updates entirely.
    struct Frozen {
        ticks: u32,
    }

    impl Behavior for Frozen {
        fn update(&mut self, entity: &mut Entity, _ctx: &mut UpdateCtx<'_>) {
            self.ticks += 1;
            assert!(entity.behavior::<Frozen>().is_none());
        }
    }

    #[test]
    fn ids_are_unique_and_assigned_at_construction() {
        let a = Entity::new("a", Vec2::zero());
        let b = Entity::new("b", Vec2::zero());
        assert_ne!(a.id(), b.id());
        assert!(a.scene().is_none());
    }

    #[test]
    fn attached_components_record_their_owner() {
        let mut e = Entity::new("crate", Vec2::zero()).with_component(Mover);
        e.add_component(Counter::default());

        assert_eq!(e.components().owner(), e.id());
        assert_eq!(e.components().len(), 2);
    }

    #[test]
    fn components_update_in_attachment_order() {
        let mut harness = Harness::new();
        let mut e = Entity::new("e", Vec2::zero())
            .with_component(Mover)
            .with_component(Counter::default());

        harness.update(&mut e, 0.5);
        harness.update(&mut e, 0.5);

        assert_eq!(e.position().x, 10.0);
        assert_eq!(e.component::<Counter>().map(|c| c.updates), Some(2));
    }

    #[test]
    fn behavior_replaces_default_update() {
        let mut harness = Harness::new();
        let mut e = Entity::new("e", Vec2::zero())
            .with_component(Mover)
            .with_behavior(Frozen { ticks: 0 });

        harness.update(&mut e, 1.0);

        assert_eq!(e.position().x, 0.0);
        assert_eq!(e.behavior::<Frozen>().map(|b| b.ticks), Some(1));
    }

    #[test]
    fn register_only_once() {
        let mut e = Entity::new("e", Vec2::zero());
        let first = SceneId::next();
        assert!(e.register(first));
        assert!(!e.register(SceneId::next()));
        assert_eq!(e.scene(), Some(first));
    }
}
