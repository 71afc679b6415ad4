use crate::draw::DrawCtx;
use crate::game::UpdateCtx;

use super::{AsAny, Entity};

/// Custom per-entity logic.
///
/// A behavior replaces the entity's default update/draw; call
/// [`Entity::update_components`] / [`Entity::draw_components`] from the hook
/// to keep component processing. During the hook the behavior is detached
/// from `entity`, so it receives the entity and its components mutably
/// without aliasing itself.
pub trait Behavior: AsAny {
    fn update(&mut self, entity: &mut Entity, ctx: &mut UpdateCtx<'_>) {
        entity.update_components(ctx);
    }

    fn draw(&self, entity: &Entity, ctx: &mut DrawCtx<'_>) {
        entity.draw_components(ctx);
    }
}
