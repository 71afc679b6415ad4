//! Entity / component model.
//!
//! An [`Entity`] owns an ordered list of [`Component`]s (attachment order is
//! update and draw order) plus an optional [`Behavior`] holding its custom
//! per-frame logic. Components are found by concrete kind through a
//! `TypeId`-keyed index; only the first component of a kind is reachable that
//! way.

mod behavior;
mod component;
mod entity;
mod id;
mod others;

pub use behavior::Behavior;
pub use component::{AsAny, Component, Components};
pub use entity::{Body, Entity};
pub use id::{EntityId, SceneId};
pub use others::Others;
