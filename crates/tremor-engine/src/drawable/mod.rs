//! Visual components.
//!
//! Both draw relative to the owner's top-left position. `Animator` (in
//! [`crate::animation`]) is the third visual component.

mod label;
mod shape;

pub use label::{Label, LabelSpace};
pub use shape::{Shape, ShapeKind};
