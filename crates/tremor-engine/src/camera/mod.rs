//! Viewport transform: follow target, confinement, procedural shake.
//!
//! Per frame the game loop calls [`Camera::update`] once, after the entity
//! pass and removals, then freezes the result into a [`CameraView`] that the
//! draw pass reads.

mod camera;
mod confiner;
mod shake;
mod view;

pub use camera::Camera;
pub use confiner::Confiner;
pub use shake::{Shake, ShakeConfig, shake_offset};
pub use view::CameraView;
