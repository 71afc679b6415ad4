//! Discrete-frame sprite playback.

mod animator;
mod clip;

pub use animator::Animator;
pub use clip::Animation;
