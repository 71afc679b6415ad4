//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to the host loop.
//! Intended usage:
//! - one `FrameClock` per game loop
//! - call `tick_at()` once per scheduled frame to obtain `FrameTime`
//! - call `reset_at()` while paused so resuming never sees the gap

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
