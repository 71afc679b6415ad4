//! Tremor engine crate.
//!
//! A small real-time 2D runtime: entities composed of components, a
//! deferred-mutation game loop, a camera with follow / confine / shake,
//! point-mass physics and sprite animation. Each frame produces a
//! screen-space [`draw::DrawList`]; [`render::GpuPresenter`] rasterizes it
//! with wgpu.

pub mod animation;
pub mod camera;
pub mod coords;
pub mod draw;
pub mod drawable;
pub mod entity;
pub mod game;
pub mod input;
pub mod logging;
pub mod paint;
pub mod physics;
pub mod render;
pub mod time;
pub mod window;
