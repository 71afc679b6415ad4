//! Drives single entities outside a full game loop.

use std::time::Instant;

use crate::camera::{Camera, ShakeConfig};
use crate::coords::Viewport;
use crate::entity::{Entity, Others, SceneId};

use super::{Commands, Timers, UpdateCtx};

pub(crate) struct Harness {
    pub camera: Camera,
    pub commands: Commands,
    pub timers: Timers,
    pub viewport: Viewport,
}

impl Harness {
    pub fn new() -> Self {
        let viewport = Viewport::new(800.0, 600.0);
        Self {
            camera: Camera::new(viewport, ShakeConfig::default()),
            commands: Commands::default(),
            timers: Timers::new(Instant::now(), SceneId::next()),
            viewport,
        }
    }

    pub fn update(&mut self, entity: &mut Entity, dt: f32) {
        let mut ctx = UpdateCtx {
            dt,
            entity: entity.id(),
            viewport: self.viewport,
            camera: &mut self.camera,
            commands: &mut self.commands,
            timers: &mut self.timers,
            others: Others::empty(),
        };
        entity.update(&mut ctx);
    }
}
