use std::fmt;
use std::time::Duration;

use crate::camera::ShakeConfig;
use crate::coords::Viewport;
use crate::time::FrameClock;

/// Game loop configuration.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Logical viewport the camera works in.
    pub viewport: Viewport,
    /// Lower clamp for the frame delta.
    pub dt_min: Duration,
    /// Upper clamp for the frame delta; bounds the step after stalls.
    pub dt_max: Duration,
    pub shake: ShakeConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1280.0, 720.0),
            dt_min: FrameClock::DEFAULT_DT_MIN,
            dt_max: FrameClock::DEFAULT_DT_MAX,
            shake: ShakeConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.viewport.is_valid() {
            return Err(ConfigError::new(format!(
                "viewport must be positive and finite, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }

        if self.dt_max.is_zero() || self.dt_min > self.dt_max {
            return Err(ConfigError::new(format!(
                "delta clamps must satisfy 0 <= dt_min <= dt_max, dt_max > 0 (got {:?} .. {:?})",
                self.dt_min, self.dt_max
            )));
        }

        if !self.shake.magnitude.is_finite() || !self.shake.ramp.is_finite() {
            return Err(ConfigError::new("shake magnitude and ramp must be finite"));
        }

        Ok(())
    }
}

/// Rejected [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid game config: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
