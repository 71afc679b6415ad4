use crate::coords::Vec2;

/// Shake tuning.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShakeConfig {
    /// Peak offset in world units at the start of a shake.
    pub magnitude: f32,
    /// Fractional growth of the magnitude per second of shaking.
    pub ramp: f32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self { magnitude: 8.0, ramp: 0.15 }
    }
}

/// Time-bounded camera tremor.
#[derive(Debug, Clone, Default)]
pub struct Shake {
    pub config: ShakeConfig,
    active: bool,
    elapsed: f32,
    duration: f32,
}

impl Shake {
    pub fn new(config: ShakeConfig) -> Self {
        Self { config, active: false, elapsed: 0.0, duration: 0.0 }
    }

    /// Starts (or restarts) a shake lasting `duration` seconds.
    pub fn start(&mut self, duration: f32) {
        self.active = true;
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.elapsed = 0.0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn remaining(&self) -> f32 {
        if self.active { (self.duration - self.elapsed).max(0.0) } else { 0.0 }
    }

    /// Advances the shake clock. Deactivates once elapsed exceeds the duration.
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        if self.elapsed > self.duration {
            log::debug!("shake finished after {:.2}s", self.elapsed);
            self.stop();
        }
    }

    /// Current offset; zero when inactive.
    pub fn offset(&self) -> Vec2 {
        if !self.active {
            return Vec2::zero();
        }
        shake_offset(self.elapsed, self.config.magnitude, self.config.ramp)
    }
}

/// Deterministic shake waveform.
///
/// Two incommensurate sinusoids per axis give an irregular but reproducible
/// wobble; amplitude grows linearly with `ramp` over time.
pub fn shake_offset(elapsed: f32, magnitude: f32, ramp: f32) -> Vec2 {
    let intensity = magnitude * (1.0 + ramp * elapsed);
    let t = elapsed;
    Vec2::new(
        intensity * (0.6 * (61.0 * t).sin() + 0.4 * (23.0 * t).sin()),
        intensity * (0.6 * (53.0 * t).cos() + 0.4 * (31.0 * t).sin()),
    )
}
