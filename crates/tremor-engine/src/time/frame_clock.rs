use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds (clamped).
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the host stalls,
/// is suspended by a debugger, or keeps scheduling frames after a long gap.
/// Pausing is handled one level up: the game loop calls [`FrameClock::reset_at`]
/// on every paused frame so the first running frame measures from "just now".
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    /// Creates a new clock with default clamps (0.1 ms … 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    #[inline]
    pub fn dt_max(&self) -> Duration {
        self.dt_max
    }

    /// Resets the clock baseline to now.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    /// Resets the clock baseline to `now`.
    pub fn reset_at(&mut self, now: Instant) {
        self.last = now;
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now` and returns a new `FrameTime`.
    ///
    /// A `now` earlier than the baseline counts as zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_measures_elapsed_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new();
        clock.reset_at(t0);

        let ft = clock.tick_at(t0 + Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn long_gap_is_clamped_to_max() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new();
        clock.reset_at(t0);

        let ft = clock.tick_at(t0 + Duration::from_secs(30));
        assert!((ft.dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_gap_is_clamped_to_min() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new();
        clock.reset_at(t0);

        let ft = clock.tick_at(t0);
        assert!(ft.dt > 0.0);
        assert!(ft.dt <= 0.0001 + 1e-7);
    }

    #[test]
    fn reset_discards_gap() {
        let t0 = Instant::now();
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_secs(10));
        clock.reset_at(t0);

        clock.reset_at(t0 + Duration::from_secs(5));
        let ft = clock.tick_at(t0 + Duration::from_millis(5010));
        assert!((ft.dt - 0.010).abs() < 1e-5);
    }
}
