use std::time::{Duration, Instant};

use crate::entity::SceneId;

/// A timer that came due, tagged with the scene it was scheduled in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DueTimer {
    pub name: &'static str,
    pub scene: SceneId,
}

#[derive(Debug, Clone)]
struct Pending {
    /// `None` when the deadline is beyond `Instant`'s range.
    due: Option<Instant>,
    name: &'static str,
    scene: SceneId,
}

/// Wall-clock one-shot timers.
///
/// Timers are scheduled relative to the current frame's timestamp and tagged
/// with the scene that was active at scheduling time. Delivery is the game's
/// job; it drops timers whose scene is gone.
#[derive(Debug, Clone)]
pub struct Timers {
    now: Instant,
    scene: SceneId,
    pending: Vec<Pending>,
}

impl Timers {
    pub(crate) fn new(now: Instant, scene: SceneId) -> Self {
        Self { now, scene, pending: Vec::new() }
    }

    /// Schedules `name` to fire `delay` after the current frame time.
    ///
    /// A delay past what `Instant` can represent never fires (until cancelled
    /// or its scene ends).
    pub fn schedule(&mut self, delay: Duration, name: &'static str) {
        let Some(due) = self.now.checked_add(delay) else {
            log::debug!("timer {name:?}: delay {delay:?} out of range, it will never fire");
            self.pending.push(Pending { due: None, name, scene: self.scene });
            return;
        };
        log::trace!("timer {name:?} in {delay:?} ({})", self.scene);
        self.pending.push(Pending {
            due: Some(due),
            name,
            scene: self.scene,
        });
    }

    /// Like [`Timers::schedule`] with a delay in seconds. Negative (and NaN)
    /// delays fire on the next frame; infinite or huge ones never do.
    pub fn schedule_secs(&mut self, delay: f32, name: &'static str) {
        let delay = if delay > 0.0 {
            Duration::try_from_secs_f32(delay).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        };
        self.schedule(delay, name);
    }

    /// Drops every pending timer named `name`.
    pub fn cancel(&mut self, name: &str) {
        self.pending.retain(|t| t.name != name);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_scheduled(&self, name: &str) -> bool {
        self.pending.iter().any(|t| t.name == name && t.scene == self.scene)
    }

    pub(crate) fn set_now(&mut self, now: Instant) {
        self.now = self.now.max(now);
    }

    pub(crate) fn set_scene(&mut self, scene: SceneId) {
        self.scene = scene;
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub(crate) fn take_due(&mut self) -> Vec<DueTimer> {
        let now = self.now;
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|t| {
            if t.due.is_some_and(|at| at <= now) {
                due.push(t.clone());
                false
            } else {
                true
            }
        });

        due.sort_by_key(|t| t.due);
        due.into_iter().map(|t| DueTimer { name: t.name, scene: t.scene }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let t0 = Instant::now();
        let scene = SceneId::next();
        let mut timers = Timers::new(t0, scene);
        timers.schedule(Duration::from_secs(2), "late");
        timers.schedule(Duration::from_secs(1), "early");

        timers.set_now(t0 + Duration::from_millis(1500));
        assert_eq!(timers.take_due(), vec![DueTimer { name: "early", scene }]);

        timers.set_now(t0 + Duration::from_secs(3));
        assert_eq!(timers.take_due().len(), 1);
        assert!(timers.is_empty());
    }

    #[test]
    fn timers_carry_their_scene() {
        let t0 = Instant::now();
        let first = SceneId::next();
        let mut timers = Timers::new(t0, first);
        timers.schedule_secs(1.0, "quake");

        let second = SceneId::next();
        timers.set_scene(second);
        assert!(!timers.is_scheduled("quake"));

        timers.set_now(t0 + Duration::from_secs(1));
        assert_eq!(timers.take_due()[0].scene, first);
    }

    #[test]
    fn unrepresentable_delays_never_fire() {
        let t0 = Instant::now();
        let mut timers = Timers::new(t0, SceneId::next());
        timers.schedule_secs(f32::INFINITY, "never");
        timers.schedule_secs(f32::MAX, "huge");
        timers.schedule(Duration::MAX, "max");
        timers.schedule_secs(f32::NAN, "nan");
        timers.schedule_secs(-1.0, "past");

        timers.set_now(t0 + Duration::from_secs(60 * 60 * 24 * 365));
        let fired: Vec<_> = timers.take_due().into_iter().map(|t| t.name).collect();
        assert_eq!(fired, vec!["nan", "past"]);
        assert!(timers.is_scheduled("never"));
        assert_eq!(timers.len(), 3);

        timers.cancel("never");
        assert!(!timers.is_scheduled("never"));
    }

    #[test]
    fn cancel_by_name() {
        let mut timers = Timers::new(Instant::now(), SceneId::next());
        timers.schedule_secs(1.0, "a");
        timers.schedule_secs(1.0, "b");
        timers.cancel("a");
        assert!(!timers.is_scheduled("a"));
        assert!(timers.is_scheduled("b"));
    }
}
