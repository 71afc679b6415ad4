use crate::coords::{Rect, Vec2, Viewport};
use crate::entity::EntityId;

use super::{CameraView, Confiner, Shake, ShakeConfig};

/// 2D camera.
///
/// `position()` is the un-shaken viewport origin: follow and confinement
/// operate on it, and the shake offset is only added when the frame's
/// [`CameraView`] is produced. Gameplay code reading the camera position
/// therefore never sees the tremor.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec2,
    viewport: Viewport,
    target: Option<EntityId>,
    confiner: Option<Confiner>,
    shake: Shake,
}

impl Camera {
    pub fn new(viewport: Viewport, shake: ShakeConfig) -> Self {
        Self {
            position: Vec2::zero(),
            viewport,
            target: None,
            confiner: None,
            shake: Shake::new(shake),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Moves the camera directly. Confinement still applies on the next update.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn target(&self) -> Option<EntityId> {
        self.target
    }

    pub fn set_target(&mut self, target: Option<EntityId>) {
        self.target = target;
    }

    #[inline]
    pub fn confiner(&self) -> Option<Confiner> {
        self.confiner
    }

    pub fn set_confiner(&mut self, confiner: Option<Confiner>) {
        self.confiner = confiner;
    }

    // ── shake ────────────────────────────────────────────────────────────

    /// Starts a shake of `duration` seconds, restarting any running shake.
    pub fn start(&mut self, duration: f32) {
        log::debug!("camera shake for {duration:.1}s");
        self.shake.start(duration);
    }

    pub fn stop_shake(&mut self) {
        self.shake.stop();
    }

    #[inline]
    pub fn is_shaking(&self) -> bool {
        self.shake.is_active()
    }

    #[inline]
    pub fn shake(&self) -> &Shake {
        &self.shake
    }

    pub fn set_shake_config(&mut self, config: ShakeConfig) {
        self.shake.config = config;
    }

    // ── per frame ────────────────────────────────────────────────────────

    /// Follow, then confine, then advance the shake.
    ///
    /// `target_bounds` is the followed entity's bounds, resolved by the caller;
    /// `None` (no target, or the target is gone) leaves the position as is.
    pub fn update(&mut self, dt: f32, target_bounds: Option<Rect>) {
        if let Some(bounds) = target_bounds {
            self.position = Self::centered_on(bounds, self.viewport);
        }

        if let Some(confiner) = self.confiner {
            self.position = confiner.clamp(self.position, self.viewport);
        }

        self.shake.advance(dt);
    }

    /// Viewport origin that centers `bounds` on screen.
    pub fn centered_on(bounds: Rect, viewport: Viewport) -> Vec2 {
        bounds.center() - viewport.center()
    }

    /// This frame's transform, including the shake offset.
    pub fn view(&self) -> CameraView {
        CameraView::new(self.position + self.shake.offset(), self.viewport)
    }

    /// Back to the origin with no target, confiner or shake.
    pub fn reset(&mut self) {
        self.position = Vec2::zero();
        self.target = None;
        self.confiner = None;
        self.shake.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Viewport::new(800.0, 600.0), ShakeConfig::default())
    }

    // ── follow ───────────────────────────────────────────────────────────

    #[test]
    fn centers_on_target() {
        let mut cam = camera();
        cam.update(0.016, Some(Rect::new(1000.0, 500.0, 50.0, 50.0)));
        assert_eq!(cam.position(), Vec2::new(625.0, 225.0));
    }

    #[test]
    fn no_target_keeps_position() {
        let mut cam = camera();
        cam.set_position(Vec2::new(12.0, 34.0));
        cam.update(0.016, None);
        assert_eq!(cam.position(), Vec2::new(12.0, 34.0));
    }

    // ── confine ──────────────────────────────────────────────────────────

    #[test]
    fn confiner_clamps_follow_at_edges() {
        let mut cam = camera();
        cam.set_confiner(Some(Confiner::new(0.0, 0.0, 2000.0, 600.0)));

        cam.update(0.016, Some(Rect::new(0.0, 0.0, 50.0, 50.0)));
        assert_eq!(cam.position(), Vec2::new(0.0, 0.0));

        cam.update(0.016, Some(Rect::new(1990.0, 0.0, 50.0, 50.0)));
        assert_eq!(cam.position(), Vec2::new(1200.0, 0.0));
    }

    #[test]
    fn confined_viewport_stays_inside_bounds() {
        let mut cam = camera();
        let bounds = Rect::new(-300.0, -100.0, 2480.0, 900.0);
        cam.set_confiner(Some(Confiner { bounds }));

        for i in -20..40 {
            let target = Rect::new(i as f32 * 97.0, i as f32 * 41.0, 40.0, 100.0);
            cam.update(0.016, Some(target));
            let visible = cam.view().visible();
            assert!(visible.min().x >= bounds.min().x && visible.max().x <= bounds.max().x);
            assert!(visible.min().y >= bounds.min().y && visible.max().y <= bounds.max().y);
        }
    }

    // ── shake ────────────────────────────────────────────────────────────

    #[test]
    fn shake_offsets_view_not_position() {
        let mut cam = camera();
        cam.set_position(Vec2::new(100.0, 100.0));
        cam.start(2.0);
        cam.update(0.3, None);

        assert_eq!(cam.position(), Vec2::new(100.0, 100.0));
        assert_ne!(cam.view().origin, cam.position());
    }

    #[test]
    fn shake_expires_and_can_be_stopped() {
        let mut cam = camera();
        cam.start(0.5);
        cam.update(0.3, None);
        assert!(cam.is_shaking());
        cam.update(0.3, None);
        assert!(!cam.is_shaking());
        assert_eq!(cam.view().origin, cam.position());

        cam.start(10.0);
        cam.stop_shake();
        assert!(!cam.is_shaking());
    }

    #[test]
    fn reset_clears_everything() {
        let mut cam = camera();
        cam.set_position(Vec2::new(5.0, 5.0));
        cam.set_confiner(Some(Confiner::new(0.0, 0.0, 10.0, 10.0)));
        cam.start(3.0);
        cam.reset();

        assert_eq!(cam.position(), Vec2::zero());
        assert!(cam.confiner().is_none());
        assert!(cam.target().is_none());
        assert!(!cam.is_shaking());
    }
}
