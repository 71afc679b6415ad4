use std::collections::HashMap;

use crate::coords::{Rect, Vec2};
use crate::draw::{DrawCtx, ImageHandle, ZIndex};
use crate::entity::{Body, Component};
use crate::game::UpdateCtx;
use crate::paint::Color;

use super::Animation;

/// Named-animation state machine.
///
/// Holds a set of [`Animation`]s and plays the current one. Selecting the
/// animation that is already current changes nothing; selecting another one
/// restarts playback at frame 0 with an empty accumulator.
///
/// Draws the current frame as a sprite at the owner's position. With no frame
/// to show (nothing selected, empty animation) it draws `fallback` instead, if
/// visible.
#[derive(Debug, Clone)]
pub struct Animator {
    animations: HashMap<String, Animation>,
    current: Option<String>,
    frame: usize,
    elapsed: f32,

    pub size: Vec2,
    pub fallback: Color,
    pub flip_x: bool,
    pub z: ZIndex,
}

impl Animator {
    /// `size` is used when nothing is selected; otherwise the current
    /// animation's own size applies.
    pub fn new(size: Vec2) -> Self {
        Self {
            animations: HashMap::new(),
            current: None,
            frame: 0,
            elapsed: 0.0,
            size,
            fallback: Color::transparent(),
            flip_x: false,
            z: ZIndex::WORLD,
        }
    }

    pub fn with_fallback(mut self, color: Color) -> Self {
        self.fallback = color;
        self
    }

    pub fn with_z(mut self, z: ZIndex) -> Self {
        self.z = z;
        self
    }

    /// Registers (or replaces) the animation called `name`.
    pub fn add_animation(&mut self, name: impl Into<String>, animation: Animation) {
        self.animations.insert(name.into(), animation);
    }

    /// Switches the current animation.
    ///
    /// Returns `false` for a name that was never added; the current animation
    /// keeps playing in that case.
    pub fn set_animation(&mut self, name: &str) -> bool {
        if self.current.as_deref() == Some(name) {
            return true;
        }

        if !self.animations.contains_key(name) {
            log::warn!("animator: unknown animation {name:?}");
            return false;
        }

        self.current = Some(name.to_owned());
        self.frame = 0;
        self.elapsed = 0.0;
        true
    }

    #[inline]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[inline]
    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn current_animation(&self) -> Option<&Animation> {
        self.animations.get(self.current.as_deref()?)
    }

    /// Image handle of the frame currently shown.
    pub fn current_frame(&self) -> Option<ImageHandle> {
        self.current_animation()?.frames.get(self.frame).copied()
    }

    /// Advances playback by `dt` seconds.
    ///
    /// The accumulator keeps the remainder after each frame step, so playback
    /// rate does not drift with uneven frame times.
    pub fn advance(&mut self, dt: f32) {
        let Some(anim) = self.current.as_deref().and_then(|n| self.animations.get(n)) else {
            return;
        };
        let Some(period) = anim.frame_period() else {
            return;
        };
        let len = anim.len();

        self.elapsed += dt;
        while self.elapsed >= period {
            self.elapsed -= period;
            self.frame = (self.frame + 1) % len;
        }
    }

    fn render_size(&self) -> Vec2 {
        self.current_animation().map_or(self.size, |a| a.size)
    }
}

impl Component for Animator {
    fn update(&mut self, _owner: &mut Body, ctx: &mut UpdateCtx<'_>) {
        self.advance(ctx.dt);
    }

    fn draw(&self, owner: &Body, ctx: &mut DrawCtx<'_>) {
        let rect = Rect::from_origin_size(owner.position, self.render_size());

        match self.current_frame() {
            Some(image) => ctx.world_sprite(self.z, image, rect, self.flip_x),
            None if self.fallback.is_visible() => ctx.world_rect(self.z, rect, self.fallback, None),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraView;
    use crate::coords::Viewport;
    use crate::draw::{DrawCmd, DrawList};

    fn walk() -> Animation {
        Animation::new(
            (1..=4).map(ImageHandle).collect(),
            10.0,
            Vec2::new(64.0, 64.0),
        )
    }

    fn animator() -> Animator {
        let mut a = Animator::new(Vec2::new(64.0, 64.0));
        a.add_animation("Walk", walk());
        a.add_animation("Idle", Animation::new(vec![ImageHandle(9)], 1.0, Vec2::new(64.0, 64.0)));
        a
    }

    // ── playback ─────────────────────────────────────────────────────────

    #[test]
    fn walk_cycle_at_ten_fps() {
        let mut a = animator();
        assert!(a.set_animation("Walk"));

        let mut seen = vec![a.current_frame()];
        for _ in 0..5 {
            a.advance(0.1 + 1e-4);
            seen.push(a.current_frame());
        }

        let expected: Vec<_> = [1, 2, 3, 4, 1, 2].into_iter().map(|i| Some(ImageHandle(i))).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn remainder_carries_between_ticks() {
        let mut a = animator();
        a.set_animation("Walk");

        a.advance(0.07);
        assert_eq!(a.frame_index(), 0);
        a.advance(0.07);
        assert_eq!(a.frame_index(), 1);
        a.advance(0.07);
        assert_eq!(a.frame_index(), 2);
    }

    #[test]
    fn large_step_advances_several_frames() {
        let mut a = animator();
        a.set_animation("Walk");
        a.advance(0.25);
        assert_eq!(a.frame_index(), 2);
    }

    #[test]
    fn quarter_second_in_small_ticks_matches_one_big_step() {
        for (rate, ticks) in [(40.0_f32, 10), (60.0, 15), (144.0, 36)] {
            let mut a = animator();
            a.set_animation("Walk");
            for _ in 0..ticks {
                a.advance(1.0 / rate);
            }
            assert_eq!(a.frame_index(), 2, "{ticks} ticks at {rate} Hz");
        }
    }

    #[test]
    fn empty_or_zero_fps_never_advances() {
        let mut a = Animator::new(Vec2::new(10.0, 10.0));
        a.add_animation("Empty", Animation::new(vec![], 10.0, Vec2::new(10.0, 10.0)));
        a.add_animation("Still", Animation::new(vec![ImageHandle(1), ImageHandle(2)], 0.0, Vec2::new(10.0, 10.0)));

        a.set_animation("Empty");
        a.advance(5.0);
        assert_eq!(a.current_frame(), None);

        a.set_animation("Still");
        a.advance(5.0);
        assert_eq!(a.current_frame(), Some(ImageHandle(1)));
    }

    // ── selection ────────────────────────────────────────────────────────

    #[test]
    fn reselecting_current_is_a_no_op() {
        let mut a = animator();
        a.set_animation("Walk");
        a.advance(0.15);
        assert_eq!(a.frame_index(), 1);

        assert!(a.set_animation("Walk"));
        assert_eq!(a.frame_index(), 1);
        a.advance(0.06);
        assert_eq!(a.frame_index(), 2);
    }

    #[test]
    fn switching_resets_playback() {
        let mut a = animator();
        a.set_animation("Walk");
        a.advance(0.25);

        a.set_animation("Idle");
        a.set_animation("Walk");
        assert_eq!(a.frame_index(), 0);
        a.advance(0.05);
        assert_eq!(a.frame_index(), 0);
    }

    #[test]
    fn unknown_name_keeps_current() {
        let mut a = animator();
        a.set_animation("Idle");
        assert!(!a.set_animation("Dance"));
        assert_eq!(a.current(), Some("Idle"));
    }

    // ── drawing ──────────────────────────────────────────────────────────

    fn draw(a: &Animator, body: &Body) -> DrawList {
        let mut list = DrawList::new();
        let view = CameraView {
            origin: Vec2::new(100.0, 0.0),
            viewport: Viewport::new(800.0, 600.0),
        };
        a.draw(body, &mut DrawCtx::new(&mut list, &view));
        list
    }

    #[test]
    fn draws_current_frame_in_screen_space() {
        let mut a = animator();
        a.set_animation("Walk");
        a.flip_x = true;
        let body = Body { position: Vec2::new(150.0, 20.0), size: Vec2::zero() };

        let list = draw(&a, &body);
        match &list.items()[0].cmd {
            DrawCmd::Sprite(s) => {
                assert_eq!(s.image, ImageHandle(1));
                assert_eq!(s.rect, Rect::new(50.0, 20.0, 64.0, 64.0));
                assert!(s.flip_x);
            }
            other => panic!("unexpected {}", other.kind()),
        }
    }

    #[test]
    fn fallback_rect_without_frames() {
        let a = Animator::new(Vec2::new(40.0, 80.0)).with_fallback(Color::WHITE);
        let list = draw(&a, &Body::default());
        assert!(matches!(list.items()[0].cmd, DrawCmd::Rect(_)));

        let invisible = Animator::new(Vec2::new(40.0, 80.0));
        assert!(draw(&invisible, &Body::default()).is_empty());
    }
}
