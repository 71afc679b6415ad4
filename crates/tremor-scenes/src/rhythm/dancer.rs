use tremor_engine::coords::{Rect, Vec2};
use tremor_engine::draw::{DrawCtx, ZIndex};
use tremor_engine::entity::{Body, Component};
use tremor_engine::game::UpdateCtx;
use tremor_engine::paint::Color;

use crate::palette::{rgb, rgba};

use super::note::Lane;

/// Joints ease toward their targets at this rate (per second).
const EASE: f32 = 15.0;
const HOLD: f32 = 0.3;
const SCALE: f32 = 1.5;
const Z: ZIndex = ZIndex(2);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Pose {
    Idle,
    Left,
    Right,
    Up,
    Down,
    Cover,
}

impl Pose {
    pub fn for_lane(lane: Lane) -> Pose {
        match lane {
            Lane::Left => Pose::Left,
            Lane::Down => Pose::Down,
            Lane::Up => Pose::Up,
            Lane::Right => Pose::Right,
        }
    }

    /// Joint angles in radians; limbs hang straight down at zero.
    fn joints(self) -> Joints {
        let j = |la, lf, ra, rf, lt, lc, rt, rc| Joints {
            left_arm: la,
            left_forearm: lf,
            right_arm: ra,
            right_forearm: rf,
            left_thigh: lt,
            left_calf: lc,
            right_thigh: rt,
            right_calf: rc,
        };

        match self {
            Pose::Idle => j(0.2, 0.2, -0.2, -0.2, 0.1, 0.0, -0.1, 0.0),
            Pose::Left => j(1.5, 0.2, -0.5, -1.5, -0.5, 0.5, 0.2, 0.0),
            Pose::Right => j(0.5, 1.5, -1.5, -0.2, -0.2, 0.0, 0.5, -0.5),
            Pose::Up => j(2.5, 0.0, -2.5, 0.0, 0.0, 0.0, 0.0, 0.0),
            Pose::Down => j(0.5, 1.0, -0.5, -1.0, -0.8, 1.5, 0.8, -1.5),
            Pose::Cover => j(2.0, 2.0, -2.0, -2.0, -2.0, 2.5, 2.0, -2.5),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
struct Joints {
    left_arm: f32,
    left_forearm: f32,
    right_arm: f32,
    right_forearm: f32,
    left_thigh: f32,
    left_calf: f32,
    right_thigh: f32,
    right_calf: f32,
}

impl Joints {
    fn angles_mut(&mut self) -> [&mut f32; 8] {
        [
            &mut self.left_arm,
            &mut self.left_forearm,
            &mut self.right_arm,
            &mut self.right_forearm,
            &mut self.left_thigh,
            &mut self.left_calf,
            &mut self.right_thigh,
            &mut self.right_calf,
        ]
    }

    fn approach(&mut self, target: Joints, t: f32) {
        let mut target = target;
        for (cur, goal) in self.angles_mut().into_iter().zip(target.angles_mut()) {
            *cur += (*goal - *cur) * t;
        }
    }
}

/// Procedural dancer: every joint eases toward the current pose. A move
/// pose is held briefly before falling back to idle; cover overrides moves
/// until it is lifted.
#[derive(Debug, Clone)]
pub struct Dancer {
    pose: Pose,
    joints: Joints,
    head_y: f32,
    head_target: f32,
    hold: f32,
    time: f32,
    covering: bool,
}

impl Default for Dancer {
    fn default() -> Self {
        Self {
            pose: Pose::Idle,
            joints: Joints::default(),
            head_y: 0.0,
            head_target: 0.0,
            hold: 0.0,
            time: 0.0,
            covering: false,
        }
    }
}

impl Dancer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn is_covering(&self) -> bool {
        self.covering
    }

    /// Strikes the pose for `lane`. Ignored while covering.
    pub fn strike(&mut self, lane: Lane) {
        if self.covering {
            return;
        }
        self.pose = Pose::for_lane(lane);
        self.hold = HOLD;
    }

    pub fn start_cover(&mut self) {
        self.covering = true;
        self.pose = Pose::Cover;
        self.head_target = 15.0;
    }

    pub fn stop_cover(&mut self) {
        self.covering = false;
        self.pose = Pose::Idle;
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt;

        if self.hold > 0.0 {
            self.hold -= dt;
            if self.hold <= 0.0 && !self.covering {
                self.pose = Pose::Idle;
            }
        }

        if !self.covering {
            // Breathing.
            self.head_target = (self.time * 5.0).sin() * 2.0;
        }

        let t = (EASE * dt).min(1.0);
        self.joints.approach(self.pose.joints(), t);
        self.head_y += (self.head_target - self.head_y) * t;
    }
}

/// Local-to-world placement of the figure.
struct Rig<'c, 'a> {
    ctx: &'c mut DrawCtx<'a>,
    origin: Vec2,
}

impl Rig<'_, '_> {
    fn at(&self, local: Vec2) -> Vec2 {
        self.origin + local * SCALE
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let center = self.at(center);
        self.ctx.world_circle(Z, center, radius * SCALE, color);
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let min = self.at(Vec2::new(x, y));
        self.ctx.world_rect(Z, Rect::from_origin_size(min, Vec2::new(w, h) * SCALE), color, None);
    }

    /// Round-capped segment hanging from `from` at `angle`; returns its end.
    fn limb(&mut self, from: Vec2, angle: f32, length: f32, width: f32, color: Color) -> Vec2 {
        let dir = Vec2::new(-angle.sin(), angle.cos());
        let radius = width / 2.0;
        let steps = (length / radius).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let p = from + dir * (length * i as f32 / steps as f32);
            self.circle(p, radius, color);
        }
        from + dir * length
    }
}

impl Component for Dancer {
    fn update(&mut self, _owner: &mut Body, ctx: &mut UpdateCtx<'_>) {
        self.advance(ctx.dt);
    }

    fn draw(&self, owner: &Body, ctx: &mut DrawCtx<'_>) {
        let skin = rgb(0xFFCCBC);
        let shirt = rgb(0x1565C0);
        let pants = rgb(0x455A64);
        let j = &self.joints;
        let hy = self.head_y;

        let mut rig = Rig { ctx, origin: owner.position };

        for (hip_x, thigh, calf) in [(-10.0, j.left_thigh, j.left_calf), (10.0, j.right_thigh, j.right_calf)] {
            let knee = rig.limb(Vec2::new(hip_x, 30.0 + hy), thigh, 35.0, 12.0, pants);
            let ankle = rig.limb(knee, thigh + calf, 35.0, 10.0, pants);
            rig.circle(ankle, 6.0, Color::BLACK);
        }

        rig.rect(-20.0, -30.0 + hy, 40.0, 65.0, shirt);
        rig.circle(Vec2::new(0.0, -10.0 + hy), 10.0, rgba(0xFFFFFF, 0.2));

        rig.circle(Vec2::new(0.0, -45.0 + hy), 18.0, skin);
        if self.covering {
            rig.rect(-8.0, -48.0 + hy, 6.0, 2.0, Color::BLACK);
            rig.rect(2.0, -48.0 + hy, 6.0, 2.0, Color::BLACK);
        } else {
            rig.circle(Vec2::new(-6.0, -48.0 + hy), 2.0, Color::BLACK);
            rig.circle(Vec2::new(6.0, -48.0 + hy), 2.0, Color::BLACK);
        }

        for (shoulder_x, arm, forearm) in [(-22.0, j.left_arm, j.left_forearm), (22.0, j.right_arm, j.right_forearm)] {
            let elbow = rig.limb(Vec2::new(shoulder_x, -25.0 + hy), arm, 30.0, 12.0, shirt);
            let wrist = rig.limb(elbow, arm + forearm, 30.0, 10.0, skin);
            rig.circle(wrist, 6.0, skin);
        }
    }
}
