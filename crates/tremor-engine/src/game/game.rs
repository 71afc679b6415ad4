use std::time::Instant;

use crate::camera::{Camera, CameraView};
use crate::coords::Viewport;
use crate::draw::{DrawCtx, DrawList};
use crate::entity::{Entity, EntityId, Others, SceneId};
use crate::input::{ActiveTouches, Input, InputEvent, TouchControls};
use crate::time::{FrameClock, FrameTime};

use super::{Commands, ConfigError, GameConfig, Level, LevelCtx, Timers, UpdateCtx};

/// Loop lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Idle,
    Running,
    Paused,
}

/// Scene and loop controller.
///
/// Frame order:
/// 1. due timers are delivered to the active level (also while paused)
/// 2. paused: the time baseline is refreshed and nothing else happens
/// 3. `dt` is measured and clamped
/// 4. entities spawned since the last frame become live
/// 5. every live entity updates, then the level
/// 6. removals are purged; a requested level switch is applied
/// 7. the camera follows, confines and shakes; its view is frozen
/// 8. the draw list is rebuilt from every live entity
///
/// Entities spawned during frame N therefore update and draw from frame N+1;
/// entities removed during frame N are not drawn in frame N.
pub struct Game {
    config: GameConfig,
    state: LoopState,
    clock: FrameClock,
    resync: bool,

    dt: f32,
    frame_index: u64,

    scene: SceneId,
    entities: Vec<Entity>,
    commands: Commands,
    timers: Timers,
    level: Option<Box<dyn Level>>,

    camera: Camera,
    view: CameraView,
    touches: ActiveTouches,
    draw_list: DrawList,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let scene = SceneId::next();
        let camera = Camera::new(config.viewport, config.shake);

        Ok(Self {
            clock: FrameClock::with_clamps(config.dt_min, config.dt_max),
            state: LoopState::Idle,
            resync: true,
            dt: 0.0,
            frame_index: 0,
            scene,
            entities: Vec::new(),
            commands: Commands::default(),
            timers: Timers::new(Instant::now(), scene),
            level: None,
            view: camera.view(),
            camera,
            touches: ActiveTouches::default(),
            draw_list: DrawList::new(),
            config,
        })
    }

    // ── lifecycle ────────────────────────────────────────────────────────

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Enters the running state with `now` as the time reference.
    pub fn start_at(&mut self, now: Instant) {
        if self.state != LoopState::Idle {
            return;
        }
        log::info!("game loop started");
        self.state = LoopState::Running;
        self.clock.reset_at(now);
        self.timers.set_now(now);
        self.resync = false;
    }

    /// Pauses or resumes. Ignored before [`Game::start`].
    pub fn set_paused(&mut self, paused: bool) {
        match (self.state, paused) {
            (LoopState::Running, true) => {
                log::info!("paused");
                self.state = LoopState::Paused;
            }
            (LoopState::Paused, false) => {
                log::info!("resumed");
                self.state = LoopState::Running;
                self.resync = true;
            }
            _ => {}
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == LoopState::Paused
    }

    /// Last frame's clamped delta in seconds.
    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.dt
    }

    /// Number of frames that ran update and draw.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn exit_requested(&self) -> bool {
        self.commands.exit_requested()
    }

    pub fn request_exit(&mut self) {
        self.commands.request_exit();
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    // ── scene ────────────────────────────────────────────────────────────

    /// Queues `entity` for registration at the start of the next frame.
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        self.commands.spawn(entity)
    }

    /// Queues removal at the end of the next update pass (or cancels a
    /// pending registration).
    pub fn remove_entity(&mut self, id: EntityId) {
        self.commands.despawn(id);
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    /// Live entities in update / draw order.
    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name() == name)
    }

    #[inline]
    pub fn scene(&self) -> SceneId {
        self.scene
    }

    pub fn level_name(&self) -> Option<&str> {
        self.level.as_deref().map(|l| l.name())
    }

    /// Tears down the current scene and enters `level` immediately.
    pub fn load_level(&mut self, level: Box<dyn Level>) {
        self.enter_level(level);
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Camera transform used by the last draw pass.
    #[inline]
    pub fn view(&self) -> &CameraView {
        &self.view
    }

    #[inline]
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Mutable access for presenters that iterate in paint order.
    #[inline]
    pub fn draw_list_mut(&mut self) -> &mut DrawList {
        &mut self.draw_list
    }

    // ── input ────────────────────────────────────────────────────────────

    /// Routes a host input event.
    ///
    /// Key and focus events reach every live `Input` component. Touch updates
    /// refresh the active finger set, then the first live `TouchControls`
    /// re-derives its keys on the first live `Input`.
    pub fn handle_input(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Touch(touch) => {
                self.touches.apply(touch);
                self.route_touches();
            }
            InputEvent::Key { .. } | InputEvent::Focused(_) => {
                if matches!(ev, InputEvent::Focused(false)) {
                    self.touches.clear();
                    self.route_touches();
                }
                for entity in &mut self.entities {
                    if let Some(input) = entity.component_mut::<Input>() {
                        input.apply_event(ev);
                    }
                }
            }
        }
    }

    fn route_touches(&mut self) {
        let Some(ci) = self.entities.iter().position(|e| e.has_component::<TouchControls>()) else {
            return;
        };
        let Some(ii) = self.entities.iter().position(|e| e.has_component::<Input>()) else {
            return;
        };
        let Some(mut controls) = self.entities[ci].component::<TouchControls>().cloned() else {
            return;
        };

        if let Some(input) = self.entities[ii].component_mut::<Input>() {
            controls.apply(input, self.touches.positions());
        }
        if let Some(slot) = self.entities[ci].component_mut::<TouchControls>() {
            *slot = controls;
        }
    }

    // ── frame ────────────────────────────────────────────────────────────

    pub fn frame(&mut self) -> Option<FrameTime> {
        self.frame_at(Instant::now())
    }

    /// Runs one frame at `now`. Returns the frame's timing if update and draw
    /// ran (not idle, not paused).
    pub fn frame_at(&mut self, now: Instant) -> Option<FrameTime> {
        if self.state == LoopState::Idle {
            return None;
        }

        self.timers.set_now(now);
        self.fire_timers();
        self.apply_level_switch();

        if self.state == LoopState::Paused {
            self.clock.reset_at(now);
            return None;
        }

        if self.resync {
            self.clock.reset_at(now);
            self.resync = false;
        }

        let ft = self.clock.tick_at(now);
        self.dt = ft.dt;
        log::trace!("frame {} dt={:.4}", ft.frame_index, ft.dt);

        self.register_pending();
        self.update_entities();
        self.update_level();
        self.purge_removals();
        self.apply_level_switch();
        self.update_camera();
        self.draw();

        self.frame_index += 1;
        Some(ft)
    }

    fn fire_timers(&mut self) {
        for timer in self.timers.take_due() {
            if timer.scene != self.scene {
                log::debug!("dropping timer {:?}: {} is gone", timer.name, timer.scene);
                continue;
            }
            let Some(mut level) = self.level.take() else {
                log::debug!("dropping timer {:?}: no active level", timer.name);
                continue;
            };

            let mut ctx = LevelCtx::new(
                self.dt,
                self.config.viewport,
                &mut self.camera,
                &mut self.commands,
                &mut self.timers,
                &mut self.entities,
            );
            level.on_timer(timer.name, &mut ctx);
            self.level = Some(level);
        }
    }

    fn register_pending(&mut self) {
        for mut entity in self.commands.take_spawns() {
            if !entity.register(self.scene) {
                log::warn!("{} ({}) already belongs to a scene", entity.id(), entity.name());
                continue;
            }
            log::trace!("registered {} ({})", entity.id(), entity.name());
            self.entities.push(entity);
        }
    }

    fn update_entities(&mut self) {
        for i in 0..self.entities.len() {
            let (before, rest) = self.entities.split_at_mut(i);
            let Some((entity, after)) = rest.split_first_mut() else {
                break;
            };

            let mut ctx = UpdateCtx {
                dt: self.dt,
                entity: entity.id(),
                viewport: self.config.viewport,
                camera: &mut self.camera,
                commands: &mut self.commands,
                timers: &mut self.timers,
                others: Others::new(before, after),
            };
            entity.update(&mut ctx);
        }
    }

    fn update_level(&mut self) {
        let Some(mut level) = self.level.take() else {
            return;
        };

        let mut ctx = LevelCtx::new(
            self.dt,
            self.config.viewport,
            &mut self.camera,
            &mut self.commands,
            &mut self.timers,
            &mut self.entities,
        );
        level.update(&mut ctx);
        self.level = Some(level);
    }

    fn purge_removals(&mut self) {
        let doomed = self.commands.take_despawns();
        if doomed.is_empty() {
            return;
        }

        let before = self.entities.len();
        self.entities.retain(|e| !doomed.contains(&e.id()));
        log::trace!("removed {} entities", before - self.entities.len());
    }

    fn apply_level_switch(&mut self) {
        if let Some(level) = self.commands.take_level() {
            self.enter_level(level);
        }
    }

    fn enter_level(&mut self, mut level: Box<dyn Level>) {
        if let Some(mut old) = self.level.take() {
            log::info!("leaving level {:?}", old.name());
            old.exit();
        }

        log::debug!("tearing down {} ({} entities)", self.scene, self.entities.len());
        self.entities.clear();
        self.commands.clear_scene();
        self.camera.reset();
        self.touches.clear();

        self.scene = SceneId::next();
        self.timers.set_scene(self.scene);

        log::info!("entering level {:?} as {}", level.name(), self.scene);
        let mut ctx = LevelCtx::new(
            0.0,
            self.config.viewport,
            &mut self.camera,
            &mut self.commands,
            &mut self.timers,
            &mut self.entities,
        );
        level.enter(&mut ctx);
        self.level = Some(level);
    }

    fn update_camera(&mut self) {
        let target = self
            .camera
            .target()
            .and_then(|id| self.entities.iter().find(|e| e.id() == id))
            .map(|e| e.bounds());

        self.camera.update(self.dt, target);
        self.view = self.camera.view();
    }

    fn draw(&mut self) {
        self.draw_list.clear();
        let mut ctx = DrawCtx::new(&mut self.draw_list, &self.view);
        for entity in &self.entities {
            entity.draw(&mut ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::draw::DrawCmd;
    use crate::drawable::Shape;
    use crate::entity::{Behavior, Body, Component};
    use crate::input::{Key, TouchEvent, TouchPhase};
    use crate::paint::Color;
    use crate::physics::Physics;

    const STEP: Duration = Duration::from_millis(16);

    fn game() -> (Game, Instant) {
        let t0 = Instant::now();
        let mut g = Game::new(GameConfig::default().with_viewport(800.0, 600.0)).unwrap();
        g.start_at(t0);
        (g, t0)
    }

    fn drawn_rects(g: &Game) -> usize {
        g.draw_list().items().iter().filter(|i| matches!(i.cmd, DrawCmd::Rect(_))).count()
    }

    fn close(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    // ── loop control ─────────────────────────────────────────────────────

    #[test]
    fn idle_game_does_nothing() {
        let mut g = Game::new(GameConfig::default()).unwrap();
        g.add_entity(Entity::new("x", Vec2::zero()));
        assert!(g.frame_at(Instant::now()).is_none());
        assert!(g.entities().is_empty());
    }

    #[test]
    fn frame_measures_clamped_dt() {
        let (mut g, t0) = game();
        let ft = g.frame_at(t0 + STEP).unwrap();
        assert!(close(ft.dt, 0.016, 1e-6));
        assert!(close(g.delta_time(), 0.016, 1e-6));

        g.frame_at(t0 + STEP + Duration::from_secs(3));
        assert!(close(g.delta_time(), 0.25, 1e-6));
        assert_eq!(g.frame_index(), 2);
    }

    #[test]
    fn paused_frames_skip_update_and_resume_is_bounded() {
        let (mut g, t0) = game();
        let id = g.add_entity(
            Entity::new("mover", Vec2::zero())
                .with_component(Physics::new(Vec2::new(100.0, 0.0), Vec2::zero(), Vec2::zero())),
        );
        g.frame_at(t0 + STEP);
        let x = g.entity(id).unwrap().position().x;

        g.set_paused(true);
        for i in 2..100 {
            assert!(g.frame_at(t0 + STEP * i).is_none());
        }
        assert_eq!(g.entity(id).unwrap().position().x, x);

        g.set_paused(false);
        let ft = g.frame_at(t0 + Duration::from_secs(60)).unwrap();
        assert!(ft.dt <= g.config().dt_max.as_secs_f32());
        assert!(ft.dt <= 0.001);
    }

    #[test]
    fn resume_without_paused_frames_still_uses_fresh_baseline() {
        let (mut g, t0) = game();
        g.frame_at(t0 + STEP);
        g.set_paused(true);
        g.set_paused(false);

        let ft = g.frame_at(t0 + Duration::from_secs(10)).unwrap();
        assert!(ft.dt < 0.001);
    }

    // ── deferred add / remove ────────────────────────────────────────────

    /// Spawns one child on its first update.
    struct Spawner {
        child: Option<EntityId>,
    }

    impl Behavior for Spawner {
        fn update(&mut self, _entity: &mut Entity, ctx: &mut UpdateCtx<'_>) {
            if self.child.is_none() {
                let child = Entity::new("child", Vec2::zero()).with_component(Shape::rect(1.0, 1.0, Color::WHITE));
                self.child = Some(ctx.spawn(child));
            }
        }
    }

    #[test]
    fn entity_added_during_update_is_live_next_frame() {
        let (mut g, t0) = game();
        let spawner = g.add_entity(Entity::new("spawner", Vec2::zero()).with_behavior(Spawner { child: None }));

        g.frame_at(t0 + STEP);
        assert_eq!(g.entities().len(), 1);
        assert_eq!(drawn_rects(&g), 0);

        g.frame_at(t0 + STEP * 2);
        let child = g.entity(spawner).unwrap().behavior::<Spawner>().unwrap().child.unwrap();
        assert!(g.entity(child).is_some());
        assert_eq!(drawn_rects(&g), 1);
        assert_eq!(g.entity(child).unwrap().scene(), Some(g.scene()));
    }

    /// Removes itself on its first update.
    struct Doomed;

    impl Behavior for Doomed {
        fn update(&mut self, entity: &mut Entity, ctx: &mut UpdateCtx<'_>) {
            entity.update_components(ctx);
            ctx.despawn_self();
        }
    }

    #[test]
    fn entity_removed_during_update_is_not_drawn() {
        let (mut g, t0) = game();
        g.add_entity(
            Entity::new("doomed", Vec2::zero())
                .with_component(Shape::rect(1.0, 1.0, Color::WHITE))
                .with_behavior(Doomed),
        );
        g.add_entity(Entity::new("keeper", Vec2::zero()).with_component(Shape::rect(1.0, 1.0, Color::WHITE)));

        g.frame_at(t0 + STEP);
        assert_eq!(g.entities().len(), 1);
        assert_eq!(g.entities()[0].name(), "keeper");
        assert_eq!(drawn_rects(&g), 1);
    }

    #[test]
    fn removing_pending_entity_cancels_it() {
        let (mut g, t0) = game();
        let id = g.add_entity(Entity::new("ghost", Vec2::zero()));
        g.remove_entity(id);
        g.frame_at(t0 + STEP);
        assert!(g.entity(id).is_none());
    }

    struct Recorder {
        seen: Rc<RefCell<Vec<usize>>>,
    }

    impl Behavior for Recorder {
        fn update(&mut self, _entity: &mut Entity, ctx: &mut UpdateCtx<'_>) {
            self.seen.borrow_mut().push(ctx.others.len());
        }
    }

    #[test]
    fn others_view_excludes_self() {
        let (mut g, t0) = game();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for _ in 0..3 {
            g.add_entity(Entity::new("r", Vec2::zero()).with_behavior(Recorder { seen: seen.clone() }));
        }
        g.frame_at(t0 + STEP);
        assert_eq!(*seen.borrow(), vec![2, 2, 2]);
    }

    // ── physics scenarios ────────────────────────────────────────────────

    #[test]
    fn uniform_motion_over_one_second() {
        let (mut g, t0) = game();
        let id = g.add_entity(
            Entity::new("ball", Vec2::zero())
                .with_component(Physics::new(Vec2::new(100.0, 0.0), Vec2::zero(), Vec2::zero())),
        );

        for i in 1..=60 {
            g.frame_at(t0 + Duration::from_micros(16_667 * i));
        }
        let x = g.entity(id).unwrap().position().x;
        assert!(close(x, 100.0, 0.01), "x = {x}");
    }

    #[test]
    fn gravity_builds_velocity() {
        let (mut g, t0) = game();
        let id = g.add_entity(Entity::new("ball", Vec2::zero()).with_component(Physics::with_gravity(1000.0)));

        for i in 1..=10 {
            g.frame_at(t0 + STEP * i);
        }
        let phys = g.entity(id).unwrap().component::<Physics>().unwrap();
        assert!(close(phys.velocity.y, 1000.0 * 10.0 * 0.016, 1e-2));
        assert!(g.entity(id).unwrap().position().y > 0.0);
    }

    // ── camera ───────────────────────────────────────────────────────────

    #[test]
    fn camera_follows_target_after_updates() {
        let (mut g, t0) = game();
        let id = g.add_entity(Entity::new("player", Vec2::new(1000.0, 500.0)).with_size(50.0, 50.0));
        g.camera_mut().set_target(Some(id));

        g.frame_at(t0 + STEP);
        assert_eq!(g.camera().position(), Vec2::new(625.0, 225.0));
        assert_eq!(g.view().origin, Vec2::new(625.0, 225.0));
    }

    #[test]
    fn draw_uses_camera_view() {
        let (mut g, t0) = game();
        let id = g.add_entity(
            Entity::new("box", Vec2::new(1000.0, 500.0))
                .with_size(50.0, 50.0)
                .with_component(Shape::rect(50.0, 50.0, Color::WHITE)),
        );
        g.camera_mut().set_target(Some(id));
        g.frame_at(t0 + STEP);

        match &g.draw_list().items()[0].cmd {
            DrawCmd::Rect(r) => assert_eq!(r.rect, Rect::new(375.0, 275.0, 50.0, 50.0)),
            other => panic!("unexpected {}", other.kind()),
        }
    }

    // ── levels & timers ──────────────────────────────────────────────────

    #[derive(Default)]
    struct Log {
        events: Vec<String>,
    }

    struct Scripted {
        log: Rc<RefCell<Log>>,
        tag: &'static str,
    }

    impl Level for Scripted {
        fn name(&self) -> &str {
            self.tag
        }

        fn enter(&mut self, ctx: &mut LevelCtx<'_>) {
            self.log.borrow_mut().events.push(format!("{}:enter", self.tag));
            ctx.spawn(Entity::new(self.tag, Vec2::zero()));
            ctx.timers.schedule(Duration::from_secs(1), "ring");
        }

        fn on_timer(&mut self, timer: &str, _ctx: &mut LevelCtx<'_>) {
            self.log.borrow_mut().events.push(format!("{}:{timer}", self.tag));
        }

        fn exit(&mut self) {
            self.log.borrow_mut().events.push(format!("{}:exit", self.tag));
        }
    }

    #[test]
    fn level_switch_tears_down_scene() {
        let (mut g, t0) = game();
        let log = Rc::new(RefCell::new(Log::default()));
        g.load_level(Box::new(Scripted { log: log.clone(), tag: "a" }));
        g.camera_mut().start(5.0);
        g.frame_at(t0 + STEP);
        let first_scene = g.scene();
        assert_eq!(g.entities()[0].name(), "a");

        g.load_level(Box::new(Scripted { log: log.clone(), tag: "b" }));
        assert!(g.entities().is_empty());
        assert!(!g.camera().is_shaking());
        assert_ne!(g.scene(), first_scene);

        g.frame_at(t0 + STEP * 2);
        assert_eq!(g.entities()[0].name(), "b");
        assert_eq!(log.borrow().events, vec!["a:enter", "a:exit", "b:enter"]);
    }

    #[test]
    fn stale_timers_are_dropped() {
        let (mut g, t0) = game();
        let log = Rc::new(RefCell::new(Log::default()));
        g.load_level(Box::new(Scripted { log: log.clone(), tag: "a" }));
        g.frame_at(t0 + STEP);
        g.load_level(Box::new(Scripted { log: log.clone(), tag: "b" }));

        // Both "ring" timers were scheduled at t0; only b's scene is alive.
        g.frame_at(t0 + Duration::from_millis(1100));
        let events = log.borrow().events.clone();
        assert!(events.contains(&"b:ring".to_string()));
        assert!(!events.contains(&"a:ring".to_string()));
    }

    #[test]
    fn timers_fire_while_paused() {
        let (mut g, t0) = game();
        let log = Rc::new(RefCell::new(Log::default()));
        g.load_level(Box::new(Scripted { log: log.clone(), tag: "a" }));
        g.set_paused(true);

        assert!(g.frame_at(t0 + Duration::from_secs(2)).is_none());
        assert!(log.borrow().events.contains(&"a:ring".to_string()));
    }

    // ── input routing ────────────────────────────────────────────────────

    #[test]
    fn keys_reach_every_input() {
        let (mut g, t0) = game();
        let a = g.add_entity(Entity::new("a", Vec2::zero()).with_component(Input::new()));
        let b = g.add_entity(Entity::new("b", Vec2::zero()).with_component(Input::new()));
        g.frame_at(t0 + STEP);

        g.handle_input(&InputEvent::key_down(Key::ArrowLeft));
        for id in [a, b] {
            assert!(g.entity(id).unwrap().component::<Input>().unwrap().is_key_down(Key::ArrowLeft));
        }
    }

    #[test]
    fn touch_presses_first_input() {
        let (mut g, t0) = game();
        let player = g.add_entity(Entity::new("player", Vec2::zero()).with_component(Input::new()));
        g.add_entity(Entity::new("controls", Vec2::zero()).with_component(TouchControls::dpad(g.viewport())));
        g.frame_at(t0 + STEP);

        let action = Vec2::new(800.0 - 80.0, 600.0 - 100.0);
        g.handle_input(&InputEvent::Touch(TouchEvent { id: 7, phase: TouchPhase::Started, position: action }));
        assert!(g.entity(player).unwrap().component::<Input>().unwrap().is_key_down(Key::E));

        g.handle_input(&InputEvent::Touch(TouchEvent { id: 7, phase: TouchPhase::Ended, position: action }));
        assert!(!g.entity(player).unwrap().component::<Input>().unwrap().is_key_down(Key::E));
    }

    struct Stamp;

    impl Component for Stamp {
        fn update(&mut self, owner: &mut Body, ctx: &mut UpdateCtx<'_>) {
            owner.position.x += 1.0;
            if owner.position.x >= 3.0 {
                ctx.commands.request_exit();
            }
        }
    }

    #[test]
    fn exit_request_is_visible_to_host() {
        let (mut g, t0) = game();
        g.add_entity(Entity::new("clock", Vec2::zero()).with_component(Stamp));
        let mut n = 0;
        while !g.exit_requested() {
            n += 1;
            g.frame_at(t0 + STEP * n);
        }
        assert_eq!(n, 3);
    }
}
