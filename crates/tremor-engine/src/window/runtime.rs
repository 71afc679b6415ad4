use std::sync::Arc;

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::game::Game;
use crate::input::platform::winit::{translate_window_event, visibility_change};

use super::{AppControl, Presenter};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Pause the game while the window is hidden (occluded / minimized).
    pub pause_when_hidden: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tremor".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            pause_when_hidden: true,
        }
    }
}

/// Entry point for the windowed runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `game` in a window until it is closed or the game requests exit.
    ///
    /// The game is started when the window first appears.
    pub fn run<P>(config: RuntimeConfig, game: Game, presenter: P) -> Result<()>
    where
        P: Presenter + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, game, presenter);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.error.map_or(Ok(()), Err)
    }
}

struct AppState<P>
where
    P: Presenter + 'static,
{
    config: RuntimeConfig,
    game: Game,
    presenter: P,

    window: Option<Arc<Window>>,
    hidden: bool,
    exit_requested: bool,
    error: Option<anyhow::Error>,
}

impl<P> AppState<P>
where
    P: Presenter + 'static,
{
    fn new(config: RuntimeConfig, game: Game, presenter: P) -> Self {
        Self {
            config,
            game,
            presenter,
            window: None,
            hidden: false,
            exit_requested: false,
            error: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        log::info!("window {:?} created ({})", window.id(), self.config.title);

        self.presenter
            .attach(Arc::clone(&window))
            .context("presenter failed to attach to the window")?;
        self.window = Some(window);
        Ok(())
    }

    fn set_hidden(&mut self, hidden: bool) {
        if self.hidden == hidden {
            return;
        }
        self.hidden = hidden;
        log::debug!("window {}", if hidden { "hidden" } else { "visible" });

        if self.config.pause_when_hidden {
            self.game.set_paused(hidden);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        if self.game.frame().is_some() {
            let view = *self.game.view();
            if self.presenter.present(window, self.game.draw_list_mut(), &view) == AppControl::Exit {
                self.request_exit(event_loop);
                return;
            }
        }

        if self.game.exit_requested() {
            log::info!("game requested exit");
            self.request_exit(event_loop);
        }
    }
}

impl<P> ApplicationHandler for AppState<P>
where
    P: Presenter + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            self.game.set_paused(false);
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create initial window: {e:#}");
            self.error = Some(e);
            self.request_exit(event_loop);
            return;
        }

        self.game.start();
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.game.set_paused(true);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw while visible; paused frames still deliver timers.
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(window) = self.window.as_ref().filter(|w| w.id() == window_id) else {
            return;
        };

        if let Some(ev) = translate_window_event(window.scale_factor(), &event) {
            self.game.handle_input(&ev);
        }

        if self.presenter.on_window_event(window, &event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        if let Some(hidden) = visibility_change(&event) {
            self.set_hidden(hidden);
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.window = None;
                self.request_exit(event_loop);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
