use std::sync::Arc;

use anyhow::Result;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::camera::CameraView;
use crate::draw::DrawList;
use crate::paint::Color;
use crate::window::{AppControl, Presenter};

use super::{FontSystem, Gpu, GpuInit, RenderCtx, RenderTarget, Renderer, SurfaceErrorAction, letterbox};

#[derive(Debug, Clone)]
pub struct GpuPresenterConfig {
    pub gpu: GpuInit,
    /// Fill for the whole surface, letterbox bars included.
    pub clear: Color,
}

impl Default for GpuPresenterConfig {
    fn default() -> Self {
        Self {
            gpu: GpuInit::default(),
            clear: Color::BLACK,
        }
    }
}

/// Rasterizes each frame's draw list into the window with wgpu.
///
/// The GPU context is created in [`Presenter::attach`], once the window exists.
pub struct GpuPresenter {
    config: GpuPresenterConfig,
    fonts: FontSystem,
    gpu: Option<Gpu>,
    renderer: Option<Renderer>,
}

impl GpuPresenter {
    pub fn new(config: GpuPresenterConfig, fonts: FontSystem) -> Self {
        Self {
            config,
            fonts,
            gpu: None,
            renderer: None,
        }
    }
}

impl Presenter for GpuPresenter {
    fn attach(&mut self, window: Arc<Window>) -> Result<()> {
        let gpu = pollster::block_on(Gpu::new(window, self.config.gpu.clone()))?;
        self.renderer = Some(Renderer::new(gpu.device(), gpu.surface_format()));
        self.gpu = Some(gpu);
        Ok(())
    }

    fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> AppControl {
        let Some(gpu) = self.gpu.as_mut() else {
            return AppControl::Continue;
        };

        match event {
            WindowEvent::Resized(size) => gpu.resize(*size),
            WindowEvent::ScaleFactorChanged { .. } => gpu.resize(window.inner_size()),
            _ => {}
        }
        AppControl::Continue
    }

    fn present(&mut self, window: &Window, list: &mut DrawList, view: &CameraView) -> AppControl {
        let (Some(gpu), Some(renderer)) = (self.gpu.as_mut(), self.renderer.as_mut()) else {
            return AppControl::Continue;
        };

        let size = gpu.size();
        // Minimized: nothing to draw into.
        let Some(placement) = letterbox(size.width, size.height, view.viewport) else {
            return AppControl::Continue;
        };

        let mut frame = match gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match gpu.handle_surface_error(err.clone()) {
                    SurfaceErrorAction::Fatal => {
                        log::error!("fatal surface error: {err}");
                        AppControl::Exit
                    }
                    action => {
                        log::debug!("surface error {err}: {action:?}");
                        AppControl::Continue
                    }
                };
            }
        };

        {
            let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), view.viewport, placement);
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            renderer.render(&ctx, &mut target, list, &self.fonts, self.config.clear);
        }

        window.pre_present_notify();
        gpu.submit(frame);
        AppControl::Continue
    }
}
