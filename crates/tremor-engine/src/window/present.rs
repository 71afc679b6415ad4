use std::sync::Arc;

use winit::event::WindowEvent;
use winit::window::Window;

use crate::camera::CameraView;
use crate::draw::DrawList;

/// Control directive returned by presenter callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Consumer of the per-frame draw stream.
///
/// The runtime itself never rasterizes; a presenter turns the screen-space
/// command list into pixels (see `render::GpuPresenter`).
pub trait Presenter {
    /// Called once the window exists, before the first frame.
    ///
    /// An error aborts the runtime.
    fn attach(&mut self, window: Arc<Window>) -> anyhow::Result<()> {
        let _ = window;
        Ok(())
    }

    /// Called for window events, after the game has seen them.
    fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> AppControl {
        let _ = (window, event);
        AppControl::Continue
    }

    /// Called once per frame that ran update and draw.
    fn present(&mut self, window: &Window, list: &mut DrawList, view: &CameraView) -> AppControl;
}
