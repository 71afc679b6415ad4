//! wgpu presentation of the draw stream.
//!
//! Conventions:
//! - geometry stays in the game's logical pixels (top-left origin, +Y down);
//!   shaders map it to NDC through a viewport uniform
//! - the logical viewport is letterboxed into the surface, aspect preserved
//! - one render pass per frame; consecutive commands of one kind share a draw call

mod batch;
mod ctx;
mod font;
mod gpu;
mod pipeline;
mod presenter;
mod renderer;
mod text;

pub use batch::{Batch, BatchKind, CircleInstance, FrameBatches, Letterbox, QuadInstance, TextRun, letterbox};
pub use ctx::{RenderCtx, RenderTarget};
pub use font::{FontLoadError, FontSystem};
pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
pub use presenter::{GpuPresenter, GpuPresenterConfig};
pub use renderer::Renderer;
