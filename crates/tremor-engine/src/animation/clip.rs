use crate::coords::Vec2;
use crate::draw::ImageHandle;

/// Ordered image frames played at a fixed rate.
///
/// `size` is the rendered extent of every frame. An empty frame list or a
/// non-positive `fps` is accepted; such an animation simply never advances.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub frames: Vec<ImageHandle>,
    pub fps: f32,
    pub size: Vec2,
}

impl Animation {
    pub fn new(frames: Vec<ImageHandle>, fps: f32, size: Vec2) -> Self {
        Self { frames, fps, size }
    }

    /// Seconds per frame, or `None` if this animation cannot advance.
    pub fn frame_period(&self) -> Option<f32> {
        if self.frames.is_empty() || !(self.fps > 0.0) || !self.fps.is_finite() {
            return None;
        }
        Some(1.0 / self.fps)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
