use crate::coords::{Rect, Vec2, Viewport};

/// World-space bound the camera's viewport must stay inside.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Confiner {
    pub bounds: Rect,
}

impl Confiner {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { bounds: Rect::new(x, y, w, h) }
    }

    /// Clamps a viewport origin so the viewport lies within the bounds.
    ///
    /// On an axis where the bounds are narrower than the viewport, the
    /// viewport is centered on the bounds instead.
    pub fn clamp(&self, origin: Vec2, viewport: Viewport) -> Vec2 {
        Vec2::new(
            clamp_axis(origin.x, self.bounds.origin.x, self.bounds.width(), viewport.width),
            clamp_axis(origin.y, self.bounds.origin.y, self.bounds.height(), viewport.height),
        )
    }
}

fn clamp_axis(pos: f32, min: f32, extent: f32, view: f32) -> f32 {
    if extent < view {
        return min + (extent - view) / 2.0;
    }
    pos.clamp(min, min + extent - view)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn clamps_into_bounds() {
        let c = Confiner::new(0.0, 0.0, 2480.0, 600.0);
        assert_eq!(c.clamp(Vec2::new(-50.0, 0.0), VIEW), Vec2::new(0.0, 0.0));
        assert_eq!(c.clamp(Vec2::new(3000.0, 10.0), VIEW), Vec2::new(1680.0, 0.0));
        assert_eq!(c.clamp(Vec2::new(500.0, 0.0), VIEW), Vec2::new(500.0, 0.0));
    }

    #[test]
    fn narrow_axis_is_centered() {
        let c = Confiner::new(100.0, 0.0, 400.0, 2000.0);
        let p = c.clamp(Vec2::new(0.0, 50.0), VIEW);
        assert_eq!(p, Vec2::new(-100.0, 50.0));
    }
}
