use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
///
/// Used for entity bounds, camera confiners and draw commands. Sizes are
/// expected to be non-negative; nothing here normalizes them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Closed containment: `[min, max]` on both axes.
    ///
    /// Touch hit-testing treats a finger exactly on the edge as inside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }

    /// Strict overlap on the X axis only. Touching edges do not overlap.
    #[inline]
    pub fn overlaps_x(self, other: Rect) -> bool {
        self.max().x > other.origin.x && self.origin.x < other.max().x
    }

    /// Strict overlap on both axes.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        self.overlaps_x(other) && self.max().y > other.origin.y && self.origin.y < other.max().y
    }

    #[inline]
    pub fn translated(self, offset: Vec2) -> Rect {
        Rect::from_origin_size(self.origin + offset, self.size)
    }
}
