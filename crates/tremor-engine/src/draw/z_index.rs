/// Z-ordering layer for draw items.
///
/// Higher values appear on top of lower values. Entities draw at
/// [`ZIndex::WORLD`] unless a component asks otherwise.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BACKGROUND: ZIndex = ZIndex(-100);
    pub const WORLD: ZIndex = ZIndex(0);
    pub const HUD: ZIndex = ZIndex(100);
    pub const OVERLAY: ZIndex = ZIndex(200);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
