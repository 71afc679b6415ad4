use super::ZIndex;

/// Paint-order key: back-to-front by `z`, then by insertion `order`.
///
/// Field order matters, the derived `Ord` compares `z` first. Items pushed
/// while walking entities therefore keep entity order within a layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_beats_insertion_order() {
        let hud_first = SortKey::new(ZIndex::HUD, 0);
        let world_later = SortKey::new(ZIndex::WORLD, 9);
        assert!(world_later < hud_first);
        assert!(SortKey::new(ZIndex::WORLD, 1) < SortKey::new(ZIndex::WORLD, 2));
    }
}
