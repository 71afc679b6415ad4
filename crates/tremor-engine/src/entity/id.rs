use std::fmt;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

static NEXT_ENTITY: AtomicU32 = AtomicU32::new(1);
static NEXT_SCENE: AtomicU64 = AtomicU64::new(1);

/// Stable entity identifier, allocated when the entity is constructed.
///
/// Identifiers are unique for the life of the process, so application code can
/// hold one before the entity is registered and after it is removed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EntityId(u32);

impl EntityId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ENTITY.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Identity of one loaded scene.
///
/// A new id is issued every time the game loads a level, which is what lets
/// delayed callbacks detect that the scene they were scheduled for is gone.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SceneId(u64);

impl SceneId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SCENE.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scene({})", self.0)
    }
}
