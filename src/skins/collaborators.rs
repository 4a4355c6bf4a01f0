// Services the skin selector talks to but does not own

use super::StoreError;
use crate::engine::assets::SpriteSheet;
use std::sync::Arc;

/// Achievement unlocked the first time the player changes skin
pub const SKIN_ACHIEVEMENT: &str = "skin_select.achievement.skin";

/// Renderer side: which sheet the player is drawn from
pub trait SheetBinder {
    /// Use `sheet` for subsequent skin draws
    fn bind_sheet(&mut self, sheet: &Arc<SpriteSheet>);

    /// Rebuild any cached player sprites after a confirmed change
    fn refresh_player_sprite(&mut self) {}
}

/// Persistence of the confirmed skin index across sessions
pub trait SelectionStore {
    fn load(&self) -> Result<Option<usize>, StoreError>;
    fn save(&mut self, index: usize) -> Result<(), StoreError>;
}

/// Receives achievement unlocks
pub trait AchievementSink {
    fn unlock(&mut self, id: &str);
}

/// Binder that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBinder;

impl SheetBinder for NoopBinder {
    fn bind_sheet(&mut self, _sheet: &Arc<SpriteSheet>) {}
}

/// Achievement sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAchievements;

impl AchievementSink for NoopAchievements {
    fn unlock(&mut self, _id: &str) {}
}

/// Store that keeps the index for the lifetime of the process
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    index: Option<usize>,
}

impl SelectionStore for MemoryStore {
    fn load(&self) -> Result<Option<usize>, StoreError> {
        Ok(self.index)
    }

    fn save(&mut self, index: usize) -> Result<(), StoreError> {
        self.index = Some(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load().unwrap(), None);

        store.save(3).unwrap();
        assert_eq!(store.load().unwrap(), Some(3));
    }
}
