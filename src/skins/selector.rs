// Skin selector: registry + selection + active sheet in one owned context

use super::collaborators::{
    AchievementSink, MemoryStore, NoopAchievements, NoopBinder, SelectionStore, SheetBinder,
    SKIN_ACHIEVEMENT,
};
use super::player_sprites::{animation_origins, PlayerSkinSprites};
use super::registry::{prune, SkinRegistry};
use super::selection::SelectionState;
use super::{SelectionError, StoreError};
use crate::engine::assets::{validate, AssetSource, SpriteSheet, ValidationError};
use log::{debug, error, info, warn};
use std::path::Path;
use std::sync::Arc;

/// What happened when the cursor moved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Cursor was already there; nothing was loaded
    Unchanged,
    /// Built-in skin, active sheet is the default sheet
    Builtin,
    /// Custom skin loaded and now active
    Custom,
    /// Custom skin failed to load and was removed; selection is back on
    /// the first built-in
    Pruned { name: String },
}

/// Owns the skin list and the confirmed / provisional selection.
///
/// Menus move the cursor with [`set_provisional`](Self::set_provisional) and
/// commit with [`confirm`](Self::confirm). Browsing never changes the
/// confirmed skin.
pub struct SkinSelector {
    registry: SkinRegistry,
    selection: SelectionState,

    /// Sheet shared by all built-in skins
    default_sheet: Arc<SpriteSheet>,

    /// Sheet for the skin under the cursor
    active_sheet: Arc<SpriteSheet>,

    /// Sheet for the confirmed skin
    confirmed_sheet: Arc<SpriteSheet>,

    source: Box<dyn AssetSource>,
    binder: Box<dyn SheetBinder>,
    store: Box<dyn SelectionStore>,
    achievements: Box<dyn AchievementSink>,

    /// Whether a confirm has changed the skin this session
    skin_changed: bool,
}

impl SkinSelector {
    /// Create a selector on the first built-in skin
    pub fn new(
        registry: SkinRegistry,
        default_sheet: Arc<SpriteSheet>,
        source: Box<dyn AssetSource>,
    ) -> Result<Self, SelectionError> {
        if registry.builtin_count() == 0 {
            return Err(SelectionError::NoBuiltinSkins);
        }

        Ok(Self {
            registry,
            selection: SelectionState::default(),
            active_sheet: Arc::clone(&default_sheet),
            confirmed_sheet: Arc::clone(&default_sheet),
            default_sheet,
            source,
            binder: Box::new(NoopBinder),
            store: Box::new(MemoryStore::default()),
            achievements: Box::new(NoopAchievements),
            skin_changed: false,
        })
    }

    pub fn with_binder(mut self, binder: Box<dyn SheetBinder>) -> Self {
        self.binder = binder;
        self
    }

    pub fn with_store(mut self, store: Box<dyn SelectionStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_achievements(mut self, achievements: Box<dyn AchievementSink>) -> Self {
        self.achievements = achievements;
        self
    }

    /// Load the persisted skin and bind its sheet.
    ///
    /// The selector is always left on a valid skin and bound, even when
    /// loading fails; the load error is still returned.
    pub fn restore(&mut self) -> Result<usize, StoreError> {
        let stored = self.store.load();

        let index = match stored {
            Ok(Some(index)) if index < self.registry.len() => index,
            Ok(Some(index)) => {
                warn!("Saved skin index {} is out of range, using default", index);
                0
            }
            Ok(None) | Err(_) => 0,
        };

        self.selection = SelectionState::new(index);
        self.resolve(index);
        self.confirmed_sheet = Arc::clone(&self.active_sheet);

        stored.map(|_| self.selection.confirmed())
    }

    /// Move the menu cursor to `index`.
    ///
    /// Built-ins switch to the default sheet without I/O. Custom skins are
    /// re-read from disk every time they are selected; a skin that no longer
    /// loads is removed and the selection falls back to the first built-in.
    pub fn set_provisional(&mut self, index: usize) -> Result<Transition, SelectionError> {
        let len = self.registry.len();
        if index >= len {
            return Err(SelectionError::OutOfRange { index, len });
        }

        if !self.selection.set_provisional(index) {
            return Ok(Transition::Unchanged);
        }

        Ok(self.resolve(index))
    }

    /// Commit the cursor as the active skin and persist it
    pub fn confirm(&mut self) -> usize {
        let previous = self.selection.confirmed();
        let index = self.selection.confirm();
        self.confirmed_sheet = Arc::clone(&self.active_sheet);

        self.persist();
        self.binder.refresh_player_sprite();

        if index != previous && !self.skin_changed {
            self.skin_changed = true;
            self.achievements.unlock(SKIN_ACHIEVEMENT);
        }

        info!("Skin set to {}", self.registry.list_entries()[index]);
        index
    }

    /// Leave without confirming: cursor and sheet go back to the confirmed
    /// skin. Returns true if anything changed.
    pub fn cancel(&mut self) -> bool {
        if !self.selection.revert() {
            return false;
        }

        let sheet = Arc::clone(&self.confirmed_sheet);
        self.activate(sheet);
        true
    }

    pub fn registry(&self) -> &SkinRegistry {
        &self.registry
    }

    pub fn list_entries(&self) -> &[String] {
        self.registry.list_entries()
    }

    pub fn confirmed_index(&self) -> usize {
        self.selection.confirmed()
    }

    pub fn provisional_index(&self) -> usize {
        self.selection.provisional()
    }

    pub fn active_sheet(&self) -> &Arc<SpriteSheet> {
        &self.active_sheet
    }

    pub fn default_sheet(&self) -> &Arc<SpriteSheet> {
        &self.default_sheet
    }

    /// Sheet and animation origins for building the player model
    pub fn player_sprites(&self) -> PlayerSkinSprites {
        let confirmed = self.selection.confirmed();
        if self.registry.is_builtin(confirmed) {
            PlayerSkinSprites {
                sheet: Arc::clone(&self.default_sheet),
                origins: animation_origins(Some(confirmed)),
            }
        } else {
            PlayerSkinSprites {
                sheet: Arc::clone(&self.confirmed_sheet),
                origins: animation_origins(None),
            }
        }
    }

    fn resolve(&mut self, index: usize) -> Transition {
        let Some(path) = self.registry.path_for(index).map(Path::to_path_buf) else {
            let sheet = Arc::clone(&self.default_sheet);
            self.activate(sheet);
            debug!("Skin sheet changed to default sheet");
            return Transition::Builtin;
        };

        match validate(&path, self.source.as_ref()) {
            Ok(sheet) => {
                self.activate(Arc::new(sheet));
                debug!("Skin sheet set to {}", path.display());
                Transition::Custom
            }
            Err(e) => self.heal(index, e),
        }
    }

    /// A custom skin passed the startup scan but fails now: drop it and fall
    /// back to the first built-in
    fn heal(&mut self, index: usize, err: ValidationError) -> Transition {
        warn!("{}", err);

        let name = self.registry.list_entries()[index].clone();
        self.selection.reset();

        let sheet = Arc::clone(&self.default_sheet);
        self.confirmed_sheet = Arc::clone(&sheet);
        self.activate(sheet);

        self.registry = prune(&self.registry, index);
        self.persist();

        error!(
            "Error setting skin {}. Removed skin from list and set skin back to default.",
            name
        );
        Transition::Pruned { name }
    }

    fn activate(&mut self, sheet: Arc<SpriteSheet>) {
        self.binder.bind_sheet(&sheet);
        self.active_sheet = sheet;
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.selection.confirmed()) {
            warn!("Could not save skin selection: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::MemoryAssetSource;
    use crate::test_utils::{png_bytes, selector_with, SharedLog, BUILTINS};

    #[test]
    fn test_new_requires_builtins() {
        let registry = SkinRegistry::with_builtins::<&str>(&[]);
        let result = SkinSelector::new(
            registry,
            Arc::new(SpriteSheet::blank(1, 1)),
            Box::new(MemoryAssetSource::new()),
        );
        assert!(matches!(result, Err(SelectionError::NoBuiltinSkins)));
    }

    #[test]
    fn test_builtin_selection_uses_default_sheet_without_io() {
        let (mut selector, source, _log) = selector_with(&[]);
        let reads_before = source.read_count();

        assert_eq!(selector.set_provisional(2), Ok(Transition::Builtin));
        assert_eq!(selector.confirm(), 2);

        assert_eq!(selector.confirmed_index(), 2);
        assert!(Arc::ptr_eq(selector.active_sheet(), selector.default_sheet()));
        assert_eq!(source.read_count(), reads_before);
    }

    #[test]
    fn test_custom_selection_loads_sheet() {
        let (mut selector, _source, log) = selector_with(&[("custom", 32, 16)]);

        assert_eq!(selector.set_provisional(4), Ok(Transition::Custom));
        assert_eq!(selector.active_sheet().width(), 32);
        assert_eq!(selector.active_sheet().height(), 16);
        assert!(!Arc::ptr_eq(selector.active_sheet(), selector.default_sheet()));

        // Browsing does not touch the confirmed skin
        assert_eq!(selector.confirmed_index(), 0);
        assert!(log.borrow().saves.is_empty());
        assert_eq!(log.borrow().bound.len(), 1);
    }

    #[test]
    fn test_custom_skin_revalidated_on_each_selection() {
        let (mut selector, source, _log) = selector_with(&[("custom", 16, 16)]);
        let reads_before = source.read_count();

        selector.set_provisional(4).unwrap();
        selector.set_provisional(0).unwrap();
        selector.set_provisional(4).unwrap();

        assert_eq!(source.read_count(), reads_before + 2);
    }

    #[test]
    fn test_same_index_twice_is_idempotent() {
        let (mut selector, source, log) = selector_with(&[("custom", 16, 16)]);

        selector.set_provisional(4).unwrap();
        let sheet = Arc::clone(selector.active_sheet());
        let reads = source.read_count();

        assert_eq!(selector.set_provisional(4), Ok(Transition::Unchanged));
        assert!(Arc::ptr_eq(selector.active_sheet(), &sheet));
        assert_eq!(source.read_count(), reads);
        assert_eq!(selector.list_entries().len(), 5);
        assert_eq!(log.borrow().bound.len(), 1);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let (mut selector, _source, _log) = selector_with(&[]);
        assert_eq!(
            selector.set_provisional(4),
            Err(SelectionError::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(selector.provisional_index(), 0);
    }

    #[test]
    fn test_deleted_custom_skin_is_pruned() {
        let (mut selector, source, log) = selector_with(&[("custom", 16, 16)]);
        selector.set_provisional(1).unwrap();
        selector.confirm();
        assert!(source.remove(Path::new("skins/custom.png")));

        let transition = selector.set_provisional(4).unwrap();

        assert_eq!(
            transition,
            Transition::Pruned {
                name: "custom".to_string()
            }
        );
        assert!(Arc::ptr_eq(selector.active_sheet(), selector.default_sheet()));
        assert_eq!(selector.confirmed_index(), 0);
        assert_eq!(selector.provisional_index(), 0);
        assert_eq!(selector.list_entries().len(), 4);
        assert!(!selector.list_entries().iter().any(|n| n == "custom"));
        assert_eq!(log.borrow().stored, Some(0));
    }

    #[test]
    fn test_corrupted_custom_skin_is_pruned_and_later_entries_shift() {
        let (mut selector, source, _log) = selector_with(&[("a", 16, 16), ("b", 16, 16)]);
        source.insert("skins/a.png", png_bytes(12, 12));

        assert!(matches!(
            selector.set_provisional(4),
            Ok(Transition::Pruned { .. })
        ));
        assert_eq!(selector.list_entries()[4], "b");
        assert_eq!(selector.set_provisional(4), Ok(Transition::Custom));
    }

    #[test]
    fn test_repeated_failures_prune_every_custom() {
        let (mut selector, source, _log) =
            selector_with(&[("a", 16, 16), ("b", 16, 16), ("c", 16, 16)]);
        for name in ["a", "b", "c"] {
            source.remove(Path::new(&format!("skins/{}.png", name)));
        }

        while selector.registry().custom_count() > 0 {
            let index = selector.registry().builtin_count();
            assert!(matches!(
                selector.set_provisional(index),
                Ok(Transition::Pruned { .. })
            ));
            assert_eq!(
                selector.list_entries().len(),
                selector.registry().builtin_count() + selector.registry().custom_count()
            );
        }

        assert_eq!(selector.list_entries(), &BUILTINS);
        assert_eq!(selector.confirmed_index(), 0);
    }

    #[test]
    fn test_confirm_persists_and_notifies() {
        let (mut selector, _source, log) = selector_with(&[("custom", 16, 16)]);

        selector.set_provisional(4).unwrap();
        assert_eq!(selector.confirm(), 4);
        assert_eq!(selector.confirmed_index(), 4);

        let log = log.borrow();
        assert_eq!(log.saves, vec![4]);
        assert_eq!(log.refreshes, 1);
        assert_eq!(log.unlocked, vec![SKIN_ACHIEVEMENT.to_string()]);
    }

    #[test]
    fn test_achievement_only_on_first_change() {
        let (mut selector, _source, log) = selector_with(&[]);

        // Confirming the current skin is not a change
        selector.confirm();
        assert!(log.borrow().unlocked.is_empty());

        selector.set_provisional(1).unwrap();
        selector.confirm();
        selector.set_provisional(2).unwrap();
        selector.confirm();

        assert_eq!(log.borrow().unlocked.len(), 1);
        assert_eq!(log.borrow().saves, vec![0, 1, 2]);
    }

    #[test]
    fn test_cancel_restores_confirmed_sheet() {
        let (mut selector, source, _log) = selector_with(&[("custom", 16, 16)]);
        selector.set_provisional(4).unwrap();
        selector.confirm();
        let confirmed_sheet = Arc::clone(selector.active_sheet());

        selector.set_provisional(1).unwrap();
        assert!(Arc::ptr_eq(selector.active_sheet(), selector.default_sheet()));

        let reads = source.read_count();
        assert!(selector.cancel());
        assert_eq!(selector.provisional_index(), 4);
        assert_eq!(selector.confirmed_index(), 4);
        assert!(Arc::ptr_eq(selector.active_sheet(), &confirmed_sheet));
        assert_eq!(source.read_count(), reads);

        assert!(!selector.cancel());
    }

    #[test]
    fn test_restore_loads_persisted_custom_skin() {
        let (selector, _source, _log) = selector_with(&[("custom", 24, 8)]);
        let store = SharedLog::with_stored(4);
        let mut selector = selector.with_store(Box::new(store));

        assert_eq!(selector.restore().unwrap(), 4);
        assert_eq!(selector.confirmed_index(), 4);
        assert_eq!(selector.active_sheet().width(), 24);

        let sprites = selector.player_sprites();
        assert_eq!(sprites.sheet.width(), 24);
        assert_eq!(sprites.origins, animation_origins(None));
    }

    #[test]
    fn test_restore_out_of_range_falls_back() {
        let (selector, _source, _log) = selector_with(&[]);
        let mut selector = selector.with_store(Box::new(SharedLog::with_stored(12)));

        assert_eq!(selector.restore().unwrap(), 0);
        assert!(Arc::ptr_eq(selector.active_sheet(), selector.default_sheet()));
    }

    #[test]
    fn test_restore_missing_custom_skin_heals() {
        let (selector, source, _log) = selector_with(&[("custom", 16, 16)]);
        let store = SharedLog::with_stored(4);
        let mut selector = selector.with_store(Box::new(store.clone()));
        source.remove(Path::new("skins/custom.png"));

        assert_eq!(selector.restore().unwrap(), 0);
        assert_eq!(selector.list_entries().len(), 4);
        assert_eq!(store.borrow().stored, Some(0));
    }

    #[test]
    fn test_player_sprites_for_builtin() {
        let (mut selector, _source, _log) = selector_with(&[]);
        selector.set_provisional(3).unwrap();
        selector.confirm();

        let sprites = selector.player_sprites();
        assert!(Arc::ptr_eq(&sprites.sheet, selector.default_sheet()));
        assert_eq!(sprites.origins, animation_origins(Some(3)));
    }
}
