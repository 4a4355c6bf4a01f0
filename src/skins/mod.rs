// Skin registry and selection
//
// - `registry`: built-in + custom skins, directory scan, pruning
// - `selection`: confirmed vs provisional index
// - `selector`: the context object menus drive; owns the active sheet
// - `collaborators`: renderer / persistence / achievement seams
// - `store`: JSON persistence of the confirmed index
// - `player_sprites`: animation origins for the player model

mod collaborators;
mod player_sprites;
mod registry;
mod selection;
mod selector;
mod store;

pub use collaborators::{
    AchievementSink, MemoryStore, NoopAchievements, NoopBinder, SelectionStore, SheetBinder,
    SKIN_ACHIEVEMENT,
};
pub use player_sprites::{
    animation_origins, AnimationOrigin, PlayerPose, PlayerSkinSprites, ROWS_PER_BUILTIN,
};
pub use registry::{prune, SkinEntry, SkinRegistry, SkinSource, SKIN_EXTENSION};
pub use selection::SelectionState;
pub use selector::{SkinSelector, Transition};
pub use store::{JsonSelectionStore, CURRENT_STORE_VERSION};

/// Misuse of the selector API
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Skin index {index} out of range (have {len} skins)")]
    OutOfRange { index: usize, len: usize },

    #[error("A skin registry needs at least one built-in skin")]
    NoBuiltinSkins,
}

/// Persistence errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported skin save version: {0}")]
    InvalidVersion(u32),
}
