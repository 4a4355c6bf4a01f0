// Where the player model finds its animations for the confirmed skin

use crate::engine::assets::{CellRegion, SpriteSheet};
use std::sync::Arc;

/// Each built-in skin takes this many cell rows of the default sheet
pub const ROWS_PER_BUILTIN: u32 = 4;

/// The four animation sets the player model is compiled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerPose {
    Normal,
    Carrying,
    Suited,
    SuitedCarrying,
}

impl PlayerPose {
    pub const ALL: [PlayerPose; 4] = [
        PlayerPose::Normal,
        PlayerPose::Carrying,
        PlayerPose::Suited,
        PlayerPose::SuitedCarrying,
    ];

    /// Cell offset of this pose from the skin's origin
    fn offset(self) -> (u32, u32) {
        match self {
            PlayerPose::Normal => (0, 0),
            PlayerPose::Carrying => (0, 2),
            PlayerPose::Suited => (8, 0),
            PlayerPose::SuitedCarrying => (8, 2),
        }
    }

    fn slot(self) -> usize {
        match self {
            PlayerPose::Normal => 0,
            PlayerPose::Carrying => 1,
            PlayerPose::Suited => 2,
            PlayerPose::SuitedCarrying => 3,
        }
    }
}

/// Top-left cell of an animation set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationOrigin {
    pub col: u32,
    pub row: u32,
}

/// Animation origins for a built-in skin index, or for a custom sheet
/// (`None`), in [`PlayerPose::ALL`] order
pub fn animation_origins(builtin: Option<usize>) -> [AnimationOrigin; 4] {
    let base_row = builtin.map_or(0, |index| index as u32 * ROWS_PER_BUILTIN);
    PlayerPose::ALL.map(|pose| {
        let (col, row) = pose.offset();
        AnimationOrigin {
            col,
            row: base_row + row,
        }
    })
}

/// Sheet plus animation origins for the confirmed skin
#[derive(Debug, Clone)]
pub struct PlayerSkinSprites {
    pub sheet: Arc<SpriteSheet>,
    pub origins: [AnimationOrigin; 4],
}

impl PlayerSkinSprites {
    pub fn origin(&self, pose: PlayerPose) -> AnimationOrigin {
        self.origins[pose.slot()]
    }

    /// Cell at (`dx`, `dy`) relative to a pose's origin
    pub fn cell(&self, pose: PlayerPose, dx: u32, dy: u32) -> Option<CellRegion> {
        let origin = self.origin(pose);
        self.sheet.cell_region(origin.col + dx, origin.row + dy)
    }
}
