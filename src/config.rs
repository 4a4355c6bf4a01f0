// Game paths and skin screen settings

use std::path::{Path, PathBuf};

/// Folder under the per-user data dir holding skins and settings
pub const GAME_DIR_NAME: &str = "skin-select";

/// Overrides the game directory when set
pub const GAME_DIR_ENV: &str = "SKIN_SELECT_DIR";

/// Skins bundled with the game, in the row order of the default sheet
pub const DEFAULT_BUILTIN_SKINS: [&str; 4] =
    ["Paul", "Paul with cape", "Familiar boy", "Familiar girl"];

/// Settings for the skin registry and skin screen
#[derive(Debug, Clone, PartialEq)]
pub struct SkinConfig {
    /// Per-user game directory
    pub game_dir: PathBuf,

    /// Names of the built-in skins
    pub builtin_names: Vec<String>,

    /// Ticks each preview frame is shown for
    pub frame_duration: u32,

    /// Frames in the preview walk cycle
    pub frame_count: u32,

    /// Logical screen size in pixels
    pub screen_width: u32,
    pub screen_height: u32,
}

impl SkinConfig {
    pub fn new(game_dir: impl AsRef<Path>) -> Self {
        Self {
            game_dir: game_dir.as_ref().to_path_buf(),
            builtin_names: DEFAULT_BUILTIN_SKINS.iter().map(|s| s.to_string()).collect(),
            frame_duration: 40,
            frame_count: 8,
            screen_width: 288,
            screen_height: 192,
        }
    }

    pub fn with_animation(mut self, frame_duration: u32, frame_count: u32) -> Self {
        self.frame_duration = frame_duration.max(1);
        self.frame_count = frame_count.max(1);
        self
    }

    /// Folder scanned for custom skins
    pub fn skins_dir(&self) -> PathBuf {
        self.game_dir.join("skins")
    }

    /// File the confirmed skin is saved to
    pub fn selection_file(&self) -> PathBuf {
        self.game_dir.join("skin.json")
    }
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self::new(default_game_dir())
    }
}

/// `$SKIN_SELECT_DIR`, else `<data dir>/skin-select`, else the working dir
pub fn default_game_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(GAME_DIR_ENV) {
        return PathBuf::from(dir);
    }

    dirs::data_dir()
        .map(|p| p.join(GAME_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}
