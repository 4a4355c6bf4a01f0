// Skin registry: built-in skins followed by custom skins found on disk

use crate::engine::assets::{validate, AssetSource};
use log::{debug, error, info, warn};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// File extension a custom skin must have
pub const SKIN_EXTENSION: &str = "png";

/// Where a skin's sprites come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinSource {
    /// Rows of the default sheet, by built-in index
    Builtin(usize),
    /// A user supplied image
    Custom(PathBuf),
}

/// One selectable skin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinEntry {
    pub name: String,
    pub source: SkinSource,
}

/// Ordered list of selectable skins.
///
/// Invariant: `names.len() == builtin_count + custom_paths.len()`; the first
/// `builtin_count` names have no path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkinRegistry {
    names: Vec<String>,
    builtin_count: usize,
    custom_paths: Vec<PathBuf>,
}

impl SkinRegistry {
    /// Registry holding only built-in skins
    pub fn with_builtins<S: AsRef<str>>(builtin_names: &[S]) -> Self {
        Self {
            names: builtin_names.iter().map(|n| n.as_ref().to_string()).collect(),
            builtin_count: builtin_names.len(),
            custom_paths: Vec::new(),
        }
    }

    /// Build the registry: built-ins first, then every valid `.png` in
    /// `scan_dir` in scan order.
    ///
    /// Never fails. Invalid files are skipped with a warning and an
    /// unreadable directory leaves only the built-ins.
    pub fn initialize<S: AsRef<str>>(
        builtin_names: &[S],
        scan_dir: &Path,
        source: &dyn AssetSource,
    ) -> Self {
        let mut registry = Self::with_builtins(builtin_names);

        match source.ensure_dir(scan_dir) {
            Ok(true) => info!("Created skins folder at {}", scan_dir.display()),
            Ok(false) => {}
            Err(e) => {
                error!("Could not create skins folder at {}: {}", scan_dir.display(), e);
                return registry;
            }
        }

        let files = match source.list_files(scan_dir) {
            Ok(files) => files,
            Err(e) => {
                error!("Could not list skins folder {}: {}", scan_dir.display(), e);
                return registry;
            }
        };

        for path in files {
            // A bare ".png" has no extension, only a stem
            if path.extension() != Some(OsStr::new(SKIN_EXTENSION)) {
                debug!("Ignoring {}, not a .png skin", path.display());
                continue;
            }
            let Some(stem) = path.file_stem() else {
                continue;
            };

            // Lossy only for display; the real path is kept for loading
            let name = stem.to_string_lossy().into_owned();
            match validate(&path, source) {
                Ok(_) => registry.push_custom(name, path),
                Err(e) => warn!("Skipping skin: {}", e),
            }
        }

        info!(
            "Loaded {} skins ({} custom)",
            registry.len(),
            registry.custom_count()
        );

        registry
    }

    /// Append a custom skin
    pub fn push_custom(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.names.push(name.into());
        self.custom_paths.push(path.into());
    }

    /// All names in display order
    pub fn list_entries(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn builtin_count(&self) -> usize {
        self.builtin_count
    }

    pub fn custom_count(&self) -> usize {
        self.custom_paths.len()
    }

    /// Whether `index` is a built-in skin
    pub fn is_builtin(&self, index: usize) -> bool {
        index < self.builtin_count
    }

    /// Image path of a custom skin, `None` for built-ins and bad indices
    pub fn path_for(&self, index: usize) -> Option<&Path> {
        index
            .checked_sub(self.builtin_count)
            .and_then(|i| self.custom_paths.get(i))
            .map(PathBuf::as_path)
    }

    /// Full entry for `index`
    pub fn entry(&self, index: usize) -> Option<SkinEntry> {
        let name = self.names.get(index)?.clone();
        let source = match self.path_for(index) {
            Some(path) => SkinSource::Custom(path.to_path_buf()),
            None => SkinSource::Builtin(index),
        };
        Some(SkinEntry { name, source })
    }

    /// All entries in display order
    pub fn entries(&self) -> impl Iterator<Item = SkinEntry> + '_ {
        (0..self.len()).filter_map(move |i| self.entry(i))
    }
}

/// Registry with the custom skin at `failed_index` removed.
///
/// Entries after it shift down by one. Built-in or out of range indices
/// leave the registry unchanged.
pub fn prune(registry: &SkinRegistry, failed_index: usize) -> SkinRegistry {
    let mut pruned = registry.clone();

    if registry.is_builtin(failed_index) || failed_index >= registry.len() {
        return pruned;
    }

    pruned.names.remove(failed_index);
    pruned.custom_paths.remove(failed_index - registry.builtin_count);
    pruned
}
