// JSON persistence of the confirmed skin
//
// The file is tiny and human-readable:
//
// ```json
// {
//   "version": 1,
//   "skin_index": 2
// }
// ```

use super::{SelectionStore, StoreError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CURRENT_STORE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SkinSaveData {
    version: u32,
    skin_index: usize,
}

/// Stores the confirmed skin index in a JSON file
#[derive(Debug, Clone)]
pub struct JsonSelectionStore {
    path: PathBuf,
}

impl JsonSelectionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for JsonSelectionStore {
    fn load(&self) -> Result<Option<usize>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        let data: SkinSaveData = serde_json::from_str(&json)?;

        if data.version > CURRENT_STORE_VERSION {
            return Err(StoreError::InvalidVersion(data.version));
        }

        Ok(Some(data.skin_index))
    }

    fn save(&mut self, index: usize) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = SkinSaveData {
            version: CURRENT_STORE_VERSION,
            skin_index: index,
        };
        fs::write(&self.path, serde_json::to_string_pretty(&data)?)?;

        debug!("Saved skin index {} to {}", index, self.path.display());
        Ok(())
    }
}
