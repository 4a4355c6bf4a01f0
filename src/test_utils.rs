// Shared test fixtures

use crate::engine::assets::{AssetSource, MemoryAssetSource, SpriteSheet};
use crate::skins::{
    AchievementSink, SelectionStore, SheetBinder, SkinRegistry, SkinSelector, StoreError,
};
use std::cell::RefCell;
use std::io::Cursor;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

pub const BUILTINS: [&str; 4] = ["Paul", "Paul with cape", "Familiar boy", "Familiar girl"];

/// Encode a solid-colour PNG of the given size
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 80, 40, 255]));
    let mut cursor = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut cursor, image::ImageOutputFormat::Png)
        .expect("encode png fixture");
    cursor.into_inner()
}

/// Everything the selector told its collaborators
#[derive(Debug, Default)]
pub struct CollaboratorLog {
    pub bound: Vec<Arc<SpriteSheet>>,
    pub refreshes: usize,
    pub stored: Option<usize>,
    pub saves: Vec<usize>,
    pub unlocked: Vec<String>,
}

/// Records collaborator calls; clones share one log
#[derive(Debug, Clone, Default)]
pub struct SharedLog(pub Rc<RefCell<CollaboratorLog>>);

impl SharedLog {
    pub fn with_stored(index: usize) -> Self {
        let log = Self::default();
        log.0.borrow_mut().stored = Some(index);
        log
    }

    pub fn borrow(&self) -> std::cell::Ref<'_, CollaboratorLog> {
        self.0.borrow()
    }
}

impl SheetBinder for SharedLog {
    fn bind_sheet(&mut self, sheet: &Arc<SpriteSheet>) {
        self.0.borrow_mut().bound.push(Arc::clone(sheet));
    }

    fn refresh_player_sprite(&mut self) {
        self.0.borrow_mut().refreshes += 1;
    }
}

impl SelectionStore for SharedLog {
    fn load(&self) -> Result<Option<usize>, StoreError> {
        Ok(self.0.borrow().stored)
    }

    fn save(&mut self, index: usize) -> Result<(), StoreError> {
        let mut log = self.0.borrow_mut();
        log.stored = Some(index);
        log.saves.push(index);
        Ok(())
    }
}

impl AchievementSink for SharedLog {
    fn unlock(&mut self, id: &str) {
        self.0.borrow_mut().unlocked.push(id.to_string());
    }
}

/// A skins directory with the given (name, width, height) PNGs
pub fn skin_source(skins: &[(&str, u32, u32)]) -> MemoryAssetSource {
    let source = MemoryAssetSource::new();
    source.ensure_dir(Path::new("skins")).expect("memory dir");
    for (name, width, height) in skins {
        source.insert(format!("skins/{}.png", name), png_bytes(*width, *height));
    }
    source
}

/// Selector over the four built-ins plus the given custom skins
pub fn selector_with(
    skins: &[(&str, u32, u32)],
) -> (SkinSelector, MemoryAssetSource, SharedLog) {
    let source = skin_source(skins);
    let registry = SkinRegistry::initialize(&BUILTINS, Path::new("skins"), &source);
    let log = SharedLog::default();
    let default_sheet = Arc::new(SpriteSheet::blank(32, 16));
    let selector = SkinSelector::new(registry, default_sheet, Box::new(source.clone()))
        .expect("built-ins present")
        .with_binder(Box::new(log.clone()))
        .with_store(Box::new(log.clone()))
        .with_achievements(Box::new(log.clone()));
    (selector, source, log)
}
