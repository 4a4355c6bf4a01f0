// Sprite sheets: decoded skin images carved into 8x8 cells

use super::{AssetSource, UnreadableReason, ValidationError};
use glam::Vec2;
use image::{GenericImageView, RgbaImage};
use std::path::Path;

/// Size of one sprite cell in pixels
pub const CELL_SIZE: u32 = 8;

/// One cell of a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRegion {
    /// Position in the sheet (pixels)
    pub x: u32,
    pub y: u32,

    /// UV coordinates (0.0 to 1.0)
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

/// A decoded, cell-aligned image a skin is drawn from.
///
/// Width and height are always positive multiples of [`CELL_SIZE`]; there is
/// no way to build a sheet that breaks this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    /// Wrap an RGBA image, or `None` if it is not cell aligned
    pub fn from_rgba(image: RgbaImage) -> Option<Self> {
        let (width, height) = image.dimensions();
        is_cell_aligned(width, height).then_some(Self { image })
    }

    /// A fully transparent sheet of `columns` x `rows` cells
    pub fn blank(columns: u32, rows: u32) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        Self {
            image: RgbaImage::new(columns * CELL_SIZE, rows * CELL_SIZE),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Number of cell columns and rows
    pub fn cell_count(&self) -> (u32, u32) {
        (self.width() / CELL_SIZE, self.height() / CELL_SIZE)
    }

    /// Region of the cell at (`col`, `row`), or `None` outside the sheet
    pub fn cell_region(&self, col: u32, row: u32) -> Option<CellRegion> {
        let (columns, rows) = self.cell_count();
        if col >= columns || row >= rows {
            return None;
        }

        let x = col * CELL_SIZE;
        let y = row * CELL_SIZE;
        let width = self.width() as f32;
        let height = self.height() as f32;

        Some(CellRegion {
            x,
            y,
            uv_min: Vec2::new(x as f32 / width, y as f32 / height),
            uv_max: Vec2::new(
                (x + CELL_SIZE) as f32 / width,
                (y + CELL_SIZE) as f32 / height,
            ),
        })
    }
}

fn is_cell_aligned(width: u32, height: u32) -> bool {
    width > 0 && height > 0 && width % CELL_SIZE == 0 && height % CELL_SIZE == 0
}

/// Read and decode the image at `path` and check that it is cell aligned
pub fn validate(path: &Path, source: &dyn AssetSource) -> Result<SpriteSheet, ValidationError> {
    let bytes = source
        .read(path)
        .map_err(|e| ValidationError::ImageUnreadable {
            path: path.to_path_buf(),
            reason: UnreadableReason::from_io(&e),
        })?;

    let img = image::load_from_memory(&bytes).map_err(|_| ValidationError::ImageUnreadable {
        path: path.to_path_buf(),
        reason: UnreadableReason::Corrupt,
    })?;

    let (width, height) = img.dimensions();
    if !is_cell_aligned(width, height) {
        return Err(ValidationError::InvalidDimensions {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    Ok(SpriteSheet {
        image: img.to_rgba8(),
    })
}
