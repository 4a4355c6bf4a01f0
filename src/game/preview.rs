// Walking preview of the highlighted skin

use crate::engine::assets::CELL_SIZE;
use crate::game::screens::{DrawCommand, SheetRef};
use crate::skins::ROWS_PER_BUILTIN;

/// Top of the preview block on screen
pub const PREVIEW_Y: i32 = 38;

/// The preview is a square of this many cells per side
pub const PREVIEW_CELLS: u32 = 2;

/// Tick-driven frame counter for the skin preview
#[derive(Debug, Clone)]
pub struct PreviewAnimation {
    step: u64,
    frame_duration: u32,
    frame_count: u32,
}

impl PreviewAnimation {
    pub fn new(frame_duration: u32, frame_count: u32) -> Self {
        Self {
            step: 0,
            frame_duration: frame_duration.max(1),
            frame_count: frame_count.max(1),
        }
    }

    /// Advance one tick
    pub fn tick(&mut self) {
        self.step += 1;
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// Current frame: `(step / frame_duration) % frame_count`
    pub fn frame_index(&self) -> u32 {
        ((self.step / self.frame_duration as u64) % self.frame_count as u64) as u32
    }

    /// Cells for the current frame, centred on a screen `screen_width` wide.
    ///
    /// `builtin` is the highlighted built-in skin index, or `None` when a
    /// custom skin is highlighted and the active sheet should be used.
    pub fn cells(&self, builtin: Option<usize>, screen_width: u32) -> Vec<DrawCommand> {
        let x_offset = (screen_width / 2) as i32 - (PREVIEW_CELLS * CELL_SIZE / 2) as i32;
        let frame = self.frame_index();

        let (sheet, base_row) = match builtin {
            Some(index) => (SheetRef::Default, index as u32 * ROWS_PER_BUILTIN),
            None => (SheetRef::Active, 0),
        };

        let mut cells = Vec::with_capacity((PREVIEW_CELLS * PREVIEW_CELLS) as usize);
        for y in 0..PREVIEW_CELLS {
            for x in 0..PREVIEW_CELLS {
                cells.push(DrawCommand::Cell {
                    x: x_offset + (x * CELL_SIZE) as i32,
                    y: PREVIEW_Y + (y * CELL_SIZE) as i32,
                    sheet,
                    col: frame * PREVIEW_CELLS + x,
                    row: base_row + y,
                });
            }
        }
        cells
    }
}
