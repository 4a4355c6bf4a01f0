// Menu screens and the draw commands they produce
//
// Screens do not rasterize anything themselves. `render` appends
// `DrawCommand`s that the renderer turns into text and sprite cells.

pub mod menu;
pub mod pause_menu;
pub mod skin_menu;

pub use menu::{Menu, MenuEntry};
pub use pause_menu::{PauseAction, PauseMenu, SessionInfo};
pub use skin_menu::{SkinMenu, SkinMenuOutcome};

/// Text colours used by menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    White,
    Gray,
    DarkGray,
}

/// Which sheet a sprite cell is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRef {
    /// The shared built-in sheet
    Default,
    /// The selector's active (custom) sheet
    Active,
}

/// One thing to draw this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Text centred horizontally at row `y`
    Text {
        text: String,
        y: i32,
        color: TextColor,
    },
    /// An 8x8 sprite cell at screen position (`x`, `y`)
    Cell {
        x: i32,
        y: i32,
        sheet: SheetRef,
        col: u32,
        row: u32,
    },
}

impl DrawCommand {
    pub fn text(text: impl Into<String>, y: i32, color: TextColor) -> Self {
        DrawCommand::Text {
            text: text.into(),
            y,
            color,
        }
    }

    /// Text content, `None` for sprite cells
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            DrawCommand::Cell { .. } => None,
        }
    }
}
