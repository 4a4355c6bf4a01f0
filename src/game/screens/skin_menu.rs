// Skin selection screen
//
// Lists every skin the selector knows about with a walking preview of the
// highlighted one. Moving the cursor changes the provisional skin; select
// commits it and exit puts the confirmed skin back.

use super::menu::{Menu, MenuEntry};
use super::{DrawCommand, TextColor};
use crate::config::SkinConfig;
use crate::engine::input::{InputConfig, InputManager, MenuAction};
use crate::game::preview::PreviewAnimation;
use crate::skins::{SkinSelector, Transition};
use log::{debug, warn};

/// Top of the skin list on screen
const MENU_TOP: i32 = 70;

/// Skin names shown at once
const VISIBLE_SKINS: usize = 6;

/// What the owner should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinMenuOutcome {
    /// Keep the screen open
    Stay,
    /// Skin committed, close the screen
    Confirmed(usize),
    /// Closed without committing
    Cancelled,
}

pub struct SkinMenu {
    menu: Menu<usize>,
    preview: PreviewAnimation,
    move_help: String,
    select_help: String,
    screen_width: u32,
    screen_height: u32,
}

impl SkinMenu {
    /// Open the screen with the cursor on the confirmed skin
    pub fn new(selector: &mut SkinSelector, input: &InputConfig, config: &SkinConfig) -> Self {
        // A previous visit may have left a provisional skin active
        selector.cancel();

        let mut menu = Menu::new(skin_entries(selector)).with_visible_rows(VISIBLE_SKINS);
        menu.set_selection(selector.confirmed_index());

        Self {
            menu,
            preview: PreviewAnimation::new(config.frame_duration, config.frame_count),
            move_help: format!(
                "Use {} and {} to move.",
                input.mapping(MenuAction::CursorDown),
                input.mapping(MenuAction::CursorUp)
            ),
            select_help: format!(
                "{} to select, and {} to cancel.",
                input.mapping(MenuAction::Select),
                input.mapping(MenuAction::Exit)
            ),
            screen_width: config.screen_width,
            screen_height: config.screen_height,
        }
    }

    /// Index of the highlighted skin
    pub fn cursor(&self) -> usize {
        self.menu.selected_value().copied().unwrap_or(0)
    }

    pub fn tick(&mut self, input: &InputManager, selector: &mut SkinSelector) -> SkinMenuOutcome {
        self.preview.tick();

        if input.just_pressed(MenuAction::Exit) {
            selector.cancel();
            return SkinMenuOutcome::Cancelled;
        }

        if input.just_pressed(MenuAction::Select) {
            return SkinMenuOutcome::Confirmed(selector.confirm());
        }

        let moved = if input.just_pressed(MenuAction::CursorUp) {
            self.menu.select_previous();
            true
        } else if input.just_pressed(MenuAction::CursorDown) {
            self.menu.select_next();
            true
        } else {
            false
        };

        if moved {
            match selector.set_provisional(self.cursor()) {
                Ok(Transition::Pruned { name }) => {
                    debug!("Rebuilding skin list without {}", name);
                    self.menu.set_entries(skin_entries(selector));
                    self.menu.set_selection(selector.provisional_index());
                }
                Ok(_) => {}
                Err(err) => warn!("Skin cursor out of sync: {}", err),
            }
        }

        SkinMenuOutcome::Stay
    }

    pub fn render(&self, selector: &SkinSelector, frame: &mut Vec<DrawCommand>) {
        let h = self.screen_height as i32;

        frame.push(DrawCommand::text("Skins", h - 180, TextColor::White));

        let cursor = self.cursor();
        let builtin = selector.registry().is_builtin(cursor).then_some(cursor);
        frame.extend(self.preview.cells(builtin, self.screen_width));

        self.menu.render(MENU_TOP, frame);

        frame.push(DrawCommand::text(
            self.move_help.clone(),
            h - 17,
            TextColor::DarkGray,
        ));
        frame.push(DrawCommand::text(
            self.select_help.clone(),
            h - 9,
            TextColor::DarkGray,
        ));
    }
}

fn skin_entries(selector: &SkinSelector) -> Vec<MenuEntry<usize>> {
    selector
        .list_entries()
        .iter()
        .enumerate()
        .map(|(index, name)| MenuEntry::select(name.clone(), index))
        .collect()
}
