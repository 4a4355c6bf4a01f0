// Pause screen
//
// Entries depend on the session: an offline world can be opened to
// multiplayer, and only the host can save. The screen emits a
// [`PauseAction`] for the owner to carry out.

use super::menu::{Menu, MenuEntry};
use super::{DrawCommand, TextColor};
use crate::engine::input::{InputConfig, InputManager, MenuAction};

/// Top of the pause menu on screen
const MENU_TOP: i32 = 40;

/// Session flags that decide which entries are offered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Connected to, or hosting, a multiplayer session
    pub online: bool,
    /// Connected to someone else's world
    pub valid_client: bool,
    /// Hosting a multiplayer world
    pub valid_server: bool,
    /// Name of the loaded world
    pub world_name: String,
}

impl SessionInfo {
    /// A single player session on `world_name`
    pub fn local(world_name: impl Into<String>) -> Self {
        Self {
            online: false,
            valid_client: false,
            valid_server: false,
            world_name: world_name.into(),
        }
    }
}

/// What the player chose
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseAction {
    ResumeGame,
    OpenOptions,
    StartMultiplayerServer,
    /// Ask the running server to save its world
    SaveWorld,
    /// Save the local world
    SaveLocal { world: String },
    OpenTitleScreen,
}

pub struct PauseMenu {
    menu: Menu<PauseAction>,
}

impl PauseMenu {
    pub fn new(session: &SessionInfo, input: &InputConfig) -> Self {
        let mut entries = vec![
            MenuEntry::Blank,
            MenuEntry::select("Return to Game", PauseAction::ResumeGame),
            MenuEntry::select("Options", PauseAction::OpenOptions),
        ];

        if !session.online {
            entries.push(MenuEntry::select(
                "Make World Multiplayer",
                PauseAction::StartMultiplayerServer,
            ));
        }

        if !session.valid_client {
            let save = if session.valid_server {
                PauseAction::SaveWorld
            } else {
                PauseAction::SaveLocal {
                    world: session.world_name.clone(),
                }
            };
            entries.push(MenuEntry::select("Save Game", save));
        }

        entries.extend([
            MenuEntry::select("Main Menu", PauseAction::OpenTitleScreen),
            MenuEntry::Blank,
            MenuEntry::text(
                format!(
                    "{} and {} to Scroll",
                    input.mapping(MenuAction::CursorUp),
                    input.mapping(MenuAction::CursorDown)
                ),
                TextColor::Gray,
            ),
            MenuEntry::text(
                format!("{}: Choose", input.mapping(MenuAction::Select)),
                TextColor::Gray,
            ),
        ]);

        Self {
            menu: Menu::new(entries).with_title("Paused"),
        }
    }

    /// Labels of the selectable entries, top to bottom
    pub fn labels(&self) -> Vec<&str> {
        self.menu
            .entries()
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Select { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn selected_action(&self) -> Option<&PauseAction> {
        self.menu.selected_value()
    }

    /// Handle one tick of input. Returns an action once the player picks
    /// one; the pause and exit keys resume the game.
    pub fn tick(&mut self, input: &InputManager) -> Option<PauseAction> {
        if input.just_pressed(MenuAction::Pause) || input.just_pressed(MenuAction::Exit) {
            return Some(PauseAction::ResumeGame);
        }

        if input.just_pressed(MenuAction::Select) {
            return self.menu.selected_value().cloned();
        }

        if input.just_pressed(MenuAction::CursorUp) {
            self.menu.select_previous();
        } else if input.just_pressed(MenuAction::CursorDown) {
            self.menu.select_next();
        }
        None
    }

    pub fn render(&self, frame: &mut Vec<DrawCommand>) {
        self.menu.render(MENU_TOP, frame);
    }
}
