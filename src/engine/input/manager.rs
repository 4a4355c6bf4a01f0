// Input manager - turns winit key events into per-tick menu actions

use super::action::{InputSource, MenuAction};
use super::config::InputConfig;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks which menu actions are held and which were pressed since the
/// last tick
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,

    /// Actions that are currently held down
    pressed: HashSet<MenuAction>,

    /// Actions pressed since the last `end_tick`
    just_pressed: HashSet<MenuAction>,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Process a key state change
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let Some(action) = self.config.get_action(InputSource::key(key_code)) else {
            return;
        };

        match state {
            // Holding a cursor key scrolls, so repeats count as presses
            ElementState::Pressed if repeat => {
                self.just_pressed.insert(action);
            }
            ElementState::Pressed => self.press(action),
            ElementState::Released => self.release(action),
        }
    }

    /// Register an action press
    pub fn press(&mut self, action: MenuAction) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: MenuAction) {
        self.pressed.remove(&action);
    }

    /// Check if an action was pressed since the last tick
    pub fn just_pressed(&self, action: MenuAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action is held
    pub fn is_pressed(&self, action: MenuAction) -> bool {
        self.pressed.contains(&action)
    }

    /// Call once after every tick that consumed input
    pub fn end_tick(&mut self) {
        self.just_pressed.clear();
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}
