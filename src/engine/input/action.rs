// Menu action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Everything a menu screen reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    CursorUp,
    CursorDown,
    Select,
    Exit,
    Pause,
}

/// Represents an input source (keyboard key for now)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Short upper-case name shown in help text ("UP", "W", "ENTER")
    pub fn label(&self) -> String {
        match self {
            InputSource::Keyboard(code) => key_label(*code),
        }
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::ArrowUp => "UP".to_string(),
        KeyCode::ArrowDown => "DOWN".to_string(),
        KeyCode::ArrowLeft => "LEFT".to_string(),
        KeyCode::ArrowRight => "RIGHT".to_string(),
        other => {
            let name = format!("{:?}", other);
            name.strip_prefix("Key")
                .or_else(|| name.strip_prefix("Digit"))
                .unwrap_or(&name)
                .to_uppercase()
        }
    }
}

/// Default menu bindings
pub fn default_bindings() -> Vec<(InputSource, MenuAction)> {
    vec![
        (InputSource::key(KeyCode::ArrowUp), MenuAction::CursorUp),
        (InputSource::key(KeyCode::KeyW), MenuAction::CursorUp),
        (InputSource::key(KeyCode::ArrowDown), MenuAction::CursorDown),
        (InputSource::key(KeyCode::KeyS), MenuAction::CursorDown),
        (InputSource::key(KeyCode::Enter), MenuAction::Select),
        (InputSource::key(KeyCode::Space), MenuAction::Select),
        (InputSource::key(KeyCode::Escape), MenuAction::Exit),
        (InputSource::key(KeyCode::KeyP), MenuAction::Pause),
    ]
}
