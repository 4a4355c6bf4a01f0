// Input handling for menu screens
//
// ## Architecture
//
// - `action`: Menu actions and default key bindings
// - `config`: Key remapping and the key names used in help text
// - `manager`: Per-tick pressed state fed from winit keyboard events
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, MenuAction};
//
// let mut input = InputManager::default();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Inside a tick
// if input.just_pressed(MenuAction::Select) {
//     // confirm the highlighted entry
// }
//
// // After the tick
// input.end_tick();
// ```

pub mod action;
pub mod config;
pub mod manager;

// Re-export commonly used types
pub use action::{InputSource, MenuAction};
pub use config::InputConfig;
pub use manager::InputManager;
