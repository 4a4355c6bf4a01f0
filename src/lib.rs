// Skin registry and selector for a 2D sandbox game, with the skin and
// pause screens that drive it.

pub mod config;
pub mod engine;
pub mod game;
pub mod skins;

#[cfg(test)]
mod test_utils;
