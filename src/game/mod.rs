// Game screens and the skin preview

pub mod preview;
pub mod screens;
