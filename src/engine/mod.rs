// Engine modules: assets, input, tick timing

pub mod assets;
pub mod input;
pub mod tick_loop;
