pub mod analyze;
pub mod config;
pub mod kit;
pub mod moods;
pub mod play;
pub mod recommend;
mod render;
