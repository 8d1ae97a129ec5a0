//! UI module - HUD and overlay elements.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
