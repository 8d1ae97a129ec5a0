//! World module - the course, trigger zones, and collectibles.

mod collectibles;
mod level;
mod plugin;
mod zones;

pub mod layers;

pub use collectibles::{CollectibleSpawns, JumpCollectible};
pub use plugin::WorldPlugin;
pub use zones::{TriggerZone, ZoneKind};
