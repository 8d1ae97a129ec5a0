//! Session module - run lifecycle, respawns, and the course clock.

mod plugin;
mod run;

pub use plugin::SessionPlugin;
pub use run::{format_time, RunSession};
