//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. For example, the trigger
//! zone dispatcher sends RespawnRequested, and the session system receives
//! it to teleport the player. This keeps systems independent and testable.

use bevy::prelude::*;

use crate::player::LandingQuality;

/// Sent once when the player first enters the start zone.
#[derive(Event)]
pub struct RunStarted;

/// Sent once when the player reaches the finish zone during a run.
#[derive(Event)]
pub struct RunFinished {
    /// Run time in seconds at the moment of finishing
    pub elapsed_secs: f32,
}

/// Sent when the player must be put back at the start pose.
///
/// Death zones send this on every contact; the fall watcher sends it
/// whenever the player drops below the death height.
#[derive(Event)]
pub struct RespawnRequested {
    /// The player entity to teleport
    pub player: Entity,
}

/// Sent when the player restarts the attempt from scratch.
///
/// Systems owning per-run state (collected pickups, overlays) listen for
/// this to restore their starting configuration.
#[derive(Event)]
pub struct RunRestarted;

/// Sent when the player collects a jump pickup.
#[derive(Event)]
pub struct JumpPickup {
    /// The player entity that collected it
    pub player: Entity,
}

/// Sent when a landing charge is released and judged.
#[derive(Event)]
pub struct LandingJudged {
    /// Quality band the release landed in
    pub quality: LandingQuality,
    /// Final charge value at release
    pub charge: f32,
}
