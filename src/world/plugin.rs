//! World plugin - course construction, trigger zones, and pickups.

use bevy::prelude::*;

use crate::core::GameState;

use super::collectibles::{self, CollectibleSpawns};
use super::level;
use super::zones;

/// World plugin - builds the course and runs its interactables.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollectibleSpawns>()
            .add_systems(OnEnter(GameState::InGame), level::setup_level)
            .add_systems(
                Update,
                (
                    zones::dispatch_zone_contacts,
                    collectibles::collect_pickups,
                    collectibles::animate_collectibles,
                    collectibles::respawn_collectibles,
                )
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
