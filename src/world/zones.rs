//! Trigger zones - start, finish, and death volumes.
//!
//! Zones are static sensor volumes; all the logic lives in the dispatcher,
//! which translates player contacts into session calls. Start and finish
//! are idempotence-gated by the session itself; death fires every contact.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::{RespawnRequested, RunFinished, RunStarted};
use crate::player::Player;
use crate::session::RunSession;

/// What a trigger volume does on player contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    /// Starts the run clock on first contact
    Start,
    /// Stops the clock and completes the run
    Finish,
    /// Sends the player back to the start pose, every time
    Death,
}

/// A static trigger volume.
#[derive(Component, Debug)]
pub struct TriggerZone {
    pub kind: ZoneKind,
}

/// Translate zone contacts into session transitions.
pub(super) fn dispatch_zone_contacts(
    mut collisions: EventReader<CollisionEvent>,
    mut session: ResMut<RunSession>,
    mut run_started: EventWriter<RunStarted>,
    mut run_finished: EventWriter<RunFinished>,
    mut respawns: EventWriter<RespawnRequested>,
    zone_query: Query<&TriggerZone>,
    player_query: Query<Entity, With<Player>>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    for event in collisions.read() {
        let CollisionEvent::Started(e1, e2, _) = event else {
            continue;
        };

        // One side must be a zone, the other the player
        let (zone_entity, other) = if zone_query.contains(*e1) {
            (*e1, *e2)
        } else if zone_query.contains(*e2) {
            (*e2, *e1)
        } else {
            continue;
        };
        if other != player {
            continue;
        }
        let Ok(zone) = zone_query.get(zone_entity) else {
            continue;
        };

        match zone.kind {
            ZoneKind::Start => {
                if session.start() {
                    info!("run started");
                    run_started.send(RunStarted);
                }
            }
            ZoneKind::Finish => {
                if let Some(elapsed) = session.finish() {
                    info!("run finished in {:.2}s", elapsed);
                    run_finished.send(RunFinished {
                        elapsed_secs: elapsed,
                    });
                }
            }
            ZoneKind::Death => {
                respawns.send(RespawnRequested { player });
            }
        }
    }
}
