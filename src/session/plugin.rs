//! Session plugin - run clock, fall watching, respawns, and restarts.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::{MovementTuning, ScoreTuning, SessionTuning};
use crate::core::{GameState, RespawnRequested, RunRestarted};
use crate::player::{ChargeState, MovementState, Player};
use crate::score::ScoreTracker;

use super::run::RunSession;

/// Session plugin - owns the run lifecycle around the locomotion core.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunSession>().add_systems(
            Update,
            (tick_session, watch_fall, handle_restart_input, handle_respawn)
                .run_if(in_state(GameState::InGame)),
        );
    }
}

/// Advance the run clock.
fn tick_session(time: Res<Time>, mut session: ResMut<RunSession>) {
    session.tick(time.delta_secs());
}

/// Request a respawn when the player falls out of the course mid-run.
fn watch_fall(
    tuning: Res<SessionTuning>,
    session: Res<RunSession>,
    mut respawns: EventWriter<RespawnRequested>,
    player_query: Query<(Entity, &Transform), With<Player>>,
) {
    if !session.is_started() || session.is_finished() {
        return;
    }
    let Ok((player, transform)) = player_query.get_single() else {
        return;
    };

    if transform.translation.y < tuning.death_height {
        respawns.send(RespawnRequested { player });
    }
}

/// Teleport the player back to the recorded start pose.
///
/// A privileged overwrite of the body: position, orientation, and both
/// velocities are reset in one go. Repeated requests all apply.
fn handle_respawn(
    session: Res<RunSession>,
    mut respawns: EventReader<RespawnRequested>,
    mut player_query: Query<(&mut Transform, &mut Velocity), With<Player>>,
) {
    for request in respawns.read() {
        let Ok((mut transform, mut velocity)) = player_query.get_mut(request.player) else {
            continue;
        };

        transform.translation = session.start_translation();
        transform.rotation = session.start_rotation();
        *velocity = Velocity::zero();
        info!("player respawned");
    }
}

/// Restart the whole attempt with the R key: player back at the start,
/// clock and score reseeded, collected pickups restored.
fn handle_restart_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    score_tuning: Res<ScoreTuning>,
    movement_tuning: Res<MovementTuning>,
    mut session: ResMut<RunSession>,
    mut score: ResMut<ScoreTracker>,
    mut respawns: EventWriter<RespawnRequested>,
    mut restarts: EventWriter<RunRestarted>,
    mut player_query: Query<(Entity, &mut MovementState, &mut ChargeState), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }
    let Ok((player, mut movement, mut charge)) = player_query.get_single_mut() else {
        return;
    };

    session.reset();
    *score = ScoreTracker::new(score_tuning.starting_score);
    // A restart also rolls back pickup-granted jump budget
    *movement = MovementState::new(movement_tuning.max_air_jumps);
    *charge = ChargeState::default();
    respawns.send(RespawnRequested { player });
    restarts.send(RunRestarted);
    info!("run restarted");
}
