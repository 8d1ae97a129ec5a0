//! Score module - a style score that rewards wall-running.
//!
//! Purely observational: it reads the locomotion state's wall-run flag
//! after the tick's decisions are made and writes nothing back.

use bevy::prelude::*;

use crate::config::ScoreTuning;
use crate::core::GameState;
use crate::player::{LocomotionSet, MovementState, Player};

/// Running style score. Drains while grounded or falling, grows while
/// wall-running; floored at zero, no ceiling.
#[derive(Resource, Debug, Default)]
pub struct ScoreTracker {
    value: f32,
}

impl ScoreTracker {
    pub fn new(starting_score: f32) -> Self {
        Self {
            value: starting_score.max(0.0),
        }
    }

    /// Integrate one tick at the given signed rate.
    pub fn accrue(&mut self, rate: f32, dt: f32) {
        self.value = (self.value + rate * dt).max(0.0);
    }

    /// Current score, rounded for display.
    pub fn rounded(&self) -> i64 {
        self.value.round() as i64
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

/// Score plugin - seeds the tracker and charges it every fixed tick.
pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoreTracker>()
            .add_systems(OnEnter(GameState::InGame), seed_score)
            .add_systems(
                FixedUpdate,
                accrue_score
                    .after(LocomotionSet)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

/// Reset the tracker to the configured starting score.
pub fn seed_score(tuning: Res<ScoreTuning>, mut score: ResMut<ScoreTracker>) {
    *score = ScoreTracker::new(tuning.starting_score);
}

/// Per-tick integration against the post-decision wall-run flag.
fn accrue_score(
    time: Res<Time>,
    tuning: Res<ScoreTuning>,
    mut score: ResMut<ScoreTracker>,
    player_query: Query<&MovementState, With<Player>>,
) {
    let Ok(movement) = player_query.get_single() else {
        return;
    };

    let rate = if movement.is_wall_running() {
        tuning.gain_rate
    } else {
        -tuning.loss_rate
    };
    score.accrue(rate, time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_drains_and_floors() {
        let mut score = ScoreTracker::new(100.0);

        // 1.5 seconds of not wall-running at -50/s
        for _ in 0..96 {
            score.accrue(-50.0, 1.0 / 64.0);
        }
        assert!((score.value() - 25.0).abs() < 1e-3);

        // Draining past zero floors instead of going negative
        for _ in 0..640 {
            score.accrue(-50.0, 1.0 / 64.0);
        }
        assert_eq!(score.value(), 0.0);
    }

    #[test]
    fn test_score_grows_without_ceiling() {
        let mut score = ScoreTracker::new(10_000.0);

        // 2 seconds of wall-running at +100/s
        for _ in 0..128 {
            score.accrue(100.0, 1.0 / 64.0);
        }
        assert!((score.value() - 10_200.0).abs() < 1e-2);
    }

    #[test]
    fn test_negative_seed_floors_at_zero() {
        let score = ScoreTracker::new(-5.0);
        assert_eq!(score.value(), 0.0);
    }
}
