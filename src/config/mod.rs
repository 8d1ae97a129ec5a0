//! Config module - tuning resources and the RON tuning file loader.

mod data;
mod error;

pub use data::{LandingTuning, MovementTuning, ScoreTuning, SessionTuning, TuningFile};
pub use error::ConfigError;

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use crate::core::GameState;

/// Default location of the tuning file, relative to the working directory.
const TUNING_PATH: &str = "assets/config/tuning.ron";

/// Config plugin - resolves tuning at startup.
///
/// Tuning resources are initialized with their canonical defaults and then
/// overwritten from the tuning file if it is present and parses. A missing
/// or broken file is never fatal.
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<LandingTuning>()
            .init_resource::<ScoreTuning>()
            .init_resource::<SessionTuning>()
            .add_systems(OnEnter(GameState::Loading), resolve_tuning);
    }
}

/// Load the tuning file, then move on to gameplay.
fn resolve_tuning(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    match load_tuning_file(TUNING_PATH) {
        Ok(tuning) => {
            info!("Loaded tuning from {}", TUNING_PATH);
            commands.insert_resource(tuning.movement);
            commands.insert_resource(tuning.landing);
            commands.insert_resource(tuning.score);
            commands.insert_resource(tuning.session);
        }
        Err(err) => {
            warn!("Using default tuning: {}", err);
        }
    }

    next_state.set(GameState::InGame);
}

/// Read and parse a tuning file.
pub fn load_tuning_file(path: impl AsRef<Path>) -> Result<TuningFile, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_file_parses_partial_sections() {
        let source = r#"(
            movement: (
                move_speed: 12.0,
                max_air_jumps: 2,
            ),
            score: (
                starting_score: 500.0,
            ),
        )"#;

        let tuning: TuningFile = ron::from_str(source).expect("should parse");
        assert_eq!(tuning.movement.move_speed, 12.0);
        assert_eq!(tuning.movement.max_air_jumps, 2);
        // Untouched fields keep defaults
        assert_eq!(tuning.movement.sprint_multiplier, 1.3);
        assert_eq!(tuning.score.starting_score, 500.0);
        assert_eq!(tuning.landing.charge_speed, 1.8);
    }

    #[test]
    fn tuning_file_defaults_when_empty() {
        let tuning: TuningFile = ron::from_str("()").expect("should parse");
        assert_eq!(tuning.movement.move_speed, 10.0);
        assert_eq!(tuning.session.death_height, -10.0);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_tuning_file("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
