//! Tuning resources and the RON tuning file structure.

use bevy::prelude::*;
use serde::Deserialize;

/// Movement and look tuning for the player body.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Base horizontal speed in units per second
    pub move_speed: f32,
    /// Max rate of horizontal velocity change per second
    pub acceleration: f32,
    /// Sprint speed multiplier
    pub sprint_multiplier: f32,
    /// Upward impulse for ground and air jumps
    pub jump_impulse: f32,
    /// Extra downward gravity factor while descending
    pub fall_multiplier: f32,
    /// Gravity magnitude used for the fall boost term
    pub gravity: f32,
    /// Number of mid-air jumps available after leaving the ground
    pub max_air_jumps: u32,
    /// Mouse sensitivity multiplier
    pub look_sensitivity: f32,
    /// Camera pitch clamp in degrees
    pub pitch_limit_degrees: f32,

    /// Horizontal speed while attached to a runnable wall
    pub wall_run_speed: f32,
    /// Upward velocity countering gravity at the start of a wall run
    pub wall_run_gravity_counter: f32,
    /// How long a wall run can last before detaching (seconds)
    pub max_wall_run_duration: f32,
    /// Upward impulse when jumping off a wall
    pub wall_jump_impulse: f32,
    /// Impulse along the wall normal when jumping off a wall
    pub wall_jump_away_impulse: f32,

    /// Forward impulse applied by a dash
    pub dash_impulse: f32,
    /// How long a dash locks out normal movement (seconds)
    pub dash_duration: f32,
    /// Cooldown before the next dash (seconds)
    pub dash_cooldown: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            acceleration: 75.0,
            sprint_multiplier: 1.3,
            jump_impulse: 6.0,
            fall_multiplier: 2.5,
            gravity: 9.81,
            max_air_jumps: 1,
            look_sensitivity: 1.5,
            pitch_limit_degrees: 80.0,
            wall_run_speed: 8.0,
            wall_run_gravity_counter: 5.0,
            max_wall_run_duration: 2.0,
            // The wall jump is deliberately the strongest impulse in the
            // game - it is the escape mechanic.
            wall_jump_impulse: 750.0,
            wall_jump_away_impulse: 800.0,
            dash_impulse: 15.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
        }
    }
}

/// Tuning for the landing charge minigame.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LandingTuning {
    /// Charge oscillation speed in charge units per second
    pub charge_speed: f32,
    /// Upper bound of the charge value
    pub max_charge: f32,
    /// Lower bound of the perfect release window
    pub perfect_zone_min: f32,
    /// Upper bound of the perfect release window
    pub perfect_zone_max: f32,
    /// Downward impulse at zero charge
    pub min_down_impulse: f32,
    /// Downward impulse at full charge
    pub max_down_impulse: f32,
    /// Forward impulse granted on a perfect release
    pub perfect_forward_boost: f32,
}

impl Default for LandingTuning {
    fn default() -> Self {
        Self {
            charge_speed: 1.8,
            max_charge: 1.0,
            perfect_zone_min: 0.75,
            perfect_zone_max: 0.85,
            min_down_impulse: 5.0,
            max_down_impulse: 25.0,
            perfect_forward_boost: 10.0,
        }
    }
}

/// Tuning for the style score.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoreTuning {
    /// Score granted at the start of a session
    pub starting_score: f32,
    /// Points drained per second while not wall-running
    pub loss_rate: f32,
    /// Points gained per second while wall-running
    pub gain_rate: f32,
}

impl Default for ScoreTuning {
    fn default() -> Self {
        Self {
            starting_score: 10_000.0,
            loss_rate: 50.0,
            gain_rate: 100.0,
        }
    }
}

/// Tuning for the run session.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionTuning {
    /// Falling below this height during a run triggers a respawn
    pub death_height: f32,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            death_height: -10.0,
        }
    }
}

/// Top-level structure of `assets/config/tuning.ron`.
///
/// Every section is optional; omitted sections keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TuningFile {
    #[serde(default)]
    pub movement: MovementTuning,
    #[serde(default)]
    pub landing: LandingTuning,
    #[serde(default)]
    pub score: ScoreTuning,
    #[serde(default)]
    pub session: SessionTuning,
}
