//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Marker component for the player's camera.
#[derive(Component, Default)]
pub struct PlayerCamera {
    /// Current pitch angle in radians (looking up/down)
    pub pitch: f32,
}

/// Tracks the locomotion state machine across fixed ticks.
///
/// `used_jumps` never exceeds `max_air_jumps`; both the ground and a
/// finished wall run refill the budget by zeroing `used_jumps`.
#[derive(Component, Debug)]
pub struct MovementState {
    /// Mid-air jumps spent since last leaving the ground
    pub used_jumps: u32,
    /// Mid-air jump budget; pickups raise this permanently
    pub max_air_jumps: u32,
    /// Seconds spent on the current wall run
    pub wall_run_timer: f32,
    /// Set when a wall run ends; blocks re-attachment until landing
    pub just_left_wall: bool,
    pub is_sprinting: bool,
    pub is_dashing: bool,
    /// Seconds left on the active dash
    pub dash_timer: f32,
    /// Seconds until the next dash is allowed
    pub dash_cooldown_timer: f32,
    is_wall_running: bool,
}

impl MovementState {
    pub fn new(max_air_jumps: u32) -> Self {
        Self {
            used_jumps: 0,
            max_air_jumps,
            wall_run_timer: 0.0,
            just_left_wall: false,
            is_sprinting: false,
            is_dashing: false,
            dash_timer: 0.0,
            dash_cooldown_timer: 0.0,
            is_wall_running: false,
        }
    }

    /// Whether the player is actively wall-running this tick.
    ///
    /// Read-only view for observers like the score system; only the
    /// locomotion systems may flip it.
    pub fn is_wall_running(&self) -> bool {
        self.is_wall_running
    }

    pub(super) fn set_wall_running(&mut self, active: bool) {
        self.is_wall_running = active;
    }

    /// Air jumps still available before landing.
    pub fn remaining_jumps(&self) -> u32 {
        self.max_air_jumps.saturating_sub(self.used_jumps)
    }
}

impl Default for MovementState {
    fn default() -> Self {
        Self::new(1)
    }
}
