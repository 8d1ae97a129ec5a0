//! Landing charge minigame - hold to charge while airborne, release to slam.
//!
//! The charge value ping-pongs between zero and the maximum instead of
//! filling once, so release timing matters more than hold duration.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::LandingTuning;
use crate::core::LandingJudged;

use super::components::Player;
use super::input::PlayerInput;
use super::sensor::WallContact;

/// Impulse multiplier for a release inside the perfect window.
const PERFECT_BONUS: f32 = 1.2;
/// Impulse multiplier for overshooting past the perfect window.
const OVERSHOT_PENALTY: f32 = 0.6;

/// Quality bands for a charge release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingQuality {
    /// Released at exactly zero charge
    Abysmal,
    Poor,
    Normal,
    Good,
    Perfect,
    /// Past the perfect window - less control
    Overshot,
}

impl LandingQuality {
    /// Judge a final charge value against the configured perfect window.
    ///
    /// The inner band cut-offs (0.3, 0.6) are fixed; only the perfect
    /// window is tunable.
    pub fn from_charge(value: f32, perfect_min: f32, perfect_max: f32) -> Self {
        if value >= perfect_min && value <= perfect_max {
            LandingQuality::Perfect
        } else if value > perfect_max {
            LandingQuality::Overshot
        } else if value >= 0.6 {
            LandingQuality::Good
        } else if value >= 0.3 {
            LandingQuality::Normal
        } else if value > 0.0 {
            LandingQuality::Poor
        } else {
            LandingQuality::Abysmal
        }
    }

    /// Display name for the HUD.
    pub fn label(&self) -> &'static str {
        match self {
            LandingQuality::Abysmal => "Abysmal",
            LandingQuality::Poor => "Poor",
            LandingQuality::Normal => "Normal",
            LandingQuality::Good => "Good",
            LandingQuality::Perfect => "Perfect",
            LandingQuality::Overshot => "Overshot",
        }
    }
}

/// Active charge session, at most one per player.
#[derive(Component, Debug, Default)]
pub struct ChargeState {
    pub charging: bool,
    /// Current charge value in [0, max_charge]
    pub value: f32,
    ascending: bool,
}

impl ChargeState {
    /// Start a fresh session from zero.
    pub fn begin(&mut self) {
        self.charging = true;
        self.value = 0.0;
        self.ascending = true;
    }

    /// Advance the ping-pong oscillation by one tick.
    pub fn advance(&mut self, dt: f32, speed: f32, max: f32) {
        if !self.charging {
            return;
        }
        let direction = if self.ascending { 1.0 } else { -1.0 };
        self.value += direction * speed * dt;

        // Clamp-and-reverse at both ends; the oscillation never halts.
        if self.value >= max {
            self.value = max;
            self.ascending = false;
        }
        if self.value <= 0.0 {
            self.value = 0.0;
            self.ascending = true;
        }
    }

    /// Consume the session, returning the final charge value.
    pub fn release(&mut self) -> f32 {
        self.charging = false;
        self.value
    }
}

/// Downward impulse magnitude for a judged release.
pub(crate) fn release_impulse(quality: LandingQuality, charge: f32, tuning: &LandingTuning) -> f32 {
    let base =
        tuning.min_down_impulse + (tuning.max_down_impulse - tuning.min_down_impulse) * charge;
    match quality {
        LandingQuality::Perfect => base * PERFECT_BONUS,
        LandingQuality::Overshot => base * OVERSHOT_PENALTY,
        _ => base,
    }
}

/// Drive the charge session: start on press while airborne, oscillate
/// while held, judge and apply exactly one impulse on release.
pub(super) fn update_landing_charge(
    time: Res<Time>,
    tuning: Res<LandingTuning>,
    input: Res<PlayerInput>,
    mut judged: EventWriter<LandingJudged>,
    mut query: Query<
        (&Transform, &WallContact, &mut ChargeState, &mut ExternalImpulse),
        With<Player>,
    >,
) {
    let Ok((transform, contact, mut charge, mut impulse)) = query.get_single_mut() else {
        return;
    };

    // Charging may only begin in the air.
    if input.charge_pressed && contact.airborne && !charge.charging {
        charge.begin();
    }

    charge.advance(time.delta_secs(), tuning.charge_speed, tuning.max_charge);

    if input.charge_released && charge.charging {
        let value = charge.release();
        let quality =
            LandingQuality::from_charge(value, tuning.perfect_zone_min, tuning.perfect_zone_max);

        impulse.impulse += Vec3::NEG_Y * release_impulse(quality, value, &tuning);
        if quality == LandingQuality::Perfect {
            // Small forward reward for nailing the window
            impulse.impulse += transform.forward().as_vec3() * tuning.perfect_forward_boost;
        }

        debug!("landing judged {:?} at charge {:.2}", quality, value);
        judged.send(LandingJudged {
            quality,
            charge: value,
        });
    }
}
