//! Locomotion state machine - grounded movement, wall-runs, jumps, dashes.
//!
//! Runs on the fixed tick, after the wall sensor and before the physics
//! step. The decision math lives in free functions so it can be exercised
//! without a physics backend.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::MovementTuning;
use crate::world::layers;

use super::components::{MovementState, Player, PlayerCamera};
use super::input::PlayerInput;
use super::landing::ChargeState;
use super::sensor::{WallContact, WallSensor};

/// Which jump the press resolves to, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JumpKind {
    /// Standing on the ground, away from walls
    Ground,
    /// Airborne with budget left
    Air,
    /// Kicking off a runnable wall
    WallJump,
}

/// Resolve a jump press against the current contact and state.
///
/// Mirrors the in-game priority: ground jump, then air jump, then wall
/// jump; a press near a wall during the re-attach cooldown is swallowed.
pub(crate) fn decide_jump(contact: &WallContact, state: &MovementState) -> Option<JumpKind> {
    if !contact.airborne && !contact.near_runnable_wall {
        Some(JumpKind::Ground)
    } else if contact.airborne
        && !contact.near_runnable_wall
        && state.used_jumps < state.max_air_jumps
    {
        Some(JumpKind::Air)
    } else if contact.near_runnable_wall && !state.just_left_wall {
        Some(JumpKind::WallJump)
    } else {
        None
    }
}

/// Whether a dash press may start a dash right now (grounded-only).
pub(crate) fn can_dash(contact: &WallContact, state: &MovementState) -> bool {
    !contact.airborne && !state.is_dashing && state.dash_cooldown_timer <= 0.0
}

/// Direction to run along a wall: perpendicular to its normal, sign
/// chosen so the player keeps moving the way they already were.
pub(crate) fn wall_run_direction(wall_normal: Vec3, velocity: Vec3) -> Vec3 {
    let mut direction = wall_normal.cross(Vec3::Y).normalize_or_zero();
    if velocity.dot(direction) < 0.0 {
        direction = -direction;
    }
    direction
}

/// Upward velocity countering gravity during a wall run.
///
/// Full strength at attach, decaying linearly to zero at the maximum
/// duration; the horizontal run speed never decays.
pub(crate) fn wall_run_gravity_counter(counter: f32, timer: f32, max_duration: f32) -> f32 {
    if max_duration <= 0.0 {
        return 0.0;
    }
    let progress = (timer / max_duration).clamp(0.0, 1.0);
    counter * (1.0 - progress)
}

/// Step a vector toward a target without overshooting.
pub(crate) fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_delta || distance <= f32::EPSILON {
        target
    } else {
        current + to_target / distance * max_delta
    }
}

/// End the current wall run: refill the air-jump budget as the reward
/// and block re-attachment until the next landing.
pub(crate) fn stop_wall_run(state: &mut MovementState) {
    state.used_jumps = 0;
    state.wall_run_timer = 0.0;
    state.just_left_wall = true;
    state.set_wall_running(false);
    debug!("stopped wall run");
}

/// Handle mouse look on the fixed tick.
///
/// Yaw rotates the player body; pitch rotates only the camera, clamped
/// to the configured limit.
pub(super) fn apply_look(
    tuning: Res<MovementTuning>,
    mut input: ResMut<PlayerInput>,
    mut player_query: Query<&mut Transform, With<Player>>,
    mut camera_query: Query<(&mut Transform, &mut PlayerCamera), (With<Camera3d>, Without<Player>)>,
) {
    let delta = input.look;
    input.look = Vec2::ZERO;
    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut player_transform) = player_query.get_single_mut() else {
        return;
    };
    let Ok((mut camera_transform, mut camera)) = camera_query.get_single_mut() else {
        return;
    };

    let sensitivity = tuning.look_sensitivity * 0.001;
    let pitch_limit = tuning.pitch_limit_degrees.to_radians();

    player_transform.rotate_y(-delta.x * sensitivity);

    camera.pitch = (camera.pitch - delta.y * sensitivity).clamp(-pitch_limit, pitch_limit);
    camera_transform.rotation = Quat::from_rotation_x(camera.pitch);
}

/// Per-tick locomotion decision: dash lockout, wall-run, or free movement.
pub(super) fn update_locomotion(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    input: Res<PlayerInput>,
    mut query: Query<(&Transform, &WallContact, &mut MovementState, &mut Velocity), With<Player>>,
) {
    let dt = time.delta_secs();
    let Ok((transform, contact, mut state, mut velocity)) = query.get_single_mut() else {
        return;
    };

    state.is_sprinting = input.sprint;

    // Landing refills the jump budget and clears the wall cooldown.
    if !contact.airborne {
        state.used_jumps = 0;
        state.just_left_wall = false;
    }

    if state.dash_cooldown_timer > 0.0 {
        state.dash_cooldown_timer = (state.dash_cooldown_timer - dt).max(0.0);
    }

    // 1. Active dash: the dash impulse is the only motion source.
    if state.is_dashing {
        state.dash_timer -= dt;
        if state.dash_timer <= 0.0 {
            state.is_dashing = false;
            state.dash_cooldown_timer = tuning.dash_cooldown;
        }
        state.set_wall_running(false);
        return;
    }

    // 2. Wall run.
    if contact.near_runnable_wall && !state.just_left_wall {
        state.wall_run_timer += dt;
        if state.wall_run_timer >= tuning.max_wall_run_duration {
            stop_wall_run(&mut state);
        } else {
            let mut speed = tuning.wall_run_speed;
            if state.is_sprinting {
                speed *= tuning.sprint_multiplier;
            }

            let direction = wall_run_direction(contact.wall_normal, velocity.linvel);
            let counter = wall_run_gravity_counter(
                tuning.wall_run_gravity_counter,
                state.wall_run_timer,
                tuning.max_wall_run_duration,
            );

            velocity.linvel = Vec3::new(direction.x * speed, counter, direction.z * speed);
            state.set_wall_running(true);
            return;
        }
    } else if state.is_wall_running() {
        // The wall ran out from under us; same reward as finishing it.
        stop_wall_run(&mut state);
    }

    // 3. Standard grounded/airborne movement.
    let mut speed = tuning.move_speed;
    if state.is_sprinting {
        speed *= tuning.sprint_multiplier;
    }

    let forward = transform.forward().as_vec3();
    let right = transform.right().as_vec3();
    let target = (right * input.movement.x + forward * input.movement.y) * speed;

    let horizontal = Vec3::new(velocity.linvel.x, 0.0, velocity.linvel.z);
    let new_horizontal = move_towards(horizontal, target, tuning.acceleration * dt);
    velocity.linvel.x = new_horizontal.x;
    velocity.linvel.z = new_horizontal.z;

    // Asymmetric gravity: falls are snappier than rises.
    if velocity.linvel.y < 0.0 {
        velocity.linvel.y -= tuning.gravity * (tuning.fall_multiplier - 1.0) * dt;
    }
}

/// Resolve an edge-triggered jump press.
pub(super) fn handle_jump(
    tuning: Res<MovementTuning>,
    input: Res<PlayerInput>,
    mut query: Query<
        (&WallContact, &mut MovementState, &mut Velocity, &mut ExternalImpulse),
        With<Player>,
    >,
) {
    if !input.jump_pressed {
        return;
    }
    let Ok((contact, mut state, mut velocity, mut impulse)) = query.get_single_mut() else {
        return;
    };

    match decide_jump(contact, &state) {
        Some(JumpKind::Ground) => {
            velocity.linvel.y = 0.0;
            impulse.impulse += Vec3::Y * tuning.jump_impulse;
        }
        Some(JumpKind::Air) => {
            velocity.linvel.y = 0.0;
            impulse.impulse += Vec3::Y * tuning.jump_impulse;
            state.used_jumps += 1;
            debug!("air jump {}/{}", state.used_jumps, state.max_air_jumps);
        }
        Some(JumpKind::WallJump) => {
            let away = contact.wall_normal;
            stop_wall_run(&mut state);
            impulse.impulse +=
                Vec3::Y * tuning.wall_jump_impulse + away * tuning.wall_jump_away_impulse;
        }
        None => {}
    }
}

/// Resolve an edge-triggered dash press (grounded-only, cooldown-gated).
pub(super) fn handle_dash(
    tuning: Res<MovementTuning>,
    input: Res<PlayerInput>,
    mut query: Query<
        (
            &Transform,
            &WallContact,
            &mut MovementState,
            &mut Velocity,
            &mut ExternalImpulse,
        ),
        With<Player>,
    >,
) {
    if !input.dash_pressed {
        return;
    }
    let Ok((transform, contact, mut state, mut velocity, mut impulse)) = query.get_single_mut()
    else {
        return;
    };

    if !can_dash(contact, &state) {
        return;
    }

    // A dash replaces the current horizontal motion entirely.
    velocity.linvel.x = 0.0;
    velocity.linvel.z = 0.0;
    impulse.impulse += transform.forward().as_vec3() * tuning.dash_impulse;
    state.is_dashing = true;
    state.dash_timer = tuning.dash_duration;
}

/// Spawn the player entity with camera.
pub fn spawn_player(commands: &mut Commands, tuning: &MovementTuning, position: Vec3) -> Entity {
    // Spawn player body
    let player = commands
        .spawn((
            Player,
            MovementState::new(tuning.max_air_jumps),
            WallSensor::default(),
            WallContact::default(),
            ChargeState::default(),
            // Transform
            Transform::from_translation(position),
            GlobalTransform::default(),
            Visibility::default(),
        ))
        .insert((
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::capsule_y(0.5, 0.3),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            ExternalImpulse::default(),
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
            Ccd::enabled(),
            layers::solid_geometry(layers::PLAYER),
        ))
        .id();

    // Spawn camera as child of player, at eye level
    commands.entity(player).with_children(|parent| {
        parent.spawn((
            Camera3d::default(),
            PlayerCamera::default(),
            Transform::from_xyz(0.0, 0.4, 0.0),
        ));
    });

    player
}
