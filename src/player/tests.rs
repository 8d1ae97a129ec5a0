//! Player domain: unit tests for the locomotion and landing decision logic.

use bevy::prelude::*;

use crate::config::LandingTuning;

use super::components::MovementState;
use super::landing::{release_impulse, ChargeState, LandingQuality};
use super::movement::{
    can_dash, decide_jump, move_towards, stop_wall_run, wall_run_direction,
    wall_run_gravity_counter, JumpKind,
};
use super::sensor::{fold_contacts, DirectionalHits, WallContact};

fn grounded_contact() -> WallContact {
    WallContact {
        airborne: false,
        ..default()
    }
}

fn airborne_contact() -> WallContact {
    WallContact {
        airborne: true,
        ..default()
    }
}

fn wall_contact(normal: Vec3) -> WallContact {
    WallContact {
        airborne: true,
        near_runnable_wall: true,
        wall_normal: normal,
        ..default()
    }
}

#[test]
fn test_jump_priority() {
    let state = MovementState::new(1);

    // On the ground, away from walls: plain jump
    assert_eq!(
        decide_jump(&grounded_contact(), &state),
        Some(JumpKind::Ground)
    );

    // Airborne with budget: air jump
    assert_eq!(
        decide_jump(&airborne_contact(), &state),
        Some(JumpKind::Air)
    );

    // Near a runnable wall: wall jump beats the air jump
    assert_eq!(
        decide_jump(&wall_contact(Vec3::X), &state),
        Some(JumpKind::WallJump)
    );
}

#[test]
fn test_air_jump_budget_exhausts() {
    let mut state = MovementState::new(2);
    let contact = airborne_contact();

    for expected_used in 1..=2 {
        assert_eq!(decide_jump(&contact, &state), Some(JumpKind::Air));
        state.used_jumps += 1;
        assert_eq!(state.used_jumps, expected_used);
        assert!(state.used_jumps <= state.max_air_jumps);
    }

    // Budget spent: the press is swallowed
    assert_eq!(decide_jump(&contact, &state), None);
    assert_eq!(state.remaining_jumps(), 0);
}

#[test]
fn test_wall_jump_blocked_during_cooldown() {
    let mut state = MovementState::new(1);
    state.just_left_wall = true;
    state.used_jumps = 1;

    // The wall is right there, but we just left one; with the air budget
    // also spent, nothing fires.
    assert_eq!(decide_jump(&wall_contact(Vec3::X), &state), None);
}

#[test]
fn test_wall_run_stop_rewards_fresh_budget() {
    let mut state = MovementState::new(1);
    state.used_jumps = 1;
    state.wall_run_timer = 1.4;
    state.set_wall_running(true);

    stop_wall_run(&mut state);

    assert_eq!(state.used_jumps, 0);
    assert_eq!(state.wall_run_timer, 0.0);
    assert!(state.just_left_wall);
    assert!(!state.is_wall_running());
}

#[test]
fn test_dash_gating() {
    let mut state = MovementState::new(1);

    assert!(can_dash(&grounded_contact(), &state));

    // Grounded-only
    assert!(!can_dash(&airborne_contact(), &state));

    // Not while dashing, not during cooldown
    state.is_dashing = true;
    assert!(!can_dash(&grounded_contact(), &state));
    state.is_dashing = false;
    state.dash_cooldown_timer = 0.5;
    assert!(!can_dash(&grounded_contact(), &state));
}

#[test]
fn test_wall_run_direction_aligns_with_velocity() {
    // Wall to the right, normal pointing -X; run axis is along Z
    let normal = Vec3::NEG_X;

    let forward = wall_run_direction(normal, Vec3::new(0.0, 0.0, 3.0));
    assert!(forward.z > 0.9);

    // Reversed velocity flips the run direction rather than the player
    let backward = wall_run_direction(normal, Vec3::new(0.0, 0.0, -3.0));
    assert!(backward.z < -0.9);

    // Result is horizontal and unit length
    assert!(forward.y.abs() < 1e-6);
    assert!((forward.length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_wall_run_gravity_counter_decays_linearly() {
    let counter = 5.0;
    let max = 2.0;

    assert_eq!(wall_run_gravity_counter(counter, 0.0, max), 5.0);
    assert!((wall_run_gravity_counter(counter, 1.0, max) - 2.5).abs() < 1e-6);
    assert_eq!(wall_run_gravity_counter(counter, 2.0, max), 0.0);

    // Past the max it stays at zero instead of going negative
    assert_eq!(wall_run_gravity_counter(counter, 3.0, max), 0.0);

    // Degenerate configuration never counteracts gravity
    assert_eq!(wall_run_gravity_counter(counter, 0.5, 0.0), 0.0);
}

#[test]
fn test_move_towards_never_overshoots() {
    let current = Vec3::new(1.0, 0.0, 0.0);
    let target = Vec3::new(5.0, 0.0, 0.0);

    let step = move_towards(current, target, 1.5);
    assert!((step.x - 2.5).abs() < 1e-6);

    // Close enough: snaps to the target exactly
    assert_eq!(move_towards(Vec3::new(4.9, 0.0, 0.0), target, 1.5), target);
    assert_eq!(move_towards(target, target, 1.5), target);
}

#[test]
fn test_charge_ping_pong_stays_in_range() {
    let mut charge = ChargeState::default();
    charge.begin();

    let speed = 1.8;
    let max = 1.0;
    let dt = 1.0 / 64.0;

    let mut reached_top = false;
    let mut returned_down = false;
    for _ in 0..512 {
        charge.advance(dt, speed, max);
        assert!(charge.value >= 0.0 && charge.value <= max);
        if charge.value >= max {
            reached_top = true;
        }
        if reached_top && charge.value < 0.5 {
            returned_down = true;
        }
    }

    // Reaching the max reverses direction rather than halting
    assert!(reached_top);
    assert!(returned_down);
}

#[test]
fn test_charge_quality_bands() {
    let judge = |v: f32| LandingQuality::from_charge(v, 0.75, 0.85);

    assert_eq!(judge(0.80), LandingQuality::Perfect);
    assert_eq!(judge(0.75), LandingQuality::Perfect);
    assert_eq!(judge(0.85), LandingQuality::Perfect);
    assert_eq!(judge(0.86), LandingQuality::Overshot);
    assert_eq!(judge(1.0), LandingQuality::Overshot);
    assert_eq!(judge(0.74), LandingQuality::Good);
    assert_eq!(judge(0.6), LandingQuality::Good);
    assert_eq!(judge(0.59), LandingQuality::Normal);
    assert_eq!(judge(0.3), LandingQuality::Normal);
    assert_eq!(judge(0.1), LandingQuality::Poor);
    assert_eq!(judge(0.0), LandingQuality::Abysmal);
}

#[test]
fn test_release_impulse_scaling() {
    let tuning = LandingTuning::default();

    // Perfect release at 0.80: lerped base, scaled up 20%
    let base = tuning.min_down_impulse + (tuning.max_down_impulse - tuning.min_down_impulse) * 0.8;
    let perfect = release_impulse(LandingQuality::Perfect, 0.8, &tuning);
    assert!((perfect - base * 1.2).abs() < 1e-4);

    // Overshot releases lose control
    let overshot_base =
        tuning.min_down_impulse + (tuning.max_down_impulse - tuning.min_down_impulse) * 0.9;
    let overshot = release_impulse(LandingQuality::Overshot, 0.9, &tuning);
    assert!((overshot - overshot_base * 0.6).abs() < 1e-4);

    // Abysmal release at zero charge: the bare minimum, no bonus
    let abysmal = release_impulse(LandingQuality::Abysmal, 0.0, &tuning);
    assert_eq!(abysmal, tuning.min_down_impulse);
}

#[test]
fn test_fold_contacts_last_hit_wins() {
    let none = || DirectionalHits {
        runnable: None,
        climbable: None,
    };

    // Runnable wall in the first direction, climbable in the third:
    // the later direction's normal wins.
    let hits = [
        DirectionalHits {
            runnable: Some(Vec3::X),
            climbable: None,
        },
        none(),
        DirectionalHits {
            runnable: None,
            climbable: Some(Vec3::Z),
        },
        none(),
    ];
    let (runnable, climbable, normal) = fold_contacts(&hits);
    assert!(runnable);
    assert!(climbable);
    assert_eq!(normal, Some(Vec3::Z));

    // Within one direction the climbable cast runs second and wins.
    let hits = [
        DirectionalHits {
            runnable: Some(Vec3::X),
            climbable: Some(Vec3::Y),
        },
        none(),
        none(),
        none(),
    ];
    let (_, _, normal) = fold_contacts(&hits);
    assert_eq!(normal, Some(Vec3::Y));

    // No hits: flags clear, no normal produced
    let (runnable, climbable, normal) = fold_contacts(&[none(), none(), none(), none()]);
    assert!(!runnable);
    assert!(!climbable);
    assert_eq!(normal, None);
}
