//! Wall sensor - per-tick proximity queries around the player.
//!
//! Runs at the start of every fixed tick, before the locomotion systems
//! consume the result (read-before-decide ordering).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::world::layers;

use super::components::Player;

/// Probe configuration for the wall sensor.
#[derive(Component, Debug, Clone)]
pub struct WallSensor {
    /// Lateral ray length: capsule radius plus detection buffer
    pub detection_distance: f32,
    /// Radius of the downward grounded probe
    pub ground_probe_radius: f32,
    /// How far below the body center the grounded probe reaches
    pub ground_probe_distance: f32,
}

impl Default for WallSensor {
    fn default() -> Self {
        Self {
            // capsule radius (0.3) + detection buffer
            detection_distance: 0.7,
            ground_probe_radius: 0.25,
            // capsule half height (0.8) + landing tolerance
            ground_probe_distance: 0.9,
        }
    }
}

/// Per-tick contact snapshot produced by the sensor.
///
/// Flags are recomputed from scratch every tick. The stored normal keeps
/// its previous value on ticks without a hit.
#[derive(Component, Debug, Clone, Copy)]
pub struct WallContact {
    /// No standable surface under the body
    pub airborne: bool,
    pub near_runnable_wall: bool,
    pub near_climbable_wall: bool,
    /// Surface normal of the most recent wall hit
    pub wall_normal: Vec3,
}

impl Default for WallContact {
    fn default() -> Self {
        Self {
            airborne: false,
            near_runnable_wall: false,
            near_climbable_wall: false,
            wall_normal: Vec3::X,
        }
    }
}

/// Ray results for one probe direction, in cast order.
pub(crate) struct DirectionalHits {
    pub runnable: Option<Vec3>,
    pub climbable: Option<Vec3>,
}

/// Fold per-direction hits into contact flags and a winning normal.
///
/// Directions are visited in cast order and every hit overwrites the
/// stored normal, so the last direction checked wins when several walls
/// are in range.
pub(crate) fn fold_contacts(hits: &[DirectionalHits]) -> (bool, bool, Option<Vec3>) {
    let mut near_runnable = false;
    let mut near_climbable = false;
    let mut normal = None;

    for hit in hits {
        if let Some(n) = hit.runnable {
            near_runnable = true;
            normal = Some(n);
        }
        if let Some(n) = hit.climbable {
            near_climbable = true;
            normal = Some(n);
        }
    }

    (near_runnable, near_climbable, normal)
}

/// Recompute the player's wall contact for this tick.
pub(super) fn update_wall_sensor(
    rapier_context: Query<&RapierContext>,
    mut query: Query<(Entity, &Transform, &WallSensor, &mut WallContact), With<Player>>,
) {
    let Ok(context) = rapier_context.get_single() else {
        return;
    };
    let Ok((player_entity, transform, sensor, mut contact)) = query.get_single_mut() else {
        return;
    };

    let origin = transform.translation;
    let filter = QueryFilter::default().exclude_collider(player_entity);

    // Grounded test: a short downward sphere cast. More robust than
    // checking vertical velocity, which is noisy on slopes and seams.
    let probe = Collider::ball(sensor.ground_probe_radius);
    let grounded = context
        .cast_shape(
            origin,
            Quat::IDENTITY,
            Vec3::NEG_Y,
            &probe,
            ShapeCastOptions::with_max_time_of_impact(sensor.ground_probe_distance),
            filter.groups(layers::ground_probe_filter()),
        )
        .is_some();
    contact.airborne = !grounded;

    contact.near_runnable_wall = false;
    contact.near_climbable_wall = false;

    // Grounded entities never attach to walls; skip the lateral casts.
    if grounded {
        return;
    }

    let forward = transform.forward().as_vec3();
    let right = transform.right().as_vec3();
    let directions = [forward, -forward, right, -right];

    let hits: Vec<DirectionalHits> = directions
        .iter()
        .map(|&dir| DirectionalHits {
            runnable: cast_wall_ray(
                context,
                origin,
                dir,
                sensor.detection_distance,
                filter.groups(layers::runnable_wall_filter()),
            ),
            climbable: cast_wall_ray(
                context,
                origin,
                dir,
                sensor.detection_distance,
                filter.groups(layers::climbable_wall_filter()),
            ),
        })
        .collect();

    let (near_runnable, near_climbable, normal) = fold_contacts(&hits);
    contact.near_runnable_wall = near_runnable;
    contact.near_climbable_wall = near_climbable;
    if let Some(normal) = normal {
        contact.wall_normal = normal;
        debug!("wall contact, normal {:?}", normal);
    }
}

/// Single lateral ray; returns the hit normal if a wall is in range.
fn cast_wall_ray(
    context: &RapierContext,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    filter: QueryFilter,
) -> Option<Vec3> {
    context
        .cast_ray_and_get_normal(origin, direction, max_distance, true, filter)
        .map(|(_, intersection)| intersection.normal)
}
