//! Jump collectibles - one-shot pickups that grow the air-jump budget.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::core::{JumpPickup, RunRestarted};
use crate::player::{MovementState, Player};

use super::layers;

/// Marker for an uncollected pickup.
#[derive(Component, Debug)]
pub struct JumpCollectible;

/// Cosmetic bob-and-spin animation state.
#[derive(Component, Debug)]
pub struct Bobbing {
    /// Random phase so pickups don't move in lockstep
    pub phase: f32,
    pub base_height: f32,
}

/// Where the level placed its pickups, for restart respawns.
#[derive(Resource, Debug, Default)]
pub struct CollectibleSpawns(pub Vec<Vec3>);

/// Spawn a single pickup at the given position.
pub(super) fn spawn_collectible(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) {
    let phase = rand::thread_rng().gen_range(0.0..TAU);

    commands.spawn((
        JumpCollectible,
        Bobbing {
            phase,
            base_height: position.y,
        },
        Mesh3d(meshes.add(Cuboid::new(0.4, 0.4, 0.4))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.7, 1.0),
            emissive: LinearRgba::rgb(0.1, 0.3, 0.6),
            ..default()
        })),
        Transform::from_translation(position),
        Collider::ball(0.5),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        CollisionGroups::new(layers::PICKUP, layers::PLAYER),
    ));
}

/// Bob and spin uncollected pickups.
pub(super) fn animate_collectibles(
    time: Res<Time>,
    mut query: Query<(&Bobbing, &mut Transform), With<JumpCollectible>>,
) {
    let elapsed = time.elapsed_secs();
    for (bobbing, mut transform) in query.iter_mut() {
        transform.translation.y = bobbing.base_height + (elapsed * 2.0 + bobbing.phase).sin() * 0.2;
        transform.rotation = Quat::from_rotation_y(elapsed + bobbing.phase);
    }
}

/// Grant an extra air jump on the first player contact and consume the
/// pickup.
pub(super) fn collect_pickups(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    mut pickups: EventWriter<JumpPickup>,
    collectible_query: Query<Entity, With<JumpCollectible>>,
    mut player_query: Query<(Entity, &mut MovementState), With<Player>>,
) {
    let Ok((player, mut movement)) = player_query.get_single_mut() else {
        return;
    };

    for event in collisions.read() {
        let CollisionEvent::Started(e1, e2, _) = event else {
            continue;
        };

        let (collectible, other) = if collectible_query.contains(*e1) {
            (*e1, *e2)
        } else if collectible_query.contains(*e2) {
            (*e2, *e1)
        } else {
            continue;
        };
        if other != player {
            continue;
        }

        movement.max_air_jumps += 1;
        debug!("air jump budget raised to {}", movement.max_air_jumps);
        pickups.send(JumpPickup { player });
        commands.entity(collectible).despawn_recursive();
    }
}

/// Restore every pickup from its recorded spawn point after a restart.
pub(super) fn respawn_collectibles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut restarts: EventReader<RunRestarted>,
    spawns: Res<CollectibleSpawns>,
    live_query: Query<Entity, With<JumpCollectible>>,
) {
    if restarts.read().next().is_none() {
        return;
    }

    for entity in live_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for &position in &spawns.0 {
        spawn_collectible(&mut commands, &mut meshes, &mut materials, position);
    }
}
