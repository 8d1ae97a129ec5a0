//! Test course construction.
//!
//! A short hand-built course: a start platform, two gaps bridged by
//! runnable walls, a climbable practice wall, and a finish platform,
//! with pickups floating along the wall-run lines.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::MovementTuning;
use crate::player::spawn_player;
use crate::session::RunSession;

use super::collectibles::{spawn_collectible, CollectibleSpawns};
use super::layers;
use super::zones::{TriggerZone, ZoneKind};

/// Where the player first appears (and respawns).
const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 1.2, 0.0);

/// Build the course and spawn the player.
pub(super) fn setup_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    movement_tuning: Res<MovementTuning>,
    mut spawns: ResMut<CollectibleSpawns>,
) {
    info!("building test course");

    commands.insert_resource(RunSession::at_start_pose(PLAYER_SPAWN, Quat::IDENTITY));

    // Lighting
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.8, 0.85, 1.0),
        brightness: 300.0,
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
    ));

    let floor_color = Color::srgb(0.35, 0.35, 0.4);
    let runnable_color = Color::srgb(0.55, 0.3, 0.25);
    let climbable_color = Color::srgb(0.3, 0.5, 0.35);

    // Start platform
    spawn_slab(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(16.0, 1.0, 16.0),
        floor_color,
        layers::GROUND,
    );

    // First gap: a wall-run corridor bridges it
    spawn_slab(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(3.5, 2.0, -14.0),
        Vec3::new(1.0, 6.0, 12.0),
        runnable_color,
        layers::RUNNABLE_WALL,
    );
    spawn_slab(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(-3.5, 2.0, -14.0),
        Vec3::new(1.0, 6.0, 12.0),
        runnable_color,
        layers::RUNNABLE_WALL,
    );

    // Middle platform with a climbable practice wall
    spawn_slab(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(0.0, -0.5, -24.0),
        Vec3::new(10.0, 1.0, 8.0),
        floor_color,
        layers::GROUND,
    );
    spawn_slab(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(4.5, 2.5, -24.0),
        Vec3::new(1.0, 6.0, 8.0),
        climbable_color,
        layers::CLIMBABLE_WALL,
    );

    // Second gap: a single runnable wall on the left
    spawn_slab(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(-3.5, 2.0, -32.0),
        Vec3::new(1.0, 6.0, 8.0),
        runnable_color,
        layers::RUNNABLE_WALL,
    );

    // Finish platform
    spawn_slab(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(0.0, -0.5, -40.0),
        Vec3::new(12.0, 1.0, 8.0),
        floor_color,
        layers::GROUND,
    );

    // Trigger volumes
    spawn_zone(
        &mut commands,
        &mut meshes,
        &mut materials,
        ZoneKind::Start,
        Vec3::new(0.0, 1.5, -6.0),
        Vec3::new(12.0, 3.0, 2.0),
    );
    spawn_zone(
        &mut commands,
        &mut meshes,
        &mut materials,
        ZoneKind::Finish,
        Vec3::new(0.0, 1.5, -41.0),
        Vec3::new(8.0, 3.0, 2.0),
    );
    // Catch-all death volume under both gaps
    spawn_zone(
        &mut commands,
        &mut meshes,
        &mut materials,
        ZoneKind::Death,
        Vec3::new(0.0, -6.0, -22.0),
        Vec3::new(40.0, 1.0, 48.0),
    );

    // Pickups along the wall-run lines
    let pickup_positions = vec![
        Vec3::new(0.0, 2.5, -14.0),
        Vec3::new(2.0, 2.0, -24.0),
        Vec3::new(-2.0, 3.0, -32.0),
    ];
    for &position in &pickup_positions {
        spawn_collectible(&mut commands, &mut meshes, &mut materials, position);
    }
    spawns.0 = pickup_positions;

    spawn_player(&mut commands, &movement_tuning, PLAYER_SPAWN);
}

/// Spawn a solid box with a collider on the given layer.
fn spawn_slab(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
    size: Vec3,
    color: Color,
    membership: Group,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_translation(position),
        Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
        layers::solid_geometry(membership),
    ));
}

/// Spawn a translucent trigger volume.
fn spawn_zone(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    kind: ZoneKind,
    position: Vec3,
    size: Vec3,
) {
    let color = match kind {
        ZoneKind::Start => Color::srgba(0.2, 0.8, 0.3, 0.35),
        ZoneKind::Finish => Color::srgba(0.9, 0.8, 0.2, 0.35),
        ZoneKind::Death => Color::srgba(0.8, 0.2, 0.2, 0.35),
    };

    commands.spawn((
        TriggerZone { kind },
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(position),
        Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        CollisionGroups::new(layers::ZONE, layers::PLAYER),
    ));
}
