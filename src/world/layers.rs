//! Collision group assignments shared by colliders and sensor queries.

use bevy_rapier3d::prelude::*;

/// Floors and other landable surfaces.
pub const GROUND: Group = Group::GROUP_1;
/// Walls the player can run along.
pub const RUNNABLE_WALL: Group = Group::GROUP_2;
/// Walls flagged climbable (detected but not run on).
pub const CLIMBABLE_WALL: Group = Group::GROUP_3;
/// The player body.
pub const PLAYER: Group = Group::GROUP_4;
/// Jump collectibles.
pub const PICKUP: Group = Group::GROUP_5;
/// Start/finish/death trigger volumes.
pub const ZONE: Group = Group::GROUP_6;

/// Membership for solid level geometry: collides with everything.
pub fn solid_geometry(membership: Group) -> CollisionGroups {
    CollisionGroups::new(membership, Group::ALL)
}

/// Query filter groups selecting runnable walls only.
pub fn runnable_wall_filter() -> CollisionGroups {
    CollisionGroups::new(Group::ALL, RUNNABLE_WALL)
}

/// Query filter groups selecting climbable walls only.
pub fn climbable_wall_filter() -> CollisionGroups {
    CollisionGroups::new(Group::ALL, CLIMBABLE_WALL)
}

/// Query filter groups for the downward ground probe: anything standable.
pub fn ground_probe_filter() -> CollisionGroups {
    CollisionGroups::new(Group::ALL, GROUND | RUNNABLE_WALL | CLIMBABLE_WALL)
}
