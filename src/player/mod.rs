//! Player module - input, wall sensing, locomotion, and the landing charge.

mod components;
mod input;
mod landing;
mod movement;
mod plugin;
mod sensor;

#[cfg(test)]
mod tests;

pub use components::{MovementState, Player, PlayerCamera};
pub use input::PlayerInput;
pub use landing::{ChargeState, LandingQuality};
pub use movement::spawn_player;
pub use plugin::{LocomotionSet, PlayerPlugin};
pub use sensor::{WallContact, WallSensor};
