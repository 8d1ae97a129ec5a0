//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Gameplay systems
//! only run in the InGame state; Paused freezes both gameplay and physics.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The prototype drops straight into the course:
/// - Start in `Loading` to read the tuning file
/// - Enter `InGame` once tuning is resolved
/// - `Paused` freezes gameplay but keeps the world visible
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - resolving tuning data
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Game is paused (overlay on gameplay)
    Paused,
}
