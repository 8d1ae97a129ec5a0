//! UI plugin - HUD plus the start and win overlays.

use bevy::prelude::*;

use crate::core::GameState;
use crate::session::{format_time, RunSession};

use super::hud;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app.add_systems(OnEnter(GameState::InGame), spawn_overlays)
            .add_systems(
                Update,
                update_overlays.run_if(in_state(GameState::InGame)),
            )
            .add_systems(OnEnter(GameState::Paused), spawn_pause_overlay)
            .add_systems(OnExit(GameState::Paused), cleanup_pause_overlay);
    }
}

/// Marker for the pre-run prompt.
#[derive(Component)]
struct StartOverlay;

/// Marker for the post-run banner.
#[derive(Component)]
struct WinOverlay;

/// Marker for the final-time line inside the win banner.
#[derive(Component)]
struct WinTimeText;

/// Marker for the pause overlay.
#[derive(Component)]
struct PauseOverlay;

/// Spawn the center-screen overlays; visibility is driven per frame.
fn spawn_overlays(mut commands: Commands) {
    // Pre-run prompt
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(20.0),
                position_type: PositionType::Absolute,
                ..default()
            },
            StartOverlay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Enter the GREEN zone to START"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.95)),
            ));
            parent.spawn((
                Text::new(
                    "WASD-Move | Space-Jump | Shift-Sprint | Ctrl-Dash | Q-Charge | R-Restart",
                ),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
            ));
        });

    // Win banner
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            WinOverlay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("YOU WIN!"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.3)),
            ));
            parent.spawn((
                Text::new("Time: 00:00.00"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                WinTimeText,
            ));
            parent.spawn((
                Text::new("Press R to Restart"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
            ));
        });
}

/// Swap overlays to match the session state.
fn update_overlays(
    session: Res<RunSession>,
    mut start_query: Query<&mut Visibility, (With<StartOverlay>, Without<WinOverlay>)>,
    mut win_query: Query<&mut Visibility, (With<WinOverlay>, Without<StartOverlay>)>,
    mut time_query: Query<&mut Text, With<WinTimeText>>,
) {
    if let Ok(mut visibility) = start_query.get_single_mut() {
        *visibility = if session.is_started() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }

    if let Ok(mut visibility) = win_query.get_single_mut() {
        *visibility = if session.is_finished() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }

    if session.is_finished() {
        if let Ok(mut text) = time_query.get_single_mut() {
            text.0 = format!("Time: {}", format_time(session.elapsed_secs()));
        }
    }
}

/// Dim the screen while paused.
fn spawn_pause_overlay(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            PauseOverlay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

/// Remove the pause overlay when play resumes.
fn cleanup_pause_overlay(mut commands: Commands, query: Query<Entity, With<PauseOverlay>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
