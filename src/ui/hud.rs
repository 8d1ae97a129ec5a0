//! In-game HUD - score, air jumps, run timer, wall-run and charge bars.

use bevy::prelude::*;

use crate::config::{LandingTuning, MovementTuning};
use crate::core::{GameState, LandingJudged};
use crate::player::{ChargeState, MovementState, Player};
use crate::score::ScoreTracker;
use crate::session::{format_time, RunSession};

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the score readout.
#[derive(Component)]
pub struct ScoreText;

/// Marker for the air-jump readout.
#[derive(Component)]
pub struct AirJumpText;

/// Marker for the run timer readout.
#[derive(Component)]
pub struct TimerText;

/// Marker for the wall-run bar container (hidden off-wall).
#[derive(Component)]
pub struct WallRunBarContainer;

/// Marker for the wall-run bar fill.
#[derive(Component)]
pub struct WallRunBarFill;

/// Marker for the landing charge bar fill.
#[derive(Component)]
pub struct ChargeBarFill;

/// Marker for the landing quality readout.
#[derive(Component)]
pub struct LandingQualityText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud).add_systems(
        Update,
        (
            update_score_text,
            update_air_jump_text,
            update_timer_text,
            update_wall_run_bar,
            update_charge_bar,
            update_landing_quality_text,
        )
            .run_if(in_state(GameState::InGame)),
    );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // Readouts (top-left corner)
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(20.0),
                left: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ScoreText,
            ));
            parent.spawn((
                Text::new("Air Jumps: 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
                AirJumpText,
            ));
        });

    // Run timer (top center)
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(20.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        HudRoot,
    )).with_children(|parent| {
        parent.spawn((
            Text::new("00:00.00"),
            TextFont {
                font_size: 26.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
            Visibility::Hidden,
            TimerText,
        ));
    });

    // Bars and landing feedback (bottom center)
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(40.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            // Wall-run time remaining
            parent
                .spawn((
                    Node {
                        width: Val::Px(220.0),
                        height: Val::Px(10.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                    Visibility::Hidden,
                    WallRunBarContainer,
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.3, 0.7, 1.0)),
                        WallRunBarFill,
                    ));
                });

            // Landing charge
            parent
                .spawn((
                    Node {
                        width: Val::Px(220.0),
                        height: Val::Px(14.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.8, 0.2, 0.2)),
                        ChargeBarFill,
                    ));
                });

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                LandingQualityText,
            ));
        });
}

/// Update the score readout.
fn update_score_text(score: Res<ScoreTracker>, mut text_query: Query<&mut Text, With<ScoreText>>) {
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };
    text.0 = format!("Score: {}", score.rounded());
}

/// Update the remaining air jump readout.
fn update_air_jump_text(
    player_query: Query<&MovementState, With<Player>>,
    mut text_query: Query<&mut Text, With<AirJumpText>>,
) {
    let Ok(movement) = player_query.get_single() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };
    text.0 = format!("Air Jumps: {}", movement.remaining_jumps());
}

/// Show the run clock while an attempt is underway.
fn update_timer_text(
    session: Res<RunSession>,
    mut text_query: Query<(&mut Text, &mut Visibility), With<TimerText>>,
) {
    let Ok((mut text, mut visibility)) = text_query.get_single_mut() else {
        return;
    };

    if session.is_started() && !session.is_finished() {
        *visibility = Visibility::Visible;
        text.0 = format_time(session.elapsed_secs());
    } else {
        *visibility = Visibility::Hidden;
    }
}

/// Show wall-run time remaining while attached to a wall.
fn update_wall_run_bar(
    tuning: Res<MovementTuning>,
    player_query: Query<&MovementState, With<Player>>,
    mut container_query: Query<&mut Visibility, With<WallRunBarContainer>>,
    mut fill_query: Query<&mut Node, With<WallRunBarFill>>,
) {
    let Ok(movement) = player_query.get_single() else {
        return;
    };
    let Ok(mut visibility) = container_query.get_single_mut() else {
        return;
    };

    if !movement.is_wall_running() {
        *visibility = Visibility::Hidden;
        return;
    }
    *visibility = Visibility::Visible;

    let Ok(mut fill) = fill_query.get_single_mut() else {
        return;
    };
    let remaining = if tuning.max_wall_run_duration > 0.0 {
        ((tuning.max_wall_run_duration - movement.wall_run_timer) / tuning.max_wall_run_duration)
            .clamp(0.0, 1.0)
    } else {
        0.0
    };
    fill.width = Val::Percent(remaining * 100.0);
}

/// Color for the charge bar fill, banded like the release judgement.
fn charge_bar_color(value: f32, tuning: &LandingTuning) -> Color {
    if value >= tuning.perfect_zone_min && value <= tuning.perfect_zone_max {
        Color::srgb(0.2, 1.0, 0.6)
    } else if value > tuning.perfect_zone_max {
        Color::srgb(0.5, 0.5, 0.5)
    } else if value >= 0.6 {
        Color::srgb(0.2, 0.8, 0.3)
    } else if value >= 0.3 {
        Color::srgb(0.9, 0.8, 0.2)
    } else {
        Color::srgb(0.8, 0.2, 0.2)
    }
}

/// Mirror the charge session into the charge bar.
fn update_charge_bar(
    tuning: Res<LandingTuning>,
    player_query: Query<&ChargeState, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<ChargeBarFill>>,
) {
    let Ok(charge) = player_query.get_single() else {
        return;
    };
    let Ok((mut fill, mut color)) = fill_query.get_single_mut() else {
        return;
    };

    if !charge.charging {
        fill.width = Val::Percent(0.0);
        return;
    }

    let fraction = if tuning.max_charge > 0.0 {
        (charge.value / tuning.max_charge).clamp(0.0, 1.0)
    } else {
        0.0
    };
    fill.width = Val::Percent(fraction * 100.0);
    *color = charge_bar_color(charge.value, &tuning).into();
}

/// Show the judgement of the latest landing release.
fn update_landing_quality_text(
    mut judged: EventReader<LandingJudged>,
    mut text_query: Query<&mut Text, With<LandingQualityText>>,
) {
    let Some(event) = judged.read().last() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };
    text.0 = format!("Landing: {}", event.quality.label());
}
