//! UI domain: level number and distance-to-finish bar.

use bevy::prelude::*;

use crate::gravity::Player;
use crate::levels::{LevelProgress, LevelRun};

pub(crate) const PROGRESS_BAR_WIDTH: f32 = 240.0;
const PROGRESS_BAR_HEIGHT: f32 = 14.0;
pub(crate) const HUD_PADDING: f32 = 16.0;

#[derive(Component)]
pub struct LevelNumberText;

#[derive(Component)]
pub struct ProgressBarFill;

pub(crate) fn spawn_progress_hud(mut commands: Commands) {
    commands.spawn((
        LevelNumberText,
        Text::new("Level 1"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING + PROGRESS_BAR_HEIGHT + 4.0),
            ..default()
        },
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                width: Val::Px(PROGRESS_BAR_WIDTH),
                height: Val::Px(PROGRESS_BAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                ProgressBarFill,
                Node {
                    width: Val::Percent(0.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.3, 0.75, 0.95)),
            ));
        });
}

pub(crate) fn update_level_number(
    progress: Res<LevelProgress>,
    mut query: Query<&mut Text, With<LevelNumberText>>,
) {
    if progress.is_changed() {
        for mut text in &mut query {
            **text = format!("Level {}", progress.current + 1);
        }
    }
}

pub(crate) fn update_progress_bar(
    run: Res<LevelRun>,
    player_query: Query<&Transform, With<Player>>,
    mut fill_query: Query<&mut Node, With<ProgressBarFill>>,
) {
    let Ok(transform) = player_query.single() else {
        return;
    };

    let fraction = run.fraction(transform.translation.x);
    for mut node in &mut fill_query {
        node.width = Val::Percent(fraction * 100.0);
    }
}
