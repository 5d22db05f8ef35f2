//! Core domain: camera setup and virtual time control.

use bevy::prelude::*;

use crate::core::resources::GameplayPaused;
use crate::gravity::Player;

/// World units per screen pixel; levels are authored in meters.
pub const CAMERA_SCALE: f32 = 1.0 / 64.0;

/// Horizontal offset that keeps the runner left of screen center.
pub const CAMERA_LEAD: f32 = 4.0;

#[derive(Component, Debug)]
pub struct MainCamera;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Stop or restart virtual time (and with it the fixed physics step)
/// whenever the set of pause holds changes.
pub(crate) fn sync_virtual_time(paused: Res<GameplayPaused>, mut time: ResMut<Time<Virtual>>) {
    if !paused.is_changed() {
        return;
    }

    if paused.is_paused() && !time.is_paused() {
        time.pause();
        debug!(
            "Virtual time paused by {:?}",
            paused.holds().collect::<Vec<_>>()
        );
    } else if !paused.is_paused() && time.is_paused() {
        time.unpause();
        debug!("Virtual time resumed");
    }
}

/// Keep the camera on the player, leading in the run direction.
pub(crate) fn follow_player(
    player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };

    for mut transform in &mut camera {
        transform.translation.x = player_transform.translation.x + CAMERA_LEAD;
        transform.translation.y = player_transform.translation.y;
    }
}
