//! UI domain: in-level HUD and the menu/outcome overlays.

mod hud_progress;
mod hud_wallet;
mod screens;
#[cfg(test)]
mod tests;

pub use screens::{OVERLAY_HIDE_DELAY_SECS, OverlayHideDelay, OverlayKind};

use bevy::prelude::*;

use crate::core::GameState;
use crate::levels::{LevelProgress, LevelSelection};
use crate::rewards::PlayerWallet;
use crate::ui::hud_progress::{spawn_progress_hud, update_level_number, update_progress_bar};
use crate::ui::hud_wallet::{refresh_coin_counter, spawn_coin_counter};
use crate::ui::screens::{spawn_overlays, switch_overlays, tick_overlay_hide};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_progress_hud, spawn_coin_counter, spawn_overlays),
        )
        .add_systems(
            Update,
            (
                update_level_number,
                update_progress_bar,
                refresh_coin_counter,
                switch_overlays.run_if(
                    state_changed::<GameState>
                        .or(resource_changed::<PlayerWallet>)
                        .or(resource_changed::<LevelProgress>)
                        .or(resource_changed::<LevelSelection>),
                ),
                tick_overlay_hide,
            ),
        );
    }
}
