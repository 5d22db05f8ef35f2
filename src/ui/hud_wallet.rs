//! UI domain: coin counter in the top-right corner.

use bevy::prelude::*;

use crate::rewards::{PlayerWallet, RunLoot};
use crate::ui::hud_progress::HUD_PADDING;

const COIN_COLOR: Color = Color::srgb(0.95, 0.8, 0.25);

#[derive(Component)]
pub struct CoinCounterText;

pub(crate) fn spawn_coin_counter(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            align_items: AlignItems::Center,
            column_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                CoinCounterText,
                Text::new("0"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(COIN_COLOR),
            ));
            row.spawn((
                Node {
                    width: Val::Px(14.0),
                    height: Val::Px(14.0),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor::all(COIN_COLOR),
            ));
        });
}

/// Banked coins, plus what this attempt has picked up so far.
pub(crate) fn coin_label(wallet: &PlayerWallet, loot: &RunLoot) -> String {
    match loot.pending_coins {
        0 => wallet.coins.to_string(),
        pending => format!("{} (+{})", wallet.coins, pending),
    }
}

pub(crate) fn refresh_coin_counter(
    wallet: Res<PlayerWallet>,
    loot: Res<RunLoot>,
    mut counters: Query<&mut Text, With<CoinCounterText>>,
) {
    if !wallet.is_changed() && !loot.is_changed() {
        return;
    }
    let label = coin_label(&wallet, &loot);
    for mut text in &mut counters {
        text.0.clone_from(&label);
    }
}
