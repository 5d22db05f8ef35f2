//! Rewards domain: coins, diamonds and skins.

mod economy;
mod skins;
#[cfg(test)]
mod tests;

pub use economy::{DiamondCollectedEvent, PlayerWallet, RunLoot};
pub use skins::{SkinCollection, SkinError, skin_color};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{AudioCue, PlayCue};
use crate::content::ContentRegistry;
use crate::core::GameState;
use crate::gravity::Player;
use crate::persistence::SaveProfileRequest;
use crate::rewards::economy::process_diamond_events;

pub struct RewardsPlugin;

impl Plugin for RewardsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerWallet>()
            .init_resource::<RunLoot>()
            .init_resource::<SkinCollection>()
            .add_message::<DiamondCollectedEvent>()
            .add_systems(Update, (process_diamond_events, apply_equipped_skin))
            .add_systems(Update, handle_shop_keys.run_if(in_state(GameState::Menu)));
    }
}

/// Tint the player with the active skin whenever the collection changes or
/// a new player spawns.
fn apply_equipped_skin(
    skins: Res<SkinCollection>,
    registry: Option<Res<ContentRegistry>>,
    mut players: Query<(&mut Sprite, Ref<Player>)>,
) {
    let Some(registry) = registry else {
        return;
    };

    let color = skin_color(skins.active(&registry));
    for (mut sprite, player) in &mut players {
        if skins.is_changed() || player.is_added() {
            sprite.color = color;
        }
    }
}

/// Menu shop: [B] buys the cheapest skin not yet owned, [E] equips the next
/// owned skin.
fn handle_shop_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    registry: Option<Res<ContentRegistry>>,
    mut skins: ResMut<SkinCollection>,
    mut wallet: ResMut<PlayerWallet>,
    mut cues: MessageWriter<PlayCue>,
    mut saves: MessageWriter<SaveProfileRequest>,
) {
    let Some(registry) = registry else {
        return;
    };

    if keyboard.just_pressed(KeyCode::KeyB) {
        if let Some(id) = skins.next_for_sale(&registry).map(|skin| skin.id.clone()) {
            match skins.try_buy(&id, &registry, &mut wallet) {
                Ok(()) => {
                    info!("Bought skin '{}' ({} coins left)", id, wallet.coins);
                    cues.write(PlayCue(AudioCue::SkinSelect));
                    saves.write(SaveProfileRequest);
                }
                Err(e) => info!("Cannot buy skin: {}", e),
            }
        } else {
            info!("Every skin is already owned");
        }
    }

    if keyboard.just_pressed(KeyCode::KeyE)
        && let Some(id) = skins.next_owned(&registry).map(|skin| skin.id.clone())
    {
        match skins.equip(&id, &registry) {
            Ok(()) => {
                info!("Equipped skin '{}'", id);
                cues.write(PlayCue(AudioCue::SkinSelect));
                saves.write(SaveProfileRequest);
            }
            Err(e) => warn!("Cannot equip skin: {}", e),
        }
    }
}
