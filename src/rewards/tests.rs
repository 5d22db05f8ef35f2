//! Rewards domain: tests for the wallet, run loot and skins.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::{PlayerWallet, RunLoot, SkinCollection, SkinError, handle_shop_keys};
use crate::audio::PlayCue;
use crate::content::{ContentRegistry, SkinDef};
use crate::persistence::SaveProfileRequest;

fn registry() -> ContentRegistry {
    let skin = |id: &str, price: u32, is_default: bool| SkinDef {
        id: id.to_string(),
        name: id.to_string(),
        price,
        color: [1.0, 1.0, 1.0],
        is_default,
    };

    let mut registry = ContentRegistry::builtin();
    registry.skins = vec![
        skin("classic", 0, true),
        skin("crimson", 50, false),
        skin("gold", 300, false),
    ];
    registry
}

#[test]
fn test_wallet_spend_requires_funds() {
    let mut wallet = PlayerWallet { coins: 30 };
    assert!(!wallet.spend(50));
    assert_eq!(wallet.coins, 30);
    assert!(wallet.spend(30));
    assert_eq!(wallet.coins, 0);
}

#[test]
fn test_wallet_add_saturates() {
    let mut wallet = PlayerWallet { coins: u32::MAX - 1 };
    wallet.add(10);
    assert_eq!(wallet.coins, u32::MAX);
}

#[test]
fn test_run_loot_banks_on_finish() {
    let mut loot = RunLoot::default();
    loot.collect_diamond(5);
    loot.collect_diamond(10);
    assert_eq!(loot.diamonds, 2);

    let mut wallet = PlayerWallet { coins: 1 };
    assert_eq!(loot.bank_into(&mut wallet), 15);
    assert_eq!(wallet.coins, 16);
    assert_eq!(loot.pending_coins, 0);
    // Diamond count stays for the win screen.
    assert_eq!(loot.diamonds, 2);
}

#[test]
fn test_run_loot_clear_discards_pending() {
    let mut loot = RunLoot::default();
    loot.collect_diamond(5);
    loot.clear();
    assert_eq!(loot, RunLoot::default());
}

#[test]
fn test_buy_skin_spends_coins() {
    let registry = registry();
    let mut skins = SkinCollection::default();
    let mut wallet = PlayerWallet { coins: 60 };

    skins.try_buy("crimson", &registry, &mut wallet).unwrap();

    assert_eq!(wallet.coins, 10);
    assert!(skins.purchased.contains("crimson"));
}

#[test]
fn test_buy_skin_refusals() {
    let registry = registry();
    let mut skins = SkinCollection::default();
    let mut wallet = PlayerWallet { coins: 100 };

    assert_eq!(
        skins.try_buy("gold", &registry, &mut wallet),
        Err(SkinError::InsufficientCoins {
            price: 300,
            coins: 100
        })
    );
    assert_eq!(
        skins.try_buy("classic", &registry, &mut wallet),
        Err(SkinError::AlreadyOwned("classic".to_string()))
    );
    assert_eq!(
        skins.try_buy("missing", &registry, &mut wallet),
        Err(SkinError::UnknownSkin("missing".to_string()))
    );
    assert_eq!(wallet.coins, 100);
}

#[test]
fn test_equip_requires_ownership() {
    let registry = registry();
    let mut skins = SkinCollection::default();

    assert_eq!(
        skins.equip("crimson", &registry),
        Err(SkinError::NotOwned("crimson".to_string()))
    );
    assert_eq!(skins.active(&registry).map(|s| s.id.as_str()), Some("classic"));

    skins.purchased.insert("crimson".to_string());
    skins.equip("crimson", &registry).unwrap();
    assert_eq!(skins.active(&registry).map(|s| s.id.as_str()), Some("crimson"));
}

#[test]
fn test_active_ignores_stale_equipped_skin() {
    let registry = registry();
    let skins = SkinCollection {
        equipped: Some("gold".to_string()),
        ..Default::default()
    };
    assert_eq!(skins.active(&registry).map(|s| s.id.as_str()), Some("classic"));
}

#[test]
fn test_next_for_sale_is_cheapest_unowned() {
    let registry = registry();
    let mut skins = SkinCollection::default();
    assert_eq!(
        skins.next_for_sale(&registry).map(|s| s.id.as_str()),
        Some("crimson")
    );

    skins.purchased.insert("crimson".to_string());
    skins.purchased.insert("gold".to_string());
    assert!(skins.next_for_sale(&registry).is_none());
}

#[test]
fn test_next_owned_cycles_in_catalog_order() {
    let registry = registry();
    let mut skins = SkinCollection::default();
    assert_eq!(skins.next_owned(&registry).map(|s| s.id.as_str()), Some("classic"));

    skins.purchased.insert("gold".to_string());
    assert_eq!(skins.next_owned(&registry).map(|s| s.id.as_str()), Some("gold"));

    skins.equip("gold", &registry).unwrap();
    assert_eq!(skins.next_owned(&registry).map(|s| s.id.as_str()), Some("classic"));
}

#[test]
fn test_equip_key_works_when_nothing_is_for_sale() {
    let mut skins = SkinCollection::default();
    skins.purchased.insert("crimson".to_string());
    skins.purchased.insert("gold".to_string());

    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyB);
    keyboard.press(KeyCode::KeyE);

    let mut world = World::new();
    world.insert_resource(registry());
    world.insert_resource(skins);
    world.insert_resource(keyboard);
    world.init_resource::<PlayerWallet>();
    world.init_resource::<Messages<PlayCue>>();
    world.init_resource::<Messages<SaveProfileRequest>>();

    world.run_system_once(handle_shop_keys).expect("shop keys run");

    let skins = world.resource::<SkinCollection>();
    assert_eq!(skins.equipped.as_deref(), Some("crimson"));
    assert_eq!(world.resource::<Messages<SaveProfileRequest>>().len(), 1);
}
