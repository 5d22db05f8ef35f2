//! UI domain: overlay text and hide-delay tests.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::hud_wallet::coin_label;
use super::screens::{overlay_detail, switch_overlays, tick_overlay_hide};
use super::{OVERLAY_HIDE_DELAY_SECS, OverlayHideDelay, OverlayKind};
use crate::core::GameState;
use crate::levels::{LevelProgress, LevelSelection};
use crate::rewards::{PlayerWallet, RunLoot};

#[test]
fn test_overlay_per_state() {
    assert_eq!(OverlayKind::for_state(GameState::Menu), Some(OverlayKind::Menu));
    assert_eq!(OverlayKind::for_state(GameState::Won), Some(OverlayKind::Won));
    assert_eq!(OverlayKind::for_state(GameState::Lost), Some(OverlayKind::Lost));
    assert_eq!(OverlayKind::for_state(GameState::Playing), None);
    assert_eq!(OverlayKind::for_state(GameState::Boot), None);
}

#[test]
fn test_hide_delay_fires_once_elapsed() {
    let mut delay = OverlayHideDelay::default();
    assert!(!delay.tick(Duration::from_secs_f32(OVERLAY_HIDE_DELAY_SECS * 0.5)));
    assert!(delay.tick(Duration::from_secs_f32(OVERLAY_HIDE_DELAY_SECS)));
}

#[test]
fn test_won_detail_points_to_next_level_or_menu() {
    let wallet = PlayerWallet { coins: 40 };
    let loot = RunLoot {
        pending_coins: 0,
        diamonds: 2,
    };

    let mut progress = LevelProgress::new(2);
    progress.complete_current();
    let detail = overlay_detail(OverlayKind::Won, &progress, &LevelSelection::default(), &loot, &wallet);
    assert!(detail.contains("Diamonds: 2"));
    assert!(detail.contains("next level"));

    progress.start(1);
    let detail = overlay_detail(OverlayKind::Won, &progress, &LevelSelection::default(), &loot, &wallet);
    assert!(detail.contains("menu"));
}

#[test]
fn test_lost_detail_names_current_level() {
    let progress = LevelProgress::new(3);
    let detail = overlay_detail(
        OverlayKind::Lost,
        &progress,
        &LevelSelection::default(),
        &RunLoot::default(),
        &PlayerWallet::default(),
    );
    assert_eq!(detail, "Tap to retry level 1");
}

#[test]
fn test_coin_label_shows_pending_loot() {
    let wallet = PlayerWallet { coins: 12 };
    assert_eq!(coin_label(&wallet, &RunLoot::default()), "12");

    let mut loot = RunLoot::default();
    loot.collect_diamond(5);
    assert_eq!(coin_label(&wallet, &loot), "12 (+5)");
}

#[test]
fn test_menu_detail_shows_selected_level() {
    let mut progress = LevelProgress::new(4);
    progress.set_last_unlocked(2);
    let selection = LevelSelection { index: 1 };
    let detail = overlay_detail(
        OverlayKind::Menu,
        &progress,
        &selection,
        &RunLoot::default(),
        &PlayerWallet::default(),
    );
    assert!(detail.starts_with("< Level 2 >  (3 unlocked)"));
}

fn overlay_world(state: GameState) -> World {
    let mut world = World::new();
    world.insert_resource(State::new(state));
    world.insert_resource(LevelProgress::new(2));
    world.init_resource::<LevelSelection>();
    world.init_resource::<RunLoot>();
    world.init_resource::<PlayerWallet>();
    world.init_resource::<Time<Real>>();
    world
}

fn set_state(world: &mut World, state: GameState) {
    *world.resource_mut::<State<GameState>>() = State::new(state);
}

#[test]
fn test_reopening_overlay_cancels_pending_hide() {
    let mut world = overlay_world(GameState::Won);
    let won = world.spawn((OverlayKind::Won, Visibility::Hidden)).id();
    world.spawn((OverlayKind::Menu, Visibility::Hidden));

    world.run_system_once(switch_overlays).expect("switch runs");
    assert_eq!(world.get::<Visibility>(won), Some(&Visibility::Visible));

    set_state(&mut world, GameState::Menu);
    world.run_system_once(switch_overlays).expect("switch runs");
    assert!(world.get::<OverlayHideDelay>(won).is_some());

    set_state(&mut world, GameState::Won);
    world.run_system_once(switch_overlays).expect("switch runs");
    assert!(world.get::<OverlayHideDelay>(won).is_none());

    world.run_system_once(tick_overlay_hide).expect("tick runs");
    assert_eq!(world.get::<Visibility>(won), Some(&Visibility::Visible));
}
