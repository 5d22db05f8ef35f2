//! UI domain: menu and level outcome overlays.

use std::time::Duration;

use bevy::prelude::*;

use crate::core::GameState;
use crate::levels::{LevelProgress, LevelSelection};
use crate::rewards::{PlayerWallet, RunLoot};

/// Seconds an overlay lingers after its state is left.
pub const OVERLAY_HIDE_DELAY_SECS: f32 = 0.2;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Menu,
    Won,
    Lost,
}

impl OverlayKind {
    pub fn for_state(state: GameState) -> Option<Self> {
        match state {
            GameState::Menu => Some(OverlayKind::Menu),
            GameState::Won => Some(OverlayKind::Won),
            GameState::Lost => Some(OverlayKind::Lost),
            GameState::Boot | GameState::Playing => None,
        }
    }

    fn title(self) -> &'static str {
        match self {
            OverlayKind::Menu => "FLIPSIDE",
            OverlayKind::Won => "LEVEL COMPLETE",
            OverlayKind::Lost => "YOU FELL",
        }
    }

    fn title_color(self) -> Color {
        match self {
            OverlayKind::Menu => Color::srgb(0.9, 0.9, 0.95),
            OverlayKind::Won => Color::srgb(0.3, 0.9, 0.45),
            OverlayKind::Lost => Color::srgb(0.8, 0.15, 0.15),
        }
    }
}

/// Secondary line of an overlay, rewritten each time it opens.
#[derive(Component, Debug)]
pub struct OverlayDetailText(pub OverlayKind);

/// Pending hide. Removing it before it fires cancels the hide.
#[derive(Component, Debug)]
pub struct OverlayHideDelay(pub Timer);

impl Default for OverlayHideDelay {
    fn default() -> Self {
        Self(Timer::from_seconds(OVERLAY_HIDE_DELAY_SECS, TimerMode::Once))
    }
}

impl OverlayHideDelay {
    /// Advance the delay; true once it has run out.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.0.tick(delta);
        self.0.remaining_secs() == 0.0
    }
}

pub(crate) fn overlay_detail(
    kind: OverlayKind,
    progress: &LevelProgress,
    selection: &LevelSelection,
    loot: &RunLoot,
    wallet: &PlayerWallet,
) -> String {
    match kind {
        OverlayKind::Menu => format!(
            "< Level {} >  ({} unlocked)    Tap to play    Coins: {}\n[Left/Right] choose level  [B] buy skin  [E] equip skin  [M] music  [S] sounds",
            selection.index.min(progress.last_unlocked) + 1,
            progress.last_unlocked + 1,
            wallet.coins
        ),
        OverlayKind::Won => {
            let next = if progress.next_level().is_some() {
                "Tap for the next level"
            } else {
                "Tap to return to the menu"
            };
            format!(
                "Diamonds: {}    Coins: {}\n{}",
                loot.diamonds, wallet.coins, next
            )
        }
        OverlayKind::Lost => format!("Tap to retry level {}", progress.current + 1),
    }
}

pub(crate) fn spawn_overlays(mut commands: Commands) {
    for kind in [OverlayKind::Menu, OverlayKind::Won, OverlayKind::Lost] {
        commands
            .spawn((
                kind,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    right: Val::Px(0.0),
                    top: Val::Px(0.0),
                    bottom: Val::Px(0.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    flex_direction: FlexDirection::Column,
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
                ZIndex(100),
                Visibility::Hidden,
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(kind.title()),
                    TextFont {
                        font_size: 64.0,
                        ..default()
                    },
                    TextColor(kind.title_color()),
                    Node {
                        margin: UiRect::bottom(Val::Px(32.0)),
                        ..default()
                    },
                ));

                parent.spawn((
                    OverlayDetailText(kind),
                    Text::new(""),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.7, 0.7, 0.75)),
                    TextLayout::new_with_justify(Justify::Center),
                ));
            });
    }
}

/// Open the overlay for the new state and schedule the others to close.
pub(crate) fn switch_overlays(
    mut commands: Commands,
    state: Res<State<GameState>>,
    progress: Res<LevelProgress>,
    selection: Res<LevelSelection>,
    loot: Res<RunLoot>,
    wallet: Res<PlayerWallet>,
    mut overlays: Query<(Entity, &OverlayKind, &mut Visibility, Has<OverlayHideDelay>)>,
    mut details: Query<(&mut Text, &OverlayDetailText)>,
) {
    let wanted = OverlayKind::for_state(*state.get());

    for (entity, kind, mut visibility, hiding) in &mut overlays {
        if Some(*kind) == wanted {
            *visibility = Visibility::Visible;
            if hiding {
                commands.entity(entity).remove::<OverlayHideDelay>();
            }
        } else if *visibility != Visibility::Hidden && !hiding {
            commands.entity(entity).insert(OverlayHideDelay::default());
        }
    }

    if let Some(kind) = wanted {
        for (mut text, detail) in &mut details {
            if detail.0 == kind {
                **text = overlay_detail(kind, &progress, &selection, &loot, &wallet);
            }
        }
    }
}

pub(crate) fn tick_overlay_hide(
    mut commands: Commands,
    time: Res<Time<Real>>,
    mut query: Query<(Entity, &mut OverlayHideDelay, &mut Visibility)>,
) {
    for (entity, mut delay, mut visibility) in &mut query {
        if delay.tick(time.delta()) {
            *visibility = Visibility::Hidden;
            commands.entity(entity).remove::<OverlayHideDelay>();
        }
    }
}
