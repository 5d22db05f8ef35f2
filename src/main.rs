mod audio;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod gravity;
mod levels;
mod persistence;
mod rewards;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Fixed physics rate; the controller's tuning is authored against it.
const PHYSICS_HZ: f64 = 50.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Flipside".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity::ZERO)
    .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        gravity::GravityPlugin,
        levels::LevelsPlugin,
        rewards::RewardsPlugin,
        audio::SoundPlugin,
        persistence::PersistencePlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
