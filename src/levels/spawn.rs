//! Levels domain: building a level's entities from its definition.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{BoxDef, LevelDef};
use crate::gravity::{GameLayer, GravityController, Ground, PLAYER_RADIUS, Player};
use crate::levels::components::{Diamond, FinishZone, LevelEntity, LoseZone};

const GROUND_COLOR: Color = Color::srgb(0.35, 0.38, 0.45);
const HAZARD_COLOR: Color = Color::srgb(0.85, 0.2, 0.2);
const FINISH_COLOR: Color = Color::srgba(0.2, 0.85, 0.35, 0.6);
const DIAMOND_COLOR: Color = Color::srgb(0.3, 0.9, 1.0);
const DIAMOND_SIZE: f32 = 0.35;

fn box_transform(def: &BoxDef, z: f32) -> Transform {
    Transform::from_xyz(def.center.x, def.center.y, z)
        .with_rotation(Quat::from_rotation_z(def.rotation_degrees.to_radians()))
}

fn sensor_bundle(collider: Collider) -> impl Bundle {
    (
        collider,
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    )
}

/// Spawn the static geometry, triggers and pickups of `level`.
pub fn spawn_level_geometry(commands: &mut Commands, level: &LevelDef) {
    for ground in &level.ground {
        commands.spawn((
            LevelEntity,
            Ground,
            Sprite {
                color: GROUND_COLOR,
                custom_size: Some(Vec2::from(ground.size)),
                ..default()
            },
            box_transform(ground, 0.0),
            RigidBody::Static,
            Collider::rectangle(ground.size.x, ground.size.y),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ));
    }

    for hazard in &level.hazards {
        commands.spawn((
            LevelEntity,
            LoseZone,
            Sprite {
                color: HAZARD_COLOR,
                custom_size: Some(Vec2::from(hazard.size)),
                ..default()
            },
            box_transform(hazard, 0.5),
            sensor_bundle(Collider::rectangle(hazard.size.x, hazard.size.y)),
        ));
    }

    for diamond in &level.diamonds {
        commands.spawn((
            LevelEntity,
            Diamond {
                coins: diamond.coins,
            },
            Sprite {
                color: DIAMOND_COLOR,
                custom_size: Some(Vec2::splat(DIAMOND_SIZE)),
                ..default()
            },
            Transform::from_xyz(diamond.position.x, diamond.position.y, 0.5)
                .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4)),
            sensor_bundle(Collider::circle(DIAMOND_SIZE * 0.5)),
        ));
    }

    let finish = &level.finish;
    commands.spawn((
        LevelEntity,
        FinishZone,
        Sprite {
            color: FINISH_COLOR,
            custom_size: Some(Vec2::from(finish.size)),
            ..default()
        },
        box_transform(finish, 0.5),
        sensor_bundle(Collider::rectangle(finish.size.x, finish.size.y)),
    ));
}

/// Spawn the player ball at the level's spawn point. Gravity is driven by
/// the controller, so the engine's own gravity is switched off.
pub fn spawn_player(commands: &mut Commands, level: &LevelDef, controller: GravityController) {
    commands.spawn((
        LevelEntity,
        Player,
        controller,
        Sprite {
            custom_size: Some(Vec2::splat(PLAYER_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_xyz(level.spawn.x, level.spawn.y, 1.0),
        (
            RigidBody::Dynamic,
            Collider::circle(PLAYER_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            GravityScale(0.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    ));
}
