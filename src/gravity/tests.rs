//! Gravity domain: unit tests for the controller against a scripted body.

use std::f32::consts::PI;

use bevy::prelude::*;

use super::{
    ActivationEdge, GravityController, GravitySign, GravityTuning, PhysicsBody, PointerSnapshot,
    SurfaceHit, TouchPhase, TuningError, clamp_speed, ease_angle, sample,
};

const DT: f32 = 1.0 / 50.0;
const RADIUS: f32 = 0.25;
const EPSILON: f32 = 1e-4;

/// Ball of radius `RADIUS` between an optional floor and ceiling. The body
/// does not integrate its own velocity, so positions only change through
/// the controller.
#[derive(Debug, Default)]
struct FakeBody {
    position: Vec2,
    velocity: Vec2,
    rotation: f32,
    floor_y: Option<f32>,
    ceiling_y: Option<f32>,
    surface_normal: Option<Vec2>,
    impulses: Vec<Vec2>,
}

impl FakeBody {
    fn resting_on_floor(normal: Vec2) -> Self {
        Self {
            position: Vec2::new(0.0, RADIUS + 0.01),
            floor_y: Some(0.0),
            surface_normal: Some(normal),
            ..default()
        }
    }

    fn airborne() -> Self {
        Self {
            position: Vec2::new(0.0, 10.0),
            ..default()
        }
    }

    fn floor_gap(&self) -> Option<f32> {
        self.floor_y.map(|y| self.position.y - RADIUS - y)
    }
}

impl PhysicsBody for FakeBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
    }

    fn mass(&self) -> f32 {
        1.0
    }

    fn cast(&self, direction: Dir2, max_distance: f32) -> Option<SurfaceHit> {
        let gap = if direction.y < 0.0 {
            self.floor_gap()?
        } else {
            self.ceiling_y? - (self.position.y + RADIUS)
        };

        if gap > max_distance {
            return None;
        }

        let default_normal = if direction.y < 0.0 { Vec2::Y } else { Vec2::NEG_Y };
        Some(SurfaceHit {
            distance: gap.max(0.0),
            normal: self.surface_normal.unwrap_or(default_normal),
        })
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulses.push(impulse);
        self.velocity += impulse / self.mass();
    }
}

fn controller() -> GravityController {
    GravityController::new(GravityTuning::default()).unwrap()
}

// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

#[test]
fn test_new_controller_starts_down_with_unit_boost() {
    let controller = controller();
    assert_eq!(controller.sign(), GravitySign::Down);
    assert_eq!(controller.state().current_boost(), 1.0);
    assert!(!controller.is_grounded());
    assert_eq!(controller.target_rotation(), 0.0);
}

#[test]
fn test_new_rejects_zero_collision_iterations() {
    let tuning = GravityTuning {
        collision_iterations: 0,
        ..default()
    };
    assert!(matches!(
        GravityController::new(tuning),
        Err(TuningError::NotPositive {
            field: "collision_iterations",
            ..
        })
    ));
}

#[test]
fn test_new_rejects_non_positive_probe_and_speed() {
    for tuning in [
        GravityTuning {
            ground_check_distance: 0.0,
            ..default()
        },
        GravityTuning {
            max_speed: -1.0,
            ..default()
        },
        GravityTuning {
            max_speed: f32::NAN,
            ..default()
        },
    ] {
        assert!(GravityController::new(tuning).is_err());
    }
}

#[test]
fn test_new_rejects_boost_below_one() {
    let tuning = GravityTuning {
        curve_boost_multiplier: 0.9,
        ..default()
    };
    assert_eq!(
        GravityController::new(tuning).unwrap_err(),
        TuningError::BoostBelowOne(0.9)
    );
}

// -----------------------------------------------------------------------------
// Input sampling
// -----------------------------------------------------------------------------

#[test]
fn test_sample_touch_began_is_an_edge() {
    let snapshot = PointerSnapshot {
        primary_touch: Some(TouchPhase::Began),
        mouse_just_pressed: false,
    };
    assert_eq!(sample(&snapshot), Some(ActivationEdge));
}

#[test]
fn test_sample_hold_is_not_an_edge() {
    let snapshot = PointerSnapshot {
        primary_touch: Some(TouchPhase::Held),
        mouse_just_pressed: false,
    };
    assert_eq!(sample(&snapshot), None);
}

#[test]
fn test_sample_touch_wins_over_mouse() {
    let snapshot = PointerSnapshot {
        primary_touch: Some(TouchPhase::Held),
        mouse_just_pressed: true,
    };
    assert_eq!(sample(&snapshot), None);
}

#[test]
fn test_sample_mouse_press_without_touch() {
    let snapshot = PointerSnapshot {
        primary_touch: None,
        mouse_just_pressed: true,
    };
    assert_eq!(sample(&snapshot), Some(ActivationEdge));
    assert_eq!(sample(&PointerSnapshot::default()), None);
}

// -----------------------------------------------------------------------------
// Flipping
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_flip_applies_single_release_impulse() {
    let mut controller = controller();
    let mut body = FakeBody::resting_on_floor(Vec2::Y);

    controller.on_physics_step(&mut body, DT);
    assert!(controller.is_grounded());

    let flip = controller
        .on_frame(Some(ActivationEdge), &mut body)
        .expect("edge flips gravity");

    let release = GravityTuning::default().surface_release_force;
    assert_eq!(flip.sign, GravitySign::Up);
    assert_eq!(controller.sign(), GravitySign::Up);
    assert_eq!(body.impulses, vec![Vec2::new(0.0, -release)]);
    assert_eq!(flip.release_impulse, Some(Vec2::new(0.0, -release)));
    assert_eq!(controller.target_rotation(), PI);
}

#[test]
fn test_airborne_flip_has_no_impulse() {
    let mut controller = controller();
    let mut body = FakeBody::airborne();

    controller.on_physics_step(&mut body, DT);
    let flip = controller.on_frame(Some(ActivationEdge), &mut body).unwrap();

    assert_eq!(flip.sign, GravitySign::Up);
    assert!(flip.release_impulse.is_none());
    assert!(body.impulses.is_empty());
}

#[test]
fn test_no_edge_does_not_flip() {
    let mut controller = controller();
    let mut body = FakeBody::resting_on_floor(Vec2::Y);
    controller.on_physics_step(&mut body, DT);

    assert!(controller.on_frame(None, &mut body).is_none());
    assert_eq!(controller.sign(), GravitySign::Down);
    assert!(body.impulses.is_empty());
}

#[test]
fn test_each_edge_toggles_once() {
    let mut controller = controller();
    let mut body = FakeBody::airborne();

    controller.on_frame(Some(ActivationEdge), &mut body);
    assert_eq!(controller.sign(), GravitySign::Up);
    controller.on_frame(None, &mut body);
    assert_eq!(controller.sign(), GravitySign::Up);
    controller.on_frame(Some(ActivationEdge), &mut body);
    assert_eq!(controller.sign(), GravitySign::Down);
}

#[test]
fn test_rapid_grounded_taps_are_not_debounced() {
    let mut controller = controller();
    let mut body = FakeBody::resting_on_floor(Vec2::Y);
    controller.on_physics_step(&mut body, DT);

    controller.on_frame(Some(ActivationEdge), &mut body);
    controller.on_frame(Some(ActivationEdge), &mut body);

    // Contact is only refreshed by the physics step, so both taps release.
    assert_eq!(body.impulses.len(), 2);
    assert_eq!(body.impulses[0].y, -body.impulses[1].y);
}

// -----------------------------------------------------------------------------
// Force integration
// -----------------------------------------------------------------------------

#[test]
fn test_airborne_step_applies_only_scaled_gravity() {
    let tuning = GravityTuning::default();
    let mut controller = controller();
    let mut body = FakeBody::airborne();
    body.velocity = Vec2::new(3.0, 0.0);

    controller.on_physics_step(&mut body, DT);

    let expected_dy = -tuning.gravity * tuning.base_gravity_scale * tuning.airborne_gravity_multiplier * DT;
    assert!(!controller.is_grounded());
    assert_eq!(body.velocity.x, 3.0);
    assert!((body.velocity.y - expected_dy).abs() < EPSILON);
    assert_eq!(controller.state().current_boost(), 1.0);
    assert_eq!(body.position, Vec2::new(0.0, 10.0));
}

#[test]
fn test_gravity_sign_follows_state() {
    let mut controller = controller();
    let mut body = FakeBody::airborne();
    assert!(controller.gravity_acceleration().y < 0.0);

    controller.on_frame(Some(ActivationEdge), &mut body);
    assert!(controller.gravity_acceleration().y > 0.0);
    assert_eq!(controller.gravity_acceleration().x, 0.0);
}

#[test]
fn test_grounded_flat_step_drives_right_and_presses_down() {
    let tuning = GravityTuning::default();
    let mut controller = controller();
    let mut body = FakeBody::resting_on_floor(Vec2::Y);

    controller.on_physics_step(&mut body, DT);

    let drive = tuning.move_right_force * 0.5 * DT;
    assert!((body.velocity.x - drive).abs() < EPSILON);

    let gravity = tuning.gravity * tuning.base_gravity_scale;
    let expected_dy = -(gravity + gravity * tuning.surface_attraction_force) * DT;
    assert!((body.velocity.y - expected_dy).abs() < EPSILON);
}

#[test]
fn test_speed_clamp_eases_toward_max_without_overshoot() {
    let mut controller = controller();
    let mut body = FakeBody::airborne();
    body.velocity = Vec2::new(10.0, 0.0);

    controller.on_physics_step(&mut body, DT);

    let speed = body.velocity.length();
    assert!(speed < 10.0);
    assert!(speed > 8.0);
}

#[test]
fn test_clamp_speed_skips_zero_velocity() {
    let mut body = FakeBody::airborne();
    clamp_speed(&mut body, 8.0, DT);
    assert_eq!(body.velocity, Vec2::ZERO);
}

#[test]
fn test_clamp_speed_keeps_direction() {
    let mut body = FakeBody::airborne();
    body.velocity = Vec2::new(-6.0, 8.0);

    clamp_speed(&mut body, 8.0, 1.0);

    assert!((body.velocity.length() - 8.0).abs() < EPSILON);
    assert!((body.velocity.normalize() - Vec2::new(-0.6, 0.8)).length() < EPSILON);
}

#[test]
fn test_slope_eases_boost_up_to_multiplier() {
    let tuning = GravityTuning::default();
    let mut controller = controller();
    let mut body = FakeBody::resting_on_floor(Vec2::new(0.5, 0.866));

    let mut previous = controller.state().current_boost();
    for _ in 0..500 {
        body.velocity = Vec2::ZERO;
        controller.on_physics_step(&mut body, DT);
        let boost = controller.state().current_boost();
        assert!(boost >= previous);
        assert!(boost <= tuning.curve_boost_multiplier);
        previous = boost;
    }

    assert!(previous > 1.19);
}

#[test]
fn test_boost_relaxes_on_flat_ground() {
    let mut controller = controller();
    let mut body = FakeBody::resting_on_floor(Vec2::new(0.5, 0.866));
    for _ in 0..100 {
        controller.on_physics_step(&mut body, DT);
    }
    let peak = controller.state().current_boost();
    assert!(peak > 1.0);

    body.surface_normal = Some(Vec2::Y);
    for _ in 0..100 {
        controller.on_physics_step(&mut body, DT);
        let boost = controller.state().current_boost();
        assert!((1.0..=peak).contains(&boost));
    }
    assert!(controller.state().current_boost() < peak);
}

#[test]
fn test_steeper_slope_pushes_harder() {
    // Without attraction the only horizontal force is the forward drive.
    let tuning = GravityTuning {
        surface_attraction_force: 0.0,
        ..default()
    };

    let mut flat_controller = GravityController::new(tuning).unwrap();
    let mut flat = FakeBody::resting_on_floor(Vec2::Y);
    flat_controller.on_physics_step(&mut flat, DT);

    let mut slope_controller = GravityController::new(tuning).unwrap();
    let mut slope = FakeBody::resting_on_floor(Vec2::new(0.5, 0.866));
    slope_controller.on_physics_step(&mut slope, DT);

    assert!(flat.velocity.x > 0.0);
    assert!(slope.velocity.x > flat.velocity.x);
}

// -----------------------------------------------------------------------------
// Penetration correction
// -----------------------------------------------------------------------------

#[test]
fn test_correction_settles_at_shell_radius() {
    let tuning = GravityTuning::default();
    let mut controller = controller();
    let mut body = FakeBody::resting_on_floor(Vec2::Y);
    body.position.y = RADIUS + 0.15;

    controller.on_physics_step(&mut body, DT);

    let gap = body.floor_gap().unwrap();
    assert!((gap - tuning.shell_radius).abs() < EPSILON);
}

#[test]
fn test_correction_never_pushes_against_cast_direction() {
    let mut controller = controller();
    let mut body = FakeBody::resting_on_floor(Vec2::Y);
    body.position.y = RADIUS - 0.05;

    controller.on_physics_step(&mut body, DT);

    assert_eq!(body.position.y, RADIUS - 0.05);
}

#[test]
fn test_correction_follows_inverted_gravity() {
    let tuning = GravityTuning::default();
    let mut controller = controller();
    let mut body = FakeBody {
        position: Vec2::new(0.0, 5.0),
        ceiling_y: Some(5.0 + RADIUS + 0.1),
        ..default()
    };

    controller.on_frame(Some(ActivationEdge), &mut body);
    controller.on_physics_step(&mut body, DT);

    assert!(controller.is_grounded());
    let gap = body.ceiling_y.unwrap() - (body.position.y + RADIUS);
    assert!((gap - tuning.shell_radius).abs() < EPSILON);
}

#[test]
fn test_airborne_step_skips_correction() {
    let mut controller = controller();
    let mut body = FakeBody::resting_on_floor(Vec2::Y);
    body.position.y = RADIUS + 1.0;

    controller.on_physics_step(&mut body, DT);

    assert!(!controller.is_grounded());
    assert_eq!(body.position.y, RADIUS + 1.0);
}

// -----------------------------------------------------------------------------
// Orientation
// -----------------------------------------------------------------------------

#[test]
fn test_rotation_eases_without_snapping() {
    let mut controller = controller();
    let mut body = FakeBody::airborne();
    controller.on_frame(Some(ActivationEdge), &mut body);

    controller.on_physics_step(&mut body, DT);
    let first = body.rotation;
    assert!(first > 0.0 && first < PI);

    for _ in 0..300 {
        controller.on_physics_step(&mut body, DT);
        assert!(body.rotation <= PI + EPSILON);
    }
    assert!((body.rotation - PI).abs() < 1e-3);
}

#[test]
fn test_ease_angle_takes_shortest_arc() {
    let eased = ease_angle(-3.0, 3.0, 0.5);
    // Halfway across the short arc through ±PI, not through zero.
    assert!(eased < -3.0);

    assert_eq!(ease_angle(0.0, PI, 0.5), PI / 2.0);
    assert_eq!(ease_angle(1.0, 1.0, 0.3), 1.0);
}
