//! Locomotion Tests
//!
//! Tests for:
//! - LocomotionUpdater speeds per modifier
//! - Forward / backward translation and left / right turning
//! - One movement per frame when several keys are held
//! - CameraFollower snapping

use std::f32::consts::FRAC_PI_4;

use glam::Vec3;

use stride::character::{
    CameraFollower, InputState, KeyBindings, LocomotionUpdater, Motion, SpeedModifier,
    ViewerConfig,
};
use stride::input::Key;
use stride::{Camera, Transform};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON * 10.0
}

fn held(keys: &[Key]) -> InputState {
    let bindings = KeyBindings::default();
    let mut state = InputState::new();
    for &key in keys {
        state.on_key_down(key, &bindings);
    }
    state
}

// ============================================================================
// Speeds
// ============================================================================

#[test]
fn default_speeds() {
    let updater = LocomotionUpdater::default();
    assert!(approx(updater.speed(SpeedModifier::Normal), 250.0));
    assert!(approx(updater.speed(SpeedModifier::Fast), 400.0));
    assert!(approx(updater.speed(SpeedModifier::Short), 50.0));
}

#[test]
fn speeds_come_from_config() {
    let config = ViewerConfig {
        normal_speed: 100.0,
        fast_speed: 300.0,
        jump_speed_penalty: 30.0,
        ..ViewerConfig::default()
    };
    let updater = LocomotionUpdater::from_config(&config);
    assert!(approx(updater.speed(SpeedModifier::Short), 70.0));
    assert!(approx(updater.speed(SpeedModifier::Fast), 300.0));
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn forward_translates_along_local_z() {
    let updater = LocomotionUpdater::default();
    let mut transform = Transform::new();

    let motion = updater.update(&mut transform, &held(&[Key::W]), 0.1);
    assert_eq!(motion, Motion::Translate { distance: 25.0 });
    assert!(vec_approx(transform.position, Vec3::new(0.0, 0.0, 25.0)));

    updater.update(&mut transform, &held(&[Key::W]), 0.1);
    assert!(approx(transform.position.z, 50.0));
}

#[test]
fn backward_translates_along_negative_z() {
    let updater = LocomotionUpdater::default();
    let mut transform = Transform::new();

    updater.update(&mut transform, &held(&[Key::S]), 0.5);
    assert!(approx(transform.position.z, -125.0));
}

#[test]
fn forward_follows_heading() {
    let updater = LocomotionUpdater::default();
    let mut transform = Transform::new();
    transform.rotate_y(std::f32::consts::FRAC_PI_2);

    updater.update(&mut transform, &held(&[Key::W]), 0.1);
    assert!(vec_approx(transform.position, Vec3::new(25.0, 0.0, 0.0)));
}

#[test]
fn turn_right_is_negative_yaw() {
    let updater = LocomotionUpdater::default();
    let mut transform = Transform::new();

    let motion = updater.update(&mut transform, &held(&[Key::D]), 1.0);
    assert_eq!(motion, Motion::Rotate { angle: -FRAC_PI_4 });
    assert!(approx(transform.yaw(), -FRAC_PI_4));
    assert_eq!(transform.position, Vec3::ZERO);
}

#[test]
fn turn_left_is_positive_yaw() {
    let updater = LocomotionUpdater::default();
    let mut transform = Transform::new();

    updater.update(&mut transform, &held(&[Key::A]), 0.5);
    assert!(approx(transform.yaw(), FRAC_PI_4 * 0.5));
}

#[test]
fn forward_wins_over_turn() {
    let updater = LocomotionUpdater::default();
    let mut transform = Transform::new();

    let motion = updater.update(&mut transform, &held(&[Key::D, Key::W]), 0.1);
    assert_eq!(motion, Motion::Translate { distance: 25.0 });
    assert!(approx(transform.yaw(), 0.0));
}

#[test]
fn backward_wins_over_turns() {
    let updater = LocomotionUpdater::default();
    let mut transform = Transform::new();

    let motion = updater.update(&mut transform, &held(&[Key::A, Key::D, Key::S]), 0.1);
    assert_eq!(motion, Motion::Translate { distance: -25.0 });
}

#[test]
fn sprint_and_jump_speeds_apply() {
    let updater = LocomotionUpdater::default();

    let mut transform = Transform::new();
    updater.update(&mut transform, &held(&[Key::Shift, Key::W]), 0.1);
    assert!(approx(transform.position.z, 40.0));

    let mut transform = Transform::new();
    updater.update(&mut transform, &held(&[Key::W, Key::Space]), 0.1);
    assert!(approx(transform.position.z, 5.0));
}

#[test]
fn nothing_held_means_no_motion() {
    let updater = LocomotionUpdater::default();
    let mut transform = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
    let before = transform;

    assert_eq!(updater.update(&mut transform, &held(&[Key::Shift]), 0.1), Motion::None);
    assert_eq!(transform, before);
}

// ============================================================================
// CameraFollower
// ============================================================================

#[test]
fn follower_snaps_to_offset_and_aims() {
    let follower = CameraFollower::new(Vec3::new(150.0, 250.0, 350.0), true);
    let mut camera = Camera::default();
    let target = Vec3::new(10.0, 0.0, 40.0);

    assert!(follower.update(&mut camera, target));
    assert!(vec_approx(camera.position(), Vec3::new(160.0, 250.0, 390.0)));

    let expected = (target - camera.position()).normalize();
    assert!(vec_approx(camera.view_direction(), expected));
}

#[test]
fn disabled_follower_leaves_camera_alone() {
    let follower = CameraFollower::new(Vec3::new(150.0, 250.0, 350.0), false);
    let mut camera = Camera::default();
    camera.set_position(Vec3::new(-5.0, 5.0, 5.0));
    let before = camera;

    assert!(!follower.update(&mut camera, Vec3::new(100.0, 0.0, 0.0)));
    assert_eq!(camera, before);
}
