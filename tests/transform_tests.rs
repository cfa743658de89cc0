//! Transform / Camera Tests
//!
//! Tests for:
//! - Transform translation, yaw rotation and look_at
//! - Camera aspect and view matrix
//! - OrbitControls idle behavior and syncing from an existing camera

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Quat, Vec3};

use stride::input::{ButtonState, Input, MouseButton};
use stride::{Camera, OrbitControls, Transform};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// ============================================================================
// Transform Unit Tests
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::default();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
    assert!(vec3_approx_eq(t.forward(), Vec3::Z));
}

#[test]
fn translate_on_axis_uses_local_space() {
    let mut t = Transform::new();
    t.rotation = Quat::from_rotation_y(PI);
    t.translate_on_axis(Vec3::X * 3.0, 2.0);
    assert!(vec3_approx_eq(t.position, Vec3::new(-2.0, 0.0, 0.0)));
}

#[test]
fn rotate_y_accumulates() {
    let mut t = Transform::new();
    t.rotate_y(0.25);
    t.rotate_y(0.5);
    assert!(approx_eq(t.yaw(), 0.75));
    assert!(approx_eq(t.rotation.length(), 1.0));
}

#[test]
fn look_at_points_negative_z_at_target() {
    let mut t = Transform::from_position(Vec3::new(0.0, 0.0, 10.0));
    t.look_at(Vec3::ZERO, Vec3::Y);
    assert!(vec3_approx_eq(t.rotation * Vec3::NEG_Z, Vec3::NEG_Z));

    let mut t = Transform::from_position(Vec3::new(10.0, 0.0, 0.0));
    t.look_at(Vec3::ZERO, Vec3::Y);
    assert!(vec3_approx_eq(t.rotation * Vec3::NEG_Z, Vec3::NEG_X));
}

#[test]
fn look_at_degenerate_leaves_rotation() {
    let mut t = Transform::from_position(Vec3::new(0.0, 5.0, 0.0));
    t.rotate_y(FRAC_PI_2);
    let before = t.rotation;

    t.look_at(Vec3::ZERO, Vec3::Y);
    assert_eq!(t.rotation, before);

    t.look_at(t.position, Vec3::Y);
    assert_eq!(t.rotation, before);
}

#[test]
fn local_matrix_applies_translation() {
    let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
    let p = t.local_matrix().transform_point3(Vec3::ZERO);
    assert!(vec3_approx_eq(p, Vec3::new(1.0, 2.0, 3.0)));
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn camera_defaults() {
    let camera = Camera::default();
    assert!(approx_eq(camera.fov, 65.0_f32.to_radians()));
    assert!(approx_eq(camera.near, 1.0));
    assert!(approx_eq(camera.far, 2000.0));
}

#[test]
fn camera_aspect_ignores_zero_height() {
    let mut camera = Camera::default();
    camera.set_aspect(800, 400);
    assert!(approx_eq(camera.aspect, 2.0));
    camera.set_aspect(800, 0);
    assert!(approx_eq(camera.aspect, 2.0));
}

#[test]
fn view_matrix_maps_target_onto_view_axis() {
    let mut camera = Camera::default();
    camera.set_position(Vec3::new(150.0, 250.0, 350.0));
    camera.look_at(Vec3::ZERO);

    let view_space = camera.view_matrix().transform_point3(Vec3::ZERO);
    assert!(view_space.x.abs() < 1e-2, "x = {}", view_space.x);
    assert!(view_space.y.abs() < 1e-2, "y = {}", view_space.y);
    assert!(view_space.z < 0.0);
}

// ============================================================================
// OrbitControls
// ============================================================================

#[test]
fn orbit_idle_frame_does_not_touch_camera() {
    let mut orbit = OrbitControls::new(Vec3::ZERO, 100.0);
    let mut transform = Transform::from_position(Vec3::new(3.0, 4.0, 5.0));
    let before = transform;

    let input = Input::new();
    assert!(!orbit.update(&mut transform, &input, 65.0, 0.016));
    assert_eq!(transform, before);
}

#[test]
fn orbit_sync_preserves_camera_position() {
    let mut orbit = OrbitControls::new(Vec3::ZERO, 10.0);
    let position = Vec3::new(150.0, 250.0, 350.0);
    let transform = Transform::from_position(position);

    orbit.sync_from(&transform, Vec3::ZERO);
    assert!(approx_eq(orbit.radius, position.length()));

    // A zoom step re-derives the position from the synced orbit.
    let mut input = Input::new();
    input.inject_resize(800, 600);
    input.inject_scroll(0.0, 1.0);
    let mut moved = transform;
    assert!(orbit.update(&mut moved, &input, 65.0, 0.016));
    let direction = moved.position.normalize();
    assert!(vec3_approx_eq(direction, position.normalize()));
    assert!(moved.position.length() < position.length());
}

#[test]
fn orbit_drag_rotates_around_center() {
    let mut orbit = OrbitControls::new(Vec3::ZERO, 10.0);
    orbit.enable_damping = false;
    let mut transform = Transform::from_position(Vec3::new(0.0, 0.0, 10.0));
    orbit.sync_from(&transform, Vec3::ZERO);

    let mut input = Input::new();
    input.inject_resize(800, 600);
    input.inject_mouse_button(MouseButton::Left, ButtonState::Pressed);
    input.inject_mouse_position(100.0, 100.0);
    input.inject_mouse_position(160.0, 100.0);

    assert!(orbit.update(&mut transform, &input, 65.0, 0.016));
    assert!(approx_eq(transform.position.length(), 10.0));
    assert!(transform.position.x.abs() > 0.1);
}
