use glam::{Vec2, Vec3};
use stride_core::input::{Input, MouseButton};

use crate::transform::Transform;

const PHI_EPS: f32 = 0.0001;
const REST_THRESHOLD: f32 = 1e-5;

/// Mouse-driven orbit camera: left-drag rotates, right-drag pans, wheel zooms.
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    pub center: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: 1.0,
            max_distance: 2000.0,

            center,
            radius,
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Re-derives the orbit around `center` from where `transform` currently is,
    /// so taking over a camera does not make it jump.
    pub fn sync_from(&mut self, transform: &Transform, center: Vec3) {
        let offset = transform.position - center;
        let radius = offset.length();
        self.center = center;
        self.rotate_delta = Vec2::ZERO;
        if radius <= f32::EPSILON {
            return;
        }
        self.radius = radius.clamp(self.min_distance, self.max_distance);
        self.theta = offset.x.atan2(offset.z);
        self.phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
    }

    fn spherical_offset(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }

    /// Applies this frame's mouse input to `transform`.
    ///
    /// Returns `false`, leaving `transform` untouched, when there is no input
    /// and no damped motion left to play out.
    pub fn update(
        &mut self,
        transform: &mut Transform,
        input: &Input,
        fov_degrees: f32,
        dt: f32,
    ) -> bool {
        let screen_height = input.screen_size().y.max(1.0);
        let cursor_delta = input.mouse_delta();
        let scroll = input.scroll_delta();
        let rotating = input.get_mouse_button(MouseButton::Left) && cursor_delta != Vec2::ZERO;
        let panning = input.get_mouse_button(MouseButton::Right) && cursor_delta != Vec2::ZERO;

        if !rotating
            && !panning
            && scroll.y == 0.0
            && self.rotate_delta.length_squared() < REST_THRESHOLD
        {
            self.rotate_delta = Vec2::ZERO;
            return false;
        }

        if rotating {
            let rotate_per_pixel = 2.0 * std::f32::consts::PI / screen_height;
            self.rotate_delta -= cursor_delta * rotate_per_pixel * self.rotate_speed;
        }

        if self.enable_damping {
            let target_fps = 60.0;
            let retention = (1.0 - self.damping_factor).powf(dt * target_fps);
            let delta_apply = self.rotate_delta * (1.0 - retention);

            self.theta += delta_apply.x;
            self.phi += delta_apply.y;

            self.rotate_delta *= retention;
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        self.phi = self.phi.clamp(PHI_EPS, std::f32::consts::PI - PHI_EPS);

        if scroll.y != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(scroll.y.abs());
            if scroll.y > 0.0 {
                self.radius *= scale;
            } else {
                self.radius /= scale;
            }
            self.radius = self.radius.clamp(self.min_distance, self.max_distance);
        }

        if panning {
            let half_fov = fov_degrees.to_radians() / 2.0;
            let target_world_height = 2.0 * self.radius * half_fov.tan();
            let pixels_to_world_ratio = target_world_height / screen_height;

            let forward = -self.spherical_offset().normalize();
            let right = forward.cross(Vec3::Y).normalize();
            let up = right.cross(forward).normalize();

            self.center += (right * -cursor_delta.x + up * cursor_delta.y)
                * pixels_to_world_ratio
                * self.pan_speed;
        }

        transform.position = self.center + self.spherical_offset();
        transform.look_at(self.center, Vec3::Y);
        true
    }
}
