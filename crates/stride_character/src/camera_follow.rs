use glam::Vec3;
use stride_scene::Camera;

/// Snaps the camera to a fixed offset from the character and aims it there.
///
/// There is no smoothing. While disabled the camera is left alone so orbit
/// controls can own it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFollower {
    pub enabled: bool,
    pub offset: Vec3,
}

impl CameraFollower {
    #[must_use]
    pub fn new(offset: Vec3, enabled: bool) -> Self {
        Self { enabled, offset }
    }

    /// Returns whether the camera was moved.
    pub fn update(&self, camera: &mut Camera, target: Vec3) -> bool {
        if !self.enabled {
            return false;
        }
        camera.set_position(target + self.offset);
        camera.look_at(target);
        true
    }
}
