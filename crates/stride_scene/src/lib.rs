//! Scene-side state the viewer mutates each frame.

pub mod camera;
pub mod orbit_control;
pub mod transform;

pub use camera::Camera;
pub use orbit_control::OrbitControls;
pub use transform::Transform;
