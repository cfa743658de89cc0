//! The character viewer proper.
//!
//! [`CharacterViewer`] is the single context object the host shell drives:
//! it receives key events, integrates finished clip loads, advances the
//! mixer, moves the character and points the camera. [`FrameLoop`] wraps it
//! with a clock and a [`FrameSink`] for render submission.
//!
//! ```rust,ignore
//! let mut viewer = CharacterViewer::new(ViewerConfig::default())?;
//! viewer.start_loading(Arc::new(ManifestLoader::new("assets/clips")));
//!
//! viewer.on_key_down(Key::W);
//! viewer.per_frame_update(1.0 / 60.0);
//! ```

pub mod animator;
pub mod camera_follow;
pub mod config;
pub mod frame;
pub mod input;
pub mod locomotion;
pub mod rig;
pub mod viewer;

pub use animator::{CharacterAnimator, LocomotionPhase};
pub use camera_follow::CameraFollower;
pub use config::{BoundAction, ClipBinding, KeyBindings, ViewerConfig};
pub use frame::{FrameLoop, FrameSink, FrameView, NullSink};
pub use input::{InputState, MoveDirection, MovementKeys, SpeedModifier};
pub use locomotion::{LocomotionUpdater, Motion};
pub use rig::{CharacterRig, ModelPart};
pub use viewer::CharacterViewer;
