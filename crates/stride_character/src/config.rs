//! Viewer Configuration
//!
//! Every tunable of the viewer lives in [`ViewerConfig`]. All fields have
//! defaults matching the shipped demo, so a config file only needs to list
//! what it changes:
//!
//! ```json
//! {
//!     "fast_speed": 500.0,
//!     "follow_camera": false,
//!     "bindings": { "sprint": { "key": "Control", "clip": "Fast Run" } }
//! }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use stride_animation::DEFAULT_CROSSFADE;
use stride_assets::ClipId;
use stride_core::errors::{Result, StrideError};
use stride_core::input::Key;

use crate::input::MoveDirection;

/// A key and the clip it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipBinding {
    pub key: Key,
    pub clip: ClipId,
}

impl ClipBinding {
    #[must_use]
    pub const fn new(key: Key, clip: ClipId) -> Self {
        Self { key, clip }
    }
}

/// What a bound key does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundAction {
    Move(MoveDirection),
    Sprint,
    Jump,
    Takedown,
    Gesture(ClipId),
    ToggleFollow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: ClipBinding,
    pub backward: ClipBinding,
    pub turn_right: ClipBinding,
    pub turn_left: ClipBinding,
    pub sprint: ClipBinding,
    pub jump: ClipBinding,
    pub takedown: ClipBinding,
    pub gestures: Vec<ClipBinding>,
    pub toggle_follow: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: ClipBinding::new(Key::W, ClipId::Walking),
            backward: ClipBinding::new(Key::S, ClipId::WalkBackward),
            turn_right: ClipBinding::new(Key::D, ClipId::TurnRight),
            turn_left: ClipBinding::new(Key::A, ClipId::TurnLeft),
            sprint: ClipBinding::new(Key::Shift, ClipId::FastRun),
            jump: ClipBinding::new(Key::Space, ClipId::Jump),
            takedown: ClipBinding::new(Key::U, ClipId::Takedown),
            gestures: vec![
                ClipBinding::new(Key::I, ClipId::Boxing),
                ClipBinding::new(Key::O, ClipId::Boxing1),
                ClipBinding::new(Key::J, ClipId::Boxing2),
                ClipBinding::new(Key::K, ClipId::Boxing3),
            ],
            toggle_follow: Key::C,
        }
    }
}

impl KeyBindings {
    fn movement(&self, direction: MoveDirection) -> &ClipBinding {
        match direction {
            MoveDirection::Forward => &self.forward,
            MoveDirection::Backward => &self.backward,
            MoveDirection::TurnRight => &self.turn_right,
            MoveDirection::TurnLeft => &self.turn_left,
        }
    }

    /// Maps a key to its action.
    #[must_use]
    pub fn resolve(&self, key: Key) -> Option<BoundAction> {
        if let Some(direction) = MoveDirection::PRECEDENCE
            .into_iter()
            .find(|&d| self.movement(d).key == key)
        {
            return Some(BoundAction::Move(direction));
        }
        if self.sprint.key == key {
            return Some(BoundAction::Sprint);
        }
        if self.jump.key == key {
            return Some(BoundAction::Jump);
        }
        if self.takedown.key == key {
            return Some(BoundAction::Takedown);
        }
        if let Some(gesture) = self.gestures.iter().find(|g| g.key == key) {
            return Some(BoundAction::Gesture(gesture.clip));
        }
        (self.toggle_follow == key).then_some(BoundAction::ToggleFollow)
    }

    /// The clip an action starts, if it starts one.
    #[must_use]
    pub fn clip_for(&self, action: BoundAction) -> Option<ClipId> {
        match action {
            BoundAction::Move(direction) => Some(self.movement(direction).clip),
            BoundAction::Sprint => Some(self.sprint.clip),
            BoundAction::Jump => Some(self.jump.clip),
            BoundAction::Takedown => Some(self.takedown.clip),
            BoundAction::Gesture(clip) => Some(clip),
            BoundAction::ToggleFollow => None,
        }
    }

    /// Every bound key, for duplicate detection.
    fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        [
            self.forward.key,
            self.backward.key,
            self.turn_right.key,
            self.turn_left.key,
            self.sprint.key,
            self.jump.key,
            self.takedown.key,
            self.toggle_follow,
        ]
        .into_iter()
        .chain(self.gestures.iter().map(|g| g.key))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Walking speed, scene units per second.
    pub normal_speed: f32,
    /// Speed while the sprint key is held.
    pub fast_speed: f32,
    /// Subtracted from `normal_speed` while the jump key is held.
    pub jump_speed_penalty: f32,
    /// Turn rate in radians per second.
    pub turn_rate: f32,
    /// Crossfade window between clips, seconds.
    pub crossfade: f32,
    /// Camera position relative to the character while following.
    pub camera_offset: Vec3,
    /// Whether the camera starts in follow mode.
    pub follow_camera: bool,
    /// Directory (or base URL) clip manifests are loaded from.
    pub asset_root: String,
    pub idle_clip: ClipId,
    pub stop_clip: ClipId,
    pub bindings: KeyBindings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            normal_speed: 250.0,
            fast_speed: 400.0,
            jump_speed_penalty: 200.0,
            turn_rate: std::f32::consts::FRAC_PI_4,
            crossfade: DEFAULT_CROSSFADE,
            camera_offset: Vec3::new(150.0, 250.0, 350.0),
            follow_camera: true,
            asset_root: "assets/clips".to_string(),
            idle_clip: ClipId::SadIdle,
            stop_clip: ClipId::StopTwist,
            bindings: KeyBindings::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded viewer config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let speeds = [
            ("normal_speed", self.normal_speed),
            ("fast_speed", self.fast_speed),
            ("jump_speed_penalty", self.jump_speed_penalty),
            ("turn_rate", self.turn_rate),
            ("crossfade", self.crossfade),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(StrideError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !self.camera_offset.is_finite() {
            return Err(StrideError::Config("camera_offset must be finite".to_string()));
        }

        let mut seen: Vec<Key> = Vec::new();
        for key in self.bindings.keys() {
            if seen.contains(&key) {
                return Err(StrideError::Config(format!("key {key:?} is bound more than once")));
            }
            seen.push(key);
        }
        Ok(())
    }
}
