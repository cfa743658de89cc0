use std::sync::Arc;

/// A named, pre-authored animation.
///
/// Pose data lives with the rendering engine; playback only needs the
/// clip's length.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    /// Asset path this clip was delivered by.
    pub source: String,
    /// Length in seconds.
    pub duration: f32,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            duration: duration.max(0.0),
        }
    }

    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
