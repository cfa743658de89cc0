use std::sync::Arc;

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::action::{ActionEvent, AnimationAction};
use crate::clip::AnimationClip;

new_key_type! {
    /// Stable handle to an action owned by an [`AnimationMixer`].
    pub struct ActionHandle;
}

/// Notification produced by [`AnimationMixer::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixerEvent {
    Finished { action: ActionHandle },
    Looped { action: ActionHandle },
}

impl MixerEvent {
    #[must_use]
    pub fn action(&self) -> ActionHandle {
        match *self {
            Self::Finished { action } | Self::Looped { action } => action,
        }
    }
}

pub type MixerEvents = SmallVec<[MixerEvent; 4]>;

/// Owns every action of one character and advances them together.
#[derive(Debug, Default)]
pub struct AnimationMixer {
    actions: SlotMap<ActionHandle, AnimationAction>,
    by_clip: FxHashMap<String, ActionHandle>,
    time: f32,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the action bound to `clip`, creating it on first use.
    ///
    /// Actions are keyed by clip name, so binding the same clip twice yields
    /// the same handle.
    pub fn clip_action(&mut self, clip: Arc<AnimationClip>) -> ActionHandle {
        if let Some(&handle) = self.by_clip.get(&clip.name) {
            return handle;
        }
        let name = clip.name.clone();
        let handle = self.actions.insert(AnimationAction::new(clip));
        self.by_clip.insert(name, handle);
        handle
    }

    #[must_use]
    pub fn existing_action(&self, clip_name: &str) -> Option<ActionHandle> {
        self.by_clip.get(clip_name).copied()
    }

    #[must_use]
    pub fn action(&self, handle: ActionHandle) -> Option<&AnimationAction> {
        self.actions.get(handle)
    }

    pub fn action_mut(&mut self, handle: ActionHandle) -> Option<&mut AnimationAction> {
        self.actions.get_mut(handle)
    }

    /// Total mixer time in seconds.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Actions currently contributing to the pose, with their blend weights.
    pub fn running_actions(&self) -> impl Iterator<Item = (ActionHandle, &AnimationAction)> {
        self.actions.iter().filter(|(_, a)| a.is_running())
    }

    pub fn stop_all(&mut self) {
        for action in self.actions.values_mut() {
            action.stop();
        }
    }

    /// Advances all running actions by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> MixerEvents {
        self.time += dt;

        let mut events = MixerEvents::new();
        for (handle, action) in &mut self.actions {
            match action.update(dt) {
                Some(ActionEvent::Finished) => {
                    events.push(MixerEvent::Finished { action: handle });
                }
                Some(ActionEvent::Looped) => {
                    events.push(MixerEvent::Looped { action: handle });
                }
                None => {}
            }
        }
        events
    }
}
