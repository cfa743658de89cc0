use crate::action::LoopMode;
use crate::mixer::{ActionHandle, AnimationMixer};

/// Crossfade window used when no other duration is configured.
pub const DEFAULT_CROSSFADE: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationState {
    pub active: Option<ActionHandle>,
    pub previous: Option<ActionHandle>,
    /// The previous action is still fading out under the active one.
    pub transitioning: bool,
}

/// Keeps exactly one action active and crossfades between them.
#[derive(Debug, Clone)]
pub struct AnimationController {
    state: AnimationState,
    crossfade: f32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(DEFAULT_CROSSFADE)
    }
}

impl AnimationController {
    #[must_use]
    pub fn new(crossfade: f32) -> Self {
        Self {
            state: AnimationState::default(),
            crossfade: crossfade.max(0.0),
        }
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[must_use]
    pub fn active(&self) -> Option<ActionHandle> {
        self.state.active
    }

    #[must_use]
    pub fn crossfade(&self) -> f32 {
        self.crossfade
    }

    /// Makes `target` the active action.
    ///
    /// Returns `false` without touching anything when `target` is `None`,
    /// stale, or already active. Otherwise the current action starts fading
    /// out (it keeps playing underneath) while `target` is rewound and faded
    /// in over the same window.
    pub fn switch_to(
        &mut self,
        mixer: &mut AnimationMixer,
        target: Option<ActionHandle>,
        loop_mode: LoopMode,
    ) -> bool {
        let Some(target) = target else {
            return false;
        };
        if self.state.active == Some(target) {
            return false;
        }
        if mixer.action(target).is_none() {
            log::debug!("switch_to ignored: action {target:?} is not owned by this mixer");
            return false;
        }

        if let Some(current) = self.state.active
            && let Some(action) = mixer.action_mut(current)
        {
            action.fade_out(self.crossfade);
        }

        if let Some(action) = mixer.action_mut(target) {
            action.reset();
            action.fade_in(self.crossfade);
            action.set_loop(loop_mode);
            action.play();
        }

        self.state.previous = self.state.active;
        self.state.active = Some(target);
        self.state.transitioning = self.state.previous.is_some();
        true
    }

    /// Refreshes [`AnimationState::transitioning`] after the mixer advanced.
    pub fn update(&mut self, mixer: &AnimationMixer) {
        self.state.transitioning = self
            .state
            .previous
            .and_then(|prev| mixer.action(prev))
            .is_some_and(|prev| prev.is_fading() && prev.effective_weight() > 0.0);
    }
}
