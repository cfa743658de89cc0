use stride_animation::{
    ActionHandle, AnimationController, AnimationMixer, AnimationState, LoopMode,
};
use stride_assets::{ClipId, ClipRegistry};

/// Where the character is in the `Idle → Moving → Stopping → Idle` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionPhase {
    /// Idle clip playing, nothing held.
    #[default]
    Idle,
    /// An input-driven clip is playing.
    Moving,
    /// The one-shot stop clip is playing and will hand off to idle.
    Stopping,
}

/// The stop clip currently playing. At most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StopToken {
    action: ActionHandle,
}

/// Chooses which clip plays in response to input and drives the stop handoff.
#[derive(Debug, Clone)]
pub struct CharacterAnimator {
    controller: AnimationController,
    phase: LocomotionPhase,
    stop: Option<StopToken>,
    idle_clip: ClipId,
    stop_clip: ClipId,
}

impl CharacterAnimator {
    #[must_use]
    pub fn new(crossfade: f32, idle_clip: ClipId, stop_clip: ClipId) -> Self {
        Self {
            controller: AnimationController::new(crossfade),
            phase: LocomotionPhase::Idle,
            stop: None,
            idle_clip,
            stop_clip,
        }
    }

    #[must_use]
    pub fn phase(&self) -> LocomotionPhase {
        self.phase
    }

    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        self.controller.state()
    }

    #[must_use]
    pub fn active_action(&self) -> Option<ActionHandle> {
        self.controller.active()
    }

    /// Whether a stop clip is pending completion.
    #[must_use]
    pub fn stop_pending(&self) -> bool {
        self.stop.is_some()
    }

    #[must_use]
    pub fn stop_action(&self) -> Option<ActionHandle> {
        self.stop.map(|token| token.action)
    }

    fn switch(
        &mut self,
        mixer: &mut AnimationMixer,
        registry: &ClipRegistry,
        clip: ClipId,
        loop_mode: LoopMode,
    ) -> bool {
        let target = registry.action(clip);
        if target.is_none() {
            log::debug!("Clip '{clip}' is not loaded; switch ignored");
        }
        self.controller.switch_to(mixer, target, loop_mode)
    }

    /// Plays a looping input clip (movement, sprint, jump, gestures) and enters `Moving`.
    ///
    /// A pending stop clip is abandoned even when `clip` itself is not loaded yet.
    pub fn play_input_clip(
        &mut self,
        mixer: &mut AnimationMixer,
        registry: &ClipRegistry,
        clip: ClipId,
    ) -> bool {
        if self.stop.take().is_some() {
            log::debug!("Stop clip abandoned for '{clip}'");
        }
        self.phase = LocomotionPhase::Moving;
        self.switch(mixer, registry, clip, LoopMode::Repeat)
    }

    /// Starts the one-shot stop clip after the last movement key was released.
    ///
    /// Only acts from `Moving`; a second request while a stop clip is pending
    /// is ignored. Without a loaded stop clip the character goes straight to idle.
    pub fn request_stop(&mut self, mixer: &mut AnimationMixer, registry: &ClipRegistry) -> bool {
        if self.phase != LocomotionPhase::Moving || self.stop.is_some() {
            return false;
        }

        let Some(stop_action) = registry.action(self.stop_clip) else {
            log::debug!("Stop clip '{}' is not loaded; going straight to idle", self.stop_clip);
            self.enter_idle(mixer, registry);
            return true;
        };

        if self.controller.active() == Some(stop_action) {
            // Left active by a cancelled stop whose replacement clip never loaded.
            if let Some(action) = mixer.action_mut(stop_action) {
                action.reset();
                action.set_loop(LoopMode::Once);
                action.clamp_when_finished = true;
                action.play();
            }
        } else {
            if let Some(action) = mixer.action_mut(stop_action) {
                action.clamp_when_finished = true;
            }
            self.switch(mixer, registry, self.stop_clip, LoopMode::Once);
        }
        self.stop = Some(StopToken {
            action: stop_action,
        });
        self.phase = LocomotionPhase::Stopping;
        true
    }

    /// Handles a mixer `Finished` notification. Only the pending stop clip's
    /// completion matters; it hands off to the idle clip.
    pub fn on_action_finished(
        &mut self,
        mixer: &mut AnimationMixer,
        registry: &ClipRegistry,
        action: ActionHandle,
    ) -> bool {
        match self.stop {
            Some(token) if token.action == action => {
                self.stop = None;
                self.enter_idle(mixer, registry);
                true
            }
            _ => false,
        }
    }

    /// Starts the idle clip the moment it loads, unless the user is already
    /// driving the character.
    pub fn on_clip_ready(
        &mut self,
        mixer: &mut AnimationMixer,
        registry: &ClipRegistry,
        clip: ClipId,
    ) {
        if clip == self.idle_clip
            && self.phase == LocomotionPhase::Idle
            && self.controller.active().is_none()
        {
            self.switch(mixer, registry, clip, LoopMode::Repeat);
        }
    }

    fn enter_idle(&mut self, mixer: &mut AnimationMixer, registry: &ClipRegistry) {
        self.phase = LocomotionPhase::Idle;
        self.switch(mixer, registry, self.idle_clip, LoopMode::Repeat);
        log::debug!("Locomotion idle");
    }

    /// Refreshes crossfade bookkeeping after the mixer advanced.
    pub fn update(&mut self, mixer: &AnimationMixer) {
        self.controller.update(mixer);
    }
}
