use std::sync::Arc;

use crate::clip::AnimationClip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Play to the end, then stop (or hold the last pose when clamped).
    Once,
    /// Wrap around to the start forever.
    Repeat,
}

impl LoopMode {
    #[must_use]
    pub fn from_repeat(repeat: bool) -> Self {
        if repeat { Self::Repeat } else { Self::Once }
    }
}

/// Something an action reports back from [`AnimationAction::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEvent {
    /// A `LoopMode::Once` playback reached its end.
    Finished,
    /// A `LoopMode::Repeat` playback wrapped around.
    Looped,
}

#[derive(Debug, Clone, Copy)]
struct Fade {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl Fade {
    fn level(&self) -> f32 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Playback state of one clip inside a mixer.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    /// Base blend weight, multiplied by the fade level.
    pub weight: f32,
    pub loop_mode: LoopMode,
    /// Hold the last pose after a `Once` playback instead of disabling.
    pub clamp_when_finished: bool,
    pub paused: bool,
    pub enabled: bool,

    running: bool,
    fade_level: f32,
    fade: Option<Fade>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Repeat,
            clamp_when_finished: false,
            paused: false,
            enabled: true,
            running: false,
            fade_level: 1.0,
            fade: None,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Whether the action has been started and not yet stopped or faded out.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running && self.enabled
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Weight the renderer should blend this action's pose with.
    #[must_use]
    pub fn effective_weight(&self) -> f32 {
        if self.is_running() {
            self.weight * self.fade_level
        } else {
            0.0
        }
    }

    pub fn play(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.fade = None;
        self.reset();
    }

    /// Rewinds to the start, clears pause, re-enables and cancels any fade.
    pub fn reset(&mut self) {
        self.paused = false;
        self.enabled = true;
        self.time = 0.0;
        self.fade = None;
        self.fade_level = 1.0;
    }

    pub fn set_loop(&mut self, mode: LoopMode) {
        self.loop_mode = mode;
    }

    pub fn fade_in(&mut self, duration: f32) {
        self.schedule_fade(0.0, 1.0, duration);
    }

    /// Fades from the current level to zero, then disables the action.
    pub fn fade_out(&mut self, duration: f32) {
        self.schedule_fade(self.fade_level, 0.0, duration);
    }

    fn schedule_fade(&mut self, from: f32, to: f32, duration: f32) {
        if duration <= 0.0 {
            self.fade = None;
            self.apply_fade_level(to);
            return;
        }
        self.fade_level = from;
        self.fade = Some(Fade {
            from,
            to,
            elapsed: 0.0,
            duration,
        });
    }

    fn apply_fade_level(&mut self, level: f32) {
        self.fade_level = level;
        if level <= 0.0 {
            self.enabled = false;
        }
    }

    /// Advances fades and local time by `dt` seconds.
    ///
    /// Fades run on mixer time and keep going while the action is paused.
    pub fn update(&mut self, dt: f32) -> Option<ActionEvent> {
        if !self.is_running() {
            return None;
        }

        if let Some(fade) = self.fade.as_mut() {
            fade.elapsed += dt;
            let level = fade.level();
            let done = fade.is_done();
            if done {
                self.fade = None;
            }
            self.apply_fade_level(level);
            if !self.enabled {
                return None;
            }
        }

        if self.paused {
            return None;
        }

        let duration = self.clip.duration;
        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration || duration <= 0.0 {
                    self.time = duration;
                    if self.clamp_when_finished {
                        self.paused = true;
                    } else {
                        self.enabled = false;
                    }
                    return Some(ActionEvent::Finished);
                }
                if self.time < 0.0 {
                    self.time = 0.0;
                }
                None
            }
            LoopMode::Repeat => {
                if duration <= 0.0 {
                    self.time = 0.0;
                    return None;
                }
                if self.time >= duration {
                    self.time %= duration;
                    return Some(ActionEvent::Looped);
                }
                if self.time < 0.0 {
                    self.time = duration + (self.time % duration);
                }
                None
            }
        }
    }
}
