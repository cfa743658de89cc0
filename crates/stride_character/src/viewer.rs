use std::sync::Arc;

use glam::Vec3;
use stride_animation::{AnimationMixer, AnimationState, MixerEvent};
use stride_assets::{
    AssetCatalog, AssetLoadQueue, ClipId, ClipLoader, ClipRegistry, Integrated, LoadOutcome,
};
use stride_core::errors::Result;
use stride_core::input::Key;
use stride_scene::{Camera, Transform};

use crate::animator::{CharacterAnimator, LocomotionPhase};
use crate::camera_follow::CameraFollower;
use crate::config::{BoundAction, ViewerConfig};
use crate::frame::FrameView;
use crate::input::InputState;
use crate::locomotion::{LocomotionUpdater, Motion};
use crate::rig::CharacterRig;

/// Everything the viewer mutates, owned in one place.
///
/// Constructed at startup, driven by the host through the key handlers and
/// [`CharacterViewer::per_frame_update`], dropped at shutdown. Nothing else
/// holds on to its parts.
pub struct CharacterViewer {
    config: ViewerConfig,
    catalog: AssetCatalog,
    queue: AssetLoadQueue,
    registry: ClipRegistry,
    mixer: AnimationMixer,
    animator: CharacterAnimator,
    input: InputState,
    locomotion: LocomotionUpdater,
    follower: CameraFollower,
    rig: CharacterRig,
    camera: Camera,
    last_motion: Motion,
}

impl CharacterViewer {
    pub fn new(config: ViewerConfig) -> Result<Self> {
        Self::with_catalog(config, AssetCatalog::default())
    }

    pub fn with_catalog(config: ViewerConfig, catalog: AssetCatalog) -> Result<Self> {
        config.validate()?;

        let mut camera = Camera::default();
        camera.set_position(config.camera_offset);
        camera.look_at(Vec3::ZERO);

        Ok(Self {
            registry: ClipRegistry::new(&catalog),
            animator: CharacterAnimator::new(config.crossfade, config.idle_clip, config.stop_clip),
            locomotion: LocomotionUpdater::from_config(&config),
            follower: CameraFollower::new(config.camera_offset, config.follow_camera),
            queue: AssetLoadQueue::new(),
            mixer: AnimationMixer::new(),
            input: InputState::new(),
            rig: CharacterRig::new(),
            last_motion: Motion::None,
            camera,
            catalog,
            config,
        })
    }

    /// Kicks off one background load per catalog entry.
    pub fn start_loading(&mut self, loader: Arc<dyn ClipLoader>) {
        log::info!("Loading {} clips", self.catalog.len());
        self.queue.request_all(&self.catalog, &loader);
    }

    /// Folds every load that completed since the last call. Returns how many
    /// outcomes were processed.
    pub fn integrate_loads(&mut self) -> usize {
        let outcomes = self.queue.drain();
        let count = outcomes.len();
        for outcome in outcomes {
            self.integrate(outcome);
        }
        count
    }

    /// Applies a single load outcome, wherever it came from.
    pub fn integrate(&mut self, outcome: LoadOutcome) {
        if let Integrated::Ready { id, mesh_nodes, .. } =
            self.registry.integrate(outcome, &mut self.mixer)
        {
            self.rig.attach(id, mesh_nodes);
            self.animator.on_clip_ready(&mut self.mixer, &self.registry, id);
        }
    }

    pub fn on_key_down(&mut self, key: Key) -> Option<BoundAction> {
        let Some(action) = self.input.on_key_down(key, &self.config.bindings) else {
            log::debug!("Unbound key {key:?} pressed");
            return None;
        };

        if action == BoundAction::ToggleFollow {
            self.toggle_follow_camera();
        } else if let Some(clip) = self.config.bindings.clip_for(action) {
            self.animator.play_input_clip(&mut self.mixer, &self.registry, clip);
        }
        Some(action)
    }

    pub fn on_key_up(&mut self, key: Key) -> Option<BoundAction> {
        let action = self.input.on_key_up(key, &self.config.bindings)?;
        if action != BoundAction::ToggleFollow && !self.input.is_moving() {
            self.animator.request_stop(&mut self.mixer, &self.registry);
        }
        Some(action)
    }

    /// Key press by DOM-style name (`"w"`, `"Shift"`, `" "`), case-insensitive.
    pub fn on_key_name_down(&mut self, name: &str) -> Result<Option<BoundAction>> {
        let key: Key = name.parse()?;
        Ok(self.on_key_down(key))
    }

    pub fn on_key_name_up(&mut self, name: &str) -> Result<Option<BoundAction>> {
        let key: Key = name.parse()?;
        Ok(self.on_key_up(key))
    }

    /// Advances the viewer by `dt` seconds.
    ///
    /// Order: integrate finished loads, advance the mixer and deliver its
    /// finish events, refresh crossfade state, move the character, then
    /// place the camera. Motion and follow wait until a character root exists.
    pub fn per_frame_update(&mut self, dt: f32) -> Motion {
        self.integrate_loads();

        for event in self.mixer.update(dt) {
            if let MixerEvent::Finished { action } = event {
                self.animator
                    .on_action_finished(&mut self.mixer, &self.registry, action);
            }
        }
        self.animator.update(&self.mixer);

        self.last_motion = Motion::None;
        if self.rig.has_root() {
            self.last_motion = self
                .locomotion
                .update(self.rig.transform_mut(), &self.input, dt);
            self.follower
                .update(&mut self.camera, self.rig.transform().position);
        }
        self.last_motion
    }

    pub fn set_follow_camera(&mut self, enabled: bool) {
        if self.follower.enabled != enabled {
            log::info!("Follow camera {}", if enabled { "on" } else { "off" });
        }
        self.follower.enabled = enabled;
    }

    /// Flips follow mode and returns the new setting.
    pub fn toggle_follow_camera(&mut self) -> bool {
        self.set_follow_camera(!self.follower.enabled);
        self.follower.enabled
    }

    #[must_use]
    pub fn follow_camera(&self) -> bool {
        self.follower.enabled
    }

    /// Snapshot handed to render submission.
    #[must_use]
    pub fn frame_view(&self) -> FrameView {
        let weights = self
            .mixer
            .running_actions()
            .filter_map(|(handle, action)| {
                let clip = self.registry.clip_for_action(handle)?;
                Some((clip, action.effective_weight()))
            })
            .collect();

        FrameView {
            character: *self.rig.transform(),
            camera: self.camera,
            view_projection: self.camera.projection_matrix() * self.camera.view_matrix(),
            active_clip: self.active_clip(),
            phase: self.phase(),
            weights,
            follow_camera: self.follower.enabled,
            visible_parts: self
                .rig
                .parts()
                .iter()
                .filter(|part| part.visible)
                .map(|part| part.source)
                .collect(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn registry(&self) -> &ClipRegistry {
        &self.registry
    }

    #[must_use]
    pub fn mixer(&self) -> &AnimationMixer {
        &self.mixer
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn rig(&self) -> &CharacterRig {
        &self.rig
    }

    #[must_use]
    pub fn character_transform(&self) -> &Transform {
        self.rig.transform()
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// For orbit controls while follow mode is off.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[must_use]
    pub fn phase(&self) -> LocomotionPhase {
        self.animator.phase()
    }

    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        self.animator.animation_state()
    }

    #[must_use]
    pub fn active_clip(&self) -> Option<ClipId> {
        self.animator
            .active_action()
            .and_then(|handle| self.registry.clip_for_action(handle))
    }

    #[must_use]
    pub fn stop_pending(&self) -> bool {
        self.animator.stop_pending()
    }

    #[must_use]
    pub fn last_motion(&self) -> Motion {
        self.last_motion
    }

    #[must_use]
    pub fn loads_in_flight(&self) -> usize {
        self.queue.in_flight()
    }

    /// Blocks until outstanding loads report (or `timeout` passes), then
    /// integrates them.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn wait_for_loads(&mut self, timeout: std::time::Duration) -> usize {
        let outcomes = self.queue.wait_idle(timeout);
        let count = outcomes.len();
        for outcome in outcomes {
            self.integrate(outcome);
        }
        count
    }
}
