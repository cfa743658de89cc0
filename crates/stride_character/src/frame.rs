use glam::Mat4;
use stride_assets::ClipId;
use stride_core::time::Timer;
use stride_scene::{Camera, Transform};

use crate::animator::LocomotionPhase;
use crate::viewer::CharacterViewer;

/// What render submission gets to see of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub character: Transform,
    pub camera: Camera,
    /// `projection * view` of `camera`.
    pub view_projection: Mat4,
    pub active_clip: Option<ClipId>,
    pub phase: LocomotionPhase,
    /// Every running clip with its blend weight.
    pub weights: Vec<(ClipId, f32)>,
    pub follow_camera: bool,
    pub visible_parts: Vec<ClipId>,
}

impl FrameView {
    #[must_use]
    pub fn weight_of(&self, clip: ClipId) -> f32 {
        self.weights
            .iter()
            .find(|(id, _)| *id == clip)
            .map_or(0.0, |(_, w)| *w)
    }
}

/// Receives each finished frame. The renderer plugs in here.
pub trait FrameSink {
    fn submit(&mut self, view: &FrameView);
}

impl<F> FrameSink for F
where
    F: FnMut(&FrameView),
{
    fn submit(&mut self, view: &FrameView) {
        self(view);
    }
}

/// Discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn submit(&mut self, _view: &FrameView) {}
}

/// Update, then submit, once per tick.
pub struct FrameLoop<S: FrameSink> {
    viewer: CharacterViewer,
    timer: Timer,
    sink: S,
}

impl<S: FrameSink> FrameLoop<S> {
    pub fn new(viewer: CharacterViewer, sink: S) -> Self {
        Self {
            viewer,
            timer: Timer::new(),
            sink,
        }
    }

    /// Runs one frame with the wall-clock delta since the previous tick.
    pub fn tick(&mut self) {
        let dt = self.advance_clock();
        self.step(dt);
    }

    /// Ticks the clock without stepping and returns this frame's delta, for
    /// hosts that do their own work before [`FrameLoop::step`].
    pub fn advance_clock(&mut self) -> f32 {
        self.timer.tick();
        self.timer.dt_seconds()
    }

    /// Runs one frame with an explicit delta.
    pub fn step(&mut self, dt: f32) {
        self.viewer.per_frame_update(dt);
        let view = self.viewer.frame_view();
        self.sink.submit(&view);
    }

    #[must_use]
    pub fn viewer(&self) -> &CharacterViewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut CharacterViewer {
        &mut self.viewer
    }

    #[must_use]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
