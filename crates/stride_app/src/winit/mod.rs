//! Winit host for the character viewer.
//!
//! [`App`] opens a window and drives a [`FrameLoop`] from redraw requests.
//! Key presses go straight to the [`CharacterViewer`]; mouse input feeds the
//! orbit controls, which own the camera whenever follow mode is off.
//!
//! ```rust,ignore
//! let mut viewer = CharacterViewer::new(ViewerConfig::default())?;
//! viewer.start_loading(Arc::new(StaticClipLoader::with_defaults()));
//! App::new(viewer, NullSink).with_title("Character Viewer").run()?;
//! ```

use std::sync::Arc;

use stride_character::{BoundAction, CharacterViewer, FrameLoop, FrameSink};
use stride_core::input::Input;
use stride_scene::OrbitControls;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
pub use winit::window::{Window, WindowId};

use crate::fps_counter::FpsCounter;

pub mod input_adapter;

/// Window settings plus the viewer to run.
pub struct App<S: FrameSink> {
    title: String,
    viewer: CharacterViewer,
    sink: S,
}

impl<S: FrameSink + 'static> App<S> {
    #[must_use]
    pub fn new(viewer: CharacterViewer, sink: S) -> Self {
        Self {
            title: "Stride Character Viewer".into(),
            viewer,
            sink,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Blocks until the window closes.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run(self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::new(self.title, FrameLoop::new(self.viewer, self.sink));
        event_loop.run_app(&mut runner).map_err(Into::into)
    }

    /// Spawns the event loop on the browser's animation frames and returns.
    #[cfg(target_arch = "wasm32")]
    pub fn run(self) -> anyhow::Result<()> {
        use winit::platform::web::EventLoopExtWebSys;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let runner = AppRunner::new(self.title, FrameLoop::new(self.viewer, self.sink));
        event_loop.spawn_app(runner);
        Ok(())
    }
}

struct AppRunner<S: FrameSink> {
    title: String,
    window: Option<Arc<Window>>,
    frame_loop: FrameLoop<S>,
    input: Input,
    orbit: OrbitControls,
    fps_counter: FpsCounter,
}

impl<S: FrameSink> AppRunner<S> {
    fn new(title: String, frame_loop: FrameLoop<S>) -> Self {
        let viewer = frame_loop.viewer();
        let target = viewer.character_transform().position;
        let mut orbit = OrbitControls::new(target, viewer.config().camera_offset.length());
        orbit.sync_from(&viewer.camera().transform, target);

        Self {
            title,
            window: None,
            frame_loop,
            input: Input::new(),
            orbit,
            fps_counter: FpsCounter::new(),
        }
    }

    fn on_key(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        let Some(key) = input_adapter::translate_key(event.physical_key) else {
            return;
        };

        let viewer = self.frame_loop.viewer_mut();
        let action = match event.state {
            ElementState::Pressed => viewer.on_key_down(key),
            ElementState::Released => viewer.on_key_up(key),
        };

        if action == Some(BoundAction::ToggleFollow)
            && event.state == ElementState::Pressed
            && !viewer.follow_camera()
        {
            let target = viewer.character_transform().position;
            self.orbit.sync_from(&viewer.camera().transform, target);
        }
    }

    fn redraw(&mut self) {
        let dt = self.frame_loop.advance_clock();

        let viewer = self.frame_loop.viewer_mut();
        if !viewer.follow_camera() {
            let camera = viewer.camera_mut();
            let fov_degrees = camera.fov.to_degrees();
            self.orbit.update(&mut camera.transform, &self.input, fov_degrees, dt);
        }

        self.frame_loop.step(dt);
        self.input.start_frame();

        if let Some(fps) = self.fps_counter.update(dt)
            && let Some(window) = &self.window
        {
            let viewer = self.frame_loop.viewer();
            let clip = viewer.active_clip().map_or("-", |clip| clip.name());
            window.set_title(&format!(
                "{} | FPS: {fps:.1} | {clip} | {:?}",
                self.title,
                viewer.phase()
            ));
        }
    }
}

impl<S: FrameSink> ApplicationHandler for AppRunner<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        #[cfg(target_arch = "wasm32")]
        let window_attributes = {
            use winit::platform::web::WindowAttributesExtWebSys;
            window_attributes.with_append(true)
        };

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("Failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.input.inject_resize(size.width, size.height);
        self.frame_loop
            .viewer_mut()
            .camera_mut()
            .set_aspect(size.width, size.height);
        self.window = Some(window);
        log::info!("Window created ({}x{})", size.width, size.height);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        input_adapter::process_window_event(&mut self.input, &event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { ref event, .. } => self.on_key(event),
            WindowEvent::Resized(size) => {
                self.frame_loop
                    .viewer_mut()
                    .camera_mut()
                    .set_aspect(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
