#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! Keyboard-driven character animation viewer.
//!
//! Re-exports the member crates under one roof. Most users want the
//! [`prelude`].

pub use stride_animation as animation;
pub use stride_app as app;
pub use stride_assets as assets;
pub use stride_character as character;
pub use stride_scene as scene;
pub use stride_core::{errors, input, time};

pub use stride_animation::{AnimationClip, AnimationController, AnimationMixer, LoopMode};
pub use stride_assets::{AssetCatalog, ClipId, ClipLoader, ClipRegistry, StaticClipLoader};
pub use stride_character::{CharacterViewer, FrameLoop, FrameSink, FrameView, ViewerConfig};
pub use stride_core::errors::{Result, StrideError};
pub use stride_scene::{Camera, OrbitControls, Transform};

pub mod prelude {
    pub use stride_assets::{AssetCatalog, ClipId, ClipLoader, StaticClipLoader};
    #[cfg(not(target_arch = "wasm32"))]
    pub use stride_assets::ManifestLoader;
    #[cfg(feature = "http")]
    pub use stride_assets::HttpManifestLoader;
    pub use stride_character::{
        BoundAction, CharacterViewer, FrameLoop, FrameSink, FrameView, LocomotionPhase, NullSink,
        ViewerConfig,
    };
    pub use stride_core::input::Key;
    pub use stride_core::errors::{Result, StrideError};

    #[cfg(feature = "winit")]
    pub use stride_app::App;
}
