//! Character viewer demo.
//!
//! ```text
//! cargo run -p character_viewer -- [config.json]
//! ```
//!
//! W/S walk, A/D turn, Shift sprints, Space jumps, U takedown, I/O/J/K box,
//! C toggles the follow camera. Without clip manifests on disk the viewer
//! falls back to built-in clip durations.

use std::path::Path;
use std::sync::Arc;

use stride::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ViewerConfig::load(&path)?,
        None => ViewerConfig::default(),
    };

    let loader: Arc<dyn ClipLoader> = if Path::new(&config.asset_root).is_dir() {
        Arc::new(ManifestLoader::new(&config.asset_root))
    } else {
        log::warn!(
            "Asset root '{}' not found, using built-in clips",
            config.asset_root
        );
        Arc::new(StaticClipLoader::with_defaults())
    };

    let mut viewer = CharacterViewer::new(config)?;
    viewer.start_loading(loader);

    App::new(viewer, NullSink)
        .with_title("Stride Character Viewer")
        .run()
}
