//! Asset side of the viewer.
//!
//! The [`AssetCatalog`] lists every clip the viewer knows about. Each entry is
//! fetched independently by a [`ClipLoader`] through the [`AssetLoadQueue`];
//! completed loads are drained on the frame thread and folded into the
//! [`ClipRegistry`], which binds each clip to an action in the mixer.

pub mod catalog;
pub mod loader;
pub mod queue;
pub mod registry;

pub use catalog::{AssetCatalog, CatalogEntry, ClipId};
pub use loader::{ClipDesc, ClipLoader, LoadFuture, LoadedAsset, StaticClipLoader};
#[cfg(not(target_arch = "wasm32"))]
pub use loader::ManifestLoader;
#[cfg(feature = "http")]
pub use loader::HttpManifestLoader;
pub use queue::{AssetLoadQueue, LoadOutcome};
pub use registry::{ClipRegistry, ClipStatus, Integrated};
