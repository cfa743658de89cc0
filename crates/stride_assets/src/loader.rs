//! Clip loaders.
//!
//! A loader turns one [`CatalogEntry`] into a [`LoadedAsset`]: the clips the
//! asset carries and the names of the mesh nodes it brings along. Mesh and
//! skeleton decoding belong to the rendering engine, so the on-disk format
//! read here is a JSON manifest exported next to each model file:
//!
//! ```json
//! { "clips": [{ "name": "mixamo.com", "duration": 1.24 }], "mesh_nodes": ["Body", "Hair"] }
//! ```

use std::future::Future;

use futures::FutureExt;
use futures::future;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use stride_core::errors::{Result, StrideError};

use crate::catalog::{CatalogEntry, ClipId};

/// One animation carried by an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipDesc {
    pub name: String,
    /// Seconds.
    pub duration: f32,
}

/// What a loader hands back for one catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadedAsset {
    #[serde(default)]
    pub clips: Vec<ClipDesc>,
    #[serde(default)]
    pub mesh_nodes: Vec<String>,
}

impl LoadedAsset {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type LoadFuture = futures::future::BoxFuture<'static, Result<LoadedAsset>>;

#[cfg(target_arch = "wasm32")]
pub type LoadFuture = futures::future::LocalBoxFuture<'static, Result<LoadedAsset>>;

#[cfg(not(target_arch = "wasm32"))]
fn boxed<F>(fut: F) -> LoadFuture
where
    F: Future<Output = Result<LoadedAsset>> + Send + 'static,
{
    fut.boxed()
}

#[cfg(target_arch = "wasm32")]
fn boxed<F>(fut: F) -> LoadFuture
where
    F: Future<Output = Result<LoadedAsset>> + 'static,
{
    fut.boxed_local()
}

/// Source of clip assets. Implementations must not block: the returned
/// future is driven off the frame thread.
pub trait ClipLoader: Send + Sync + 'static {
    fn load(&self, entry: &CatalogEntry) -> LoadFuture;

    /// Human-readable location of `entry`, used in logs and clip metadata.
    fn describe(&self, entry: &CatalogEntry) -> String {
        entry.file_stem().to_string()
    }
}

// ============================================================================
// Filesystem manifests
// ============================================================================

/// Reads `<root>/<stem>.json` manifests from disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl ManifestLoader {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn manifest_path(&self, entry: &CatalogEntry) -> std::path::PathBuf {
        self.root.join(format!("{}.json", entry.file_stem()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClipLoader for ManifestLoader {
    fn load(&self, entry: &CatalogEntry) -> LoadFuture {
        let path = self.manifest_path(entry);
        boxed(async move {
            let bytes = tokio::fs::read(&path).await.map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    StrideError::AssetNotFound(path.display().to_string())
                } else {
                    StrideError::Io(err)
                }
            })?;
            LoadedAsset::from_json_slice(&bytes)
        })
    }

    fn describe(&self, entry: &CatalogEntry) -> String {
        self.manifest_path(entry).display().to_string()
    }
}

// ============================================================================
// HTTP manifests
// ============================================================================

/// Fetches `<base>/<stem>.json` manifests over HTTP.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpManifestLoader {
    base: url::Url,
}

#[cfg(feature = "http")]
impl HttpManifestLoader {
    pub fn new(base: &str) -> Result<Self> {
        let mut base = url::Url::parse(base)
            .map_err(|err| StrideError::Config(format!("invalid asset base url '{base}': {err}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    fn manifest_url(&self, entry: &CatalogEntry) -> Result<url::Url> {
        self.base
            .join(&format!("{}.json", entry.file_stem()))
            .map_err(|err| StrideError::AssetLoad {
                asset: entry.file_stem().to_string(),
                reason: err.to_string(),
            })
    }
}

#[cfg(feature = "http")]
impl ClipLoader for HttpManifestLoader {
    fn load(&self, entry: &CatalogEntry) -> LoadFuture {
        let asset = entry.file_stem().to_string();
        let url = self.manifest_url(entry);
        boxed(async move {
            let url = url?;
            let response = ehttp::fetch_async(ehttp::Request::get(url.as_str()))
                .await
                .map_err(|reason| StrideError::AssetLoad {
                    asset: asset.clone(),
                    reason,
                })?;
            if !response.ok {
                return Err(StrideError::HttpResponse {
                    status: response.status,
                });
            }
            LoadedAsset::from_json_slice(&response.bytes)
        })
    }

    fn describe(&self, entry: &CatalogEntry) -> String {
        self.manifest_url(entry)
            .map_or_else(|_| entry.file_stem().to_string(), |url| url.to_string())
    }
}

// ============================================================================
// In-memory clips
// ============================================================================

/// Serves clips from memory. Entries without a duration fail with
/// [`StrideError::AssetNotFound`].
#[derive(Debug, Clone, Default)]
pub struct StaticClipLoader {
    durations: FxHashMap<ClipId, f32>,
    mesh_nodes: Vec<String>,
}

impl StaticClipLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalog clip with a typical capture length.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut loader = Self::new().with_mesh_nodes(["Body"]);
        for id in ClipId::all() {
            let duration = match id {
                ClipId::StopTwist => 1.4,
                ClipId::SadIdle => 3.2,
                ClipId::Jump => 1.1,
                ClipId::Takedown | ClipId::TakedownAttacker => 2.6,
                ClipId::Boxing | ClipId::Boxing1 | ClipId::Boxing2 | ClipId::Boxing3 => 1.8,
                ClipId::FastRun => 0.7,
                ClipId::Walking
                | ClipId::WalkBackward
                | ClipId::TurnRight
                | ClipId::TurnLeft => 1.0,
            };
            loader.durations.insert(id, duration);
        }
        loader
    }

    #[must_use]
    pub fn with_clip(mut self, id: ClipId, duration: f32) -> Self {
        self.durations.insert(id, duration);
        self
    }

    #[must_use]
    pub fn without_clip(mut self, id: ClipId) -> Self {
        self.durations.remove(&id);
        self
    }

    #[must_use]
    pub fn with_mesh_nodes<S: Into<String>>(mut self, nodes: impl IntoIterator<Item = S>) -> Self {
        self.mesh_nodes = nodes.into_iter().map(Into::into).collect();
        self
    }

    /// The asset this loader would deliver for `id`, resolved synchronously.
    pub fn asset_for(&self, id: ClipId) -> Result<LoadedAsset> {
        let duration = self
            .durations
            .get(&id)
            .copied()
            .ok_or_else(|| StrideError::AssetNotFound(id.name().to_string()))?;
        Ok(LoadedAsset {
            clips: vec![ClipDesc {
                name: id.name().to_string(),
                duration,
            }],
            mesh_nodes: self.mesh_nodes.clone(),
        })
    }
}

impl ClipLoader for StaticClipLoader {
    fn load(&self, entry: &CatalogEntry) -> LoadFuture {
        boxed(future::ready(self.asset_for(entry.id)))
    }

    fn describe(&self, entry: &CatalogEntry) -> String {
        format!("memory://{}", entry.file_stem())
    }
}
