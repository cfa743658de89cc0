use std::sync::Arc;

use stride_core::errors::Result;

use crate::catalog::{AssetCatalog, CatalogEntry, ClipId};
use crate::loader::{ClipLoader, LoadFuture, LoadedAsset};

#[cfg(not(target_arch = "wasm32"))]
use std::sync::OnceLock;
#[cfg(not(target_arch = "wasm32"))]
use tokio::runtime::Runtime;

#[cfg(not(target_arch = "wasm32"))]
fn get_asset_runtime() -> Option<&'static Runtime> {
    static RUNTIME: OnceLock<Option<Runtime>> = OnceLock::new();
    RUNTIME
        .get_or_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("stride-assets")
                .enable_all()
                .build()
                .inspect_err(|err| log::error!("Failed to create asset loader runtime: {err}"))
                .ok()
        })
        .as_ref()
}

/// Result of one catalog entry's load, delivered back to the frame thread.
#[derive(Debug)]
pub struct LoadOutcome {
    pub id: ClipId,
    /// Where the loader looked, for diagnostics and clip metadata.
    pub source: String,
    pub result: Result<LoadedAsset>,
}

/// Fans clip loads out to background tasks and collects their outcomes.
///
/// Loads run concurrently and complete in any order. Nothing here blocks the
/// frame thread: [`AssetLoadQueue::drain`] only takes what has already arrived.
/// There is no cancellation; a load that never completes simply never shows up.
pub struct AssetLoadQueue {
    tx: flume::Sender<LoadOutcome>,
    rx: flume::Receiver<LoadOutcome>,
    in_flight: usize,
}

impl Default for AssetLoadQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLoadQueue {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Number of requested loads whose outcome has not been drained yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.in_flight == 0
    }

    pub fn request_all(&mut self, catalog: &AssetCatalog, loader: &Arc<dyn ClipLoader>) {
        for entry in catalog.entries() {
            self.request(*entry, loader);
        }
    }

    pub fn request(&mut self, entry: CatalogEntry, loader: &Arc<dyn ClipLoader>) {
        let source = loader.describe(&entry);
        log::debug!("Requesting clip '{}' from {source}", entry.id);
        let fut = loader.load(&entry);
        self.in_flight += 1;
        spawn_load(entry.id, source, fut, self.tx.clone());
    }

    /// Takes every outcome that has arrived since the last call.
    pub fn drain(&mut self) -> Vec<LoadOutcome> {
        let outcomes: Vec<LoadOutcome> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(outcomes.len());
        outcomes
    }

    /// Blocks until every in-flight load has reported or `timeout` passes.
    ///
    /// For headless tools and tests; the frame loop uses [`Self::drain`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn wait_idle(&mut self, timeout: std::time::Duration) -> Vec<LoadOutcome> {
        let deadline = std::time::Instant::now() + timeout;
        let mut outcomes = Vec::new();
        while outcomes.len() < self.in_flight {
            match self.rx.recv_deadline(deadline) {
                Ok(outcome) => outcomes.push(outcome),
                Err(_) => break,
            }
        }
        self.in_flight = self.in_flight.saturating_sub(outcomes.len());
        outcomes
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_load(id: ClipId, source: String, fut: LoadFuture, tx: flume::Sender<LoadOutcome>) {
    let Some(runtime) = get_asset_runtime() else {
        let _ = tx.send(LoadOutcome {
            id,
            source,
            result: Err(stride_core::errors::StrideError::TaskJoin(
                "asset loader runtime unavailable".to_string(),
            )),
        });
        return;
    };
    runtime.spawn(async move {
        let result = fut.await;
        // The receiver is gone only when the viewer shut down mid-load.
        let _ = tx.send(LoadOutcome { id, source, result });
    });
}

#[cfg(target_arch = "wasm32")]
fn spawn_load(id: ClipId, source: String, fut: LoadFuture, tx: flume::Sender<LoadOutcome>) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = fut.await;
        let _ = tx.send(LoadOutcome { id, source, result });
    });
}
