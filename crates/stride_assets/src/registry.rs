use rustc_hash::FxHashMap;
use stride_animation::{ActionHandle, AnimationClip, AnimationMixer};
use stride_core::errors::StrideError;

use crate::catalog::{AssetCatalog, ClipId};
use crate::queue::LoadOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipStatus {
    /// Requested, nothing heard back yet.
    Pending,
    Ready(ActionHandle),
    /// The load failed; the clip stays unavailable for the rest of the session.
    Failed(String),
}

/// What [`ClipRegistry::integrate`] did with one outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Integrated {
    Ready {
        id: ClipId,
        action: ActionHandle,
        mesh_nodes: Vec<String>,
    },
    Failed {
        id: ClipId,
    },
    /// The id had already settled; the outcome was dropped.
    Duplicate {
        id: ClipId,
    },
}

/// Clip id → playable action, filled in as loads complete.
///
/// Every catalog id starts `Pending` and ends either `Ready` or `Failed`.
#[derive(Debug, Clone)]
pub struct ClipRegistry {
    statuses: FxHashMap<ClipId, ClipStatus>,
    /// Ids in the order they became ready.
    load_order: Vec<ClipId>,
}

impl ClipRegistry {
    #[must_use]
    pub fn new(catalog: &AssetCatalog) -> Self {
        Self {
            statuses: catalog.ids().map(|id| (id, ClipStatus::Pending)).collect(),
            load_order: Vec::with_capacity(catalog.len()),
        }
    }

    /// Action for `id`, if it has finished loading.
    #[must_use]
    pub fn action(&self, id: ClipId) -> Option<ActionHandle> {
        match self.statuses.get(&id) {
            Some(ClipStatus::Ready(handle)) => Some(*handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn status(&self, id: ClipId) -> Option<&ClipStatus> {
        self.statuses.get(&id)
    }

    /// Reverse lookup from a mixer action to the clip it plays.
    #[must_use]
    pub fn clip_for_action(&self, action: ActionHandle) -> Option<ClipId> {
        self.statuses.iter().find_map(|(id, status)| match status {
            ClipStatus::Ready(handle) if *handle == action => Some(*id),
            _ => None,
        })
    }

    #[must_use]
    pub fn is_ready(&self, id: ClipId) -> bool {
        self.action(id).is_some()
    }

    #[must_use]
    pub fn load_order(&self) -> &[ClipId] {
        &self.load_order
    }

    /// No entry is still pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.statuses.values().any(|s| matches!(s, ClipStatus::Pending))
    }

    pub fn failures(&self) -> impl Iterator<Item = (ClipId, &str)> {
        self.statuses.iter().filter_map(|(id, status)| match status {
            ClipStatus::Failed(reason) => Some((*id, reason.as_str())),
            _ => None,
        })
    }

    /// Binds `clip` to an action in `mixer` and records it under `id`.
    pub fn insert_ready(
        &mut self,
        id: ClipId,
        clip: AnimationClip,
        mixer: &mut AnimationMixer,
    ) -> Option<ActionHandle> {
        if self.is_settled_entry(id) {
            return None;
        }
        let handle = mixer.clip_action(clip.into_shared());
        self.statuses.insert(id, ClipStatus::Ready(handle));
        self.load_order.push(id);
        Some(handle)
    }

    pub fn insert_failed(&mut self, id: ClipId, reason: impl Into<String>) -> bool {
        if self.is_settled_entry(id) {
            return false;
        }
        self.statuses.insert(id, ClipStatus::Failed(reason.into()));
        true
    }

    fn is_settled_entry(&self, id: ClipId) -> bool {
        matches!(
            self.statuses.get(&id),
            Some(ClipStatus::Ready(_) | ClipStatus::Failed(_))
        )
    }

    /// Folds one load outcome into the registry.
    ///
    /// The asset's first clip becomes the playable clip for `id`. Failures,
    /// including assets that carry no clips, are logged and recorded; they
    /// never abort the remaining loads.
    pub fn integrate(&mut self, outcome: LoadOutcome, mixer: &mut AnimationMixer) -> Integrated {
        let LoadOutcome { id, source, result } = outcome;
        if self.is_settled_entry(id) {
            log::warn!("Ignoring repeated load result for clip '{id}'");
            return Integrated::Duplicate { id };
        }

        let asset = match result {
            Ok(asset) => asset,
            Err(err) => {
                log::error!("Failed to load clip '{id}' from {source}: {err}");
                self.insert_failed(id, err.to_string());
                return Integrated::Failed { id };
            }
        };

        let Some(first) = asset.clips.first() else {
            let err = StrideError::NoAnimations(id.name().to_string());
            log::error!("{err}");
            self.insert_failed(id, err.to_string());
            return Integrated::Failed { id };
        };

        let clip = AnimationClip::new(id.name(), source, first.duration);
        match self.insert_ready(id, clip, mixer) {
            Some(action) => {
                log::info!("Clip '{id}' ready ({:.2}s)", first.duration);
                Integrated::Ready {
                    id,
                    action,
                    mesh_nodes: asset.mesh_nodes,
                }
            }
            None => Integrated::Duplicate { id },
        }
    }
}
