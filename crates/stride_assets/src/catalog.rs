use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use stride_core::errors::StrideError;

/// Every animation clip the viewer ships with, in catalog order.
///
/// The display string is the asset's file stem, so `ClipId::WalkBackward`
/// is delivered by `Walk Backward.<ext>`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ClipId {
    #[strum(to_string = "Walking")]
    Walking,
    #[strum(to_string = "Walk Backward")]
    WalkBackward,
    #[strum(to_string = "Catwalk Walk Forward Turn 90R")]
    TurnRight,
    #[strum(to_string = "Catwalk Walk Forward Turn 90L")]
    TurnLeft,
    #[strum(to_string = "Catwalk Walk Stop Twist L")]
    StopTwist,
    #[strum(to_string = "Sad Idle")]
    SadIdle,
    #[strum(to_string = "Fast Run")]
    FastRun,
    #[strum(to_string = "Double Leg Takedown")]
    Takedown,
    #[strum(to_string = "Jump")]
    Jump,
    #[strum(to_string = "Boxing")]
    Boxing,
    #[strum(to_string = "Boxing (1)")]
    Boxing1,
    #[strum(to_string = "Boxing (2)")]
    Boxing2,
    #[strum(to_string = "Boxing (3)")]
    Boxing3,
    #[strum(to_string = "Double Leg Takedown - Attacker")]
    TakedownAttacker,
}

impl ClipId {
    /// The catalog name, e.g. `"Sad Idle"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = ClipId> {
        Self::iter()
    }

    pub fn from_name(name: &str) -> Result<Self, StrideError> {
        name.parse()
            .map_err(|_| StrideError::UnknownClip(name.to_string()))
    }
}

impl TryFrom<String> for ClipId {
    type Error = StrideError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

/// One loadable asset: the clip it supplies and where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: ClipId,
}

impl CatalogEntry {
    #[must_use]
    pub fn file_stem(&self) -> &'static str {
        self.id.name()
    }

    /// `<root>/<stem>.<extension>`
    #[must_use]
    pub fn path(&self, root: &str, extension: &str) -> String {
        let root = root.trim_end_matches('/');
        if root.is_empty() {
            format!("{}.{extension}", self.file_stem())
        } else {
            format!("{root}/{}.{extension}", self.file_stem())
        }
    }
}

/// Ordered list of assets to request at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    entries: Vec<CatalogEntry>,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::from_ids(ClipId::iter())
    }
}

impl AssetCatalog {
    /// Builds a catalog from `ids`, dropping duplicates but keeping first-seen order.
    pub fn from_ids(ids: impl IntoIterator<Item = ClipId>) -> Self {
        let mut entries: Vec<CatalogEntry> = Vec::with_capacity(ClipId::COUNT);
        for id in ids {
            if !entries.iter().any(|e| e.id == id) {
                entries.push(CatalogEntry { id });
            }
        }
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = ClipId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    #[must_use]
    pub fn contains(&self, id: ClipId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
