use stride_assets::ClipId;
use stride_scene::Transform;

/// Mesh nodes delivered by one loaded asset.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPart {
    pub source: ClipId,
    pub mesh_nodes: Vec<String>,
    pub visible: bool,
}

/// The character model, assembled from whichever assets have loaded.
///
/// The first asset to arrive becomes the visible root and owns the character
/// transform. Every later asset is attached hidden: it only contributes its
/// clip.
#[derive(Debug, Clone, Default)]
pub struct CharacterRig {
    transform: Transform,
    root: Option<ClipId>,
    parts: Vec<ModelPart>,
}

impl CharacterRig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    #[must_use]
    pub fn root(&self) -> Option<ClipId> {
        self.root
    }

    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    #[must_use]
    pub fn parts(&self) -> &[ModelPart] {
        &self.parts
    }

    /// Attaches the meshes of a freshly loaded asset. Returns `true` when the
    /// part became the root.
    pub fn attach(&mut self, source: ClipId, mesh_nodes: Vec<String>) -> bool {
        let is_root = self.root.is_none();
        if is_root {
            self.root = Some(source);
            log::info!("Character root set from '{source}'");
        }
        self.parts.push(ModelPart {
            source,
            mesh_nodes,
            visible: is_root,
        });
        is_root
    }
}
