//! Asset Tests
//!
//! Tests for:
//! - ClipId catalog names, parsing and serde
//! - StaticClipLoader and ManifestLoader results
//! - AssetLoadQueue fan-out and draining
//! - ClipRegistry integration (ready, failed, duplicate, empty assets)

use std::sync::Arc;
use std::time::Duration;

use strum::EnumCount;

use stride::animation::{AnimationClip, AnimationMixer};
use stride::assets::{
    AssetCatalog, AssetLoadQueue, CatalogEntry, ClipDesc, ClipId, ClipLoader, ClipRegistry,
    ClipStatus, Integrated, LoadOutcome, LoadedAsset, ManifestLoader, StaticClipLoader,
};
use stride::errors::StrideError;

const TIMEOUT: Duration = Duration::from_secs(10);

fn outcome(id: ClipId, result: stride::Result<LoadedAsset>) -> LoadOutcome {
    LoadOutcome {
        id,
        source: format!("memory://{id}"),
        result,
    }
}

fn asset(duration: f32, meshes: &[&str]) -> LoadedAsset {
    LoadedAsset {
        clips: vec![ClipDesc {
            name: "mixamo.com".to_string(),
            duration,
        }],
        mesh_nodes: meshes.iter().map(ToString::to_string).collect(),
    }
}

// ============================================================================
// ClipId / AssetCatalog
// ============================================================================

#[test]
fn catalog_lists_every_clip_in_order() {
    let catalog = AssetCatalog::default();
    assert_eq!(catalog.len(), ClipId::COUNT);
    assert_eq!(catalog.len(), 14);

    let ids: Vec<ClipId> = catalog.ids().collect();
    assert_eq!(ids.first(), Some(&ClipId::Walking));
    assert_eq!(ids.last(), Some(&ClipId::TakedownAttacker));
    assert_eq!(ids[4], ClipId::StopTwist);
    assert_eq!(ids[5], ClipId::SadIdle);
}

#[test]
fn clip_names_match_asset_stems() {
    assert_eq!(ClipId::StopTwist.name(), "Catwalk Walk Stop Twist L");
    assert_eq!(ClipId::TurnRight.name(), "Catwalk Walk Forward Turn 90R");
    assert_eq!(ClipId::Boxing2.to_string(), "Boxing (2)");
    assert_eq!(
        ClipId::TakedownAttacker.name(),
        "Double Leg Takedown - Attacker"
    );
}

#[test]
fn clip_names_round_trip_through_parse() {
    for id in ClipId::all() {
        assert_eq!(ClipId::from_name(id.name()).unwrap(), id);
    }
}

#[test]
fn unknown_clip_name_is_an_error() {
    let err = ClipId::from_name("Moonwalk").unwrap_err();
    assert!(matches!(err, StrideError::UnknownClip(name) if name == "Moonwalk"));
}

#[test]
fn clip_id_serializes_as_display_name() {
    let json = serde_json::to_string(&ClipId::SadIdle).unwrap();
    assert_eq!(json, "\"Sad Idle\"");

    let parsed: ClipId = serde_json::from_str("\"Fast Run\"").unwrap();
    assert_eq!(parsed, ClipId::FastRun);
    assert!(serde_json::from_str::<ClipId>("\"Walk\"").is_err());
}

#[test]
fn catalog_from_ids_drops_duplicates() {
    let catalog = AssetCatalog::from_ids([ClipId::Jump, ClipId::Walking, ClipId::Jump]);
    assert_eq!(catalog.len(), 2);
    assert!(catalog.contains(ClipId::Walking));
    assert!(!catalog.contains(ClipId::Boxing));
    assert_eq!(catalog.ids().next(), Some(ClipId::Jump));
}

#[test]
fn entry_path_joins_root_and_stem() {
    let entry = CatalogEntry { id: ClipId::SadIdle };
    assert_eq!(entry.path("models/fbx/", "fbx"), "models/fbx/Sad Idle.fbx");
    assert_eq!(entry.path("", "json"), "Sad Idle.json");
}

// ============================================================================
// Loaders
// ============================================================================

#[test]
fn static_loader_serves_configured_clips() {
    let loader = StaticClipLoader::new()
        .with_clip(ClipId::Jump, 1.5)
        .with_mesh_nodes(["Body", "Hair"]);

    let asset = loader.asset_for(ClipId::Jump).unwrap();
    assert_eq!(asset.clips.len(), 1);
    assert!((asset.clips[0].duration - 1.5).abs() < 1e-6);
    assert_eq!(asset.mesh_nodes, vec!["Body", "Hair"]);

    let err = loader.asset_for(ClipId::Walking).unwrap_err();
    assert!(matches!(err, StrideError::AssetNotFound(_)));
}

#[test]
fn static_loader_defaults_cover_catalog() {
    let loader = StaticClipLoader::with_defaults().without_clip(ClipId::Boxing3);
    for id in ClipId::all() {
        assert_eq!(loader.asset_for(id).is_ok(), id != ClipId::Boxing3, "{id}");
    }
}

#[test]
fn loaded_asset_parses_manifest_json() {
    let json = br#"{ "clips": [{ "name": "mixamo.com", "duration": 2.5 }] }"#;
    let asset = LoadedAsset::from_json_slice(json).unwrap();
    assert_eq!(asset.clips[0].name, "mixamo.com");
    assert!(asset.mesh_nodes.is_empty());

    assert!(matches!(
        LoadedAsset::from_json_slice(b"not json"),
        Err(StrideError::Json(_))
    ));
}

#[test]
fn manifest_loader_reads_from_disk() {
    let root = std::env::temp_dir().join(format!("stride-manifests-{}", std::process::id()));
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(
        root.join("Walking.json"),
        r#"{ "clips": [{ "name": "mixamo.com", "duration": 1.2 }], "mesh_nodes": ["Body"] }"#,
    )
    .unwrap();

    let loader: Arc<dyn ClipLoader> = Arc::new(ManifestLoader::new(&root));
    let catalog = AssetCatalog::from_ids([ClipId::Walking, ClipId::Jump]);

    let mut queue = AssetLoadQueue::new();
    queue.request_all(&catalog, &loader);
    let outcomes = queue.wait_idle(TIMEOUT);
    assert_eq!(outcomes.len(), 2);

    for outcome in outcomes {
        match outcome.id {
            ClipId::Walking => {
                let asset = outcome.result.unwrap();
                assert_eq!(asset.mesh_nodes, vec!["Body"]);
                assert!(outcome.source.ends_with("Walking.json"));
            }
            ClipId::Jump => {
                assert!(matches!(outcome.result, Err(StrideError::AssetNotFound(_))));
            }
            other => panic!("unexpected outcome for {other}"),
        }
    }

    std::fs::remove_dir_all(&root).ok();
}

// ============================================================================
// AssetLoadQueue
// ============================================================================

#[test]
fn queue_delivers_one_outcome_per_entry() {
    let loader: Arc<dyn ClipLoader> = Arc::new(StaticClipLoader::with_defaults());
    let catalog = AssetCatalog::default();

    let mut queue = AssetLoadQueue::new();
    assert!(queue.is_idle());
    queue.request_all(&catalog, &loader);
    assert_eq!(queue.in_flight(), catalog.len());

    let outcomes = queue.wait_idle(TIMEOUT);
    assert_eq!(outcomes.len(), catalog.len());
    assert!(queue.is_idle());
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
    assert!(queue.drain().is_empty());
}

// ============================================================================
// ClipRegistry
// ============================================================================

#[test]
fn registry_starts_pending() {
    let registry = ClipRegistry::new(&AssetCatalog::default());
    assert!(!registry.is_settled());
    assert_eq!(registry.status(ClipId::Jump), Some(&ClipStatus::Pending));
    assert_eq!(registry.action(ClipId::Jump), None);
}

#[test]
fn integrate_binds_first_clip_under_catalog_name() {
    let mut mixer = AnimationMixer::new();
    let mut registry = ClipRegistry::new(&AssetCatalog::default());

    let result = registry.integrate(
        outcome(ClipId::SadIdle, Ok(asset(3.0, &["Body"]))),
        &mut mixer,
    );
    let (id, action, mesh_nodes) = match result {
        Integrated::Ready { id, action, mesh_nodes } => (id, action, mesh_nodes),
        other => panic!("expected ready, got {other:?}"),
    };
    assert_eq!(id, ClipId::SadIdle);
    assert_eq!(mesh_nodes, vec!["Body"]);
    assert_eq!(registry.action(ClipId::SadIdle), Some(action));
    assert_eq!(registry.clip_for_action(action), Some(ClipId::SadIdle));

    let clip = mixer.action(action).unwrap().clip();
    assert_eq!(clip.name, "Sad Idle");
    assert_eq!(clip.source, "memory://Sad Idle");
}

#[test]
fn load_failures_are_recorded_not_fatal() {
    let mut mixer = AnimationMixer::new();
    let mut registry = ClipRegistry::new(&AssetCatalog::default());

    let failed = registry.integrate(
        outcome(
            ClipId::Jump,
            Err(StrideError::AssetNotFound("Jump.json".into())),
        ),
        &mut mixer,
    );
    assert_eq!(failed, Integrated::Failed { id: ClipId::Jump });
    assert!(matches!(registry.status(ClipId::Jump), Some(ClipStatus::Failed(_))));

    // Other entries still integrate.
    let ok = registry.integrate(outcome(ClipId::Walking, Ok(asset(1.0, &[]))), &mut mixer);
    assert!(matches!(ok, Integrated::Ready { .. }));

    let failures: Vec<ClipId> = registry.failures().map(|(id, _)| id).collect();
    assert_eq!(failures, vec![ClipId::Jump]);
}

#[test]
fn asset_without_clips_fails() {
    let mut mixer = AnimationMixer::new();
    let mut registry = ClipRegistry::new(&AssetCatalog::default());

    let empty = outcome(ClipId::Boxing, Ok(LoadedAsset::default()));
    let result = registry.integrate(empty, &mut mixer);
    assert_eq!(result, Integrated::Failed { id: ClipId::Boxing });
    match registry.status(ClipId::Boxing) {
        Some(ClipStatus::Failed(reason)) => assert!(reason.contains("No animations")),
        other => panic!("unexpected status {other:?}"),
    }
    assert!(mixer.is_empty());
}

#[test]
fn repeated_outcome_is_ignored() {
    let mut mixer = AnimationMixer::new();
    let mut registry = ClipRegistry::new(&AssetCatalog::default());

    registry.integrate(outcome(ClipId::Jump, Ok(asset(1.0, &[]))), &mut mixer);
    let first = registry.action(ClipId::Jump);

    let again = registry.integrate(outcome(ClipId::Jump, Ok(asset(9.0, &[]))), &mut mixer);
    assert_eq!(again, Integrated::Duplicate { id: ClipId::Jump });
    assert_eq!(registry.action(ClipId::Jump), first);
    assert_eq!(mixer.len(), 1);
}

#[test]
fn load_order_follows_completion_order() {
    let mut mixer = AnimationMixer::new();
    let catalog = AssetCatalog::from_ids([ClipId::Walking, ClipId::Jump, ClipId::Boxing]);
    let mut registry = ClipRegistry::new(&catalog);

    registry.integrate(outcome(ClipId::Boxing, Ok(asset(1.0, &[]))), &mut mixer);
    registry.integrate(
        outcome(ClipId::Jump, Err(StrideError::TaskJoin("gone".into()))),
        &mut mixer,
    );
    registry.insert_ready(
        ClipId::Walking,
        AnimationClip::new("Walking", "memory://Walking", 1.0),
        &mut mixer,
    );

    assert_eq!(registry.load_order(), &[ClipId::Boxing, ClipId::Walking]);
    assert!(registry.is_settled());
}
