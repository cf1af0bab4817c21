//! Fallback chain tests against real files and a counting storage mock.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use phenology_artifact::{ArtifactLoader, FsArtifactStorage, LinearModel};
use phenology_core::config::ArtifactConfig;
use phenology_core::errors::PhenologyResult;
use phenology_core::models::{ArtifactTier, FeatureVector, FEATURE_COUNT};
use phenology_core::traits::IArtifactStorage;

fn model(name: &str, intercept: f64) -> LinearModel {
    let mut weights = vec![0.0; FEATURE_COUNT];
    weights[FeatureVector::HEURISTIC_DAYS] = 1.0;
    LinearModel {
        name: name.into(),
        version: 1,
        intercept,
        weights,
    }
}

fn config_in(dir: &Path) -> ArtifactConfig {
    ArtifactConfig {
        primary_path: dir.join("maturation.bin"),
        compat_path: dir.join("maturation_compat.json"),
        ..Default::default()
    }
}

/// Wraps the filesystem and counts reads.
struct CountingStorage {
    reads: AtomicUsize,
}

impl IArtifactStorage for CountingStorage {
    fn exists(&self, path: &Path) -> bool {
        FsArtifactStorage.exists(path)
    }

    fn read(&self, path: &Path) -> PhenologyResult<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        FsArtifactStorage.read(path)
    }
}

#[test]
fn primary_artifact_wins_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.primary_path, model("primary", 3.0).to_binary().unwrap()).unwrap();
    std::fs::write(
        &config.compat_path,
        serde_json::to_vec(&model("compat", 0.0)).unwrap(),
    )
    .unwrap();

    let loader = ArtifactLoader::from_config(&config);
    let artifact = loader.load().unwrap();
    assert_eq!(artifact.tier(), ArtifactTier::Primary);
    assert_eq!(artifact.name(), "primary");
    assert!(loader.drain_events().is_empty());

    let info = loader.info().unwrap();
    assert_eq!(info.path, Some(config.primary_path.display().to_string()));
    assert!(info.statistical);
}

#[test]
fn corrupt_primary_falls_back_to_compat() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.primary_path, b"not a model").unwrap();
    std::fs::write(
        &config.compat_path,
        serde_json::to_vec(&model("compat", 0.0)).unwrap(),
    )
    .unwrap();

    let loader = ArtifactLoader::from_config(&config);
    let artifact = loader.load().unwrap();
    assert_eq!(artifact.tier(), ArtifactTier::Compat);

    let events = loader.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].component, "artifact_loader");
    assert_eq!(events[0].fallback_used, "compat-json");
    assert!(events[0].failure.contains("missing artifact marker"));
}

#[test]
fn empty_and_misnamed_files_fall_through_to_stub() {
    let dir = tempfile::tempdir().unwrap();
    let config = ArtifactConfig {
        primary_path: dir.path().join("maturation.bin"),
        compat_path: dir.path().join("maturation_compat.txt"),
        ..Default::default()
    };
    std::fs::write(&config.primary_path, b"").unwrap();
    std::fs::write(
        &config.compat_path,
        serde_json::to_vec(&model("compat", 0.0)).unwrap(),
    )
    .unwrap();

    let loader = ArtifactLoader::from_config(&config);
    let artifact = loader.load().unwrap();
    assert_eq!(artifact.tier(), ArtifactTier::RuleBased);
    assert!(loader.drain_events()[0].failure.contains("file is empty"));
}

#[test]
fn missing_everything_uses_stub() {
    let loader = ArtifactLoader::from_config(&ArtifactConfig {
        primary_path: PathBuf::from("/nonexistent/phenology/m.bin"),
        compat_path: PathBuf::from("/nonexistent/phenology/m.json"),
        ..Default::default()
    });
    let artifact = loader.load().unwrap();
    assert!(!artifact.is_statistical());
    assert!(artifact.scoring_source().is_rule_based());
}

#[test]
fn storage_is_read_once_until_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.primary_path, model("primary", 0.0).to_binary().unwrap()).unwrap();

    let storage = Arc::new(CountingStorage {
        reads: AtomicUsize::new(0),
    });
    let loader = ArtifactLoader::with_storage(&config, storage.clone());

    for _ in 0..5 {
        loader.load().unwrap();
    }
    assert_eq!(storage.reads.load(Ordering::SeqCst), 1);

    loader.clear();
    loader.load().unwrap();
    assert_eq!(storage.reads.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_first_loads_converge_on_one_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.primary_path, model("primary", 0.0).to_binary().unwrap()).unwrap();
    let loader = Arc::new(ArtifactLoader::from_config(&config));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let loader = Arc::clone(&loader);
            std::thread::spawn(move || loader.load().unwrap())
        })
        .collect();
    let artifacts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let cached = loader.cached().unwrap().unwrap();
    for artifact in &artifacts {
        assert!(Arc::ptr_eq(artifact, &cached));
    }
}
