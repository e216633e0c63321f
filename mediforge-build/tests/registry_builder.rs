//! End-to-end registry and export properties through the public API.

use std::fs;

use mediforge_build::{
    builder, export, Availability, BuildSource, GenAgentsOptions, GenerateError, Generation,
    Generator, WriteResult,
};
use mediforge_core::{paths, CatalogEntry, FallbackMode};
use mediforge_renderer::Renderer;
use rstest::rstest;
use tempfile::TempDir;

struct Unreachable;

impl Generator for Unreachable {
    fn generate(&self, _entry: &CatalogEntry, _prompt: &str) -> Result<Generation, GenerateError> {
        Err(GenerateError::Transport("connection refused".to_string()))
    }
}

fn options(dir: &TempDir, fallback: FallbackMode) -> GenAgentsOptions {
    GenAgentsOptions {
        output: paths::registry_path_at(dir.path()),
        fallback,
        dry_run: false,
    }
}

fn read_json(dir: &TempDir) -> serde_json::Value {
    let text = fs::read_to_string(paths::registry_path_at(dir.path())).expect("registry file");
    serde_json::from_str(&text).expect("valid JSON")
}

#[rstest]
#[case::literal(FallbackMode::Literal)]
#[case::templated(FallbackMode::Templated)]
fn fallback_registry_has_keys_one_through_ten(#[case] mode: FallbackMode) {
    let dir = TempDir::new().expect("tempdir");
    let renderer = Renderer::new().expect("renderer");
    builder::gen_agents(Availability::MissingCredential, &renderer, &options(&dir, mode))
        .expect("gen_agents");

    let value = read_json(&dir);
    let obj = value.as_object().expect("object");
    let mut keys: Vec<u32> = obj.keys().map(|k| k.parse().expect("numeric key")).collect();
    keys.sort_unstable();
    assert_eq!(keys, (1..=10).collect::<Vec<_>>());
    for entry in obj.values() {
        for field in ["name", "description", "status"] {
            assert!(entry.get(field).is_some(), "missing {field}");
        }
        assert_eq!(entry["status"], "active");
    }
}

#[test]
fn unreachable_backend_yields_empty_object() {
    let dir = TempDir::new().expect("tempdir");
    let renderer = Renderer::new().expect("renderer");
    let result = builder::gen_agents(
        Availability::Ready(Box::new(Unreachable)),
        &renderer,
        &options(&dir, FallbackMode::Literal),
    )
    .expect("per-item failures never abort the build");

    assert!(matches!(result.source, BuildSource::Live { ref failures } if failures.len() == 10));
    assert_eq!(read_json(&dir), serde_json::json!({}));
}

#[test]
fn output_is_independent_of_prior_file() {
    let clean = TempDir::new().expect("tempdir");
    let dirty = TempDir::new().expect("tempdir");
    let renderer = Renderer::new().expect("renderer");

    let dirty_path = paths::registry_path_at(dirty.path());
    fs::create_dir_all(dirty_path.parent().unwrap()).unwrap();
    fs::write(&dirty_path, "garbage that is not JSON at all, and much longer than {}").unwrap();

    for dir in [&clean, &dirty] {
        for _ in 0..2 {
            builder::gen_agents(
                Availability::MissingCredential,
                &renderer,
                &options(dir, FallbackMode::Literal),
            )
            .expect("gen_agents");
        }
    }

    assert_eq!(
        fs::read(paths::registry_path_at(clean.path())).unwrap(),
        fs::read(&dirty_path).unwrap()
    );
}

#[test]
fn export_creates_directories_even_when_every_model_fails() {
    let dir = TempDir::new().expect("tempdir");
    let base = dir.path().join("MediForge-v5-Free");
    for i in 1..=3u32 {
        let blocked = paths::model_path(&base, i.into());
        fs::create_dir_all(&blocked).unwrap();
        fs::write(blocked.join("occupied"), "x").unwrap();
    }

    let report = export::export(&base, 3).expect("export");
    assert_eq!(report.failed_count(), 3);
    assert!(paths::models_dir(&base).is_dir());
    assert!(paths::data_dir(&base).is_dir());
    assert!(matches!(report.dataset, WriteResult::Written { .. }));
}
