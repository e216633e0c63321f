//! Agent registry builder.
//!
//! Live mode asks the generator once per catalog entry and drops entries whose
//! call fails. Fallback mode makes no calls and writes a predetermined
//! registry. Either way the output file is replaced wholesale.

use std::path::{Path, PathBuf};

use mediforge_core::{catalog, registry, AgentId, CatalogEntry, FallbackMode, Registry};
use mediforge_renderer::Renderer;

use crate::error::BuildError;
use crate::generator::{Availability, Generator};
use crate::writer::{write_text, WriteResult};

/// Why live generation was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredential,
    BackendUnavailable,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::MissingCredential => write!(f, "no API key found"),
            FallbackReason::BackendUnavailable => write!(f, "no generation backend compiled in"),
        }
    }
}

/// A catalog entry dropped from a live build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    pub id: AgentId,
    pub message: String,
}

/// How the registry content was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildSource {
    Live { failures: Vec<ItemFailure> },
    Fallback {
        reason: FallbackReason,
        mode: FallbackMode,
    },
}

/// Options for [`gen_agents`].
#[derive(Debug, Clone)]
pub struct GenAgentsOptions {
    pub output: PathBuf,
    pub fallback: FallbackMode,
    pub dry_run: bool,
}

/// Outcome of one registry build.
#[derive(Debug)]
pub struct GenAgentsResult {
    pub source: BuildSource,
    pub registry: Registry,
    pub write: WriteResult,
}

/// Generate one descriptor per entry; failed entries are logged and omitted.
pub fn build_live(
    generator: &dyn Generator,
    renderer: &Renderer,
    entries: &[CatalogEntry],
) -> (Registry, Vec<ItemFailure>) {
    let mut registry = Registry::new();
    let mut failures = Vec::new();

    for entry in entries {
        let attempt = renderer
            .prompt(entry)
            .map_err(|e| e.to_string())
            .and_then(|prompt| generator.generate(entry, &prompt).map_err(|e| e.to_string()))
            .and_then(|generation| {
                tracing::debug!("agent {} summary: {}", entry.id, generation.text);
                renderer.descriptor(entry).map_err(|e| e.to_string())
            });

        match attempt {
            Ok(descriptor) => {
                tracing::info!("agent {} generated for {}", entry.id, entry.description);
                registry.insert(entry.id, descriptor);
            }
            Err(message) => {
                tracing::warn!("error generating agent {}: {}", entry.id, message);
                failures.push(ItemFailure { id: entry.id, message });
            }
        }
    }

    (registry, failures)
}

/// The registry written when live generation is skipped.
pub fn fallback_registry(mode: FallbackMode, renderer: &Renderer) -> Result<Registry, BuildError> {
    match mode {
        FallbackMode::Literal => Ok(catalog::literal_fallback()),
        FallbackMode::Templated => Ok(renderer.templated_registry(catalog::projects())?),
    }
}

/// Build the registry for the project catalog and write it to `options.output`.
pub fn gen_agents(
    availability: Availability,
    renderer: &Renderer,
    options: &GenAgentsOptions,
) -> Result<GenAgentsResult, BuildError> {
    let (registry, source) = match availability {
        Availability::Ready(generator) => {
            let (registry, failures) =
                build_live(generator.as_ref(), renderer, catalog::projects());
            (registry, BuildSource::Live { failures })
        }
        Availability::MissingCredential => {
            fallback(FallbackReason::MissingCredential, options.fallback, renderer)?
        }
        Availability::BackendUnavailable => {
            fallback(FallbackReason::BackendUnavailable, options.fallback, renderer)?
        }
    };

    let write = write_registry(&options.output, &registry, options.dry_run)?;
    Ok(GenAgentsResult {
        source,
        registry,
        write,
    })
}

fn fallback(
    reason: FallbackReason,
    mode: FallbackMode,
    renderer: &Renderer,
) -> Result<(Registry, BuildSource), BuildError> {
    tracing::warn!("{reason}; generating {mode} fallback registry");
    let registry = fallback_registry(mode, renderer)?;
    Ok((registry, BuildSource::Fallback { reason, mode }))
}

/// Encode and write `registry` to `path`, replacing any previous file.
pub fn write_registry(
    path: &Path,
    registry: &Registry,
    dry_run: bool,
) -> Result<WriteResult, BuildError> {
    let json = registry::to_json(registry)?;
    write_text(path, &json, dry_run)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use crate::generator::Generation;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct AlwaysOk;
    impl Generator for AlwaysOk {
        fn generate(
            &self,
            entry: &CatalogEntry,
            _prompt: &str,
        ) -> Result<Generation, GenerateError> {
            Ok(Generation {
                text: format!("summary {}", entry.id),
            })
        }
    }

    struct AlwaysFails;
    impl Generator for AlwaysFails {
        fn generate(
            &self,
            _entry: &CatalogEntry,
            _prompt: &str,
        ) -> Result<Generation, GenerateError> {
            Err(GenerateError::Transport("connection refused".to_string()))
        }
    }

    /// Fails for even ids and records every prompt it saw.
    #[derive(Default)]
    struct FailsEven {
        prompts: RefCell<Vec<String>>,
    }
    impl Generator for FailsEven {
        fn generate(
            &self,
            entry: &CatalogEntry,
            prompt: &str,
        ) -> Result<Generation, GenerateError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            if entry.id.0 % 2 == 0 {
                Err(GenerateError::Status {
                    status: 500,
                    message: "boom".to_string(),
                })
            } else {
                Ok(Generation {
                    text: "ok".to_string(),
                })
            }
        }
    }

    fn options(dir: &TempDir) -> GenAgentsOptions {
        GenAgentsOptions {
            output: dir.path().join("src").join("agents.json"),
            fallback: FallbackMode::Literal,
            dry_run: false,
        }
    }

    #[test]
    fn live_build_names_every_entry() {
        let renderer = Renderer::new().unwrap();
        let (registry, failures) = build_live(&AlwaysOk, &renderer, catalog::projects());
        assert!(failures.is_empty());
        assert_eq!(registry.len(), 10);
        assert_eq!(registry.get(AgentId(1)).unwrap().name.0, "Agent1_Fed");
        assert_eq!(registry.get(AgentId(7)).unwrap().description, "AMR Vision Transformer");
    }

    #[test]
    fn failed_items_are_dropped_and_reported() {
        let renderer = Renderer::new().unwrap();
        let generator = FailsEven::default();
        let (registry, failures) = build_live(&generator, &renderer, catalog::projects());

        let kept: Vec<u32> = registry.iter().map(|(id, _)| id.0).collect();
        assert_eq!(kept, vec![1, 3, 5, 7, 9]);
        let failed: Vec<u32> = failures.iter().map(|f| f.id.0).collect();
        assert_eq!(failed, vec![2, 4, 6, 8, 10]);
        assert!(failures[0].message.contains("HTTP 500"));
        assert_eq!(generator.prompts.borrow().len(), 10, "one call per entry, no retries");
    }

    #[test]
    fn always_failing_backend_writes_empty_registry() {
        let dir = TempDir::new().unwrap();
        let renderer = Renderer::new().unwrap();
        let result = gen_agents(
            Availability::Ready(Box::new(AlwaysFails)),
            &renderer,
            &options(&dir),
        )
        .expect("build never fails on per-item errors");

        assert!(result.registry.is_empty());
        match &result.source {
            BuildSource::Live { failures } => assert_eq!(failures.len(), 10),
            other => panic!("expected live build, got {other:?}"),
        }
        let written = std::fs::read_to_string(dir.path().join("src/agents.json")).unwrap();
        assert_eq!(written, "{}");
    }

    #[test]
    fn missing_credential_writes_literal_fallback() {
        let dir = TempDir::new().unwrap();
        let renderer = Renderer::new().unwrap();
        let result =
            gen_agents(Availability::MissingCredential, &renderer, &options(&dir)).unwrap();

        assert_eq!(
            result.source,
            BuildSource::Fallback {
                reason: FallbackReason::MissingCredential,
                mode: FallbackMode::Literal
            }
        );
        assert_eq!(result.registry, catalog::literal_fallback());
        let loaded = registry::load_at(&dir.path().join("src/agents.json")).unwrap();
        assert_eq!(loaded, catalog::literal_fallback());
    }

    #[test]
    fn templated_fallback_matches_live_output() {
        let dir = TempDir::new().unwrap();
        let renderer = Renderer::new().unwrap();
        let mut opts = options(&dir);
        opts.fallback = FallbackMode::Templated;

        let fallback = gen_agents(Availability::BackendUnavailable, &renderer, &opts).unwrap();
        let (live, _) = build_live(&AlwaysOk, &renderer, catalog::projects());
        assert_eq!(fallback.registry, live);
    }

    #[test]
    fn rerun_overwrites_prior_contents() {
        let dir = TempDir::new().unwrap();
        let renderer = Renderer::new().unwrap();
        let opts = options(&dir);
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(&opts.output, r#"{"99": {"name": "stale"}}"#).unwrap();

        let first = gen_agents(Availability::MissingCredential, &renderer, &opts).unwrap();
        assert!(matches!(first.write, WriteResult::Written { .. }));
        let after_first = std::fs::read(&opts.output).unwrap();

        let second = gen_agents(Availability::MissingCredential, &renderer, &opts).unwrap();
        assert!(matches!(second.write, WriteResult::Unchanged { .. }));
        assert_eq!(std::fs::read(&opts.output).unwrap(), after_first);
    }

    #[test]
    fn dry_run_leaves_output_absent() {
        let dir = TempDir::new().unwrap();
        let renderer = Renderer::new().unwrap();
        let mut opts = options(&dir);
        opts.dry_run = true;

        let result = gen_agents(Availability::MissingCredential, &renderer, &opts).unwrap();
        assert!(matches!(result.write, WriteResult::WouldWrite { .. }));
        assert!(!opts.output.exists());
    }
}
