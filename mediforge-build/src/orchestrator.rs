//! Mock inference cascade over the agent registry.
//!
//! Nothing here runs a model: predictions are fixed values. Evidence comes
//! from a substring lookup in the sample dataset when one is loaded, otherwise
//! from a small built-in table keyed on the exact query.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mediforge_core::{dataset, registry, AgentId, AgentName, SampleRecord};
use mediforge_renderer::{PredictionCtx, ReportCtx, Renderer};

use crate::error::BuildError;

pub const FALLBACK_AGENT_COUNT: u32 = 3;
pub const DEFAULT_EVIDENCE: &str = "PubMed: Federated learning key for privacy.";

/// Evidence used when no sample dataset is available. Keys match whole queries.
const KEYED_EVIDENCE: &[(&str, &[&str])] = &[("vision", &["Retinopathy study 2024"])];

/// Where the loaded agent list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    File(PathBuf),
    Fallback { reason: String },
}

/// Agents available to the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedAgents {
    pub agents: BTreeMap<AgentId, AgentName>,
    pub source: RegistrySource,
}

impl LoadedAgents {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, RegistrySource::Fallback { .. })
    }

    /// Registry name for `id`, or `Agent{id}` when unknown.
    pub fn display_name(&self, id: AgentId) -> String {
        self.agents
            .get(&id)
            .map(|n| n.0.clone())
            .unwrap_or_else(|| format!("Agent{id}"))
    }
}

/// Load agent names from the registry at `path`. Never fails: a missing or
/// unreadable registry yields `FallbackAgent1..3`.
pub fn load_agents(path: &Path) -> LoadedAgents {
    match registry::load_at(path) {
        Ok(registry) => {
            let agents: BTreeMap<AgentId, AgentName> = registry
                .iter()
                .map(|(id, d)| (*id, d.name.clone()))
                .collect();
            for name in agents.values() {
                tracing::debug!("loaded {name}");
            }
            LoadedAgents {
                agents,
                source: RegistrySource::File(path.to_path_buf()),
            }
        }
        Err(e) => {
            tracing::warn!("failed to load registry, using fallback: {e}");
            let agents = (1..=FALLBACK_AGENT_COUNT)
                .map(|i| (AgentId(i), AgentName::from(format!("FallbackAgent{i}"))))
                .collect();
            LoadedAgents {
                agents,
                source: RegistrySource::Fallback {
                    reason: e.to_string(),
                },
            }
        }
    }
}

/// One mock agent result.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub pred: String,
    pub conf: f64,
}

/// Agent 1 always answers; agent 10 joins for `vision` queries.
pub fn cascade(query: &str) -> BTreeMap<AgentId, Prediction> {
    let mut results = BTreeMap::new();
    results.insert(
        AgentId(1),
        Prediction {
            pred: "Low Risk".to_string(),
            conf: 0.95,
        },
    );
    if query.contains("vision") {
        results.insert(
            AgentId(10),
            Prediction {
                pred: "Detected Abnormality".to_string(),
                conf: 0.92,
            },
        );
    }
    results
}

/// Text of the first record whose non-empty `query` occurs in `input`
/// (case-insensitive), else [`DEFAULT_EVIDENCE`].
pub fn evidence(records: &[SampleRecord], input: &str) -> String {
    let input = input.to_lowercase();
    records
        .iter()
        .find(|r| !r.query.is_empty() && input.contains(&r.query.to_lowercase()))
        .map(|r| r.text.clone())
        .unwrap_or_else(|| DEFAULT_EVIDENCE.to_string())
}

/// Built-in evidence for an exact `query`; empty when the query is not a key.
pub fn keyed_evidence(query: &str) -> Vec<String> {
    KEYED_EVIDENCE
        .iter()
        .find(|(key, _)| *key == query)
        .map(|(_, lines)| lines.iter().map(|l| l.to_string()).collect())
        .unwrap_or_default()
}

/// Assemble the report context for `query`. With a dataset the evidence is
/// always one line; without one it may be empty.
pub fn orchestrate(
    agents: &LoadedAgents,
    records: Option<&[SampleRecord]>,
    query: &str,
) -> ReportCtx {
    let predictions = cascade(query)
        .into_iter()
        .map(|(id, p)| PredictionCtx {
            id: id.0,
            name: agents.display_name(id),
            pred: p.pred,
            conf: p.conf,
        })
        .collect();
    ReportCtx {
        predictions,
        evidence: match records {
            Some(records) => vec![evidence(records, query)],
            None => keyed_evidence(query),
        },
    }
}

/// A complete orchestration run.
#[derive(Debug)]
pub struct Orchestration {
    pub agents: LoadedAgents,
    pub report: ReportCtx,
    pub html: String,
}

/// Load the registry and dataset, run the cascade and render the report.
/// An unreadable dataset degrades to [`keyed_evidence`].
pub fn run(
    registry_path: &Path,
    dataset_path: &Path,
    query: &str,
    renderer: &Renderer,
) -> Result<Orchestration, BuildError> {
    let agents = load_agents(registry_path);
    let records = match dataset::load_at(dataset_path) {
        Ok(records) => Some(records),
        Err(e) => {
            tracing::debug!("no sample dataset: {e}");
            None
        }
    };
    let report = orchestrate(&agents, records.as_deref(), query);
    let html = renderer.report(&report)?;
    Ok(Orchestration {
        agents,
        report,
        html,
    })
}
