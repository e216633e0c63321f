//! Domain types for the MediForge agent registry.
//!
//! The registry is persisted as a JSON object keyed by the decimal agent id.
//! Descriptors never carry their own id, so "id equals key" holds by
//! construction.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Numeric identifier of an agent. Serialized as a plain integer, which
/// serde_json turns into a string when used as an object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for AgentId {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// Human-readable agent name, e.g. `Agent1_FedEHR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentName(pub String);

impl fmt::Display for AgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for AgentName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AgentName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle status of an agent. Only `active` exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    Active,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentStatus::Active => write!(f, "active"),
        }
    }
}

/// Content of the registry written when live generation is unavailable.
///
/// `Literal` writes the fixed ten-entry document; `Templated` derives the
/// entries from the project catalog with the same naming template the live
/// path uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackMode {
    #[default]
    Literal,
    Templated,
}

impl fmt::Display for FallbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackMode::Literal => write!(f, "literal"),
            FallbackMode::Templated => write!(f, "templated"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One registry entry. The id lives in the enclosing map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    pub name: AgentName,
    pub description: String,
    #[serde(default)]
    pub status: AgentStatus,
}

impl AgentDescriptor {
    /// An `active` descriptor.
    pub fn active(name: impl Into<AgentName>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status: AgentStatus::Active,
        }
    }
}

/// Mapping of agent id to descriptor, ordered by numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Registry {
    pub agents: BTreeMap<AgentId, AgentDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the descriptor for `id`.
    pub fn insert(&mut self, id: AgentId, descriptor: AgentDescriptor) {
        self.agents.insert(id, descriptor);
    }

    pub fn get(&self, id: AgentId) -> Option<&AgentDescriptor> {
        self.agents.get(&id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&AgentId, &AgentDescriptor)> {
        self.agents.iter()
    }
}

impl FromIterator<(AgentId, AgentDescriptor)> for Registry {
    fn from_iter<I: IntoIterator<Item = (AgentId, AgentDescriptor)>>(iter: I) -> Self {
        Self {
            agents: iter.into_iter().collect(),
        }
    }
}

/// One record of the sample evidence dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub query: String,
    pub text: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
