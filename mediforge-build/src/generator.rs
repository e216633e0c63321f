//! Generation backend seam.
//!
//! [`resolve`] decides once per run whether live generation is possible:
//! a credential must be present and the `gemini` feature compiled in.

use std::time::Duration;

use mediforge_core::CatalogEntry;

use crate::error::GenerateError;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Text returned by one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
}

/// One-shot text generation for a catalog entry.
pub trait Generator {
    fn generate(&self, entry: &CatalogEntry, prompt: &str) -> Result<Generation, GenerateError>;
}

/// Settings for the live backend, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeneratorConfig {
    /// Read `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL` and
    /// `GEMINI_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset;
    /// a timeout that is not a positive integer keeps the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: get(API_KEY_VAR),
            model: get(MODEL_VAR).unwrap_or(defaults.model),
            base_url: get(BASE_URL_VAR).unwrap_or(defaults.base_url),
            timeout: get(TIMEOUT_VAR)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

/// Result of resolving the live backend.
pub enum Availability {
    Ready(Box<dyn Generator>),
    MissingCredential,
    BackendUnavailable,
}

impl Availability {
    pub fn is_ready(&self) -> bool {
        matches!(self, Availability::Ready(_))
    }
}

impl std::fmt::Debug for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Ready(_) => write!(f, "Ready"),
            Availability::MissingCredential => write!(f, "MissingCredential"),
            Availability::BackendUnavailable => write!(f, "BackendUnavailable"),
        }
    }
}

/// Pick the live backend for `config`, if any.
pub fn resolve(config: &GeneratorConfig) -> Availability {
    let Some(api_key) = config.api_key.clone() else {
        return Availability::MissingCredential;
    };
    backend(config, api_key)
}

#[cfg(feature = "gemini")]
fn backend(config: &GeneratorConfig, api_key: String) -> Availability {
    Availability::Ready(Box::new(crate::gemini::GeminiClient::new(config, api_key)))
}

#[cfg(not(feature = "gemini"))]
fn backend(_config: &GeneratorConfig, _api_key: String) -> Availability {
    Availability::BackendUnavailable
}
