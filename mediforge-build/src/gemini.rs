//! Blocking Gemini `generateContent` client.

use serde::{Deserialize, Serialize};

use mediforge_core::CatalogEntry;

use crate::error::GenerateError;
use crate::generator::{Generation, Generator, GeneratorConfig};

/// Gemini REST client. One request per [`Generator::generate`] call, no retries.
pub struct GeminiClient {
    agent: ureq::Agent,
    url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &GeneratorConfig, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );
        Self { agent, url, api_key }
    }
}

impl Generator for GeminiClient {
    fn generate(&self, entry: &CatalogEntry, prompt: &str) -> Result<Generation, GenerateError> {
        tracing::debug!("requesting generation for agent {}", entry.id);
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = match self
            .agent
            .post(&self.url)
            .set("x-goog-api-key", &self.api_key)
            .send_json(&body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let message = response
                    .into_json::<serde_json::Value>()
                    .ok()
                    .and_then(|v| {
                        v.get("error")
                            .and_then(|e| e.get("message"))
                            .and_then(|m| m.as_str())
                            .map(str::to_string)
                    })
                    .unwrap_or_else(|| "Unknown error".to_string());
                return Err(GenerateError::Status { status, message });
            }
            Err(ureq::Error::Transport(transport)) => {
                // The transport's Display includes the URL; keep only kind + message.
                let detail = match transport.message() {
                    Some(message) => format!("{}: {message}", transport.kind()),
                    None => transport.kind().to_string(),
                };
                return Err(GenerateError::Transport(detail));
            }
        };

        let parsed: GeminiResponse = response
            .into_json()
            .map_err(|e| GenerateError::Decode(e.to_string()))?;
        extract_text(parsed).map(|text| Generation { text })
    }
}

fn extract_text(response: GeminiResponse) -> Result<String, GenerateError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(GenerateError::Empty)
}

// Gemini API types
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}
