//! Template contexts — serializable rendering payloads.

use serde::{Deserialize, Serialize};

use mediforge_core::CatalogEntry;

/// Payload for the `agent_name` and `prompt` templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryCtx {
    pub id: u32,
    pub description: String,
}

impl From<&CatalogEntry> for EntryCtx {
    fn from(entry: &CatalogEntry) -> Self {
        EntryCtx {
            id: entry.id.0,
            description: entry.description.to_string(),
        }
    }
}

/// One agent line of the orchestration report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionCtx {
    pub id: u32,
    pub name: String,
    pub pred: String,
    pub conf: f64,
}

/// Payload for the `report.html` template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCtx {
    pub predictions: Vec<PredictionCtx>,
    /// Supporting evidence lines; rendered as `None` when empty.
    pub evidence: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediforge_core::AgentId;

    #[test]
    fn entry_ctx_copies_id_and_description() {
        let entry = CatalogEntry {
            id: AgentId(5),
            description: "ECG XAI Forecasting",
        };
        let ctx = EntryCtx::from(&entry);
        assert_eq!(ctx.id, 5);
        assert_eq!(ctx.description, "ECG XAI Forecasting");
    }

    #[test]
    fn report_ctx_converts_to_tera_context() {
        let ctx = ReportCtx {
            predictions: vec![],
            evidence: vec!["x".to_string()],
        };
        tera::Context::from_serialize(&ctx).expect("context conversion");
    }
}
