//! Tera rendering engine — [`TemplateKind`] enum and [`Renderer`].
//!
//! # Templates
//!
//! | Kind        | Template name  | Used by                                   |
//! |-------------|----------------|-------------------------------------------|
//! | AgentName   | `agent_name`   | live registry entries, templated fallback |
//! | Prompt      | `prompt`       | generation request body                   |
//! | Report      | `report.html`  | orchestrator report (autoescaped)         |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use mediforge_core::{AgentDescriptor, AgentName, CatalogEntry, Registry};

use crate::context::{EntryCtx, ReportCtx};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("agent_name", include_str!("templates/agent_name.tera")),
    ("prompt", include_str!("templates/prompt.tera")),
    ("report.html", include_str!("templates/report.html.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}

/// `report.html.tera` -> `report.html`; separators normalised to `/`.
fn normalize_template_name(path: &Path) -> String {
    let name = path.to_string_lossy().replace('\\', "/").to_lowercase();
    match name.strip_suffix(".tera") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert((*name).to_string(), (*content).to_string());
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateKind
// ---------------------------------------------------------------------------

/// Every template the engine knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    AgentName,
    Prompt,
    Report,
}

impl TemplateKind {
    /// All kinds in a stable order.
    pub fn all() -> &'static [TemplateKind] {
        &[TemplateKind::AgentName, TemplateKind::Prompt, TemplateKind::Report]
    }

    /// Registered Tera template name.
    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateKind::AgentName => "agent_name",
            TemplateKind::Prompt => "prompt",
            TemplateKind::Report => "report.html",
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering templates with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults; `report.html.tera` replaces the `report.html` template.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render `kind` with any serializable context.
    pub fn render<C: serde::Serialize>(
        &self,
        kind: TemplateKind,
        ctx: &C,
    ) -> Result<String, RenderError> {
        let tera_ctx = tera::Context::from_serialize(ctx)?;
        let rendered = self.tera.render(kind.template_name(), &tera_ctx)?;
        Ok(rendered.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Domain-level rendering operations. Create once and reuse.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer {
            engine: TemplateEngine::new(None)?,
        })
    }

    /// Construct a [`Renderer`] whose templates may be overridden from `dir`.
    pub fn with_overrides(dir: &Path) -> Result<Self, RenderError> {
        Ok(Renderer {
            engine: TemplateEngine::new(Some(dir))?,
        })
    }

    /// `Agent{id}_{first word of description}`.
    pub fn agent_name(&self, entry: &CatalogEntry) -> Result<AgentName, RenderError> {
        let name = self.engine.render(TemplateKind::AgentName, &EntryCtx::from(entry))?;
        Ok(AgentName::from(name.trim().to_string()))
    }

    /// The `active` descriptor for a catalog entry.
    pub fn descriptor(&self, entry: &CatalogEntry) -> Result<AgentDescriptor, RenderError> {
        Ok(AgentDescriptor::active(self.agent_name(entry)?, entry.description))
    }

    /// Registry derived from `entries` through the naming template.
    pub fn templated_registry(&self, entries: &[CatalogEntry]) -> Result<Registry, RenderError> {
        entries
            .iter()
            .map(|entry| Ok((entry.id, self.descriptor(entry)?)))
            .collect()
    }

    /// Prompt text sent to the generation backend for `entry`.
    pub fn prompt(&self, entry: &CatalogEntry) -> Result<String, RenderError> {
        self.engine.render(TemplateKind::Prompt, &EntryCtx::from(entry))
    }

    /// HTML report for an orchestration run.
    pub fn report(&self, ctx: &ReportCtx) -> Result<String, RenderError> {
        self.engine.render(TemplateKind::Report, ctx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PredictionCtx;
    use mediforge_core::{catalog, AgentId, AgentStatus};

    fn entry(id: u32, description: &'static str) -> CatalogEntry {
        CatalogEntry {
            id: AgentId(id),
            description,
        }
    }

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn agent_name_uses_first_word() {
        let renderer = Renderer::new().unwrap();
        let name = renderer.agent_name(&entry(1, "Fed EHR Analysis")).unwrap();
        assert_eq!(name.0, "Agent1_Fed");
    }

    #[test]
    fn agent_name_of_single_word_description() {
        let renderer = Renderer::new().unwrap();
        let name = renderer.agent_name(&entry(12, "Triage")).unwrap();
        assert_eq!(name.0, "Agent12_Triage");
    }

    #[test]
    fn templated_registry_matches_catalog() {
        let renderer = Renderer::new().unwrap();
        let registry = renderer.templated_registry(catalog::projects()).unwrap();
        assert_eq!(registry.len(), 10);
        let ten = registry.get(AgentId(10)).unwrap();
        assert_eq!(ten.name.0, "Agent10_Retinopathy");
        assert_eq!(ten.description, "Retinopathy Edge Screening");
        assert_eq!(ten.status, AgentStatus::Active);
    }

    #[test]
    fn prompt_mentions_project() {
        let renderer = Renderer::new().unwrap();
        let prompt = renderer.prompt(&entry(2, "MRI Synthesis")).unwrap();
        assert!(prompt.contains("MRI Synthesis"));
        assert!(prompt.contains("agent 2"));
    }

    #[test]
    fn report_lists_predictions_and_default_context() {
        let renderer = Renderer::new().unwrap();
        let ctx = ReportCtx {
            predictions: vec![PredictionCtx {
                id: 1,
                name: "Agent1".to_string(),
                pred: "Low Risk".to_string(),
                conf: 0.95,
            }],
            evidence: vec![],
        };
        let html = renderer.report(&ctx).unwrap();
        assert!(
            html.starts_with("<h2>Report (96% Conf)</h2><ul><li>Agent1: Low Risk (0.95)</li></ul>"),
            "got: {html}"
        );
        assert!(html.contains("RAG Context: None"));
    }

    #[test]
    fn report_escapes_evidence_html() {
        let renderer = Renderer::new().unwrap();
        let ctx = ReportCtx {
            predictions: vec![],
            evidence: vec!["<script>".to_string()],
        };
        let html = renderer.report(&ctx).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn every_kind_has_a_registered_template() {
        let engine = TemplateEngine::new(None).unwrap();
        for kind in TemplateKind::all() {
            assert!(
                engine.tera.get_template_names().any(|n| n == kind.template_name()),
                "missing template for {kind:?}"
            );
        }
    }

    #[test]
    fn user_template_name_drops_tera_suffix() {
        assert_eq!(normalize_template_name(Path::new("Report.html.tera")), "report.html");
        assert_eq!(normalize_template_name(Path::new("prompt")), "prompt");
    }
}
