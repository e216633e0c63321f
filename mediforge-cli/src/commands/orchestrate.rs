//! `mediforge orchestrate <query>` — mock cascade report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mediforge_build::{orchestrator, writer};
use mediforge_core::paths::{self, EXPORT_BASE_DIR, REGISTRY_FILE};
use mediforge_renderer::Renderer;

/// Arguments for `mediforge orchestrate`.
#[derive(Args, Debug)]
pub struct OrchestrateArgs {
    /// Free-text query (e.g. symptoms).
    pub query: String,

    /// Registry to load agent names from.
    #[arg(long, default_value = REGISTRY_FILE)]
    pub registry: PathBuf,

    /// Sample evidence dataset. Defaults to the export location.
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Directory of `.tera` files overriding the embedded templates.
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Write the HTML report here instead of printing it.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl OrchestrateArgs {
    pub fn run(self) -> Result<()> {
        let renderer = match &self.templates {
            Some(dir) => Renderer::with_overrides(dir)
                .with_context(|| format!("failed to load templates from '{}'", dir.display()))?,
            None => Renderer::new().context("failed to load templates")?,
        };
        let dataset = self
            .dataset
            .unwrap_or_else(|| paths::dataset_path(std::path::Path::new(EXPORT_BASE_DIR)));

        let run = orchestrator::run(&self.registry, &dataset, &self.query, &renderer)
            .context("orchestration failed")?;
        if run.agents.is_fallback() {
            tracing::warn!("registry unavailable; using fallback agents");
        }

        match self.out {
            Some(path) => {
                let result = writer::write_text(&path, &run.html, false)
                    .with_context(|| format!("failed to write report to '{}'", path.display()))?;
                println!("✓ Report: {}", result.path().display());
            }
            None => println!("{}", run.html),
        }
        Ok(())
    }
}
