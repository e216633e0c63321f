//! `mediforge export` — placeholder models and sample dataset.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mediforge_build::{export, ModelExport};
use mediforge_core::paths::EXPORT_BASE_DIR;

/// Arguments for `mediforge export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory that receives `public/models/` and `data/`.
    #[arg(long, default_value = EXPORT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Number of agent models to export.
    #[arg(long, default_value_t = export::DEFAULT_MODEL_COUNT)]
    pub count: u32,
}

impl ExportArgs {
    pub fn run(self) -> Result<()> {
        println!("Starting export pipeline...");
        let report = export::export(&self.base_dir, self.count)
            .with_context(|| format!("export failed under '{}'", self.base_dir.display()))?;

        for model in &report.models {
            match model {
                ModelExport::Exported { id, write } => {
                    println!("  ✎  agent {id}: {}", write.path().display());
                }
                ModelExport::Failed { id, path, message } => {
                    println!("  ✗  agent {id}: {} ({message})", path.display());
                }
            }
        }
        println!("  ✎  dataset: {}", report.dataset.path().display());
        println!(
            "✓ Export complete ({} exported, {} failed)",
            report.models.len() - report.failed_count(),
            report.failed_count()
        );
        Ok(())
    }
}
