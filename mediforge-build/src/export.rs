//! Placeholder model export and sample dataset.
//!
//! Creates `<base>/public/models` and `<base>/data`, writes one identity
//! model per agent index, then the fixed sample dataset. A failed model write
//! is logged and recorded; the remaining indices still run.

use std::path::{Path, PathBuf};

use mediforge_core::{catalog, dataset, paths, AgentId};

use crate::error::{io_err, BuildError};
use crate::onnx::IdentityModel;
use crate::writer::{atomic_write, write_text, WriteResult};

pub const DEFAULT_MODEL_COUNT: u32 = 10;

/// Outcome of one model export.
#[derive(Debug)]
pub enum ModelExport {
    Exported { id: AgentId, write: WriteResult },
    Failed {
        id: AgentId,
        path: PathBuf,
        message: String,
    },
}

impl ModelExport {
    pub fn id(&self) -> AgentId {
        match self {
            ModelExport::Exported { id, .. } | ModelExport::Failed { id, .. } => *id,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ModelExport::Failed { .. })
    }
}

/// Everything one export run produced.
#[derive(Debug)]
pub struct ExportReport {
    pub models: Vec<ModelExport>,
    pub dataset: WriteResult,
}

impl ExportReport {
    pub fn failed_count(&self) -> usize {
        self.models.iter().filter(|m| m.is_failed()).count()
    }
}

/// Create the output directories under `base`.
pub fn ensure_dirs(base: &Path) -> Result<(), BuildError> {
    for dir in [paths::models_dir(base), paths::data_dir(base)] {
        std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
    }
    Ok(())
}

/// Export `count` placeholder models and the sample dataset under `base`.
pub fn export(base: &Path, count: u32) -> Result<ExportReport, BuildError> {
    ensure_dirs(base)?;

    let bytes = IdentityModel::default().to_onnx();
    let models = (1..=count)
        .map(AgentId)
        .map(|id| {
            let path = paths::model_path(base, id);
            match atomic_write(&path, &bytes, false) {
                Ok(write) => {
                    tracing::info!("agent {id} exported (placeholder ONNX)");
                    ModelExport::Exported { id, write }
                }
                Err(e) => {
                    tracing::warn!("failed to export agent {id}: {e}");
                    ModelExport::Failed {
                        id,
                        path,
                        message: e.to_string(),
                    }
                }
            }
        })
        .collect();

    let json = dataset::to_json(&catalog::sample_records())?;
    let dataset = write_text(&paths::dataset_path(base), &json, false)?;

    Ok(ExportReport { models, dataset })
}
