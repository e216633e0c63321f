//! Default output locations, relative to the working directory.

use std::path::{Path, PathBuf};

use crate::types::AgentId;

pub const REGISTRY_FILE: &str = "src/agents.json";
pub const EXPORT_BASE_DIR: &str = "MediForge-v5-Free";
pub const SAMPLE_DATASET_FILE: &str = "pubmed_sample.json";

pub fn registry_path_at(root: &Path) -> PathBuf {
    root.join(REGISTRY_FILE)
}

pub fn models_dir(base: &Path) -> PathBuf {
    base.join("public").join("models")
}

pub fn data_dir(base: &Path) -> PathBuf {
    base.join("data")
}

pub fn model_path(base: &Path, id: AgentId) -> PathBuf {
    models_dir(base).join(format!("agent{id}.onnx"))
}

pub fn dataset_path(base: &Path) -> PathBuf {
    data_dir(base).join(SAMPLE_DATASET_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_path_is_under_public_models() {
        let path = model_path(Path::new("base"), AgentId(3));
        assert_eq!(path, PathBuf::from("base/public/models/agent3.onnx"));
    }

    #[test]
    fn dataset_path_is_under_data() {
        assert!(dataset_path(Path::new("b")).ends_with("data/pubmed_sample.json"));
    }
}
