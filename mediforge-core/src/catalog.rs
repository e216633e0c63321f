//! The fixed project catalog and the literal fallback registry.

use crate::types::{AgentDescriptor, AgentId, Registry, SampleRecord};

/// One project the registry builder generates an agent for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: AgentId,
    pub description: &'static str,
}

const fn entry(id: u32, description: &'static str) -> CatalogEntry {
    CatalogEntry {
        id: AgentId(id),
        description,
    }
}

const PROJECTS: &[CatalogEntry] = &[
    entry(1, "Fed EHR Analysis"),
    entry(2, "MRI Synthesis"),
    entry(3, "Drug GNN Repurposing"),
    entry(4, "Alzheimers Multimodal"),
    entry(5, "ECG XAI Forecasting"),
    entry(6, "Cancer RL Treatment"),
    entry(7, "AMR Vision Transformer"),
    entry(8, "Clinical Trial Bias NLP"),
    entry(9, "Protein GAN Variant"),
    entry(10, "Retinopathy Edge Screening"),
];

const LITERAL_FALLBACK: &[(u32, &str, &str)] = &[
    (1, "Agent1_FedEHR", "Federated EHR Analysis & Risk Prediction"),
    (2, "Agent2_MRISynth", "Generative MRI Synthesis for Rare Pathologies"),
    (3, "Agent3_DrugGNN", "Graph Neural Network for Drug Repurposing"),
    (4, "Agent4_AlzMulti", "Multimodal Early Alzheimer's Detection"),
    (5, "Agent5_ECG_XAI", "Explainable AI for Arrhythmia Forecasting"),
    (6, "Agent6_CancerRL", "Reinforcement Learning for Treatment Sequencing"),
    (7, "Agent7_AMR_ViT", "Vision Transformer for Antimicrobial Resistance"),
    (8, "Agent8_TrialBias", "NLP Bias Detection in Clinical Trials"),
    (9, "Agent9_ProteinGAN", "Protein Variant Pathogenicity Prediction"),
    (10, "Agent10_DREdge", "Edge-Deployed Retinopathy Screening"),
];

const SAMPLE_RECORDS: &[(&str, &str)] = &[
    ("risk", "MIMIC-IV: Federated risk prediction 91% AUROC."),
    ("alz", "Speech biomarkers for Alzheimer's."),
    ("dr", "Diabetic retinopathy screening APTOS."),
];

/// All catalog entries in id order.
pub fn projects() -> &'static [CatalogEntry] {
    PROJECTS
}

/// The fixed registry written in literal fallback mode.
pub fn literal_fallback() -> Registry {
    LITERAL_FALLBACK
        .iter()
        .map(|(id, name, description)| (AgentId(*id), AgentDescriptor::active(*name, *description)))
        .collect()
}

/// The three-record sample evidence dataset.
pub fn sample_records() -> Vec<SampleRecord> {
    SAMPLE_RECORDS
        .iter()
        .map(|(query, text)| SampleRecord {
            query: (*query).to_string(),
            text: (*text).to_string(),
        })
        .collect()
}
