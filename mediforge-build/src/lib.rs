//! # mediforge-build
//!
//! Registry generation, placeholder model export and the mock orchestrator.
//!
//! Call [`builder::gen_agents`] to build and write the agent registry,
//! [`export::export`] to write placeholder models and the sample dataset, and
//! [`orchestrator::run`] to render a report for a query.

pub mod builder;
pub mod error;
pub mod export;
#[cfg(feature = "gemini")]
pub mod gemini;
pub mod generator;
pub mod onnx;
pub mod orchestrator;
pub mod writer;

pub use builder::{gen_agents, BuildSource, FallbackReason, GenAgentsOptions, GenAgentsResult};
pub use error::{BuildError, GenerateError};
pub use export::{ExportReport, ModelExport};
pub use generator::{Availability, Generation, Generator, GeneratorConfig};
pub use writer::WriteResult;
