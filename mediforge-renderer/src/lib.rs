//! # mediforge-renderer
//!
//! Tera-based template engine that renders agent names, generation prompts
//! and orchestration reports.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mediforge_core::catalog;
//! use mediforge_renderer::Renderer;
//!
//! fn print_names() {
//!     if let Ok(renderer) = Renderer::new() {
//!         for entry in catalog::projects() {
//!             if let Ok(name) = renderer.agent_name(entry) {
//!                 println!("{}: {name}", entry.id);
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{PredictionCtx, ReportCtx};
pub use engine::{Renderer, TemplateEngine, TemplateKind};
pub use error::RenderError;
