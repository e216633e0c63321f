//! MediForge core library — domain types, the project catalog, registry and
//! dataset persistence, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`catalog`] — the compile-time project catalog and literal fallback data
//! - [`paths`] — default output locations
//! - [`error`] — [`StoreError`]
//! - [`registry`] / [`dataset`] — load / encode

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod paths;
pub mod registry;
pub mod types;

pub use catalog::CatalogEntry;
pub use error::StoreError;
pub use types::{
    AgentDescriptor, AgentId, AgentName, AgentStatus, FallbackMode, Registry, SampleRecord,
};
