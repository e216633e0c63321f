//! `mediforge gen-agents` — build and write the agent registry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mediforge_build::{
    builder, generator, BuildSource, GenAgentsOptions, GeneratorConfig, WriteResult,
};
use mediforge_core::paths::REGISTRY_FILE;
use mediforge_renderer::Renderer;

use crate::FallbackModeArg;

/// Arguments for `mediforge gen-agents`.
#[derive(Args, Debug)]
pub struct GenAgentsArgs {
    /// Registry output path.
    #[arg(long, short = 'o', default_value = REGISTRY_FILE)]
    pub output: PathBuf,

    /// Registry written without live generation: literal | templated.
    #[arg(long, value_name = "MODE", default_value = "literal")]
    pub fallback: FallbackModeArg,

    /// Show what would be written without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,
}

impl GenAgentsArgs {
    pub fn run(self) -> Result<()> {
        let config = GeneratorConfig::from_env();
        let availability = generator::resolve(&config);
        let renderer = Renderer::new().context("failed to load templates")?;
        let options = GenAgentsOptions {
            output: self.output,
            fallback: self.fallback.into(),
            dry_run: self.dry_run,
        };

        let result = builder::gen_agents(availability, &renderer, &options).with_context(|| {
            format!("failed to write registry to '{}'", options.output.display())
        })?;

        let prefix = if self.dry_run { "[dry-run] " } else { "" };
        match &result.source {
            BuildSource::Fallback { reason, mode } => {
                println!("{prefix}⚠ {reason}; wrote {mode} mock registry for local test.");
            }
            BuildSource::Live { failures } => {
                for (id, descriptor) in result.registry.iter() {
                    println!("✓ Agent {id} generated for {}", descriptor.description);
                }
                for failure in failures {
                    println!("✗ Agent {}: {}", failure.id, failure.message);
                }
            }
        }

        let verb = match &result.write {
            WriteResult::Written { .. } => "written",
            WriteResult::Unchanged { .. } => "unchanged",
            WriteResult::WouldWrite { .. } => "would write",
        };
        println!(
            "{prefix}✓ {} ({} agents, {verb})",
            result.write.path().display(),
            result.registry.len()
        );
        Ok(())
    }
}
