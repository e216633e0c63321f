//! MediForge — agent registry and placeholder model tooling.
//!
//! # Usage
//!
//! ```text
//! mediforge gen-agents [--output <path>] [--fallback literal|templated] [--dry-run]
//! mediforge export [--base-dir <dir>] [--count <n>]
//! mediforge orchestrate <query> [--registry <path>] [--dataset <path>] [--out <path>]
//! mediforge agents [--registry <path>] [--json]
//! ```

mod commands;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    agents::AgentsArgs, export::ExportArgs, gen_agents::GenAgentsArgs,
    orchestrate::OrchestrateArgs,
};
use mediforge_core::FallbackMode;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "mediforge",
    version,
    about = "Build the MediForge agent registry and placeholder model assets",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the agent registry (falls back to mock data without an API key).
    GenAgents(GenAgentsArgs),

    /// Export placeholder models and the sample dataset.
    Export(ExportArgs),

    /// Run the mock inference cascade for a query and print the report.
    Orchestrate(OrchestrateArgs),

    /// List the agents in a registry file.
    Agents(AgentsArgs),
}

// ---------------------------------------------------------------------------
// Shared FallbackMode argument — parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `FallbackMode` from CLI args.
#[derive(Debug, Clone, Default)]
pub struct FallbackModeArg(pub FallbackMode);

impl FromStr for FallbackModeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "literal" => Ok(Self(FallbackMode::Literal)),
            "templated" => Ok(Self(FallbackMode::Templated)),
            other => Err(format!(
                "unknown fallback mode '{other}'; expected: literal, templated"
            )),
        }
    }
}

impl fmt::Display for FallbackModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<FallbackModeArg> for FallbackMode {
    fn from(m: FallbackModeArg) -> Self {
        m.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::GenAgents(args) => args.run(),
        Commands::Export(args) => args.run(),
        Commands::Orchestrate(args) => args.run(),
        Commands::Agents(args) => args.run(),
    }
}
