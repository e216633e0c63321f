//! `mediforge agents` — list the registry.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use mediforge_core::{paths::REGISTRY_FILE, registry, AgentStatus, Registry};

/// Arguments for `mediforge agents`.
#[derive(Args, Debug)]
pub struct AgentsArgs {
    /// Registry file to read.
    #[arg(long, default_value = REGISTRY_FILE)]
    pub registry: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AgentRow {
    id: u32,
    name: String,
    description: String,
    status: AgentStatus,
}

#[derive(Tabled)]
struct AgentTableRow {
    #[tabled(rename = "id")]
    id: u32,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "description")]
    description: String,
    #[tabled(rename = "status")]
    status: String,
}

impl AgentsArgs {
    pub fn run(self) -> Result<()> {
        let registry = registry::load_at(&self.registry)
            .with_context(|| format!("failed to load registry '{}'", self.registry.display()))?;
        let rows = rows(&registry);
        if self.json {
            let payload = serde_json::json!({
                "registry": self.registry.display().to_string(),
                "agents": rows,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize agents JSON")?
            );
        } else {
            print_table(&self.registry, rows);
        }
        Ok(())
    }
}

fn rows(registry: &Registry) -> Vec<AgentRow> {
    registry
        .iter()
        .map(|(id, d)| AgentRow {
            id: id.0,
            name: d.name.0.clone(),
            description: d.description.clone(),
            status: d.status,
        })
        .collect()
}

fn print_table(path: &std::path::Path, rows: Vec<AgentRow>) {
    println!("{} {}", "REGISTRY".bold(), path.display());
    if rows.is_empty() {
        println!("{}", "no agents".bright_black());
        return;
    }
    let count = rows.len();
    let table_rows: Vec<AgentTableRow> = rows
        .into_iter()
        .map(|row| AgentTableRow {
            id: row.id,
            name: row.name,
            description: row.description,
            status: status_label(row.status),
        })
        .collect();
    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("{count} agent(s)");
}

fn status_label(status: AgentStatus) -> String {
    match status {
        AgentStatus::Active => status.to_string().green().bold().to_string(),
    }
}
