//! codemap CLI - structural repository indexing.
//!
//! Usage:
//!   codemap scan                  # Snapshot of . as pretty JSON
//!   codemap -r path scan -o g.json
//!   codemap tree                  # Indented outline
//!   codemap stats                 # Node/edge counts

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use codemap::cli::{Cli, Commands};
use codemap::{build_snapshot, GraphSnapshot, Node, ScanConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };
    let snapshot = build_snapshot(&cli.root, &config)?;

    match cli.command {
        Commands::Scan { output, compact } => {
            let json = if compact {
                serde_json::to_string(&snapshot)?
            } else {
                serde_json::to_string_pretty(&snapshot)?
            };
            match output {
                Some(path) => std::fs::write(path, json)?,
                None => println!("{}", json),
            }
        }

        Commands::Tree => {
            if let Some(root) = snapshot.root() {
                print_subtree(&snapshot, root, 0);
            }
        }

        Commands::Stats => {
            let stats = snapshot.stats();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

fn print_subtree(snapshot: &GraphSnapshot, node: &Node, depth: usize) {
    println!("{}{} ({})", "  ".repeat(depth), node.label, node.kind);
    for child in snapshot.children_of(&node.id) {
        print_subtree(snapshot, child, depth + 1);
    }
}
