//! CLI definitions for codemap.
//!
//! Commands:
//! - scan:  full scan, snapshot as JSON
//! - tree:  human-readable outline of the snapshot
//! - stats: snapshot statistics as JSON

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codemap")]
#[command(about = "Structural repository indexer", long_about = None)]
pub struct Cli {
    /// Directory to scan (default: current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Scan config file (TOML); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the tree and emit the node/edge snapshot as JSON
    Scan {
        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Print an indented outline of folders, files and definitions
    Tree,

    /// Show snapshot statistics
    Stats,
}
