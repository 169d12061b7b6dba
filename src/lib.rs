//! # codemap
//!
//! Structural repository indexing for visualization front ends.
//!
//! codemap walks a source tree and produces a typed containment graph —
//! folders, files, and the classes/functions they define — using
//! indentation to infer nesting instead of a full language parser. It is a
//! best-effort structural index built for "cheap indexing of many files
//! quickly", not a compiler front end: no AST, no import or call
//! resolution, no syntax validation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use codemap::{build_snapshot, ScanConfig};
//! use std::path::Path;
//!
//! let config = ScanConfig::default();
//! let snapshot = build_snapshot(Path::new("."), &config)?;
//!
//! // One root folder node; every other node has exactly one parent.
//! let root = snapshot.root().expect("snapshot always has a root");
//! for child in snapshot.children_of(&root.id) {
//!     println!("{} ({})", child.label, child.kind);
//! }
//! # Ok::<(), codemap::CodemapError>(())
//! ```
//!
//! Each scan returns a fresh, self-contained [`GraphSnapshot`]; prior
//! snapshots are discarded wholesale, and diffing (by stable node id) is
//! the caller's concern.

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod scan;

// Re-exports for convenience
pub use config::ScanConfig;
pub use error::{CodemapError, Result};
pub use graph::{
    build_snapshot, Edge, EdgeKind, GraphBuilder, GraphSnapshot, Node, NodeKind, SnapshotStats,
};
pub use scan::{DefinitionMatcher, FileScanner};
