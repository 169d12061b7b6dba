//! Containment graph module — the structural backbone of codemap.
//!
//! Provides the plain-data node/edge model, the append-only snapshot
//! builder, and the directory walk that produces a snapshot.

pub mod builder;
pub mod snapshot;
pub mod types;

pub use builder::build_snapshot;
pub use snapshot::{GraphBuilder, GraphSnapshot, SnapshotStats};
pub use types::{Edge, EdgeKind, Node, NodeKind};
