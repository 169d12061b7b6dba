//! Snapshot accumulation and queries.
//!
//! One [`GraphBuilder`] is owned by a single in-flight scan and passed by
//! reference through the recursive walk. Nodes append in visitation order,
//! containment edges are derived from each node's `parent_id`, and the
//! finished [`GraphSnapshot`] is immutable. Overlapping scans never share a
//! builder; each call gets fresh accumulator state.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::types::{Edge, EdgeKind, Node, NodeKind};

/// A complete scan result: nodes and derived containment edges, in
/// parent-before-child order. Produced whole, consumed whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// The single node with no parent (the scanned directory).
    pub fn root(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.parent_id.is_none())
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All direct children of a node, in emission order.
    pub fn children_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Node> {
        self.nodes
            .iter()
            .filter(move |n| n.parent_id.as_deref() == Some(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Summary counts for the CLI and for consumers that only want sizes.
    pub fn stats(&self) -> SnapshotStats {
        let mut stats = SnapshotStats {
            total_nodes: self.nodes.len(),
            total_edges: self.edges.len(),
            ..SnapshotStats::default()
        };
        for node in &self.nodes {
            match node.kind {
                NodeKind::Folder => stats.folder_count += 1,
                NodeKind::File => stats.file_count += 1,
                NodeKind::Class => stats.class_count += 1,
                NodeKind::Function => stats.function_count += 1,
            }
        }
        stats
    }
}

/// Statistics about a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub folder_count: usize,
    pub file_count: usize,
    pub class_count: usize,
    pub function_count: usize,
}

/// Append-only accumulator for one scan.
///
/// `add_node` pushes the node and, for non-root nodes, the mirrored
/// containment edge — so parent-before-child ordering and the one-inbound-
/// edge-per-node invariant hold by construction.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    seen_ids: HashSet<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and derive its containment edge.
    ///
    /// Ids are deterministic functions of path/line/name, so a duplicate
    /// here means the id construction rule is broken, not a runtime
    /// condition to recover from.
    pub fn add_node(&mut self, node: Node) {
        let fresh = self.seen_ids.insert(node.id.clone());
        debug_assert!(fresh, "duplicate node id: {}", node.id);
        if let Some(parent_id) = &node.parent_id {
            debug_assert!(
                self.seen_ids.contains(parent_id),
                "parent {} emitted after child {}",
                parent_id,
                node.id
            );
            self.edges.push(Edge {
                source: parent_id.clone(),
                target: node.id.clone(),
                relationship: EdgeKind::Contains,
            });
        }
        self.nodes.push(node);
    }

    /// Number of nodes appended so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and freeze the snapshot.
    pub fn finish(self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn root_node() -> Node {
        Node::new_folder(Path::new("/repo"), None)
    }

    #[test]
    fn test_root_has_no_edge() {
        let mut builder = GraphBuilder::new();
        builder.add_node(root_node());
        let snapshot = builder.finish();

        assert_eq!(snapshot.node_count(), 1);
        assert_eq!(snapshot.edge_count(), 0);
        assert_eq!(snapshot.root().unwrap().label, "repo");
    }

    #[test]
    fn test_child_derives_contains_edge() {
        let mut builder = GraphBuilder::new();
        builder.add_node(root_node());
        builder.add_node(Node::new_file(
            Path::new("/repo/app.py"),
            "/repo".to_string(),
        ));
        let snapshot = builder.finish();

        assert_eq!(snapshot.edge_count(), 1);
        let edge = &snapshot.edges[0];
        assert_eq!(edge.source, "/repo");
        assert_eq!(edge.target, "/repo/app.py");
        assert_eq!(edge.relationship, EdgeKind::Contains);
    }

    #[test]
    fn test_children_of_preserves_order() {
        let mut builder = GraphBuilder::new();
        builder.add_node(root_node());
        builder.add_node(Node::new_file(Path::new("/repo/a.py"), "/repo".to_string()));
        builder.add_node(Node::new_file(Path::new("/repo/b.py"), "/repo".to_string()));
        let snapshot = builder.finish();

        let labels: Vec<&str> = snapshot
            .children_of("/repo")
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(labels, vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_stats_counts_by_kind() {
        let mut builder = GraphBuilder::new();
        builder.add_node(root_node());
        builder.add_node(Node::new_file(Path::new("/repo/a.py"), "/repo".to_string()));
        builder.add_node(Node::new_definition(
            "A",
            NodeKind::Class,
            Path::new("/repo/a.py"),
            0,
            3,
            "/repo/a.py".to_string(),
            "class A:".to_string(),
        ));
        let snapshot = builder.finish();

        let stats = snapshot.stats();
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.total_edges, 2);
        assert_eq!(stats.folder_count, 1);
        assert_eq!(stats.file_count, 1);
        assert_eq!(stats.class_count, 1);
        assert_eq!(stats.function_count, 0);
    }

    #[test]
    #[should_panic(expected = "duplicate node id")]
    fn test_duplicate_id_is_a_bug() {
        let mut builder = GraphBuilder::new();
        builder.add_node(root_node());
        builder.add_node(root_node());
    }
}
