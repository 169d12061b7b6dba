//! Core types for the codemap containment graph.
//!
//! Defines node/edge kinds and the plain-data snapshot shape handed to
//! visualization consumers. Field names serialize in camelCase so the
//! snapshot is directly usable as JSON by a front end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// The kind of a node in the containment graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A directory.
    Folder,
    /// A source file.
    File,
    /// A class definition.
    Class,
    /// A function or method definition.
    Function,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Folder => write!(f, "folder"),
            NodeKind::File => write!(f, "file"),
            NodeKind::Class => write!(f, "class"),
            NodeKind::Function => write!(f, "function"),
        }
    }
}

/// The kind of an edge. Containment is the only relationship this graph
/// carries; edges exist solely to mirror `parent_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Parent holds child (folder -> file, file -> class, class -> method).
    Contains,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Contains => write!(f, "contains"),
        }
    }
}

/// One structural entity: a folder, file, class or function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique within a snapshot. Deterministic: the path for folders and
    /// files, `path:line:name` for definitions, so re-scans of unchanged
    /// code yield identical ids.
    pub id: String,
    /// Display name: base name for folders/files, identifier for definitions.
    pub label: String,
    /// What this node represents.
    pub kind: NodeKind,
    /// Absolute path of the underlying folder/file. Definition nodes point
    /// at their containing file.
    pub source_path: PathBuf,
    /// 0-based line where a definition begins; 0 for folders and files.
    pub start_line: usize,
    /// 0-based last line of a definition block. Absent for folders/files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,
    /// Id of the logically enclosing node. `None` only for the scan root.
    pub parent_id: Option<String>,
    /// Short excerpt (first lines of the block). Definition nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl Node {
    /// Node for a directory. `parent_id` is `None` only for the scan root.
    pub fn new_folder(path: &Path, parent_id: Option<String>) -> Self {
        Self {
            id: path.to_string_lossy().into_owned(),
            label: base_name(path),
            kind: NodeKind::Folder,
            source_path: path.to_path_buf(),
            start_line: 0,
            end_line: None,
            parent_id,
            snippet: None,
        }
    }

    /// Node for a source file inside `parent_id`.
    pub fn new_file(path: &Path, parent_id: String) -> Self {
        Self {
            id: path.to_string_lossy().into_owned(),
            label: base_name(path),
            kind: NodeKind::File,
            source_path: path.to_path_buf(),
            start_line: 0,
            end_line: None,
            parent_id: Some(parent_id),
            snippet: None,
        }
    }

    /// Node for a class/function definition found in `file_path`.
    pub fn new_definition(
        name: &str,
        kind: NodeKind,
        file_path: &Path,
        start_line: usize,
        end_line: usize,
        parent_id: String,
        snippet: String,
    ) -> Self {
        Self {
            id: format!("{}:{}:{}", file_path.to_string_lossy(), start_line, name),
            label: name.to_string(),
            kind,
            source_path: file_path.to_path_buf(),
            start_line,
            end_line: Some(end_line),
            parent_id: Some(parent_id),
            snippet: Some(snippet),
        }
    }
}

/// A directed containment edge, derived from a node's `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Id of the containing node.
    pub source: String,
    /// Id of the contained node.
    pub target: String,
    /// Always [`EdgeKind::Contains`].
    pub relationship: EdgeKind,
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
