//! Snapshot builder — walks a directory tree and builds the containment graph.
//!
//! Recursive pre-order walk: folders first, then their entries in
//! directory-read order, with eligible source files handed to the file
//! scanner. Per-entry failures (permissions, broken symlinks, races with
//! deletion) degrade to skips; the walk itself never aborts.

use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::error::{CodemapError, Result};
use crate::scan::FileScanner;

use super::snapshot::{GraphBuilder, GraphSnapshot};
use super::types::Node;

/// Run a full scan of `root` and return one immutable snapshot.
///
/// The only fatal condition is the root itself being missing or not a
/// directory. Everything below the root degrades to skips, so at worst the
/// snapshot is smaller than expected.
pub fn build_snapshot(root: &Path, config: &ScanConfig) -> Result<GraphSnapshot> {
    let root = root
        .canonicalize()
        .map_err(|_| CodemapError::NotADirectory(root.to_path_buf()))?;
    if !root.is_dir() {
        return Err(CodemapError::NotADirectory(root));
    }

    let mut builder = GraphBuilder::new();
    let scanner = FileScanner::new(config);

    let root_node = Node::new_folder(&root, None);
    let root_id = root_node.id.clone();
    builder.add_node(root_node);

    walk_directory(&root, &root_id, config, &scanner, &mut builder);

    let snapshot = builder.finish();
    debug!(
        nodes = snapshot.node_count(),
        edges = snapshot.edge_count(),
        root = %root.display(),
        "scan complete"
    );
    Ok(snapshot)
}

/// Visit one directory's entries, emitting nodes under `parent_id`.
fn walk_directory(
    dir: &Path,
    parent_id: &str,
    config: &ScanConfig,
    scanner: &FileScanner,
    builder: &mut GraphBuilder,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if config.is_excluded(&name) {
            trace!(entry = %name, "excluded by policy");
            continue;
        }

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                debug!(entry = %name, error = %e, "skipping entry with unreadable type");
                continue;
            }
        };
        let path = entry.path();

        if file_type.is_dir() {
            let folder = Node::new_folder(&path, Some(parent_id.to_string()));
            let folder_id = folder.id.clone();
            builder.add_node(folder);
            walk_directory(&path, &folder_id, config, scanner, builder);
        } else if file_type.is_file() && config.is_source_file(&name) {
            let file_node = Node::new_file(&path, parent_id.to_string());
            builder.add_node(file_node.clone());
            scanner.scan_file(&file_node, builder);
        }
        // Unsupported files and symlinks: silent skip.
    }
}
