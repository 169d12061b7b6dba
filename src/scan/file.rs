//! Per-file scanning: one file's text in, definition nodes and edges out.

use std::fs;
use tracing::debug;

use crate::config::ScanConfig;
use crate::graph::{GraphBuilder, Node};

use super::extent::block_end;
use super::indent::indent_depth;
use super::matcher::{is_skippable, DefinitionMatcher};
use super::scope::ScopeStack;

/// Extracts definition nodes from source files.
///
/// One scanner (with its compiled matcher) serves a whole walk; all mutable
/// state lives in the per-call [`ScopeStack`] and the caller's builder.
#[derive(Debug)]
pub struct FileScanner {
    matcher: DefinitionMatcher,
    snippet_lines: usize,
}

impl FileScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            matcher: DefinitionMatcher::new(),
            snippet_lines: config.snippet_lines,
        }
    }

    /// Scan the file behind `file_node`, appending definition nodes to the
    /// builder. Unreadable or non-UTF-8 files are a silent skip: the file
    /// node stays in the graph with zero definition children.
    pub fn scan_file(&self, file_node: &Node, builder: &mut GraphBuilder) {
        let source = match fs::read_to_string(&file_node.source_path) {
            Ok(source) => source,
            Err(e) => {
                debug!(
                    file = %file_node.source_path.display(),
                    error = %e,
                    "skipping unreadable file"
                );
                return;
            }
        };
        self.scan_source(&source, file_node, builder);
    }

    /// Scan already-loaded source text. Line numbers are 0-based indexes
    /// into the text's own line splitting, so downstream excerpting by
    /// (start, end) range is exact.
    ///
    /// Nodes are emitted in strictly increasing `start_line` order.
    pub fn scan_source(&self, source: &str, file_node: &Node, builder: &mut GraphBuilder) {
        let lines: Vec<&str> = source.lines().collect();
        let mut scopes = ScopeStack::new(&file_node.id);

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if is_skippable(trimmed) {
                continue;
            }
            let Some(def) = self.matcher.match_line(trimmed) else {
                continue;
            };

            let depth = indent_depth(line);
            let end = block_end(&lines, i, depth);
            let parent_id = scopes.parent_for(depth).to_string();

            let snippet_end = end.min(i + self.snippet_lines.saturating_sub(1));
            let snippet = lines[i..=snippet_end].join("\n");

            let node = Node::new_definition(
                &def.name,
                def.kind,
                &file_node.source_path,
                i,
                end,
                parent_id,
                snippet,
            );
            scopes.open(depth, node.id.clone());
            builder.add_node(node);
        }
    }
}
