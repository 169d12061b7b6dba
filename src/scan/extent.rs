//! Block extent resolution.
//!
//! Indentation is the only block delimiter this crate understands: a block
//! ends right before the first meaningful line that dedents back to (or
//! past) the opener. Blocks closed by explicit markers in other syntaxes
//! are out of scope by design.

use super::indent::indent_depth;
use super::matcher::is_skippable;

/// Resolve the 0-based end line of the block opened at `start` with
/// indentation `depth`.
///
/// Scans forward from the line after the opener; the first non-blank,
/// non-comment line with indentation `<= depth` closes the block at the
/// line immediately before it. Without such a line the block runs to the
/// last line of the file. A block with no body resolves to `end == start`.
pub fn block_end(lines: &[&str], start: usize, depth: usize) -> usize {
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        if is_skippable(line.trim()) {
            continue;
        }
        if indent_depth(line) <= depth {
            return i - 1;
        }
    }
    lines.len().saturating_sub(1)
}
