//! Scope tracking across one file.
//!
//! Nesting is purely a function of indentation ordering; there is no close
//! signal in the input. The stack is seeded with a sentinel frame for the
//! enclosing file at depth -1, so depth-0 definitions always resolve to the
//! file as their parent.

/// One open scope.
#[derive(Debug, Clone)]
struct ScopeFrame {
    /// Indentation depth of the definition line. The sentinel sits at -1.
    depth: isize,
    /// Node id owning this scope.
    node_id: String,
}

/// Stack of open scopes, ordered by increasing depth.
#[derive(Debug)]
pub struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    /// New stack for one file, seeded with the file's sentinel frame.
    pub fn new(file_id: &str) -> Self {
        Self {
            frames: vec![ScopeFrame {
                depth: -1,
                node_id: file_id.to_string(),
            }],
        }
    }

    /// Close every scope at depth >= `depth` and return the parent id for a
    /// new definition at that depth.
    ///
    /// Equal depth closes: a definition at the same depth as the current
    /// top is a sibling, never a child. The sentinel is never popped.
    pub fn parent_for(&mut self, depth: usize) -> &str {
        while self.frames.len() > 1
            && self.frames.last().map(|f| f.depth).unwrap_or(-1) >= depth as isize
        {
            self.frames.pop();
        }
        // The sentinel guarantees a non-empty stack.
        &self.frames[self.frames.len() - 1].node_id
    }

    /// Open the scope of a just-emitted definition.
    pub fn open(&mut self, depth: usize, node_id: String) {
        self.frames.push(ScopeFrame {
            depth: depth as isize,
            node_id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_parent_is_file() {
        let mut stack = ScopeStack::new("file.py");
        assert_eq!(stack.parent_for(0), "file.py");
    }

    #[test]
    fn test_deeper_definition_nests() {
        let mut stack = ScopeStack::new("file.py");
        assert_eq!(stack.parent_for(0), "file.py");
        stack.open(0, "class_a".to_string());
        assert_eq!(stack.parent_for(4), "class_a");
    }

    #[test]
    fn test_equal_depth_is_sibling_not_child() {
        let mut stack = ScopeStack::new("file.py");
        stack.open(0, "def_a".to_string());
        // Same depth: def_a's scope closes, parent falls back to the file.
        assert_eq!(stack.parent_for(0), "file.py");
    }

    #[test]
    fn test_dedent_closes_multiple_scopes() {
        let mut stack = ScopeStack::new("file.py");
        stack.open(0, "class_a".to_string());
        stack.open(4, "method_m".to_string());
        stack.open(8, "inner".to_string());
        // Back at method depth: inner and method_m close, class_a is parent.
        assert_eq!(stack.parent_for(4), "class_a");
    }

    #[test]
    fn test_sentinel_survives_depth_zero() {
        let mut stack = ScopeStack::new("file.py");
        stack.open(0, "a".to_string());
        stack.open(4, "b".to_string());
        assert_eq!(stack.parent_for(0), "file.py");
        // Still usable afterwards
        assert_eq!(stack.parent_for(0), "file.py");
    }
}
